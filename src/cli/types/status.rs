//! Match lifecycle status.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a match is in its lifecycle. Rosters can only change while `Upcoming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
    Canceled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "UPCOMING",
            MatchStatus::Live => "LIVE",
            MatchStatus::Completed => "COMPLETED",
            MatchStatus::Canceled => "CANCELED",
        }
    }

    /// Whether user teams for this match may still be created or edited.
    pub fn accepts_roster_changes(&self) -> bool {
        matches!(self, MatchStatus::Upcoming)
    }

    /// Whether a match may move from `self` to `next`.
    ///
    /// Staying put is always allowed. Nothing goes back to `Upcoming`, and
    /// `Completed`/`Canceled` are final.
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        if *self == next {
            return true;
        }
        match (self, next) {
            (_, MatchStatus::Upcoming) => false,
            (MatchStatus::Completed | MatchStatus::Canceled, _) => false,
            _ => true,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UPCOMING" => Ok(MatchStatus::Upcoming),
            "LIVE" => Ok(MatchStatus::Live),
            "COMPLETED" | "COMPLETE" => Ok(MatchStatus::Completed),
            "CANCELED" | "CANCELLED" => Ok(MatchStatus::Canceled),
            _ => Err(FantasyError::InvalidMatchStatus {
                value: s.to_string(),
            }),
        }
    }
}
