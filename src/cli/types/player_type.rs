//! Cricket player types used by the playing XI composition rule.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four player categories a fantasy XI must span.
///
/// A legal roster carries between one and five players of every type.
///
/// # Examples
///
/// ```rust
/// use ipl_fantasy::PlayerType;
///
/// let wk: PlayerType = "wk".parse().unwrap();
/// assert_eq!(wk, PlayerType::WicketKeeper);
/// assert_eq!(wk.to_string(), "WICKET_KEEPER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerType {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerType {
    /// Every player type, in the order roster checks report them.
    pub const ALL: [PlayerType; 4] = [
        PlayerType::Batsman,
        PlayerType::Bowler,
        PlayerType::AllRounder,
        PlayerType::WicketKeeper,
    ];

    /// Stable storage form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerType::Batsman => "BATSMAN",
            PlayerType::Bowler => "BOWLER",
            PlayerType::AllRounder => "ALL_ROUNDER",
            PlayerType::WicketKeeper => "WICKET_KEEPER",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerType {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "BATSMAN" | "BATTER" | "BAT" => Ok(PlayerType::Batsman),
            "BOWLER" | "BOWL" => Ok(PlayerType::Bowler),
            "ALL_ROUNDER" | "ALLROUNDER" | "AR" => Ok(PlayerType::AllRounder),
            "WICKET_KEEPER" | "WICKETKEEPER" | "WK" => Ok(PlayerType::WicketKeeper),
            _ => Err(FantasyError::InvalidPlayerType {
                value: s.to_string(),
            }),
        }
    }
}
