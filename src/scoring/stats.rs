//! Scoring inputs: per-match player statistics and the roster role.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::FantasyError;

/// Scorecard numbers arrive from whatever provider the ingestion side used, so a field
/// may be missing, `null`, a numeric string, or junk. Anything that is not a
/// non-negative number counts as zero.
fn de_lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Deserialize::deserialize(deserializer)?;
    let count = match raw {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    };
    Ok(count.map_or(0, |c| u32::try_from(c).unwrap_or(u32::MAX)))
}

/// One player's raw numbers for one match.
///
/// Disciplines the player took no part in stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerMatchStats {
    #[serde(deserialize_with = "de_lenient_count")]
    pub runs: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub balls_faced: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub fours: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub sixes: u32,
    #[serde(alias = "wickets", deserialize_with = "de_lenient_count")]
    pub wickets_taken: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub maidens: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub catches: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub run_outs: u32,
    #[serde(deserialize_with = "de_lenient_count")]
    pub stumpings: u32,
}

impl PlayerMatchStats {
    /// Runs per hundred balls, rounded to two places. `None` if the player faced no balls.
    pub fn strike_rate(&self) -> Option<f64> {
        if self.balls_faced == 0 {
            return None;
        }
        let rate = f64::from(self.runs) * 100.0 / f64::from(self.balls_faced);
        Some((rate * 100.0).round() / 100.0)
    }
}

/// A player's role in a user's XI; selects the point multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    #[default]
    None,
    Captain,
    ViceCaptain,
}

impl PlayerRole {
    /// Role from the roster flags. Captain wins if both are set.
    pub fn from_flags(is_captain: bool, is_vice_captain: bool) -> Self {
        if is_captain {
            PlayerRole::Captain
        } else if is_vice_captain {
            PlayerRole::ViceCaptain
        } else {
            PlayerRole::None
        }
    }

    /// Multiplier expressed in half points per base point (x1 = 2, x1.5 = 3, x2 = 4).
    pub fn halves_per_point(&self) -> u64 {
        match self {
            PlayerRole::None => 2,
            PlayerRole::ViceCaptain => 3,
            PlayerRole::Captain => 4,
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerRole::None => "NONE",
            PlayerRole::Captain => "CAPTAIN",
            PlayerRole::ViceCaptain => "VICE_CAPTAIN",
        };
        f.write_str(s)
    }
}

impl FromStr for PlayerRole {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "NONE" | "" => Ok(PlayerRole::None),
            "CAPTAIN" | "C" => Ok(PlayerRole::Captain),
            "VICE_CAPTAIN" | "VICECAPTAIN" | "VC" => Ok(PlayerRole::ViceCaptain),
            _ => Err(FantasyError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}
