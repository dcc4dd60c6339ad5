//! Contest kinds and lifecycle.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contest format. Declaration order is the listing order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestType {
    #[default]
    Mega,
    HeadToHead,
    Practice,
    Premium,
}

impl ContestType {
    pub const ALL: [ContestType; 4] = [
        ContestType::Mega,
        ContestType::HeadToHead,
        ContestType::Practice,
        ContestType::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContestType::Mega => "MEGA",
            ContestType::HeadToHead => "HEAD_TO_HEAD",
            ContestType::Practice => "PRACTICE",
            ContestType::Premium => "PREMIUM",
        }
    }
}

impl fmt::Display for ContestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContestType {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "MEGA" => Ok(ContestType::Mega),
            "HEAD_TO_HEAD" | "H2H" => Ok(ContestType::HeadToHead),
            "PRACTICE" => Ok(ContestType::Practice),
            "PREMIUM" => Ok(ContestType::Premium),
            _ => Err(FantasyError::InvalidContestType {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestStatus {
    #[default]
    Created,
    Running,
    Completed,
    Canceled,
}

impl ContestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContestStatus::Created => "CREATED",
            ContestStatus::Running => "RUNNING",
            ContestStatus::Completed => "COMPLETED",
            ContestStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContestStatus {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CREATED" => Ok(ContestStatus::Created),
            "RUNNING" => Ok(ContestStatus::Running),
            "COMPLETED" => Ok(ContestStatus::Completed),
            "CANCELED" | "CANCELLED" => Ok(ContestStatus::Canceled),
            _ => Err(FantasyError::InvalidContestStatus {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_type_parse() {
        assert_eq!("h2h".parse::<ContestType>().unwrap(), ContestType::HeadToHead);
        assert_eq!(
            "head-to-head".parse::<ContestType>().unwrap(),
            ContestType::HeadToHead
        );
        for contest_type in ContestType::ALL {
            assert_eq!(
                contest_type.as_str().parse::<ContestType>().unwrap(),
                contest_type
            );
        }
        assert!("grand".parse::<ContestType>().is_err());
    }

    #[test]
    fn test_contest_serde_names() {
        assert_eq!(
            serde_json::to_string(&ContestType::HeadToHead).unwrap(),
            "\"HEAD_TO_HEAD\""
        );
        let status: ContestStatus = serde_json::from_str("\"RUNNING\"").unwrap();
        assert_eq!(status, ContestStatus::Running);
        assert!("paused".parse::<ContestStatus>().is_err());
    }
}
