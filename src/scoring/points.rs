//! Exact fantasy point values.

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::FantasyError;

/// A non-negative fantasy point total.
///
/// The only fraction the scoring table can produce comes from the 1.5x vice-captain
/// multiplier, so points are held as a whole number of half points. That keeps team
/// totals exact no matter how many players are summed, and the decimal string form
/// (`"87"`, `"130.5"`) round-trips without loss.
///
/// # Examples
///
/// ```rust
/// use ipl_fantasy::FantasyPoints;
///
/// let points = FantasyPoints::from_halves(261);
/// assert_eq!(points.to_string(), "130.5");
/// assert_eq!("130.5".parse::<FantasyPoints>().unwrap(), points);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FantasyPoints {
    halves: u64,
}

impl FantasyPoints {
    pub const ZERO: FantasyPoints = FantasyPoints { halves: 0 };

    pub fn from_whole(points: u64) -> Self {
        Self {
            halves: points.saturating_mul(2),
        }
    }

    pub fn from_halves(halves: u64) -> Self {
        Self { halves }
    }

    pub fn halves(&self) -> u64 {
        self.halves
    }

    pub fn is_whole(&self) -> bool {
        self.halves % 2 == 0
    }

    /// Lossy view for display math only; never persist this.
    pub fn as_f64(&self) -> f64 {
        self.halves as f64 / 2.0
    }
}

impl fmt::Display for FantasyPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.halves / 2)
        } else {
            write!(f, "{}.5", self.halves / 2)
        }
    }
}

impl FromStr for FantasyPoints {
    type Err = FantasyError;

    /// Accepts the decimal forms this type writes, plus trailing zeros (`"12.50"`, `"7.0"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FantasyError::InvalidPoints {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: u64 = whole.parse().map_err(|_| invalid())?;

        let fraction = fraction.trim_end_matches('0');
        let half = match fraction {
            "" => 0,
            "5" => 1,
            _ => return Err(invalid()),
        };

        whole
            .checked_mul(2)
            .and_then(|h| h.checked_add(half))
            .map(Self::from_halves)
            .ok_or_else(invalid)
    }
}

impl Add for FantasyPoints {
    type Output = FantasyPoints;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_halves(self.halves.saturating_add(rhs.halves))
    }
}

impl Sum for FantasyPoints {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FantasyPoints::ZERO, Add::add)
    }
}

impl Serialize for FantasyPoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FantasyPoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
