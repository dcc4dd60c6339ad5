//! ID types for fantasy cricket entities.
//!
//! Every identifier in the system is an opaque string (scorecard providers and the
//! stored schema use text keys), wrapped so a `PlayerId` can never be passed where a
//! `TeamId` is expected.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for player IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ipl_fantasy::PlayerId;
    ///
    /// let id = PlayerId::new("8733");
    /// assert_eq!(id.as_str(), "8733");
    /// assert_eq!(id.to_string(), "8733");
    /// ```
    PlayerId
);
string_id!(
    /// A real-world team (franchise or national side).
    TeamId
);
string_id!(
    /// A scheduled match between two teams.
    MatchId
);
string_id!(
    /// A user's fantasy XI for one match.
    UserTeamId
);
string_id!(ContestId);
string_id!(UserId);
