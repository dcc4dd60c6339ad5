//! Playing XI composition rules.
//!
//! A fantasy XI is checked against its match's two teams. Checks run in a fixed order and
//! the first broken rule is reported, so the same bad roster always gets the same message.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::cli::types::{
    ids::{PlayerId, TeamId},
    player_type::PlayerType,
};
use crate::scoring::PlayerRole;

#[cfg(test)]
mod tests;

pub const ROSTER_SIZE: usize = 11;
pub const MIN_PER_TEAM: usize = 5;
pub const MAX_PER_TEAM: usize = 6;
pub const MIN_PER_TYPE: usize = 1;
pub const MAX_PER_TYPE: usize = 5;

/// One selected player, already resolved to a real team and player type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub origin_team_id: TeamId,
    pub player_type: PlayerType,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl RosterEntry {
    pub fn role(&self) -> PlayerRole {
        PlayerRole::from_flags(self.is_captain, self.is_vice_captain)
    }
}

/// A proposed XI, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSelection {
    pub players: Vec<RosterEntry>,
}

impl RosterSelection {
    pub fn new(players: Vec<RosterEntry>) -> Self {
        Self { players }
    }

    pub fn captain(&self) -> Option<&RosterEntry> {
        self.players.iter().find(|p| p.is_captain)
    }

    pub fn vice_captain(&self) -> Option<&RosterEntry> {
        self.players.iter().find(|p| p.is_vice_captain)
    }
}

/// Why a roster was rejected. Expected, user-facing outcomes rather than faults.
///
/// The display text is the bare reason; the fields carry detail for callers that want it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterViolation {
    #[error("wrong player count")]
    WrongPlayerCount { found: usize },

    #[error("duplicate player")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("invalid team distribution")]
    InvalidTeamDistribution,

    #[error("invalid type distribution")]
    InvalidTypeDistribution {
        player_type: PlayerType,
        count: usize,
    },

    #[error("invalid captain selection")]
    InvalidCaptainSelection { count: usize },

    #[error("invalid vice-captain selection")]
    InvalidViceCaptainSelection { count: usize },

    #[error("captain and vice-captain must differ")]
    CaptainIsViceCaptain { player_id: PlayerId },
}

/// Check a selection against the composition rules for a match between `team_a` and
/// `team_b`.
///
/// # Examples
///
/// ```rust
/// use ipl_fantasy::roster::{validate, RosterSelection, RosterViolation};
/// use ipl_fantasy::TeamId;
///
/// let empty = RosterSelection::default();
/// let verdict = validate(&empty, &TeamId::new("GT"), &TeamId::new("MI"));
/// assert_eq!(verdict, Err(RosterViolation::WrongPlayerCount { found: 0 }));
/// ```
pub fn validate(
    selection: &RosterSelection,
    team_a: &TeamId,
    team_b: &TeamId,
) -> Result<(), RosterViolation> {
    let players = &selection.players;

    if players.len() != ROSTER_SIZE {
        return Err(RosterViolation::WrongPlayerCount {
            found: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(ROSTER_SIZE);
    for entry in players {
        if !seen.insert(&entry.player_id) {
            return Err(RosterViolation::DuplicatePlayer {
                player_id: entry.player_id.clone(),
            });
        }
    }

    check_team_split(players, team_a, team_b)?;
    check_type_spread(players)?;

    let captains = players.iter().filter(|p| p.is_captain).count();
    if captains != 1 {
        return Err(RosterViolation::InvalidCaptainSelection { count: captains });
    }

    let vice_captains = players.iter().filter(|p| p.is_vice_captain).count();
    if vice_captains != 1 {
        return Err(RosterViolation::InvalidViceCaptainSelection {
            count: vice_captains,
        });
    }

    // Player ids are unique by now, so a shared captain is a single entry with both flags.
    if let Some(both) = players.iter().find(|p| p.is_captain && p.is_vice_captain) {
        return Err(RosterViolation::CaptainIsViceCaptain {
            player_id: both.player_id.clone(),
        });
    }

    Ok(())
}

fn check_team_split(
    players: &[RosterEntry],
    team_a: &TeamId,
    team_b: &TeamId,
) -> Result<(), RosterViolation> {
    if team_a == team_b {
        return Err(RosterViolation::InvalidTeamDistribution);
    }

    let (mut from_a, mut from_b) = (0usize, 0usize);
    for entry in players {
        if &entry.origin_team_id == team_a {
            from_a += 1;
        } else if &entry.origin_team_id == team_b {
            from_b += 1;
        } else {
            return Err(RosterViolation::InvalidTeamDistribution);
        }
    }

    let allowed = MIN_PER_TEAM..=MAX_PER_TEAM;
    if allowed.contains(&from_a) && allowed.contains(&from_b) {
        Ok(())
    } else {
        Err(RosterViolation::InvalidTeamDistribution)
    }
}

fn check_type_spread(players: &[RosterEntry]) -> Result<(), RosterViolation> {
    let mut counts: BTreeMap<PlayerType, usize> = BTreeMap::new();
    for entry in players {
        *counts.entry(entry.player_type).or_default() += 1;
    }

    for player_type in PlayerType::ALL {
        let count = counts.get(&player_type).copied().unwrap_or(0);
        if !(MIN_PER_TYPE..=MAX_PER_TYPE).contains(&count) {
            return Err(RosterViolation::InvalidTypeDistribution { player_type, count });
        }
    }
    Ok(())
}
