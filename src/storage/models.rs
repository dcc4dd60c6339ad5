//! Data models for the storage layer

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

use crate::cli::types::{
    contest::{ContestStatus, ContestType},
    ids::{ContestId, MatchId, PlayerId, TeamId, UserId, UserTeamId},
    player_type::PlayerType,
    status::MatchStatus,
};
use crate::scoring::{FantasyPoints, PlayerMatchStats, PlayerRole};

/// A real-world side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
}

/// Player information, with the squad they currently belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: PlayerId,
    pub full_name: String,
    pub player_type: PlayerType,
    pub team_id: TeamId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default)]
    pub match_date: Option<String>,
    #[serde(default, rename = "matchStatus")]
    pub status: MatchStatus,
}

/// One player's submitted slot in a user team, before squad resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPick {
    pub player_id: PlayerId,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl TeamPick {
    pub fn role(&self) -> PlayerRole {
        PlayerRole::from_flags(self.is_captain, self.is_vice_captain)
    }
}

/// Create (no `team_id`) or update (existing `team_id`) a user team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeamSubmission {
    #[serde(default)]
    pub team_id: Option<UserTeamId>,
    pub user_id: UserId,
    pub match_id: MatchId,
    pub team_name: String,
    pub players: Vec<TeamPick>,
}

/// A stored user team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeam {
    pub team_id: UserTeamId,
    pub user_id: UserId,
    pub match_id: MatchId,
    pub team_name: String,
    pub total_points: FantasyPoints,
    pub players: Vec<TeamPick>,
}

/// Already-parsed scorecard line for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub player_id: PlayerId,
    #[serde(default)]
    pub stats: PlayerMatchStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub contest_id: ContestId,
    pub match_id: MatchId,
    pub contest_name: String,
    pub total_spots: u32,
    #[serde(default)]
    pub filled_spots: u32,
    #[serde(default)]
    pub contest_type: ContestType,
    /// Whole rupees
    #[serde(default)]
    pub entry_fee: u32,
    #[serde(default)]
    pub total_prize_pool: u32,
    #[serde(default)]
    pub status: ContestStatus,
}

/// A match's contests, one (possibly empty) list per contest type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchContests {
    pub match_id: MatchId,
    pub contests_count: usize,
    pub contests: BTreeMap<ContestType, Vec<Contest>>,
}

/// A picked player with their squad details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayer {
    pub player_id: PlayerId,
    pub full_name: String,
    pub player_type: PlayerType,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEnrollment {
    pub contest_id: ContestId,
    pub contest_name: String,
    pub contest_type: ContestType,
    pub rank: Option<u32>,
    pub enrolled_at: i64,
}

/// Everything shown for one user team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeamDetails {
    pub team_id: UserTeamId,
    pub user_id: UserId,
    pub team_name: String,
    pub total_points: FantasyPoints,
    #[serde(rename = "match")]
    pub fixture: Match,
    pub players: Vec<TeamPlayer>,
    pub enrollments: Vec<TeamEnrollment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub rank: u32,
    pub team_id: UserTeamId,
    pub team_name: String,
    pub user_id: UserId,
    pub total_points: FantasyPoints,
}

/// Outcome of recomputing a match's team totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeSummary {
    pub match_id: MatchId,
    pub performances: usize,
    pub teams_updated: usize,
}
