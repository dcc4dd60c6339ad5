//! Error types for the IPL fantasy engine

use thiserror::Error;

use crate::roster::RosterViolation;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Roster rejected: {0}")]
    Roster(#[from] RosterViolation),

    #[error("Match not found: {match_id}")]
    MatchNotFound { match_id: String },

    #[error("Cannot change team for match {match_id}: match is {status}")]
    MatchNotUpcoming { match_id: String, status: String },

    #[error("Match {match_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        match_id: String,
        from: String,
        to: String,
    },

    #[error("Team name must be 3 to 50 characters: {name:?}")]
    InvalidTeamName { name: String },

    #[error("Team not found: {team_id}")]
    SquadTeamNotFound { team_id: String },

    #[error("Team not found or doesn't belong to the user: {team_id}")]
    TeamNotFound { team_id: String },

    #[error("Player {player_id} is not in an active squad for this match")]
    PlayerNotInMatch { player_id: String },

    #[error("Contest not found: {contest_id}")]
    ContestNotFound { contest_id: String },

    #[error("Contest {contest_id} is full")]
    ContestFull { contest_id: String },

    #[error("Team {team_id} is already enrolled in contest {contest_id}")]
    AlreadyEnrolled { contest_id: String, team_id: String },

    #[error("Contest {contest_id} is not for the team's match")]
    ContestMatchMismatch { contest_id: String },

    #[error("Contest {contest_id} already belongs to another match")]
    ContestMatchChanged { contest_id: String },

    #[error("Contest {contest_id} has {filled_spots} entries and cannot shrink to {total_spots} spots")]
    ContestSpotsBelowFilled {
        contest_id: String,
        total_spots: u32,
        filled_spots: u32,
    },

    #[error("Invalid fantasy points value: {value}")]
    InvalidPoints { value: String },

    #[error("Invalid player type: {value}")]
    InvalidPlayerType { value: String },

    #[error("Invalid player role: {value}")]
    InvalidRole { value: String },

    #[error("Invalid match status: {value}")]
    InvalidMatchStatus { value: String },

    #[error("Invalid contest type: {value}")]
    InvalidContestType { value: String },

    #[error("Invalid contest status: {value}")]
    InvalidContestStatus { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<anyhow::Error> for FantasyError {
    fn from(err: anyhow::Error) -> Self {
        FantasyError::Config {
            message: format!("{err:#}"),
        }
    }
}
