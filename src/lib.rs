//! IPL Fantasy Cricket Library
//!
//! Fantasy points and roster rules for T20 cricket, plus a small SQLite-backed
//! toolkit around them.
//!
//! ## Features
//!
//! - **Scoring**: fixed batting/bowling/fielding point table with captain (2x) and
//!   vice-captain (1.5x) multipliers, exact to the half point
//! - **Roster Validation**: the playing XI composition rule (11 players, 5-6 per side,
//!   1-5 per player type, one captain and a different vice-captain)
//! - **Storage**: teams, squads, matches, performances, user teams and contests
//! - **Leaderboards**: contest ranking by recomputed team totals
//!
//! ## Quick Start
//!
//! ```rust
//! use ipl_fantasy::{score, PlayerMatchStats, PlayerRole};
//!
//! let stats = PlayerMatchStats {
//!     runs: 50,
//!     fours: 4,
//!     ..Default::default()
//! };
//!
//! // 50 runs + 4 boundaries + 25 half-century bonus, doubled for the captain
//! assert_eq!(score(&stats, PlayerRole::Captain).to_string(), "158");
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export IPL_FANTASY_DB=/path/to/fantasy.db
//! export IPL_FANTASY_CONFIG=/path/to/config.json
//! export IPL_FANTASY_LOG=ipl_fantasy=debug
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod roster;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{ContestId, MatchId, PlayerId, TeamId, UserId, UserTeamId},
    player_type::PlayerType,
    status::MatchStatus,
};
pub use error::{FantasyError, Result};
pub use roster::{validate, RosterEntry, RosterSelection, RosterViolation};
pub use scoring::{score, team_total, FantasyPoints, PlayerMatchStats, PlayerRole};

pub const DB_ENV_VAR: &str = "IPL_FANTASY_DB";
pub const CONFIG_ENV_VAR: &str = "IPL_FANTASY_CONFIG";
pub const LOG_ENV_VAR: &str = "IPL_FANTASY_LOG";
