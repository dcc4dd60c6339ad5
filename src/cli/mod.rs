//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::scoring::PlayerRole;
use types::{
    ids::{ContestId, TeamId, UserTeamId},
    status::MatchStatus,
};

#[derive(Debug, Parser)]
#[clap(name = "ipl-fantasy", about = "Fantasy cricket scoring and team management")]
pub struct FantasyCli {
    /// Database file (or set `IPL_FANTASY_DB`; defaults to the cache directory).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one player's match stats.
    ///
    /// Reads a stats object such as `{"runs": 52, "fours": 6, "wickets": 1}`;
    /// missing fields count as zero.
    Score {
        /// Stats JSON file.
        #[clap(long)]
        stats: PathBuf,

        /// Role in the XI: none | captain | vice-captain.
        #[clap(long, default_value_t = PlayerRole::None)]
        role: PlayerRole,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Check an 11-player selection against the composition rules.
    Validate {
        /// Roster JSON file with `teamA`, `teamB` and `players`.
        #[clap(long)]
        roster: PathBuf,

        /// Output the verdict as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Load teams, players and matches into the database.
    Import {
        /// Dataset JSON file.
        #[clap(long)]
        file: PathBuf,
    },

    /// Create or update a user team (only while the match is upcoming).
    SubmitTeam {
        /// Submission JSON file.
        #[clap(long)]
        file: PathBuf,
    },

    /// Store player performances for a match and recompute team totals.
    UpdatePoints {
        /// Match id or an alias from the config's `matchAliases`.
        #[clap(long = "match")]
        match_name: String,

        /// JSON array of `{ "playerId": ..., "stats": {...} }`.
        #[clap(long)]
        performances: PathBuf,

        /// Move the match to this status afterwards (e.g. LIVE, COMPLETED).
        #[clap(long)]
        status: Option<MatchStatus>,

        /// Print each player's stored points.
        #[clap(long)]
        verbose: bool,
    },

    /// Create a contest for a match.
    CreateContest {
        /// Contest JSON file.
        #[clap(long)]
        file: PathBuf,
    },

    /// Enroll a user team in a contest.
    Enroll {
        #[clap(long)]
        contest: ContestId,

        #[clap(long)]
        team: UserTeamId,
    },

    /// List upcoming matches, earliest first.
    Schedule {
        /// Only matches on or after this date (YYYY-MM-DD).
        #[clap(long)]
        from: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List a match's contests grouped by contest type.
    Contests {
        /// Match id or an alias from the config's `matchAliases`.
        #[clap(long = "match")]
        match_name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a team's active squad.
    Squad {
        #[clap(long)]
        team: TeamId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a user team's players, match and contest entries.
    ShowTeam {
        #[clap(long)]
        team: UserTeamId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank a contest's teams by total points.
    Leaderboard {
        #[clap(long)]
        contest: ContestId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
