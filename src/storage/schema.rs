//! Database schema and connection management

use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Database connection manager for fantasy data
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let config = crate::core::AppConfig::load()?;
        Self::open(&config.database_path(None))
    }

    /// Open (or create) a database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Private database for tests and one-off runs
    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id TEXT PRIMARY KEY,
                team_name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS players (
                player_id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL,
                player_type TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS squad (
                player_id TEXT NOT NULL REFERENCES players(player_id),
                team_id TEXT NOT NULL REFERENCES teams(team_id),
                is_active INTEGER NOT NULL DEFAULT 1,
                PRIMARY KEY (player_id, team_id)
            );

            CREATE TABLE IF NOT EXISTS matches (
                match_id TEXT PRIMARY KEY,
                home_team_id TEXT NOT NULL REFERENCES teams(team_id),
                away_team_id TEXT NOT NULL REFERENCES teams(team_id),
                match_date TEXT,
                match_status TEXT NOT NULL DEFAULT 'UPCOMING'
            );

            CREATE TABLE IF NOT EXISTS player_performances (
                match_id TEXT NOT NULL REFERENCES matches(match_id),
                player_id TEXT NOT NULL REFERENCES players(player_id),
                runs_scored INTEGER NOT NULL DEFAULT 0,
                balls_faced INTEGER NOT NULL DEFAULT 0,
                fours INTEGER NOT NULL DEFAULT 0,
                sixes INTEGER NOT NULL DEFAULT 0,
                wickets_taken INTEGER NOT NULL DEFAULT 0,
                maidens INTEGER NOT NULL DEFAULT 0,
                catches INTEGER NOT NULL DEFAULT 0,
                run_outs INTEGER NOT NULL DEFAULT 0,
                stumpings INTEGER NOT NULL DEFAULT 0,
                strike_rate TEXT,
                total_fantasy_points TEXT NOT NULL DEFAULT '0',
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (match_id, player_id)
            );

            CREATE TABLE IF NOT EXISTS user_teams (
                team_id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                match_id TEXT NOT NULL REFERENCES matches(match_id),
                team_name TEXT NOT NULL,
                total_points TEXT NOT NULL DEFAULT '0',
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS user_team_players (
                user_team_id TEXT NOT NULL REFERENCES user_teams(team_id),
                player_id TEXT NOT NULL REFERENCES players(player_id),
                slot INTEGER NOT NULL,
                is_captain INTEGER NOT NULL DEFAULT 0,
                is_vice_captain INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (user_team_id, player_id)
            );

            CREATE TABLE IF NOT EXISTS contests (
                contest_id TEXT PRIMARY KEY,
                match_id TEXT NOT NULL REFERENCES matches(match_id),
                contest_name TEXT NOT NULL,
                total_spots INTEGER NOT NULL,
                filled_spots INTEGER NOT NULL DEFAULT 0,
                contest_type TEXT NOT NULL DEFAULT 'MEGA',
                entry_fee INTEGER NOT NULL DEFAULT 0,
                total_prize_pool INTEGER NOT NULL DEFAULT 0,
                status TEXT NOT NULL DEFAULT 'CREATED'
            );

            CREATE TABLE IF NOT EXISTS contest_enrollments (
                contest_id TEXT NOT NULL REFERENCES contests(contest_id),
                user_team_id TEXT NOT NULL REFERENCES user_teams(team_id),
                contest_rank INTEGER,
                enrolled_at INTEGER NOT NULL,
                PRIMARY KEY (contest_id, user_team_id)
            );

            CREATE INDEX IF NOT EXISTS idx_user_teams_match
             ON user_teams(match_id);

            CREATE INDEX IF NOT EXISTS idx_contests_match
             ON contests(match_id);

            CREATE INDEX IF NOT EXISTS idx_squad_team
             ON squad(team_id) WHERE is_active = 1;",
        )?;

        Ok(())
    }
}
