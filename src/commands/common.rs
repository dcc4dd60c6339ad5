//! Resources shared by the command handlers.

use std::path::Path;
use tracing::debug;

use crate::{core::AppConfig, storage::PlayerDatabase, Result};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: AppConfig,
    pub db: PlayerDatabase,
}

impl CommandContext {
    /// Load the config and open the database (`db_override` wins over configured paths)
    pub fn open(db_override: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load()?;
        let path = config.database_path(db_override);
        debug!(path = %path.display(), "using database");
        let db = PlayerDatabase::open(&path)?;
        Ok(Self { config, db })
    }

    /// Context over an existing database, for tests and embedding
    pub fn with_db(config: AppConfig, db: PlayerDatabase) -> Self {
        Self { config, db }
    }
}

/// Print a serializable value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
