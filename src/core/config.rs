//! User configuration.
//!
//! The config file is optional JSON:
//!
//! ```json
//! {
//!   "databasePath": "/var/lib/ipl-fantasy/fantasy.db",
//!   "matchAliases": { "gt-vs-mi-2025": "115014" }
//! }
//! ```
//!
//! `matchAliases` maps human-friendly match slugs to the match ids used in the store.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::files::{app_cache_dir, app_config_dir, try_read_to_string};
use crate::cli::types::ids::MatchId;
use crate::{CONFIG_ENV_VAR, DB_ENV_VAR};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub database_path: Option<PathBuf>,
    pub match_aliases: BTreeMap<String, MatchId>,
}

impl AppConfig {
    /// Load from `IPL_FANTASY_CONFIG` or the default location. A missing file yields the
    /// defaults; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match try_read_to_string(path) {
            Some(raw) => {
                debug!(path = %path.display(), "loading config");
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn default_path() -> PathBuf {
        app_config_dir().join("config.json")
    }

    /// Database location: explicit override, then `IPL_FANTASY_DB`, then the config
    /// file, then the cache directory.
    pub fn database_path(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        if let Some(path) = std::env::var_os(DB_ENV_VAR) {
            return PathBuf::from(path);
        }
        self.database_path
            .clone()
            .unwrap_or_else(|| app_cache_dir().join("fantasy.db"))
    }

    /// Resolve a match alias; unknown names are taken as literal match ids.
    pub fn resolve_match(&self, name: &str) -> MatchId {
        self.match_aliases
            .get(name.trim())
            .cloned()
            .unwrap_or_else(|| MatchId::new(name.trim()))
    }
}
