//! Core utilities for the IPL fantasy CLI
//!
//! - `files`: path resolution and small file helpers
//! - `config`: user configuration (database location, match aliases)

pub mod config;
pub mod files;

pub use config::AppConfig;
pub use files::{app_cache_dir, app_config_dir, read_json, try_read_to_string, write_string};
