//! Storage layer for the IPL fantasy CLI
//!
//! SQLite persistence, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `sql`: Column conversions for domain types
//! - `queries`: Teams, players, matches and performances
//! - `teams`: User team submission and lookup
//! - `contests`: Contests, enrollment and leaderboards
//! - `analysis`: Points recomputation across a match

pub mod analysis;
pub mod contests;
pub mod models;
pub mod queries;
pub mod schema;
mod sql;
pub mod teams;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;
