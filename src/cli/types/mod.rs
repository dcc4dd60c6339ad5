//! Type-safe wrappers and enums for fantasy cricket data.

pub mod contest;
pub mod ids;
pub mod player_type;
pub mod status;
