//! Command implementations for the IPL fantasy CLI

pub mod common;
pub mod contests;
pub mod import;
pub mod schedule;
pub mod score;
pub mod show_team;
pub mod squad;
pub mod submit_team;
pub mod update_points;
pub mod validate;
