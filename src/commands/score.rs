//! Score one player's stats from a JSON file.

use serde::Serialize;
use std::path::Path;

use super::common::print_json;
use crate::{
    core::read_json,
    scoring::{self, FantasyPoints, PlayerMatchStats, PlayerRole, PointsBreakdown},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub role: PlayerRole,
    pub batting: u64,
    pub bowling: u64,
    pub fielding: u64,
    pub base: u64,
    pub points: FantasyPoints,
}

pub fn score_report(stats: &PlayerMatchStats, role: PlayerRole) -> ScoreReport {
    let PointsBreakdown {
        batting,
        bowling,
        fielding,
    } = scoring::breakdown(stats);
    ScoreReport {
        role,
        batting,
        bowling,
        fielding,
        base: batting + bowling + fielding,
        points: scoring::score(stats, role),
    }
}

/// Handle the score command
pub fn handle_score(stats_path: &Path, role: PlayerRole, as_json: bool) -> Result<()> {
    let stats: PlayerMatchStats = read_json(stats_path)?;
    let report = score_report(&stats, role);

    if as_json {
        return print_json(&report);
    }

    println!(
        "batting {} + bowling {} + fielding {} = {} base",
        report.batting, report.bowling, report.fielding, report.base
    );
    println!("{} points ({})", report.points, report.role);
    Ok(())
}
