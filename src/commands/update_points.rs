//! Ingest parsed scorecard lines for a match and refresh team totals.

use std::path::Path;
use tracing::info;

use super::common::CommandContext;
use crate::{
    cli::types::status::MatchStatus,
    core::read_json,
    storage::{PerformanceRecord, RecomputeSummary},
    Result,
};

/// Parameters for the update-points command
#[derive(Debug)]
pub struct UpdatePointsParams<'a> {
    pub match_name: &'a str,
    pub performances: &'a Path,
    pub status: Option<MatchStatus>,
    pub verbose: bool,
}

/// Store performances, recompute every team of the match, then apply the status change.
pub fn update_points(
    ctx: &mut CommandContext,
    match_name: &str,
    records: &[PerformanceRecord],
    status: Option<MatchStatus>,
) -> Result<RecomputeSummary> {
    let match_id = ctx.config.resolve_match(match_name);
    info!(%match_id, records = records.len(), "updating fantasy points");

    let summary = ctx.db.ingest_performances(&match_id, records)?;
    if let Some(status) = status {
        ctx.db.set_match_status(&match_id, status)?;
    }
    Ok(summary)
}

/// Handle the update-points command
pub fn handle_update_points(ctx: &mut CommandContext, params: UpdatePointsParams<'_>) -> Result<()> {
    let records: Vec<PerformanceRecord> = read_json(params.performances)?;
    let summary = update_points(ctx, params.match_name, &records, params.status)?;

    println!(
        "✓ Match {}: {} performances, {} teams updated",
        summary.match_id, summary.performances, summary.teams_updated
    );
    if params.verbose {
        for record in &records {
            if let Some(points) = ctx
                .db
                .get_performance_points(&summary.match_id, &record.player_id)?
            {
                println!("  {:<12} {:>7}", record.player_id, points.to_string());
            }
        }
    }
    if let Some(status) = params.status {
        println!("Match status set to {}", status);
    }
    Ok(())
}
