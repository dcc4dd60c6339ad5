//! Points recomputation across a match

use rayon::prelude::*;
use rusqlite::{params, Connection};
use tracing::info;

use super::{
    models::*, queries::load_performances, queries::write_performance,
    schema::PlayerDatabase, teams::load_match_team_picks,
};
use crate::cli::types::ids::{MatchId, UserTeamId};
use crate::error::Result;
use crate::scoring::{self, FantasyPoints};

impl PlayerDatabase {
    /// Recompute every user team total for a match from the stored performances.
    ///
    /// Each pick is scored once with its role; picks without a recorded performance
    /// count as zero. Totals are overwritten, so running this again with the same data
    /// leaves the same totals.
    pub fn recompute_match_points(&mut self, match_id: &MatchId) -> Result<RecomputeSummary> {
        self.require_match(match_id)?;

        let tx = self.conn.transaction()?;
        let summary = recompute_totals(&tx, match_id)?;
        tx.commit()?;

        log_summary(&summary);
        Ok(summary)
    }

    /// Store a batch of performances and refresh the match's team totals.
    ///
    /// All-or-nothing: if any record fails (e.g. an unknown player), no performance
    /// from the batch is kept and totals are left as they were.
    pub fn ingest_performances(
        &mut self,
        match_id: &MatchId,
        records: &[PerformanceRecord],
    ) -> Result<RecomputeSummary> {
        self.require_match(match_id)?;

        let tx = self.conn.transaction()?;
        for record in records {
            write_performance(&tx, match_id, &record.player_id, &record.stats)?;
        }
        let summary = recompute_totals(&tx, match_id)?;
        tx.commit()?;

        log_summary(&summary);
        Ok(summary)
    }
}

/// Score every team of the match in parallel and write the totals on `conn`.
fn recompute_totals(conn: &Connection, match_id: &MatchId) -> Result<RecomputeSummary> {
    let performances = load_performances(conn, match_id)?;
    let teams = load_match_team_picks(conn, match_id)?;

    let totals: Vec<(UserTeamId, FantasyPoints)> = teams
        .par_iter()
        .map(|(team_id, picks)| {
            let total = scoring::team_total(picks.iter().filter_map(|pick| {
                performances
                    .get(&pick.player_id)
                    .map(|stats| (stats, pick.role()))
            }));
            (team_id.clone(), total)
        })
        .collect();

    let mut update = conn.prepare("UPDATE user_teams SET total_points = ?1 WHERE team_id = ?2")?;
    for (team_id, total) in &totals {
        update.execute(params![total, team_id.as_str()])?;
    }

    Ok(RecomputeSummary {
        match_id: match_id.clone(),
        performances: performances.len(),
        teams_updated: totals.len(),
    })
}

fn log_summary(summary: &RecomputeSummary) {
    info!(
        match_id = %summary.match_id,
        performances = summary.performances,
        teams = summary.teams_updated,
        "team totals recomputed"
    );
}
