//! Contest creation, enrollment and leaderboard commands.

use std::path::Path;

use super::common::{print_json, CommandContext};
use crate::{
    cli::types::ids::{ContestId, UserTeamId},
    core::read_json,
    storage::{Contest, PlayerDatabase},
    Result,
};

/// Handle the create-contest command
pub fn handle_create_contest(db: &mut PlayerDatabase, path: &Path) -> Result<()> {
    let contest: Contest = read_json(path)?;
    db.create_contest(&contest)?;
    println!(
        "✓ Contest {} ({} spots) ready for match {}",
        contest.contest_id, contest.total_spots, contest.match_id
    );
    Ok(())
}

/// Handle the enroll command
pub fn handle_enroll(db: &mut PlayerDatabase, contest_id: &ContestId, team_id: &UserTeamId) -> Result<()> {
    let filled = db.enroll(contest_id, team_id)?;
    println!("✓ Team {} enrolled in {} ({} filled)", team_id, contest_id, filled);
    Ok(())
}

/// Handle the leaderboard command
pub fn handle_leaderboard(db: &mut PlayerDatabase, contest_id: &ContestId, as_json: bool) -> Result<()> {
    let rows = db.rank_contest(contest_id)?;

    if as_json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No teams enrolled in {}", contest_id);
        return Ok(());
    }
    for row in &rows {
        println!(
            "{:>3}. {:<24} {:<12} {:>8}",
            row.rank,
            row.team_name,
            row.user_id,
            row.total_points.to_string()
        );
    }
    Ok(())
}

/// Handle the contests command: a match's contests grouped by type
pub fn handle_list_contests(ctx: &CommandContext, match_name: &str, as_json: bool) -> Result<()> {
    let match_id = ctx.config.resolve_match(match_name);
    let listing = ctx.db.contests_for_match(&match_id)?;

    if as_json {
        return print_json(&listing);
    }

    println!("{} contests for match {}", listing.contests_count, listing.match_id);
    for (contest_type, contests) in &listing.contests {
        println!("{}:", contest_type);
        for c in contests {
            println!(
                "  {:<12} {:<24} fee {:>6}  prize {:>9}  {}/{} filled  {}",
                c.contest_id, c.contest_name, c.entry_fee, c.total_prize_pool, c.filled_spots,
                c.total_spots, c.status
            );
        }
    }
    Ok(())
}
