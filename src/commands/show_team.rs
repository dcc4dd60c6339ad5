//! Show one user team: players, match and contest entries.

use super::common::print_json;
use crate::{
    cli::types::ids::UserTeamId, error::FantasyError, storage::PlayerDatabase, Result,
};

/// Handle the show-team command
pub fn handle_show_team(db: &PlayerDatabase, team_id: &UserTeamId, as_json: bool) -> Result<()> {
    let details = db
        .get_team_details(team_id)?
        .ok_or_else(|| FantasyError::TeamNotFound {
            team_id: team_id.to_string(),
        })?;

    if as_json {
        return print_json(&details);
    }

    println!(
        "{} ({}) - {} vs {} [{}] - {} points",
        details.team_name,
        details.user_id,
        details.fixture.home_team_id,
        details.fixture.away_team_id,
        details.fixture.status,
        details.total_points
    );
    for player in &details.players {
        let tag = if player.is_captain {
            "(C)"
        } else if player.is_vice_captain {
            "(VC)"
        } else {
            ""
        };
        println!(
            "  {:<24} {:<14} {}",
            player.full_name,
            player.player_type.to_string(),
            tag
        );
    }
    if !details.enrollments.is_empty() {
        println!("Contests:");
        for entry in &details.enrollments {
            let rank = entry
                .rank
                .map(|r| format!("#{}", r))
                .unwrap_or_else(|| "unranked".to_string());
            println!(
                "  {:<24} {:<14} {}",
                entry.contest_name,
                entry.contest_type.to_string(),
                rank
            );
        }
    }
    Ok(())
}
