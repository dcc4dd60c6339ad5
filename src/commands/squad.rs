//! Show a team's active squad.

use super::common::print_json;
use crate::{cli::types::ids::TeamId, storage::PlayerDatabase, PlayerType, Result};

/// Handle the squad command. Text output is grouped by player type.
pub fn handle_squad(db: &PlayerDatabase, team_id: &TeamId, as_json: bool) -> Result<()> {
    let (team, squad) = db.get_team_squad(team_id)?;

    if as_json {
        return print_json(&squad);
    }

    println!("{} ({} players)", team.team_name, squad.len());
    for player_type in PlayerType::ALL {
        let names: Vec<&str> = squad
            .iter()
            .filter(|p| p.player_type == player_type)
            .map(|p| p.full_name.as_str())
            .collect();
        if !names.is_empty() {
            println!("  {:<14} {}", player_type.to_string(), names.join(", "));
        }
    }
    Ok(())
}
