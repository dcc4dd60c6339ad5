//! Load reference data (teams, players, matches) from a JSON file.

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::{
    core::read_json,
    storage::{Match, Player, PlayerDatabase, Team},
    Result,
};

/// Reference data as produced by the squad/schedule ingestion side
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportCounts {
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
}

/// Upsert a dataset. Teams go first so squads and matches can reference them.
pub fn import_dataset(db: &mut PlayerDatabase, data: &Dataset) -> Result<ImportCounts> {
    for team in &data.teams {
        db.upsert_team(team)?;
    }
    for player in &data.players {
        db.upsert_player(player)?;
    }
    for m in &data.matches {
        db.upsert_match(m)?;
    }

    let counts = ImportCounts {
        teams: data.teams.len(),
        players: data.players.len(),
        matches: data.matches.len(),
    };
    info!(
        teams = counts.teams,
        players = counts.players,
        matches = counts.matches,
        "dataset imported"
    );
    Ok(counts)
}

/// Handle the import command
pub fn handle_import(db: &mut PlayerDatabase, path: &Path) -> Result<()> {
    let data: Dataset = read_json(path)?;
    let counts = import_dataset(db, &data)?;
    println!(
        "✓ Imported {} teams, {} players, {} matches",
        counts.teams, counts.players, counts.matches
    );
    Ok(())
}
