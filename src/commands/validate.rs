//! Validate a fully-resolved roster from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::common::print_json;
use crate::{
    cli::types::ids::TeamId,
    core::read_json,
    roster::{self, RosterEntry, RosterSelection, RosterViolation},
    Result,
};

/// A roster plus the two teams of its match
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterFile {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub players: Vec<RosterEntry>,
}

#[derive(Debug, Serialize)]
struct Verdict {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

pub fn validate_roster_file(file: RosterFile) -> std::result::Result<(), RosterViolation> {
    let selection = RosterSelection::new(file.players);
    roster::validate(&selection, &file.team_a, &file.team_b)
}

/// Handle the validate command. A rejected roster is reported and returned as an error.
pub fn handle_validate(roster_path: &Path, as_json: bool) -> Result<()> {
    let file: RosterFile = read_json(roster_path)?;
    let verdict = validate_roster_file(file);

    if as_json {
        print_json(&Verdict {
            valid: verdict.is_ok(),
            reason: verdict.as_ref().err().map(ToString::to_string),
        })?;
    } else {
        match &verdict {
            Ok(()) => println!("VALID"),
            Err(violation) => println!("INVALID: {}", violation),
        }
    }

    verdict.map_err(Into::into)
}
