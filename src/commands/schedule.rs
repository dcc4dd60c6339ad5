//! List upcoming matches.

use super::common::print_json;
use crate::{storage::PlayerDatabase, Result};

/// Handle the schedule command
pub fn handle_schedule(db: &PlayerDatabase, from: Option<&str>, as_json: bool) -> Result<()> {
    let matches = db.upcoming_matches(from)?;

    if as_json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("No upcoming matches");
        return Ok(());
    }
    for m in &matches {
        println!(
            "{:<12} {:<12} {} vs {}",
            m.match_date.as_deref().unwrap_or("TBD"),
            m.match_id,
            m.home_team_id,
            m.away_team_id
        );
    }
    Ok(())
}
