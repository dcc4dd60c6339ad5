//! Create or update a user team from a submission file.

use std::path::Path;

use crate::{
    core::read_json,
    storage::{PlayerDatabase, UserTeamSubmission},
    Result,
};

/// Handle the submit-team command
pub fn handle_submit_team(db: &mut PlayerDatabase, path: &Path) -> Result<()> {
    let submission: UserTeamSubmission = read_json(path)?;
    let updating = submission.team_id.is_some();
    let team_id = db.save_user_team(&submission)?;

    if updating {
        println!("✓ Team {} updated", team_id);
    } else {
        println!("✓ Team {} created", team_id);
    }
    Ok(())
}
