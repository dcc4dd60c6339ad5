//! User team submission and lookup

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::{models::*, queries::now_secs, schema::PlayerDatabase};
use crate::cli::types::{
    ids::{MatchId, PlayerId, TeamId, UserId, UserTeamId},
    player_type::PlayerType,
};
use crate::error::{FantasyError, Result};
use crate::roster::{self, RosterEntry, RosterSelection};
use crate::scoring::FantasyPoints;

pub const TEAM_NAME_MIN_CHARS: usize = 3;
pub const TEAM_NAME_MAX_CHARS: usize = 50;

fn check_team_name(name: &str) -> Result<()> {
    let chars = name.trim().chars().count();
    if (TEAM_NAME_MIN_CHARS..=TEAM_NAME_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(FantasyError::InvalidTeamName {
            name: name.to_string(),
        })
    }
}

impl PlayerDatabase {
    /// Attach team-of-origin and player type to each pick, using the active squads of
    /// the match's two teams.
    pub fn resolve_roster(&self, m: &Match, picks: &[TeamPick]) -> Result<RosterSelection> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_type, s.team_id
             FROM players p
             JOIN squad s ON p.player_id = s.player_id
             WHERE p.player_id = ?1
               AND s.team_id IN (?2, ?3)
               AND s.is_active = 1
             LIMIT 1",
        )?;

        let mut players = Vec::with_capacity(picks.len());
        for pick in picks {
            let found: Option<(PlayerType, String)> = stmt
                .query_row(
                    params![
                        pick.player_id.as_str(),
                        m.home_team_id.as_str(),
                        m.away_team_id.as_str()
                    ],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let (player_type, team_id) = found.ok_or_else(|| FantasyError::PlayerNotInMatch {
                player_id: pick.player_id.to_string(),
            })?;

            players.push(RosterEntry {
                player_id: pick.player_id.clone(),
                origin_team_id: TeamId::new(team_id),
                player_type,
                is_captain: pick.is_captain,
                is_vice_captain: pick.is_vice_captain,
            });
        }
        Ok(RosterSelection::new(players))
    }

    /// Create or update a user team.
    ///
    /// Only allowed while the match is upcoming. The name must be 3 to 50 characters and
    /// the roster must pass [`roster::validate`]; on success the team's picks are
    /// replaced atomically.
    pub fn save_user_team(&mut self, submission: &UserTeamSubmission) -> Result<UserTeamId> {
        let m = self.require_match(&submission.match_id)?;
        if !m.status.accepts_roster_changes() {
            return Err(FantasyError::MatchNotUpcoming {
                match_id: m.match_id.to_string(),
                status: m.status.to_string(),
            });
        }
        check_team_name(&submission.team_name)?;

        if let Some(team_id) = &submission.team_id {
            let owned = self.team_belongs_to(team_id, &submission.user_id, &m.match_id)?;
            if !owned {
                return Err(FantasyError::TeamNotFound {
                    team_id: team_id.to_string(),
                });
            }
        }

        let selection = self.resolve_roster(&m, &submission.players)?;
        roster::validate(&selection, &m.home_team_id, &m.away_team_id)?;

        let now = now_secs()?;
        let tx = self.conn.transaction()?;

        let team_id = match &submission.team_id {
            Some(team_id) => {
                tx.execute(
                    "UPDATE user_teams SET team_name = ?1 WHERE team_id = ?2",
                    params![submission.team_name, team_id.as_str()],
                )?;
                tx.execute(
                    "DELETE FROM user_team_players WHERE user_team_id = ?1",
                    params![team_id.as_str()],
                )?;
                team_id.clone()
            }
            None => {
                let next: i64 = tx.query_row(
                    "SELECT COALESCE(MAX(rowid), 0) + 1 FROM user_teams",
                    [],
                    |row| row.get(0),
                )?;
                let team_id = UserTeamId::new(format!("{}-{}", m.match_id, next));
                tx.execute(
                    "INSERT INTO user_teams (team_id, user_id, match_id, team_name, total_points, created_at)
                     VALUES (?1, ?2, ?3, ?4, '0', ?5)",
                    params![
                        team_id.as_str(),
                        submission.user_id.as_str(),
                        m.match_id.as_str(),
                        submission.team_name,
                        now
                    ],
                )?;
                team_id
            }
        };

        {
            let mut insert = tx.prepare(
                "INSERT INTO user_team_players
                 (user_team_id, player_id, slot, is_captain, is_vice_captain)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (slot, entry) in selection.players.iter().enumerate() {
                insert.execute(params![
                    team_id.as_str(),
                    entry.player_id.as_str(),
                    slot as i64,
                    entry.is_captain,
                    entry.is_vice_captain
                ])?;
            }
        }
        tx.commit()?;

        info!(
            team_id = %team_id,
            user_id = %submission.user_id,
            match_id = %m.match_id,
            updated = submission.team_id.is_some(),
            "user team saved"
        );
        Ok(team_id)
    }

    fn team_belongs_to(
        &self,
        team_id: &UserTeamId,
        user_id: &UserId,
        match_id: &MatchId,
    ) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM user_teams WHERE team_id = ?1 AND user_id = ?2 AND match_id = ?3",
                params![team_id.as_str(), user_id.as_str(), match_id.as_str()],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn get_user_team(&self, team_id: &UserTeamId) -> Result<Option<UserTeam>> {
        let header = self
            .conn
            .query_row(
                "SELECT user_id, match_id, team_name, total_points
                 FROM user_teams WHERE team_id = ?1",
                params![team_id.as_str()],
                |row| {
                    Ok((
                        UserId::new(row.get::<_, String>(0)?),
                        MatchId::new(row.get::<_, String>(1)?),
                        row.get::<_, String>(2)?,
                        row.get::<_, FantasyPoints>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((user_id, match_id, team_name, total_points)) = header else {
            return Ok(None);
        };

        Ok(Some(UserTeam {
            team_id: team_id.clone(),
            user_id,
            match_id,
            team_name,
            total_points,
            players: self.get_team_picks(team_id)?,
        }))
    }

    /// A user team with its match, picked players and contest enrollments
    pub fn get_team_details(&self, team_id: &UserTeamId) -> Result<Option<UserTeamDetails>> {
        let Some(team) = self.get_user_team(team_id)? else {
            return Ok(None);
        };
        let fixture = self.require_match(&team.match_id)?;

        Ok(Some(UserTeamDetails {
            team_id: team.team_id,
            user_id: team.user_id,
            team_name: team.team_name,
            total_points: team.total_points,
            fixture,
            players: self.get_team_players(team_id)?,
            enrollments: self.get_team_enrollments(team_id)?,
        }))
    }

    /// Picked players with name and type, in submission order
    pub fn get_team_players(&self, team_id: &UserTeamId) -> Result<Vec<TeamPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.full_name, p.player_type, u.is_captain, u.is_vice_captain
             FROM user_team_players u
             JOIN players p ON p.player_id = u.player_id
             WHERE u.user_team_id = ?1
             ORDER BY u.slot",
        )?;

        let rows = stmt.query_map(params![team_id.as_str()], |row| {
            Ok(TeamPlayer {
                player_id: PlayerId::new(row.get::<_, String>(0)?),
                full_name: row.get(1)?,
                player_type: row.get(2)?,
                is_captain: row.get(3)?,
                is_vice_captain: row.get(4)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Picks of one user team in submission order
    pub fn get_team_picks(&self, team_id: &UserTeamId) -> Result<Vec<TeamPick>> {
        load_team_picks(&self.conn, team_id)
    }

    /// Every user team of a match with its picks
    pub fn get_match_team_picks(
        &self,
        match_id: &MatchId,
    ) -> Result<Vec<(UserTeamId, Vec<TeamPick>)>> {
        load_match_team_picks(&self.conn, match_id)
    }
}

pub(crate) fn load_team_picks(conn: &Connection, team_id: &UserTeamId) -> Result<Vec<TeamPick>> {
    let mut stmt = conn.prepare(
        "SELECT player_id, is_captain, is_vice_captain
         FROM user_team_players
         WHERE user_team_id = ?1
         ORDER BY slot",
    )?;

    let rows = stmt.query_map(params![team_id.as_str()], |row| {
        Ok(TeamPick {
            player_id: PlayerId::new(row.get::<_, String>(0)?),
            is_captain: row.get(1)?,
            is_vice_captain: row.get(2)?,
        })
    })?;

    let mut picks = Vec::new();
    for row in rows {
        picks.push(row?);
    }
    Ok(picks)
}

pub(crate) fn load_match_team_picks(
    conn: &Connection,
    match_id: &MatchId,
) -> Result<Vec<(UserTeamId, Vec<TeamPick>)>> {
    let mut stmt =
        conn.prepare("SELECT team_id FROM user_teams WHERE match_id = ?1 ORDER BY rowid")?;
    let ids = stmt.query_map(params![match_id.as_str()], |row| {
        Ok(UserTeamId::new(row.get::<_, String>(0)?))
    })?;

    let mut teams = Vec::new();
    for id in ids {
        let id = id?;
        let picks = load_team_picks(conn, &id)?;
        teams.push((id, picks));
    }
    debug!(%match_id, teams = teams.len(), "loaded user teams");
    Ok(teams)
}
