//! Basic database query operations

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use super::{models::*, schema::PlayerDatabase};
use crate::cli::types::{
    ids::{MatchId, PlayerId, TeamId},
    status::MatchStatus,
};
use crate::error::{FantasyError, Result};
use crate::scoring::{self, FantasyPoints, PlayerMatchStats, PlayerRole};

/// Seconds since the epoch, for row timestamps
pub(crate) fn now_secs() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

impl PlayerDatabase {
    /// Insert or update a team
    pub fn upsert_team(&mut self, team: &Team) -> Result<()> {
        self.conn.execute(
            "INSERT INTO teams (team_id, team_name) VALUES (?1, ?2)
             ON CONFLICT(team_id) DO UPDATE SET team_name = excluded.team_name",
            params![team.team_id.as_str(), team.team_name],
        )?;
        Ok(())
    }

    /// Insert or update a player and make `player.team_id` their only active squad
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO players (player_id, full_name, player_type) VALUES (?1, ?2, ?3)
             ON CONFLICT(player_id) DO UPDATE SET
                full_name = excluded.full_name,
                player_type = excluded.player_type",
            params![player.player_id.as_str(), player.full_name, player.player_type],
        )?;
        tx.execute(
            "UPDATE squad SET is_active = 0 WHERE player_id = ?1 AND team_id != ?2",
            params![player.player_id.as_str(), player.team_id.as_str()],
        )?;
        tx.execute(
            "INSERT INTO squad (player_id, team_id, is_active) VALUES (?1, ?2, 1)
             ON CONFLICT(player_id, team_id) DO UPDATE SET is_active = 1",
            params![player.player_id.as_str(), player.team_id.as_str()],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn get_team(&self, team_id: &TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT team_id, team_name FROM teams WHERE team_id = ?1",
                params![team_id.as_str()],
                |row| {
                    Ok(Team {
                        team_id: TeamId::new(row.get::<_, String>(0)?),
                        team_name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(team)
    }

    /// A team with its active squad; an unknown team is an error
    pub fn get_team_squad(&self, team_id: &TeamId) -> Result<(Team, Vec<Player>)> {
        let team = self
            .get_team(team_id)?
            .ok_or_else(|| FantasyError::SquadTeamNotFound {
                team_id: team_id.to_string(),
            })?;
        let squad = self.get_squad(team_id)?;
        Ok((team, squad))
    }

    /// Active squad of a team, ordered by player id
    pub fn get_squad(&self, team_id: &TeamId) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.full_name, p.player_type, s.team_id
             FROM players p
             JOIN squad s ON p.player_id = s.player_id
             WHERE s.team_id = ?1 AND s.is_active = 1
             ORDER BY p.player_id",
        )?;

        let rows = stmt.query_map(params![team_id.as_str()], |row| {
            Ok(Player {
                player_id: PlayerId::new(row.get::<_, String>(0)?),
                full_name: row.get(1)?,
                player_type: row.get(2)?,
                team_id: TeamId::new(row.get::<_, String>(3)?),
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Insert or update a match, including its status. An existing match must be
    /// allowed to move to the new status.
    pub fn upsert_match(&mut self, m: &Match) -> Result<()> {
        if let Some(existing) = self.get_match(&m.match_id)? {
            check_transition(&m.match_id, existing.status, m.status)?;
        }
        self.conn.execute(
            "INSERT INTO matches (match_id, home_team_id, away_team_id, match_date, match_status)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(match_id) DO UPDATE SET
                home_team_id = excluded.home_team_id,
                away_team_id = excluded.away_team_id,
                match_date = excluded.match_date,
                match_status = excluded.match_status",
            params![
                m.match_id.as_str(),
                m.home_team_id.as_str(),
                m.away_team_id.as_str(),
                m.match_date,
                m.status
            ],
        )?;
        Ok(())
    }

    pub fn get_match(&self, match_id: &MatchId) -> Result<Option<Match>> {
        let found = self
            .conn
            .query_row(
                "SELECT match_id, home_team_id, away_team_id, match_date, match_status
                 FROM matches WHERE match_id = ?1",
                params![match_id.as_str()],
                |row| {
                    Ok(Match {
                        match_id: MatchId::new(row.get::<_, String>(0)?),
                        home_team_id: TeamId::new(row.get::<_, String>(1)?),
                        away_team_id: TeamId::new(row.get::<_, String>(2)?),
                        match_date: row.get(3)?,
                        status: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(found)
    }

    /// Upcoming matches, earliest first. With `from`, only matches dated on or after it
    /// (ISO dates compare as text); undated matches sort last.
    pub fn upcoming_matches(&self, from: Option<&str>) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, home_team_id, away_team_id, match_date, match_status
             FROM matches
             WHERE match_status = ?1
               AND (?2 IS NULL OR match_date >= ?2)
             ORDER BY match_date IS NULL, match_date, match_id",
        )?;

        let rows = stmt.query_map(params![MatchStatus::Upcoming, from], |row| {
            Ok(Match {
                match_id: MatchId::new(row.get::<_, String>(0)?),
                home_team_id: TeamId::new(row.get::<_, String>(1)?),
                away_team_id: TeamId::new(row.get::<_, String>(2)?),
                match_date: row.get(3)?,
                status: row.get(4)?,
            })
        })?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Like `get_match`, but a missing match is an error
    pub fn require_match(&self, match_id: &MatchId) -> Result<Match> {
        self.get_match(match_id)?
            .ok_or_else(|| FantasyError::MatchNotFound {
                match_id: match_id.to_string(),
            })
    }

    /// Move a match along its lifecycle (see [`MatchStatus::can_transition_to`]).
    pub fn set_match_status(&mut self, match_id: &MatchId, status: MatchStatus) -> Result<()> {
        let current = self.require_match(match_id)?.status;
        check_transition(match_id, current, status)?;

        self.conn.execute(
            "UPDATE matches SET match_status = ?1 WHERE match_id = ?2",
            params![status, match_id.as_str()],
        )?;
        debug!(%match_id, %status, "match status changed");
        Ok(())
    }

    /// Store a player's stats for a match, replacing any earlier figures.
    ///
    /// The stored `total_fantasy_points` is the player's base score (no role multiplier);
    /// roles belong to user teams, not to the performance.
    pub fn upsert_performance(
        &mut self,
        match_id: &MatchId,
        player_id: &PlayerId,
        stats: &PlayerMatchStats,
    ) -> Result<FantasyPoints> {
        write_performance(&self.conn, match_id, player_id, stats)
    }

    /// All recorded stats for a match, keyed by player
    pub fn get_performances(
        &self,
        match_id: &MatchId,
    ) -> Result<HashMap<PlayerId, PlayerMatchStats>> {
        load_performances(&self.conn, match_id)
    }

    /// Stored base points for one player in one match
    pub fn get_performance_points(
        &self,
        match_id: &MatchId,
        player_id: &PlayerId,
    ) -> Result<Option<FantasyPoints>> {
        let points = self
            .conn
            .query_row(
                "SELECT total_fantasy_points FROM player_performances
                 WHERE match_id = ?1 AND player_id = ?2",
                params![match_id.as_str(), player_id.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(points)
    }
}

fn row_to_stats(row: &Row) -> rusqlite::Result<PlayerMatchStats> {
    Ok(PlayerMatchStats {
        runs: row.get(1)?,
        balls_faced: row.get(2)?,
        fours: row.get(3)?,
        sixes: row.get(4)?,
        wickets_taken: row.get(5)?,
        maidens: row.get(6)?,
        catches: row.get(7)?,
        run_outs: row.get(8)?,
        stumpings: row.get(9)?,
    })
}

fn check_transition(match_id: &MatchId, from: MatchStatus, to: MatchStatus) -> Result<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(FantasyError::InvalidStatusTransition {
            match_id: match_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Upsert one performance row on `conn`, which may be an open transaction.
pub(crate) fn write_performance(
    conn: &Connection,
    match_id: &MatchId,
    player_id: &PlayerId,
    stats: &PlayerMatchStats,
) -> Result<FantasyPoints> {
    let points = scoring::score(stats, PlayerRole::None);
    let strike_rate = stats.strike_rate().map(|sr| format!("{sr:.2}"));

    conn.execute(
        "INSERT INTO player_performances
         (match_id, player_id, runs_scored, balls_faced, fours, sixes, wickets_taken,
          maidens, catches, run_outs, stumpings, strike_rate, total_fantasy_points, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
         ON CONFLICT(match_id, player_id) DO UPDATE SET
            runs_scored = excluded.runs_scored,
            balls_faced = excluded.balls_faced,
            fours = excluded.fours,
            sixes = excluded.sixes,
            wickets_taken = excluded.wickets_taken,
            maidens = excluded.maidens,
            catches = excluded.catches,
            run_outs = excluded.run_outs,
            stumpings = excluded.stumpings,
            strike_rate = excluded.strike_rate,
            total_fantasy_points = excluded.total_fantasy_points,
            updated_at = excluded.updated_at",
        params![
            match_id.as_str(),
            player_id.as_str(),
            stats.runs,
            stats.balls_faced,
            stats.fours,
            stats.sixes,
            stats.wickets_taken,
            stats.maidens,
            stats.catches,
            stats.run_outs,
            stats.stumpings,
            strike_rate,
            points,
            now_secs()?
        ],
    )?;
    Ok(points)
}

pub(crate) fn load_performances(
    conn: &Connection,
    match_id: &MatchId,
) -> Result<HashMap<PlayerId, PlayerMatchStats>> {
    let mut stmt = conn.prepare(
        "SELECT player_id, runs_scored, balls_faced, fours, sixes, wickets_taken,
                maidens, catches, run_outs, stumpings
         FROM player_performances
         WHERE match_id = ?1",
    )?;

    let rows = stmt.query_map(params![match_id.as_str()], |row| {
        Ok((
            PlayerId::new(row.get::<_, String>(0)?),
            row_to_stats(row)?,
        ))
    })?;

    let mut performances = HashMap::new();
    for row in rows {
        let (player_id, stats) = row?;
        performances.insert(player_id, stats);
    }
    Ok(performances)
}
