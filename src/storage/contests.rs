//! Contests, enrollment and leaderboards

use rusqlite::{params, OptionalExtension, Row};
use std::collections::BTreeMap;
use tracing::info;

use super::{models::*, queries::now_secs, schema::PlayerDatabase};
use crate::cli::types::{
    contest::ContestType,
    ids::{ContestId, MatchId, UserId, UserTeamId},
};
use crate::error::{FantasyError, Result};
use crate::scoring::FantasyPoints;

const CONTEST_COLUMNS: &str = "contest_id, match_id, contest_name, total_spots, filled_spots,
     contest_type, entry_fee, total_prize_pool, status";

fn row_to_contest(row: &Row) -> rusqlite::Result<Contest> {
    Ok(Contest {
        contest_id: ContestId::new(row.get::<_, String>(0)?),
        match_id: MatchId::new(row.get::<_, String>(1)?),
        contest_name: row.get(2)?,
        total_spots: row.get(3)?,
        filled_spots: row.get(4)?,
        contest_type: row.get(5)?,
        entry_fee: row.get(6)?,
        total_prize_pool: row.get(7)?,
        status: row.get(8)?,
    })
}

impl PlayerDatabase {
    /// Create or update a contest. Fill count starts at zero for new contests and is
    /// never taken from the input.
    ///
    /// An existing contest keeps its match, and cannot shrink below its current
    /// enrollment.
    pub fn create_contest(&mut self, contest: &Contest) -> Result<()> {
        self.require_match(&contest.match_id)?;

        if let Some(existing) = self.get_contest(&contest.contest_id)? {
            if existing.match_id != contest.match_id {
                return Err(FantasyError::ContestMatchChanged {
                    contest_id: contest.contest_id.to_string(),
                });
            }
            if contest.total_spots < existing.filled_spots {
                return Err(FantasyError::ContestSpotsBelowFilled {
                    contest_id: contest.contest_id.to_string(),
                    total_spots: contest.total_spots,
                    filled_spots: existing.filled_spots,
                });
            }
        }

        self.conn.execute(
            "INSERT INTO contests (contest_id, match_id, contest_name, total_spots, filled_spots,
                                   contest_type, entry_fee, total_prize_pool, status)
             VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6, ?7, ?8)
             ON CONFLICT(contest_id) DO UPDATE SET
                contest_name = excluded.contest_name,
                total_spots = excluded.total_spots,
                contest_type = excluded.contest_type,
                entry_fee = excluded.entry_fee,
                total_prize_pool = excluded.total_prize_pool,
                status = excluded.status",
            params![
                contest.contest_id.as_str(),
                contest.match_id.as_str(),
                contest.contest_name,
                contest.total_spots,
                contest.contest_type,
                contest.entry_fee,
                contest.total_prize_pool,
                contest.status
            ],
        )?;
        Ok(())
    }

    pub fn get_contest(&self, contest_id: &ContestId) -> Result<Option<Contest>> {
        let contest = self
            .conn
            .query_row(
                &format!("SELECT {CONTEST_COLUMNS} FROM contests WHERE contest_id = ?1"),
                params![contest_id.as_str()],
                row_to_contest,
            )
            .optional()?;
        Ok(contest)
    }

    /// A match's contests grouped by type, cheapest entry first within each type.
    /// Every type is present, possibly empty.
    pub fn contests_for_match(&self, match_id: &MatchId) -> Result<MatchContests> {
        self.require_match(match_id)?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CONTEST_COLUMNS} FROM contests
             WHERE match_id = ?1
             ORDER BY entry_fee, contest_id"
        ))?;
        let rows = stmt.query_map(params![match_id.as_str()], row_to_contest)?;

        let mut contests: BTreeMap<ContestType, Vec<Contest>> = ContestType::ALL
            .iter()
            .map(|contest_type| (*contest_type, Vec::new()))
            .collect();
        let mut count = 0;
        for row in rows {
            let contest = row?;
            contests.entry(contest.contest_type).or_default().push(contest);
            count += 1;
        }

        Ok(MatchContests {
            match_id: match_id.clone(),
            contests_count: count,
            contests,
        })
    }

    /// Contests a user team is enrolled in, in enrollment order
    pub fn get_team_enrollments(&self, team_id: &UserTeamId) -> Result<Vec<TeamEnrollment>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.contest_id, c.contest_name, c.contest_type, e.contest_rank, e.enrolled_at
             FROM contest_enrollments e
             JOIN contests c ON c.contest_id = e.contest_id
             WHERE e.user_team_id = ?1
             ORDER BY e.enrolled_at, e.rowid",
        )?;
        let rows = stmt.query_map(params![team_id.as_str()], |row| {
            Ok(TeamEnrollment {
                contest_id: ContestId::new(row.get::<_, String>(0)?),
                contest_name: row.get(1)?,
                contest_type: row.get(2)?,
                rank: row.get(3)?,
                enrolled_at: row.get(4)?,
            })
        })?;

        let mut enrollments = Vec::new();
        for row in rows {
            enrollments.push(row?);
        }
        Ok(enrollments)
    }

    /// Enroll a user team in a contest for the same match. Returns the new fill count.
    pub fn enroll(&mut self, contest_id: &ContestId, team_id: &UserTeamId) -> Result<u32> {
        let contest = self
            .get_contest(contest_id)?
            .ok_or_else(|| FantasyError::ContestNotFound {
                contest_id: contest_id.to_string(),
            })?;
        let team = self
            .get_user_team(team_id)?
            .ok_or_else(|| FantasyError::TeamNotFound {
                team_id: team_id.to_string(),
            })?;

        if contest.match_id != team.match_id {
            return Err(FantasyError::ContestMatchMismatch {
                contest_id: contest_id.to_string(),
            });
        }

        let m = self.require_match(&contest.match_id)?;
        if !m.status.accepts_roster_changes() {
            return Err(FantasyError::MatchNotUpcoming {
                match_id: m.match_id.to_string(),
                status: m.status.to_string(),
            });
        }

        let already: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM contest_enrollments WHERE contest_id = ?1 AND user_team_id = ?2",
                params![contest_id.as_str(), team_id.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        if already.is_some() {
            return Err(FantasyError::AlreadyEnrolled {
                contest_id: contest_id.to_string(),
                team_id: team_id.to_string(),
            });
        }

        if contest.filled_spots >= contest.total_spots {
            return Err(FantasyError::ContestFull {
                contest_id: contest_id.to_string(),
            });
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO contest_enrollments (contest_id, user_team_id, enrolled_at)
             VALUES (?1, ?2, ?3)",
            params![contest_id.as_str(), team_id.as_str(), now_secs()?],
        )?;
        tx.execute(
            "UPDATE contests SET filled_spots = filled_spots + 1 WHERE contest_id = ?1",
            params![contest_id.as_str()],
        )?;
        tx.commit()?;

        let filled = contest.filled_spots + 1;
        info!(%contest_id, %team_id, filled, total = contest.total_spots, "team enrolled");
        Ok(filled)
    }

    /// Rank a contest's enrollments by team total, highest first, and store the ranks.
    ///
    /// Equal totals share a rank and the next rank skips ("1, 1, 3").
    pub fn rank_contest(&mut self, contest_id: &ContestId) -> Result<Vec<LeaderboardRow>> {
        if self.get_contest(contest_id)?.is_none() {
            return Err(FantasyError::ContestNotFound {
                contest_id: contest_id.to_string(),
            });
        }

        let mut rows = {
            let mut stmt = self.conn.prepare(
                "SELECT t.team_id, t.team_name, t.user_id, t.total_points
                 FROM contest_enrollments e
                 JOIN user_teams t ON t.team_id = e.user_team_id
                 WHERE e.contest_id = ?1
                 ORDER BY t.rowid",
            )?;
            let mapped = stmt.query_map(params![contest_id.as_str()], |row| {
                Ok(LeaderboardRow {
                    rank: 0,
                    team_id: UserTeamId::new(row.get::<_, String>(0)?),
                    team_name: row.get(1)?,
                    user_id: UserId::new(row.get::<_, String>(2)?),
                    total_points: row.get::<_, FantasyPoints>(3)?,
                })
            })?;

            let mut rows = Vec::new();
            for row in mapped {
                rows.push(row?);
            }
            rows
        };

        // Points are text columns, so order in Rust rather than SQL. The sort is stable,
        // so equal totals stay in team creation order.
        rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));

        let mut previous: Option<FantasyPoints> = None;
        let mut rank = 0u32;
        for (position, row) in rows.iter_mut().enumerate() {
            if previous != Some(row.total_points) {
                rank = position as u32 + 1;
                previous = Some(row.total_points);
            }
            row.rank = rank;
        }

        let tx = self.conn.transaction()?;
        {
            let mut update = tx.prepare(
                "UPDATE contest_enrollments SET contest_rank = ?1
                 WHERE contest_id = ?2 AND user_team_id = ?3",
            )?;
            for row in &rows {
                update.execute(params![row.rank, contest_id.as_str(), row.team_id.as_str()])?;
            }
        }
        tx.commit()?;

        Ok(rows)
    }
}
