//! Fantasy point computation.
//!
//! The point table is fixed. Batting points are only awarded when the player scored at
//! least one run and bowling points only when they took at least one wicket, so a
//! player with boundaries but zero runs (or maidens but zero wickets) gets nothing for
//! that discipline. Fielding always counts.

mod points;
mod stats;

pub use points::FantasyPoints;
pub use stats::{PlayerMatchStats, PlayerRole};


pub const RUN_POINTS: u64 = 1;
pub const BOUNDARY_BONUS: u64 = 1;
pub const SIX_BONUS: u64 = 2;
pub const HALF_CENTURY_BONUS: u64 = 25;
pub const CENTURY_BONUS: u64 = 50;

pub const WICKET_POINTS: u64 = 25;
pub const MAIDEN_OVER_BONUS: u64 = 12;

pub const CATCH_POINTS: u64 = 8;
pub const RUNOUT_POINTS: u64 = 10;
pub const STUMPING_POINTS: u64 = 12;

/// Un-multiplied points per discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub batting: u64,
    pub bowling: u64,
    pub fielding: u64,
}

impl PointsBreakdown {
    pub fn base(&self) -> u64 {
        self.batting + self.bowling + self.fielding
    }
}

/// Split a player's base points by discipline.
pub fn breakdown(stats: &PlayerMatchStats) -> PointsBreakdown {
    let runs = u64::from(stats.runs);
    let batting = if runs > 0 {
        let milestone = if runs >= 100 {
            CENTURY_BONUS
        } else if runs >= 50 {
            HALF_CENTURY_BONUS
        } else {
            0
        };
        runs * RUN_POINTS
            + u64::from(stats.fours) * BOUNDARY_BONUS
            + u64::from(stats.sixes) * SIX_BONUS
            + milestone
    } else {
        0
    };

    let wickets = u64::from(stats.wickets_taken);
    let bowling = if wickets > 0 {
        wickets * WICKET_POINTS + u64::from(stats.maidens) * MAIDEN_OVER_BONUS
    } else {
        0
    };

    let fielding = u64::from(stats.catches) * CATCH_POINTS
        + u64::from(stats.run_outs) * RUNOUT_POINTS
        + u64::from(stats.stumpings) * STUMPING_POINTS;

    PointsBreakdown {
        batting,
        bowling,
        fielding,
    }
}

/// Base points before any captain/vice-captain multiplier.
pub fn base_points(stats: &PlayerMatchStats) -> u64 {
    breakdown(stats).base()
}

/// Fantasy points for one player in one match, with the role multiplier applied to the
/// whole base.
pub fn score(stats: &PlayerMatchStats, role: PlayerRole) -> FantasyPoints {
    FantasyPoints::from_halves(base_points(stats) * role.halves_per_point())
}

/// Total for a user's XI: the sum of each pick's already role-adjusted score.
///
/// Callers pass the role alongside the stats and must not scale the result again.
pub fn team_total<'a, I>(picks: I) -> FantasyPoints
where
    I: IntoIterator<Item = (&'a PlayerMatchStats, PlayerRole)>,
{
    picks
        .into_iter()
        .map(|(stats, role)| score(stats, role))
        .sum()
}
