//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{
    contest::{ContestStatus, ContestType},
    ids::{ContestId, MatchId, PlayerId, TeamId, UserId, UserTeamId},
    player_type::PlayerType,
    status::MatchStatus,
};
use crate::error::FantasyError;
use crate::roster::RosterViolation;
use crate::scoring::{FantasyPoints, PlayerMatchStats};

const GT_SQUAD: [(&str, PlayerType); 7] = [
    ("p1", PlayerType::Batsman),
    ("p2", PlayerType::Batsman),
    ("p3", PlayerType::Bowler),
    ("p4", PlayerType::AllRounder),
    ("p5", PlayerType::WicketKeeper),
    ("p6", PlayerType::Bowler),
    ("p12", PlayerType::Bowler),
];

const MI_SQUAD: [(&str, PlayerType); 5] = [
    ("p7", PlayerType::Batsman),
    ("p8", PlayerType::Batsman),
    ("p9", PlayerType::Bowler),
    ("p10", PlayerType::AllRounder),
    ("p11", PlayerType::AllRounder),
];

fn create_test_db() -> PlayerDatabase {
    PlayerDatabase::new_in_memory().unwrap()
}

fn add_player(db: &mut PlayerDatabase, id: &str, player_type: PlayerType, team: &str) {
    db.upsert_player(&Player {
        player_id: PlayerId::new(id),
        full_name: format!("Player {}", id),
        player_type,
        team_id: TeamId::new(team),
    })
    .unwrap();
}

/// GT vs MI, upcoming, with full squads plus one CSK player outside the match
fn create_test_db_with_match() -> PlayerDatabase {
    let mut db = create_test_db();

    for (id, name) in [("GT", "Gujarat Titans"), ("MI", "Mumbai Indians"), ("CSK", "Chennai Super Kings")] {
        db.upsert_team(&Team {
            team_id: TeamId::new(id),
            team_name: name.to_string(),
        })
        .unwrap();
    }
    for (id, player_type) in GT_SQUAD {
        add_player(&mut db, id, player_type, "GT");
    }
    for (id, player_type) in MI_SQUAD {
        add_player(&mut db, id, player_type, "MI");
    }
    add_player(&mut db, "p20", PlayerType::Batsman, "CSK");

    db.upsert_match(&Match {
        match_id: MatchId::new("m1"),
        home_team_id: TeamId::new("GT"),
        away_team_id: TeamId::new("MI"),
        match_date: Some("2025-05-06".to_string()),
        status: MatchStatus::Upcoming,
    })
    .unwrap();

    db
}

fn legal_picks() -> Vec<TeamPick> {
    ["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11"]
        .iter()
        .map(|id| TeamPick {
            player_id: PlayerId::new(*id),
            is_captain: *id == "p1",
            is_vice_captain: *id == "p7",
        })
        .collect()
}

fn submission(user: &str, players: Vec<TeamPick>) -> UserTeamSubmission {
    UserTeamSubmission {
        team_id: None,
        user_id: UserId::new(user),
        match_id: MatchId::new("m1"),
        team_name: format!("{}'s XI", user),
        players,
    }
}

fn stats(runs: u32, fours: u32, sixes: u32, wickets: u32, catches: u32) -> PlayerMatchStats {
    PlayerMatchStats {
        runs,
        fours,
        sixes,
        wickets_taken: wickets,
        catches,
        ..Default::default()
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_upsert_player_moves_active_squad() {
    let mut db = create_test_db_with_match();

    add_player(&mut db, "p12", PlayerType::Bowler, "MI");

    let gt: Vec<PlayerId> = db
        .get_squad(&TeamId::new("GT"))
        .unwrap()
        .into_iter()
        .map(|p| p.player_id)
        .collect();
    assert!(!gt.contains(&PlayerId::new("p12")));

    let mi = db.get_squad(&TeamId::new("MI")).unwrap();
    assert_eq!(mi.len(), 6);
    assert!(mi.iter().any(|p| p.player_id.as_str() == "p12"));
}

#[test]
fn test_get_match_and_status() {
    let mut db = create_test_db_with_match();
    let m = db.get_match(&MatchId::new("m1")).unwrap().unwrap();
    assert_eq!(m.status, MatchStatus::Upcoming);
    assert_eq!(m.home_team_id.as_str(), "GT");

    db.set_match_status(&MatchId::new("m1"), MatchStatus::Live).unwrap();
    let m = db.require_match(&MatchId::new("m1")).unwrap();
    assert_eq!(m.status, MatchStatus::Live);

    assert!(db.get_match(&MatchId::new("nope")).unwrap().is_none());
    assert!(matches!(
        db.set_match_status(&MatchId::new("nope"), MatchStatus::Live),
        Err(FantasyError::MatchNotFound { .. })
    ));
}

#[test]
fn test_save_new_user_team() {
    let mut db = create_test_db_with_match();
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();
    assert_eq!(team_id.as_str(), "m1-1");

    let team = db.get_user_team(&team_id).unwrap().unwrap();
    assert_eq!(team.user_id.as_str(), "u1");
    assert_eq!(team.total_points, FantasyPoints::ZERO);
    assert_eq!(team.players.len(), 11);
    // Submission order survives the round trip
    assert_eq!(team.players[0].player_id.as_str(), "p1");
    assert!(team.players[0].is_captain);
    assert!(team.players[6].is_vice_captain);

    let second = db.save_user_team(&submission("u2", legal_picks())).unwrap();
    assert_eq!(second.as_str(), "m1-2");
}

#[test]
fn test_update_user_team_replaces_picks() {
    let mut db = create_test_db_with_match();
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();

    // Swap p6 for p12 and move the captaincy
    let mut picks = legal_picks();
    picks[5].player_id = PlayerId::new("p12");
    picks[0].is_captain = false;
    picks[1].is_captain = true;

    let mut update = submission("u1", picks);
    update.team_id = Some(team_id.clone());
    update.team_name = "Renamed".to_string();
    assert_eq!(db.save_user_team(&update).unwrap(), team_id);

    let team = db.get_user_team(&team_id).unwrap().unwrap();
    assert_eq!(team.team_name, "Renamed");
    assert_eq!(team.players.len(), 11);
    assert!(team.players.iter().any(|p| p.player_id.as_str() == "p12"));
    assert!(!team.players.iter().any(|p| p.player_id.as_str() == "p6"));
    assert!(team.players[1].is_captain);
}

#[test]
fn test_update_someone_elses_team_rejected() {
    let mut db = create_test_db_with_match();
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();

    let mut update = submission("intruder", legal_picks());
    update.team_id = Some(team_id);
    assert!(matches!(
        db.save_user_team(&update),
        Err(FantasyError::TeamNotFound { .. })
    ));
}

#[test]
fn test_save_team_requires_upcoming_match() {
    let mut db = create_test_db_with_match();
    db.set_match_status(&MatchId::new("m1"), MatchStatus::Live).unwrap();

    match db.save_user_team(&submission("u1", legal_picks())) {
        Err(FantasyError::MatchNotUpcoming { match_id, status }) => {
            assert_eq!(match_id, "m1");
            assert_eq!(status, "LIVE");
        }
        other => panic!("Expected MatchNotUpcoming, got {:?}", other),
    }
}

#[test]
fn test_save_team_unknown_match() {
    let mut db = create_test_db_with_match();
    let mut sub = submission("u1", legal_picks());
    sub.match_id = MatchId::new("m404");
    assert!(matches!(
        db.save_user_team(&sub),
        Err(FantasyError::MatchNotFound { .. })
    ));
}

#[test]
fn test_player_outside_match_rejected() {
    let mut db = create_test_db_with_match();
    let mut picks = legal_picks();
    picks[1].player_id = PlayerId::new("p20");

    match db.save_user_team(&submission("u1", picks)) {
        Err(FantasyError::PlayerNotInMatch { player_id }) => assert_eq!(player_id, "p20"),
        other => panic!("Expected PlayerNotInMatch, got {:?}", other),
    }
}

#[test]
fn test_roster_violation_surfaces() {
    let mut db = create_test_db_with_match();

    // 7 GT players
    let mut picks = legal_picks();
    picks[10].player_id = PlayerId::new("p12");
    match db.save_user_team(&submission("u1", picks)) {
        Err(FantasyError::Roster(v)) => assert_eq!(v, RosterViolation::InvalidTeamDistribution),
        other => panic!("Expected roster violation, got {:?}", other),
    }

    let mut picks = legal_picks();
    picks.pop();
    let err = db.save_user_team(&submission("u1", picks)).unwrap_err();
    assert_eq!(err.to_string(), "Roster rejected: wrong player count");

    // Nothing persisted for rejected rosters
    assert!(db.get_match_team_picks(&MatchId::new("m1")).unwrap().is_empty());
}

#[test]
fn test_performance_stores_base_points() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");

    let points = db
        .upsert_performance(&m1, &PlayerId::new("p1"), &stats(50, 4, 0, 0, 0))
        .unwrap();
    assert_eq!(points, FantasyPoints::from_whole(79));
    assert_eq!(
        db.get_performance_points(&m1, &PlayerId::new("p1")).unwrap(),
        Some(FantasyPoints::from_whole(79))
    );

    // Replaced, not accumulated
    db.upsert_performance(&m1, &PlayerId::new("p1"), &stats(10, 0, 0, 0, 0))
        .unwrap();
    let performances = db.get_performances(&m1).unwrap();
    assert_eq!(performances.len(), 1);
    assert_eq!(performances[&PlayerId::new("p1")].runs, 10);
}

#[test]
fn test_recompute_applies_roles_once() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();

    let records = vec![
        // captain: 79 base -> 158
        PerformanceRecord {
            player_id: PlayerId::new("p1"),
            stats: stats(50, 4, 0, 0, 0),
        },
        // vice-captain: 12 base -> 18
        PerformanceRecord {
            player_id: PlayerId::new("p7"),
            stats: stats(10, 0, 1, 0, 0),
        },
        PerformanceRecord {
            player_id: PlayerId::new("p3"),
            stats: stats(0, 0, 0, 2, 0),
        },
        PerformanceRecord {
            player_id: PlayerId::new("p5"),
            stats: stats(0, 0, 0, 0, 1),
        },
    ];

    let summary = db.ingest_performances(&m1, &records).unwrap();
    assert_eq!(summary.performances, 4);
    assert_eq!(summary.teams_updated, 1);

    let team = db.get_user_team(&team_id).unwrap().unwrap();
    assert_eq!(team.total_points, FantasyPoints::from_whole(234));

    // Running it again must not inflate the total
    db.recompute_match_points(&m1).unwrap();
    let team = db.get_user_team(&team_id).unwrap().unwrap();
    assert_eq!(team.total_points, FantasyPoints::from_whole(234));
}

#[test]
fn test_recompute_half_points() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();

    // vice-captain with 7 base -> 10.5
    db.ingest_performances(
        &m1,
        &[PerformanceRecord {
            player_id: PlayerId::new("p7"),
            stats: stats(7, 0, 0, 0, 0),
        }],
    )
    .unwrap();

    let team = db.get_user_team(&team_id).unwrap().unwrap();
    assert_eq!(team.total_points.to_string(), "10.5");
}

#[test]
fn test_recompute_unknown_match() {
    let mut db = create_test_db_with_match();
    assert!(matches!(
        db.recompute_match_points(&MatchId::new("m404")),
        Err(FantasyError::MatchNotFound { .. })
    ));
}

fn create_contest(db: &mut PlayerDatabase, spots: u32) -> ContestId {
    let contest = Contest {
        contest_id: ContestId::new("c1"),
        match_id: MatchId::new("m1"),
        contest_name: "Mega".to_string(),
        total_spots: spots,
        filled_spots: 0,
        contest_type: ContestType::Mega,
        entry_fee: 49,
        total_prize_pool: 10_000,
        status: ContestStatus::Created,
    };
    db.create_contest(&contest).unwrap();
    contest.contest_id
}

#[test]
fn test_enroll_fills_spots() {
    let mut db = create_test_db_with_match();
    let contest = create_contest(&mut db, 2);
    let a = db.save_user_team(&submission("u1", legal_picks())).unwrap();
    let b = db.save_user_team(&submission("u2", legal_picks())).unwrap();
    let c = db.save_user_team(&submission("u3", legal_picks())).unwrap();

    assert_eq!(db.enroll(&contest, &a).unwrap(), 1);
    assert!(matches!(
        db.enroll(&contest, &a),
        Err(FantasyError::AlreadyEnrolled { .. })
    ));
    assert_eq!(db.enroll(&contest, &b).unwrap(), 2);
    assert!(matches!(
        db.enroll(&contest, &c),
        Err(FantasyError::ContestFull { .. })
    ));
    assert_eq!(db.get_contest(&contest).unwrap().unwrap().filled_spots, 2);
}

#[test]
fn test_enroll_errors() {
    let mut db = create_test_db_with_match();
    let contest = create_contest(&mut db, 10);
    let team = db.save_user_team(&submission("u1", legal_picks())).unwrap();

    assert!(matches!(
        db.enroll(&ContestId::new("nope"), &team),
        Err(FantasyError::ContestNotFound { .. })
    ));
    assert!(matches!(
        db.enroll(&contest, &UserTeamId::new("nope")),
        Err(FantasyError::TeamNotFound { .. })
    ));

    db.set_match_status(&MatchId::new("m1"), MatchStatus::Live).unwrap();
    assert!(matches!(
        db.enroll(&contest, &team),
        Err(FantasyError::MatchNotUpcoming { .. })
    ));
}

#[test]
fn test_enroll_other_match_rejected() {
    let mut db = create_test_db_with_match();
    db.upsert_match(&Match {
        match_id: MatchId::new("m2"),
        home_team_id: TeamId::new("MI"),
        away_team_id: TeamId::new("GT"),
        match_date: None,
        status: MatchStatus::Upcoming,
    })
    .unwrap();
    let contest = create_contest(&mut db, 10);

    let mut sub = submission("u1", legal_picks());
    sub.match_id = MatchId::new("m2");
    let team = db.save_user_team(&sub).unwrap();

    assert!(matches!(
        db.enroll(&contest, &team),
        Err(FantasyError::ContestMatchMismatch { .. })
    ));
}

#[test]
fn test_rank_contest_ties_share_rank() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");
    let contest = create_contest(&mut db, 10);

    // u1 and u2 pick the same XI; u3 makes p2 captain instead
    let a = db.save_user_team(&submission("u1", legal_picks())).unwrap();
    let b = db.save_user_team(&submission("u2", legal_picks())).unwrap();
    let mut picks = legal_picks();
    picks[0].is_captain = false;
    picks[1].is_captain = true;
    let c = db.save_user_team(&submission("u3", picks)).unwrap();
    for team in [&a, &b, &c] {
        db.enroll(&contest, team).unwrap();
    }

    db.ingest_performances(
        &m1,
        &[PerformanceRecord {
            player_id: PlayerId::new("p1"),
            stats: stats(30, 0, 0, 0, 0),
        }],
    )
    .unwrap();

    let rows = db.rank_contest(&contest).unwrap();
    let ranks: Vec<(u32, &str, String)> = rows
        .iter()
        .map(|r| (r.rank, r.team_id.as_str(), r.total_points.to_string()))
        .collect();
    assert_eq!(
        ranks,
        vec![
            (1, "m1-1", "60".to_string()),
            (1, "m1-2", "60".to_string()),
            (3, "m1-3", "30".to_string()),
        ]
    );
}

#[test]
fn test_rank_unknown_contest() {
    let mut db = create_test_db_with_match();
    assert!(matches!(
        db.rank_contest(&ContestId::new("nope")),
        Err(FantasyError::ContestNotFound { .. })
    ));
}

#[test]
fn test_open_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("fantasy.db");
    {
        let mut db = PlayerDatabase::open(&path).unwrap();
        db.upsert_team(&Team {
            team_id: TeamId::new("GT"),
            team_name: "Gujarat Titans".to_string(),
        })
        .unwrap();
    }
    assert!(path.exists());

    // Reopening keeps data and tolerates the existing schema
    let db = PlayerDatabase::open(&path).unwrap();
    assert!(db.get_squad(&TeamId::new("GT")).unwrap().is_empty());
}

#[test]
fn test_ingest_batch_is_all_or_nothing() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();

    db.ingest_performances(
        &m1,
        &[PerformanceRecord {
            player_id: PlayerId::new("p1"),
            stats: stats(20, 0, 0, 0, 0),
        }],
    )
    .unwrap();
    assert_eq!(
        db.get_user_team(&team_id).unwrap().unwrap().total_points,
        FantasyPoints::from_whole(40)
    );

    // Second record references a player that does not exist
    let batch = [
        PerformanceRecord {
            player_id: PlayerId::new("p1"),
            stats: stats(60, 0, 0, 0, 0),
        },
        PerformanceRecord {
            player_id: PlayerId::new("ghost"),
            stats: stats(10, 0, 0, 0, 0),
        },
    ];
    assert!(db.ingest_performances(&m1, &batch).is_err());

    assert_eq!(
        db.get_performance_points(&m1, &PlayerId::new("p1")).unwrap(),
        Some(FantasyPoints::from_whole(20))
    );
    assert!(db
        .get_performance_points(&m1, &PlayerId::new("ghost"))
        .unwrap()
        .is_none());
    assert_eq!(
        db.get_user_team(&team_id).unwrap().unwrap().total_points,
        FantasyPoints::from_whole(40)
    );
}

#[test]
fn test_finished_match_cannot_reopen() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");

    db.set_match_status(&m1, MatchStatus::Completed).unwrap();
    match db.set_match_status(&m1, MatchStatus::Upcoming) {
        Err(FantasyError::InvalidStatusTransition { match_id, from, to }) => {
            assert_eq!(match_id, "m1");
            assert_eq!(from, "COMPLETED");
            assert_eq!(to, "UPCOMING");
        }
        other => panic!("Expected InvalidStatusTransition, got {:?}", other),
    }
    assert!(matches!(
        db.set_match_status(&m1, MatchStatus::Live),
        Err(FantasyError::InvalidStatusTransition { .. })
    ));

    // Re-importing the fixture as upcoming is rejected the same way
    let mut reopened = db.require_match(&m1).unwrap();
    reopened.status = MatchStatus::Upcoming;
    assert!(matches!(
        db.upsert_match(&reopened),
        Err(FantasyError::InvalidStatusTransition { .. })
    ));

    assert_eq!(db.require_match(&m1).unwrap().status, MatchStatus::Completed);
    assert!(matches!(
        db.save_user_team(&submission("u1", legal_picks())),
        Err(FantasyError::MatchNotUpcoming { .. })
    ));
}

#[test]
fn test_live_match_cannot_go_back_to_upcoming() {
    let mut db = create_test_db_with_match();
    let m1 = MatchId::new("m1");

    db.set_match_status(&m1, MatchStatus::Live).unwrap();
    db.set_match_status(&m1, MatchStatus::Live).unwrap();
    assert!(db.set_match_status(&m1, MatchStatus::Upcoming).is_err());
    db.set_match_status(&m1, MatchStatus::Canceled).unwrap();
    assert!(db.set_match_status(&m1, MatchStatus::Completed).is_err());
}

#[test]
fn test_team_name_length() {
    let mut db = create_test_db_with_match();
    let too_long = "x".repeat(51);
    let longest = "é".repeat(50);

    for name in ["XI", "  ab  ", too_long.as_str()] {
        let mut sub = submission("u1", legal_picks());
        sub.team_name = name.to_string();
        assert!(
            matches!(
                db.save_user_team(&sub),
                Err(FantasyError::InvalidTeamName { .. })
            ),
            "name {:?}",
            name
        );
    }

    for name in ["XYZ", longest.as_str()] {
        let mut sub = submission("u1", legal_picks());
        sub.team_name = name.to_string();
        assert!(db.save_user_team(&sub).is_ok(), "name {:?}", name);
    }
}

#[test]
fn test_create_contest_keeps_match_and_enrollment() {
    let mut db = create_test_db_with_match();
    db.upsert_match(&Match {
        match_id: MatchId::new("m2"),
        home_team_id: TeamId::new("MI"),
        away_team_id: TeamId::new("GT"),
        match_date: None,
        status: MatchStatus::Upcoming,
    })
    .unwrap();
    let contest_id = create_contest(&mut db, 3);
    let a = db.save_user_team(&submission("u1", legal_picks())).unwrap();
    let b = db.save_user_team(&submission("u2", legal_picks())).unwrap();
    db.enroll(&contest_id, &a).unwrap();
    db.enroll(&contest_id, &b).unwrap();

    let mut contest = db.get_contest(&contest_id).unwrap().unwrap();

    let mut moved = contest.clone();
    moved.match_id = MatchId::new("m2");
    assert!(matches!(
        db.create_contest(&moved),
        Err(FantasyError::ContestMatchChanged { .. })
    ));

    contest.total_spots = 1;
    match db.create_contest(&contest) {
        Err(FantasyError::ContestSpotsBelowFilled {
            total_spots,
            filled_spots,
            ..
        }) => {
            assert_eq!(total_spots, 1);
            assert_eq!(filled_spots, 2);
        }
        other => panic!("Expected ContestSpotsBelowFilled, got {:?}", other),
    }

    // Shrinking to exactly the enrollment is fine, and the fill count is kept
    contest.total_spots = 2;
    contest.contest_type = ContestType::Premium;
    contest.filled_spots = 0;
    db.create_contest(&contest).unwrap();
    let stored = db.get_contest(&contest_id).unwrap().unwrap();
    assert_eq!(stored.match_id.as_str(), "m1");
    assert_eq!(stored.total_spots, 2);
    assert_eq!(stored.filled_spots, 2);
    assert_eq!(stored.contest_type, ContestType::Premium);
}

#[test]
fn test_rank_ties_follow_creation_order() {
    let mut db = create_test_db_with_match();
    let contest = create_contest(&mut db, 20);

    let mut teams = Vec::new();
    for n in 1..=11 {
        let team = db
            .save_user_team(&submission(&format!("u{}", n), legal_picks()))
            .unwrap();
        teams.push(team);
    }
    // Enroll in reverse so enrollment order differs from creation order
    for team in teams.iter().rev() {
        db.enroll(&contest, team).unwrap();
    }

    let rows = db.rank_contest(&contest).unwrap();
    let ids: Vec<&UserTeamId> = rows.iter().map(|r| &r.team_id).collect();
    assert_eq!(ids, teams.iter().collect::<Vec<_>>());
    assert_eq!(rows[9].team_id.as_str(), "m1-10");
    assert!(rows.iter().all(|r| r.rank == 1));
}

#[test]
fn test_upcoming_matches_by_date() {
    let mut db = create_test_db_with_match();
    for (id, date, status) in [
        ("m2", Some("2025-04-01"), MatchStatus::Upcoming),
        ("m3", None, MatchStatus::Upcoming),
        ("m4", Some("2025-03-01"), MatchStatus::Completed),
        ("m5", Some("2025-05-20"), MatchStatus::Upcoming),
    ] {
        db.upsert_match(&Match {
            match_id: MatchId::new(id),
            home_team_id: TeamId::new("GT"),
            away_team_id: TeamId::new("MI"),
            match_date: date.map(str::to_string),
            status,
        })
        .unwrap();
    }

    let ids = |matches: Vec<Match>| -> Vec<String> {
        matches.into_iter().map(|m| m.match_id.to_string()).collect()
    };
    assert_eq!(
        ids(db.upcoming_matches(None).unwrap()),
        vec!["m2", "m1", "m5", "m3"]
    );
    assert_eq!(
        ids(db.upcoming_matches(Some("2025-05-01")).unwrap()),
        vec!["m1", "m5"]
    );
}

#[test]
fn test_contests_grouped_by_type() {
    let mut db = create_test_db_with_match();
    for (id, contest_type, fee) in [
        ("c-mega-big", ContestType::Mega, 99),
        ("c-h2h", ContestType::HeadToHead, 25),
        ("c-mega-small", ContestType::Mega, 19),
    ] {
        db.create_contest(&Contest {
            contest_id: ContestId::new(id),
            match_id: MatchId::new("m1"),
            contest_name: id.to_string(),
            total_spots: 100,
            filled_spots: 0,
            contest_type,
            entry_fee: fee,
            total_prize_pool: fee * 80,
            status: ContestStatus::Created,
        })
        .unwrap();
    }

    let listing = db.contests_for_match(&MatchId::new("m1")).unwrap();
    assert_eq!(listing.contests_count, 3);
    assert_eq!(listing.contests.len(), 4);
    let mega: Vec<&str> = listing.contests[&ContestType::Mega]
        .iter()
        .map(|c| c.contest_id.as_str())
        .collect();
    assert_eq!(mega, vec!["c-mega-small", "c-mega-big"]);
    assert_eq!(listing.contests[&ContestType::HeadToHead].len(), 1);
    assert!(listing.contests[&ContestType::Practice].is_empty());

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["contests"]["PREMIUM"], serde_json::json!([]));
    assert_eq!(json["contestsCount"], 3);

    assert!(matches!(
        db.contests_for_match(&MatchId::new("m404")),
        Err(FantasyError::MatchNotFound { .. })
    ));
}

#[test]
fn test_team_squad_lookup() {
    let db = create_test_db_with_match();

    let (team, squad) = db.get_team_squad(&TeamId::new("MI")).unwrap();
    assert_eq!(team.team_name, "Mumbai Indians");
    assert_eq!(squad.len(), 5);

    assert!(matches!(
        db.get_team_squad(&TeamId::new("RCB")),
        Err(FantasyError::SquadTeamNotFound { .. })
    ));
}

#[test]
fn test_team_details() {
    let mut db = create_test_db_with_match();
    let contest = create_contest(&mut db, 10);
    let team_id = db.save_user_team(&submission("u1", legal_picks())).unwrap();
    db.enroll(&contest, &team_id).unwrap();
    db.rank_contest(&contest).unwrap();

    let details = db.get_team_details(&team_id).unwrap().unwrap();
    assert_eq!(details.fixture.match_id.as_str(), "m1");
    assert_eq!(details.players.len(), 11);
    assert_eq!(details.players[0].full_name, "Player p1");
    assert_eq!(details.players[0].player_type, PlayerType::Batsman);
    assert!(details.players[0].is_captain);
    assert_eq!(details.enrollments.len(), 1);
    assert_eq!(details.enrollments[0].contest_id, contest);
    assert_eq!(details.enrollments[0].rank, Some(1));

    assert!(db
        .get_team_details(&UserTeamId::new("nope"))
        .unwrap()
        .is_none());
}
