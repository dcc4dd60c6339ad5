//! Unit tests for roster validation

use super::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn gt() -> TeamId {
        TeamId::new("GT")
    }

    fn mi() -> TeamId {
        TeamId::new("MI")
    }

    fn entry(id: &str, team: &TeamId, player_type: PlayerType) -> RosterEntry {
        RosterEntry {
            player_id: PlayerId::new(id),
            origin_team_id: team.clone(),
            player_type,
            is_captain: false,
            is_vice_captain: false,
        }
    }

    /// 6 GT + 5 MI; 4 batsmen, 3 bowlers, 3 all-rounders, 1 keeper; p1 captain, p7 vice.
    fn legal_roster() -> RosterSelection {
        use PlayerType::*;
        let layout = [
            ("p1", gt(), Batsman),
            ("p2", gt(), Batsman),
            ("p3", gt(), Bowler),
            ("p4", gt(), Bowler),
            ("p5", gt(), AllRounder),
            ("p6", gt(), WicketKeeper),
            ("p7", mi(), Batsman),
            ("p8", mi(), Batsman),
            ("p9", mi(), Bowler),
            ("p10", mi(), AllRounder),
            ("p11", mi(), AllRounder),
        ];
        let mut players: Vec<RosterEntry> = layout
            .iter()
            .map(|(id, team, player_type)| entry(id, team, *player_type))
            .collect();
        players[0].is_captain = true;
        players[6].is_vice_captain = true;
        RosterSelection::new(players)
    }

    #[test]
    fn test_legal_roster_is_valid() {
        assert_eq!(validate(&legal_roster(), &gt(), &mi()), Ok(()));
    }

    #[test]
    fn test_team_order_does_not_matter() {
        assert_eq!(validate(&legal_roster(), &mi(), &gt()), Ok(()));
    }

    #[test]
    fn test_ten_players_is_wrong_count() {
        let mut roster = legal_roster();
        roster.players.pop();

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(err, RosterViolation::WrongPlayerCount { found: 10 });
        assert_eq!(err.to_string(), "wrong player count");
    }

    #[test]
    fn test_twelve_players_is_wrong_count() {
        let mut roster = legal_roster();
        roster
            .players
            .push(entry("p12", &mi(), PlayerType::Bowler));

        assert_eq!(
            validate(&roster, &gt(), &mi()),
            Err(RosterViolation::WrongPlayerCount { found: 12 })
        );
    }

    #[test]
    fn test_duplicate_player() {
        let mut roster = legal_roster();
        roster.players[10].player_id = PlayerId::new("p3");

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(
            err,
            RosterViolation::DuplicatePlayer {
                player_id: PlayerId::new("p3")
            }
        );
        assert_eq!(err.to_string(), "duplicate player");
    }

    #[test]
    fn test_seven_four_split_rejected() {
        let mut roster = legal_roster();
        roster.players[6].origin_team_id = gt();

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(err, RosterViolation::InvalidTeamDistribution);
        assert_eq!(err.to_string(), "invalid team distribution");
    }

    #[test]
    fn test_player_from_third_team_rejected() {
        let mut roster = legal_roster();
        roster.players[10].origin_team_id = TeamId::new("CSK");

        assert_eq!(
            validate(&roster, &gt(), &mi()),
            Err(RosterViolation::InvalidTeamDistribution)
        );
    }

    #[test]
    fn test_same_team_twice_rejected() {
        assert_eq!(
            validate(&legal_roster(), &gt(), &gt()),
            Err(RosterViolation::InvalidTeamDistribution)
        );
    }

    #[test]
    fn test_missing_wicket_keeper() {
        let mut roster = legal_roster();
        roster.players[5].player_type = PlayerType::Batsman;

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(
            err,
            RosterViolation::InvalidTypeDistribution {
                player_type: PlayerType::WicketKeeper,
                count: 0
            }
        );
        assert_eq!(err.to_string(), "invalid type distribution");
    }

    #[test]
    fn test_six_of_one_type_rejected() {
        let mut roster = legal_roster();
        // 4 batsmen -> 6 batsmen, bowlers drop to 1
        roster.players[2].player_type = PlayerType::Batsman;
        roster.players[3].player_type = PlayerType::Batsman;

        assert_eq!(
            validate(&roster, &gt(), &mi()),
            Err(RosterViolation::InvalidTypeDistribution {
                player_type: PlayerType::Batsman,
                count: 6
            })
        );
    }

    #[test]
    fn test_five_of_one_type_allowed() {
        let mut roster = legal_roster();
        // 4 batsmen -> 5, all-rounders 3 -> 2
        roster.players[4].player_type = PlayerType::Batsman;

        assert_eq!(validate(&roster, &gt(), &mi()), Ok(()));
    }

    #[test]
    fn test_two_captains() {
        let mut roster = legal_roster();
        roster.players[3].is_captain = true;

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(err, RosterViolation::InvalidCaptainSelection { count: 2 });
        assert_eq!(err.to_string(), "invalid captain selection");
    }

    #[test]
    fn test_no_captain() {
        let mut roster = legal_roster();
        roster.players[0].is_captain = false;

        assert_eq!(
            validate(&roster, &gt(), &mi()),
            Err(RosterViolation::InvalidCaptainSelection { count: 0 })
        );
    }

    #[test]
    fn test_two_vice_captains() {
        let mut roster = legal_roster();
        roster.players[8].is_vice_captain = true;

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(err, RosterViolation::InvalidViceCaptainSelection { count: 2 });
        assert_eq!(err.to_string(), "invalid vice-captain selection");
    }

    #[test]
    fn test_captain_is_vice_captain() {
        let mut roster = legal_roster();
        roster.players[6].is_vice_captain = false;
        roster.players[0].is_vice_captain = true;

        let err = validate(&roster, &gt(), &mi()).unwrap_err();
        assert_eq!(
            err,
            RosterViolation::CaptainIsViceCaptain {
                player_id: PlayerId::new("p1")
            }
        );
        assert_eq!(err.to_string(), "captain and vice-captain must differ");
    }

    #[test]
    fn test_first_violation_wins() {
        // Wrong count, duplicate and missing captain all at once.
        let mut roster = legal_roster();
        roster.players.pop();
        roster.players[1].player_id = PlayerId::new("p1");
        roster.players[0].is_captain = false;

        assert_eq!(
            validate(&roster, &gt(), &mi()),
            Err(RosterViolation::WrongPlayerCount { found: 10 })
        );
    }

    #[test]
    fn test_team_split_checked_before_types() {
        let mut roster = legal_roster();
        roster.players[6].origin_team_id = gt();
        roster.players[5].player_type = PlayerType::Batsman;

        assert_eq!(
            validate(&roster, &gt(), &mi()),
            Err(RosterViolation::InvalidTeamDistribution)
        );
    }

    #[test]
    fn test_roles_follow_flags() {
        let roster = legal_roster();
        assert_eq!(roster.captain().unwrap().player_id, PlayerId::new("p1"));
        assert_eq!(roster.vice_captain().unwrap().player_id, PlayerId::new("p7"));
        assert_eq!(roster.players[0].role(), PlayerRole::Captain);
        assert_eq!(roster.players[6].role(), PlayerRole::ViceCaptain);
        assert_eq!(roster.players[1].role(), PlayerRole::None);
    }

    #[test]
    fn test_roster_deserializes_from_submission_json() {
        let json = serde_json::json!({
            "players": [{
                "playerId": "p1",
                "originTeamId": "GT",
                "playerType": "WICKET_KEEPER",
                "isCaptain": true
            }]
        });
        let roster: RosterSelection = serde_json::from_value(json).unwrap();
        let first = &roster.players[0];
        assert_eq!(first.player_type, PlayerType::WicketKeeper);
        assert!(first.is_captain);
        assert!(!first.is_vice_captain);
    }
}
