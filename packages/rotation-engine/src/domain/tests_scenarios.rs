//! Worked scenarios for the initial and remaining schedule builders.

use serde_json::{json, Value};

use crate::domain::{
    MatchRecordSanitizer, MatchStatus, PlayerId, RemainingScheduleBuilder, RotationAnalyzer,
    ScheduleBuilder,
};

fn players(n: usize) -> Vec<PlayerId> {
    (1..=n).map(|i| PlayerId::new(format!("p{i}"))).collect()
}

#[test]
fn six_players_fresh_event() {
    let players = players(6);
    let matches = RemainingScheduleBuilder::default()
        .build(&players, &[], 1)
        .unwrap();

    assert_eq!(matches.len(), 3);
    for m in &matches {
        assert!(m.is_well_formed());
        assert!(m.players.iter().all(|p| players.contains(p)));
        assert_eq!(m.status, MatchStatus::Scheduled);
    }

    let report = RotationAnalyzer::analyze(&players, &matches);
    for stats in &report.players {
        assert_eq!(stats.matches_played, 2, "player {}", stats.player_id);
    }
}

#[test]
fn one_completed_match_lowers_quota_of_its_players() {
    let players = players(6);
    let completed = vec![json!({
        "matchNumber": 1,
        "players": ["p1", "p2", "p3", "p4"],
        "status": "Completed"
    })];
    let builder = RemainingScheduleBuilder::default();

    let normalized = MatchRecordSanitizer::normalize_all(&completed);
    let seeded = builder.seed_state(&players, &normalized);
    for early in &players[..4] {
        for late in &players[4..] {
            assert!(seeded.quota.remaining(early) < seeded.quota.remaining(late));
        }
    }

    let matches = builder.build(&players, &completed, 2).unwrap();
    let numbers: Vec<u32> = matches.iter().map(|m| m.match_number).collect();
    assert_eq!(numbers, vec![2, 3]);
    // p5 and p6 are owed two matches each and must appear in both.
    for m in &matches {
        assert!(m.has_player(&players[4]));
        assert!(m.has_player(&players[5]));
    }
}

#[test]
fn missing_players_field_counts_as_nothing() {
    let players = players(6);
    let completed = vec![json!({"matchNumber": 1, "status": "Completed"})];
    let matches = RemainingScheduleBuilder::default()
        .build(&players, &completed, 2)
        .unwrap();

    // Treated as zero completed matches: the full three are still owed.
    let numbers: Vec<u32> = matches.iter().map(|m| m.match_number).collect();
    assert_eq!(numbers, vec![2, 3, 4]);
    let report = RotationAnalyzer::analyze(&players, &matches);
    assert_eq!(report.min_matches(), 2);
    assert_eq!(report.max_matches(), 2);
}

#[test]
fn every_malformed_shape_is_tolerated_together() {
    let players = players(6);
    let completed: Vec<Value> = vec![
        json!({"matchNumber": 1}),
        json!({"matchNumber": 2, "players": null}),
        json!({"matchNumber": 3, "players": "p1"}),
        json!({"matchNumber": 4, "players": ["p1", null, "p2", null]}),
        json!({"matchNumber": 5, "players": [null, null]}),
        json!("garbage"),
    ];
    let matches = RemainingScheduleBuilder::default()
        .build(&players, &completed, 6)
        .unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].match_number, 6);
}

#[test]
fn minimum_pool_repeats_the_same_foursome() {
    let players = players(4);
    let matches = ScheduleBuilder::default().build(&players).unwrap();
    assert_eq!(matches.len(), 2);
    for m in &matches {
        let mut in_match: Vec<&PlayerId> = m.players.iter().collect();
        in_match.sort();
        let mut expected: Vec<&PlayerId> = players.iter().collect();
        expected.sort();
        assert_eq!(in_match, expected);
    }
    let report = RotationAnalyzer::analyze(&players, &matches);
    assert!(report.players.iter().all(|s| s.matches_played == 2));
}

#[test]
fn populated_references_seed_history_like_ids() {
    let players = players(8);
    let as_ids = vec![json!({"matchNumber": 1, "players": ["p1", "p2", "p3", "p4"]})];
    let as_refs = vec![json!({
        "matchNumber": 1,
        "players": [{"_id": "p1"}, {"_id": "p2"}, {"_id": "p3"}, {"_id": "p4"}]
    })];
    let builder = RemainingScheduleBuilder::default();
    assert_eq!(
        builder.build(&players, &as_ids, 2).unwrap(),
        builder.build(&players, &as_refs, 2).unwrap()
    );
}
