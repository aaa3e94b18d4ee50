//! Property-based tests for regeneration against untrusted completed records.

use proptest::prelude::*;
use serde_json::json;

use crate::config::RotationConfig;
use crate::domain::{
    test_gens, test_prelude, MatchParticipants, MatchRecordSanitizer, RemainingScheduleBuilder,
    RotationAnalyzer, ScheduleBuilder,
};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: whatever shape `players` takes, regeneration succeeds and is
    /// numbered from the requested start.
    #[test]
    fn prop_malformed_records_never_fail(
        (players, records) in test_gens::players_and_records(6),
        next in 1i64..1000,
    ) {
        let builder = RemainingScheduleBuilder::default();
        let matches = builder.build(&players, &records, next).unwrap();

        let usable = MatchRecordSanitizer::normalize_all(&records).len();
        let total = RotationConfig::default().total_scheduled_matches(players.len());
        prop_assert_eq!(matches.len(), total.saturating_sub(usable));
        for (i, m) in matches.iter().enumerate() {
            prop_assert_eq!(i64::from(m.match_number), next + i as i64);
            prop_assert!(m.is_well_formed());
        }
    }

    /// Property: identical inputs give identical output.
    #[test]
    fn prop_regeneration_is_idempotent(
        (players, records) in test_gens::players_and_records(4),
        next in 1i64..50,
    ) {
        let builder = RemainingScheduleBuilder::default();
        let first = builder.build(&players, &records, next).unwrap();
        let second = builder.build(&players, &records, next).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: continuing any prefix of a generated schedule keeps the
    /// combined schedule within the cap and covers everyone.
    #[test]
    fn prop_continuation_respects_quota_bound(
        players in test_gens::player_list(4, 20),
        target in test_gens::target(),
        played_fraction in 0.0f64..=1.0,
    ) {
        let config = RotationConfig { target_matches_per_player: target, ..RotationConfig::default() };
        let initial = ScheduleBuilder::new(config).build(&players).unwrap();
        let played = ((initial.len() as f64) * played_fraction).floor() as usize;

        let records: Vec<_> = initial[..played]
            .iter()
            .map(|m| json!({"matchNumber": m.match_number, "players": m.players, "status": "Completed"}))
            .collect();
        let normalized = MatchRecordSanitizer::normalize_all(&records);
        let upcoming = RemainingScheduleBuilder::new(config)
            .build(&players, &records, played as i64 + 1)
            .unwrap();
        prop_assert_eq!(played + upcoming.len(), initial.len());

        let combined: Vec<&dyn MatchParticipants> = normalized
            .iter()
            .map(|m| m as &dyn MatchParticipants)
            .chain(upcoming.iter().map(|m| m as &dyn MatchParticipants))
            .collect();
        let report = RotationAnalyzer::analyze(&players, combined.iter().copied());
        prop_assert!(report.min_matches() >= 1);
        prop_assert!(report.max_matches() <= config.quota_cap(players.len()));
    }
}
