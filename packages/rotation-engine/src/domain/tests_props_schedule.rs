//! Property-based tests for the initial schedule.

use proptest::prelude::*;

use crate::config::RotationConfig;
use crate::domain::{test_gens, test_prelude, RotationAnalyzer, ScheduleBuilder};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every match has four distinct players split 2+2.
    #[test]
    fn prop_matches_are_well_formed(
        players in test_gens::player_list(4, 24),
        target in test_gens::target(),
    ) {
        let config = RotationConfig { target_matches_per_player: target, ..RotationConfig::default() };
        let matches = ScheduleBuilder::new(config).build(&players).unwrap();
        for m in &matches {
            prop_assert!(m.is_well_formed(), "malformed match {:?}", m);
        }
    }

    /// Property: numbered 1..=M with M = ceil(n * T / 4).
    #[test]
    fn prop_numbering_is_contiguous_from_one(
        players in test_gens::player_list(4, 24),
        target in test_gens::target(),
    ) {
        let config = RotationConfig { target_matches_per_player: target, ..RotationConfig::default() };
        let matches = ScheduleBuilder::new(config).build(&players).unwrap();
        prop_assert_eq!(matches.len(), config.total_scheduled_matches(players.len()));
        for (i, m) in matches.iter().enumerate() {
            prop_assert_eq!(m.match_number as usize, i + 1);
        }
    }

    /// Property: everyone plays at least once and nobody exceeds the cap.
    #[test]
    fn prop_coverage_and_quota_bound(
        players in test_gens::player_list(4, 24),
        target in test_gens::target(),
    ) {
        let config = RotationConfig { target_matches_per_player: target, ..RotationConfig::default() };
        let matches = ScheduleBuilder::new(config).build(&players).unwrap();
        let report = RotationAnalyzer::analyze(&players, &matches);
        prop_assert!(report.min_matches() >= 1, "someone sat out: {:?}", report.unscheduled_players());
        prop_assert!(
            report.max_matches() <= config.quota_cap(players.len()),
            "max {} exceeds cap {}", report.max_matches(), config.quota_cap(players.len())
        );
    }

    /// Property: same players, same schedule.
    #[test]
    fn prop_build_is_deterministic(players in test_gens::player_list(4, 16)) {
        let builder = ScheduleBuilder::default();
        prop_assert_eq!(builder.build(&players).unwrap(), builder.build(&players).unwrap());
    }
}
