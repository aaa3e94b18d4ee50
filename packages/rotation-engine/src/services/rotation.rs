//! Rotation service: the entry point a request handler calls.
//!
//! Holds the validated policy and logs a summary of each call. The caller is
//! responsible for serializing record → regenerate → persist per event.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::RotationConfig;
use crate::domain::{
    next_match_number_after, Match, MatchParticipants, MatchRecordSanitizer, NormalizedMatch,
    PlayerId, RemainingScheduleBuilder, RotationAnalyzer, RotationReport, ScheduleBuilder,
};
use crate::errors::ScheduleError;

/// Output of [`RotationService::regenerate`]: what the caller merges and persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regeneration {
    /// Completed records that survived sanitization.
    pub completed: Vec<NormalizedMatch>,
    /// Newly generated matches, numbered after the completed ones.
    pub upcoming: Vec<Match>,
    /// Records that contributed nothing.
    pub skipped: usize,
}

impl Regeneration {
    /// Per-player view over completed and upcoming matches together.
    pub fn report(&self, players: &[PlayerId]) -> RotationReport {
        let all: Vec<&dyn MatchParticipants> = self
            .completed
            .iter()
            .map(|m| m as &dyn MatchParticipants)
            .chain(self.upcoming.iter().map(|m| m as &dyn MatchParticipants))
            .collect();
        RotationAnalyzer::analyze(players, all.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RotationService {
    config: RotationConfig,
}

impl RotationService {
    pub fn new(config: RotationConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    pub fn build_initial_schedule(&self, players: &[PlayerId]) -> Result<Vec<Match>, ScheduleError> {
        let result = ScheduleBuilder::new(self.config).build(players);
        match &result {
            Ok(matches) => info!(
                players = players.len(),
                matches = matches.len(),
                "Built initial schedule"
            ),
            Err(e) => warn!(players = players.len(), code = %e.code(), error = %e, "Initial schedule rejected"),
        }
        result
    }

    pub fn build_remaining_schedule(
        &self,
        players: &[PlayerId],
        completed: &[Value],
        next_match_number: i64,
    ) -> Result<Vec<Match>, ScheduleError> {
        let result =
            RemainingScheduleBuilder::new(self.config).build(players, completed, next_match_number);
        match &result {
            Ok(matches) => info!(
                players = players.len(),
                completed = completed.len(),
                next_match_number,
                matches = matches.len(),
                "Built remaining schedule"
            ),
            Err(e) => warn!(
                players = players.len(),
                next_match_number,
                code = %e.code(),
                error = %e,
                "Remaining schedule rejected"
            ),
        }
        result
    }

    /// Sanitize `completed`, number the continuation after the highest
    /// completed match number, and return both halves for the caller to merge.
    pub fn regenerate(
        &self,
        players: &[PlayerId],
        completed: &[Value],
    ) -> Result<Regeneration, ScheduleError> {
        let normalized = MatchRecordSanitizer::normalize_all(completed);
        let skipped = completed.len() - normalized.len();
        // Past u32::MAX the builder reports numbering exhausted and places nothing.
        let next = next_match_number_after(&normalized)
            .map_or(i64::from(u32::MAX) + 1, i64::from);
        let upcoming = RemainingScheduleBuilder::new(self.config).build_from_normalized(
            players,
            &normalized,
            next,
        )?;
        info!(
            players = players.len(),
            completed = normalized.len(),
            skipped,
            next_match_number = next,
            upcoming = upcoming.len(),
            "Regenerated remaining schedule"
        );
        Ok(Regeneration {
            completed: normalized,
            upcoming,
            skipped,
        })
    }

    pub fn analyze(&self, players: &[PlayerId], schedule: &[Match]) -> RotationReport {
        RotationAnalyzer::analyze(players, schedule)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorCode;

    fn players(n: usize) -> Vec<PlayerId> {
        (1..=n).map(|i| PlayerId::new(format!("p{i}"))).collect()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = RotationConfig {
            target_matches_per_player: 0,
            default_court: 1,
        };
        let err = RotationService::new(config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn initial_then_regenerate_round_trip() {
        let service = RotationService::default();
        let players = players(8);
        let initial = service.build_initial_schedule(&players).unwrap();
        assert_eq!(initial.len(), 4);

        let completed: Vec<Value> = initial[..2]
            .iter()
            .map(|m| {
                json!({
                    "matchNumber": m.match_number,
                    "players": m.players,
                    "status": "Completed",
                    "score": "11-9",
                    "winningTeam": 1
                })
            })
            .collect();
        let regen = service.regenerate(&players, &completed).unwrap();
        assert_eq!(regen.completed.len(), 2);
        assert_eq!(regen.skipped, 0);
        let numbers: Vec<u32> = regen.upcoming.iter().map(|m| m.match_number).collect();
        assert_eq!(numbers, vec![3, 4]);

        let report = regen.report(&players);
        assert_eq!(report.total_matches, 4);
        assert_eq!(report.min_matches(), 2);
        assert_eq!(report.max_matches(), 2);
    }

    #[test]
    fn regenerate_skips_bad_records_and_numbers_after_known_ones() {
        let service = RotationService::default();
        let players = players(6);
        let completed = vec![
            json!({"matchNumber": 1, "players": ["p1", "p2", "p3", "p4"]}),
            json!({"matchNumber": 2, "players": null}),
        ];
        let regen = service.regenerate(&players, &completed).unwrap();
        assert_eq!(regen.skipped, 1);
        assert_eq!(regen.upcoming.first().map(|m| m.match_number), Some(2));
        assert_eq!(regen.upcoming.len(), 2);
    }

    #[test]
    fn regenerate_never_reuses_the_last_match_number() {
        let service = RotationService::default();
        let players = players(6);
        let completed = vec![json!({
            "matchNumber": u32::MAX,
            "players": ["p1", "p2", "p3", "p4"]
        })];
        let regen = service.regenerate(&players, &completed).unwrap();
        assert_eq!(regen.completed.len(), 1);
        assert!(regen.upcoming.is_empty());
    }

    #[test]
    fn regenerate_fills_up_to_the_last_match_number() {
        let service = RotationService::default();
        let players = players(6);
        let completed = vec![json!({
            "matchNumber": u32::MAX - 1,
            "players": ["p1", "p2", "p3", "p4"]
        })];
        let regen = service.regenerate(&players, &completed).unwrap();
        let numbers: Vec<u32> = regen.upcoming.iter().map(|m| m.match_number).collect();
        assert_eq!(numbers, vec![u32::MAX]);
    }

    #[test]
    fn surfaces_insufficient_players() {
        let service = RotationService::default();
        let err = service.build_initial_schedule(&players(2)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InsufficientPlayers);
    }

    #[test]
    fn surfaces_numbering_errors() {
        let service = RotationService::default();
        let err = service
            .build_remaining_schedule(&players(6), &[], 0)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NumberingError);
    }
}
