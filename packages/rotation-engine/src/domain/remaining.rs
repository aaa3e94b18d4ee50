//! Continuation schedule after some matches have been completed.
//!
//! History and quota are seeded from the sanitized completed matches, then
//! the same placement as the initial schedule fills the remaining slots.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RotationConfig;
use crate::domain::history::TeammateHistory;
use crate::domain::placement::{distinct_players, Placement};
use crate::domain::quota::PlayerQuota;
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::sanitize::{MatchRecordSanitizer, NormalizedMatch};
use crate::domain::types::{Match, PlayerId};
use crate::errors::ScheduleError;

/// History and quota as they stand after the completed matches.
#[derive(Debug, Clone)]
pub struct SeededState {
    pub history: TeammateHistory,
    pub quota: PlayerQuota,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemainingScheduleBuilder {
    config: RotationConfig,
}

impl RemainingScheduleBuilder {
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    /// Sanitize raw completed records, then build the remaining matches.
    pub fn build(
        &self,
        players: &[PlayerId],
        completed: &[Value],
        next_match_number: i64,
    ) -> Result<Vec<Match>, ScheduleError> {
        let normalized = MatchRecordSanitizer::normalize_all(completed);
        if normalized.len() != completed.len() {
            debug!(
                received = completed.len(),
                usable = normalized.len(),
                "Some completed records contributed nothing"
            );
        }
        self.build_from_normalized(players, &normalized, next_match_number)
    }

    /// Build the remaining matches from already sanitized records.
    pub fn build_from_normalized(
        &self,
        players: &[PlayerId],
        completed: &[NormalizedMatch],
        next_match_number: i64,
    ) -> Result<Vec<Match>, ScheduleError> {
        self.config.validate()?;
        if next_match_number <= 0 {
            return Err(ScheduleError::numbering(format!(
                "next match number must be positive, got {next_match_number}"
            )));
        }

        let players = distinct_players(players);
        let total = self.config.total_scheduled_matches(players.len());
        let remaining = total.saturating_sub(completed.len());
        if remaining == 0 {
            debug!(total, completed = completed.len(), "No matches remaining");
            return Ok(Vec::new());
        }

        let Some(first_number) = u32::try_from(next_match_number).ok() else {
            warn!(next_match_number, remaining, "Match numbering exhausted");
            return Ok(Vec::new());
        };
        let available = usize::try_from(u32::MAX - first_number)
            .map_or(usize::MAX, |n| n.saturating_add(1));
        let count = remaining.min(available);
        if count < remaining {
            warn!(
                next_match_number,
                remaining, count, "Match numbering exhausted, truncating remaining schedule"
            );
        }

        if players.len() < MIN_PLAYERS {
            return Err(ScheduleError::InsufficientPlayers {
                required: MIN_PLAYERS,
                actual: players.len(),
            });
        }

        let SeededState { history, quota } = self.seed_state(&players, completed);
        debug!(
            players = players.len(),
            completed = completed.len(),
            known_pairs = history.pair_count(),
            owed = quota.total_owed(),
            count,
            first_number,
            "Building remaining schedule"
        );

        let matches = Placement::new(&players, quota, history).place(
            count,
            first_number,
            self.config.default_court,
        )?;
        verify_numbering(&matches, first_number)?;
        Ok(matches)
    }

    /// History from every completed foursome; quota as `T - appearances`,
    /// floored at 0.
    pub fn seed_state(&self, players: &[PlayerId], completed: &[NormalizedMatch]) -> SeededState {
        let history = TeammateHistory::from_groups(completed.iter().map(|m| m.players.as_slice()));

        let mut appearances: HashMap<PlayerId, u32> = HashMap::new();
        for player in completed.iter().flat_map(|m| m.players.iter()) {
            *appearances.entry(player.clone()).or_insert(0) += 1;
        }
        let quota = PlayerQuota::seeded(
            players,
            self.config.target_matches_per_player,
            &appearances,
        );

        SeededState { history, quota }
    }
}

/// Numbers must run `first, first + 1, ...` with no gaps and never be zero.
pub fn verify_numbering(matches: &[Match], first: u32) -> Result<(), ScheduleError> {
    if first == 0 {
        return Err(ScheduleError::numbering("match numbers must start at 1 or above"));
    }
    for (offset, m) in matches.iter().enumerate() {
        let expected = u32::try_from(offset)
            .ok()
            .and_then(|o| first.checked_add(o));
        if expected != Some(m.match_number) {
            return Err(ScheduleError::numbering(format!(
                "expected match number {expected:?} at position {offset}, found {}",
                m.match_number
            )));
        }
    }
    Ok(())
}
