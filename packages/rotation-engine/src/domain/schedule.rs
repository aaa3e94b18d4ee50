//! Initial schedule for a fresh event.

use tracing::debug;

use crate::config::RotationConfig;
use crate::domain::history::TeammateHistory;
use crate::domain::placement::{distinct_players, Placement};
use crate::domain::quota::PlayerQuota;
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::types::{Match, PlayerId};
use crate::errors::ScheduleError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleBuilder {
    config: RotationConfig,
}

impl ScheduleBuilder {
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    /// Full schedule numbered `1..=M` with `M = ceil(n * T / 4)`.
    pub fn build(&self, players: &[PlayerId]) -> Result<Vec<Match>, ScheduleError> {
        self.config.validate()?;
        let players = distinct_players(players);
        if players.len() < MIN_PLAYERS {
            return Err(ScheduleError::InsufficientPlayers {
                required: MIN_PLAYERS,
                actual: players.len(),
            });
        }

        let target = self.config.target_matches_per_player;
        let match_count = self.config.total_scheduled_matches(players.len());
        debug!(
            players = players.len(),
            target, match_count, "Building initial schedule"
        );

        let quota = PlayerQuota::uniform(&players, target);
        Placement::new(&players, quota, TeammateHistory::new()).place(
            match_count,
            1,
            self.config.default_court,
        )
    }
}
