//! Rotation policy configuration.
//!
//! Loaded from the `ROTATION_TARGET_MATCHES` and `ROTATION_DEFAULT_COURT`
//! environment variables, or from an event's JSON settings blob.

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::domain::rules;
use crate::errors::ScheduleError;

pub const TARGET_MATCHES_ENV: &str = "ROTATION_TARGET_MATCHES";
pub const DEFAULT_COURT_ENV: &str = "ROTATION_DEFAULT_COURT";

/// Target-matches-per-player policy shared by the initial and the remaining
/// schedule builders.
///
/// # Example JSON Config
///
/// ```json
/// {"targetMatchesPerPlayer": 3, "defaultCourt": 2}
/// ```
///
/// Missing fields take their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationConfig {
    /// Matches each player should ideally play (`T`).
    pub target_matches_per_player: u32,
    /// Court stamped on every generated match.
    pub default_court: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            target_matches_per_player: rules::DEFAULT_TARGET_MATCHES,
            default_court: rules::DEFAULT_COURT,
        }
    }
}

impl RotationConfig {
    /// Create a config from an optional JSON value, falling back to defaults
    /// when the value is absent or does not deserialize.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed rotation config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load from the process environment. Unset variables keep their default;
    /// set-but-unparsable variables are rejected.
    pub fn from_env() -> Result<Self, ScheduleError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`RotationConfig::from_env`] with an injectable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ScheduleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(TARGET_MATCHES_ENV) {
            config.target_matches_per_player = parse_u32(TARGET_MATCHES_ENV, &raw)?;
        }
        if let Some(raw) = lookup(DEFAULT_COURT_ENV) {
            config.default_court = parse_u32(DEFAULT_COURT_ENV, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.target_matches_per_player == 0 {
            return Err(ScheduleError::invalid_config(
                "targetMatchesPerPlayer must be at least 1",
            ));
        }
        if self.default_court == 0 {
            return Err(ScheduleError::invalid_config(
                "defaultCourt must be at least 1",
            ));
        }
        Ok(())
    }

    /// Total matches for an event with `player_count` confirmed players.
    pub fn total_scheduled_matches(&self, player_count: usize) -> usize {
        rules::total_scheduled_matches(player_count, self.target_matches_per_player)
    }

    /// Upper bound on any single player's appearances.
    pub fn quota_cap(&self, player_count: usize) -> u32 {
        rules::quota_cap(player_count, self.target_matches_per_player)
    }
}

fn parse_u32(key: &str, raw: &str) -> Result<u32, ScheduleError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ScheduleError::invalid_config(format!("{key} must be an integer, got {raw:?}")))
}
