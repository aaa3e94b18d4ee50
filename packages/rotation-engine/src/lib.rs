#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Doubles match rotation and regeneration engine.
//!
//! Pure and synchronous: every call is a function of its inputs and no state
//! survives between calls.

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

use serde_json::Value;

// Re-exports for public API
pub use config::{RotationConfig, TierPoints, TierPointsTable};
pub use domain::{
    Match, MatchParticipants, MatchRecordSanitizer, MatchStatus, NormalizedMatch, PlayerId,
    PlayerRotationStats, RemainingScheduleBuilder, RotationAnalyzer, RotationReport,
    ScheduleBuilder, TeamSide,
};
pub use errors::{ErrorCode, ScheduleError, SkipReason};
pub use services::{Regeneration, RotationService};

/// Initial schedule under the default policy.
pub fn build_initial_schedule(players: &[PlayerId]) -> Result<Vec<Match>, ScheduleError> {
    ScheduleBuilder::default().build(players)
}

/// Remaining schedule under the default policy.
pub fn build_remaining_schedule(
    players: &[PlayerId],
    completed_matches: &[Value],
    next_match_number: i64,
) -> Result<Vec<Match>, ScheduleError> {
    RemainingScheduleBuilder::default().build(players, completed_matches, next_match_number)
}

/// Per-player diagnostics for a schedule.
pub fn analyze(players: &[PlayerId], schedule: &[Match]) -> RotationReport {
    RotationAnalyzer::analyze(players, schedule)
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rotation_test_support::logging::init();
}
