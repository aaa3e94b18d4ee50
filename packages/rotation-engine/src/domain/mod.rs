//! Domain layer: pure rotation logic and types.

pub mod analysis;
pub mod history;
pub(crate) mod placement;
pub mod quota;
pub mod remaining;
pub mod rules;
pub mod sanitize;
pub mod schedule;
pub mod types;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_remaining;
#[cfg(test)]
mod tests_props_schedule;
#[cfg(test)]
mod tests_scenarios;

// Re-exports for ergonomics
pub use analysis::{MatchParticipants, PlayerRotationStats, RotationAnalyzer, RotationReport};
pub use history::TeammateHistory;
pub use quota::PlayerQuota;
pub use remaining::{verify_numbering, RemainingScheduleBuilder, SeededState};
pub use sanitize::{next_match_number_after, MatchRecordSanitizer, NormalizedMatch, PlayersField};
pub use schedule::ScheduleBuilder;
pub use types::{Match, MatchStatus, PlayerId, TeamSide};
