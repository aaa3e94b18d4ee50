//! Metrics collection and output for simulated events.

use rotation_engine::PlayerRotationStats;
use serde::Serialize;

use crate::simulator::EventResult;

/// Complete event metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct EventMetrics {
    pub event_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: EventConfig,
    pub result: EventResultMetrics,
    pub players: Vec<PlayerRotationStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventConfig {
    pub players: usize,
    pub target_matches_per_player: u32,
    pub completed: usize,
    pub corrupt_rate: f64,
    pub total_events: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventResultMetrics {
    pub initial_matches: usize,
    pub stored_records: usize,
    pub corrupted_records: usize,
    pub skipped_records: usize,
    pub upcoming_matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_upcoming_number: Option<u32>,
    pub min_matches: u32,
    pub max_matches: u32,
    pub quota_cap: u32,
    pub unscheduled_players: usize,
    pub repeated_teammate_pairs: usize,
    pub duration_ms: f64,
}

/// Build metrics from an event result.
pub fn build_event_metrics(
    event_id: u32,
    seed: u64,
    config: EventConfig,
    quota_cap: u32,
    result: &EventResult,
    duration_ms: f64,
) -> EventMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let report = &result.report;
    EventMetrics {
        event_id,
        seed,
        timestamp,
        config,
        result: EventResultMetrics {
            initial_matches: result.initial.len(),
            stored_records: result.stored_records,
            corrupted_records: result.corrupted,
            skipped_records: result.regeneration.skipped,
            upcoming_matches: result.regeneration.upcoming.len(),
            first_upcoming_number: result.regeneration.upcoming.first().map(|m| m.match_number),
            min_matches: report.min_matches(),
            max_matches: report.max_matches(),
            quota_cap,
            unscheduled_players: report.unscheduled_players().len(),
            repeated_teammate_pairs: report.repeated_teammate_pairs,
            duration_ms,
        },
        players: report.players.clone(),
    }
}

/// CSV summary row (one per event).
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub event_id: u32,
    pub seed: u64,
    pub players: usize,
    pub stored: usize,
    pub skipped: usize,
    pub usable: usize,
    pub upcoming: usize,
    pub min_matches: u32,
    pub max_matches: u32,
    pub quota_cap: u32,
    pub within_cap: bool,
    pub repeated_teammate_pairs: usize,
}

impl From<&EventMetrics> for CsvSummaryRow {
    fn from(metrics: &EventMetrics) -> Self {
        CsvSummaryRow {
            event_id: metrics.event_id,
            seed: metrics.seed,
            players: metrics.config.players,
            stored: metrics.result.stored_records,
            skipped: metrics.result.skipped_records,
            usable: metrics.result.stored_records - metrics.result.skipped_records,
            upcoming: metrics.result.upcoming_matches,
            min_matches: metrics.result.min_matches,
            max_matches: metrics.result.max_matches,
            quota_cap: metrics.result.quota_cap,
            within_cap: metrics.result.max_matches <= metrics.result.quota_cap,
            repeated_teammate_pairs: metrics.result.repeated_teammate_pairs,
        }
    }
}
