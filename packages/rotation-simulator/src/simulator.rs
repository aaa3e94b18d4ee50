//! In-memory event simulator.
//!
//! Each event schedules a fresh roster, plays a prefix of the schedule,
//! damages some of the stored records the way a flaky persistence layer
//! would, and regenerates the rest from whatever survived.

use rand::rngs::StdRng;
use rand::Rng;
use rotation_engine::{
    Match, PlayerId, Regeneration, RotationConfig, RotationReport, RotationService,
    ScheduleError,
};
use serde_json::{json, Value};

/// Ways a stored `players` field can come back unusable.
const CORRUPTIONS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct EventParams {
    pub players: usize,
    pub completed: usize,
    pub corrupt_rate: f64,
}

#[derive(Debug, Clone)]
pub struct EventResult {
    pub initial: Vec<Match>,
    pub stored_records: usize,
    pub corrupted: usize,
    pub regeneration: Regeneration,
    pub report: RotationReport,
}

pub struct Simulator {
    service: RotationService,
    params: EventParams,
}

impl Simulator {
    pub fn new(config: RotationConfig, params: EventParams) -> Result<Self, ScheduleError> {
        Ok(Self {
            service: RotationService::new(config)?,
            params,
        })
    }

    pub fn config(&self) -> &RotationConfig {
        self.service.config()
    }

    pub fn simulate_event(&self, event_id: u32, rng: &mut StdRng) -> Result<EventResult, ScheduleError> {
        let players: Vec<PlayerId> = (1..=self.params.players)
            .map(|i| PlayerId::new(format!("e{event_id}-p{i}")))
            .collect();

        let initial = self.service.build_initial_schedule(&players)?;
        let played = self.params.completed.min(initial.len());

        let mut corrupted = 0;
        let records: Vec<Value> = initial[..played]
            .iter()
            .map(|m| {
                if rng.random_bool(self.params.corrupt_rate) {
                    corrupted += 1;
                    corrupt_record(m, rng)
                } else {
                    stored_record(m, rng.random_bool(0.5))
                }
            })
            .collect();

        let regeneration = self.service.regenerate(&players, &records)?;
        let report = regeneration.report(&players);

        Ok(EventResult {
            initial,
            stored_records: records.len(),
            corrupted,
            regeneration,
            report,
        })
    }
}

/// A completed record as storage returns it, with bare ids or populated refs.
fn stored_record(m: &Match, populated: bool) -> Value {
    let players: Vec<Value> = m
        .players
        .iter()
        .map(|p| {
            if populated {
                json!({"_id": p.as_str(), "displayName": format!("Member {p}")})
            } else {
                json!(p.as_str())
            }
        })
        .collect();
    json!({
        "matchNumber": m.match_number,
        "court": m.court,
        "players": players,
        "team1": m.team1,
        "team2": m.team2,
        "status": "Completed",
    })
}

fn corrupt_record(m: &Match, rng: &mut StdRng) -> Value {
    let mut record = stored_record(m, false);
    let players = match rng.random_range(0..CORRUPTIONS) {
        0 => {
            if let Value::Object(fields) = &mut record {
                fields.remove("players");
            }
            return record;
        }
        1 => Value::Null,
        2 => json!(m
            .players
            .iter()
            .map(PlayerId::as_str)
            .collect::<Vec<_>>()
            .join(",")),
        3 => json!({"first": m.players[0].as_str()}),
        _ => json!([m.players[0].as_str(), null, m.players[2].as_str()]),
    };
    record["players"] = players;
    record
}
