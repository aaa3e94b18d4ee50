//! Player and completed-record fixtures.
//!
//! Player ids are plain strings here so this crate does not depend on the
//! engine; tests convert them with `PlayerId::from`.

use serde_json::{json, Value};

/// `p1..=pN`.
pub fn player_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("p{i}")).collect()
}

/// A completed record with bare ids.
pub fn completed_with_ids(match_number: u32, players: &[&str]) -> Value {
    json!({
        "matchNumber": match_number,
        "players": players,
        "status": "Completed",
    })
}

/// A completed record whose players are populated user documents.
pub fn completed_with_refs(match_number: u32, players: &[&str]) -> Value {
    let refs: Vec<Value> = players
        .iter()
        .map(|id| json!({"_id": id, "displayName": format!("Member {id}")}))
        .collect();
    json!({
        "matchNumber": match_number,
        "players": refs,
        "status": "Completed",
    })
}

/// Completed records whose `players` field is unusable in each known way.
pub fn malformed_completed(first_match_number: u32) -> Vec<Value> {
    let shapes = [
        None,
        Some(Value::Null),
        Some(json!("p1,p2,p3,p4")),
        Some(json!({"first": "p1"})),
        Some(json!(["p1", null, "p2", null])),
        Some(json!([])),
    ];
    shapes
        .into_iter()
        .enumerate()
        .map(|(offset, players)| {
            let mut record = json!({
                "matchNumber": first_match_number + offset as u32,
                "status": "Completed",
            });
            if let (Some(players), Some(object)) = (players, record.as_object_mut()) {
                object.insert("players".to_string(), players);
            }
            record
        })
        .collect()
}
