// Proptest generators for rotation inputs.

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::domain::PlayerId;

/// `p1..=pN` for a generated N.
pub fn player_list(min: usize, max: usize) -> impl Strategy<Value = Vec<PlayerId>> {
    (min..=max).prop_map(|n| (1..=n).map(|i| PlayerId::new(format!("p{i}"))).collect())
}

pub fn target() -> impl Strategy<Value = u32> {
    1u32..=3
}

/// A `players` field in every shape persistence has been seen to hand back.
pub fn players_field(players: Vec<PlayerId>) -> impl Strategy<Value = Option<Value>> {
    let ids: Vec<Value> = players.iter().map(|p| json!(p.as_str())).collect();
    let refs: Vec<Value> = players
        .iter()
        .map(|p| json!({"_id": p.as_str(), "name": "member"}))
        .collect();
    let count = ids.len().max(1);
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!("not-a-list"))),
        Just(Some(json!(42))),
        Just(Some(json!({"0": "p1"}))),
        proptest::sample::subsequence(ids.clone(), 0..=count.min(4))
            .prop_map(|ids| Some(Value::Array(ids))),
        proptest::sample::subsequence(refs, 0..=count.min(4))
            .prop_map(|refs| Some(Value::Array(refs))),
        proptest::sample::subsequence(ids, 0..=count.min(4)).prop_map(|ids| {
            // Punch holes between the ids.
            let holey: Vec<Value> = ids.into_iter().flat_map(|id| [id, Value::Null]).collect();
            Some(Value::Array(holey))
        }),
    ]
}

/// A completed-match record whose `players` may be anything.
pub fn completed_record(
    players: Vec<PlayerId>,
    match_number: u32,
) -> impl Strategy<Value = Value> {
    players_field(players).prop_map(move |field| {
        let mut record = json!({"matchNumber": match_number, "status": "Completed"});
        if let (Some(field), Some(object)) = (field, record.as_object_mut()) {
            object.insert("players".to_string(), field);
        }
        record
    })
}

/// Players plus up to `max_records` arbitrary completed records.
pub fn players_and_records(
    max_records: usize,
) -> impl Strategy<Value = (Vec<PlayerId>, Vec<Value>)> {
    player_list(4, 12).prop_flat_map(move |players| {
        let records = (0..max_records)
            .map(|i| completed_record(players.clone(), i as u32 + 1))
            .collect::<Vec<_>>();
        (Just(players), records, 0..=max_records).prop_map(|(players, records, keep)| {
            (players, records.into_iter().take(keep).collect())
        })
    })
}
