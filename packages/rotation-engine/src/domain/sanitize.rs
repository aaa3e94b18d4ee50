//! Sanitization of externally supplied completed-match records.
//!
//! Completed matches come back from persistence loosely typed: `players` may
//! be a list of ids, a list of populated user documents, or missing entirely.
//! This is the only place that looks at raw record shapes; placement only ever
//! sees [`NormalizedMatch`].

use serde_json::Value;
use tracing::warn;

use crate::domain::rules::PLAYERS_PER_MATCH;
use crate::domain::types::PlayerId;
use crate::errors::SkipReason;

const PLAYERS_KEY: &str = "players";
const MATCH_NUMBER_KEY: &str = "matchNumber";
/// Keys a populated reference may carry its id under, in lookup order.
const REF_ID_KEYS: [&str; 2] = ["_id", "id"];
const OBJECT_ID_KEY: &str = "$oid";

/// The `players` field of a raw record, resolved once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayersField<'a> {
    /// A sequence of bare ids.
    Ids(&'a [Value]),
    /// A sequence of populated references exposing an id field.
    PopulatedRefs(&'a [Value]),
    /// Missing, null, or not a sequence.
    Absent(SkipReason),
}

impl<'a> PlayersField<'a> {
    pub fn resolve(record: &'a Value) -> Self {
        let Some(object) = record.as_object() else {
            return PlayersField::Absent(SkipReason::NotAnObject);
        };
        match object.get(PLAYERS_KEY) {
            None => PlayersField::Absent(SkipReason::PlayersMissing),
            Some(Value::Null) => PlayersField::Absent(SkipReason::PlayersNull),
            Some(Value::Array(entries)) => {
                let mut present = entries.iter().filter(|e| !e.is_null()).peekable();
                let populated = present.peek().is_some() && present.all(Value::is_object);
                if populated {
                    PlayersField::PopulatedRefs(entries)
                } else {
                    PlayersField::Ids(entries)
                }
            }
            Some(_) => PlayersField::Absent(SkipReason::PlayersNotASequence),
        }
    }

    /// Usable ids in original order, nulls and unusable entries dropped,
    /// duplicates collapsed.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let entries = match self {
            PlayersField::Ids(entries) | PlayersField::PopulatedRefs(entries) => *entries,
            PlayersField::Absent(_) => return Vec::new(),
        };
        let mut ids: Vec<PlayerId> = Vec::with_capacity(entries.len());
        for id in entries.iter().filter_map(entry_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// A completed match reduced to what history and quota need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMatch {
    /// The record's own number, when it was a positive integer.
    pub match_number: Option<u32>,
    pub players: [PlayerId; PLAYERS_PER_MATCH],
}

/// Stateless normalizer for completed-match records.
pub struct MatchRecordSanitizer;

impl MatchRecordSanitizer {
    /// Normalize one record, or say why it contributes nothing.
    pub fn normalize(raw: &Value) -> Result<NormalizedMatch, SkipReason> {
        let field = PlayersField::resolve(raw);
        if let PlayersField::Absent(reason) = field {
            return Err(reason);
        }
        let ids = field.player_ids();
        let usable = ids.len();
        let players: [PlayerId; PLAYERS_PER_MATCH] = ids
            .into_iter()
            .take(PLAYERS_PER_MATCH)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| SkipReason::TooFewPlayers { usable })?;

        Ok(NormalizedMatch {
            match_number: match_number(raw),
            players,
        })
    }

    /// Normalize every record, logging and dropping the ones that are skipped.
    pub fn normalize_all(records: &[Value]) -> Vec<NormalizedMatch> {
        records
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match Self::normalize(raw) {
                Ok(normalized) => Some(normalized),
                Err(reason) => {
                    warn!(
                        index,
                        match_number = ?match_number(raw),
                        reason = %reason,
                        "Skipping completed match record"
                    );
                    None
                }
            })
            .collect()
    }
}

/// Highest sanitized match number plus one; 1 when none is known.
///
/// `None` when the highest known number is `u32::MAX` and no number is left.
pub fn next_match_number_after(completed: &[NormalizedMatch]) -> Option<u32> {
    completed
        .iter()
        .filter_map(|m| m.match_number)
        .max()
        .map_or(Some(1), |n| n.checked_add(1))
}

fn match_number(raw: &Value) -> Option<u32> {
    raw.get(MATCH_NUMBER_KEY)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0)
}

fn entry_id(entry: &Value) -> Option<PlayerId> {
    match entry {
        Value::Object(object) => REF_ID_KEYS
            .iter()
            .find_map(|key| object.get(*key))
            .and_then(|id| match id {
                Value::Object(inner) => inner.get(OBJECT_ID_KEY).and_then(scalar_id),
                other => scalar_id(other),
            }),
        other => scalar_id(other),
    }
}

fn scalar_id(value: &Value) -> Option<PlayerId> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| PlayerId::from(trimmed))
        }
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(PlayerId::new(n.to_string())),
        _ => None,
    }
}
