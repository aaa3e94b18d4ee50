//! Tournament tier point table.
//!
//! The points collaborator awards these whenever a match transitions to
//! Completed. The scheduler never reads it; it lives here so the table is a
//! value the caller constructs instead of a module-level constant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPoints {
    pub winner_points: u32,
    pub participant_points: u32,
}

impl TierPoints {
    pub const fn new(winner_points: u32, participant_points: u32) -> Self {
        Self {
            winner_points,
            participant_points,
        }
    }

    /// Points a single player earns from one completed match.
    pub fn award(self, won: bool) -> u32 {
        if won {
            self.winner_points
        } else {
            self.participant_points
        }
    }
}

/// Tier name (e.g. `"250"`) to point values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierPointsTable {
    tiers: BTreeMap<String, TierPoints>,
}

impl Default for TierPointsTable {
    fn default() -> Self {
        let tiers = [
            ("100", TierPoints::new(10, 5)),
            ("250", TierPoints::new(25, 15)),
            ("500", TierPoints::new(50, 30)),
        ]
        .into_iter()
        .map(|(tier, points)| (tier.to_string(), points))
        .collect();
        Self { tiers }
    }
}

impl TierPointsTable {
    pub fn new(tiers: impl IntoIterator<Item = (String, TierPoints)>) -> Self {
        Self {
            tiers: tiers.into_iter().collect(),
        }
    }

    /// Parse `{"100": {"winnerPoints": 10, "participantPoints": 5}, ...}`,
    /// falling back to the default table on malformed input.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed tier table, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn points_for(&self, tier: &str) -> Option<TierPoints> {
        self.tiers.get(tier.trim()).copied()
    }

    pub fn tiers(&self) -> impl Iterator<Item = (&str, TierPoints)> {
        self.tiers.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_table_matches_published_tiers() {
        let table = TierPointsTable::default();
        assert_eq!(table.points_for("100"), Some(TierPoints::new(10, 5)));
        assert_eq!(table.points_for("250"), Some(TierPoints::new(25, 15)));
        assert_eq!(table.points_for("500"), Some(TierPoints::new(50, 30)));
        assert_eq!(table.points_for("1000"), None);
        assert_eq!(table.tiers().count(), 3);
    }

    #[test]
    fn award_distinguishes_winners() {
        let points = TierPoints::new(25, 15);
        assert_eq!(points.award(true), 25);
        assert_eq!(points.award(false), 15);
    }

    #[test]
    fn from_json_replaces_table() {
        let json = json!({"club": {"winnerPoints": 3, "participantPoints": 1}});
        let table = TierPointsTable::from_json(Some(&json));
        assert_eq!(table.points_for("club"), Some(TierPoints::new(3, 1)));
        assert_eq!(table.points_for("100"), None);
    }

    #[test]
    fn from_json_falls_back_on_garbage() {
        let json = json!(["100", "250"]);
        assert_eq!(TierPointsTable::from_json(Some(&json)), TierPointsTable::default());
    }
}
