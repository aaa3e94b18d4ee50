//! Teammate history: which pairs of players have already shared a match.

use std::collections::{HashMap, HashSet};

use crate::domain::types::PlayerId;

/// Symmetric "have already played together" relation.
///
/// Built fresh for every build call and only extended while that call places
/// new matches.
#[derive(Debug, Clone, Default)]
pub struct TeammateHistory {
    partners: HashMap<PlayerId, HashSet<PlayerId>>,
    pair_count: usize,
}

impl TeammateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from groups of players that shared a match.
    pub fn from_groups<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a [PlayerId]>,
    {
        let mut history = Self::new();
        for group in groups {
            history.record_group(group);
        }
        history
    }

    /// Record one unordered pair. Returns `false` if it was already known or
    /// both sides are the same player.
    pub fn record_pair(&mut self, a: &PlayerId, b: &PlayerId) -> bool {
        if a == b {
            return false;
        }
        let inserted = self
            .partners
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.partners.entry(b.clone()).or_default().insert(a.clone());
        if inserted {
            self.pair_count += 1;
        }
        inserted
    }

    /// Record every pair within a group (6 pairs for a foursome).
    pub fn record_group(&mut self, group: &[PlayerId]) {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                self.record_pair(a, b);
            }
        }
    }

    pub fn have_met(&self, a: &PlayerId, b: &PlayerId) -> bool {
        self.partners.get(a).is_some_and(|set| set.contains(b))
    }

    /// How many of `placed` the candidate has already played with.
    pub fn pairings_against(&self, candidate: &PlayerId, placed: &[&PlayerId]) -> usize {
        match self.partners.get(candidate) {
            Some(set) => placed.iter().filter(|p| set.contains(**p)).count(),
            None => 0,
        }
    }

    /// Number of distinct pairs recorded.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn is_empty(&self) -> bool {
        self.pair_count == 0
    }
}
