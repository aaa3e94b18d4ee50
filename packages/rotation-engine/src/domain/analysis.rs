//! Read-only rotation diagnostics.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::sanitize::NormalizedMatch;
use crate::domain::types::{Match, PlayerId};

/// Anything that can be counted as one played (or planned) match.
pub trait MatchParticipants {
    fn match_number(&self) -> Option<u32>;
    fn participants(&self) -> &[PlayerId];
    /// Both teams, when known.
    fn teams(&self) -> Option<(&[PlayerId], &[PlayerId])> {
        None
    }
}

impl MatchParticipants for Match {
    fn match_number(&self) -> Option<u32> {
        Some(self.match_number)
    }

    fn participants(&self) -> &[PlayerId] {
        &self.players
    }

    fn teams(&self) -> Option<(&[PlayerId], &[PlayerId])> {
        Some((self.team1.as_slice(), self.team2.as_slice()))
    }
}

impl MatchParticipants for NormalizedMatch {
    fn match_number(&self) -> Option<u32> {
        self.match_number
    }

    fn participants(&self) -> &[PlayerId] {
        &self.players
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRotationStats {
    pub player_id: PlayerId,
    pub matches_played: u32,
    /// Numbers of the matches involved, in schedule order.
    pub match_numbers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationReport {
    /// One entry per confirmed player, in confirmed-list order.
    pub players: Vec<PlayerRotationStats>,
    pub total_matches: usize,
    /// Teammate pairs that shared a team more than once.
    pub repeated_teammate_pairs: usize,
}

impl RotationReport {
    pub fn stats_for(&self, player: &PlayerId) -> Option<&PlayerRotationStats> {
        self.players.iter().find(|s| &s.player_id == player)
    }

    pub fn min_matches(&self) -> u32 {
        self.players.iter().map(|s| s.matches_played).min().unwrap_or(0)
    }

    pub fn max_matches(&self) -> u32 {
        self.players.iter().map(|s| s.matches_played).max().unwrap_or(0)
    }

    /// Confirmed players who never appear.
    pub fn unscheduled_players(&self) -> Vec<&PlayerId> {
        self.players
            .iter()
            .filter(|s| s.matches_played == 0)
            .map(|s| &s.player_id)
            .collect()
    }
}

pub struct RotationAnalyzer;

impl RotationAnalyzer {
    /// Per-player appearance counts and match numbers.
    ///
    /// Participants who are not in `players` are ignored; duplicate confirmed
    /// ids are reported once.
    pub fn analyze<'a, I, M>(players: &[PlayerId], schedule: I) -> RotationReport
    where
        I: IntoIterator<Item = &'a M>,
        M: MatchParticipants + ?Sized + 'a,
    {
        let mut stats: Vec<PlayerRotationStats> = Vec::with_capacity(players.len());
        let mut index: HashMap<&PlayerId, usize> = HashMap::with_capacity(players.len());
        for player in players {
            if !index.contains_key(player) {
                index.insert(player, stats.len());
                stats.push(PlayerRotationStats {
                    player_id: player.clone(),
                    matches_played: 0,
                    match_numbers: Vec::new(),
                });
            }
        }

        let mut team_pairs: HashMap<(PlayerId, PlayerId), u32> = HashMap::new();
        let mut total_matches = 0;
        for m in schedule {
            total_matches += 1;
            for player in m.participants() {
                if let Some(&i) = index.get(player) {
                    stats[i].matches_played += 1;
                    if let Some(number) = m.match_number() {
                        stats[i].match_numbers.push(number);
                    }
                }
            }
            if let Some((team1, team2)) = m.teams() {
                for team in [team1, team2] {
                    if let [a, b] = team {
                        let key = if a <= b {
                            (a.clone(), b.clone())
                        } else {
                            (b.clone(), a.clone())
                        };
                        *team_pairs.entry(key).or_insert(0) += 1;
                    }
                }
            }
        }

        RotationReport {
            players: stats,
            total_matches,
            repeated_teammate_pairs: team_pairs.values().filter(|&&n| n > 1).count(),
        }
    }
}
