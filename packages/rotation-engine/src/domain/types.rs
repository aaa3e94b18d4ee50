//! Core schedule types: PlayerId, Match, MatchStatus, TeamSide.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{PLAYERS_PER_MATCH, PLAYERS_PER_TEAM};

/// Opaque player identifier as handed over by the event aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lifecycle of a match. The engine only emits `Scheduled`; the external
/// recording workflow moves matches to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Completed,
}

/// Which team won, serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TeamSide {
    Team1,
    Team2,
}

impl From<TeamSide> for u8 {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::Team1 => 1,
            TeamSide::Team2 => 2,
        }
    }
}

impl TryFrom<u8> for TeamSide {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamSide::Team1),
            2 => Ok(TeamSide::Team2),
            other => Err(format!("winning team must be 1 or 2, got {other}")),
        }
    }
}

/// One doubles match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_number: u32,
    pub court: u32,
    pub players: [PlayerId; PLAYERS_PER_MATCH],
    pub team1: [PlayerId; PLAYERS_PER_TEAM],
    pub team2: [PlayerId; PLAYERS_PER_TEAM],
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_team: Option<TeamSide>,
}

impl Match {
    /// A freshly placed match. Positions 0 and 1 form team1, 2 and 3 team2.
    pub fn scheduled(match_number: u32, court: u32, players: [PlayerId; PLAYERS_PER_MATCH]) -> Self {
        let [a, b, c, d] = players.clone();
        Self {
            match_number,
            court,
            players,
            team1: [a, b],
            team2: [c, d],
            status: MatchStatus::Scheduled,
            score: None,
            winning_team: None,
        }
    }

    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.players.contains(id)
    }

    /// Four distinct players split into two disjoint teams of two that
    /// together cover the match's players.
    pub fn is_well_formed(&self) -> bool {
        let distinct = self
            .players
            .iter()
            .enumerate()
            .all(|(i, p)| !self.players[i + 1..].contains(p));
        let teams_disjoint = self.team1.iter().all(|p| !self.team2.contains(p))
            && self.team1[0] != self.team1[1]
            && self.team2[0] != self.team2[1];
        let teams_cover = self
            .players
            .iter()
            .all(|p| self.team1.contains(p) || self.team2.contains(p));
        distinct && teams_disjoint && teams_cover && self.match_number > 0 && self.court > 0
    }
}
