//! Greedy placement shared by the initial and remaining schedule builders.
//!
//! Each match is seeded by the player owed the most matches and filled with
//! whoever has met the fewest of the players already placed. There is no
//! backtracking.

use std::cmp::Reverse;

use tracing::{debug, warn};

use crate::domain::history::TeammateHistory;
use crate::domain::quota::PlayerQuota;
use crate::domain::rules::PLAYERS_PER_MATCH;
use crate::domain::types::{Match, PlayerId};
use crate::errors::ScheduleError;

/// Collapse duplicate ids, keeping the first occurrence.
pub(crate) fn distinct_players(players: &[PlayerId]) -> Vec<PlayerId> {
    let mut distinct: Vec<PlayerId> = Vec::with_capacity(players.len());
    for player in players {
        if !distinct.contains(player) {
            distinct.push(player.clone());
        }
    }
    if distinct.len() != players.len() {
        warn!(
            confirmed = players.len(),
            distinct = distinct.len(),
            "Duplicate player ids in confirmed list"
        );
    }
    distinct
}

/// Mutable state for one build call.
pub(crate) struct Placement<'a> {
    players: &'a [PlayerId],
    quota: PlayerQuota,
    history: TeammateHistory,
}

impl<'a> Placement<'a> {
    /// `players` must already be distinct and hold at least four ids.
    pub(crate) fn new(players: &'a [PlayerId], quota: PlayerQuota, history: TeammateHistory) -> Self {
        Self {
            players,
            quota,
            history,
        }
    }

    /// Place `count` matches numbered from `first_number`.
    pub(crate) fn place(
        &mut self,
        count: usize,
        first_number: u32,
        court: u32,
    ) -> Result<Vec<Match>, ScheduleError> {
        let mut matches = Vec::with_capacity(count);
        for offset in 0..count {
            let match_number = u32::try_from(offset)
                .ok()
                .and_then(|o| first_number.checked_add(o))
                .ok_or_else(|| {
                    ScheduleError::numbering(format!(
                        "match {offset} after {first_number} does not fit a match number"
                    ))
                })?;
            let foursome = self.choose_foursome();
            let players = foursome.map(|i| self.players[i].clone());

            self.history.record_group(&players);
            for player in &players {
                self.quota.consume(player);
            }

            debug!(
                match_number,
                anchor = %players[0],
                players = ?players.iter().map(PlayerId::as_str).collect::<Vec<_>>(),
                "Placed match"
            );
            matches.push(Match::scheduled(match_number, court, players));
        }
        Ok(matches)
    }

    /// Indices into `players` for the next match, anchor first.
    fn choose_foursome(&self) -> [usize; PLAYERS_PER_MATCH] {
        let pool = self.candidate_pool();

        let anchor = pool
            .iter()
            .copied()
            .min_by_key(|&i| (Reverse(self.balance(i)), i))
            .unwrap_or(0);

        let mut chosen = [anchor; PLAYERS_PER_MATCH];
        for slot in 1..PLAYERS_PER_MATCH {
            let placed: Vec<&PlayerId> = chosen[..slot].iter().map(|&i| &self.players[i]).collect();
            let next = pool
                .iter()
                .copied()
                .filter(|i| !chosen[..slot].contains(i))
                .min_by_key(|&i| {
                    (
                        self.history.pairings_against(&self.players[i], &placed),
                        Reverse(self.balance(i)),
                        i,
                    )
                })
                .unwrap_or(anchor);
            chosen[slot] = next;
        }
        chosen
    }

    /// Players still owed a match, or everyone ordered by balance when fewer
    /// than four are owed.
    fn candidate_pool(&self) -> Vec<usize> {
        let owed: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.quota.is_owed(&self.players[i]))
            .collect();
        if owed.len() >= PLAYERS_PER_MATCH {
            return owed;
        }

        debug!(owed = owed.len(), "Candidate pool below four, using full player set");
        let mut everyone: Vec<usize> = (0..self.players.len()).collect();
        everyone.sort_by_key(|&i| (Reverse(self.balance(i)), i));
        everyone
    }

    fn balance(&self, index: usize) -> i64 {
        self.quota.balance(&self.players[index])
    }
}
