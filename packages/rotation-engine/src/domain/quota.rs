//! Per-player quota: how many matches each player is still owed.

use std::collections::HashMap;

use crate::domain::types::PlayerId;

/// Remaining matches owed per confirmed player.
///
/// Balances are signed so that a player pushed past the target by the
/// small-pool fallback ranks below players who are exactly satisfied.
#[derive(Debug, Clone, Default)]
pub struct PlayerQuota {
    balances: HashMap<PlayerId, i64>,
}

impl PlayerQuota {
    /// Every player owed `target` matches.
    pub fn uniform(players: &[PlayerId], target: u32) -> Self {
        let balances = players
            .iter()
            .map(|p| (p.clone(), i64::from(target)))
            .collect();
        Self { balances }
    }

    /// `target - appearances`, floored at 0, for every confirmed player.
    /// Appearances of players outside `players` are ignored.
    pub fn seeded(players: &[PlayerId], target: u32, appearances: &HashMap<PlayerId, u32>) -> Self {
        let balances = players
            .iter()
            .map(|p| {
                let played = appearances.get(p).copied().unwrap_or(0);
                (p.clone(), i64::from(target.saturating_sub(played)))
            })
            .collect();
        Self { balances }
    }

    /// Matches still owed, never negative. Unknown players are owed nothing.
    pub fn remaining(&self, player: &PlayerId) -> u32 {
        let balance = self.balance(player).max(0);
        u32::try_from(balance).unwrap_or(u32::MAX)
    }

    pub(crate) fn balance(&self, player: &PlayerId) -> i64 {
        self.balances.get(player).copied().unwrap_or(0)
    }

    pub fn is_owed(&self, player: &PlayerId) -> bool {
        self.balance(player) > 0
    }

    /// One more match placed for `player`.
    pub fn consume(&mut self, player: &PlayerId) {
        if let Some(balance) = self.balances.get_mut(player) {
            *balance -= 1;
        }
    }

    /// Sum of matches still owed across all players.
    pub fn total_owed(&self) -> u64 {
        self.balances
            .values()
            .map(|b| u64::try_from(*b).unwrap_or(0))
            .sum()
    }
}
