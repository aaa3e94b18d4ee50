//! Fixed rules of doubles rotation and the canonical match-count policy.

/// Doubles: two teams of two.
pub const PLAYERS_PER_MATCH: usize = 4;
pub const PLAYERS_PER_TEAM: usize = 2;
pub const MIN_PLAYERS: usize = PLAYERS_PER_MATCH;

pub const DEFAULT_TARGET_MATCHES: u32 = 2;
pub const DEFAULT_COURT: u32 = 1;

/// `ceil(player_count * target / 4)`.
///
/// Both the initial and the remaining schedule builder size the event with
/// this function; there is no fixed per-event match count.
pub fn total_scheduled_matches(player_count: usize, target: u32) -> usize {
    (player_count * target as usize).div_ceil(PLAYERS_PER_MATCH)
}

/// Most matches any single player can end up in.
///
/// When `player_count * target` is not a multiple of four the last match has
/// fewer than four owed slots, and the players topping it up play once more
/// than the target.
pub fn quota_cap(player_count: usize, target: u32) -> u32 {
    if (player_count * target as usize) % PLAYERS_PER_MATCH == 0 {
        target
    } else {
        target + 1
    }
}
