//! XP-to-level curve.
//!
//! The cost of advancing grows linearly: level 1 to 2 costs 10 XP,
//! 2 to 3 costs 30, 3 to 4 costs 50, and so on. Level is always a
//! projection of cumulative XP; anything persisted alongside it is a
//! display cache.

/// XP required to advance from `level` to `level + 1`. Levels start at 1.
pub fn xp_to_advance(level: u32) -> u64 {
    debug_assert!(level >= 1);
    (level as u64) * 10 + (level as u64).saturating_sub(1) * 10
}

/// Cumulative XP required to reach `level` from zero.
pub fn xp_to_reach(level: u32) -> u64 {
    (1..level).map(xp_to_advance).sum()
}

/// Level for a cumulative XP total. `level_from_xp(0) == 1`.
pub fn level_from_xp(xp: u64) -> u32 {
    let mut level = 1;
    let mut remaining = xp;
    loop {
        let need = xp_to_advance(level);
        if remaining >= need {
            remaining -= need;
            level += 1;
        } else {
            return level;
        }
    }
}
