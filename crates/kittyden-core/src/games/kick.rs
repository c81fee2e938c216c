//! Kick the Hooman: a 50/50 gamble for pocket change.

use rand::Rng;
use serde::Serialize;

use crate::currency::CoinBank;
use crate::progression::{LevelChange, ProgressKey, ProgressionStore};

/// Coins earned on a successful kick.
pub const KICK_REWARD: u64 = 5;
/// XP granted to the kicking kitty on success.
pub const KICK_XP: u64 = 10;

/// Result of one kick attempt.
#[derive(Debug, Clone, Serialize)]
pub struct KickOutcome {
    pub success: bool,
    pub coins_earned: u64,
    pub xp_earned: u64,
    pub new_balance: u64,
    /// Set when the XP pushed the kitty over a level boundary.
    pub change: Option<LevelChange>,
}

/// Flip the coin. Success pays [`KICK_REWARD`] coins and [`KICK_XP`] XP
/// to the chosen kitty; failure changes nothing.
pub fn kick_hooman<R: Rng + ?Sized>(
    bank: &mut CoinBank<'_>,
    progression: &ProgressionStore<'_>,
    user: &str,
    kitty: &str,
    rng: &mut R,
) -> KickOutcome {
    if !rng.gen_bool(0.5) {
        return KickOutcome {
            success: false,
            coins_earned: 0,
            xp_earned: 0,
            new_balance: bank.balance(user),
            change: None,
        };
    }

    let new_balance = bank.reward(user, KICK_REWARD);
    let change = progression.grant_xp(&ProgressKey::new(user, kitty), KICK_XP, rng);

    KickOutcome {
        success: true,
        coins_earned: KICK_REWARD,
        xp_earned: KICK_XP,
        new_balance,
        change: change.leveled_up().then_some(change),
    }
}
