//! The paid draw flow: spend coins, roll a kitty, unlock or level up.

use rand::Rng;
use serde::Serialize;

use crate::currency::CoinBank;
use crate::kitty::draw::draw_kitty;
use crate::kitty::rarity::{rarity_of, Rarity};
use crate::progression::{Collection, LevelChange, ProgressKey, ProgressionStore};

/// What a paid draw produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DrawOutcome {
    /// The draw was not paid for; nothing changed.
    InsufficientCoins { cost: u64, balance: u64 },
    /// A kitty the installation didn't have yet.
    Unlocked { kitty: String, rarity: Rarity },
    /// A duplicate; the kitty gains a level instead.
    Duplicate {
        kitty: String,
        rarity: Rarity,
        change: LevelChange,
    },
}

/// Spend `cost` coins and roll for a kitty.
///
/// New kitties join the unlocked set; duplicates are bumped to their next
/// level (which also awards the usual level-up stat point).
pub fn roll_for_kitty<R: Rng + ?Sized>(
    bank: &mut CoinBank<'_>,
    collection: &Collection<'_>,
    progression: &ProgressionStore<'_>,
    user: &str,
    cost: u64,
    rng: &mut R,
) -> DrawOutcome {
    if !bank.spend(user, cost) {
        return DrawOutcome::InsufficientCoins {
            cost,
            balance: bank.balance(user),
        };
    }

    let kitty = draw_kitty(rng);
    let rarity = rarity_of(kitty);

    if !collection.is_unlocked(kitty) {
        if let Err(e) = collection.unlock(kitty) {
            // The draw only yields catalog ids, so this shouldn't happen
            tracing::warn!(kitty, "failed to unlock drawn kitty: {e}");
        }
        tracing::info!(user, kitty, "new kitty unlocked");
        DrawOutcome::Unlocked {
            kitty: kitty.to_string(),
            rarity,
        }
    } else {
        let change = progression.grant_next_level(&ProgressKey::new(user, kitty), rng);
        DrawOutcome::Duplicate {
            kitty: kitty.to_string(),
            rarity,
            change,
        }
    }
}
