//! Property tests for coin balance semantics.

use kittyden_core::currency::{CoinBank, CoinPolicy};
use kittyden_core::storage::{Database, ReadCache};
use proptest::prelude::*;

fn bank_with_balance<'a>(db: &'a Database, cache: &'a mut ReadCache, balance: u64) -> CoinBank<'a> {
    db.kv_set("kittyCoins_alice", &balance.to_string()).unwrap();
    CoinBank::new(db, cache, CoinPolicy::default())
}

proptest! {
    #[test]
    fn prop_spend_semantics(balance in 0u64..100_000, amount in 0u64..100_000) {
        let db = Database::open_memory().unwrap();
        let mut cache = ReadCache::new();
        let mut bank = bank_with_balance(&db, &mut cache, balance);

        let ok = bank.spend("alice", amount);
        if amount > balance {
            prop_assert!(!ok);
            prop_assert_eq!(bank.balance("alice"), balance);
        } else {
            prop_assert!(ok);
            prop_assert_eq!(bank.balance("alice"), balance - amount);
        }
    }

    #[test]
    fn prop_penalty_never_goes_below_floor(balance in 0u64..100_000, amount in 0u64..1_000_000) {
        let db = Database::open_memory().unwrap();
        let mut cache = ReadCache::new();
        let mut bank = bank_with_balance(&db, &mut cache, balance);

        let after = bank.penalty("alice", amount);
        prop_assert!(after >= 5);
        prop_assert_eq!(after, balance.saturating_sub(amount).max(5));
    }

    #[test]
    fn prop_reward_adds_exactly(balance in 0u64..100_000, amount in 0u64..100_000) {
        let db = Database::open_memory().unwrap();
        let mut cache = ReadCache::new();
        let mut bank = bank_with_balance(&db, &mut cache, balance);

        prop_assert_eq!(bank.reward("alice", amount), balance + amount);
    }
}

#[test]
fn test_spend_scenarios_from_the_rulebook() {
    let db = Database::open_memory().unwrap();
    let mut cache = ReadCache::new();
    let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::default());

    // A new account holds exactly the starting balance
    assert_eq!(bank.balance("alice"), 5);

    // spend(5) on 5 succeeds and zeroes the balance
    assert!(bank.spend("alice", 5));
    assert_eq!(bank.balance("alice"), 0);

    // spend(5) on 0 fails and leaves the balance at 0
    assert!(!bank.spend("alice", 5));
    assert_eq!(bank.balance("alice"), 0);
}
