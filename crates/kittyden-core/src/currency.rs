//! Per-user coin balances.
//!
//! Balances are stringified integers in the kv store, keyed per user.
//! Reads go through a short-lived [`ReadCache`]; every write invalidates
//! the cached entry. Storage failures degrade to the user's initial
//! balance with a logged warning -- there is no user-facing recovery
//! action, so nothing here returns a hard error.

use serde::Serialize;

use crate::storage::{Config, Database, ReadCache};

const COIN_KEY: &str = "kittyCoins";

/// Account policy the bank operates under, lifted out of [`Config`].
#[derive(Debug, Clone, Serialize)]
pub struct CoinPolicy {
    pub manager_account: String,
    pub manager_coins: u64,
    pub starting_coins: u64,
    pub floor: u64,
}

impl CoinPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            manager_account: config.accounts.manager_account.clone(),
            manager_coins: config.accounts.manager_coins,
            starting_coins: config.accounts.starting_coins,
            floor: config.accounts.coin_floor,
        }
    }
}

impl Default for CoinPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Coin operations over the kv store.
pub struct CoinBank<'a> {
    db: &'a Database,
    cache: &'a mut ReadCache,
    policy: CoinPolicy,
}

impl<'a> CoinBank<'a> {
    pub fn new(db: &'a Database, cache: &'a mut ReadCache, policy: CoinPolicy) -> Self {
        Self { db, cache, policy }
    }

    fn key(user: &str) -> String {
        format!("{COIN_KEY}_{user}")
    }

    /// Starting balance for a user. The manager account starts rich.
    pub fn initial_coins(&self, user: &str) -> u64 {
        if user.eq_ignore_ascii_case(&self.policy.manager_account) {
            self.policy.manager_coins
        } else {
            self.policy.starting_coins
        }
    }

    /// Current balance, initializing new users to their starting balance.
    pub fn balance(&mut self, user: &str) -> u64 {
        let key = Self::key(user);

        if let Some(cached) = self.cache.get(&key) {
            if let Ok(coins) = cached.parse::<u64>() {
                return coins;
            }
        }

        match self.db.kv_get(&key) {
            Ok(Some(raw)) => match raw.parse::<u64>() {
                Ok(coins) => {
                    self.cache.put(&key, &raw);
                    coins
                }
                Err(_) => {
                    // Malformed value counts as no data
                    tracing::warn!(user, %raw, "malformed coin balance, resetting");
                    let initial = self.initial_coins(user);
                    self.write(user, initial);
                    initial
                }
            },
            Ok(None) => {
                let initial = self.initial_coins(user);
                self.write(user, initial);
                initial
            }
            Err(e) => {
                tracing::warn!(user, "failed to load coins, using initial balance: {e}");
                self.initial_coins(user)
            }
        }
    }

    /// Spend coins. Deducts and returns true only if the balance covers
    /// the amount; otherwise the balance is untouched and false is
    /// returned.
    pub fn spend(&mut self, user: &str, amount: u64) -> bool {
        let current = self.balance(user);
        if current < amount {
            return false;
        }
        self.write(user, current - amount);
        true
    }

    /// Add coins unconditionally. Returns the new balance.
    pub fn reward(&mut self, user: &str, amount: u64) -> u64 {
        let new_balance = self.balance(user).saturating_add(amount);
        self.write(user, new_balance);
        new_balance
    }

    /// Subtract coins, clamped so the balance never lands below the
    /// configured floor. Returns the new balance.
    pub fn penalty(&mut self, user: &str, amount: u64) -> u64 {
        let current = self.balance(user);
        let new_balance = current.saturating_sub(amount).max(self.policy.floor);
        self.write(user, new_balance);
        new_balance
    }

    fn write(&mut self, user: &str, coins: u64) {
        let key = Self::key(user);
        if let Err(e) = self.db.kv_set(&key, &coins.to_string()) {
            tracing::warn!(user, coins, "failed to save coins: {e}");
        }
        self.cache.invalidate(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_fixture<'a>(db: &'a Database, cache: &'a mut ReadCache) -> CoinBank<'a> {
        CoinBank::new(db, cache, CoinPolicy::default())
    }

    fn fresh() -> (Database, ReadCache) {
        (Database::open_memory().unwrap(), ReadCache::new())
    }

    #[test]
    fn test_new_user_starts_with_initial_coins() {
        let (db, mut cache) = fresh();
        let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::default());
        assert_eq!(bank.balance("alice"), 5);
        // Initial balance was persisted
        assert_eq!(db.kv_get("kittyCoins_alice").unwrap().unwrap(), "5");
    }

    #[test]
    fn test_manager_account_starts_rich() {
        let (db, mut cache) = fresh();
        let mut bank = bank_fixture(&db, &mut cache);
        assert_eq!(bank.balance("Sebastian"), 10_000);
    }

    #[test]
    fn test_spend_exact_balance_succeeds() {
        let (db, mut cache) = fresh();
        let mut bank = bank_fixture(&db, &mut cache);
        assert_eq!(bank.balance("alice"), 5);
        assert!(bank.spend("alice", 5));
        assert_eq!(bank.balance("alice"), 0);
    }

    #[test]
    fn test_spend_insufficient_leaves_balance_unchanged() {
        let (db, mut cache) = fresh();
        let mut bank = bank_fixture(&db, &mut cache);
        assert!(bank.spend("alice", 5));
        assert!(!bank.spend("alice", 5));
        assert_eq!(bank.balance("alice"), 0);
    }

    #[test]
    fn test_reward_adds() {
        let (db, mut cache) = fresh();
        let mut bank = bank_fixture(&db, &mut cache);
        assert_eq!(bank.reward("alice", 100), 105);
    }

    #[test]
    fn test_penalty_clamps_to_floor() {
        let (db, mut cache) = fresh();
        let mut bank = bank_fixture(&db, &mut cache);
        bank.reward("alice", 100); // 105
        assert_eq!(bank.penalty("alice", 1_000), 5);
        assert_eq!(bank.balance("alice"), 5);
    }

    #[test]
    fn test_penalty_below_floor_raises_to_floor() {
        let (db, mut cache) = fresh();
        let mut bank = bank_fixture(&db, &mut cache);
        assert!(bank.spend("alice", 5)); // balance 0
        assert_eq!(bank.penalty("alice", 1), 5);
    }

    #[test]
    fn test_malformed_balance_resets_to_initial() {
        let (db, mut cache) = fresh();
        db.kv_set("kittyCoins_alice", "not-a-number").unwrap();
        let mut bank = bank_fixture(&db, &mut cache);
        assert_eq!(bank.balance("alice"), 5);
    }

    #[test]
    fn test_write_invalidates_cache() {
        let (db, mut cache) = fresh();
        {
            let mut bank = CoinBank::new(&db, &mut cache, CoinPolicy::default());
            bank.balance("alice"); // populate cache
            bank.reward("alice", 10);
        }
        // The stale pre-reward value must not have survived in the cache
        assert!(cache.get("kittyCoins_alice").is_none());
        let mut bank = bank_fixture(&db, &mut cache);
        assert_eq!(bank.balance("alice"), 15);
    }
}
