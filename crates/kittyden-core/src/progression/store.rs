//! Per-(user, kitty) progression records.
//!
//! Three JSON maps live in the kv store per user: cumulative XP, a level
//! cache, and stat bonuses. XP is the only truth -- the level entry is a
//! memoized projection of it, recomputed and self-healed on read. Every
//! level gained awards one point to a uniformly random stat, which keeps
//! the sum of a record's bonuses equal to `level - 1`.
//!
//! The grant path is a read-modify-write over the kv store with no
//! transaction; two interleaved grants for the same key can lose an
//! update. Accepted for a single-user local app.

use std::collections::BTreeMap;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::kitty::level::{level_from_xp, xp_to_reach};
use crate::kitty::rarity::rarity_of;
use crate::kitty::stats::{Stat, StatBlock, StatBonuses};
use crate::storage::Database;

const XP_KEY: &str = "kittyXP";
const LEVELS_KEY: &str = "kittyLevels";
const BONUSES_KEY: &str = "kittyStatBonuses";

/// Composite identity of a progression record.
///
/// Structural equality; never a concatenated string, so names containing
/// separator characters cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProgressKey {
    pub user: String,
    pub kitty: String,
}

impl ProgressKey {
    pub fn new(user: impl Into<String>, kitty: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            kitty: kitty.into(),
        }
    }
}

/// The persisted (XP, level, bonuses) tuple for one user-kitty pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    pub xp: u64,
    pub level: u32,
    pub bonuses: StatBonuses,
}

/// Result of an XP grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelChange {
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelChange {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }
}

/// Progression operations over the kv store.
pub struct ProgressionStore<'a> {
    db: &'a Database,
}

impl<'a> ProgressionStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn map_key(prefix: &str, user: &str) -> String {
        format!("{prefix}_{user}")
    }

    /// Load a per-user JSON map, treating missing or malformed data as empty.
    fn load_map<T: DeserializeOwned>(&self, prefix: &str, user: &str) -> BTreeMap<String, T> {
        let key = Self::map_key(prefix, user);
        match self.db.kv_get(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, "malformed progression map, treating as empty: {e}");
                BTreeMap::new()
            }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(%key, "failed to load progression map: {e}");
                BTreeMap::new()
            }
        }
    }

    fn save_map<T: Serialize>(&self, prefix: &str, user: &str, map: &BTreeMap<String, T>) {
        let key = Self::map_key(prefix, user);
        match serde_json::to_string(map) {
            Ok(json) => {
                if let Err(e) = self.db.kv_set(&key, &json) {
                    tracing::warn!(%key, "failed to save progression map: {e}");
                }
            }
            Err(e) => tracing::warn!(%key, "failed to serialize progression map: {e}"),
        }
    }

    /// Cumulative XP for a record. Missing records have zero.
    pub fn xp(&self, key: &ProgressKey) -> u64 {
        self.load_map::<u64>(XP_KEY, &key.user)
            .get(&key.kitty)
            .copied()
            .unwrap_or(0)
    }

    /// Stat bonuses for a record. Missing records have all-zero bonuses.
    pub fn bonuses(&self, key: &ProgressKey) -> StatBonuses {
        self.load_map::<StatBonuses>(BONUSES_KEY, &key.user)
            .get(&key.kitty)
            .copied()
            .unwrap_or_default()
    }

    /// Level for a record, derived from XP.
    ///
    /// The persisted level entry is only a display cache; if it has
    /// drifted from the XP-derived value it is rewritten here.
    pub fn level(&self, key: &ProgressKey) -> u32 {
        let computed = level_from_xp(self.xp(key));
        let mut levels = self.load_map::<u32>(LEVELS_KEY, &key.user);
        if levels.get(&key.kitty) != Some(&computed) {
            if levels.contains_key(&key.kitty) {
                tracing::warn!(
                    user = %key.user,
                    kitty = %key.kitty,
                    computed,
                    "stored level drifted from XP, healing"
                );
            }
            levels.insert(key.kitty.clone(), computed);
            self.save_map(LEVELS_KEY, &key.user, &levels);
        }
        computed
    }

    /// Full record for a user-kitty pair.
    pub fn record(&self, key: &ProgressKey) -> ProgressionRecord {
        ProgressionRecord {
            xp: self.xp(key),
            level: self.level(key),
            bonuses: self.bonuses(key),
        }
    }

    /// Displayed stats for a record: rarity base plus bonuses.
    pub fn derived_stats(&self, key: &ProgressKey) -> StatBlock {
        StatBlock::derive(rarity_of(&key.kitty), &self.bonuses(key))
    }

    /// Grant XP and handle level transitions.
    ///
    /// Every level crossed awards one point to a uniformly random stat.
    /// Persists the new XP total, the refreshed level cache, and the
    /// updated bonus map.
    pub fn grant_xp<R: Rng + ?Sized>(
        &self,
        key: &ProgressKey,
        amount: u64,
        rng: &mut R,
    ) -> LevelChange {
        let mut xp_map = self.load_map::<u64>(XP_KEY, &key.user);
        let old_xp = xp_map.get(&key.kitty).copied().unwrap_or(0);
        let new_xp = old_xp.saturating_add(amount);

        let old_level = level_from_xp(old_xp);
        let new_level = level_from_xp(new_xp);

        xp_map.insert(key.kitty.clone(), new_xp);
        self.save_map(XP_KEY, &key.user, &xp_map);

        if new_level > old_level {
            let mut bonuses = self.load_map::<StatBonuses>(BONUSES_KEY, &key.user);
            let entry = bonuses.entry(key.kitty.clone()).or_default();
            for _ in old_level..new_level {
                entry.bump(Stat::random(rng));
            }
            self.save_map(BONUSES_KEY, &key.user, &bonuses);
        }

        let mut levels = self.load_map::<u32>(LEVELS_KEY, &key.user);
        levels.insert(key.kitty.clone(), new_level);
        self.save_map(LEVELS_KEY, &key.user, &levels);

        LevelChange {
            old_level,
            new_level,
        }
    }

    /// Grant exactly enough XP to push the record to its next level.
    pub fn grant_next_level<R: Rng + ?Sized>(
        &self,
        key: &ProgressKey,
        rng: &mut R,
    ) -> LevelChange {
        let xp = self.xp(key);
        let level = level_from_xp(xp);
        let needed = xp_to_reach(level + 1) - xp;
        self.grant_xp(key, needed, rng)
    }
}
