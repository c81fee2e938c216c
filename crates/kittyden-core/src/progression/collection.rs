//! The unlocked set and the equipped kitty.
//!
//! The unlocked set is per installation and only ever grows; `basic` is
//! always a member. The equipped kitty is per user and must be unlocked.

use std::collections::BTreeSet;

use crate::error::{CoreError, ValidationError};
use crate::kitty::catalog::{self, DEFAULT_KITTY};
use crate::storage::Database;

const UNLOCKED_KEY: &str = "unlockedKitties";
const EQUIPPED_KEY: &str = "equippedKitty";

/// Unlock and equip operations over the kv store.
pub struct Collection<'a> {
    db: &'a Database,
}

impl<'a> Collection<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All unlocked kitty ids. Always contains `basic`.
    pub fn unlocked(&self) -> BTreeSet<String> {
        let mut set: BTreeSet<String> = match self.db.kv_get(UNLOCKED_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("malformed unlocked set, resetting: {e}");
                BTreeSet::new()
            }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::warn!("failed to load unlocked set: {e}");
                BTreeSet::new()
            }
        };
        set.insert(DEFAULT_KITTY.to_string());
        set
    }

    pub fn is_unlocked(&self, kitty_id: &str) -> bool {
        self.unlocked().contains(kitty_id)
    }

    /// Add a kitty to the unlocked set.
    ///
    /// # Errors
    /// Returns an error if the id is not in the catalog.
    pub fn unlock(&self, kitty_id: &str) -> Result<(), CoreError> {
        if catalog::find(kitty_id).is_none() {
            return Err(ValidationError::UnknownKitty(kitty_id.to_string()).into());
        }
        let mut set = self.unlocked();
        set.insert(kitty_id.to_string());
        match serde_json::to_string(&set) {
            Ok(json) => {
                if let Err(e) = self.db.kv_set(UNLOCKED_KEY, &json) {
                    tracing::warn!(kitty_id, "failed to save unlocked set: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize unlocked set: {e}"),
        }
        Ok(())
    }

    /// The user's equipped kitty, defaulting to `basic`.
    pub fn equipped(&self, user: &str) -> String {
        let key = format!("{EQUIPPED_KEY}_{user}");
        match self.db.kv_get(&key) {
            Ok(Some(id)) => id,
            Ok(None) => DEFAULT_KITTY.to_string(),
            Err(e) => {
                tracing::warn!(user, "failed to load equipped kitty: {e}");
                DEFAULT_KITTY.to_string()
            }
        }
    }

    /// Equip a kitty for a user.
    ///
    /// # Errors
    /// Returns an error if the kitty is unknown or not unlocked.
    pub fn equip(&self, user: &str, kitty_id: &str) -> Result<(), CoreError> {
        if catalog::find(kitty_id).is_none() {
            return Err(ValidationError::UnknownKitty(kitty_id.to_string()).into());
        }
        if !self.is_unlocked(kitty_id) {
            return Err(ValidationError::NotUnlocked(kitty_id.to_string()).into());
        }
        let key = format!("{EQUIPPED_KEY}_{user}");
        self.db.kv_set(&key, kitty_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_is_always_unlocked() {
        let db = Database::open_memory().unwrap();
        let collection = Collection::new(&db);
        assert!(collection.is_unlocked("basic"));
    }

    #[test]
    fn test_unlock_grows_set() {
        let db = Database::open_memory().unwrap();
        let collection = Collection::new(&db);
        collection.unlock("galactic").unwrap();
        collection.unlock("king").unwrap();
        let unlocked = collection.unlocked();
        assert!(unlocked.contains("galactic"));
        assert!(unlocked.contains("king"));
        assert!(unlocked.contains("basic"));
    }

    #[test]
    fn test_unlock_unknown_kitty_rejected() {
        let db = Database::open_memory().unwrap();
        let collection = Collection::new(&db);
        assert!(collection.unlock("doggo").is_err());
    }

    #[test]
    fn test_equip_defaults_to_basic() {
        let db = Database::open_memory().unwrap();
        let collection = Collection::new(&db);
        assert_eq!(collection.equipped("alice"), "basic");
    }

    #[test]
    fn test_equip_requires_unlock() {
        let db = Database::open_memory().unwrap();
        let collection = Collection::new(&db);
        assert!(collection.equip("alice", "galactic").is_err());
        collection.unlock("galactic").unwrap();
        collection.equip("alice", "galactic").unwrap();
        assert_eq!(collection.equipped("alice"), "galactic");
    }

    #[test]
    fn test_equipped_is_per_user() {
        let db = Database::open_memory().unwrap();
        let collection = Collection::new(&db);
        collection.unlock("water").unwrap();
        collection.equip("alice", "water").unwrap();
        assert_eq!(collection.equipped("bob"), "basic");
    }

    #[test]
    fn test_malformed_set_resets_but_keeps_basic() {
        let db = Database::open_memory().unwrap();
        db.kv_set(UNLOCKED_KEY, "not json").unwrap();
        let collection = Collection::new(&db);
        assert_eq!(collection.unlocked().len(), 1);
    }
}
