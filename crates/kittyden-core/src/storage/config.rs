//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Pet behavior (eating duration, sound muted)
//! - Birthday reminder time
//! - Account rules (manager account, starting balances)
//! - Gacha pricing
//!
//! Configuration is stored at `~/.config/kittyden/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

use super::data_dir;

/// Pet behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetConfig {
    /// How long the eating phase lasts, in seconds.
    #[serde(default = "default_eating_seconds")]
    pub eating_seconds: u64,
    #[serde(default)]
    pub sound_muted: bool,
}

/// Birthday reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Reminder time of day, "HH:MM".
    #[serde(default = "default_reminder_time")]
    pub reminder_time: String,
}

/// Account rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Account name that gets the manager starting balance (case-insensitive).
    #[serde(default = "default_manager_account")]
    pub manager_account: String,
    #[serde(default = "default_manager_coins")]
    pub manager_coins: u64,
    #[serde(default = "default_starting_coins")]
    pub starting_coins: u64,
    /// Penalties never push a balance below this.
    #[serde(default = "default_coin_floor")]
    pub coin_floor: u64,
}

/// Gacha pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GachaConfig {
    /// Coins per draw.
    #[serde(default = "default_draw_cost")]
    pub draw_cost: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/kittyden/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pet: PetConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub gacha: GachaConfig,
}

// Default functions
fn default_eating_seconds() -> u64 {
    6
}
fn default_reminder_time() -> String {
    "07:00".into()
}
fn default_manager_account() -> String {
    "sebastian".into()
}
fn default_manager_coins() -> u64 {
    10_000
}
fn default_starting_coins() -> u64 {
    5
}
fn default_coin_floor() -> u64 {
    5
}
fn default_draw_cost() -> u64 {
    5
}
fn default_true() -> bool {
    true
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            eating_seconds: default_eating_seconds(),
            sound_muted: false,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_time: default_reminder_time(),
        }
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            manager_account: default_manager_account(),
            manager_coins: default_manager_coins(),
            starting_coins: default_starting_coins(),
            coin_floor: default_coin_floor(),
        }
    }
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            draw_cost: default_draw_cost(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pet: PetConfig::default(),
            notifications: NotificationsConfig::default(),
            accounts: AccountsConfig::default(),
            gacha: GachaConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| ConfigError::ParseFailed(format!(
                                "cannot parse '{value}' as number"
                            )))?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::new(),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, silently falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load config, using defaults: {e}");
            Self::default()
        })
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Returns error if the key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        self.save()?;
        Ok(())
    }
}
