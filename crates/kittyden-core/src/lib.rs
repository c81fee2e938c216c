//! # Kittyden Core Library
//!
//! This library provides the core logic for Kittyden, a birthday-reminder
//! and virtual-pet companion app. It implements a CLI-first philosophy
//! where every operation is available via a standalone CLI binary, with
//! any GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Kitty engine**: rarity tiers, the weighted gacha draw, the XP
//!   curve, and stat derivation -- all pure functions
//! - **Progression**: per-(user, kitty) XP/level/bonus records and the
//!   unlocked/equipped collection, persisted to a SQLite key-value store
//! - **Currency**: per-user coin balances with spend/reward/penalty rules
//! - **Pet**: a wall-clock awake/eating/sleeping state machine driven by
//!   `tick()`, plus the daily feeding streak
//! - **Games**: the bank heist, Kick the Hooman, and Never Have I Ever
//! - **Birthdays**: the built-in and user-edited birthday books
//!
//! ## Key Components
//!
//! - [`Database`]: key-value persistence
//! - [`Config`]: application configuration management
//! - [`ProgressionStore`]: XP grants and level transitions
//! - [`CoinBank`]: coin balance operations
//! - [`PetStateMachine`]: pet phase transitions

pub mod birthdays;
pub mod currency;
pub mod error;
pub mod gacha;
pub mod games;
pub mod kitty;
pub mod pet;
pub mod progression;
pub mod storage;

pub use currency::{CoinBank, CoinPolicy};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use gacha::{roll_for_kitty, DrawOutcome};
pub use kitty::{draw_kitty, level_from_xp, rarity_of, Rarity, Stat, StatBlock, StatBonuses};
pub use pet::{PetPhase, PetStateMachine};
pub use progression::{Collection, LevelChange, ProgressKey, ProgressionRecord, ProgressionStore};
pub use storage::{data_dir, Config, Database, ReadCache};
