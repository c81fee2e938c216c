//! Kitty catalog, rarity tiers, and the pure progression math.

pub mod catalog;
pub mod draw;
pub mod level;
pub mod rarity;
pub mod stats;

pub use catalog::{display_name, KittyInfo, CATALOG, DEFAULT_KITTY};
pub use draw::draw_kitty;
pub use level::{level_from_xp, xp_to_advance, xp_to_reach};
pub use rarity::{rarity_of, Rarity};
pub use stats::{Stat, StatBlock, StatBonuses};
