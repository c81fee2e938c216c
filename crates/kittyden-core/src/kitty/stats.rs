//! The five kitty stats and their derivation.
//!
//! A kitty's displayed stats are its rarity's base value plus whatever
//! random bonuses it has collected from level-ups. Bonuses are the only
//! persisted piece; everything else is derived.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// One of the five kitty stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Speed,
    Stealth,
    Intelligence,
    Luck,
    Strength,
}

impl Stat {
    /// All five stats.
    pub const ALL: [Stat; 5] = [
        Stat::Speed,
        Stat::Stealth,
        Stat::Intelligence,
        Stat::Luck,
        Stat::Strength,
    ];

    /// Pick one stat uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Stat {
        Stat::ALL[rng.gen_range(0..Stat::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Speed => "Speed",
            Stat::Stealth => "Stealth",
            Stat::Intelligence => "Intelligence",
            Stat::Luck => "Luck",
            Stat::Strength => "Strength",
        }
    }
}

/// Accumulated per-stat level-up bonuses for one kitty.
///
/// Field names serialize in PascalCase to match the persisted layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StatBonuses {
    pub speed: u32,
    pub stealth: u32,
    pub intelligence: u32,
    pub luck: u32,
    pub strength: u32,
}

impl StatBonuses {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Speed => self.speed,
            Stat::Stealth => self.stealth,
            Stat::Intelligence => self.intelligence,
            Stat::Luck => self.luck,
            Stat::Strength => self.strength,
        }
    }

    /// Add one point to a stat.
    pub fn bump(&mut self, stat: Stat) {
        match stat {
            Stat::Speed => self.speed += 1,
            Stat::Stealth => self.stealth += 1,
            Stat::Intelligence => self.intelligence += 1,
            Stat::Luck => self.luck += 1,
            Stat::Strength => self.strength += 1,
        }
    }

    /// Sum of all five counters. Equals `level - 1` for a well-formed record.
    pub fn total(&self) -> u32 {
        self.speed + self.stealth + self.intelligence + self.luck + self.strength
    }
}

/// Fully derived stat values for one kitty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatBlock {
    pub speed: u32,
    pub stealth: u32,
    pub intelligence: u32,
    pub luck: u32,
    pub strength: u32,
}

impl StatBlock {
    /// Derive displayed stats: rarity base plus accumulated bonuses.
    pub fn derive(rarity: Rarity, bonuses: &StatBonuses) -> Self {
        let base = rarity.base_stat();
        Self {
            speed: base + bonuses.speed,
            stealth: base + bonuses.stealth,
            intelligence: base + bonuses.intelligence,
            luck: base + bonuses.luck,
            strength: base + bonuses.strength,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Speed => self.speed,
            Stat::Stealth => self.stealth,
            Stat::Intelligence => self.intelligence,
            Stat::Luck => self.luck,
            Stat::Strength => self.strength,
        }
    }
}
