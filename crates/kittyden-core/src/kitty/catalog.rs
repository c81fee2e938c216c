//! The fixed kitty catalog.
//!
//! Kitties are defined statically and never created or destroyed at
//! runtime; they are only unlocked and equipped.

use serde::Serialize;

use super::rarity::{rarity_of, Rarity};

/// Everyone starts with this kitty; it is also the guaranteed-safe
/// fallback when a draw misconfigures.
pub const DEFAULT_KITTY: &str = "basic";

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KittyInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// All kitties, in gallery order.
pub const CATALOG: &[KittyInfo] = &[
    KittyInfo { id: "basic", name: "Basic Kitty" },
    KittyInfo { id: "water", name: "Water Kitty" },
    KittyInfo { id: "bgs", name: "BGS Kitty" },
    KittyInfo { id: "ginger", name: "Ginger Kitty" },
    KittyInfo { id: "king", name: "King Kitty" },
    KittyInfo { id: "street", name: "Street Kitty" },
    KittyInfo { id: "sphynx", name: "Sphynx Kitty" },
    KittyInfo { id: "tuxedo", name: "Tuxedo Kitty" },
    KittyInfo { id: "galactic", name: "Galactic Kitty" },
    KittyInfo { id: "mfdoom", name: "MFDOOM Kitty" },
];

/// Look up a catalog entry by id.
pub fn find(kitty_id: &str) -> Option<&'static KittyInfo> {
    CATALOG.iter().find(|info| info.id == kitty_id)
}

/// Display name for a kitty id, falling back to the id itself.
pub fn display_name(kitty_id: &str) -> &str {
    match find(kitty_id) {
        Some(info) => info.name,
        None => kitty_id,
    }
}

impl KittyInfo {
    /// Rarity of a catalog entry.
    pub fn rarity(&self) -> Rarity {
        rarity_of(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_kitties() {
        assert_eq!(CATALOG.len(), 10);
    }

    #[test]
    fn test_default_kitty_is_in_catalog() {
        assert!(find(DEFAULT_KITTY).is_some());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("galactic"), "Galactic Kitty");
        assert_eq!(display_name("unknown"), "unknown");
    }
}
