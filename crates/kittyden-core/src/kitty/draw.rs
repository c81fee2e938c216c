//! Rarity-weighted kitty draw.
//!
//! Pure function of its random source: roll a uniform value in [0, 100),
//! walk the tiers in declared order accumulating weights, and return a
//! uniform member of the first tier whose cumulative weight exceeds the
//! roll. Misconfiguration (weights short of 100, empty member list) falls
//! back to [`DEFAULT_KITTY`] rather than an undefined selection.

use rand::Rng;

use super::catalog::DEFAULT_KITTY;
use super::rarity::Rarity;

/// Draw one kitty id from the weighted rarity table.
pub fn draw_kitty<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let roll = rng.gen_range(0..100u32);

    let mut cumulative = 0;
    for rarity in Rarity::ALL {
        cumulative += rarity.draw_weight();
        if roll < cumulative {
            let members = rarity.members();
            if members.is_empty() {
                return DEFAULT_KITTY;
            }
            return members[rng.gen_range(0..members.len())];
        }
    }

    DEFAULT_KITTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitty::rarity::rarity_of;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::collections::HashMap;

    #[test]
    fn test_draw_returns_catalog_member() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..1000 {
            let id = draw_kitty(&mut rng);
            assert!(crate::kitty::catalog::find(id).is_some());
        }
    }

    #[test]
    fn test_draw_never_yields_zero_weight_tier() {
        let mut rng = Pcg64::seed_from_u64(42);
        for _ in 0..10_000 {
            assert_ne!(rarity_of(draw_kitty(&mut rng)), Rarity::Mythical);
        }
    }

    #[test]
    fn test_draw_frequencies_converge_to_weights() {
        let mut rng = Pcg64::seed_from_u64(1234);
        let draws = 100_000;
        let mut counts: HashMap<Rarity, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(rarity_of(draw_kitty(&mut rng))).or_default() += 1;
        }

        for rarity in Rarity::ALL {
            let expected = rarity.draw_weight() as f64 / 100.0;
            let observed = *counts.get(&rarity).unwrap_or(&0) as f64 / draws as f64;
            // 1.5 percentage points of slack is generous at 100k samples
            assert!(
                (observed - expected).abs() < 0.015,
                "{:?}: expected {expected}, observed {observed}",
                rarity
            );
        }
    }

    #[test]
    fn test_members_of_a_tier_drawn_uniformly() {
        let mut rng = Pcg64::seed_from_u64(99);
        let draws = 100_000;
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..draws {
            let id = draw_kitty(&mut rng);
            if rarity_of(id) == Rarity::Rare {
                *counts.entry(id).or_default() += 1;
            }
        }
        // Four Rare members should each get about a quarter of Rare draws
        let rare_total: u32 = counts.values().sum();
        for member in Rarity::Rare.members() {
            let observed = *counts.get(member).unwrap_or(&0) as f64 / rare_total as f64;
            assert!(
                (observed - 0.25).abs() < 0.02,
                "{member}: observed {observed}"
            );
        }
    }
}
