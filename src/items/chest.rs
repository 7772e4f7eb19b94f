//! Chest rarity tables and reward rolls.

use super::generation::{generate_item, roll_rarity};
use super::types::{Item, ItemKind};
use crate::core::constants::{
    BASIC_CHEST_COST, CHEST_BONUS_GEMS_MAX, CHEST_BONUS_GEMS_MIN, CHEST_MAX_ITEMS,
    CHEST_MIN_ITEMS, EPIC_CHEST_COST, LEGENDARY_CHEST_COST, RARE_CHEST_COST,
};
use rand::Rng;

/// Weights used while the `bad_luck` expedition modifier is active.
pub const BAD_LUCK_WEIGHTS: [u32; 5] = [60, 40, 0, 0, 0];

/// Chest tiers offered by the shop, cheapest first.
pub const CHEST_COSTS: [u64; 4] = [
    BASIC_CHEST_COST,
    RARE_CHEST_COST,
    EPIC_CHEST_COST,
    LEGENDARY_CHEST_COST,
];

/// Rarity weights by chest price. Pricier chests shift weight upward.
pub fn chest_rarity_weights(cost: u64) -> [u32; 5] {
    if cost >= LEGENDARY_CHEST_COST {
        [0, 0, 0, 90, 10]
    } else if cost >= EPIC_CHEST_COST {
        [0, 0, 60, 35, 5]
    } else if cost >= RARE_CHEST_COST {
        [0, 50, 35, 13, 2]
    } else {
        [60, 30, 8, 2, 0]
    }
}

/// Rolls between two and four items, capped at `free_slots` so a chest never
/// overfills the inventory. Each item is a weapon or armor with equal odds.
pub fn roll_chest_items(weights: &[u32; 5], free_slots: usize, rng: &mut impl Rng) -> Vec<Item> {
    let count = rng.gen_range(CHEST_MIN_ITEMS..=CHEST_MAX_ITEMS).min(free_slots);
    (0..count)
        .map(|_| {
            let rarity = roll_rarity(weights, rng);
            let kind = if rng.gen_bool(0.5) {
                ItemKind::Weapon
            } else {
                ItemKind::Armor
            };
            generate_item(kind, Some(rarity), rng)
        })
        .collect()
}

/// Bonus gems attached to every chest, scaled by the streak and gem multipliers.
pub fn roll_bonus_gems(streak_multiplier: f64, gem_multiplier: f64, rng: &mut impl Rng) -> u64 {
    let base = rng.gen_range(CHEST_BONUS_GEMS_MIN..=CHEST_BONUS_GEMS_MAX) as f64;
    (base * streak_multiplier * gem_multiplier).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_weights_by_cost() {
        assert_eq!(chest_rarity_weights(5000), [0, 0, 0, 90, 10]);
        assert_eq!(chest_rarity_weights(2000), [0, 0, 0, 90, 10]);
        assert_eq!(chest_rarity_weights(800), [0, 0, 60, 35, 5]);
        assert_eq!(chest_rarity_weights(300), [0, 50, 35, 13, 2]);
        assert_eq!(chest_rarity_weights(100), [60, 30, 8, 2, 0]);
        assert_eq!(chest_rarity_weights(0), [60, 30, 8, 2, 0]);
    }

    #[test]
    fn test_item_count_bounds() {
        let mut rng = create_test_rng();
        for _ in 0..200 {
            let items = roll_chest_items(&chest_rarity_weights(100), 10, &mut rng);
            assert!((CHEST_MIN_ITEMS..=CHEST_MAX_ITEMS).contains(&items.len()));
        }
    }

    #[test]
    fn test_item_count_capped_by_free_slots() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            let items = roll_chest_items(&chest_rarity_weights(100), 1, &mut rng);
            assert_eq!(items.len(), 1);
        }
        assert!(roll_chest_items(&chest_rarity_weights(100), 0, &mut rng).is_empty());
    }

    #[test]
    fn test_legendary_chest_rarities() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            for item in roll_chest_items(&chest_rarity_weights(2000), 4, &mut rng) {
                assert!(item.rarity >= Rarity::Legendary);
            }
        }
    }

    #[test]
    fn test_bad_luck_limits_rarity() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            for item in roll_chest_items(&BAD_LUCK_WEIGHTS, 4, &mut rng) {
                assert!(item.rarity <= Rarity::Rare);
            }
        }
    }

    #[test]
    fn test_bonus_gems_scaled() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            let plain = roll_bonus_gems(1.0, 1.0, &mut rng);
            assert!((CHEST_BONUS_GEMS_MIN..=CHEST_BONUS_GEMS_MAX).contains(&plain));
            let doubled = roll_bonus_gems(2.0, 1.0, &mut rng);
            assert!(doubled >= CHEST_BONUS_GEMS_MIN * 2 && doubled <= CHEST_BONUS_GEMS_MAX * 2);
        }
    }
}
