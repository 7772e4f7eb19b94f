//! Item fusion and repair pricing.

use super::generation::new_item_id;
use super::types::{Item, Rarity};
use crate::core::constants::REPAIR_BASE_COST;

/// Rarity of a fused item: mythical dominates, then legendary, otherwise epic.
pub fn merged_rarity(first: Rarity, second: Rarity) -> Rarity {
    if first == Rarity::Mythical || second == Rarity::Mythical {
        Rarity::Mythical
    } else if first == Rarity::Legendary || second == Rarity::Legendary {
        Rarity::Legendary
    } else {
        Rarity::Epic
    }
}

/// Fuses two items of the same kind into a new one with a fresh id.
///
/// Base stat is 110% of the sum, sell price 120% of the sum, upgrade cost the
/// average, and durability is fully restored to the larger ceiling. Stats
/// saturate instead of wrapping. Returns `None` when the kinds differ.
pub fn merge_items(first: &Item, second: &Item, name: &str) -> Option<Item> {
    if first.kind != second.kind {
        return None;
    }

    let stat_sum = first.base_stat as u64 + second.base_stat as u64;
    let base_stat = u32::try_from(stat_sum * 11 / 10).unwrap_or(u32::MAX);
    let max_durability = first.max_durability.max(second.max_durability);
    let mut enchantments = first.enchantments.clone();
    enchantments.extend(second.enchantments.iter().cloned());

    Some(Item {
        id: new_item_id(),
        kind: first.kind,
        name: name.to_string(),
        rarity: merged_rarity(first.rarity, second.rarity),
        base_stat,
        level: first.level.max(second.level),
        upgrade_cost: ((first.upgrade_cost as u128 + second.upgrade_cost as u128) / 2) as u64,
        sell_price: first.sell_price.saturating_add(second.sell_price).saturating_mul(6) / 5,
        is_chroma: first.is_chroma || second.is_chroma,
        durability: max_durability,
        max_durability,
        enchantments,
    })
}

/// Gem cost to restore an item to full durability:
/// `ceil(missing_fraction * 20 * rarity multiplier)`.
pub fn repair_cost(item: &Item) -> u64 {
    if item.max_durability == 0 || item.durability >= item.max_durability {
        return 0;
    }
    let missing = (item.max_durability - item.durability) as u64;
    let numerator = missing * REPAIR_BASE_COST * item.rarity.repair_multiplier_x2();
    let denominator = item.max_durability as u64 * 2;
    numerator.div_ceil(denominator)
}
