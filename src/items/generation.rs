use super::names::name_pool;
use super::types::{Enchantment, EnchantmentType, Item, ItemKind, Rarity};
use crate::core::constants::{
    ARMOR_DEF_JITTER, BASE_RARITY_WEIGHTS, MAX_ENCHANTMENT_LEVEL, MYTHICAL_ARMOR_DEF_JITTER,
    MYTHICAL_WEAPON_ATK_JITTER, WEAPON_ATK_JITTER,
};
use rand::Rng;
use uuid::Uuid;

/// Picks a rarity by cumulative-weight sampling. Weights are indexed by rarity
/// order; an all-zero table falls back to common.
pub fn roll_rarity(weights: &[u32; 5], rng: &mut impl Rng) -> Rarity {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return Rarity::Common;
    }

    let mut roll = rng.gen_range(0..total);
    for (rarity, &weight) in Rarity::ALL.iter().zip(weights.iter()) {
        if roll < weight {
            return *rarity;
        }
        roll -= weight;
    }
    Rarity::Common
}

/// Stat floor before jitter for regular (non-bonus) generation.
fn stat_floor(kind: ItemKind, rarity: Rarity) -> u32 {
    match (kind, rarity) {
        (ItemKind::Weapon, Rarity::Common) => 15,
        (ItemKind::Weapon, Rarity::Rare) => 25,
        (ItemKind::Weapon, Rarity::Epic) => 40,
        (ItemKind::Weapon, Rarity::Legendary) => 60,
        (ItemKind::Weapon, Rarity::Mythical) => 100,
        (ItemKind::Armor, Rarity::Common) => 8,
        (ItemKind::Armor, Rarity::Rare) => 15,
        (ItemKind::Armor, Rarity::Epic) => 25,
        (ItemKind::Armor, Rarity::Legendary) => 40,
        (ItemKind::Armor, Rarity::Mythical) => 70,
    }
}

/// Sell price in coins: 60% of attack for weapons, 90% of defense for armor.
fn base_sell_price(kind: ItemKind, stat: u32) -> u64 {
    let stat = stat as u64;
    match kind {
        ItemKind::Weapon => stat * 3 / 5,
        ItemKind::Armor => stat * 9 / 10,
    }
}

pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Rolls the enchantment slots for a rarity. Each slot succeeds independently.
pub fn roll_enchantments(rarity: Rarity, rng: &mut impl Rng) -> Vec<Enchantment> {
    let mut enchantments = Vec::new();
    for _ in 0..rarity.enchantment_slots() {
        if rng.gen::<f64>() >= rarity.enchantment_chance() {
            continue;
        }
        let kind = EnchantmentType::ALL[rng.gen_range(0..EnchantmentType::ALL.len())];
        enchantments.push(Enchantment {
            id: format!("{}_{}", kind.key(), Uuid::new_v4().simple()),
            kind,
            level: rng.gen_range(1..=MAX_ENCHANTMENT_LEVEL),
        });
    }
    enchantments
}

fn build_item(kind: ItemKind, rarity: Rarity, base_stat: u32, sell_price: u64, rng: &mut impl Rng) -> Item {
    let pool = name_pool(kind, rarity);
    let name = pool[rng.gen_range(0..pool.len())].to_string();
    let enchantments = roll_enchantments(rarity, rng);

    Item {
        id: new_item_id(),
        kind,
        name,
        rarity,
        base_stat,
        level: 1,
        upgrade_cost: rarity.base_upgrade_cost(),
        sell_price,
        is_chroma: false,
        durability: rarity.max_durability(),
        max_durability: rarity.max_durability(),
        enchantments,
    }
}

/// Generates a weapon or armor piece. Rarity is rolled from the base weights
/// unless `force_rarity` is given.
pub fn generate_item(kind: ItemKind, force_rarity: Option<Rarity>, rng: &mut impl Rng) -> Item {
    let rarity = force_rarity.unwrap_or_else(|| roll_rarity(&BASE_RARITY_WEIGHTS, rng));
    let jitter = match kind {
        ItemKind::Weapon => WEAPON_ATK_JITTER,
        ItemKind::Armor => ARMOR_DEF_JITTER,
    };
    let base_stat = stat_floor(kind, rarity) + rng.gen_range(0..jitter);
    build_item(kind, rarity, base_stat, base_sell_price(kind, base_stat), rng)
}

pub fn generate_weapon(force_rarity: Option<Rarity>, rng: &mut impl Rng) -> Item {
    generate_item(ItemKind::Weapon, force_rarity, rng)
}

pub fn generate_armor(force_rarity: Option<Rarity>, rng: &mut impl Rng) -> Item {
    generate_item(ItemKind::Armor, force_rarity, rng)
}

/// Mythical-only generator with wider stat jitter and richer sell prices
/// (4.5x attack for weapons, 3x defense for armor).
pub fn generate_mythical_item(kind: ItemKind, rng: &mut impl Rng) -> Item {
    let (jitter, sell_numerator, sell_denominator) = match kind {
        ItemKind::Weapon => (MYTHICAL_WEAPON_ATK_JITTER, 9, 2),
        ItemKind::Armor => (MYTHICAL_ARMOR_DEF_JITTER, 3, 1),
    };
    let base_stat = stat_floor(kind, Rarity::Mythical) + rng.gen_range(0..jitter);
    let sell_price = base_stat as u64 * sell_numerator / sell_denominator;
    build_item(kind, Rarity::Mythical, base_stat, sell_price, rng)
}
