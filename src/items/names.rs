//! Name pools for generated equipment.

use super::types::{ItemKind, Rarity};

const WEAPON_NAMES_COMMON: &[&str] = &["Rusty Sword", "Wooden Club", "Stone Axe", "Iron Dagger"];
const WEAPON_NAMES_RARE: &[&str] = &["Steel Blade", "Silver Mace", "Enchanted Bow", "Crystal Staff"];
const WEAPON_NAMES_EPIC: &[&str] = &["Flamebrand", "Frostbite", "Thunder Strike", "Shadow Cleaver"];
const WEAPON_NAMES_LEGENDARY: &[&str] = &["Excalibur", "Mjolnir", "Gungnir", "Durandal"];
const WEAPON_NAMES_MYTHICAL: &[&str] = &[
    "Void Reaper",
    "Cosmic Blade",
    "Reality Slicer",
    "Dimension Cutter",
    "Soul Harvester",
    "Infinity Edge",
    "Chaos Bringer",
    "Eternal Destroyer",
];

const ARMOR_NAMES_COMMON: &[&str] = &["Leather Vest", "Cloth Robe", "Wooden Shield", "Iron Helm"];
const ARMOR_NAMES_RARE: &[&str] = &["Chainmail", "Steel Plate", "Mystic Cloak", "Silver Guard"];
const ARMOR_NAMES_EPIC: &[&str] = &["Dragon Scale", "Phoenix Mail", "Void Armor", "Crystal Guard"];
const ARMOR_NAMES_LEGENDARY: &[&str] = &[
    "Divine Aegis",
    "Eternal Plate",
    "Shadowweave",
    "Celestial Ward",
];
const ARMOR_NAMES_MYTHICAL: &[&str] = &[
    "Abyssal Aegis",
    "Stellar Fortress",
    "Quantum Shield",
    "Infinity Guard",
    "Void Mantle",
    "Cosmic Barrier",
    "Reality Armor",
    "Dimensional Cloak",
];

/// Name pool for the given category and rarity. Never empty.
pub fn name_pool(kind: ItemKind, rarity: Rarity) -> &'static [&'static str] {
    match (kind, rarity) {
        (ItemKind::Weapon, Rarity::Common) => WEAPON_NAMES_COMMON,
        (ItemKind::Weapon, Rarity::Rare) => WEAPON_NAMES_RARE,
        (ItemKind::Weapon, Rarity::Epic) => WEAPON_NAMES_EPIC,
        (ItemKind::Weapon, Rarity::Legendary) => WEAPON_NAMES_LEGENDARY,
        (ItemKind::Weapon, Rarity::Mythical) => WEAPON_NAMES_MYTHICAL,
        (ItemKind::Armor, Rarity::Common) => ARMOR_NAMES_COMMON,
        (ItemKind::Armor, Rarity::Rare) => ARMOR_NAMES_RARE,
        (ItemKind::Armor, Rarity::Epic) => ARMOR_NAMES_EPIC,
        (ItemKind::Armor, Rarity::Legendary) => ARMOR_NAMES_LEGENDARY,
        (ItemKind::Armor, Rarity::Mythical) => ARMOR_NAMES_MYTHICAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pool_is_populated() {
        for kind in ItemKind::ALL {
            for rarity in Rarity::ALL {
                assert!(!name_pool(kind, rarity).is_empty());
            }
        }
    }

    #[test]
    fn test_mythical_pools_are_larger() {
        assert_eq!(name_pool(ItemKind::Weapon, Rarity::Mythical).len(), 8);
        assert_eq!(name_pool(ItemKind::Armor, Rarity::Mythical).len(), 8);
    }
}
