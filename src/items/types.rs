use crate::core::constants::{ARMOR_DEF_PER_LEVEL, WEAPON_ATK_PER_LEVEL};
use serde::{Deserialize, Serialize};

/// Equipment category. Weapons contribute attack, armor contributes defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Armor,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Weapon, ItemKind::Armor];

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
        }
    }

    /// Flat stat gained per upgrade level above 1.
    pub fn stat_per_level(&self) -> u32 {
        match self {
            ItemKind::Weapon => WEAPON_ATK_PER_LEVEL,
            ItemKind::Armor => ARMOR_DEF_PER_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythical = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Durability ceiling of a freshly generated item.
    pub fn max_durability(&self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Rare => 75,
            Rarity::Epic => 100,
            Rarity::Legendary => 150,
            Rarity::Mythical => 200,
        }
    }

    /// Gem cost of the first upgrade.
    pub fn base_upgrade_cost(&self) -> u64 {
        match self {
            Rarity::Common => 5,
            Rarity::Rare => 10,
            Rarity::Epic => 20,
            Rarity::Legendary => 40,
            Rarity::Mythical => 50,
        }
    }

    /// Chance that each enchantment slot rolls an enchantment.
    pub fn enchantment_chance(&self) -> f64 {
        match self {
            Rarity::Common => 0.1,
            Rarity::Rare => 0.25,
            Rarity::Epic => 0.5,
            Rarity::Legendary => 0.75,
            Rarity::Mythical => 1.0,
        }
    }

    pub fn enchantment_slots(&self) -> usize {
        match self {
            Rarity::Mythical => 3,
            Rarity::Legendary => 2,
            _ => 1,
        }
    }

    /// Repair multiplier, doubled so it stays integral (1x, 1.5x, 2x, 3x, 5x).
    pub fn repair_multiplier_x2(&self) -> u64 {
        match self {
            Rarity::Common => 2,
            Rarity::Rare => 3,
            Rarity::Epic => 4,
            Rarity::Legendary => 6,
            Rarity::Mythical => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnchantmentType {
    Flame,
    Sharpness,
    Durability,
    Thorns,
    Frost,
    Lightning,
    Poison,
    Healing,
}

impl EnchantmentType {
    pub const ALL: [EnchantmentType; 8] = [
        EnchantmentType::Flame,
        EnchantmentType::Sharpness,
        EnchantmentType::Durability,
        EnchantmentType::Thorns,
        EnchantmentType::Frost,
        EnchantmentType::Lightning,
        EnchantmentType::Poison,
        EnchantmentType::Healing,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EnchantmentType::Flame => "flame",
            EnchantmentType::Sharpness => "sharpness",
            EnchantmentType::Durability => "durability",
            EnchantmentType::Thorns => "thorns",
            EnchantmentType::Frost => "frost",
            EnchantmentType::Lightning => "lightning",
            EnchantmentType::Poison => "poison",
            EnchantmentType::Healing => "healing",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnchantmentType::Flame => "Flame",
            EnchantmentType::Sharpness => "Sharpness",
            EnchantmentType::Durability => "Durability+",
            EnchantmentType::Thorns => "Thorns",
            EnchantmentType::Frost => "Frost",
            EnchantmentType::Lightning => "Lightning",
            EnchantmentType::Poison => "Poison",
            EnchantmentType::Healing => "Healing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EnchantmentType::Flame => "+10% fire damage",
            EnchantmentType::Sharpness => "+15% attack damage",
            EnchantmentType::Durability => "+50% max durability",
            EnchantmentType::Thorns => "Reflects 20% damage back",
            EnchantmentType::Frost => "Slows enemy attacks",
            EnchantmentType::Lightning => "Chain lightning damage",
            EnchantmentType::Poison => "Poisons enemies on hit",
            EnchantmentType::Healing => "Heals 5% HP on hit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enchantment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EnchantmentType,
    pub level: u8,
}

/// A weapon or armor piece. `kind` decides which player stat `base_stat` feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub name: String,
    pub rarity: Rarity,
    pub base_stat: u32,
    pub level: u32,
    pub upgrade_cost: u64,
    pub sell_price: u64,
    #[serde(default)]
    pub is_chroma: bool,
    pub durability: u32,
    pub max_durability: u32,
    #[serde(default)]
    pub enchantments: Vec<Enchantment>,
}

impl Item {
    /// Attack (weapon) or defense (armor) this item adds while equipped.
    pub fn stat_bonus(&self) -> u32 {
        self.base_stat
            .saturating_add(self.level.saturating_sub(1).saturating_mul(self.kind.stat_per_level()))
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }

    /// Loses one point of durability, never going below zero.
    pub fn wear(&mut self) {
        self.durability = self.durability.saturating_sub(1);
    }

    /// Level up: cost grows by 1.5x and sell price by 1.2x, both floored.
    pub fn apply_upgrade(&mut self) {
        self.level += 1;
        self.upgrade_cost = self.upgrade_cost * 3 / 2;
        self.sell_price = self.sell_price * 6 / 5;
    }
}
