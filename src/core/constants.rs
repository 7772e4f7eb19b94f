// Timers
pub const PLAYTIME_TICK_SECONDS: u64 = 1;
pub const PASSIVE_MINING_TICK_SECONDS: u64 = 60;

// Persistence
pub const STORAGE_KEY: &str = "hugoland_game_state";
pub const SNAPSHOT_VERSION: u32 = 1;

// Starting values
pub const STARTING_COINS: u64 = 100;
pub const STARTING_GEMS: u64 = 0;
pub const STARTING_ZONE: u32 = 1;
pub const BASE_PLAYER_ATK: u32 = 50;
pub const BASE_PLAYER_DEF: u32 = 0;
pub const BASE_PLAYER_HP: u32 = 200;
pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_MINING_EFFICIENCY: u64 = 2;
pub const DEFAULT_SURVIVAL_LIVES: u32 = 3;

// Progression
pub const PREMIUM_ZONE: u32 = 50;
pub const LEVELS_PER_RESEARCH_TIER: u32 = 10;
pub const RESEARCH_BONUS_PER_LEVEL: u32 = 5;
pub const RESEARCH_BONUS_PER_TIER: u32 = 15;
pub const RESEARCH_BASE_COST: u64 = 150;
pub const RESEARCH_COST_PER_LEVEL_IN_TIER: u64 = 50;

// Equipment
pub const WEAPON_ATK_PER_LEVEL: u32 = 10;
pub const ARMOR_DEF_PER_LEVEL: u32 = 5;
pub const BASE_RARITY_WEIGHTS: [u32; 5] = [40, 30, 20, 8, 2];
pub const WEAPON_ATK_JITTER: u32 = 10;
pub const ARMOR_DEF_JITTER: u32 = 5;
pub const MYTHICAL_WEAPON_ATK_JITTER: u32 = 75;
pub const MYTHICAL_ARMOR_DEF_JITTER: u32 = 45;
pub const MAX_ENCHANTMENT_LEVEL: u8 = 3;
pub const REPAIR_BASE_COST: u64 = 20;

// Chests
pub const CHEST_MIN_ITEMS: usize = 2;
pub const CHEST_MAX_ITEMS: usize = 4;
pub const CHEST_BONUS_GEMS_MIN: u64 = 10;
pub const CHEST_BONUS_GEMS_MAX: u64 = 24;
pub const LEGENDARY_CHEST_COST: u64 = 2000;
pub const EPIC_CHEST_COST: u64 = 800;
pub const RARE_CHEST_COST: u64 = 300;
pub const BASIC_CHEST_COST: u64 = 100;

// Enemies (zone scaling)
pub const ENEMY_BASE_HP: u32 = 200;
pub const ENEMY_HP_PER_ZONE: u32 = 15;
pub const ENEMY_BASE_ATK: u32 = 20;
pub const ENEMY_ATK_PER_ZONE: u32 = 8;
pub const ENEMY_DEF_PER_ZONE: u32 = 2;
pub const ENEMY_HP_DOUBLING_ZONE: u32 = 10;
pub const ENEMY_ATK_DEF_DOUBLING_ZONE: u32 = 30;

// Combat rewards
pub const VICTORY_COINS_PER_ZONE: u64 = 8;
pub const VICTORY_COIN_JITTER: u64 = 15;
pub const VICTORY_GEMS_MIN: u64 = 1;
pub const VICTORY_GEMS_MAX: u64 = 3;

// Knowledge streak
pub const STREAK_STEP: u32 = 5;
pub const STREAK_BONUS_PER_STEP: f64 = 0.1;
pub const STREAK_MAX_MULTIPLIER: f64 = 2.0;

// Multipliers
pub const MULTIPLIER_PURCHASE_STEP: f64 = 0.1;

// Expedition
pub const EXPEDITION_MAX_ZONE: u32 = 20;
pub const EXPEDITION_LIVES: u32 = 1;
pub const EXPEDITION_MIN_QUESTIONS: u32 = 10;
pub const EXPEDITION_MAX_QUESTIONS: u32 = 20;
pub const EXPEDITION_DEFAULT_QUESTIONS: u32 = 15;
pub const EXPEDITION_COINS_PER_QUESTION: u64 = 100;
pub const EXPEDITION_GEMS_PER_QUESTION: u64 = 10;
pub const EXPEDITION_MULTIPLIER_MODIFIER_COUNT: usize = 3;
