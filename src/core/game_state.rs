use crate::achievements::types::Achievements;
use crate::character::power_skills::PowerSkill;
use crate::combat::types::Enemy;
use crate::core::constants::*;
use crate::expedition::types::ExpeditionState;
use crate::items::types::{Item, ItemKind, Rarity};
use crate::promo::PromoCodeState;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Base floors and the derived values recomputed after every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub base_atk: u32,
    pub base_def: u32,
    pub base_hp: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: BASE_PLAYER_HP,
            max_hp: BASE_PLAYER_HP,
            atk: BASE_PLAYER_ATK,
            def: BASE_PLAYER_DEF,
            base_atk: BASE_PLAYER_ATK,
            base_def: BASE_PLAYER_DEF,
            base_hp: BASE_PLAYER_HP,
        }
    }
}

/// Owned equipment. Equipped slots hold item ids that refer into `weapons`/`armor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub weapons: Vec<Item>,
    pub armor: Vec<Item>,
    pub equipped_weapon: Option<String>,
    pub equipped_armor: Option<String>,
    pub max_items: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            weapons: Vec::new(),
            armor: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl Inventory {
    pub fn total_items(&self) -> usize {
        self.weapons.len() + self.armor.len()
    }

    pub fn free_slots(&self) -> usize {
        self.max_items.saturating_sub(self.total_items())
    }

    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    pub fn items(&self, kind: ItemKind) -> &Vec<Item> {
        match kind {
            ItemKind::Weapon => &self.weapons,
            ItemKind::Armor => &self.armor,
        }
    }

    pub fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Weapon => &mut self.weapons,
            ItemKind::Armor => &mut self.armor,
        }
    }

    pub fn find(&self, kind: ItemKind, id: &str) -> Option<&Item> {
        self.items(kind).iter().find(|item| item.id == id)
    }

    pub fn find_mut(&mut self, kind: ItemKind, id: &str) -> Option<&mut Item> {
        self.items_mut(kind).iter_mut().find(|item| item.id == id)
    }

    pub fn equipped_id(&self, kind: ItemKind) -> Option<&str> {
        match kind {
            ItemKind::Weapon => self.equipped_weapon.as_deref(),
            ItemKind::Armor => self.equipped_armor.as_deref(),
        }
    }

    pub fn set_equipped(&mut self, kind: ItemKind, id: Option<String>) {
        match kind {
            ItemKind::Weapon => self.equipped_weapon = id,
            ItemKind::Armor => self.equipped_armor = id,
        }
    }

    pub fn is_equipped(&self, kind: ItemKind, id: &str) -> bool {
        self.equipped_id(kind) == Some(id)
    }

    /// The equipped item of a kind, resolved by id.
    pub fn equipped(&self, kind: ItemKind) -> Option<&Item> {
        let id = self.equipped_id(kind)?;
        self.find(kind, id)
    }

    pub fn equipped_mut(&mut self, kind: ItemKind) -> Option<&mut Item> {
        let id = self.equipped_id(kind)?.to_string();
        self.find_mut(kind, &id)
    }

    /// Appends an item to the sequence matching its kind.
    pub fn add(&mut self, item: Item) {
        self.items_mut(item.kind).push(item);
    }

    /// Removes an item by id, clearing the equipped slot if it pointed at it.
    pub fn remove(&mut self, kind: ItemKind, id: &str) -> Option<Item> {
        let items = self.items_mut(kind);
        let position = items.iter().position(|item| item.id == id)?;
        let removed = items.remove(position);
        if self.is_equipped(kind, id) {
            self.set_equipped(kind, None);
        }
        Some(removed)
    }

    /// Drops equipped ids that no longer resolve to an owned item.
    pub fn clear_dangling_equipped(&mut self) {
        for kind in ItemKind::ALL {
            if self.equipped_id(kind).is_some() && self.equipped(kind).is_none() {
                self.set_equipped(kind, None);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub level: u32,
    pub tier: u32,
    pub total_spent: u64,
}

/// Discovery tallies per rarity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RarityTally {
    pub common: u64,
    pub rare: u64,
    pub epic: u64,
    pub legendary: u64,
    pub mythical: u64,
}

impl RarityTally {
    pub fn get(&self, rarity: Rarity) -> u64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythical => self.mythical,
        }
    }

    pub fn increment(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Common => self.common += 1,
            Rarity::Rare => self.rare += 1,
            Rarity::Epic => self.epic += 1,
            Rarity::Legendary => self.legendary += 1,
            Rarity::Mythical => self.mythical += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionBook {
    pub weapons: BTreeSet<String>,
    pub armor: BTreeSet<String>,
    pub total_weapons_found: u64,
    pub total_armor_found: u64,
    pub rarity_stats: RarityTally,
}

impl CollectionBook {
    /// Marks an item name as discovered. Returns true on first discovery.
    pub fn record(&mut self, item: &Item) -> bool {
        let (names, count) = match item.kind {
            ItemKind::Weapon => (&mut self.weapons, &mut self.total_weapons_found),
            ItemKind::Armor => (&mut self.armor, &mut self.total_armor_found),
        };
        if !names.insert(item.name.clone()) {
            return false;
        }
        *count += 1;
        self.rarity_stats.increment(item.rarity);
        true
    }

    pub fn total_discovered(&self) -> u64 {
        self.total_weapons_found + self.total_armor_found
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeStreak {
    pub current: u32,
    pub best: u32,
    pub multiplier: f64,
    #[serde(default)]
    pub last_correct_time: Option<i64>,
}

impl Default for KnowledgeStreak {
    fn default() -> Self {
        Self {
            current: 0,
            best: 0,
            multiplier: 1.0,
            last_correct_time: None,
        }
    }
}

impl KnowledgeStreak {
    pub fn record(&mut self, correct: bool, now_ms: i64) {
        if correct {
            self.current += 1;
            self.best = self.best.max(self.current);
            self.last_correct_time = Some(now_ms);
        } else {
            self.current = 0;
        }
        self.multiplier = crate::core::economy::streak_multiplier(self.current);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Blitz,
    Bloodlust,
    Crazy,
}

impl GameMode {
    /// Player (atk, def, hp) multipliers.
    pub fn stat_multipliers(&self) -> (f64, f64, f64) {
        match self {
            GameMode::Normal | GameMode::Blitz => (1.0, 1.0, 1.0),
            GameMode::Bloodlust => (2.0, 0.5, 0.5),
            GameMode::Crazy => (0.5, 0.5, 0.5),
        }
    }

    /// Reward (coins, gems) multipliers.
    pub fn reward_multipliers(&self) -> (f64, f64) {
        match self {
            GameMode::Normal | GameMode::Bloodlust => (1.0, 1.0),
            GameMode::Blitz => (1.25, 1.1),
            GameMode::Crazy => (6.0, 6.0),
        }
    }

    /// Enemy (hp, atk, def) multipliers.
    pub fn enemy_multipliers(&self) -> (u32, u32, u32) {
        match self {
            GameMode::Crazy => (3, 3, 2),
            _ => (1, 1, 1),
        }
    }

    pub fn is_speed_mode(&self) -> bool {
        matches!(self, GameMode::Blitz | GameMode::Bloodlust)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModeState {
    pub current: GameMode,
    pub speed_mode_active: bool,
    pub survival_lives: u32,
    pub max_survival_lives: u32,
}

impl Default for GameModeState {
    fn default() -> Self {
        Self {
            current: GameMode::Normal,
            speed_mode_active: false,
            survival_lives: DEFAULT_SURVIVAL_LIVES,
            max_survival_lives: DEFAULT_SURVIVAL_LIVES,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAccuracy {
    pub correct: u64,
    pub total: u64,
}

/// Lifetime accumulators. Every counter only grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_questions_answered: u64,
    pub correct_answers: u64,
    /// Seconds of play time.
    pub total_play_time: u64,
    pub zones_reached: u64,
    pub items_collected: u64,
    pub coins_earned: u64,
    pub gems_earned: u64,
    pub chests_opened: u64,
    pub accuracy_by_category: BTreeMap<String, CategoryAccuracy>,
    pub session_start_time: i64,
}

impl Statistics {
    /// Counts one categorized answer toward the totals and its category.
    pub fn record_answer(&mut self, category: &str, correct: bool) {
        self.total_questions_answered += 1;
        let entry = self
            .accuracy_by_category
            .entry(category.to_string())
            .or_default();
        entry.total += 1;
        if correct {
            self.correct_answers += 1;
            entry.correct += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheatKind {
    InfiniteCoins,
    InfiniteGems,
    ObtainAnyItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cheats {
    pub infinite_coins: bool,
    pub infinite_gems: bool,
    pub obtain_any_item: bool,
}

impl Cheats {
    pub fn toggle(&mut self, cheat: CheatKind) {
        let flag = match cheat {
            CheatKind::InfiniteCoins => &mut self.infinite_coins,
            CheatKind::InfiniteGems => &mut self.infinite_gems,
            CheatKind::ObtainAnyItem => &mut self.obtain_any_item,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mining {
    /// Gems per minute.
    pub efficiency: u64,
    pub total_gems_mined: u64,
    pub is_afk_mining: bool,
    /// Milliseconds since the epoch.
    pub last_afk_time: i64,
}

impl Mining {
    pub fn new(now_ms: i64) -> Self {
        Self {
            efficiency: DEFAULT_MINING_EFFICIENCY,
            total_gems_mined: 0,
            is_afk_mining: true,
            last_afk_time: now_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplierKind {
    Coins,
    Gems,
    Atk,
    Def,
    Hp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub coins: f64,
    pub gems: f64,
    pub atk: f64,
    pub def: f64,
    pub hp: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            coins: 1.0,
            gems: 1.0,
            atk: 1.0,
            def: 1.0,
            hp: 1.0,
        }
    }
}

impl Multipliers {
    pub fn get(&self, kind: MultiplierKind) -> f64 {
        match kind {
            MultiplierKind::Coins => self.coins,
            MultiplierKind::Gems => self.gems,
            MultiplierKind::Atk => self.atk,
            MultiplierKind::Def => self.def,
            MultiplierKind::Hp => self.hp,
        }
    }

    pub fn add(&mut self, kind: MultiplierKind, amount: f64) {
        let slot = match kind {
            MultiplierKind::Coins => &mut self.coins,
            MultiplierKind::Gems => &mut self.gems,
            MultiplierKind::Atk => &mut self.atk,
            MultiplierKind::Def => &mut self.def,
            MultiplierKind::Hp => &mut self.hp,
        };
        *slot += amount;
    }
}

/// Main game state containing all player progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub coins: u64,
    pub gems: u64,
    pub zone: u32,
    pub player_stats: PlayerStats,
    pub inventory: Inventory,
    pub research: Research,
    pub is_premium: bool,
    pub achievements: Achievements,
    pub collection_book: CollectionBook,
    pub knowledge_streak: KnowledgeStreak,
    pub game_mode: GameModeState,
    pub statistics: Statistics,
    pub power_skills: Vec<PowerSkill>,
    pub cheats: Cheats,
    pub mining: Mining,
    pub promo_codes: PromoCodeState,
    pub multipliers: Multipliers,
    pub expedition: ExpeditionState,
    /// Enemy being fought (transient, not saved)
    #[serde(skip)]
    pub current_enemy: Option<Enemy>,
    /// Combat flag (transient, not saved)
    #[serde(skip)]
    pub in_combat: bool,
    /// Narrative of the current or most recent combat (transient, not saved)
    #[serde(skip)]
    pub combat_log: Vec<String>,
}

impl GameState {
    /// Creates a fresh game state. `now_ms` seeds the session and AFK timers.
    pub fn new(now_ms: i64) -> Self {
        Self {
            coins: STARTING_COINS,
            gems: STARTING_GEMS,
            zone: STARTING_ZONE,
            player_stats: PlayerStats::default(),
            inventory: Inventory::default(),
            research: Research::default(),
            is_premium: false,
            achievements: Achievements::default(),
            collection_book: CollectionBook::default(),
            knowledge_streak: KnowledgeStreak::default(),
            game_mode: GameModeState::default(),
            statistics: Statistics {
                session_start_time: now_ms,
                ..Statistics::default()
            },
            power_skills: Vec::new(),
            cheats: Cheats::default(),
            mining: Mining::new(now_ms),
            promo_codes: PromoCodeState::default(),
            multipliers: Multipliers::default(),
            expedition: ExpeditionState::default(),
            current_enemy: None,
            in_combat: false,
            combat_log: Vec::new(),
        }
    }

    pub fn has_power_skill(&self, id: &str) -> bool {
        self.power_skills.iter().any(|skill| skill.id == id)
    }

    /// Credits coins earned through play, tracking the lifetime total.
    pub fn earn_coins(&mut self, amount: u64) {
        self.coins += amount;
        self.statistics.coins_earned += amount;
    }

    /// Credits gems earned through play, tracking the lifetime total.
    pub fn earn_gems(&mut self, amount: u64) {
        self.gems += amount;
        self.statistics.gems_earned += amount;
    }

    /// Adds newly acquired items and records them in the collection book.
    pub fn acquire_items(&mut self, items: Vec<Item>) {
        for item in items {
            if self.collection_book.record(&item) {
                self.statistics.items_collected += 1;
            }
            self.inventory.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::generation::generate_item;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_state_defaults() {
        let state = GameState::new(1_000);
        assert_eq!(state.coins, 100);
        assert_eq!(state.gems, 0);
        assert_eq!(state.zone, 1);
        assert_eq!(state.player_stats.max_hp, 200);
        assert_eq!(state.player_stats.atk, 50);
        assert_eq!(state.inventory.max_items, 5);
        assert_eq!(state.mining.efficiency, 2);
        assert_eq!(state.mining.last_afk_time, 1_000);
        assert_eq!(state.statistics.session_start_time, 1_000);
        assert_eq!(state.game_mode.survival_lives, 3);
        assert!(!state.in_combat);
        assert!(state.current_enemy.is_none());
    }

    #[test]
    fn test_inventory_remove_clears_equipped() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut inventory = Inventory::default();
        let weapon = generate_item(ItemKind::Weapon, None, &mut rng);
        let id = weapon.id.clone();
        inventory.add(weapon);
        inventory.set_equipped(ItemKind::Weapon, Some(id.clone()));
        assert!(inventory.equipped(ItemKind::Weapon).is_some());

        assert!(inventory.remove(ItemKind::Weapon, &id).is_some());
        assert!(inventory.equipped_weapon.is_none());
        assert!(inventory.remove(ItemKind::Weapon, &id).is_none());
    }

    #[test]
    fn test_clear_dangling_equipped() {
        let mut inventory = Inventory::default();
        inventory.equipped_armor = Some("ghost".to_string());
        inventory.clear_dangling_equipped();
        assert!(inventory.equipped_armor.is_none());
    }

    #[test]
    fn test_collection_book_counts_first_discovery_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut book = CollectionBook::default();
        let item = generate_item(ItemKind::Armor, Some(Rarity::Epic), &mut rng);
        assert!(book.record(&item));
        assert!(!book.record(&item));
        assert_eq!(book.total_armor_found, 1);
        assert_eq!(book.rarity_stats.get(Rarity::Epic), 1);
    }

    #[test]
    fn test_streak_multiplier_updates() {
        let mut streak = KnowledgeStreak::default();
        for _ in 0..5 {
            streak.record(true, 10);
        }
        assert_eq!(streak.current, 5);
        assert!((streak.multiplier - 1.1).abs() < 1e-9);
        assert_eq!(streak.last_correct_time, Some(10));
        streak.record(false, 20);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.best, 5);
        assert!((streak.multiplier - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_category_tracking() {
        let mut stats = Statistics::default();
        stats.record_answer("math", true);
        stats.record_answer("math", false);
        stats.record_answer("history", true);
        assert_eq!(stats.total_questions_answered, 3);
        assert_eq!(stats.correct_answers, 2);
        assert_eq!(stats.accuracy_by_category["history"].total, 1);
        let math = stats.accuracy_by_category["math"];
        assert_eq!(math.correct, 1);
        assert_eq!(math.total, 2);
    }

    #[test]
    fn test_cheat_toggle() {
        let mut cheats = Cheats::default();
        cheats.toggle(CheatKind::InfiniteGems);
        assert!(cheats.infinite_gems);
        cheats.toggle(CheatKind::InfiniteGems);
        assert!(!cheats.infinite_gems);
    }

    #[test]
    fn test_transient_fields_not_serialized() {
        let mut state = GameState::new(0);
        state.in_combat = true;
        state.combat_log.push("You encounter a Goblin Warrior in Zone 1!".to_string());
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("in_combat").is_none());
        assert!(json.get("combat_log").is_none());
        assert!(json.get("current_enemy").is_none());
    }
}
