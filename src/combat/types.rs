use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::game_state::GameMode;

const ENEMY_NAMES: &[&str] = &[
    "Goblin Warrior",
    "Shadow Wolf",
    "Stone Golem",
    "Fire Imp",
    "Ice Troll",
    "Dark Mage",
    "Lightning Drake",
    "Void Wraith",
    "Crystal Beast",
    "Ancient Dragon",
    "Chaos Lord",
    "Nightmare King",
    "Abyssal Terror",
    "Cosmic Horror",
    "Reality Bender",
    "Dimension Lord",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub zone: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Deterministic enemy for a zone. Names advance with the zone and stick to
/// the last entry once the pool runs out. HP doubles from zone 10, attack and
/// defense double from zone 30.
pub fn generate_enemy(zone: u32) -> Enemy {
    let zone = zone.max(1);
    let index = ((zone - 1) as usize).min(ENEMY_NAMES.len() - 1);

    let mut hp = ENEMY_BASE_HP + ENEMY_HP_PER_ZONE * zone;
    let mut atk = ENEMY_BASE_ATK + ENEMY_ATK_PER_ZONE * zone;
    let mut def = ENEMY_DEF_PER_ZONE * zone;
    if zone >= ENEMY_HP_DOUBLING_ZONE {
        hp *= 2;
    }
    if zone >= ENEMY_ATK_DEF_DOUBLING_ZONE {
        atk *= 2;
        def *= 2;
    }

    Enemy {
        name: ENEMY_NAMES[index].to_string(),
        hp,
        max_hp: hp,
        atk,
        def,
        zone,
    }
}

/// Zone enemy with the game mode's enemy scaling applied.
pub fn generate_enemy_for_mode(zone: u32, mode: GameMode) -> Enemy {
    let mut enemy = generate_enemy(zone);
    let (hp_mult, atk_mult, def_mult) = mode.enemy_multipliers();
    enemy.max_hp *= hp_mult;
    enemy.hp = enemy.max_hp;
    enemy.atk *= atk_mult;
    enemy.def *= def_mult;
    enemy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_one_enemy() {
        let enemy = generate_enemy(1);
        assert_eq!(enemy.name, "Goblin Warrior");
        assert_eq!(enemy.hp, 215);
        assert_eq!(enemy.max_hp, 215);
        assert_eq!(enemy.atk, 28);
        assert_eq!(enemy.def, 2);
    }

    #[test]
    fn test_hp_doubles_at_zone_ten() {
        let enemy = generate_enemy(10);
        assert_eq!(enemy.name, "Ancient Dragon");
        assert_eq!(enemy.hp, (200 + 150) * 2);
        assert_eq!(enemy.atk, 100);
        assert_eq!(enemy.def, 20);
    }

    #[test]
    fn test_attack_and_defense_double_at_zone_thirty() {
        let enemy = generate_enemy(30);
        assert_eq!(enemy.name, "Dimension Lord");
        assert_eq!(enemy.atk, (20 + 240) * 2);
        assert_eq!(enemy.def, 120);
    }

    #[test]
    fn test_crazy_mode_scaling() {
        let enemy = generate_enemy_for_mode(1, GameMode::Crazy);
        assert_eq!(enemy.max_hp, 645);
        assert_eq!(enemy.hp, 645);
        assert_eq!(enemy.atk, 84);
        assert_eq!(enemy.def, 4);

        let normal = generate_enemy_for_mode(1, GameMode::Normal);
        assert_eq!(normal, generate_enemy(1));
    }

    #[test]
    fn test_take_damage_saturates() {
        let mut enemy = generate_enemy(1);
        enemy.take_damage(10_000);
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.is_alive());
    }
}
