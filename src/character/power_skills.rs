//! Power skills granted by research tiers.

use crate::items::Rarity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerSkillEffectType {
    Heal,
    Vampire,
    Poison,
    Guardian,
    Crown,
    HpBoost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSkillEffect {
    #[serde(rename = "type")]
    pub kind: PowerSkillEffectType,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: u32,
    pub rarity: Rarity,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub effect: PowerSkillEffect,
}

fn default_active() -> bool {
    true
}

#[allow(clippy::too_many_arguments)]
fn skill(
    id: &str,
    name: &str,
    description: &str,
    tier: u32,
    rarity: Rarity,
    kind: PowerSkillEffectType,
    value: Option<f64>,
    duration: Option<u32>,
) -> PowerSkill {
    PowerSkill {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tier,
        rarity,
        is_active: true,
        effect: PowerSkillEffect {
            kind,
            value,
            duration,
        },
    }
}

/// The default skill table, one skill per tier starting at tier 1.
pub fn default_power_skills() -> Vec<PowerSkill> {
    vec![
        skill(
            "healing_touch",
            "Healing Touch",
            "Restore 10% HP every 3 rounds",
            1,
            Rarity::Common,
            PowerSkillEffectType::Heal,
            Some(0.1),
            Some(3),
        ),
        skill(
            "life_steal",
            "Life Steal",
            "Heal for 20% of damage dealt",
            2,
            Rarity::Rare,
            PowerSkillEffectType::Vampire,
            Some(0.2),
            None,
        ),
        skill(
            "poison_dart_frog",
            "Poison Dart Frog",
            "Deals 5% of ATK to enemy every round",
            3,
            Rarity::Epic,
            PowerSkillEffectType::Poison,
            Some(0.05),
            None,
        ),
        skill(
            "guardian_angel",
            "Guardian Angel",
            "All damage dealt to player is reflected back to enemy every 5 rounds",
            4,
            Rarity::Legendary,
            PowerSkillEffectType::Guardian,
            None,
            Some(5),
        ),
        skill(
            "royal_crown",
            "Royal Crown",
            "All stats +50%",
            5,
            Rarity::Mythical,
            PowerSkillEffectType::Crown,
            Some(50.0),
            None,
        ),
    ]
}

/// Looks up the skill for a tier in the given table.
pub fn skill_for_tier(table: &[PowerSkill], tier: u32) -> Option<&PowerSkill> {
    table.iter().find(|skill| skill.tier == tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_one_skill_per_tier() {
        let table = default_power_skills();
        for tier in 1..=5 {
            assert!(skill_for_tier(&table, tier).is_some(), "tier {tier}");
        }
        assert!(skill_for_tier(&table, 0).is_none());
        assert!(skill_for_tier(&table, 6).is_none());
    }

    #[test]
    fn test_tier_two_is_life_steal() {
        let table = default_power_skills();
        let skill = skill_for_tier(&table, 2).unwrap();
        assert_eq!(skill.id, "life_steal");
        assert_eq!(skill.effect.kind, PowerSkillEffectType::Vampire);
    }

    #[test]
    fn test_effect_type_serializes_snake_case() {
        let json = serde_json::to_string(&PowerSkillEffectType::HpBoost).unwrap();
        assert_eq!(json, "\"hp_boost\"");
    }
}
