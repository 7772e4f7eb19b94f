use super::power_skills::PowerSkillEffectType;
use crate::core::economy::research_bonus;
use crate::core::game_state::GameState;
use crate::expedition::types::ExpeditionModifierType;
use crate::items::types::ItemKind;

/// Absorbs float noise from accumulated 0.1 multiplier steps before flooring.
const FLOOR_EPSILON: f64 = 1e-9;

fn floor_stat(value: f64) -> u32 {
    (value + FLOOR_EPSILON).floor().max(0.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub atk: u32,
    pub def: u32,
    pub max_hp: u32,
}

impl DerivedStats {
    /// Computes atk, def, and max hp from the state's bonus sources.
    ///
    /// Order: base + equipment, research percentage, purchased multiplier,
    /// flat power-skill bonus, then the game-mode modifier. While an
    /// expedition with `bare_hands` runs, equipment and research are ignored.
    pub fn calculate(state: &GameState) -> Self {
        let stats = &state.player_stats;
        let bare_hands = state
            .expedition
            .modifier_active(ExpeditionModifierType::BareHands);

        let (weapon, armor, bonus_percent) = if bare_hands {
            (0, 0, 0)
        } else {
            let weapon = state
                .inventory
                .equipped(ItemKind::Weapon)
                .map(|item| item.stat_bonus())
                .unwrap_or(0);
            let armor = state
                .inventory
                .equipped(ItemKind::Armor)
                .map(|item| item.stat_bonus())
                .unwrap_or(0);
            let bonus = research_bonus(state.research.level, state.research.tier);
            (weapon, armor, bonus)
        };

        let mut skill_flat = 0.0;
        let mut skill_hp = 1.0;
        for skill in state.power_skills.iter().filter(|skill| skill.is_active) {
            match skill.effect.kind {
                PowerSkillEffectType::Crown => skill_flat += skill.effect.value.unwrap_or(0.0),
                PowerSkillEffectType::HpBoost => skill_hp *= skill.effect.value.unwrap_or(1.0),
                _ => {}
            }
        }

        let (mode_atk, mode_def, mode_hp) = state.game_mode.current.stat_multipliers();
        let research_scaled =
            |base: u32| (base as u64 * (100 + bonus_percent as u64)) as f64 / 100.0;

        let atk = (research_scaled(stats.base_atk.saturating_add(weapon)) * state.multipliers.atk + skill_flat)
            * mode_atk;
        let def = (research_scaled(stats.base_def.saturating_add(armor)) * state.multipliers.def + skill_flat)
            * mode_def;
        let max_hp = research_scaled(stats.base_hp) * state.multipliers.hp * skill_hp * mode_hp;

        Self {
            atk: floor_stat(atk),
            def: floor_stat(def),
            max_hp: floor_stat(max_hp),
        }
    }
}

/// Writes freshly derived stats into the state and clamps hp to the new max.
pub fn recalculate_player_stats(state: &mut GameState) {
    let derived = DerivedStats::calculate(state);
    let stats = &mut state.player_stats;
    stats.atk = derived.atk;
    stats.def = derived.def;
    stats.max_hp = derived.max_hp;
    stats.hp = stats.hp.min(derived.max_hp);
}
