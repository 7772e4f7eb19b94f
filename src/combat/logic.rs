use super::types::{generate_enemy_for_mode, Enemy};
use crate::core::constants::*;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::items::types::ItemKind;
use rand::Rng;
use tracing::debug;

/// Result of a single answered question in combat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit {
        damage: u32,
        enemy_hp: u32,
    },
    EnemyDefeated {
        damage: u32,
        coins: u64,
        gems: u64,
        new_zone: u32,
    },
    Missed {
        damage: u32,
        player_hp: u32,
    },
    PlayerDefeated {
        damage: u32,
    },
}

/// Opens a combat against the current zone's enemy with the player at full hp.
pub fn start_combat(state: &mut GameState) -> ActionResult<Enemy> {
    if state.in_combat {
        return Err(ActionError::AlreadyInCombat);
    }

    let enemy = generate_enemy_for_mode(state.zone, state.game_mode.current);
    state.player_stats.hp = state.player_stats.max_hp;
    state.combat_log = vec![format!(
        "You encounter a {} in Zone {}!",
        enemy.name, state.zone
    )];
    state.current_enemy = Some(enemy.clone());
    state.in_combat = true;
    debug!(zone = state.zone, enemy = %enemy.name, "combat started");
    Ok(enemy)
}

/// Resolves an answer: a correct one strikes the enemy, a wrong one lets the
/// enemy strike back. Both damage values floor at 1.
pub fn attack(
    state: &mut GameState,
    hit: bool,
    category: Option<&str>,
    now_ms: i64,
    rng: &mut impl Rng,
) -> ActionResult<AttackOutcome> {
    let enemy = match (&state.current_enemy, state.in_combat) {
        (Some(enemy), true) => enemy.clone(),
        _ => return Err(ActionError::NotInCombat),
    };

    if let Some(category) = category {
        state.statistics.record_answer(category, hit);
    }
    state.knowledge_streak.record(hit, now_ms);

    let outcome = if hit {
        resolve_hit(state, enemy, rng)
    } else {
        resolve_miss(state, enemy)
    };
    Ok(outcome)
}

fn resolve_hit(state: &mut GameState, mut enemy: Enemy, rng: &mut impl Rng) -> AttackOutcome {
    let damage = state.player_stats.atk.saturating_sub(enemy.def).max(1);
    for kind in ItemKind::ALL {
        if let Some(item) = state.inventory.equipped_mut(kind) {
            item.wear();
        }
    }

    enemy.take_damage(damage);
    state
        .combat_log
        .push(format!("You deal {} damage to the {}!", damage, enemy.name));

    if enemy.is_alive() {
        let enemy_hp = enemy.hp;
        state.current_enemy = Some(enemy);
        return AttackOutcome::Hit { damage, enemy_hp };
    }

    state
        .combat_log
        .push(format!("You defeated the {}!", enemy.name));

    let (mode_coins, mode_gems) = state.game_mode.current.reward_multipliers();
    let streak = state.knowledge_streak.multiplier;
    let coin_multiplier = state.multipliers.coins * mode_coins * streak;
    let gem_multiplier = state.multipliers.gems * mode_gems * streak;

    let base_coins = state.zone as u64 * VICTORY_COINS_PER_ZONE + rng.gen_range(0..VICTORY_COIN_JITTER);
    let base_gems = rng.gen_range(VICTORY_GEMS_MIN..=VICTORY_GEMS_MAX);
    let coins = (base_coins as f64 * coin_multiplier).floor() as u64;
    let gems = (base_gems as f64 * gem_multiplier).floor() as u64;

    state.earn_coins(coins);
    state.earn_gems(gems);
    state
        .combat_log
        .push(format!("You earned {} coins and {} gems!", coins, gems));

    state.zone += 1;
    state.statistics.zones_reached = state.statistics.zones_reached.max(state.zone as u64);
    state.is_premium = state.is_premium || state.zone >= PREMIUM_ZONE;
    state.current_enemy = None;
    state.in_combat = false;
    debug!(new_zone = state.zone, coins, gems, "enemy defeated");

    AttackOutcome::EnemyDefeated {
        damage,
        coins,
        gems,
        new_zone: state.zone,
    }
}

fn resolve_miss(state: &mut GameState, enemy: Enemy) -> AttackOutcome {
    let damage = enemy.atk.saturating_sub(state.player_stats.def).max(1);
    state.player_stats.hp = state.player_stats.hp.saturating_sub(damage);
    state.combat_log.push(format!(
        "You missed! The {} deals {} damage to you!",
        enemy.name, damage
    ));

    if state.player_stats.hp > 0 {
        return AttackOutcome::Missed {
            damage,
            player_hp: state.player_stats.hp,
        };
    }

    state
        .combat_log
        .push(format!("You were defeated by the {}...", enemy.name));
    state.current_enemy = None;
    state.in_combat = false;
    debug!(zone = state.zone, "player defeated");
    AttackOutcome::PlayerDefeated { damage }
}
