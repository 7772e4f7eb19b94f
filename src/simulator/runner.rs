//! Main simulation runner.
//!
//! Every simulated decision goes through `apply_action`, the same reducer the
//! session uses, so results match real gameplay behavior. Statistics are
//! tracked externally from action outcomes.

use super::config::SimConfig;
use super::report::SimReport;
use crate::combat::logic::AttackOutcome;
use crate::core::actions::{apply_action, Action, ActionContext, ActionOutcome, ActionReport};
use crate::core::constants::PASSIVE_MINING_TICK_SECONDS;
use crate::core::content::GameContent;
use crate::core::economy::research_cost;
use crate::core::error::ActionResult;
use crate::core::game_logic::ItemRef;
use crate::core::game_state::GameState;
use crate::items::chest::CHEST_COSTS;
use crate::items::types::ItemKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

/// Question categories the simulated player cycles through.
const CATEGORIES: [&str; 4] = ["math", "science", "history", "geography"];

/// Statistics for one simulated playthrough.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_zone: u32,
    pub questions_answered: u64,
    pub correct_answers: u64,
    pub victories: u64,
    pub defeats: u64,
    pub chests_opened: u64,
    pub research_level: u32,
    pub power_skills: usize,
    pub coins_earned: u64,
    pub gems_earned: u64,
    pub items_collected: u64,
    pub best_streak: u32,
    pub achievements_unlocked: usize,
    pub reached_target: bool,
    /// Questions answered while in each zone, indexed by zone
    pub questions_per_zone: Vec<u64>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let content = GameContent::default();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &content, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Zone {}, Questions {}, Victories {}, Defeats {}, Research {}",
                run_idx + 1,
                config.num_runs,
                run.final_zone,
                run.questions_answered,
                run.victories,
                run.defeats,
                run.research_level
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.target_zone)
}

fn step<R: Rng>(
    state: &mut GameState,
    action: Action,
    content: &GameContent,
    rng: &mut R,
    now_ms: i64,
) -> ActionResult<ActionReport> {
    let mut ctx = ActionContext {
        rng,
        now_ms,
        content,
    };
    apply_action(state, action, &mut ctx)
}

/// Plays one game from a fresh state until the target zone or the question
/// budget is reached.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, content: &GameContent, rng: &mut R) -> RunStats {
    let mut state = GameState::new(0);
    let mut stats = RunStats {
        questions_per_zone: vec![0; config.target_zone as usize + 1],
        ..Default::default()
    };
    let mining_interval_ms = PASSIVE_MINING_TICK_SECONDS as i64 * 1000;
    let mut next_mining_ms = mining_interval_ms;
    let mut now_ms: i64 = 0;
    let accuracy = config.accuracy.clamp(0.0, 1.0);

    while state.zone < config.target_zone && stats.questions_answered < config.max_questions_per_run {
        spend(&mut state, config, content, rng, now_ms);

        if !state.in_combat {
            if let Err(e) = step(&mut state, Action::StartCombat, content, rng, now_ms) {
                debug!(error = %e, "could not start combat");
                break;
            }
        }

        let zone = state.zone;
        let hit = rng.gen_bool(accuracy);
        let category = CATEGORIES[(stats.questions_answered % CATEGORIES.len() as u64) as usize];
        let attack = Action::Attack {
            hit,
            category: Some(category.to_string()),
        };
        match step(&mut state, attack, content, rng, now_ms) {
            Ok(report) => match report.outcome {
                ActionOutcome::Attack(AttackOutcome::EnemyDefeated { .. }) => stats.victories += 1,
                ActionOutcome::Attack(AttackOutcome::PlayerDefeated { .. }) => stats.defeats += 1,
                _ => {}
            },
            Err(e) => debug!(error = %e, "attack refused"),
        }
        stats.questions_answered += 1;
        if let Some(count) = stats.questions_per_zone.get_mut(zone as usize) {
            *count += 1;
        }

        now_ms += config.seconds_per_question as i64 * 1000;
        while now_ms >= next_mining_ms {
            let _ = step(&mut state, Action::TickPassiveMining, content, rng, now_ms);
            next_mining_ms += mining_interval_ms;
        }
    }

    stats.final_zone = state.zone;
    stats.correct_answers = state.statistics.correct_answers;
    stats.chests_opened = state.statistics.chests_opened;
    stats.research_level = state.research.level;
    stats.power_skills = state.power_skills.len();
    stats.coins_earned = state.statistics.coins_earned;
    stats.gems_earned = state.statistics.gems_earned;
    stats.items_collected = state.statistics.items_collected;
    stats.best_streak = state.knowledge_streak.best;
    stats.achievements_unlocked = state.achievements.unlocked_count();
    stats.reached_target = state.zone >= config.target_zone;
    stats
}

/// Greedy spending between fights: research first, then the priciest
/// affordable chest, then equip the strongest gear.
fn spend<R: Rng>(
    state: &mut GameState,
    config: &SimConfig,
    content: &GameContent,
    rng: &mut R,
    now_ms: i64,
) {
    if config.buy_research {
        while state.coins >= research_cost(state.research.level) {
            if step(state, Action::UpgradeResearch, content, rng, now_ms).is_err() {
                break;
            }
        }
    }

    if config.open_chests && !state.in_combat {
        let affordable = CHEST_COSTS.iter().rev().copied().find(|cost| *cost <= state.coins);
        if let Some(cost) = affordable {
            if state.inventory.is_full() {
                sell_weakest(state, content, rng, now_ms);
            }
            if let Err(e) = step(state, Action::OpenChest { cost }, content, rng, now_ms) {
                debug!(error = %e, cost, "chest not opened");
            }
        }
    }

    equip_best(state, content, rng, now_ms);
}

fn equip_best<R: Rng>(state: &mut GameState, content: &GameContent, rng: &mut R, now_ms: i64) {
    for kind in ItemKind::ALL {
        let best = state
            .inventory
            .items(kind)
            .iter()
            .max_by_key(|item| item.stat_bonus())
            .map(|item| item.id.clone());
        if let Some(id) = best {
            if !state.inventory.is_equipped(kind, &id) {
                let _ = step(state, Action::EquipItem(ItemRef::new(kind, id)), content, rng, now_ms);
            }
        }
    }
}

fn sell_weakest<R: Rng>(state: &mut GameState, content: &GameContent, rng: &mut R, now_ms: i64) {
    let weakest = ItemKind::ALL
        .iter()
        .flat_map(|&kind| {
            let inventory = &state.inventory;
            inventory
                .items(kind)
                .iter()
                .filter(move |item| !inventory.is_equipped(kind, &item.id))
                .map(move |item| (item.stat_bonus(), ItemRef::new(kind, item.id.clone())))
        })
        .min_by_key(|(bonus, _)| *bonus)
        .map(|(_, item)| item);

    if let Some(item) = weakest {
        let _ = step(state, Action::SellItem(item), content, rng, now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_single_run_makes_progress() {
        let config = SimConfig {
            target_zone: 5,
            max_questions_per_run: 2_000,
            accuracy: 1.0,
            ..Default::default()
        };
        let stats = simulate_single_run(&config, &GameContent::default(), &mut create_test_rng());
        assert!(stats.reached_target);
        assert_eq!(stats.final_zone, 5);
        assert_eq!(stats.defeats, 0);
        assert_eq!(stats.victories, 4);
        assert_eq!(stats.correct_answers, stats.questions_answered);
    }

    #[test]
    fn test_zero_accuracy_never_advances() {
        let config = SimConfig {
            target_zone: 3,
            max_questions_per_run: 200,
            accuracy: 0.0,
            ..SimConfig::combat_only(1)
        };
        let stats = simulate_single_run(&config, &GameContent::default(), &mut create_test_rng());
        assert!(!stats.reached_target);
        assert_eq!(stats.final_zone, 1);
        assert_eq!(stats.questions_answered, 200);
        assert!(stats.defeats > 0);
        assert_eq!(stats.research_level, 0);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 3,
            seed: Some(7),
            target_zone: 6,
            max_questions_per_run: 1_000,
            verbosity: 0,
            ..Default::default()
        };
        let first = run_simulation(&config);
        let second = run_simulation(&config);
        assert_eq!(first.num_runs, 3);
        assert_eq!(first.avg_final_zone, second.avg_final_zone);
        assert_eq!(first.avg_questions, second.avg_questions);
    }
}
