use super::types::{
    modifier, ExpeditionModifier, ExpeditionModifierType, ExpeditionReward, ExpeditionRewardType,
    ExpeditionState,
};
use crate::core::constants::*;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::{GameState, MultiplierKind};
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum ExpeditionProgress {
    Started { total_questions: u32 },
    Advanced { questions_answered: u32, total_questions: u32 },
    LifeLost { lives: u32 },
    Completed { rewards: Vec<ExpeditionReward> },
    Failed { questions_answered: u32 },
    Ended,
}

/// Begins a fresh expedition with the chosen modifiers. Any run in progress
/// is discarded.
pub fn start_expedition(
    state: &mut GameState,
    kinds: &[ExpeditionModifierType],
    rng: &mut impl Rng,
) -> ExpeditionProgress {
    let mut modifiers: Vec<ExpeditionModifier> = Vec::new();
    for &kind in kinds {
        if modifiers.iter().all(|m| m.kind != kind) {
            modifiers.push(modifier(kind));
        }
    }
    let total_questions = rng.gen_range(EXPEDITION_MIN_QUESTIONS..=EXPEDITION_MAX_QUESTIONS);

    state.expedition = ExpeditionState {
        is_active: true,
        modifiers,
        total_questions,
        ..ExpeditionState::default()
    };
    debug!(total_questions, "expedition started");
    ExpeditionProgress::Started { total_questions }
}

/// Abandons the expedition, forfeiting rewards.
pub fn end_expedition(state: &mut GameState) -> ExpeditionProgress {
    state.expedition = ExpeditionState::default();
    ExpeditionProgress::Ended
}

/// Rewards for clearing an expedition. Each active modifier adds 100% to the
/// base coin and gem payout; three or more also grant a coin multiplier step.
pub fn completion_rewards(total_questions: u32, modifier_count: usize) -> Vec<ExpeditionReward> {
    let scale = 1 + modifier_count as u64;
    let mut rewards = vec![
        ExpeditionReward {
            kind: ExpeditionRewardType::Coins,
            amount: (total_questions as u64 * EXPEDITION_COINS_PER_QUESTION * scale) as f64,
            multiplier_type: None,
        },
        ExpeditionReward {
            kind: ExpeditionRewardType::Gems,
            amount: (total_questions as u64 * EXPEDITION_GEMS_PER_QUESTION * scale) as f64,
            multiplier_type: None,
        },
    ];
    if modifier_count >= EXPEDITION_MULTIPLIER_MODIFIER_COUNT {
        rewards.push(ExpeditionReward {
            kind: ExpeditionRewardType::Multiplier,
            amount: MULTIPLIER_PURCHASE_STEP,
            multiplier_type: Some(MultiplierKind::Coins),
        });
    }
    rewards
}

fn apply_reward(state: &mut GameState, reward: &ExpeditionReward) {
    match reward.kind {
        ExpeditionRewardType::Coins => state.earn_coins(reward.amount as u64),
        ExpeditionRewardType::Gems => state.earn_gems(reward.amount as u64),
        ExpeditionRewardType::Multiplier => {
            if let Some(kind) = reward.multiplier_type {
                state.multipliers.add(kind, reward.amount);
            }
        }
    }
}

/// Records an answer inside the expedition. Clearing the last question pays
/// out and ends the run; losing the last life ends it with nothing.
pub fn answer_expedition_question(
    state: &mut GameState,
    correct: bool,
) -> ActionResult<ExpeditionProgress> {
    if !state.expedition.is_active {
        return Err(ActionError::ExpeditionInactive);
    }

    let expedition = &mut state.expedition;
    if !correct {
        expedition.lives = expedition.lives.saturating_sub(1);
        if expedition.lives > 0 {
            return Ok(ExpeditionProgress::LifeLost {
                lives: expedition.lives,
            });
        }
        let questions_answered = expedition.questions_answered;
        state.expedition = ExpeditionState::default();
        debug!(questions_answered, "expedition failed");
        return Ok(ExpeditionProgress::Failed { questions_answered });
    }

    expedition.questions_answered += 1;
    expedition.current_zone = (1 + expedition.questions_answered).min(expedition.max_zone);
    if expedition.questions_answered < expedition.total_questions {
        return Ok(ExpeditionProgress::Advanced {
            questions_answered: expedition.questions_answered,
            total_questions: expedition.total_questions,
        });
    }

    let rewards = completion_rewards(expedition.total_questions, expedition.active_modifier_count());
    for reward in &rewards {
        apply_reward(state, reward);
    }
    state.expedition = ExpeditionState::default();
    debug!(rewards = rewards.len(), "expedition completed");
    Ok(ExpeditionProgress::Completed { rewards })
}
