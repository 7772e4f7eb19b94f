//! Checks achievement rules against the game state.

use super::types::{AchievementDef, AchievementId, AchievementMetric};
use crate::core::game_state::GameState;
use crate::items::types::Rarity;
use tracing::info;

/// Current value of a metric in the state.
pub fn metric_value(state: &GameState, metric: AchievementMetric) -> u64 {
    match metric {
        AchievementMetric::ZoneReached => state.zone as u64,
        AchievementMetric::ResearchLevel => state.research.level as u64,
        AchievementMetric::ItemsDiscovered => state.collection_book.total_discovered(),
        AchievementMetric::MythicalItemsFound => {
            state.collection_book.rarity_stats.get(Rarity::Mythical)
        }
        AchievementMetric::ChestsOpened => state.statistics.chests_opened,
        AchievementMetric::CorrectAnswers => state.statistics.correct_answers,
        AchievementMetric::BestStreak => state.knowledge_streak.best as u64,
        AchievementMetric::CoinsEarned => state.statistics.coins_earned,
    }
}

/// Rules that are satisfied but not yet unlocked. Does not mutate anything.
pub fn evaluate<'a>(state: &GameState, rules: &'a [AchievementDef]) -> Vec<&'a AchievementDef> {
    rules
        .iter()
        .filter(|rule| !state.achievements.is_unlocked(rule.id))
        .filter(|rule| metric_value(state, rule.metric) >= rule.target)
        .collect()
}

/// Refreshes progress, unlocks newly satisfied rules, and pays their rewards.
/// Rewards are paid only on the unlock transition, so repeated calls are safe.
pub fn apply_achievements(
    state: &mut GameState,
    rules: &[AchievementDef],
    now_ms: i64,
) -> Vec<AchievementId> {
    for rule in rules {
        let current = metric_value(state, rule.metric).min(rule.target);
        state
            .achievements
            .update_progress(rule.id, current, rule.target);
    }

    let ready: Vec<&AchievementDef> = evaluate(state, rules);
    let mut unlocked = Vec::with_capacity(ready.len());
    for rule in ready {
        if state.achievements.unlock(rule.id, now_ms) {
            state.coins += rule.reward.coins;
            state.gems += rule.reward.gems;
            info!(achievement = rule.name, "achievement unlocked");
            unlocked.push(rule.id);
        }
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::data::ALL_ACHIEVEMENTS;

    #[test]
    fn test_fresh_state_unlocks_nothing() {
        let state = GameState::new(0);
        assert!(evaluate(&state, ALL_ACHIEVEMENTS).is_empty());
    }

    #[test]
    fn test_zone_two_unlocks_first_victory_once() {
        let mut state = GameState::new(0);
        state.zone = 2;
        let unlocked = apply_achievements(&mut state, ALL_ACHIEVEMENTS, 7);
        assert_eq!(unlocked, vec![AchievementId::FirstVictory]);
        assert_eq!(state.coins, 150);

        let again = apply_achievements(&mut state, ALL_ACHIEVEMENTS, 8);
        assert!(again.is_empty());
        assert_eq!(state.coins, 150);
        assert_eq!(
            state.achievements.unlocked[&AchievementId::FirstVictory].unlocked_at,
            7
        );
    }

    #[test]
    fn test_progress_capped_at_target() {
        let mut state = GameState::new(0);
        state.zone = 40;
        apply_achievements(&mut state, ALL_ACHIEVEMENTS, 0);
        let progress = state
            .achievements
            .get_progress(AchievementId::ZoneExplorer)
            .unwrap();
        assert_eq!(progress.current, 10);
        let progress = state
            .achievements
            .get_progress(AchievementId::PremiumPioneer)
            .unwrap();
        assert_eq!(progress.current, 40);
        assert_eq!(progress.target, 50);
    }

    #[test]
    fn test_injected_rules_are_used() {
        let rules = [ALL_ACHIEVEMENTS[0].clone()];
        let mut state = GameState::new(0);
        state.zone = 30;
        let unlocked = apply_achievements(&mut state, &rules, 0);
        assert_eq!(unlocked, vec![AchievementId::FirstVictory]);
        assert!(!state.achievements.is_unlocked(AchievementId::ZoneConqueror));
    }
}
