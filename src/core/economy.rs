//! Pure economy formulas: research curves, streak multipliers, AFK accrual,
//! and currency costs.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// A price in coins and gems. Either part may be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub coins: u64,
    pub gems: u64,
}

impl Cost {
    pub fn coins(coins: u64) -> Self {
        Self { coins, gems: 0 }
    }

    pub fn gems(gems: u64) -> Self {
        Self { coins: 0, gems }
    }

    pub fn new(coins: u64, gems: u64) -> Self {
        Self { coins, gems }
    }
}

/// Tier for a research level: one tier per ten levels.
pub fn research_tier(level: u32) -> u32 {
    level / LEVELS_PER_RESEARCH_TIER
}

/// Percentage bonus applied to atk, def, and hp.
pub fn research_bonus(level: u32, tier: u32) -> u32 {
    level * RESEARCH_BONUS_PER_LEVEL + tier * RESEARCH_BONUS_PER_TIER
}

/// Coin price of the next research level. Resets at every tier boundary.
pub fn research_cost(level: u32) -> u64 {
    RESEARCH_BASE_COST + (level % LEVELS_PER_RESEARCH_TIER) as u64 * RESEARCH_COST_PER_LEVEL_IN_TIER
}

/// Reward multiplier for a streak: +0.1 per five correct answers, capped at 2.0.
pub fn streak_multiplier(current: u32) -> f64 {
    let steps = (current / STREAK_STEP) as f64;
    (1.0 + steps * STREAK_BONUS_PER_STEP).min(STREAK_MAX_MULTIPLIER)
}

/// Gems accrued while away: whole elapsed seconds times efficiency per minute.
/// A clock that moved backwards yields nothing.
pub fn afk_gems(last_afk_time_ms: i64, efficiency: u64, now_ms: i64) -> u64 {
    let elapsed_ms = now_ms.saturating_sub(last_afk_time_ms).max(0) as u64;
    let elapsed_seconds = elapsed_ms / 1000;
    elapsed_seconds * efficiency / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_bonus() {
        assert_eq!(research_bonus(0, 0), 0);
        assert_eq!(research_bonus(10, 1), 65);
        assert_eq!(research_bonus(25, 2), 155);
    }

    #[test]
    fn test_research_cost_cycles_per_tier() {
        assert_eq!(research_cost(0), 150);
        assert_eq!(research_cost(1), 200);
        assert_eq!(research_cost(9), 600);
        assert_eq!(research_cost(10), 150);
        let ten_levels: u64 = (0..10).map(research_cost).sum();
        assert_eq!(ten_levels, 3750);
    }

    #[test]
    fn test_research_tier() {
        assert_eq!(research_tier(9), 0);
        assert_eq!(research_tier(10), 1);
        assert_eq!(research_tier(29), 2);
    }

    #[test]
    fn test_streak_multiplier_steps_and_cap() {
        assert_eq!(streak_multiplier(0), 1.0);
        assert_eq!(streak_multiplier(4), 1.0);
        assert!((streak_multiplier(5) - 1.1).abs() < 1e-9);
        assert!((streak_multiplier(49) - 1.9).abs() < 1e-9);
        assert_eq!(streak_multiplier(50), 2.0);
        assert_eq!(streak_multiplier(500), 2.0);
    }

    #[test]
    fn test_afk_gems() {
        assert_eq!(afk_gems(0, 2, 120_000), 4);
        assert_eq!(afk_gems(0, 2, 29_999), 0);
        assert_eq!(afk_gems(0, 2, 30_000), 1);
        assert_eq!(afk_gems(10_000, 2, 5_000), 0);
    }
}
