//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Achievement categories for grouping in the achievements panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Combat,
    Progression,
    Collection,
    Knowledge,
    Wealth,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Combat,
        AchievementCategory::Progression,
        AchievementCategory::Collection,
        AchievementCategory::Knowledge,
        AchievementCategory::Wealth,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Combat => "Combat",
            AchievementCategory::Progression => "Progression",
            AchievementCategory::Collection => "Collection",
            AchievementCategory::Knowledge => "Knowledge",
            AchievementCategory::Wealth => "Wealth",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Zones
    FirstVictory,
    ZoneExplorer,
    ZoneConqueror,
    PremiumPioneer,

    // Research
    Researcher,
    MasterResearcher,

    // Collection
    Collector,
    MythicalFind,
    ChestHunter,

    // Knowledge
    Scholar,
    StreakMaster,

    // Wealth
    Tycoon,
}

/// State quantity an achievement rule compares against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementMetric {
    ZoneReached,
    ResearchLevel,
    ItemsDiscovered,
    MythicalItemsFound,
    ChestsOpened,
    CorrectAnswers,
    BestStreak,
    CoinsEarned,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementReward {
    pub coins: u64,
    pub gems: u64,
}

/// Static definition of an achievement: unlocked once `metric >= target`.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub icon: &'static str,
    pub metric: AchievementMetric,
    pub target: u64,
    pub reward: AchievementReward,
}

/// Progress toward a single achievement.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AchievementProgress {
    pub current: u64,
    pub target: u64,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnlockedAchievement {
    /// Milliseconds since the epoch.
    pub unlocked_at: i64,
}

/// Per-save achievement state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Achievements {
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
    pub progress: HashMap<AchievementId, AchievementProgress>,
}

impl Achievements {
    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId, now_ms: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(id, UnlockedAchievement { unlocked_at: now_ms });
        true
    }

    /// Update progress on a tracked achievement.
    pub fn update_progress(&mut self, id: AchievementId, current: u64, target: u64) {
        self.progress
            .insert(id, AchievementProgress { current, target });
    }

    pub fn get_progress(&self, id: AchievementId) -> Option<&AchievementProgress> {
        self.progress.get(&id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_is_idempotent() {
        let mut achievements = Achievements::default();
        assert!(achievements.unlock(AchievementId::Scholar, 42));
        assert!(!achievements.unlock(AchievementId::Scholar, 99));
        assert_eq!(achievements.unlocked[&AchievementId::Scholar].unlocked_at, 42);
        assert_eq!(achievements.unlocked_count(), 1);
    }

    #[test]
    fn test_achievements_serialize_with_string_keys() {
        let mut achievements = Achievements::default();
        achievements.unlock(AchievementId::FirstVictory, 1);
        achievements.update_progress(AchievementId::Tycoon, 10, 100_000);
        let json = serde_json::to_string(&achievements).unwrap();
        let restored: Achievements = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, achievements);
    }
}
