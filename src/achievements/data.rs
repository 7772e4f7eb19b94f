//! Static achievement definitions.

use super::types::{
    AchievementCategory, AchievementDef, AchievementId, AchievementMetric, AchievementReward,
};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMBAT
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstVictory,
        name: "First Victory",
        description: "Defeat your first enemy",
        category: AchievementCategory::Combat,
        icon: "⚔️",
        metric: AchievementMetric::ZoneReached,
        target: 2,
        reward: AchievementReward { coins: 50, gems: 0 },
    },
    AchievementDef {
        id: AchievementId::ZoneExplorer,
        name: "Zone Explorer",
        description: "Reach zone 10",
        category: AchievementCategory::Combat,
        icon: "🗺️",
        metric: AchievementMetric::ZoneReached,
        target: 10,
        reward: AchievementReward { coins: 500, gems: 25 },
    },
    AchievementDef {
        id: AchievementId::ZoneConqueror,
        name: "Zone Conqueror",
        description: "Reach zone 25",
        category: AchievementCategory::Combat,
        icon: "🏔️",
        metric: AchievementMetric::ZoneReached,
        target: 25,
        reward: AchievementReward { coins: 2000, gems: 100 },
    },
    AchievementDef {
        id: AchievementId::PremiumPioneer,
        name: "Premium Pioneer",
        description: "Reach zone 50 and unlock premium",
        category: AchievementCategory::Combat,
        icon: "👑",
        metric: AchievementMetric::ZoneReached,
        target: 50,
        reward: AchievementReward { coins: 5000, gems: 250 },
    },
    // ═══════════════════════════════════════════════════════════════
    // PROGRESSION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Researcher,
        name: "Researcher",
        description: "Reach research level 10",
        category: AchievementCategory::Progression,
        icon: "🔬",
        metric: AchievementMetric::ResearchLevel,
        target: 10,
        reward: AchievementReward { coins: 0, gems: 50 },
    },
    AchievementDef {
        id: AchievementId::MasterResearcher,
        name: "Master Researcher",
        description: "Reach research level 50",
        category: AchievementCategory::Progression,
        icon: "🧪",
        metric: AchievementMetric::ResearchLevel,
        target: 50,
        reward: AchievementReward { coins: 0, gems: 200 },
    },
    // ═══════════════════════════════════════════════════════════════
    // COLLECTION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Discover 10 different items",
        category: AchievementCategory::Collection,
        icon: "📚",
        metric: AchievementMetric::ItemsDiscovered,
        target: 10,
        reward: AchievementReward { coins: 300, gems: 0 },
    },
    AchievementDef {
        id: AchievementId::MythicalFind,
        name: "Beyond Legend",
        description: "Discover a mythical item",
        category: AchievementCategory::Collection,
        icon: "🌌",
        metric: AchievementMetric::MythicalItemsFound,
        target: 1,
        reward: AchievementReward { coins: 0, gems: 100 },
    },
    AchievementDef {
        id: AchievementId::ChestHunter,
        name: "Chest Hunter",
        description: "Open 10 chests",
        category: AchievementCategory::Collection,
        icon: "🎁",
        metric: AchievementMetric::ChestsOpened,
        target: 10,
        reward: AchievementReward { coins: 500, gems: 0 },
    },
    // ═══════════════════════════════════════════════════════════════
    // KNOWLEDGE
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Scholar,
        name: "Scholar",
        description: "Answer 100 questions correctly",
        category: AchievementCategory::Knowledge,
        icon: "🎓",
        metric: AchievementMetric::CorrectAnswers,
        target: 100,
        reward: AchievementReward { coins: 1000, gems: 50 },
    },
    AchievementDef {
        id: AchievementId::StreakMaster,
        name: "Streak Master",
        description: "Reach a knowledge streak of 10",
        category: AchievementCategory::Knowledge,
        icon: "🔥",
        metric: AchievementMetric::BestStreak,
        target: 10,
        reward: AchievementReward { coins: 0, gems: 50 },
    },
    // ═══════════════════════════════════════════════════════════════
    // WEALTH
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Tycoon,
        name: "Tycoon",
        description: "Earn 100,000 coins",
        category: AchievementCategory::Wealth,
        icon: "💰",
        metric: AchievementMetric::CoinsEarned,
        target: 100_000,
        reward: AchievementReward { coins: 0, gems: 500 },
    },
];

/// Get achievement definition by ID.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Get all achievements in a category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = ALL_ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALL_ACHIEVEMENTS.len());
    }

    #[test]
    fn test_every_category_has_entries() {
        for category in AchievementCategory::ALL {
            assert!(!get_achievements_by_category(category).is_empty());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let def = get_achievement_def(AchievementId::ZoneExplorer).unwrap();
        assert_eq!(def.target, 10);
    }
}
