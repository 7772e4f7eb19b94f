//! Achievement system module.
//!
//! Rules are data: each definition names a state metric and a target. The
//! evaluator reports satisfied rules and the reducer hook unlocks them.

pub mod data;
pub mod evaluator;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use evaluator::{apply_achievements, evaluate, metric_value};
pub use types::{AchievementCategory, AchievementDef, AchievementId, AchievementMetric, Achievements};
