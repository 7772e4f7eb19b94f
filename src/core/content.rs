//! Static content tables consumed by the reducer.

use crate::achievements::data::ALL_ACHIEVEMENTS;
use crate::achievements::types::AchievementDef;
use crate::character::power_skills::{default_power_skills, PowerSkill};
use crate::promo::{default_promo_codes, PromoCode};

/// Achievement rules, power skills, and promo codes. Swap any table to
/// change game content without touching the reducer.
#[derive(Debug, Clone)]
pub struct GameContent {
    pub achievements: Vec<AchievementDef>,
    pub power_skills: Vec<PowerSkill>,
    pub promo_codes: Vec<PromoCode>,
}

impl Default for GameContent {
    fn default() -> Self {
        Self {
            achievements: ALL_ACHIEVEMENTS.to_vec(),
            power_skills: default_power_skills(),
            promo_codes: default_promo_codes(),
        }
    }
}
