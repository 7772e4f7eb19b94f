use crate::core::constants::{EXPEDITION_DEFAULT_QUESTIONS, EXPEDITION_LIVES, EXPEDITION_MAX_ZONE};
use crate::core::game_state::MultiplierKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpeditionModifierType {
    UpsideDown,
    LightOfDark,
    TwiceUponTime,
    BareHands,
    GlitchedScreen,
    Underwater,
    BadLuck,
}

impl ExpeditionModifierType {
    pub const ALL: [ExpeditionModifierType; 7] = [
        ExpeditionModifierType::UpsideDown,
        ExpeditionModifierType::LightOfDark,
        ExpeditionModifierType::TwiceUponTime,
        ExpeditionModifierType::BareHands,
        ExpeditionModifierType::GlitchedScreen,
        ExpeditionModifierType::Underwater,
        ExpeditionModifierType::BadLuck,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ExpeditionModifierType::UpsideDown => "upside_down",
            ExpeditionModifierType::LightOfDark => "light_of_dark",
            ExpeditionModifierType::TwiceUponTime => "twice_upon_time",
            ExpeditionModifierType::BareHands => "bare_hands",
            ExpeditionModifierType::GlitchedScreen => "glitched_screen",
            ExpeditionModifierType::Underwater => "underwater",
            ExpeditionModifierType::BadLuck => "bad_luck",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExpeditionModifierType::UpsideDown => "Upside Down",
            ExpeditionModifierType::LightOfDark => "Light of the Dark",
            ExpeditionModifierType::TwiceUponTime => "Twice Upon a Time",
            ExpeditionModifierType::BareHands => "Bare Hands",
            ExpeditionModifierType::GlitchedScreen => "Glitched Screen",
            ExpeditionModifierType::Underwater => "Underwater",
            ExpeditionModifierType::BadLuck => "Bad Luck",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExpeditionModifierType::UpsideDown => "All answers are displayed upside down",
            ExpeditionModifierType::LightOfDark => {
                "Screen gets darker as you progress (max 30% brightness)"
            }
            ExpeditionModifierType::TwiceUponTime => "Only 2 seconds to answer each question",
            ExpeditionModifierType::BareHands => "No weapons, armor, or research bonuses",
            ExpeditionModifierType::GlitchedScreen => {
                "Random bright/dark areas change every 3 seconds"
            }
            ExpeditionModifierType::Underwater => {
                "Must click breath button every 3 seconds or lose 30% HP/sec"
            }
            ExpeditionModifierType::BadLuck => "All chest rewards are limited to Common/Rare only",
        }
    }

    fn intensity(&self) -> Option<f64> {
        match self {
            ExpeditionModifierType::LightOfDark => Some(0.3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionModifier {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExpeditionModifierType,
    pub is_active: bool,
    #[serde(default)]
    pub intensity: Option<f64>,
}

/// Catalog entry for a modifier, switched on.
pub fn modifier(kind: ExpeditionModifierType) -> ExpeditionModifier {
    ExpeditionModifier {
        id: kind.id().to_string(),
        name: kind.name().to_string(),
        description: kind.description().to_string(),
        kind,
        is_active: true,
        intensity: kind.intensity(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpeditionRewardType {
    Coins,
    Gems,
    Multiplier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionReward {
    #[serde(rename = "type")]
    pub kind: ExpeditionRewardType,
    pub amount: f64,
    #[serde(default)]
    pub multiplier_type: Option<MultiplierKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionState {
    pub is_active: bool,
    pub current_zone: u32,
    pub max_zone: u32,
    pub lives: u32,
    pub modifiers: Vec<ExpeditionModifier>,
    pub questions_answered: u32,
    pub total_questions: u32,
    pub rewards: Vec<ExpeditionReward>,
}

impl Default for ExpeditionState {
    fn default() -> Self {
        Self {
            is_active: false,
            current_zone: 1,
            max_zone: EXPEDITION_MAX_ZONE,
            lives: EXPEDITION_LIVES,
            modifiers: Vec::new(),
            questions_answered: 0,
            total_questions: EXPEDITION_DEFAULT_QUESTIONS,
            rewards: Vec::new(),
        }
    }
}

impl ExpeditionState {
    /// True while an expedition runs with the given modifier switched on.
    pub fn modifier_active(&self, kind: ExpeditionModifierType) -> bool {
        self.is_active
            && self
                .modifiers
                .iter()
                .any(|modifier| modifier.kind == kind && modifier.is_active)
    }

    pub fn active_modifier_count(&self) -> usize {
        self.modifiers.iter().filter(|m| m.is_active).count()
    }
}
