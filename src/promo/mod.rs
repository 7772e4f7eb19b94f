//! Promo code catalog and one-shot redemption.

pub mod data;

pub use data::default_promo_codes;

use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::GameState;
use crate::items::types::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromoRewards {
    #[serde(default)]
    pub coins: u64,
    #[serde(default)]
    pub gems: u64,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub name: String,
    pub description: String,
    pub rewards: PromoRewards,
}

/// Codes redeemed so far. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromoCodeState {
    pub used_codes: Vec<String>,
}

impl PromoCodeState {
    pub fn is_used(&self, code: &str) -> bool {
        self.used_codes.iter().any(|used| used == code)
    }
}

/// Codes are matched case-insensitively, ignoring surrounding whitespace.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoRedemption {
    pub code: String,
    pub coins: u64,
    pub gems: u64,
    pub items: usize,
}

/// Grants a catalog code's rewards once. Items bypass the inventory capacity.
pub fn redeem_promo_code(
    state: &mut GameState,
    catalog: &[PromoCode],
    code: &str,
) -> ActionResult<PromoRedemption> {
    let code = normalize_code(code);
    if state.promo_codes.is_used(&code) {
        return Err(ActionError::PromoCodeAlreadyUsed(code));
    }
    let promo = catalog
        .iter()
        .find(|promo| promo.code == code)
        .ok_or_else(|| ActionError::UnknownPromoCode(code.clone()))?;

    let rewards = &promo.rewards;
    state.coins += rewards.coins;
    state.gems += rewards.gems;
    for item in &rewards.items {
        state.inventory.add(item.clone());
    }
    state.promo_codes.used_codes.push(code.clone());

    Ok(PromoRedemption {
        code,
        coins: rewards.coins,
        gems: rewards.gems,
        items: rewards.items.len(),
    })
}
