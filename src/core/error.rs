//! Reducer error type.

use crate::items::types::ItemKind;
use thiserror::Error;

/// Why an action was refused. A refused action leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("insufficient coins: required {required}, available {available}")]
    InsufficientCoins { required: u64, available: u64 },

    #[error("insufficient gems: required {required}, available {available}")]
    InsufficientGems { required: u64, available: u64 },

    #[error("{kind:?} {id} not found in inventory")]
    ItemNotFound { kind: ItemKind, id: String },

    #[error("cannot merge a {first:?} with a {second:?}")]
    CategoryMismatch { first: ItemKind, second: ItemKind },

    #[error("cannot merge item {id} with itself")]
    SameItem { id: String },

    #[error("inventory is full ({capacity} items)")]
    InventoryFull { capacity: usize },

    #[error("item {id} is equipped")]
    ItemEquipped { id: String },

    #[error("not in combat")]
    NotInCombat,

    #[error("already in combat")]
    AlreadyInCombat,

    #[error("unknown promo code: {0}")]
    UnknownPromoCode(String),

    #[error("promo code already used: {0}")]
    PromoCodeAlreadyUsed(String),

    #[error("no expedition in progress")]
    ExpeditionInactive,
}

pub type ActionResult<T> = std::result::Result<T, ActionError>;
