//! Expedition mode: a modifier-laden question gauntlet with a single life.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
