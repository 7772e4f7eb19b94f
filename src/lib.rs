//! Hugoland - knowledge-driven incremental RPG core
//!
//! Game state, the action reducer, content generators, economy rules,
//! achievements, and snapshot persistence. No UI lives here: a front end
//! holds a [`core::GameSession`] and dispatches [`core::Action`]s.

pub mod achievements;
pub mod character;
pub mod combat;
pub mod core;
pub mod expedition;
pub mod items;
pub mod persistence;
pub mod promo;
pub mod simulator;
