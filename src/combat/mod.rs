//! Turn-based combat: enemy generation and attack resolution.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
