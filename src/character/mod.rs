//! Player derived stats and research power skills.

#![allow(unused_imports)]

pub mod derived_stats;
pub mod power_skills;

pub use derived_stats::*;
pub use power_skills::*;
