//! Item system: types, name pools, generation, chests, and fusion.

pub mod chest;
pub mod forge;
pub mod generation;
pub mod names;
pub mod types;

pub use chest::*;
pub use forge::*;
pub use generation::*;
pub use types::*;
