//! Core game state, rules, and the session that owns them.

#![allow(unused_imports)]

pub mod actions;
pub mod constants;
pub mod content;
pub mod economy;
pub mod error;
pub mod game_logic;
pub mod game_state;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod session;

pub use actions::{apply_action, Action, ActionContext, ActionOutcome, ActionReport};
pub use constants::*;
pub use content::GameContent;
pub use economy::Cost;
pub use error::{ActionError, ActionResult};
pub use game_logic::{ChestReward, ItemRef, ResearchUpgrade};
pub use game_state::*;
#[cfg(feature = "runtime")]
pub use runtime::{spawn_session, RuntimeConfig, RuntimeError, SessionHandle};
pub use session::{Clock, GameSession, ManualClock, SystemClock};
