//! Single owner of the game state.
//!
//! Every transition goes through [`GameSession::apply`] or
//! [`GameSession::dispatch`]; callers only ever see cloned snapshots.

use super::actions::{apply_action, Action, ActionContext, ActionReport};
use super::constants::STORAGE_KEY;
use super::content::GameContent;
use super::error::ActionResult;
use super::game_state::GameState;
use crate::persistence::snapshot::{encode_snapshot, load_state, save_state, PersistenceError};
use crate::persistence::store::KeyValueStore;
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Source of wall-clock milliseconds.
pub trait Clock: Send {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: i64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

pub struct GameSession<R: Rng = ChaCha8Rng> {
    state: GameState,
    content: GameContent,
    store: Arc<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    rng: R,
    key: String,
}

impl GameSession<ChaCha8Rng> {
    /// Loads (or starts) a game from `store` with default content, the system
    /// clock, and an entropy-seeded rng.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::load_with(
            store,
            GameContent::default(),
            Box::new(SystemClock),
            ChaCha8Rng::from_entropy(),
        )
    }
}

impl<R: Rng> GameSession<R> {
    pub fn load_with(
        store: Arc<dyn KeyValueStore>,
        content: GameContent,
        clock: Box<dyn Clock>,
        rng: R,
    ) -> Self {
        let key = STORAGE_KEY.to_string();
        let state = load_state(store.as_ref(), &key, clock.now_ms());
        Self {
            state,
            content,
            store,
            clock,
            rng,
            key,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy for readers outside the session.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn content(&self) -> &GameContent {
        &self.content
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Applies one action without persisting.
    pub fn apply(&mut self, action: Action) -> ActionResult<ActionReport> {
        let now_ms = self.clock.now_ms();
        let mut ctx = ActionContext {
            rng: &mut self.rng,
            now_ms,
            content: &self.content,
        };
        apply_action(&mut self.state, action, &mut ctx)
    }

    /// Applies one action and saves on success. A failed save is logged and
    /// does not undo the transition.
    pub fn dispatch(&mut self, action: Action) -> ActionResult<ActionReport> {
        let report = self.apply(action)?;
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save game state");
        }
        Ok(report)
    }

    pub fn encode_snapshot(&self) -> Result<String, PersistenceError> {
        encode_snapshot(&self.state)
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        save_state(self.store.as_ref(), &self.key, &self.state)
    }

    /// Replaces the state with a fresh game, leaving the store untouched.
    pub fn reset_state(&mut self) {
        self.state = GameState::new(self.clock.now_ms());
        info!("game reset");
    }

    /// Replaces the state with a fresh game and removes the stored snapshot.
    pub fn reset(&mut self) {
        self.reset_state();
        if let Err(e) = self.store.remove(&self.key) {
            warn!(error = %e, "failed to remove saved game on reset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ActionError;
    use crate::persistence::store::MemoryStore;

    fn create_test_session(store: Arc<MemoryStore>, clock: ManualClock) -> GameSession {
        GameSession::load_with(
            store,
            GameContent::default(),
            Box::new(clock),
            ChaCha8Rng::seed_from_u64(12345),
        )
    }

    #[test]
    fn test_dispatch_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut session = create_test_session(Arc::clone(&store), ManualClock::new(0));
        session.dispatch(Action::TickPlaytime).unwrap();

        let reloaded = create_test_session(store, ManualClock::new(0));
        assert_eq!(reloaded.state().statistics.total_play_time, 1);
    }

    #[test]
    fn test_refused_dispatch_does_not_save() {
        let store = Arc::new(MemoryStore::new());
        let mut session = create_test_session(Arc::clone(&store), ManualClock::new(0));
        let result = session.dispatch(Action::UpgradeResearch);
        assert!(matches!(result, Err(ActionError::InsufficientCoins { .. })));
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_afk_claim_uses_clock() {
        let store = Arc::new(MemoryStore::new());
        let clock = ManualClock::new(1_000);
        let mut session = create_test_session(store, clock.clone());
        clock.advance(120_000);
        session.apply(Action::ClaimAfkGems).unwrap();
        assert_eq!(session.state().gems, 4);
        assert_eq!(session.state().mining.last_afk_time, 121_000);
    }

    #[test]
    fn test_reset_clears_store() {
        let store = Arc::new(MemoryStore::new());
        let mut session = create_test_session(Arc::clone(&store), ManualClock::new(0));
        session.dispatch(Action::TickPlaytime).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_some());

        session.reset();
        assert_eq!(session.state().statistics.total_play_time, 0);
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    }
}
