//! Tokio actor that owns a [`GameSession`].
//!
//! User commands arrive on one mpsc queue and the playtime and mining timers
//! fire inside the same `select!` loop, so transitions never interleave.
//! Snapshots are written by a separate writer task in the order they were
//! produced; a reset's removal is queued behind any pending saves.

use super::actions::{Action, ActionReport};
use super::constants::{PASSIVE_MINING_TICK_SECONDS, PLAYTIME_TICK_SECONDS};
use super::error::ActionResult;
use super::game_state::GameState;
use super::session::GameSession;
use crate::persistence::snapshot::PersistenceError;
use crate::persistence::store::KeyValueStore;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub playtime_tick: Duration,
    pub mining_tick: Duration,
    pub queue_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            playtime_tick: Duration::from_secs(PLAYTIME_TICK_SECONDS),
            mining_tick: Duration::from_secs(PASSIVE_MINING_TICK_SECONDS),
            queue_capacity: 64,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("game session has stopped")]
    Closed,
}

enum Command {
    Dispatch {
        action: Action,
        reply: oneshot::Sender<ActionResult<ActionReport>>,
    },
    Snapshot {
        reply: oneshot::Sender<GameState>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

enum StoreOp {
    Save(String),
    Remove,
}

/// Cloneable front door to a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| RuntimeError::Closed)?;
        rx.await.map_err(|_| RuntimeError::Closed)
    }

    pub async fn dispatch(&self, action: Action) -> Result<ActionResult<ActionReport>, RuntimeError> {
        self.request(|reply| Command::Dispatch { action, reply }).await
    }

    pub async fn snapshot(&self) -> Result<GameState, RuntimeError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    pub async fn reset(&self) -> Result<(), RuntimeError> {
        self.request(|reply| Command::Reset { reply }).await
    }

    /// Stops the actor after flushing pending saves.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.request(|reply| Command::Shutdown { reply }).await
    }
}

/// Starts the actor. `loader` runs on the blocking pool before any command
/// is accepted.
pub fn spawn_session<R, F>(loader: F, config: RuntimeConfig) -> (SessionHandle, JoinHandle<()>)
where
    R: Rng + Send + 'static,
    F: FnOnce() -> GameSession<R> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
    let task = tokio::spawn(run_session(loader, config, rx));
    (SessionHandle { tx }, task)
}

async fn run_session<R, F>(loader: F, config: RuntimeConfig, mut rx: mpsc::Receiver<Command>)
where
    R: Rng + Send + 'static,
    F: FnOnce() -> GameSession<R> + Send + 'static,
{
    let mut session = match tokio::task::spawn_blocking(loader).await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "session loader failed");
            return;
        }
    };

    let (store_tx, store_rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(run_writer(session.store(), session.key().to_string(), store_rx));

    let start = Instant::now();
    let mut playtime = interval_at(start + config.playtime_tick, config.playtime_tick);
    let mut mining = interval_at(start + config.mining_tick, config.mining_tick);
    playtime.set_missed_tick_behavior(MissedTickBehavior::Delay);
    mining.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut shutdown_reply = None;
    loop {
        tokio::select! {
            command = rx.recv() => match command {
                Some(Command::Dispatch { action, reply }) => {
                    let result = session.apply(action);
                    if result.is_ok() {
                        queue_save(&session, &store_tx);
                    }
                    let _ = reply.send(result);
                }
                Some(Command::Snapshot { reply }) => {
                    let _ = reply.send(session.snapshot());
                }
                Some(Command::Reset { reply }) => {
                    session.reset_state();
                    let _ = store_tx.send(StoreOp::Remove);
                    let _ = reply.send(());
                }
                Some(Command::Shutdown { reply }) => {
                    shutdown_reply = Some(reply);
                    break;
                }
                None => break,
            },
            _ = playtime.tick() => apply_tick(&mut session, Action::TickPlaytime, &store_tx),
            _ = mining.tick() => apply_tick(&mut session, Action::TickPassiveMining, &store_tx),
        }
    }

    drop(store_tx);
    if let Err(e) = writer.await {
        warn!(error = %e, "snapshot writer stopped abnormally");
    }
    debug!("game session stopped");
    if let Some(reply) = shutdown_reply {
        let _ = reply.send(());
    }
}

fn apply_tick<R: Rng>(
    session: &mut GameSession<R>,
    action: Action,
    store_tx: &mpsc::UnboundedSender<StoreOp>,
) {
    match session.apply(action) {
        Ok(_) => queue_save(session, store_tx),
        Err(e) => warn!(error = %e, "timer action refused"),
    }
}

fn queue_save<R: Rng>(session: &GameSession<R>, store_tx: &mpsc::UnboundedSender<StoreOp>) {
    match session.encode_snapshot() {
        Ok(encoded) => {
            let _ = store_tx.send(StoreOp::Save(encoded));
        }
        Err(e) => warn!(error = %e, "failed to encode game state"),
    }
}

async fn run_writer(
    store: Arc<dyn KeyValueStore>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<StoreOp>,
) {
    while let Some(op) = rx.recv().await {
        let store = Arc::clone(&store);
        let key = key.clone();
        let result = tokio::task::spawn_blocking(move || -> Result<(), PersistenceError> {
            match op {
                StoreOp::Save(encoded) => store.set(&key, &encoded)?,
                StoreOp::Remove => store.remove(&key)?,
            }
            Ok(())
        })
        .await;

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "failed to persist game state"),
            Err(e) => warn!(error = %e, "persistence task panicked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::STORAGE_KEY;
    use crate::core::content::GameContent;
    use crate::core::session::ManualClock;
    use crate::persistence::store::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spawn_test_session(store: Arc<MemoryStore>) -> (SessionHandle, JoinHandle<()>) {
        spawn_session(
            move || {
                GameSession::load_with(
                    store,
                    GameContent::default(),
                    Box::new(ManualClock::new(0)),
                    ChaCha8Rng::seed_from_u64(12345),
                )
            },
            RuntimeConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_playtime_ticks_once_per_second() {
        let store = Arc::new(MemoryStore::new());
        let (handle, task) = spawn_test_session(Arc::clone(&store));
        handle.snapshot().await.unwrap();

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        let state = handle.snapshot().await.unwrap();
        assert_eq!(state.statistics.total_play_time, 3);

        handle.shutdown().await.unwrap();
        task.await.unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_passive_mining_every_minute() {
        let store = Arc::new(MemoryStore::new());
        let (handle, _task) = spawn_test_session(store);
        handle.snapshot().await.unwrap();

        tokio::time::sleep(Duration::from_secs(61)).await;
        let state = handle.snapshot().await.unwrap();
        assert_eq!(state.gems, 2);
        assert_eq!(state.mining.total_gems_mined, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_removes_snapshot_after_saves() {
        let store = Arc::new(MemoryStore::new());
        let (handle, task) = spawn_test_session(Arc::clone(&store));
        handle.dispatch(Action::TickPlaytime).await.unwrap().unwrap();
        handle.reset().await.unwrap();
        handle.shutdown().await.unwrap();
        task.await.unwrap();

        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_reports_closed_after_shutdown() {
        let store = Arc::new(MemoryStore::new());
        let (handle, task) = spawn_test_session(store);
        handle.shutdown().await.unwrap();
        task.await.unwrap();
        assert!(matches!(handle.snapshot().await, Err(RuntimeError::Closed)));
    }
}
