//! Persistence gateway: key-value stores and checksummed JSON snapshots.

pub mod snapshot;
pub mod store;

pub use snapshot::{decode_snapshot, encode_snapshot, load_state, save_state, PersistenceError};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
