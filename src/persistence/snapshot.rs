//! Snapshot encoding with checksum verification and field-wise defaulting.
//!
//! Snapshots are JSON envelopes:
//!
//! ```json
//! { "version": 1, "checksum": "<sha256 hex>", "state": { ... } }
//! ```
//!
//! The checksum covers the compact JSON of `state`. An envelope-less object is
//! read as a legacy save. On load every top-level field that is missing or
//! does not parse keeps its default, so one corrupt section never costs the
//! whole save.

use super::store::{KeyValueStore, StoreError};
use crate::character::derived_stats::recalculate_player_stats;
use crate::core::constants::{DEFAULT_MAX_ITEMS, PREMIUM_ZONE, SNAPSHOT_VERSION};
use crate::core::economy::research_tier;
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("snapshot checksum mismatch")]
    ChecksumMismatch,
    #[error("snapshot state is not a JSON object")]
    NotAnObject,
    #[error("snapshot version {found} is newer than this build supports")]
    UnsupportedVersion { found: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct EnvelopeOut<'a> {
    version: u32,
    checksum: String,
    state: &'a Value,
}

#[derive(Deserialize)]
struct EnvelopeIn {
    version: u32,
    checksum: String,
    state: Value,
}

fn checksum(state: &Value) -> Result<String, PersistenceError> {
    let canonical = serde_json::to_string(state)?;
    Ok(format!("{:x}", Sha256::digest(canonical.as_bytes())))
}

/// Serializes `state` into a checksummed envelope. Combat-transient fields
/// are not part of the snapshot.
pub fn encode_snapshot(state: &GameState) -> Result<String, PersistenceError> {
    let value = serde_json::to_value(state)?;
    let envelope = EnvelopeOut {
        version: SNAPSHOT_VERSION,
        checksum: checksum(&value)?,
        state: &value,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parses a snapshot and rebuilds a playable state from it.
pub fn decode_snapshot(raw: &str, now_ms: i64) -> Result<GameState, PersistenceError> {
    let value: Value = serde_json::from_str(raw)?;
    let is_envelope = matches!(
        &value,
        Value::Object(map) if map.contains_key("state") && map.contains_key("checksum")
    );
    let loaded = if is_envelope {
        let envelope: EnvelopeIn = serde_json::from_value(value)?;
        if envelope.version > SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: envelope.version,
            });
        }
        if checksum(&envelope.state)? != envelope.checksum {
            return Err(PersistenceError::ChecksumMismatch);
        }
        envelope.state
    } else {
        debug!("reading envelope-less legacy snapshot");
        value
    };

    let mut state = merge_over_defaults(loaded, now_ms)?;
    finish_load(&mut state, now_ms);
    Ok(state)
}

/// Overlays `overlay` onto `base`: objects merge key by key, anything else
/// replaces the base value.
fn merge_over(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_over(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn merge_over_defaults(loaded: Value, now_ms: i64) -> Result<GameState, PersistenceError> {
    let Value::Object(mut merged) = serde_json::to_value(GameState::new(now_ms))? else {
        return Err(PersistenceError::NotAnObject);
    };
    let Value::Object(loaded) = loaded else {
        return Err(PersistenceError::NotAnObject);
    };

    for (field, value) in loaded {
        let Some(default) = merged.get(&field) else {
            debug!(field = %field, "ignoring unknown snapshot field");
            continue;
        };
        let mut candidate = default.clone();
        merge_over(&mut candidate, value);

        let mut trial: Map<String, Value> = merged.clone();
        trial.insert(field.clone(), candidate.clone());
        match serde_json::from_value::<GameState>(Value::Object(trial)) {
            Ok(_) => {
                merged.insert(field, candidate);
            }
            Err(e) => warn!(field = %field, error = %e, "malformed snapshot field, using default"),
        }
    }

    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// Re-establishes invariants that are derived rather than stored.
fn finish_load(state: &mut GameState, now_ms: i64) {
    state.is_premium = state.is_premium || state.zone >= PREMIUM_ZONE;
    state.statistics.session_start_time = now_ms;
    state.research.tier = research_tier(state.research.level);
    if state.inventory.max_items == 0 {
        state.inventory.max_items = DEFAULT_MAX_ITEMS;
    }
    state.inventory.clear_dangling_equipped();
    state.current_enemy = None;
    state.in_combat = false;
    state.combat_log.clear();
    recalculate_player_stats(state);
}

/// Loads the state stored under `key`, falling back to a fresh state when
/// nothing is stored or the snapshot cannot be read.
pub fn load_state(store: &dyn KeyValueStore, key: &str, now_ms: i64) -> GameState {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(key, "no saved game, starting fresh");
            return GameState::new(now_ms);
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read saved game, starting fresh");
            return GameState::new(now_ms);
        }
    };

    match decode_snapshot(&raw, now_ms) {
        Ok(state) => {
            info!(key, zone = state.zone, coins = state.coins, "loaded saved game");
            state
        }
        Err(e) => {
            warn!(key, error = %e, "saved game unreadable, starting fresh");
            GameState::new(now_ms)
        }
    }
}

/// Encodes and writes `state` under `key`.
pub fn save_state(
    store: &dyn KeyValueStore,
    key: &str,
    state: &GameState,
) -> Result<(), PersistenceError> {
    let encoded = encode_snapshot(state)?;
    store.set(key, &encoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::generation::generate_item;
    use crate::items::types::ItemKind;
    use crate::persistence::store::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_roundtrip_preserves_progress() {
        let mut rng = create_test_rng();
        let mut state = GameState::new(0);
        state.coins = 4321;
        state.zone = 12;
        state.research.level = 14;
        state.research.tier = 1;
        let weapon = generate_item(ItemKind::Weapon, None, &mut rng);
        let id = weapon.id.clone();
        state.inventory.add(weapon);
        state.inventory.set_equipped(ItemKind::Weapon, Some(id.clone()));
        recalculate_player_stats(&mut state);

        let raw = encode_snapshot(&state).unwrap();
        let loaded = decode_snapshot(&raw, 99).unwrap();
        assert_eq!(loaded.coins, 4321);
        assert_eq!(loaded.zone, 12);
        assert_eq!(loaded.inventory.equipped_id(ItemKind::Weapon), Some(id.as_str()));
        assert_eq!(loaded.player_stats, state.player_stats);
        assert_eq!(loaded.statistics.session_start_time, 99);
    }

    #[test]
    fn test_transient_combat_fields_not_saved() {
        let mut state = GameState::new(0);
        state.in_combat = true;
        state.combat_log.push("You encounter a Goblin Warrior in Zone 1!".into());
        let raw = encode_snapshot(&state).unwrap();
        assert!(!raw.contains("combat_log"));
        assert!(!raw.contains("in_combat"));
        let loaded = decode_snapshot(&raw, 0).unwrap();
        assert!(!loaded.in_combat);
        assert!(loaded.combat_log.is_empty());
    }

    #[test]
    fn test_tampered_snapshot_rejected() {
        let raw = encode_snapshot(&GameState::new(0)).unwrap();
        let tampered = raw.replacen("\"coins\": 100", "\"coins\": 999999", 1);
        assert_ne!(raw, tampered);
        assert!(matches!(
            decode_snapshot(&tampered, 0),
            Err(PersistenceError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_legacy_partial_snapshot_defaults_missing_fields() {
        let raw = r#"{"coins": 250, "zone": 55, "research": {"level": 23}}"#;
        let state = decode_snapshot(raw, 7).unwrap();
        assert_eq!(state.coins, 250);
        assert_eq!(state.gems, 0);
        assert!(state.is_premium);
        assert_eq!(state.research.level, 23);
        assert_eq!(state.research.tier, 2);
        assert_eq!(state.inventory.max_items, 5);
        assert_eq!(state.mining.efficiency, 2);
    }

    #[test]
    fn test_malformed_field_falls_back_alone() {
        let raw = r#"{"coins": "lots", "gems": 42, "multipliers": [1, 2], "mystery": true}"#;
        let state = decode_snapshot(raw, 0).unwrap();
        assert_eq!(state.coins, 100);
        assert_eq!(state.gems, 42);
        assert_eq!(state.multipliers.coins, 1.0);
    }

    #[test]
    fn test_dangling_equipped_id_cleared() {
        let raw = r#"{"inventory": {"max_items": 0, "equipped_weapon": "gone"}}"#;
        let state = decode_snapshot(raw, 0).unwrap();
        assert_eq!(state.inventory.equipped_id(ItemKind::Weapon), None);
        assert_eq!(state.inventory.max_items, 5);
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            decode_snapshot("[1, 2, 3]", 0),
            Err(PersistenceError::NotAnObject)
        ));
        assert!(decode_snapshot("not json", 0).is_err());
    }

    #[test]
    fn test_load_state_falls_back_on_garbage() {
        let store = MemoryStore::new();
        store.set("save", "{{{{").unwrap();
        let state = load_state(&store, "save", 5);
        assert_eq!(state.coins, 100);
        assert_eq!(state.statistics.session_start_time, 5);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let mut state = GameState::new(0);
        state.gems = 77;
        save_state(&store, "save", &state).unwrap();
        assert_eq!(load_state(&store, "save", 0).gems, 77);
    }
}
