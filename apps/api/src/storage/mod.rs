//! Local key-value persistence.
//!
//! Everything the service remembers (the API credential, saved roadmaps and
//! per-roadmap completion sets) lives in one flat namespace of string values.
//! Callers get a `KeyValueStore` injected so the generator and progress logic
//! can be exercised against `MemoryStore` without touching disk.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

pub mod credentials;
pub mod file;
pub mod memory;
pub mod roadmaps;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the generation API credential.
pub const CREDENTIAL_KEY: &str = "gemini_api_key";
/// Key holding the JSON array of saved roadmaps.
pub const SAVED_ROADMAPS_KEY: &str = "saved_roadmaps";

/// Key holding the completion set of one saved roadmap.
pub fn progress_key(roadmap_id: Uuid) -> String {
    format!("roadmap_progress_{roadmap_id}")
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Flat string key-value store. No transactions: a read-modify-write cycle
/// spanning two calls is last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Appends `item` to the JSON array stored under `key`.
    /// A missing or unreadable array starts over as empty.
    fn append(&self, key: &str, item: Value) -> Result<(), StorageError> {
        let mut items = self
            .get(key)?
            .map(|raw| read_json_array(key, &raw))
            .unwrap_or_default();
        items.push(item);
        self.set(key, &serde_json::to_string(&items)?)
    }
}

/// Parses a stored JSON array, treating anything unreadable as empty.
fn read_json_array(key: &str, raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Discarding unreadable list under '{key}': {e}");
            Vec::new()
        }
    }
}
