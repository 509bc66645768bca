use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::progress::CompletionSet;
use crate::storage::{progress_key, KeyValueStore, StorageError};

/// Loads and saves completion sets, one record per saved roadmap.
///
/// An unsaved roadmap (`None` id) has session-only progress: `load` returns an
/// empty set and `save` does nothing.
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing, unreadable or corrupt records load as empty.
    pub fn load(&self, roadmap_id: Option<Uuid>) -> CompletionSet {
        let Some(id) = roadmap_id else {
            return CompletionSet::new();
        };

        let raw = match self.store.get(&progress_key(id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CompletionSet::new(),
            Err(e) => {
                warn!("Progress record for roadmap {id} could not be read, treating as empty: {e}");
                return CompletionSet::new();
            }
        };

        match serde_json::from_str::<CompletionSet>(&raw) {
            Ok(set) => {
                if !set.is_empty() {
                    debug!("Loaded {} completion keys for roadmap {id}", set.len());
                }
                set
            }
            Err(e) => {
                warn!("Progress record for roadmap {id} is unreadable, treating as empty: {e}");
                CompletionSet::new()
            }
        }
    }

    pub fn save(&self, roadmap_id: Option<Uuid>, set: &CompletionSet) -> Result<(), StorageError> {
        let Some(id) = roadmap_id else {
            return Ok(());
        };

        self.store
            .set(&progress_key(id), &serde_json::to_string(set)?)?;
        debug!("Persisted {} completion keys for roadmap {id}", set.len());
        Ok(())
    }
}
