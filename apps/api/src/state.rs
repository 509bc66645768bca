use std::sync::Arc;

use crate::progress::ProgressStore;
use crate::roadmap::RoadmapGenerator;
use crate::storage::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Flat key-value store: credential, saved roadmaps, progress records.
    pub store: Arc<dyn KeyValueStore>,
    pub generator: RoadmapGenerator,
    pub progress: ProgressStore,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, generator: RoadmapGenerator) -> Self {
        Self {
            progress: ProgressStore::new(store.clone()),
            store,
            generator,
        }
    }
}
