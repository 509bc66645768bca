//! Saved-roadmap collection: an append-only JSON array under one key.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Roadmap, UserProfile};
use crate::storage::{KeyValueStore, StorageError, SAVED_ROADMAPS_KEY};

/// Assigns an id and creation timestamp, attaches the profile when given and
/// appends the roadmap to the saved collection. Returns the stored record.
pub fn save_roadmap(
    store: &dyn KeyValueStore,
    mut roadmap: Roadmap,
    profile: Option<UserProfile>,
) -> Result<Roadmap, StorageError> {
    roadmap.id = Some(Uuid::new_v4());
    roadmap.created_at = Some(Utc::now());
    if profile.is_some() {
        roadmap.user_profile = profile;
    }

    store.append(SAVED_ROADMAPS_KEY, serde_json::to_value(&roadmap)?)?;

    info!(
        "Saved roadmap {} for role '{}' ({} milestones)",
        roadmap.id.unwrap_or_default(),
        roadmap.role,
        roadmap.milestones.len()
    );
    Ok(roadmap)
}

/// Every saved roadmap in insertion order. Unreadable data is skipped.
pub fn load_roadmaps(store: &dyn KeyValueStore) -> Result<Vec<Roadmap>, StorageError> {
    let Some(raw) = store.get(SAVED_ROADMAPS_KEY)? else {
        return Ok(Vec::new());
    };

    let items: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Saved roadmap collection is unreadable, treating as empty: {e}");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Roadmap>(item) {
            Ok(roadmap) => Some(roadmap),
            Err(e) => {
                warn!("Skipping unreadable saved roadmap: {e}");
                None
            }
        })
        .collect())
}

/// Saved roadmaps, newest first.
pub fn list_roadmaps(store: &dyn KeyValueStore) -> Result<Vec<Roadmap>, StorageError> {
    let mut roadmaps = load_roadmaps(store)?;
    roadmaps.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(roadmaps)
}

pub fn find_roadmap(store: &dyn KeyValueStore, id: Uuid) -> Result<Option<Roadmap>, StorageError> {
    Ok(load_roadmaps(store)?
        .into_iter()
        .find(|r| r.id == Some(id)))
}
