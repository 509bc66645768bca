use thiserror::Error;
use tracing::info;

use crate::storage::{KeyValueStore, StorageError, CREDENTIAL_KEY};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("API key cannot be empty")]
    Blank,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Returns the stored generation API key. A blank value counts as absent.
pub fn api_key(store: &dyn KeyValueStore) -> Result<Option<String>, StorageError> {
    Ok(store
        .get(CREDENTIAL_KEY)?
        .filter(|key| !key.trim().is_empty()))
}

pub fn has_api_key(store: &dyn KeyValueStore) -> Result<bool, StorageError> {
    Ok(api_key(store)?.is_some())
}

/// Stores the generation API key verbatim. Blank input is rejected.
pub fn set_api_key(store: &dyn KeyValueStore, key: &str) -> Result<(), CredentialError> {
    if key.trim().is_empty() {
        return Err(CredentialError::Blank);
    }
    store.set(CREDENTIAL_KEY, key)?;
    info!("Generation API key stored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_key() {
        let store = MemoryStore::new();
        assert!(api_key(&store).unwrap().is_none());
        assert!(!has_api_key(&store).unwrap());
    }

    #[test]
    fn test_blank_stored_key_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(CREDENTIAL_KEY, "   ").unwrap();
        assert!(api_key(&store).unwrap().is_none());
    }

    #[test]
    fn test_set_and_read_back() {
        let store = MemoryStore::new();
        set_api_key(&store, "AIza-test").unwrap();
        assert_eq!(api_key(&store).unwrap().as_deref(), Some("AIza-test"));
    }

    #[test]
    fn test_set_rejects_blank() {
        let store = MemoryStore::new();
        let err = set_api_key(&store, " \t").unwrap_err();
        assert!(matches!(err, CredentialError::Blank));
        assert!(store.get(CREDENTIAL_KEY).unwrap().is_none());
    }
}
