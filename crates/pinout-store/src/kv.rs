//! # Key-Value Seam
//!
//! The persistence collaborator as the rest of the app sees it: an async,
//! string-to-string store scoped to this app.
//!
//! ```text
//!   BoardPreferences ──► dyn KeyValueStore
//!                            ├── SqliteKeyValueStore  (repository/kv.rs)
//!                            └── MemoryKeyValueStore  (this file)
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreResult;

/// Async key-value persistence.
///
/// Implementations replace the whole value on `write`; there are no
/// partial updates.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    async fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Transient store that forgets everything when dropped.
///
/// Used by tests and by the `memory` storage backend.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_read_write() {
        let store = MemoryKeyValueStore::new();

        assert_eq!(store.read("favorite_boards").await.unwrap(), None);

        store.write("favorite_boards", r#"["uno"]"#).await.unwrap();
        store.write("favorite_boards", r#"["esp32"]"#).await.unwrap();

        assert_eq!(
            store.read("favorite_boards").await.unwrap().as_deref(),
            Some(r#"["esp32"]"#)
        );
        assert_eq!(store.read("recent_boards").await.unwrap(), None);
    }
}
