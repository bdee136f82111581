//! # Favorites & Recents Store
//!
//! Persists favorite and recently viewed board ids as JSON arrays under two
//! fixed keys.
//!
//! ## Read-Modify-Write, Serialized Per Key
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tap ★ on uno ──┐                                                      │
//! │  Tap ★ on esp ──┤   both want to update "favorite_boards"              │
//! │                 ▼                                                       │
//! │        favorites_lock (tokio Mutex)                                     │
//! │                 │                                                       │
//! │   ┌─────────────▼─────────────┐     ┌───────────────────────────┐      │
//! │   │ read  → ["pico"]          │     │ (waits for the lock)      │      │
//! │   │ apply → ["pico","uno"]    │     │                           │      │
//! │   │ write → ["pico","uno"]    │     │                           │      │
//! │   └───────────────────────────┘     └─────────────▼─────────────┘      │
//! │                                     │ read  → ["pico","uno"]    │      │
//! │                                     │ apply → [... ,"esp"]      │      │
//! │                                     │ write                      │      │
//! │                                     └───────────────────────────┘      │
//! │  Result: no lost update. The two keys have independent locks.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! - `get_*` never fail: a backend error or a malformed stored value is
//!   logged and read as an empty list.
//! - Mutations return `StoreResult`. A backend read failure aborts the
//!   mutation without writing, so a transient outage cannot overwrite good
//!   data with a one-element list. A malformed stored value is treated as
//!   empty and replaced.
//!
//! ## Snapshot Writes
//! `save_favorites` / `save_recents` overwrite the stored list with the
//! caller's authoritative copy instead of replaying one change. The snapshot
//! closure runs under the key's lock, so whichever save writes last also
//! captured the newest list. One successful save repairs any earlier failed
//! write.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use pinout_core::{FavoriteIds, RecentIds};

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Storage key for favorite board ids.
pub const FAVORITE_BOARDS_KEY: &str = "favorite_boards";

/// Storage key for recently viewed board ids.
pub const RECENT_BOARDS_KEY: &str = "recent_boards";

/// Favorites and recents on top of any [`KeyValueStore`].
pub struct BoardPreferences {
    store: Arc<dyn KeyValueStore>,
    favorites_lock: Mutex<()>,
    recents_lock: Mutex<()>,
}

impl std::fmt::Debug for BoardPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardPreferences").finish_non_exhaustive()
    }
}

impl BoardPreferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        BoardPreferences {
            store,
            favorites_lock: Mutex::new(()),
            recents_lock: Mutex::new(()),
        }
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Persisted favorites, or empty if none are stored or the read fails.
    pub async fn get_favorites(&self) -> FavoriteIds {
        self.load_or_default(FAVORITE_BOARDS_KEY).await
    }

    /// Adds `id` to the persisted favorites.
    ///
    /// No write happens if `id` is already a favorite.
    ///
    /// ## Returns
    /// The favorites as persisted after the call.
    pub async fn add_favorite(&self, id: &str) -> StoreResult<FavoriteIds> {
        let _guard = self.favorites_lock.lock().await;

        let mut favorites: FavoriteIds = self.load_for_update(FAVORITE_BOARDS_KEY).await?;
        if favorites.insert(id) {
            self.save(FAVORITE_BOARDS_KEY, &favorites).await?;
            debug!(board_id = %id, "Favorite added");
        }
        Ok(favorites)
    }

    /// Removes `id` from the persisted favorites.
    ///
    /// No write happens if `id` is not a favorite.
    pub async fn remove_favorite(&self, id: &str) -> StoreResult<FavoriteIds> {
        let _guard = self.favorites_lock.lock().await;

        let mut favorites: FavoriteIds = self.load_for_update(FAVORITE_BOARDS_KEY).await?;
        if favorites.remove(id) {
            self.save(FAVORITE_BOARDS_KEY, &favorites).await?;
            debug!(board_id = %id, "Favorite removed");
        }
        Ok(favorites)
    }

    /// Replaces the persisted favorites with `current()`.
    ///
    /// `current` is called after the favorites lock is acquired.
    pub async fn save_favorites<F>(&self, current: F) -> StoreResult<FavoriteIds>
    where
        F: FnOnce() -> FavoriteIds,
    {
        let _guard = self.favorites_lock.lock().await;

        let favorites = current();
        self.save(FAVORITE_BOARDS_KEY, &favorites).await?;
        debug!(count = favorites.len(), "Favorites saved");
        Ok(favorites)
    }

    // =========================================================================
    // Recents
    // =========================================================================

    /// Persisted recents (most recent first), or empty on failure.
    pub async fn get_recents(&self) -> RecentIds {
        self.load_or_default(RECENT_BOARDS_KEY).await
    }

    /// Moves `id` to the front of the persisted recents and truncates.
    pub async fn add_recent(&self, id: &str) -> StoreResult<RecentIds> {
        let _guard = self.recents_lock.lock().await;

        let mut recents: RecentIds = self.load_for_update(RECENT_BOARDS_KEY).await?;
        recents.visit(id);
        self.save(RECENT_BOARDS_KEY, &recents).await?;
        debug!(board_id = %id, "Recent visit stored");
        Ok(recents)
    }

    /// Replaces the persisted recents with `current()`.
    ///
    /// `current` is called after the recents lock is acquired.
    pub async fn save_recents<F>(&self, current: F) -> StoreResult<RecentIds>
    where
        F: FnOnce() -> RecentIds,
    {
        let _guard = self.recents_lock.lock().await;

        let recents = current();
        self.save(RECENT_BOARDS_KEY, &recents).await?;
        debug!(count = recents.len(), "Recents saved");
        Ok(recents)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.store.read(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::malformed(key, e))
    }

    async fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.load(key).await {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!(key = %key, error = %e, "Falling back to empty list");
                T::default()
            }
        }
    }

    async fn load_for_update<T: DeserializeOwned + Default>(&self, key: &str) -> StoreResult<T> {
        match self.load(key).await {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(e @ StoreError::Malformed { .. }) => {
                warn!(key = %key, error = %e, "Replacing malformed stored value");
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Internal(e.to_string()))?;
        self.store.write(key, &raw).await
    }
}
