//! # Pinout State
//!
//! The single state object behind every screen: the catalog, its derived
//! category and manufacturer sets, favorites, recents, load status and the
//! pin currently open in the detail panel.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Load Lifecycle                             │
//! │                                                                         │
//! │   idle ──begin_load()──► loading ──load_succeeded(catalog)──► idle      │
//! │                             │                                           │
//! │                             └──────load_failed(message)─────► idle      │
//! │                                      (catalog kept, error set)          │
//! │                                                                         │
//! │   begin_load() while loading → returns false, nothing changes           │
//! │                                                                         │
//! │                  Favorites / Recents (optimistic)                       │
//! │                                                                         │
//! │   toggle_favorite(id) ─► in-memory flip ─► save_favorites(snapshot) ──┐ │
//! │                                                                       │ │
//! │   record_visit(id) ────► move-to-front ──► save_recents(snapshot) ────┤ │
//! │                                                                       ▼ │
//! │                                   write failed? warn!, no rollback      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Memory Is Authoritative
//! Storage is a mirror of the in-memory lists. Each write stores the whole
//! current list, not the single change, so a failed write leaves storage
//! stale only until the next successful write of the same key.
//!
//! ## Thread Safety
//! `PinoutState` sits behind `Arc<Mutex<_>>`. The lock is never held across
//! an `.await`: each async operation updates memory, releases the lock, then
//! persists. The snapshot is read inside the store's per-key lock, so
//! overlapping writes always finish with the newest list in storage.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use pinout_core::{BoardCatalog, BoardDefinition, CoreError, CoreResult, FavoriteIds, PinDefinition, RecentIds};
use pinout_store::BoardPreferences;

use crate::catalog::CatalogSource;
use crate::error::CatalogLoadError;

/// The pin whose details are open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinSelection {
    pub board_id: String,
    pub pin_number: u32,
}

// =============================================================================
// Pure State
// =============================================================================

/// Application state with named, synchronous transitions.
#[derive(Debug, Default)]
pub struct PinoutState {
    catalog: BoardCatalog,
    categories: BTreeSet<String>,
    manufacturers: BTreeSet<String>,
    favorites: FavoriteIds,
    recents: RecentIds,
    loading: bool,
    error: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    selection: Option<PinSelection>,
}

impl PinoutState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Catalog lifecycle
    // -------------------------------------------------------------------------

    /// Starts a catalog load.
    ///
    /// ## Returns
    /// `false` if a load is already in progress; the caller should drop its
    /// request instead of starting a second fetch.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Installs a freshly loaded catalog and recomputes the derived sets.
    ///
    /// Also valid without a prior `begin_load`; `loading` simply ends false.
    pub fn load_succeeded(&mut self, catalog: BoardCatalog) {
        self.categories = catalog.categories();
        self.manufacturers = catalog.manufacturers();
        self.catalog = catalog;
        self.loading = false;
        self.error = None;
        self.loaded_at = Some(Utc::now());

        let stale_selection = self
            .selection
            .as_ref()
            .is_some_and(|s| !self.catalog.contains(&s.board_id));
        if stale_selection {
            self.selection = None;
        }
    }

    /// Records a failed load. The previous catalog stays visible.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    // -------------------------------------------------------------------------
    // Favorites & recents (in-memory side)
    // -------------------------------------------------------------------------

    /// Replaces favorites and recents with the persisted values.
    pub fn hydrate(&mut self, favorites: FavoriteIds, recents: RecentIds) {
        self.favorites = favorites;
        self.recents = recents;
    }

    /// Flips favorite membership, returning the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    /// Moves `id` to the front of the recents.
    pub fn record_visit(&mut self, id: &str) {
        self.recents.visit(id);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorite boards in the order they were added. Ids whose board is not
    /// in the catalog are skipped.
    pub fn favorite_boards(&self) -> Vec<&BoardDefinition> {
        self.catalog.resolve(self.favorites.iter())
    }

    /// Recently viewed boards, most recent first. Unknown ids are skipped.
    pub fn recent_boards(&self) -> Vec<&BoardDefinition> {
        self.catalog.resolve(self.recents.iter())
    }

    // -------------------------------------------------------------------------
    // Pin selection
    // -------------------------------------------------------------------------

    /// Opens the detail panel for a pin.
    ///
    /// ## Returns
    /// * `Ok(&PinDefinition)` - The selected pin
    /// * `Err(CoreError::BoardNotFound | PinNotFound)` - Selection unchanged
    pub fn select_pin(&mut self, board_id: &str, pin_number: u32) -> CoreResult<&PinDefinition> {
        let board = self.catalog.get_by_id(board_id)?;
        let pin = board.pin(pin_number).ok_or_else(|| CoreError::PinNotFound {
            board_id: board_id.to_string(),
            pin_number,
        })?;

        self.selection = Some(PinSelection {
            board_id: board_id.to_string(),
            pin_number,
        });
        Ok(pin)
    }

    /// Closes the detail panel.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected pin number, if the selection is on `board_id`.
    pub fn selected_pin_on(&self, board_id: &str) -> Option<u32> {
        self.selection
            .as_ref()
            .filter(|s| s.board_id == board_id)
            .map(|s| s.pin_number)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &BoardCatalog {
        &self.catalog
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn manufacturers(&self) -> &BTreeSet<String> {
        &self.manufacturers
    }

    pub fn favorites(&self) -> &FavoriteIds {
        &self.favorites
    }

    pub fn recents(&self) -> &RecentIds {
        &self.recents
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn selection(&self) -> Option<&PinSelection> {
        self.selection.as_ref()
    }
}

// =============================================================================
// Container
// =============================================================================

/// Shared handle to the state plus the store that mirrors it.
///
/// Cloning is cheap; all clones see the same state.
#[derive(Debug, Clone)]
pub struct PinoutStateContainer {
    state: Arc<Mutex<PinoutState>>,
    preferences: Arc<BoardPreferences>,
}

impl PinoutStateContainer {
    pub fn new(preferences: BoardPreferences) -> Self {
        PinoutStateContainer {
            state: Arc::new(Mutex::new(PinoutState::new())),
            preferences: Arc::new(preferences),
        }
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = container.with_state(|s| s.catalog().len());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PinoutState) -> R,
    {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Executes a function with write access to the state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PinoutState) -> R,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    pub fn preferences(&self) -> &BoardPreferences {
        &self.preferences
    }

    /// Loads persisted favorites and recents into memory.
    pub async fn hydrate(&self) {
        let favorites = self.preferences.get_favorites().await;
        let recents = self.preferences.get_recents().await;

        info!(
            favorites = favorites.len(),
            recents = recents.len(),
            "Hydrated favorites and recents"
        );
        self.with_state_mut(|s| s.hydrate(favorites, recents));
    }

    /// Fetches the catalog from `source` and installs it.
    ///
    /// ## Returns
    /// * `Ok(true)` - Catalog loaded
    /// * `Ok(false)` - Another load was already running; request dropped
    /// * `Err(_)` - Fetch failed; the message is also stored in `error`
    pub async fn load_catalog(&self, source: &CatalogSource) -> Result<bool, CatalogLoadError> {
        if !self.with_state_mut(PinoutState::begin_load) {
            debug!("Catalog load already in progress, ignoring request");
            return Ok(false);
        }

        match source.fetch().await {
            Ok(catalog) => {
                self.with_state_mut(|s| s.load_succeeded(catalog));
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.with_state_mut(|s| s.load_failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Flips favorite membership and mirrors the favorites to storage.
    ///
    /// ## Returns
    /// The new membership. A storage failure is logged, not returned.
    pub async fn toggle_favorite(&self, id: &str) -> bool {
        let now_favorite = self.with_state_mut(|s| s.toggle_favorite(id));

        let persisted = self
            .preferences
            .save_favorites(|| self.with_state(|s| s.favorites().clone()))
            .await;

        match persisted {
            Ok(_) => debug!(board_id = %id, favorite = now_favorite, "Favorite toggled"),
            Err(e) => warn!(
                board_id = %id,
                favorite = now_favorite,
                error = %e,
                "Favorite change not persisted; keeping in-memory value"
            ),
        }

        now_favorite
    }

    /// Records a board view and mirrors the recents to storage.
    pub async fn record_visit(&self, id: &str) {
        self.with_state_mut(|s| s.record_visit(id));

        let persisted = self
            .preferences
            .save_recents(|| self.with_state(|s| s.recents().clone()))
            .await;

        if let Err(e) = persisted {
            warn!(board_id = %id, error = %e, "Recent visit not persisted");
        }
    }

    /// Looks up a board for the detail view and records the visit.
    ///
    /// Nothing is recorded when the board does not exist.
    pub async fn open_board(&self, id: &str) -> CoreResult<BoardDefinition> {
        let board = self.with_state(|s| s.catalog().get_by_id(id).cloned())?;
        self.record_visit(id).await;
        Ok(board)
    }
}
