//! # Commands Module
//!
//! Every operation the front-end can call. Each command declares only the
//! state it needs and returns DTOs that serialize to camelCase JSON.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── board.rs    ◄─── Board list, search, detail, categories
//! ├── library.rs  ◄─── Favorites, recents, opening a board
//! ├── pinout.rs   ◄─── Pin diagram and pin detail panel
//! ├── catalog.rs  ◄─── Catalog status and reload
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! ```rust,ignore
//! // Only needs the state container
//! fn search_boards(state: &PinoutStateContainer, query: &str, ...)
//!
//! // Needs state and configuration
//! fn get_diagram(state: &PinoutStateContainer, config: &ConfigState, ...)
//! ```
//!
//! Errors are always [`ApiError`](crate::error::ApiError), serialized as
//! `{ "code": "NOT_FOUND", "message": "..." }`.

pub mod board;
pub mod catalog;
pub mod config;
pub mod library;
pub mod pinout;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use pinout_store::{BoardPreferences, MemoryKeyValueStore};

    use crate::catalog::CatalogSource;
    use crate::state::PinoutStateContainer;

    /// Empty container backed by in-memory storage.
    pub fn memory_container() -> PinoutStateContainer {
        PinoutStateContainer::new(BoardPreferences::new(Arc::new(MemoryKeyValueStore::new())))
    }

    /// In-memory container with the built-in catalog loaded.
    pub async fn builtin_container() -> PinoutStateContainer {
        let container = memory_container();
        container
            .load_catalog(&CatalogSource::Builtin)
            .await
            .expect("built-in catalog loads");
        container
    }
}
