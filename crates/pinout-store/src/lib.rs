//! # pinout-store: Persistence Layer for MicroPinout
//!
//! This crate is the persistence collaborator: an async key-value store with
//! SQLite and in-memory backends, and the Favorites & Recents Store built on
//! top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      MicroPinout Data Flow                              │
//! │                                                                         │
//! │  PinoutStateContainer::toggle_favorite("esp32-devkitc")                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pinout-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │BoardPreferences│──►│ KeyValueStore │    │  Migrations  │  │   │
//! │  │   │ favorites     │    │   (trait)     │    │  (embedded)  │  │   │
//! │  │   │ recents       │    ├───────────────┤    │              │  │   │
//! │  │   │ per-key locks │    │ SQLite │ Mem  │    │ 001_kv.sql   │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <data dir>/micropinout/micropinout.db   (kv_store table)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Opening the SQLite database
//! - [`migrations`] - Embedded database migrations
//! - [`kv`] - The `KeyValueStore` trait and in-memory backend
//! - [`repository`] - SQLite-backed repositories
//! - [`preferences`] - Favorites & Recents Store
//! - [`error`] - Persistence error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pinout_store::{BoardPreferences, Database, DbConfig};
//!
//! let db = Database::open(DbConfig::new("micropinout.db")).await?;
//! let prefs = BoardPreferences::new(Arc::new(db.kv()));
//!
//! prefs.add_favorite("arduino-uno").await?;
//! let favorites = prefs.get_favorites().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod migrations;
pub mod pool;
pub mod preferences;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::{KeyValueStore, MemoryKeyValueStore};
pub use pool::{Database, DbConfig};
pub use preferences::{BoardPreferences, FAVORITE_BOARDS_KEY, RECENT_BOARDS_KEY};

pub use repository::kv::SqliteKeyValueStore;
