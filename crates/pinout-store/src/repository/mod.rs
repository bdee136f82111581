//! # Repository Module
//!
//! SQL-backed implementations of the store's seams.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BoardPreferences                                                      │
//! │       │                                                                 │
//! │       │  kv.read("favorite_boards") / kv.write(...)                    │
//! │       ▼                                                                 │
//! │  SqliteKeyValueStore                                                   │
//! │  ├── read(&self, key)                                                  │
//! │  └── write(&self, key, value)   (upsert)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_store table                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`kv::SqliteKeyValueStore`] - `kv_store` table access

pub mod kv;
