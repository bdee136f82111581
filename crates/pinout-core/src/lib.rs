//! # pinout-core: Pure Domain Logic for MicroPinout
//!
//! This crate is the **heart** of MicroPinout. It contains the board/pin data
//! model and every rule that operates on it, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       MicroPinout Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Front-end (out of scope)                 │   │
//! │  │    Board list ──► Detail view ──► Pin diagram ──► Pin details   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              micropinout (state container + commands)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pinout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  history  │  │  layout   │  │   │
//! │  │   │   Board   │  │  queries  │  │ favorites │  │  pin grid │  │   │
//! │  │   │    Pin    │  │  search   │  │  recents  │  │  colors   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                pinout-store (Persistence Layer)                 │   │
//! │  │          key-value storage for favorites and recents            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BoardDefinition, PinDefinition, BoardSpecs, ...)
//! - [`catalog`] - Board catalog and read-only query service
//! - [`history`] - Favorite and recent board id collections
//! - [`layout`] - Pin diagram mapper (grid coordinates + colors)
//! - [`validation`] - Catalog and input validation
//! - [`data`] - Built-in board catalog
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pinout_core::catalog::BoardCatalog;
//! use pinout_core::data::builtin_boards;
//!
//! let catalog = BoardCatalog::new(builtin_boards().unwrap()).unwrap();
//! let uno = catalog.get_by_id("arduino-uno").unwrap();
//! assert_eq!(uno.manufacturer, "Arduino");
//!
//! // Search is case-insensitive across name, description and manufacturer
//! assert!(!catalog.search("ESPRESSIF").is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod data;
pub mod error;
pub mod history;
pub mod layout;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::BoardCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::{FavoriteIds, RecentIds};
pub use layout::{layout, DiagramPin, LayoutOptions, PinColor, PositionedPin};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of boards kept in the recently viewed list.
pub const MAX_RECENT_BOARDS: usize = 5;

/// Maximum length of a free-text board search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
