//! # Board Catalog
//!
//! The in-memory collection of board definitions for a session, and the
//! read-only queries the screens run against it.
//!
//! ## Query Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Board Search Works                               │
//! │                                                                         │
//! │  User types: "ESP"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Lowercase once: "esp"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Substring match on name OR description OR manufacturer                │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │ Arduino Uno      | ATmega328P ... | Arduino │                       │
//! │  │ ESP32 DevKitC    | Dual-core ...  | Espressif│ ← MATCH!             │
//! │  │ Raspberry Pi Pico| RP2040 ...     | Raspberry│                       │
//! │  └─────────────────────────────────────────────┘                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results in catalog order: [ESP32 DevKitC]                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Results always preserve catalog definition order
//! - No query mutates the catalog; all are safe to call concurrently
//! - An empty search query matches every board

use std::collections::{BTreeSet, HashMap};

use crate::error::{CoreError, CoreResult};
use crate::layout::PinColor;
use crate::types::BoardDefinition;
use crate::validation::validate_catalog;

/// A validated, immutable snapshot of board definitions.
///
/// ## Usage
/// ```rust
/// use pinout_core::{BoardCatalog, data::builtin_boards};
///
/// let catalog = BoardCatalog::new(builtin_boards().unwrap()).unwrap();
///
/// let dev_boards = catalog.get_by_category("Development Board");
/// let espressif = catalog.get_by_manufacturer("Espressif");
/// let missing = catalog.get_by_id("no-such-board");
///
/// assert!(!dev_boards.is_empty());
/// assert!(!espressif.is_empty());
/// assert!(missing.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardCatalog {
    boards: Vec<BoardDefinition>,
    /// board id → position in `boards`
    index: HashMap<String, usize>,
}

impl BoardCatalog {
    /// Builds a catalog after validating every board.
    ///
    /// ## Returns
    /// * `Ok(BoardCatalog)` - All boards valid, ids unique
    /// * `Err(CoreError::Validation)` - First rule violation found
    /// Pin display colors are filled from each pin's type.
    pub fn new(mut boards: Vec<BoardDefinition>) -> CoreResult<Self> {
        validate_catalog(&boards)?;

        for pin in boards.iter_mut().flat_map(|b| b.pins.iter_mut()) {
            pin.color = Some(PinColor::for_type(Some(pin.pin_type)).as_css().to_string());
        }

        let index = boards
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();

        Ok(BoardCatalog { boards, index })
    }

    /// Parses and validates a catalog from a JSON array of boards.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let boards: Vec<BoardDefinition> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Self::new(boards)
    }

    /// Returns every board in catalog definition order.
    pub fn get_all(&self) -> &[BoardDefinition] {
        &self.boards
    }

    /// Looks up a board by id.
    ///
    /// ## Returns
    /// * `Ok(&BoardDefinition)` - Board found
    /// * `Err(CoreError::BoardNotFound)` - No board has this id
    pub fn get_by_id(&self, id: &str) -> CoreResult<&BoardDefinition> {
        self.find(id)
            .ok_or_else(|| CoreError::BoardNotFound(id.to_string()))
    }

    /// Optional variant of [`get_by_id`](Self::get_by_id).
    pub fn find(&self, id: &str) -> Option<&BoardDefinition> {
        self.index.get(id).map(|&i| &self.boards[i])
    }

    /// Returns true if a board with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Boards whose category equals `category` exactly.
    pub fn get_by_category(&self, category: &str) -> Vec<&BoardDefinition> {
        self.boards
            .iter()
            .filter(|b| b.category == category)
            .collect()
    }

    /// Boards whose manufacturer equals `manufacturer` exactly.
    pub fn get_by_manufacturer(&self, manufacturer: &str) -> Vec<&BoardDefinition> {
        self.boards
            .iter()
            .filter(|b| b.manufacturer == manufacturer)
            .collect()
    }

    /// Case-insensitive substring search over name, description and
    /// manufacturer. An empty query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&BoardDefinition> {
        let needle = query.to_lowercase();
        self.boards
            .iter()
            .filter(|b| b.matches_lowercase(&needle))
            .collect()
    }

    /// Search combined with an optional exact category filter.
    ///
    /// This is what the board list screen shows: the search box and the
    /// category chips narrow the list together.
    pub fn filter(&self, query: &str, category: Option<&str>) -> Vec<&BoardDefinition> {
        let needle = query.to_lowercase();
        self.boards
            .iter()
            .filter(|b| category.map_or(true, |c| b.category == c))
            .filter(|b| b.matches_lowercase(&needle))
            .collect()
    }

    /// Distinct categories present in the catalog.
    pub fn categories(&self) -> BTreeSet<String> {
        self.boards.iter().map(|b| b.category.clone()).collect()
    }

    /// Distinct manufacturers present in the catalog.
    pub fn manufacturers(&self) -> BTreeSet<String> {
        self.boards.iter().map(|b| b.manufacturer.clone()).collect()
    }

    /// Resolves ids to boards in the given order, skipping unknown ids.
    ///
    /// Favorite and recent ids may outlive the boards they point to, so
    /// consumers resolve through here instead of indexing directly.
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<&BoardDefinition>
    where
        I: IntoIterator<Item = &'a String>,
    {
        ids.into_iter().filter_map(|id| self.find(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
