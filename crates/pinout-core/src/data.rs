//! Built-in board catalog.
//!
//! The JSON lives in `data/boards.json` and is compiled into the binary, so
//! the app has a usable catalog with no file or network access. It goes
//! through the same parsing and validation as any external catalog.

use crate::error::{CoreError, CoreResult};
use crate::types::BoardDefinition;

const BUILTIN_BOARDS_JSON: &str = include_str!("../data/boards.json");

/// Parses the built-in catalog.
pub fn builtin_boards() -> CoreResult<Vec<BoardDefinition>> {
    serde_json::from_str(BUILTIN_BOARDS_JSON).map_err(|e| CoreError::InvalidCatalog(e.to_string()))
}
