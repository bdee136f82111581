//! # Board Commands
//!
//! Read-only catalog queries for the board list and detail screens.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Board List Screen                                    │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────┐                     │
//! │  │ 🔍 "esp"                                      │                     │
//! │  └───────────────────────────────────────────────┘                     │
//! │  [All] [Development Board] [IoT Board]   ← category chips              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_boards(query = "esp", category = None)                         │
//! │       │                                                                 │
//! │       ├── trim + length check (validation)                             │
//! │       ▼                                                                 │
//! │  catalog.filter(query, category)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<BoardSummaryDto> with is_favorite filled in                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use pinout_core::validation::{validate_board_id, validate_search_query};
use pinout_core::{AssetHandle, BoardDefinition};

use crate::error::ApiError;
use crate::state::{PinoutState, PinoutStateContainer};

/// One row in a board list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummaryDto {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<AssetHandle>,
    pub pin_count: usize,
    pub is_favorite: bool,
}

impl BoardSummaryDto {
    pub fn from_board(board: &BoardDefinition, is_favorite: bool) -> Self {
        BoardSummaryDto {
            id: board.id.clone(),
            name: board.name.clone(),
            manufacturer: board.manufacturer.clone(),
            category: board.category.clone(),
            description: board.description.clone(),
            image: board.image.clone(),
            pin_count: board.pins.len(),
            is_favorite,
        }
    }
}

/// A labeled spec line on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRowDto {
    pub label: String,
    pub value: String,
}

/// Everything the detail screen shows for a board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetailDto {
    #[serde(flatten)]
    pub board: BoardDefinition,
    pub spec_rows: Vec<SpecRowDto>,
    pub is_favorite: bool,
}

impl BoardDetailDto {
    pub fn from_board(board: BoardDefinition, is_favorite: bool) -> Self {
        let spec_rows = board
            .specs
            .display_rows()
            .into_iter()
            .map(|(label, value)| SpecRowDto {
                label: label.to_string(),
                value,
            })
            .collect();

        BoardDetailDto {
            board,
            spec_rows,
            is_favorite,
        }
    }
}

pub(crate) fn summaries<'a, I>(state: &PinoutState, boards: I) -> Vec<BoardSummaryDto>
where
    I: IntoIterator<Item = &'a BoardDefinition>,
{
    boards
        .into_iter()
        .map(|b| BoardSummaryDto::from_board(b, state.is_favorite(&b.id)))
        .collect()
}

/// Lists every board in catalog order.
pub fn list_boards(state: &PinoutStateContainer) -> Vec<BoardSummaryDto> {
    debug!("list_boards command");
    state.with_state(|s| summaries(s, s.catalog().get_all()))
}

/// Searches boards by name, description or manufacturer, optionally within
/// one category.
///
/// ## Arguments
/// * `query` - Free text, trimmed, at most 100 characters. Empty matches all.
/// * `category` - Exact category name, or `None` for all categories.
pub fn search_boards(
    state: &PinoutStateContainer,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<BoardSummaryDto>, ApiError> {
    let start = Instant::now();
    let query = validate_search_query(query)?;

    let results = state.with_state(|s| summaries(s, s.catalog().filter(&query, category)));

    debug!(
        query = %query,
        category = ?category,
        count = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search_boards command"
    );
    Ok(results)
}

/// Gets a board by id without recording a visit.
pub fn get_board(state: &PinoutStateContainer, id: &str) -> Result<BoardDetailDto, ApiError> {
    debug!(board_id = %id, "get_board command");
    validate_board_id(id)?;

    state.with_state(|s| {
        let board = s.catalog().get_by_id(id)?.clone();
        Ok::<_, ApiError>(BoardDetailDto::from_board(board, s.is_favorite(id)))
    })
}

/// Boards in one category, exact match.
pub fn get_boards_by_category(state: &PinoutStateContainer, category: &str) -> Vec<BoardSummaryDto> {
    debug!(category = %category, "get_boards_by_category command");
    state.with_state(|s| summaries(s, s.catalog().get_by_category(category)))
}

/// Boards from one manufacturer, exact match.
pub fn get_boards_by_manufacturer(state: &PinoutStateContainer, manufacturer: &str) -> Vec<BoardSummaryDto> {
    debug!(manufacturer = %manufacturer, "get_boards_by_manufacturer command");
    state.with_state(|s| summaries(s, s.catalog().get_by_manufacturer(manufacturer)))
}

/// Distinct categories, sorted.
pub fn get_categories(state: &PinoutStateContainer) -> Vec<String> {
    state.with_state(|s| s.categories().iter().cloned().collect())
}

/// Distinct manufacturers, sorted.
pub fn get_manufacturers(state: &PinoutStateContainer) -> Vec<String> {
    state.with_state(|s| s.manufacturers().iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::builtin_container;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_list_boards_in_catalog_order() {
        let state = builtin_container().await;
        let ids: Vec<_> = list_boards(&state).into_iter().map(|b| b.id).collect();

        assert_eq!(ids.first().map(String::as_str), Some("arduino-uno"));
        assert_eq!(ids.len(), state.with_state(|s| s.catalog().len()));
    }

    #[tokio::test]
    async fn test_search_trims_and_filters() {
        let state = builtin_container().await;

        let results = search_boards(&state, "  espressif ", None).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "esp32-devkitc");

        let results = search_boards(&state, "arduino", Some("IoT Board")).unwrap();
        assert!(results.is_empty());

        let all = search_boards(&state, "", None).unwrap();
        assert_eq!(all.len(), list_boards(&state).len());
    }

    #[tokio::test]
    async fn test_search_rejects_long_query() {
        let state = builtin_container().await;
        let err = search_boards(&state, &"x".repeat(101), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_get_board_detail() {
        let state = builtin_container().await;
        let detail = get_board(&state, "arduino-uno").unwrap();

        assert_eq!(detail.board.manufacturer, "Arduino");
        assert_eq!(detail.spec_rows[0].label, "Processor");
        assert!(!detail.is_favorite);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], "arduino-uno");
        assert_eq!(json["specRows"][0]["value"], "ATmega328P");
        assert_eq!(json["pins"][0]["color"], "red");
    }

    #[tokio::test]
    async fn test_get_board_not_found_vs_malformed() {
        let state = builtin_container().await;

        assert_eq!(get_board(&state, "esp8266").unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(get_board(&state, "no spaces").unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(get_board(&state, "esp32-s3.v1").unwrap_err().code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_category_and_manufacturer_queries() {
        let state = builtin_container().await;

        let dev = get_boards_by_category(&state, "Development Board");
        assert!(dev.iter().all(|b| b.category == "Development Board"));
        assert!(!dev.is_empty());

        let arduino = get_boards_by_manufacturer(&state, "Arduino");
        assert!(arduino.iter().all(|b| b.manufacturer == "Arduino"));

        assert!(get_categories(&state).contains(&"IoT Board".to_string()));
        assert!(get_manufacturers(&state).contains(&"Raspberry Pi".to_string()));
    }
}
