//! # Library Commands
//!
//! Favorites, recently viewed boards, and opening a board.
//!
//! ```text
//!   tap board in list ──► open_board(id) ──► record visit ──► detail DTO
//!   tap ★ on detail   ──► toggle_favorite(id) ──► { boardId, isFavorite }
//!   Favorites tab     ──► get_favorites()   (stale ids skipped)
//!   Home "Recent"     ──► get_recents()     (most recent first)
//! ```

use serde::Serialize;
use tracing::debug;

use pinout_core::validation::validate_board_id;

use crate::commands::board::{summaries, BoardDetailDto, BoardSummaryDto};
use crate::error::ApiError;
use crate::state::PinoutStateContainer;

/// Favorite membership after a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusDto {
    pub board_id: String,
    pub is_favorite: bool,
}

fn ensure_board_exists(state: &PinoutStateContainer, id: &str) -> Result<(), ApiError> {
    validate_board_id(id)?;
    state.with_state(|s| s.catalog().get_by_id(id).map(|_| ()))?;
    Ok(())
}

/// Flips a board's favorite status.
///
/// The returned status reflects memory; a failed storage write is logged by
/// the container and does not fail the command.
pub async fn toggle_favorite(state: &PinoutStateContainer, id: &str) -> Result<FavoriteStatusDto, ApiError> {
    debug!(board_id = %id, "toggle_favorite command");
    ensure_board_exists(state, id)?;

    let is_favorite = state.toggle_favorite(id).await;
    Ok(FavoriteStatusDto {
        board_id: id.to_string(),
        is_favorite,
    })
}

/// Favorite boards in the order they were added.
pub fn get_favorites(state: &PinoutStateContainer) -> Vec<BoardSummaryDto> {
    debug!("get_favorites command");
    state.with_state(|s| summaries(s, s.favorite_boards()))
}

/// Recently viewed boards, most recent first.
pub fn get_recents(state: &PinoutStateContainer) -> Vec<BoardSummaryDto> {
    debug!("get_recents command");
    state.with_state(|s| summaries(s, s.recent_boards()))
}

/// Opens a board's detail view, recording the visit.
pub async fn open_board(state: &PinoutStateContainer, id: &str) -> Result<BoardDetailDto, ApiError> {
    debug!(board_id = %id, "open_board command");
    validate_board_id(id)?;

    let board = state.open_board(id).await?;
    let is_favorite = state.with_state(|s| s.is_favorite(id));
    Ok(BoardDetailDto::from_board(board, is_favorite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::builtin_container;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_toggle_favorite_round_trip() {
        let state = builtin_container().await;

        let status = toggle_favorite(&state, "rpi-pico").await.unwrap();
        assert!(status.is_favorite);

        let favorites = get_favorites(&state);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "rpi-pico");
        assert!(favorites[0].is_favorite);

        let status = toggle_favorite(&state, "rpi-pico").await.unwrap();
        assert!(!status.is_favorite);
        assert!(get_favorites(&state).is_empty());
    }

    #[tokio::test]
    async fn test_toggle_unknown_board() {
        let state = builtin_container().await;
        let err = toggle_favorite(&state, "esp8266").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(state.with_state(|s| s.favorites().is_empty()));
    }

    #[tokio::test]
    async fn test_open_board_feeds_recents() {
        let state = builtin_container().await;

        open_board(&state, "arduino-uno").await.unwrap();
        open_board(&state, "esp32-devkitc").await.unwrap();
        open_board(&state, "arduino-uno").await.unwrap();

        let ids: Vec<_> = get_recents(&state).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["arduino-uno", "esp32-devkitc"]);
    }

    #[tokio::test]
    async fn test_open_missing_board_records_nothing() {
        let state = builtin_container().await;

        assert_eq!(open_board(&state, "esp8266").await.unwrap_err().code, ErrorCode::NotFound);
        assert!(get_recents(&state).is_empty());
    }

    #[tokio::test]
    async fn test_open_board_reports_favorite() {
        let state = builtin_container().await;
        toggle_favorite(&state, "arduino-uno").await.unwrap();

        let detail = open_board(&state, "arduino-uno").await.unwrap();
        assert!(detail.is_favorite);
    }
}
