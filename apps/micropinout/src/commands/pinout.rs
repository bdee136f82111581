//! # Pinout Commands
//!
//! The interactive pin diagram on the board detail screen and the pin detail
//! panel it opens.
//!
//! ## Diagram Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_diagram("arduino-uno", width = None)                               │
//! │       │                                                                 │
//! │       ├── width: argument or config.diagram.board_width_px             │
//! │       ├── grid:  config row height + columns                           │
//! │       ▼                                                                 │
//! │  layout_board(pins) ──► highlight(selected pin) ──► DiagramDto          │
//! │                                                                         │
//! │  tap marker ──► select_pin(board, n) ──► PinDetailDto                  │
//! │              └─ next get_diagram draws pin n in the selection color    │
//! │  close panel ──► clear_pin_selection()                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use pinout_core::layout::{diagram_height, highlight, layout_board, MARGIN};
use pinout_core::validation::validate_board_id;
use pinout_core::{PinColor, PinDefinition, PinType, PositionedPin};

use crate::error::ApiError;
use crate::state::{ConfigState, PinoutStateContainer};

/// A laid-out diagram ready to draw.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDto {
    pub board_id: String,
    pub width: f64,
    pub height: f64,
    pub pins: Vec<PositionedPin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_pin: Option<u32>,
}

/// Contents of the pin detail panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDetailDto {
    pub board_id: String,
    pub number: u32,
    pub name: String,
    pub function: String,
    #[serde(rename = "type")]
    pub pin_type: PinType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    pub alternative_functions: Vec<String>,
    pub color: PinColor,
}

impl PinDetailDto {
    fn from_pin(board_id: &str, pin: &PinDefinition) -> Self {
        PinDetailDto {
            board_id: board_id.to_string(),
            number: pin.number,
            name: pin.name.clone(),
            function: pin.function.clone(),
            pin_type: pin.pin_type,
            voltage: pin.voltage.clone(),
            alternative_functions: pin.alternative_functions.clone(),
            color: PinColor::for_type(Some(pin.pin_type)),
        }
    }
}

/// Lays out a board's pins, marking the selected pin if it is on this board.
///
/// ## Arguments
/// * `width` - Rendered board width; falls back to the configured width.
pub fn get_diagram(
    state: &PinoutStateContainer,
    config: &ConfigState,
    board_id: &str,
    width: Option<f64>,
) -> Result<DiagramDto, ApiError> {
    validate_board_id(board_id)?;

    let width = width.unwrap_or(config.diagram.board_width_px);
    if !width.is_finite() || width <= 2.0 * MARGIN {
        return Err(ApiError::validation(format!(
            "Diagram width must be greater than {}",
            2.0 * MARGIN
        )));
    }
    let options = config.layout_options();

    let dto = state.with_state(|s| {
        let board = s.catalog().get_by_id(board_id)?;
        let selected_pin = s.selected_pin_on(board_id);
        let pins = highlight(&layout_board(&board.pins, width, options), selected_pin);

        Ok::<_, ApiError>(DiagramDto {
            board_id: board_id.to_string(),
            width,
            height: diagram_height(board.pins.len(), options),
            pins,
            selected_pin,
        })
    })?;

    debug!(board_id = %board_id, width, pins = dto.pins.len(), "get_diagram command");
    Ok(dto)
}

/// Opens the detail panel for a pin.
pub fn select_pin(
    state: &PinoutStateContainer,
    board_id: &str,
    pin_number: u32,
) -> Result<PinDetailDto, ApiError> {
    debug!(board_id = %board_id, pin_number, "select_pin command");
    validate_board_id(board_id)?;

    state.with_state_mut(|s| {
        let pin = s.select_pin(board_id, pin_number)?;
        Ok::<_, ApiError>(PinDetailDto::from_pin(board_id, pin))
    })
}

/// Closes the detail panel.
pub fn clear_pin_selection(state: &PinoutStateContainer) {
    debug!("clear_pin_selection command");
    state.with_state_mut(|s| s.clear_selection());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::builtin_container;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_diagram_uses_configured_grid() {
        let state = builtin_container().await;
        let config = ConfigState::default();

        let diagram = get_diagram(&state, &config, "arduino-uno", None).unwrap();
        assert_eq!(diagram.width, 360.0);
        assert_eq!(diagram.pins.len(), 27);
        // 27 pins over 10 columns is 3 rows
        assert_eq!(diagram.height, 40.0 + 3.0 * 40.0);

        // first pin sits at the margin plus half a cell; pin 11 starts row two
        assert_eq!((diagram.pins[0].x, diagram.pins[0].y), (35.0, 35.0));
        assert_eq!((diagram.pins[10].x, diagram.pins[10].y), (35.0, 75.0));
        assert!(diagram.selected_pin.is_none());
    }

    #[tokio::test]
    async fn test_diagram_width_override() {
        let state = builtin_container().await;
        let mut config = ConfigState::default();
        config.diagram.columns = 2;

        let diagram = get_diagram(&state, &config, "arduino-uno", Some(140.0)).unwrap();
        // cell width (140 - 40) / 2 = 50
        assert_eq!(diagram.pins[1].x, 20.0 + 50.0 + 15.0);

        let err = get_diagram(&state, &config, "arduino-uno", Some(30.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_selection_highlights_one_pin() {
        let state = builtin_container().await;
        let config = ConfigState::default();

        let detail = select_pin(&state, "arduino-uno", 1).unwrap();
        assert_eq!(detail.name, "Reset");

        let diagram = get_diagram(&state, &config, "arduino-uno", None).unwrap();
        assert_eq!(diagram.selected_pin, Some(1));
        let selected: Vec<_> = diagram
            .pins
            .iter()
            .filter(|p| p.color == PinColor::Selected)
            .map(|p| p.number)
            .collect();
        assert_eq!(selected, vec![1]);

        // selection on another board does not leak
        let other = get_diagram(&state, &config, "rpi-pico", None).unwrap();
        assert!(other.pins.iter().all(|p| p.color != PinColor::Selected));

        clear_pin_selection(&state);
        let diagram = get_diagram(&state, &config, "arduino-uno", None).unwrap();
        assert!(diagram.selected_pin.is_none());
    }

    #[tokio::test]
    async fn test_select_missing_pin() {
        let state = builtin_container().await;

        let err = select_pin(&state, "arduino-uno", 999).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = select_pin(&state, "esp8266", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_pin_detail_serialization() {
        let state = builtin_container().await;
        let detail = select_pin(&state, "arduino-uno", 1).unwrap();
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["boardId"], "arduino-uno");
        assert!(json["type"].is_string());
        assert!(json["alternativeFunctions"].is_array());
    }
}
