//! # Pin Diagram Mapper
//!
//! Places pins on a fixed grid and colors them by electrical type, producing
//! what the display surface draws as board markers.
//!
//! ## Grid Geometry
//! ```text
//! ┌──────────────────────────── boardWidthPx ────────────────────────────┐
//! │ margin                                                               │
//! │   ┌──────┬──────┬──────┬─ ─ ─ ─┬──────┐                              │
//! │   │  ●1  │  ●2  │  ●3  │       │  ●10 │  row 0   (rowHeightPx tall)  │
//! │   ├──────┼──────┼──────┼─ ─ ─ ─┼──────┤                              │
//! │   │  ●11 │  ●12 │  ...                   row 1                       │
//! │   └──────┴──────┘                                                    │
//! │    cell width = (boardWidthPx - 2*margin) / columns                  │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//!   pin i  →  col = i mod columns, row = i div columns
//!   x = margin + col * cellWidth   + halfCell
//!   y = margin + row * rowHeightPx + halfCell
//! ```
//!
//! Pins are placed by their position in the input sequence, not by pin
//! number. Output is deterministic: the same input always yields
//! bit-identical coordinates.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::types::{PinDefinition, PinType};

/// Distance from the board edge to the first grid cell.
pub const MARGIN: f64 = 20.0;

/// Offset from a cell's corner to the marker center.
pub const HALF_CELL: f64 = 15.0;

// =============================================================================
// Options
// =============================================================================

/// Grid parameters other than the board width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Vertical distance between rows.
    pub row_height_px: f64,

    /// Pins per row. Zero is treated as one.
    pub columns: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            row_height_px: 40.0,
            columns: 10,
        }
    }
}

impl LayoutOptions {
    fn column_count(&self) -> u32 {
        self.columns.max(1)
    }
}

// =============================================================================
// Colors
// =============================================================================

/// Marker color. Serializes to the CSS color value the display draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PinColor {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "purple")]
    Purple,
    #[serde(rename = "gray")]
    Gray,
    /// The pin currently open in the detail panel.
    #[serde(rename = "#ff5722")]
    Selected,
}

impl PinColor {
    /// Fixed type → color lookup. Missing types are gray.
    pub fn for_type(pin_type: Option<PinType>) -> PinColor {
        match pin_type {
            Some(PinType::Power) => PinColor::Red,
            Some(PinType::Ground) => PinColor::Black,
            Some(PinType::Digital) => PinColor::Blue,
            Some(PinType::Analog) => PinColor::Green,
            Some(PinType::Communication) => PinColor::Orange,
            Some(PinType::Special) => PinColor::Purple,
            None => PinColor::Gray,
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            PinColor::Red => "red",
            PinColor::Black => "black",
            PinColor::Blue => "blue",
            PinColor::Green => "green",
            PinColor::Orange => "orange",
            PinColor::Purple => "purple",
            PinColor::Gray => "gray",
            PinColor::Selected => "#ff5722",
        }
    }
}

impl std::fmt::Display for PinColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

// =============================================================================
// Input & Output Pins
// =============================================================================

/// What the mapper needs to know about a pin.
///
/// `pin_type` is optional and lenient: a type name this model does not know
/// deserializes to `None` and renders gray instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramPin {
    pub number: u32,
    pub name: String,
    pub function: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_pin_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub pin_type: Option<PinType>,
}

fn lenient_pin_type<'de, D>(deserializer: D) -> Result<Option<PinType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PinType::parse))
}

impl From<&PinDefinition> for DiagramPin {
    fn from(pin: &PinDefinition) -> Self {
        DiagramPin {
            number: pin.number,
            name: pin.name.clone(),
            function: pin.function.clone(),
            pin_type: Some(pin.pin_type),
        }
    }
}

/// A pin with its diagram position and display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PositionedPin {
    pub number: u32,
    pub name: String,
    pub function: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub pin_type: Option<PinType>,
    pub x: f64,
    pub y: f64,
    pub color: PinColor,
}

// =============================================================================
// Mapping
// =============================================================================

/// Lays `pins` out on the grid in sequence order.
///
/// ## Example
/// ```rust
/// use pinout_core::{layout, DiagramPin, LayoutOptions, PinColor, PinType};
///
/// let pins = vec![DiagramPin {
///     number: 1,
///     name: "GND".into(),
///     function: "Ground".into(),
///     pin_type: Some(PinType::Ground),
/// }];
///
/// let placed = layout(&pins, 360.0, LayoutOptions::default());
/// assert_eq!((placed[0].x, placed[0].y), (35.0, 35.0));
/// assert_eq!(placed[0].color, PinColor::Black);
/// ```
pub fn layout(pins: &[DiagramPin], board_width_px: f64, options: LayoutOptions) -> Vec<PositionedPin> {
    let columns = options.column_count();
    let cell_width = (board_width_px - 2.0 * MARGIN) / f64::from(columns);

    pins.iter()
        .enumerate()
        .map(|(index, pin)| {
            let index = index as u32;
            let col = index % columns;
            let row = index / columns;

            PositionedPin {
                number: pin.number,
                name: pin.name.clone(),
                function: pin.function.clone(),
                pin_type: pin.pin_type,
                x: MARGIN + f64::from(col) * cell_width + HALF_CELL,
                y: MARGIN + f64::from(row) * options.row_height_px + HALF_CELL,
                color: PinColor::for_type(pin.pin_type),
            }
        })
        .collect()
}

/// Lays out a board's own pins.
pub fn layout_board(pins: &[PinDefinition], board_width_px: f64, options: LayoutOptions) -> Vec<PositionedPin> {
    let input: Vec<DiagramPin> = pins.iter().map(DiagramPin::from).collect();
    layout(&input, board_width_px, options)
}

/// Recolors the marker whose number is `selected`; every other pin keeps
/// its type color.
pub fn highlight(pins: &[PositionedPin], selected: Option<u32>) -> Vec<PositionedPin> {
    pins.iter()
        .map(|pin| {
            let color = if Some(pin.number) == selected {
                PinColor::Selected
            } else {
                PinColor::for_type(pin.pin_type)
            };
            PositionedPin {
                color,
                ..pin.clone()
            }
        })
        .collect()
}

/// Canvas height needed to show `pin_count` pins.
pub fn diagram_height(pin_count: usize, options: LayoutOptions) -> f64 {
    let columns = options.column_count() as usize;
    let rows = pin_count.div_ceil(columns);
    2.0 * MARGIN + rows as f64 * options.row_height_px
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(number: u32, pin_type: Option<PinType>) -> DiagramPin {
        DiagramPin {
            number,
            name: format!("P{}", number),
            function: "GPIO".to_string(),
            pin_type,
        }
    }

    #[test]
    fn test_grid_coordinates() {
        let pins: Vec<_> = (1..=12).map(|n| pin(n, Some(PinType::Digital))).collect();
        let placed = layout(&pins, 360.0, LayoutOptions::default());

        // cell width = (360 - 40) / 10 = 32
        assert_eq!((placed[0].x, placed[0].y), (35.0, 35.0));
        assert_eq!((placed[1].x, placed[1].y), (67.0, 35.0));
        assert_eq!((placed[9].x, placed[9].y), (323.0, 35.0));
        // wraps to the second row
        assert_eq!((placed[10].x, placed[10].y), (35.0, 75.0));
        assert_eq!((placed[11].x, placed[11].y), (67.0, 75.0));
    }

    #[test]
    fn test_position_follows_sequence_not_number() {
        let pins = vec![pin(7, None), pin(3, None)];
        let placed = layout(&pins, 360.0, LayoutOptions::default());

        assert_eq!(placed[0].number, 7);
        assert_eq!(placed[0].x, 35.0);
        assert_eq!(placed[1].number, 3);
        assert_eq!(placed[1].x, 67.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let pins: Vec<_> = (1..=23).map(|n| pin(n, Some(PinType::Analog))).collect();
        let options = LayoutOptions {
            row_height_px: 33.3,
            columns: 7,
        };

        let first = layout(&pins, 411.7, options);
        let second = layout(&pins, 411.7, options);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_color_lookup() {
        let types = [
            (Some(PinType::Power), PinColor::Red),
            (Some(PinType::Ground), PinColor::Black),
            (Some(PinType::Digital), PinColor::Blue),
            (Some(PinType::Analog), PinColor::Green),
            (Some(PinType::Communication), PinColor::Orange),
            (Some(PinType::Special), PinColor::Purple),
            (None, PinColor::Gray),
        ];

        let pins: Vec<_> = types.iter().enumerate().map(|(i, (t, _))| pin(i as u32 + 1, *t)).collect();
        let placed = layout(&pins, 360.0, LayoutOptions::default());

        for (placed, (_, expected)) in placed.iter().zip(types.iter()) {
            assert_eq!(placed.color, *expected);
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_gray() {
        let pin: DiagramPin =
            serde_json::from_str(r#"{"number":1,"name":"X","function":"?","type":"pwm"}"#).unwrap();
        assert_eq!(pin.pin_type, None);

        let missing: DiagramPin = serde_json::from_str(r#"{"number":2,"name":"Y","function":"?"}"#).unwrap();
        assert_eq!(missing.pin_type, None);

        let placed = layout(&[pin, missing], 360.0, LayoutOptions::default());
        assert!(placed.iter().all(|p| p.color == PinColor::Gray));
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        let pins = vec![pin(1, None), pin(2, None)];
        let options = LayoutOptions {
            row_height_px: 40.0,
            columns: 0,
        };

        let placed = layout(&pins, 100.0, options);
        assert_eq!((placed[0].x, placed[0].y), (35.0, 35.0));
        assert_eq!((placed[1].x, placed[1].y), (35.0, 75.0));
    }

    #[test]
    fn test_highlight_selected_pin() {
        let pins = vec![pin(1, Some(PinType::Power)), pin(2, Some(PinType::Ground))];
        let placed = layout(&pins, 360.0, LayoutOptions::default());

        let highlighted = highlight(&placed, Some(2));
        assert_eq!(highlighted[0].color, PinColor::Red);
        assert_eq!(highlighted[1].color, PinColor::Selected);
        assert_eq!(highlighted[1].x, placed[1].x);

        let cleared = highlight(&highlighted, None);
        assert_eq!(cleared, placed);
    }

    #[test]
    fn test_diagram_height() {
        let options = LayoutOptions::default();
        assert_eq!(diagram_height(0, options), 40.0);
        assert_eq!(diagram_height(10, options), 80.0);
        assert_eq!(diagram_height(11, options), 120.0);
    }

    #[test]
    fn test_color_serializes_to_css() {
        assert_eq!(serde_json::to_string(&PinColor::Selected).unwrap(), r##""#ff5722""##);
        assert_eq!(serde_json::to_string(&PinColor::Gray).unwrap(), r#""gray""#);
        assert_eq!(PinColor::Orange.to_string(), "orange");
    }
}
