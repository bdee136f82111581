//! # Domain Types
//!
//! Core domain types used throughout MicroPinout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐                                              │
//! │  │   BoardDefinition    │                                              │
//! │  │  ──────────────────  │      ┌─────────────────┐                     │
//! │  │  id (stable, unique) │─────►│   BoardSpecs    │                     │
//! │  │  name, manufacturer  │      │  processor      │                     │
//! │  │  category            │      │  voltage, ...   │                     │
//! │  │  dimensions          │      └─────────────────┘                     │
//! │  │  pins ───────────────┼──┐                                           │
//! │  └──────────────────────┘  │   ┌─────────────────┐   ┌─────────────┐  │
//! │                            └──►│  PinDefinition  │──►│   PinType   │  │
//! │                                │  number (>= 1)  │   │  digital    │  │
//! │                                │  x, y           │   │  analog     │  │
//! │                                │  name, function │   │  power ...  │  │
//! │                                └─────────────────┘   └─────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Every type serializes as camelCase JSON, the same shape the catalog files
//! and the front-end use. The pin type is carried in a field named `type`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Pin Type
// =============================================================================

/// Electrical role of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PinType {
    Digital,
    Analog,
    Power,
    Ground,
    Communication,
    Special,
}

impl PinType {
    /// Parses a pin type name, returning `None` for anything unrecognized.
    ///
    /// Matching is case-insensitive. Used where foreign data may carry pin
    /// types this model does not know about.
    pub fn parse(value: &str) -> Option<PinType> {
        match value.trim().to_lowercase().as_str() {
            "digital" => Some(PinType::Digital),
            "analog" => Some(PinType::Analog),
            "power" => Some(PinType::Power),
            "ground" => Some(PinType::Ground),
            "communication" => Some(PinType::Communication),
            "special" => Some(PinType::Special),
            _ => None,
        }
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PinType::Digital => "digital",
            PinType::Analog => "analog",
            PinType::Power => "power",
            PinType::Ground => "ground",
            PinType::Communication => "communication",
            PinType::Special => "special",
        }
    }
}

impl std::fmt::Display for PinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pin Definition
// =============================================================================

/// A single labeled contact point on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PinDefinition {
    /// Pin number, unique within its board and >= 1.
    /// Need not match the pin's position in the board's pin list.
    pub number: u32,

    /// Horizontal position in board coordinates.
    #[serde(default)]
    pub x: f64,

    /// Vertical position in board coordinates.
    #[serde(default)]
    pub y: f64,

    /// Short label printed on the board (e.g. "D13", "3.3V").
    pub name: String,

    /// Human-readable description of what the pin does.
    pub function: String,

    /// Electrical role.
    #[serde(rename = "type")]
    pub pin_type: PinType,

    /// Operating voltage, when meaningful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub voltage: Option<String>,

    /// Alternate functions in board documentation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[ts(as = "Option<Vec<String>>", optional)]
    pub alternative_functions: Vec<String>,

    /// Display color, derived from `pin_type` when the catalog is built.
    /// Any value in the source JSON is replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<String>,
}

// =============================================================================
// Board Specs
// =============================================================================

/// Hardware specifications of a board.
///
/// Only `processor` and `voltage` are always present. Missing optional
/// fields are simply not displayed; see [`BoardSpecs::display_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BoardSpecs {
    pub processor: String,
    pub voltage: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub digital_pins: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub analog_inputs: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub clock_speed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub flash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ram: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    #[ts(as = "Option<Vec<String>>", optional)]
    pub connectivity: BTreeSet<String>,
}

impl BoardSpecs {
    /// Returns the label/value pairs to show on a detail view.
    ///
    /// Absent optional specs are skipped rather than shown as blanks.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Processor", self.processor.clone()),
            ("Voltage", self.voltage.clone()),
        ];

        if let Some(pins) = self.digital_pins {
            rows.push(("Digital Pins", pins.to_string()));
        }
        if let Some(inputs) = self.analog_inputs {
            rows.push(("Analog Inputs", inputs.to_string()));
        }
        if let Some(ref speed) = self.clock_speed {
            rows.push(("Clock Speed", speed.clone()));
        }
        if let Some(ref flash) = self.flash {
            rows.push(("Flash", flash.clone()));
        }
        if let Some(ref ram) = self.ram {
            rows.push(("RAM", ram.clone()));
        }
        if !self.connectivity.is_empty() {
            let joined = self
                .connectivity
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            rows.push(("Connectivity", joined));
        }

        rows
    }
}

// =============================================================================
// Dimensions & Assets
// =============================================================================

/// Physical board outline in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Opaque reference to an image resource.
///
/// The display layer resolves it; the core never interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        AssetHandle(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Board Definition
// =============================================================================

/// A microcontroller or development board reference entry.
///
/// ## Identity
/// `id` is globally unique and stable; it is the foreign key used by
/// favorites, recents and navigation. It never changes after creation, and
/// `pins` is fixed for a given catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BoardDefinition {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub category: String,
    pub description: String,
    pub specs: BoardSpecs,

    /// Product photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image: Option<AssetHandle>,

    /// Detailed pinout artwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub pinout_image: Option<AssetHandle>,

    /// Documentation URL.
    pub documentation: String,

    pub dimensions: Dimensions,

    /// Pins in board definition order.
    pub pins: Vec<PinDefinition>,
}

impl BoardDefinition {
    /// Looks up a pin by its number (not its list position).
    pub fn pin(&self, number: u32) -> Option<&PinDefinition> {
        self.pins.iter().find(|p| p.number == number)
    }

    /// Returns true if the lowercase `needle` occurs in the name,
    /// description or manufacturer.
    ///
    /// The caller lowercases once so a whole-catalog search does not
    /// re-lowercase the query per board.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.manufacturer.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNO_JSON: &str = r#"{
        "id": "arduino-uno",
        "name": "Arduino Uno",
        "manufacturer": "Arduino",
        "category": "Development Board",
        "description": "Standard Arduino board based on the ATmega328P",
        "specs": {
            "processor": "ATmega328P",
            "voltage": "5V",
            "digitalPins": 14,
            "analogInputs": 6,
            "clockSpeed": "16 MHz"
        },
        "image": "microp/ArduinoUnoR3.png",
        "documentation": "https://docs.arduino.cc/hardware/uno-rev3",
        "dimensions": { "width": 400, "height": 280 },
        "pins": [
            {
                "number": 1, "x": 50, "y": 30,
                "name": "Reset", "function": "Reset the microcontroller",
                "type": "power", "voltage": "-",
                "alternativeFunctions": ["Reset"]
            },
            {
                "number": 2, "x": 50, "y": 60,
                "name": "3.3V", "function": "3.3V output",
                "type": "power", "voltage": "3.3V",
                "alternativeFunctions": []
            }
        ]
    }"#;

    #[test]
    fn test_board_deserializes_from_catalog_json() {
        let board: BoardDefinition = serde_json::from_str(UNO_JSON).unwrap();

        assert_eq!(board.id, "arduino-uno");
        assert_eq!(board.specs.digital_pins, Some(14));
        assert_eq!(board.specs.flash, None);
        assert_eq!(board.image, Some(AssetHandle::new("microp/ArduinoUnoR3.png")));
        assert_eq!(board.pinout_image, None);
        assert_eq!(board.pins.len(), 2);
        assert_eq!(board.pins[0].pin_type, PinType::Power);
        assert_eq!(board.pins[0].alternative_functions, vec!["Reset"]);
        assert!(board.pins[1].alternative_functions.is_empty());
    }

    #[test]
    fn test_pin_serializes_type_field() {
        let board: BoardDefinition = serde_json::from_str(UNO_JSON).unwrap();
        let json = serde_json::to_value(&board.pins[0]).unwrap();

        assert_eq!(json["type"], "power");
        assert_eq!(json["alternativeFunctions"][0], "Reset");
        assert!(json.get("color").is_none());
    }

    #[test]
    fn test_skipped_empty_lists_are_optional_in_bindings() {
        let pin = PinDefinition::decl();
        assert!(pin.contains("alternativeFunctions?: Array<string>"), "{}", pin);

        let specs = BoardSpecs::decl();
        assert!(specs.contains("connectivity?: Array<string>"), "{}", specs);

        // the serialized form agrees: empty lists are absent
        let board: BoardDefinition = serde_json::from_str(UNO_JSON).unwrap();
        assert!(serde_json::to_value(&board.pins[1]).unwrap().get("alternativeFunctions").is_none());
        assert!(serde_json::to_value(&board.specs).unwrap().get("connectivity").is_none());
    }

    #[test]
    fn test_pin_lookup_by_number() {
        let board: BoardDefinition = serde_json::from_str(UNO_JSON).unwrap();

        assert_eq!(board.pin(2).map(|p| p.name.as_str()), Some("3.3V"));
        assert!(board.pin(99).is_none());
    }

    #[test]
    fn test_pin_type_parse() {
        assert_eq!(PinType::parse("GROUND"), Some(PinType::Ground));
        assert_eq!(PinType::parse(" analog "), Some(PinType::Analog));
        assert_eq!(PinType::parse("pwm"), None);
        assert_eq!(PinType::Communication.to_string(), "communication");
    }

    #[test]
    fn test_display_rows_skip_missing_specs() {
        let specs = BoardSpecs {
            processor: "RP2040".to_string(),
            voltage: "3.3V".to_string(),
            ram: Some("264 KB".to_string()),
            ..Default::default()
        };

        let labels: Vec<_> = specs.display_rows().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Processor", "Voltage", "RAM"]);
    }

    #[test]
    fn test_display_rows_join_connectivity() {
        let specs = BoardSpecs {
            processor: "ESP32".to_string(),
            voltage: "3.3V".to_string(),
            connectivity: ["WiFi", "Bluetooth"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };

        let rows = specs.display_rows();
        assert_eq!(rows.last().unwrap(), &("Connectivity", "Bluetooth, WiFi".to_string()));
    }
}
