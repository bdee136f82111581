//! # Validation Module
//!
//! Validation for catalog data and user input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field presence and types                                          │
//! │  └── Pin type names                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Board ids present and unique                                      │
//! │  ├── Pin numbers >= 1 and unique per board                             │
//! │  └── Board dimensions positive                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Commands                                                     │
//! │  ├── Board id argument well-formed                                     │
//! │  └── Search query length                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pinout_core::validation::{validate_board_id, validate_search_query};
//!
//! assert!(validate_board_id("arduino-uno").is_ok());
//! assert!(validate_board_id("").is_err());
//!
//! assert_eq!(validate_search_query("  esp ").unwrap(), "esp");
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::BoardDefinition;
use crate::MAX_SEARCH_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a board id.
const MAX_BOARD_ID_LEN: usize = 64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a board id passed to a command.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - No whitespace or control characters
pub fn validate_board_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "board id".to_string(),
        });
    }

    if id.len() > MAX_BOARD_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "board id".to_string(),
            max: MAX_BOARD_ID_LEN,
        });
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "board id".to_string(),
            reason: "must not contain whitespace or control characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches the whole catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a single board definition.
///
/// ## Rules
/// - Id is not empty
/// - Width and height are positive
/// - Every pin number is >= 1 and unique within the board
pub fn validate_board(board: &BoardDefinition) -> ValidationResult<()> {
    if board.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "board id".to_string(),
        });
    }

    if board.dimensions.width == 0 {
        return Err(ValidationError::MustBePositive {
            field: format!("width of board {}", board.id),
        });
    }
    if board.dimensions.height == 0 {
        return Err(ValidationError::MustBePositive {
            field: format!("height of board {}", board.id),
        });
    }

    let mut seen = HashSet::with_capacity(board.pins.len());
    for pin in &board.pins {
        if pin.number == 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("pin number on board {}", board.id),
            });
        }
        if !seen.insert(pin.number) {
            return Err(ValidationError::Duplicate {
                field: format!("pin number on board {}", board.id),
                value: pin.number.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a whole catalog: every board, plus id uniqueness across boards.
pub fn validate_catalog(boards: &[BoardDefinition]) -> ValidationResult<()> {
    let mut ids = HashSet::with_capacity(boards.len());

    for board in boards {
        validate_board(board)?;

        if !ids.insert(board.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "board id".to_string(),
                value: board.id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSpecs, Dimensions, PinDefinition, PinType};

    fn pin(number: u32) -> PinDefinition {
        PinDefinition {
            number,
            x: 0.0,
            y: 0.0,
            name: format!("P{}", number),
            function: "GPIO".to_string(),
            pin_type: PinType::Digital,
            voltage: None,
            alternative_functions: Vec::new(),
            color: None,
        }
    }

    fn board(id: &str, pins: Vec<PinDefinition>) -> BoardDefinition {
        BoardDefinition {
            id: id.to_string(),
            name: format!("Board {}", id),
            manufacturer: "Acme".to_string(),
            category: "Development Board".to_string(),
            description: String::new(),
            specs: BoardSpecs::default(),
            image: None,
            pinout_image: None,
            documentation: String::new(),
            dimensions: Dimensions {
                width: 100,
                height: 50,
            },
            pins,
        }
    }

    #[test]
    fn test_validate_board_id() {
        assert!(validate_board_id("arduino-uno").is_ok());
        assert!(validate_board_id("esp32_devkitc").is_ok());
        assert!(validate_board_id("esp32-s3.v1").is_ok());

        assert!(validate_board_id("").is_err());
        assert!(validate_board_id("   ").is_err());
        assert!(validate_board_id("has space").is_err());
        assert!(validate_board_id("tab\there").is_err());
        assert!(validate_board_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query("  uno  ").unwrap(), "uno");
        assert!(validate_search_query(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_board_accepts_any_nonempty_id() {
        let mut b = board("esp32-s3.v1", vec![pin(1)]);
        b.name = String::new();
        assert!(validate_board(&b).is_ok());

        assert!(matches!(
            validate_board(&board(" ", vec![])),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_board_pins() {
        assert!(validate_board(&board("a", vec![pin(1), pin(2), pin(7)])).is_ok());

        // Pin numbering starts at 1
        assert!(matches!(
            validate_board(&board("a", vec![pin(0)])),
            Err(ValidationError::MustBePositive { .. })
        ));

        assert!(matches!(
            validate_board(&board("a", vec![pin(3), pin(3)])),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_board_dimensions() {
        let mut b = board("a", vec![]);
        b.dimensions.width = 0;
        assert!(validate_board(&b).is_err());

        let mut b = board("a", vec![]);
        b.dimensions.height = 0;
        assert!(validate_board(&b).is_err());
    }

    #[test]
    fn test_validate_catalog_duplicate_ids() {
        let boards = vec![board("uno", vec![]), board("esp32", vec![])];
        assert!(validate_catalog(&boards).is_ok());

        let boards = vec![board("uno", vec![]), board("uno", vec![])];
        assert!(matches!(
            validate_catalog(&boards),
            Err(ValidationError::Duplicate { .. })
        ));
    }
}
