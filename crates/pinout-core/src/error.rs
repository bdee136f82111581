//! # Error Types
//!
//! Domain-specific error types for pinout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pinout-core errors (this file)                                        │
//! │  ├── CoreError        - Lookup and catalog failures                    │
//! │  └── ValidationError  - Malformed boards, pins or input                │
//! │                                                                         │
//! │  pinout-store errors (separate crate)                                  │
//! │  └── StoreError       - Persistence read/write failures                │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front-end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No board in the catalog has the requested id.
    ///
    /// ## When This Occurs
    /// - A stale favorite/recent id outlived its board
    /// - A navigation request carries a mistyped id
    ///
    /// Callers are expected to handle this case explicitly; an absent id is
    /// never a panic.
    #[error("Board not found: {0}")]
    BoardNotFound(String),

    /// A board has no pin with the requested number.
    #[error("Pin {pin_number} not found on board {board_id}")]
    PinNotFound { board_id: String, pin_number: u32 },

    /// The catalog data could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Validation errors for catalog data and user input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (board id, pin number).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::BoardNotFound("esp8266".to_string());
        assert_eq!(err.to_string(), "Board not found: esp8266");

        let err = CoreError::PinNotFound {
            board_id: "arduino-uno".to_string(),
            pin_number: 42,
        };
        assert_eq!(err.to_string(), "Pin 42 not found on board arduino-uno");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "board id".to_string(),
            value: "esp32".to_string(),
        };
        assert_eq!(err.to_string(), "board id 'esp32' already exists");

        let err = ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "query must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
