//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key context and categorization        │
//! │       │                                                                 │
//! │       ├──► Reads: logged and replaced with an empty list               │
//! │       │                                                                 │
//! │       └──► Writes: returned to the state container, which logs it      │
//! │            and keeps the in-memory value                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed.
    ///
    /// ## When This Occurs
    /// - Backend unavailable
    /// - Query error on the `kv_store` table
    #[error("Failed to read '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    /// Writing a key failed.
    ///
    /// ## When This Occurs
    /// - Disk full or read-only database
    /// - Pool closed during shutdown
    #[error("Failed to write '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// A stored value is not the JSON shape expected for its key.
    #[error("Malformed value for '{key}': {reason}")]
    Malformed { key: String, reason: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn read_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::ReadFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::WriteFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Malformed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convert sqlx errors that carry no key context.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → StoreError::ConnectionFailed
/// sqlx::Error::PoolClosed     → StoreError::ConnectionFailed
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                StoreError::ConnectionFailed("Timed out waiting for a connection".to_string())
            }
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
