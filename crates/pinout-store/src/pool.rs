//! # Preferences Database
//!
//! Opens the SQLite file that backs favorites and recents.
//!
//! ## Open Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Database::open(DbConfig::new(path))                                   │
//! │       │                                                                 │
//! │       ├── create file if missing (mode=rwc)                            │
//! │       ├── WAL journal, NORMAL synchronous                              │
//! │       ├── pool of at most `max_connections`                            │
//! │       ▼                                                                 │
//! │  migrations::run_migrations ──► kv_store table exists                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bootstrap: db.ping() ──► db.kv() ──► BoardPreferences                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store holds two small keys, so the pool stays tiny. WAL lets a
//! favorites read proceed while a recents write is in flight.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::migrations;
use crate::repository::kv::SqliteKeyValueStore;

/// Where the database lives and how many connections it may use.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_path: PathBuf,

    /// Default: 2 (one per key)
    pub max_connections: u32,

    /// How long `open` and each query wait for a connection.
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 2,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// In-memory database for tests.
    ///
    /// Each SQLite memory database belongs to one connection, so the pool is
    /// pinned to a single connection.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Open preferences database.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects and brings the schema up to date.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Pool open, migrations applied
    /// * `Err(StoreError::ConnectionFailed)` - File could not be opened
    /// * `Err(StoreError::MigrationFailed)` - Schema could not be applied
    pub async fn open(config: DbConfig) -> StoreResult<Self> {
        info!(path = %config.database_path.display(), "Opening database");

        let url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Pool ready");

        migrations::run_migrations(&pool).await?;
        Ok(Database { pool })
    }

    /// Round-trips a trivial query.
    ///
    /// ## Returns
    /// * `Err(StoreError::ConnectionFailed)` - Pool closed or the file is unusable
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }

    /// Key-value store over the `kv_store` table.
    pub fn kv(&self) -> SqliteKeyValueStore {
        SqliteKeyValueStore::new(self.pool.clone())
    }

    /// Closes the pool. Later store calls fail.
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }
}
