//! # MicroPinout Library
//!
//! Application layer for the microcontroller pinout reference: the state
//! container, the commands the front-end calls, configuration and startup.
//!
//! ## Module Organization
//! ```text
//! micropinout/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── main.rs         ◄─── Headless CLI over the commands
//! ├── catalog.rs      ◄─── Catalog sources (built-in, JSON file)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── pinout.rs   ◄─── Pinout state + container
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── board.rs    ◄─── List/search/detail
//! │   ├── library.rs  ◄─── Favorites & recents
//! │   ├── pinout.rs   ◄─── Pin diagram & detail panel
//! │   ├── catalog.rs  ◄─── Catalog status & reload
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Load Configuration ───────────────────────────────────────────────► │
//! │     • config.toml, then MICROPINOUT_* environment overrides             │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │                                                                         │
//! │  3. Open Storage ─────────────────────────────────────────────────────► │
//! │     • sqlite: platform data dir (or override), migrations, ping         │
//! │     • memory: nothing persists                                          │
//! │                                                                         │
//! │  4. Hydrate favorites & recents from storage ─────────────────────────► │
//! │                                                                         │
//! │  5. Load the board catalog ───────────────────────────────────────────► │
//! │     • failure is recorded in state, startup continues                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pinout_store::{BoardPreferences, Database, DbConfig, KeyValueStore, MemoryKeyValueStore};

use error::{ApiError, ConfigError, ConfigResult};
use state::{ConfigState, PinoutStateContainer, StorageBackend};

/// Everything a front-end needs after startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: ConfigState,
    pub state: PinoutStateContainer,

    /// Open database handle when the sqlite backend is in use.
    pub database: Option<Database>,
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pinout_store=trace` - Trace storage only
/// - Default: INFO, DEBUG for the app crate
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,micropinout=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.micropinout.micropinout/micropinout.db`
/// - **Windows**: `%APPDATA%\micropinout\micropinout\data\micropinout.db`
/// - **Linux**: `~/.local/share/micropinout/micropinout.db`
///
/// `storage.database_path` (or `MICROPINOUT_DB_PATH`) takes precedence.
pub fn database_path(config: &ConfigState) -> ConfigResult<PathBuf> {
    if let Some(ref path) = config.storage.database_path {
        return Ok(path.clone());
    }

    let dirs = ProjectDirs::from("com", "micropinout", "micropinout")
        .ok_or_else(|| ConfigError::Invalid("Could not determine app data directory".into()))?;

    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("micropinout.db"))
}

/// Opens storage, hydrates favorites and recents, and loads the catalog.
///
/// A catalog load failure does not fail startup: the error is recorded in
/// the state and the app comes up with an empty catalog.
pub async fn bootstrap(config: ConfigState) -> Result<AppContext, ApiError> {
    let (store, database): (Arc<dyn KeyValueStore>, Option<Database>) = match config.storage.backend {
        StorageBackend::Sqlite => {
            let path = database_path(&config)?;
            info!(path = %path.display(), "Opening preferences database");

            let db = Database::open(DbConfig::new(path)).await?;
            db.ping().await?;
            let store: Arc<dyn KeyValueStore> = Arc::new(db.kv());
            (store, Some(db))
        }
        StorageBackend::Memory => {
            info!("Using in-memory preferences; nothing will persist");
            let store: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
            (store, None)
        }
    };

    let state = PinoutStateContainer::new(BoardPreferences::new(store));
    state.hydrate().await;

    if let Err(e) = state.load_catalog(&config.catalog_source()).await {
        warn!(error = %e, "Starting without a board catalog");
    }

    Ok(AppContext {
        config,
        state,
        database,
    })
}
