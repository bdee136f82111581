//! # State Module
//!
//! Application state handed to the commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌────────────────────────────────┐   ┌──────────────────────────┐     │
//! │  │     PinoutStateContainer       │   │       ConfigState        │     │
//! │  │                                │   │                          │     │
//! │  │  Arc<Mutex<PinoutState>>       │   │  appearance, storage,    │     │
//! │  │   catalog, categories, ...     │   │  catalog, diagram        │     │
//! │  │  Arc<BoardPreferences>         │   │                          │     │
//! │  │   favorites/recents mirror     │   │                          │     │
//! │  └────────────────────────────────┘   └──────────────────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • PinoutStateContainer: Mutex for the state, per-key locks in store   │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod pinout;

pub use config::{
    AppearanceConfig, CatalogConfig, ConfigState, DiagramConfig, NotificationConfig, StorageBackend,
    StorageConfig,
};
pub use pinout::{PinSelection, PinoutState, PinoutStateContainer};
