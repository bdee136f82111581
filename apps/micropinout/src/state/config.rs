//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`config.toml` in the platform config directory)
//! 3. Environment variables (`MICROPINOUT_*`)
//!
//! ## Example `config.toml`
//! ```toml
//! [appearance]
//! darkMode = true
//!
//! [notifications]
//! enabled = false
//!
//! [storage]
//! backend = "sqlite"
//! databasePath = "/tmp/micropinout.db"
//!
//! [catalog]
//! path = "/opt/boards/catalog.json"
//!
//! [diagram]
//! boardWidthPx = 360.0
//! rowHeightPx = 40.0
//! columns = 10
//! ```
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use pinout_core::layout::MARGIN;
use pinout_core::LayoutOptions;

use crate::catalog::CatalogSource;
use crate::error::{ConfigError, ConfigResult};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub diagram: DiagramConfig,
}

/// Settings screen: appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Settings screen: notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig { enabled: true }
    }
}

/// Where favorites and recents are persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file in the platform data directory
    #[default]
    Sqlite,

    /// Nothing survives the process
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid(format!(
                "unknown storage backend '{}', expected sqlite or memory",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Overrides the platform default database location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Pin diagram geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
    #[serde(default = "default_board_width")]
    pub board_width_px: f64,

    #[serde(default = "default_row_height")]
    pub row_height_px: f64,

    #[serde(default = "default_columns")]
    pub columns: u32,
}

fn default_true() -> bool {
    true
}

fn default_board_width() -> f64 {
    360.0
}

fn default_row_height() -> f64 {
    40.0
}

fn default_columns() -> u32 {
    10
}

impl Default for DiagramConfig {
    fn default() -> Self {
        DiagramConfig {
            board_width_px: default_board_width(),
            row_height_px: default_row_height(),
            columns: default_columns(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing config file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.diagram.board_width_px.is_finite() || self.diagram.board_width_px <= 2.0 * MARGIN {
            return Err(ConfigError::Invalid(format!(
                "diagram.boardWidthPx must be greater than {}",
                2.0 * MARGIN
            )));
        }

        if !self.diagram.row_height_px.is_finite() || self.diagram.row_height_px <= 0.0 {
            return Err(ConfigError::Invalid(
                "diagram.rowHeightPx must be greater than 0".into(),
            ));
        }

        if self.diagram.columns == 0 {
            return Err(ConfigError::Invalid(
                "diagram.columns must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `MICROPINOUT_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var("MICROPINOUT_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(backend) = var("MICROPINOUT_STORAGE") {
            match backend.parse() {
                Ok(parsed) => self.storage.backend = parsed,
                Err(e) => warn!(error = %e, "Ignoring MICROPINOUT_STORAGE"),
            }
        }

        if let Some(path) = var("MICROPINOUT_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(dark) = var("MICROPINOUT_DARK_MODE") {
            match dark.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.appearance.dark_mode = true,
                "0" | "false" | "no" | "off" => self.appearance.dark_mode = false,
                _ => warn!(value = %dark, "Ignoring MICROPINOUT_DARK_MODE"),
            }
        }

        if let Some(width) = var("MICROPINOUT_DIAGRAM_WIDTH") {
            match width.trim().parse::<f64>() {
                Ok(w) => self.diagram.board_width_px = w,
                Err(_) => warn!(value = %width, "Ignoring MICROPINOUT_DIAGRAM_WIDTH"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "micropinout", "micropinout")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Diagram grid options other than the width.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            row_height_px: self.diagram.row_height_px,
            columns: self.diagram.columns,
        }
    }

    /// Where to load the board catalog from.
    pub fn catalog_source(&self) -> CatalogSource {
        match self.catalog.path {
            Some(ref path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Builtin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();

        assert!(!config.appearance.dark_mode);
        assert!(config.notifications.enabled);
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.catalog_source(), CatalogSource::Builtin);
        assert_eq!(config.layout_options(), LayoutOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ConfigState = toml::from_str(
            r#"
            [storage]
            backend = "memory"

            [diagram]
            columns = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.diagram.columns, 4);
        assert_eq!(config.diagram.board_width_px, 360.0);
        assert!(config.notifications.enabled);
    }

    #[test]
    fn test_toml_keys_are_camel_case() {
        let config: ConfigState = toml::from_str(
            r#"
            [appearance]
            darkMode = true

            [storage]
            databasePath = "/tmp/pins.db"

            [diagram]
            boardWidthPx = 480.0
            rowHeightPx = 32.0
            "#,
        )
        .unwrap();

        assert!(config.appearance.dark_mode);
        assert_eq!(config.storage.database_path, Some(PathBuf::from("/tmp/pins.db")));
        assert_eq!(config.diagram.board_width_px, 480.0);
        assert_eq!(config.diagram.row_height_px, 32.0);

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("darkMode = true"));
        assert!(!text.contains("dark_mode"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(env(&[
            ("MICROPINOUT_STORAGE", "Memory"),
            ("MICROPINOUT_CATALOG_PATH", "/data/boards.json"),
            ("MICROPINOUT_DARK_MODE", "true"),
            ("MICROPINOUT_DIAGRAM_WIDTH", " 480 "),
            ("MICROPINOUT_DB_PATH", "/tmp/pins.db"),
        ]));

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(
            config.catalog_source(),
            CatalogSource::File(PathBuf::from("/data/boards.json"))
        );
        assert!(config.appearance.dark_mode);
        assert_eq!(config.diagram.board_width_px, 480.0);
        assert_eq!(config.storage.database_path, Some(PathBuf::from("/tmp/pins.db")));
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(env(&[
            ("MICROPINOUT_STORAGE", "redis"),
            ("MICROPINOUT_DARK_MODE", "maybe"),
            ("MICROPINOUT_DIAGRAM_WIDTH", "wide"),
        ]));

        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_validate_diagram() {
        let mut config = ConfigState::default();
        config.diagram.board_width_px = 40.0;
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.diagram.row_height_px = 0.0;
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.diagram.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ConfigState::load(Some(PathBuf::from("/no/such/micropinout.toml"))).unwrap();
        assert_eq!(config.diagram, DiagramConfig::default());
    }
}
