//! # Config Commands
//!
//! Configuration retrieval for the settings screen.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (dark mode, diagram geometry)
/// - Settings screen
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes_sections() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();

        assert_eq!(json["appearance"]["darkMode"], false);
        assert_eq!(json["notifications"]["enabled"], true);
        assert_eq!(json["storage"]["backend"], "sqlite");
        assert_eq!(json["diagram"]["columns"], 10);
        assert_eq!(json["diagram"]["boardWidthPx"], 360.0);
        assert!(json["storage"].get("databasePath").is_none());
    }
}
