//! # Catalog Commands
//!
//! Load status for the home screen and the pull-to-refresh reload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, PinoutStateContainer};

/// What the home screen shows while and after the catalog loads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatusDto {
    pub board_count: usize,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Gets the current catalog status.
pub fn get_catalog_status(state: &PinoutStateContainer) -> CatalogStatusDto {
    debug!("get_catalog_status command");
    state.with_state(|s| CatalogStatusDto {
        board_count: s.catalog().len(),
        loading: s.is_loading(),
        error: s.error().map(String::from),
        loaded_at: s.loaded_at(),
    })
}

/// Reloads the catalog from the configured source.
///
/// A reload requested while another is running is dropped and the current
/// status returned. On failure the previous catalog stays in place.
pub async fn reload_catalog(
    state: &PinoutStateContainer,
    config: &ConfigState,
) -> Result<CatalogStatusDto, ApiError> {
    let source = config.catalog_source();
    debug!(?source, "reload_catalog command");

    if state.load_catalog(&source).await? {
        info!("Catalog reloaded");
    }
    Ok(get_catalog_status(state))
}
