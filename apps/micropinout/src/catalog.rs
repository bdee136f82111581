//! # Catalog Sources
//!
//! Where the session's board catalog comes from. The core only ever sees the
//! resulting [`BoardCatalog`]; reading and parsing happen here.
//!
//! ```text
//!   CatalogSource::Builtin      ──► data/boards.json compiled into the binary
//!   CatalogSource::File(path)   ──► JSON array of BoardDefinition on disk
//!                     │
//!                     ▼
//!            BoardCatalog::new (validation)
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use pinout_core::data::builtin_boards;
use pinout_core::BoardCatalog;

use crate::error::CatalogLoadError;

/// Catalog data source, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Reads, parses and validates the catalog.
    pub async fn fetch(&self) -> Result<BoardCatalog, CatalogLoadError> {
        let catalog = match self {
            CatalogSource::Builtin => {
                debug!("Loading built-in catalog");
                BoardCatalog::new(builtin_boards()?)?
            }
            CatalogSource::File(path) => {
                debug!(path = %path.display(), "Loading catalog file");
                let contents = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogLoadError::Io {
                        path: path.clone(),
                        source,
                    })?;
                BoardCatalog::from_json(&contents)?
            }
        };

        info!(boards = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}
