//! Catalog Loading Module
//!
//! Decides where the destination catalog comes from (the embedded payload or a
//! configured JSON file) and checks it once before it is handed out.

use std::path::Path;

use tracing::{debug, error, info, warn};

use super::DestinationCatalog;
use crate::config::CatalogConfig;
use crate::{CatalogError, Result};

/// Service for loading and validating the destination catalog
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog described by `config`
    pub fn load(config: &CatalogConfig) -> Result<DestinationCatalog> {
        let catalog = match config.catalog.data_path.as_deref() {
            Some(path) => Self::load_data_file(Path::new(path))?,
            None => {
                debug!("No data path configured, using embedded destinations");
                DestinationCatalog::embedded().clone()
            }
        };

        Self::check_unique_ids(&catalog, config.catalog.strict)?;

        info!(
            "Loaded {} destinations in {} categories",
            catalog.len(),
            catalog.categories().len()
        );

        Ok(catalog)
    }

    /// Load a payload file, falling back to the embedded data when it is missing
    fn load_data_file(path: &Path) -> Result<DestinationCatalog> {
        if path.exists() {
            debug!("Loading destinations from data file: {}", path.display());
            DestinationCatalog::from_path(path).map_err(|e| {
                CatalogError::data(format!("failed to load {}: {e}", path.display()))
            })
        } else {
            warn!(
                "Destination data file not found at {}, using embedded destinations",
                path.display()
            );
            Ok(DestinationCatalog::embedded().clone())
        }
    }

    fn check_unique_ids(catalog: &DestinationCatalog, strict: bool) -> Result<()> {
        let duplicates = catalog.duplicate_ids();
        if duplicates.is_empty() {
            return Ok(());
        }

        let listed = duplicates.join(", ");
        error!("Duplicate destination ids: {}", listed);
        if strict {
            return Err(CatalogError::validation(format!(
                "duplicate destination ids: {listed}"
            )));
        }
        Ok(())
    }
}
