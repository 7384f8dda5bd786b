//! Reference catalog and ship state loading.
//!
//! Loads RON files from disk. Catalog validation happens at load time, so a
//! returned [`MasterCatalog`] is always internally consistent.

use std::io::Read;
use std::path::Path;

use fleet_core::error::FleetError;
use fleet_core::master::{CatalogData, MasterCatalog};
use fleet_core::ship::ShipState;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur during data loading.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON file.
    #[error("Failed to parse RON file '{path}': {source}")]
    ParseError {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Catalog data validation failed.
    #[error("Validation failed for catalog '{path}': {source}")]
    ValidationError {
        /// Path to the file.
        path: String,
        /// Underlying validation error.
        #[source]
        source: FleetError,
    },
}

/// Result type for data loading operations.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

fn read_ron<T: DeserializeOwned>(path: &Path) -> DataLoadResult<T> {
    let path_str = path.display().to_string();

    let mut file = std::fs::File::open(path).map_err(|e| DataLoadError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DataLoadError::IoError {
            path: path_str.clone(),
            source: e,
        })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path_str,
        source: e,
    })
}

/// Load raw catalog data from a RON file without validating it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog_data_from_file(path: &Path) -> DataLoadResult<CatalogData> {
    read_ron(path)
}

/// Load and validate a reference catalog from a RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_catalog_from_file(path: &Path) -> DataLoadResult<MasterCatalog> {
    let data = load_catalog_data_from_file(path)?;
    let catalog = MasterCatalog::from_data(data).map_err(|e| DataLoadError::ValidationError {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(
        "Loaded catalog '{}' with {} gears, {} ships",
        path.display(),
        catalog.gear_count(),
        catalog.ship_count()
    );

    Ok(catalog)
}

/// Load a saved ship state from a RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_ship_state_from_file(path: &Path) -> DataLoadResult<ShipState> {
    let state: ShipState = read_ron(path)?;
    tracing::debug!(
        "Loaded ship state '{}' for ship {}",
        path.display(),
        state.ship_id
    );
    Ok(state)
}
