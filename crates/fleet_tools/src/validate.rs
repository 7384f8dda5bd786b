//! Data validation utilities.

use std::path::{Path, PathBuf};

use crate::data_loader::{load_catalog_from_file, DataLoadError, DataLoadResult};

/// Counts reported for one validated catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    /// File that was validated.
    pub path: PathBuf,
    /// Number of gear definitions.
    pub gears: usize,
    /// Number of ship definitions.
    pub ships: usize,
}

/// Validate every RON catalog file in a directory.
///
/// Files are visited in name order. A missing directory yields an empty
/// summary list.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any catalog fails to
/// load or validate.
pub fn validate_data_directory(dir: &Path) -> DataLoadResult<Vec<CatalogSummary>> {
    if !dir.exists() {
        tracing::warn!("Data directory does not exist: {}", dir.display());
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| DataLoadError::IoError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DataLoadError::IoError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "ron") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut summaries = Vec::with_capacity(paths.len());
    for path in paths {
        let catalog = load_catalog_from_file(&path)?;
        summaries.push(CatalogSummary {
            gears: catalog.gear_count(),
            ships: catalog.ship_count(),
            path,
        });
    }

    tracing::info!("Validated {} catalogs in {}", summaries.len(), dir.display());

    Ok(summaries)
}
