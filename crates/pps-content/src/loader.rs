//! Catalog loaders.

use std::path::Path;

use pps_model::ContentCatalog;
use tracing::{debug, info};

use crate::embedded::{DEFAULT_CATALOG, EMBEDDED_ORIGIN};
use crate::error::{ContentError, Result};
use crate::validate::validate;

/// Load the catalog compiled into the binary.
pub fn load_embedded() -> Result<ContentCatalog> {
    parse_and_validate(DEFAULT_CATALOG, EMBEDDED_ORIGIN)
}

/// Load and validate a catalog from a TOML file.
pub fn load_from_path(path: &Path) -> Result<ContentCatalog> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_and_validate(&text, &path.display().to_string())
}

/// Parse and validate a catalog from TOML text.
pub fn from_toml_str(text: &str) -> Result<ContentCatalog> {
    parse_and_validate(text, "<string>")
}

/// Load `path` when given, otherwise the embedded catalog.
pub fn load(path: Option<&Path>) -> Result<ContentCatalog> {
    match path {
        Some(path) => load_from_path(path),
        None => load_embedded(),
    }
}

fn parse_and_validate(text: &str, origin: &str) -> Result<ContentCatalog> {
    let catalog: ContentCatalog = toml::from_str(text).map_err(|source| ContentError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    validate(&catalog).map_err(|source| ContentError::Invalid {
        origin: origin.to_string(),
        source,
    })?;

    debug!(
        origin,
        modules = catalog.dashboard.modules.len(),
        activities = catalog.dashboard.recent_activities.len(),
        "catalog validated"
    );
    info!(origin, steps = catalog.steps.len(), "Loaded content catalog");

    Ok(catalog)
}
