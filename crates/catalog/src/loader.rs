use crate::error::{CatalogError, Result};
use crate::{Catalog, Record};
use serde::Deserialize;
use std::path::Path;

/// On-disk layout: `{ "cards": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    cards: Vec<Record>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self::new(file.cards))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Loads the catalog, degrading to an empty one when the file is
    /// missing or malformed. The server keeps running either way.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(catalog) => {
                log::info!("Loaded {} learning cards", catalog.len());
                catalog
            }
            Err(err) => {
                log::error!("Error loading learning cards: {err}");
                Self::empty()
            }
        }
    }
}
