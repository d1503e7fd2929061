// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the catalog and synonym files and building an index from them.
//!
//! Catalog file: a JSON object keyed by breed name. Key order is the catalog
//! order and becomes the paragraph order.
//!
//! ```json
//! {
//!   "Siamese": {
//!     "size": "Medium", "coat": "Short", "color": "Cream",
//!     "description": "Vocal and social.",
//!     "did_you_know": "Siamese cats are very talkative."
//!   }
//! }
//! ```
//!
//! Synonym file: a JSON object mapping a word to an array of strings.

mod document;

pub use document::*;

use crate::error::BuildError;
use crate::index::{build_index, SearchIndex};
use crate::model::SynonymTable;
use crate::types::CatalogEntry;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse catalog JSON text. `origin` names the source in error messages.
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<CatalogEntry>, BuildError> {
    let value: Value = serde_json::from_str(json).map_err(|source| BuildError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let Value::Object(breeds) = value else {
        return Err(BuildError::NotAnObject {
            origin: origin.to_string(),
        });
    };

    breeds
        .iter()
        .map(|(key, value)| parse_entry(key, value))
        .collect()
}

/// Parse synonym JSON text.
pub fn parse_synonyms(json: &str, origin: &str) -> Result<SynonymTable, BuildError> {
    let value: Value = serde_json::from_str(json).map_err(|source| BuildError::Json {
        origin: origin.to_string(),
        source,
    })?;
    if !value.is_object() {
        return Err(BuildError::NotAnObject {
            origin: origin.to_string(),
        });
    }
    serde_json::from_value(value).map_err(|source| BuildError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, BuildError> {
    let catalog = parse_catalog(&read_file(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), breeds = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Read and parse a synonym file.
pub fn load_synonyms(path: &Path) -> Result<SynonymTable, BuildError> {
    let synonyms = parse_synonyms(&read_file(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), words = synonyms.len(), "synonyms loaded");
    Ok(synonyms)
}

/// Load both files and build the index. No synonym file means no synonyms.
pub fn build_from_files(
    catalog_path: &Path,
    synonyms_path: Option<&Path>,
) -> Result<SearchIndex, BuildError> {
    let start = Instant::now();
    let catalog = load_catalog(catalog_path)?;
    let synonyms = match synonyms_path {
        Some(path) => load_synonyms(path)?,
        None => SynonymTable::new(),
    };
    let index = build_index(catalog, &synonyms)?;
    info!(
        catalog = %catalog_path.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "built index from files"
    );
    Ok(index)
}
