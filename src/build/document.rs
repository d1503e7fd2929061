// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One catalog document: a breed name mapped to its five text fields.
//!
//! Parsing goes through `serde_json::Value` rather than a derived
//! `Deserialize` so a bad entry is reported with its breed name and the exact
//! field that is missing, instead of a line/column into the file.

use crate::error::BuildError;
use crate::types::{BreedRecord, CatalogEntry};
use serde_json::{Map, Value};

/// Field names in the order they appear in the paragraph.
const BREED_FIELDS: [&str; 5] = ["size", "coat", "color", "description", "did_you_know"];

fn required_field(
    key: &str,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, BuildError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(BuildError::MissingField {
            key: key.to_string(),
            field,
        }),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(BuildError::InvalidEntry {
            key: key.to_string(),
        }),
    }
}

/// Turn one `"Breed": { ... }` pair into a catalog entry.
///
/// Extra fields are ignored. Empty strings are valid.
pub fn parse_entry(key: &str, value: &Value) -> Result<CatalogEntry, BuildError> {
    let object = value.as_object().ok_or_else(|| BuildError::InvalidEntry {
        key: key.to_string(),
    })?;

    let [size, coat, color, description, did_you_know] =
        BREED_FIELDS.map(|field| required_field(key, object, field));
    let breed = BreedRecord {
        size: size?,
        coat: coat?,
        color: color?,
        description: description?,
        did_you_know: did_you_know?,
    };
    Ok(CatalogEntry::new(key, breed))
}
