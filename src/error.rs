// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three failure domains, three enums. A [`BuildError`] is fatal: the index
//! never becomes ready and no query is served. A [`QueryError`] is the
//! caller's fault and is reported straight back. A [`ServiceError`] is what
//! a query sees when it arrives before (or instead of) a ready index.

use std::path::PathBuf;

/// The catalog or synonym input could not be turned into an index.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("breed '{key}' is missing required field '{field}'")]
    MissingField { key: String, field: &'static str },

    #[error("breed '{key}' must be a JSON object")]
    InvalidEntry { key: String },

    #[error("breed '{key}' appears more than once in the catalog")]
    DuplicateKey { key: String },

    #[error("{origin} must be a JSON object at the top level")]
    NotAnObject { origin: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The query string itself is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,

    #[error("query is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// A query could not be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("search index is still being built")]
    NotReady,

    #[error("search index failed to build: {0}")]
    BuildFailed(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}
