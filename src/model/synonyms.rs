// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static synonym table: word → alternative spellings a query may use.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exact, case-sensitive word → synonyms mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable(HashMap<String, Vec<String>>);

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synonyms of `word`, or an empty slice.
    pub fn lookup(&self, word: &str) -> &[String] {
        self.0.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, word: impl Into<String>, synonyms: Vec<String>) {
        self.0.insert(word.into(), synonyms);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for SynonymTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        SynonymTable(
            iter.into_iter()
                .map(|(k, vs)| (k.into(), vs.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}
