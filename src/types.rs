// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A catalog entry goes in as a [`BreedRecord`] (five free-text fields) and
//! comes out of preprocessing as an [`Entity`]: the joined paragraph, its
//! sentences, and a [`WordModel`] of weighted keywords. Everything here is
//! immutable once the index is built. Per-query numbers live in
//! `search::EntityScore`, never on these types.
//!
//! # Invariants
//!
//! - **Entity**: `paragraph_id` equals the entity's position in the index and
//!   never changes for the lifetime of the index.
//! - **WordModel**: keys are unique. Re-inserting a word replaces its entry
//!   but keeps its original position, so iteration order is first-insertion
//!   order.

use crate::text::{PosTag, TaggedWord};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// The raw text of one catalog item.
///
/// All five fields are required in the catalog file, but any of them may be
/// empty. An empty record simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct BreedRecord {
    pub size: String,
    pub coat: String,
    pub color: String,
    pub description: String,
    pub did_you_know: String,
}

/// A catalog item with its identity (the breed name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub breed: BreedRecord,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, breed: BreedRecord) -> Self {
        CatalogEntry {
            key: key.into(),
            breed,
        }
    }
}

// =============================================================================
// DERIVED TYPES
// =============================================================================

/// One sentence of an entity's paragraph.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub text: String,
    pub words: Vec<String>,
    pub model_words: Vec<TaggedWord>,
}

/// A keyword of an entity, with its build-time weight and synonyms.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModelWord {
    pub word: String,
    pub pos: PosTag,
    /// TF-IDF of `word` in this entity's paragraph against the whole corpus.
    pub weight: f64,
    pub synonyms: Vec<String>,
}

impl ModelWord {
    /// A freshly extracted word: no weight and no synonyms yet.
    pub fn unweighted(tagged: &TaggedWord) -> Self {
        ModelWord {
            word: tagged.word.clone(),
            pos: tagged.pos,
            weight: 0.0,
            synonyms: Vec::new(),
        }
    }
}

/// Insertion-ordered map of word → [`ModelWord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordModel {
    entries: Vec<ModelWord>,
    positions: HashMap<String, usize>,
}

impl WordModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten word keeps its original slot.
    pub fn insert(&mut self, entry: ModelWord) {
        match self.positions.get(&entry.word) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.positions.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&ModelWord> {
        self.positions.get(word).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// First word in iteration order.
    pub fn first(&self) -> Option<&ModelWord> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelWord> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, ModelWord> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordModel {
    type Item = &'a ModelWord;
    type IntoIter = std::slice::Iter<'a, ModelWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for WordModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.word, entry)?;
        }
        map.end()
    }
}

/// A preprocessed catalog item.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub key: String,
    pub breed: BreedRecord,
    pub paragraph: String,
    pub paragraph_id: usize,
    pub sentences: Vec<Sentence>,
    pub model: WordModel,
}
