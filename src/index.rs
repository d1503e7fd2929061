// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the two-pass build.
//!
//! Pass one preprocesses every catalog entry and registers its paragraph with
//! the term-frequency accumulator. Pass two freezes the accumulator and walks
//! every model word to attach its TF-IDF weight and synonyms. Asking for a
//! weight during pass one would use an incomplete IDF, and the types make that
//! impossible: only the frozen [`TermFrequency`] answers `tfidf`.
//!
//! The resulting [`SearchIndex`] is immutable. Queries borrow it.

use crate::contracts::{check_index_well_formed, check_weights_finite};
use crate::error::BuildError;
use crate::model::{preprocess_entity, SynonymTable, TermFrequency, TermFrequencyBuilder};
use crate::text::Tagger;
use crate::types::{CatalogEntry, Entity};
use std::collections::HashMap;
use tracing::{debug, info};

/// All preprocessed entities plus the corpus statistics they were weighted with.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entities: Vec<Entity>,
    by_key: HashMap<String, usize>,
    term_frequency: TermFrequency,
}

impl SearchIndex {
    /// Entities in corpus order; `entities()[i].paragraph_id == i`.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.by_key.get(key).map(|&i| &self.entities[i])
    }

    pub fn term_frequency(&self) -> &TermFrequency {
        &self.term_frequency
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Total number of model words across all entities.
    pub fn model_word_count(&self) -> usize {
        self.entities.iter().map(|e| e.model.len()).sum()
    }
}

/// Build the index from an ordered catalog and a synonym table.
///
/// Paragraph ids follow catalog order. Fails only on duplicate keys; empty
/// records are accepted and simply never match.
///
/// # Example
///
/// ```
/// use whisker::{build_index, search, BreedRecord, CatalogEntry, SynonymTable};
///
/// let catalog = vec![CatalogEntry::new(
///     "Siamese",
///     BreedRecord {
///         size: "Medium".into(),
///         coat: "Short".into(),
///         color: "Cream".into(),
///         description: "Vocal and social.".into(),
///         did_you_know: "Siamese cats are very talkative.".into(),
///     },
/// )];
/// let index = build_index(catalog, &SynonymTable::new()).unwrap();
/// let results = search(&index, "talkative").unwrap();
/// assert_eq!(results[0].key, "Siamese");
/// ```
pub fn build_index(
    catalog: Vec<CatalogEntry>,
    synonyms: &SynonymTable,
) -> Result<SearchIndex, BuildError> {
    let tagger = Tagger::new();
    let mut by_key = HashMap::with_capacity(catalog.len());
    let mut entities = Vec::with_capacity(catalog.len());
    let mut documents = TermFrequencyBuilder::new();

    // Pass 1: preprocess and register every paragraph
    for CatalogEntry { key, breed } in catalog {
        if by_key.contains_key(&key) {
            return Err(BuildError::DuplicateKey { key });
        }
        let paragraph_id = entities.len();
        let entity = preprocess_entity(&tagger, key.clone(), breed, paragraph_id);
        let doc_id = documents.add_document(&entity.paragraph);
        debug_assert_eq!(doc_id, paragraph_id);

        debug!(
            breed = %entity.key,
            paragraph_id,
            sentences = entity.sentences.len(),
            model_words = entity.model.len(),
            "preprocessed breed"
        );
        by_key.insert(key, paragraph_id);
        entities.push(entity);
    }

    // Pass 2: weights need the complete corpus
    let term_frequency = documents.finish();
    for entity in &mut entities {
        let paragraph_id = entity.paragraph_id;
        for entry in entity.model.iter_mut() {
            entry.weight = term_frequency.tfidf(&entry.word, paragraph_id);
            entry.synonyms = synonyms.lookup(&entry.word).to_vec();
        }
    }

    let index = SearchIndex {
        entities,
        by_key,
        term_frequency,
    };
    check_index_well_formed(&index);
    check_weights_finite(&index);
    info!(
        breeds = index.len(),
        model_words = index.model_word_count(),
        synonyms = synonyms.len(),
        "search index built"
    );
    Ok(index)
}
