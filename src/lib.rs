// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy, synonym-aware search over a catalog of cat breeds.
//!
//! Each breed's five text fields are joined into a paragraph, split into
//! sentences, tokenized and part-of-speech tagged. Nouns and verbs become the
//! breed's keyword model, weighted with TF-IDF over the whole catalog and
//! expanded with a static synonym table. A query is scored against every
//! keyword (and synonym) by inverse edit distance, the best breeds come back
//! first, and each result carries a short excerpt around its best word.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌────────────┐
//! │  build   │──▶│   index   │──▶│  search  │──▶│ highlight  │
//! │ (loader) │   │ (2 passes)│   │ (score,  │   │ (excerpt)  │
//! └──────────┘   └───────────┘   │   rank)  │   └────────────┘
//!                  │       │     └──────────┘
//!                  ▼       ▼           │
//!           ┌────────┐ ┌────────┐ ┌─────────┐
//!           │  text  │ │ model  │ │ scoring │
//!           │(tokens,│ │(tf-idf,│ │ (fuzzy) │
//!           │ tags)  │ │synonym)│ └─────────┘
//!           └────────┘ └────────┘
//! ```
//!
//! | Module      | Responsibility                                          |
//! |-------------|---------------------------------------------------------|
//! | `text`      | Word tokenizer, sentence splitter, POS tagger           |
//! | `model`     | Paragraph composition, keyword extraction, TF-IDF       |
//! | `index`     | Two-pass build into an immutable [`SearchIndex`]        |
//! | `scoring`   | Inverse-distance word scores, result ordering           |
//! | `search`    | Query validation, matching, ranking, highlighting       |
//! | `state`     | Index lifecycle shared between request handlers         |
//! | `build`     | Catalog and synonym file loading                        |
//! | `server`    | HTTP routes (feature `server`)                          |
//!
//! # Usage
//!
//! ```
//! use whisker::{build_index, search, CatalogEntry, SynonymTable};
//! use whisker::testing::make_breed;
//!
//! let catalog = vec![
//!     CatalogEntry::new("Siamese", make_breed("Siamese cats are very talkative.")),
//!     CatalogEntry::new("Persian", make_breed("Persians enjoy a calm home.")),
//! ];
//! let synonyms: SynonymTable = [("talkative", vec!["chatty"])].into_iter().collect();
//! let index = build_index(catalog, &synonyms).unwrap();
//!
//! let results = search(&index, "chatty").unwrap();
//! assert_eq!(results[0].key, "Siamese");
//! ```

pub mod build;
pub mod contracts;
mod error;
mod fuzzy;
mod index;
mod model;
pub mod scoring;
pub mod search;
pub mod state;
mod text;
mod types;

#[cfg(feature = "server")]
pub mod server;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use build::{build_from_files, load_catalog, load_synonyms, parse_catalog, parse_synonyms};
pub use error::{BuildError, QueryError, ServiceError};
pub use fuzzy::{levenshtein, levenshtein_within};
pub use index::{build_index, SearchIndex};
pub use model::{
    compose_paragraph, extract_model_words, is_stop_word, preprocess_entity, SynonymTable,
    TermFrequency, TermFrequencyBuilder,
};
pub use scoring::{ScoringStrategy, WeightPolicy, EPSILON, EXACT_MATCH_SCORE};
pub use search::highlight::{highlight_word, select_title, Highlight};
pub use search::{
    score_entity, search, search_with, EntityScore, SearchOptions, SearchResult, WordScore,
    DEFAULT_LIMIT, DEFAULT_MAX_QUERY_LEN,
};
pub use state::{IndexState, SearchService};
pub use text::{split_sentences, tokenize_words, PosTag, TaggedWord, Tagger};
pub use types::{BreedRecord, CatalogEntry, Entity, ModelWord, Sentence, WordModel};
