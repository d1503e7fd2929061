// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The lexical model: what each entity "is about".
//!
//! Preprocessing turns a breed's five text fields into a paragraph, sentences,
//! and a set of noun/verb keywords. Weighting then gives each keyword a TF-IDF
//! score against the whole catalog and attaches its synonyms. Weighting must
//! see every paragraph first (IDF is a corpus statistic), which is why
//! [`TermFrequencyBuilder`] and [`TermFrequency`] are separate types.

mod preprocess;
mod synonyms;
mod tfidf;

pub use preprocess::*;
pub use synonyms::*;
pub use tfidf::*;
