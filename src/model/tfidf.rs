// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term frequency–inverse document frequency over the catalog paragraphs.
//!
//! Documents are lower-cased, tokenized with the shared word tokenizer, and
//! stripped of stop words before counting. The formulas:
//!
//! ```text
//! tf(t, d)    = occurrences of t in d
//! idf(t)      = 1 + ln(N / (1 + df(t)))
//! tfidf(t, d) = Σ over tokens u of t: tf(u, d) · idf(u)
//! ```
//!
//! Registration and querying are split across two types so nobody can ask for
//! a weight while the document frequencies are still incomplete.

use crate::text::tokenize_words;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "after", "all", "also", "am", "an", "and", "another", "any", "are", "as", "at",
        "be", "because", "been", "before", "being", "between", "both", "but", "by", "came",
        "can", "come", "could", "did", "do", "each", "for", "from", "get", "got", "has", "had",
        "he", "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is",
        "it", "like", "make", "many", "me", "might", "more", "most", "much", "must", "my",
        "never", "now", "of", "on", "only", "or", "other", "our", "out", "over", "said", "same",
        "see", "should", "since", "some", "still", "such", "take", "than", "that", "the",
        "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "up", "very", "was", "way", "we", "well", "were", "what", "where",
        "which", "while", "who", "with", "would", "you", "your", "a", "b", "c", "d", "e", "f",
        "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w",
        "x", "y", "z", "_", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    ]
    .into_iter()
    .collect()
});

/// Is this (lower-case) token ignored by term counting?
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

type TermCounts = HashMap<String, usize>;

fn count_terms(text: &str) -> TermCounts {
    let mut counts = TermCounts::new();
    for token in tokenize_words(&text.to_lowercase()) {
        if !is_stop_word(&token) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// First pass: collects documents.
#[derive(Debug, Default)]
pub struct TermFrequencyBuilder {
    documents: Vec<TermCounts>,
}

impl TermFrequencyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document and return its id (0, 1, 2, ... in call order).
    pub fn add_document(&mut self, text: &str) -> usize {
        self.documents.push(count_terms(text));
        self.documents.len() - 1
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Freeze the corpus and compute document frequencies.
    pub fn finish(self) -> TermFrequency {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in &self.documents {
            for term in doc.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }
        TermFrequency {
            documents: self.documents,
            doc_freq,
        }
    }
}

/// Second pass: answers weight queries against a complete corpus.
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    documents: Vec<TermCounts>,
    doc_freq: HashMap<String, usize>,
}

impl TermFrequency {
    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    /// Raw count of a lower-case term in a document. Unknown documents count zero.
    pub fn tf(&self, term: &str, doc: usize) -> usize {
        self.documents
            .get(doc)
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Number of documents containing a lower-case term.
    pub fn df(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn idf(&self, term: &str) -> f64 {
        let n = self.documents.len() as f64;
        let idf = 1.0 + (n / (1.0 + self.df(term) as f64)).ln();
        if idf.is_finite() {
            idf
        } else {
            0.0
        }
    }

    /// TF-IDF of `term` (any case, possibly several tokens) in document `doc`.
    pub fn tfidf(&self, term: &str, doc: usize) -> f64 {
        tokenize_words(&term.to_lowercase())
            .iter()
            .map(|token| self.tf(token, doc) as f64 * self.idf(token))
            .sum()
    }
}
