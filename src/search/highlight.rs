// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt highlighting: a short window of field text around a matched word.
//!
//! The title of a result is the first hit of [`HIGHLIGHT_PLAN`]: ten
//! `(word, field)` attempts, spotlight word first across the five fields,
//! then the entity's first model word across the same fields. Paragraph-level
//! artifacts (words glued together by concatenation) may be found in no
//! field at all, in which case the result has no title and callers show the
//! plain description.
//!
//! # Window
//!
//! ```text
//! text:    "... lots of words before the match and then some words after ..."
//!                         |<- 30 chars ->|match|<- 30 chars ->|
//! start:   first space at or after (match - 30 chars), if before the match
//! end:     first space at or after (match end + 30 chars)
//! ```
//!
//! A window edge that landed on a space gets "..." on that side; an edge
//! that ran into the start or end of the field gets nothing.

use crate::types::{BreedRecord, Entity};
use serde::Serialize;

/// Characters of context kept on each side of the highlighted word.
pub const NEIGHBORHOOD_CHARS: usize = 30;

/// Marker for clipped text.
pub const ELLIPSIS: &str = "...";

/// An excerpt split around its highlighted word.
///
/// Invariant: `excerpt1 + highlight_word + excerpt2 == excerpt`, and
/// `index == excerpt1.len()` (byte offset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub index: usize,
    pub excerpt: String,
    pub highlight_word: String,
    pub excerpt1: String,
    pub excerpt2: String,
}

/// Text fields a title may be cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightField {
    DidYouKnow,
    Description,
    Size,
    Coat,
    Color,
}

impl HighlightField {
    pub fn text(self, breed: &BreedRecord) -> &str {
        match self {
            HighlightField::DidYouKnow => &breed.did_you_know,
            HighlightField::Description => &breed.description,
            HighlightField::Size => &breed.size,
            HighlightField::Coat => &breed.coat,
            HighlightField::Color => &breed.color,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HighlightField::DidYouKnow => "did_you_know",
            HighlightField::Description => "description",
            HighlightField::Size => "size",
            HighlightField::Coat => "coat",
            HighlightField::Color => "color",
        }
    }
}

/// Which word an attempt looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    /// The best-scoring model word of this query.
    Spotlight,
    /// The entity's first model word, whatever the query.
    FirstModelWord,
}

/// Field priority, most specific text first.
pub const FIELD_PRIORITY: [HighlightField; 5] = [
    HighlightField::DidYouKnow,
    HighlightField::Description,
    HighlightField::Size,
    HighlightField::Coat,
    HighlightField::Color,
];

/// Ordered title attempts. First hit wins.
pub const HIGHLIGHT_PLAN: [(WordSource, HighlightField); 10] = [
    (WordSource::Spotlight, FIELD_PRIORITY[0]),
    (WordSource::Spotlight, FIELD_PRIORITY[1]),
    (WordSource::Spotlight, FIELD_PRIORITY[2]),
    (WordSource::Spotlight, FIELD_PRIORITY[3]),
    (WordSource::Spotlight, FIELD_PRIORITY[4]),
    (WordSource::FirstModelWord, FIELD_PRIORITY[0]),
    (WordSource::FirstModelWord, FIELD_PRIORITY[1]),
    (WordSource::FirstModelWord, FIELD_PRIORITY[2]),
    (WordSource::FirstModelWord, FIELD_PRIORITY[3]),
    (WordSource::FirstModelWord, FIELD_PRIORITY[4]),
];

/// Byte offset `n` characters before `pos`, clamped to 0.
fn chars_back(text: &str, pos: usize, n: usize) -> usize {
    let mut start = pos;
    for (i, _) in text[..pos].char_indices().rev().take(n) {
        start = i;
    }
    start
}

/// Byte offset `n` characters after `pos`, or `None` if the text ends first.
fn chars_forward(text: &str, pos: usize, n: usize) -> Option<usize> {
    text[pos..].char_indices().nth(n).map(|(i, _)| pos + i)
}

/// Cut an excerpt around the first occurrence of `word` in `text`.
///
/// Returns `None` if `word` is empty or does not occur (substring match,
/// case-sensitive).
pub fn highlight_word(text: &str, word: &str) -> Option<Highlight> {
    if word.is_empty() {
        return None;
    }
    let index = text.find(word)?;
    let word_end = index + word.len();

    let window_from = chars_back(text, index, NEIGHBORHOOD_CHARS);
    let (start, prefix) = match text[window_from..].find(' ') {
        Some(offset) if window_from + offset < index => (window_from + offset, ELLIPSIS),
        _ => (0, ""),
    };

    let end_space = chars_forward(text, word_end, NEIGHBORHOOD_CHARS)
        .and_then(|from| text[from..].find(' ').map(|offset| from + offset));
    let (end, suffix) = match end_space {
        Some(end) => (end, ELLIPSIS),
        None => (text.len(), ""),
    };

    let excerpt = format!("{}{}{}", prefix, &text[start..end], suffix);
    let short_index = prefix.len() + (index - start);
    let excerpt1 = excerpt[..short_index].to_string();
    let excerpt2 = excerpt[short_index + word.len()..].to_string();

    Some(Highlight {
        index: short_index,
        excerpt,
        highlight_word: word.to_string(),
        excerpt1,
        excerpt2,
    })
}

/// Pick a title for an entity by walking [`HIGHLIGHT_PLAN`].
pub fn select_title(entity: &Entity, spotlight: Option<&str>) -> Option<Highlight> {
    let first = entity.model.first().map(|w| w.word.as_str());

    HIGHLIGHT_PLAN.iter().find_map(|&(source, field)| {
        let word = match source {
            WordSource::Spotlight => spotlight,
            WordSource::FirstModelWord => first,
        }?;
        highlight_word(field.text(&entity.breed), word)
    })
}
