// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence and word splitting.

/// Characters that may trail a sentence terminator and still belong to it.
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into words: maximal runs of alphanumerics and underscores.
///
/// Case is preserved and punctuation is dropped, so "don't" becomes
/// `["don", "t"]` and "social.Siamese" becomes `["social", "Siamese"]`.
///
/// # Example
///
/// ```
/// use whisker::tokenize_words;
///
/// assert_eq!(tokenize_words("Short, silky coat!"), vec!["Short", "silky", "coat"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into trimmed sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) that is followed by whitespace or the end of the text. A period
/// glued to the next word does not end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminator(next) || is_closer(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if at_boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}
