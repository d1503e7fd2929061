// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus preprocessing: breed record → paragraph → sentences → model words.

use crate::text::{split_sentences, tokenize_words, TaggedWord, Tagger};
use crate::types::{BreedRecord, Entity, ModelWord, Sentence, WordModel};
use std::collections::HashSet;

/// Join the five fields in their fixed order.
///
/// The first four are separated by ". "; `did_you_know` is appended with no
/// separator at all, so "social." + "Siamese" becomes "social.Siamese".
pub fn compose_paragraph(breed: &BreedRecord) -> String {
    format!(
        "{}. {}. {}. {}{}",
        breed.size, breed.coat, breed.color, breed.description, breed.did_you_know
    )
}

/// Keep the first occurrence of each noun or verb in a sentence.
///
/// A word only counts as "seen" once it has been kept: if "play" shows up as an
/// adjective and later as a verb in the same sentence, the verb is kept.
pub fn extract_model_words(tagged: &[TaggedWord]) -> Vec<TaggedWord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::new();

    for token in tagged {
        if seen.contains(token.word.as_str()) || !token.pos.is_keyword_class() {
            continue;
        }
        seen.insert(token.word.as_str());
        kept.push(token.clone());
    }

    kept
}

/// Build an unweighted entity. Weights and synonyms are attached later, once
/// every paragraph is known.
pub fn preprocess_entity(
    tagger: &Tagger,
    key: String,
    breed: BreedRecord,
    paragraph_id: usize,
) -> Entity {
    let paragraph = compose_paragraph(&breed);
    let mut model = WordModel::new();

    let sentences = split_sentences(&paragraph)
        .into_iter()
        .map(|text| {
            let words = tokenize_words(&text);
            let tagged = tagger.tag(&words);
            let model_words = extract_model_words(&tagged);
            for token in &model_words {
                model.insert(ModelWord::unweighted(token));
            }
            Sentence {
                text,
                words,
                model_words,
            }
        })
        .collect();

    Entity {
        key,
        breed,
        paragraph,
        paragraph_id,
        sentences,
        model,
    }
}
