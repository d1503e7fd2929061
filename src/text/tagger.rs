// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small Brill-style part-of-speech tagger.
//!
//! Only one question is ever asked of a tag downstream: is this token a noun or
//! a verb? So the tagger doesn't try to be a full English model. It knows the
//! closed-class words (determiners, prepositions, pronouns, auxiliaries, common
//! adverbs and adjectives) from a lexicon, guesses open-class words from their
//! shape, and runs two contextual fixups. Unknown words default to `NN`, which
//! is what makes breed names and rare descriptive words searchable at all.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Penn Treebank tags, coarse enough for keyword extraction.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Common noun, singular.
    NN,
    /// Common noun, plural.
    NNS,
    /// Proper noun, singular.
    NNP,
    /// Proper noun, plural.
    NNPS,
    /// Verb, base form.
    VB,
    /// Verb, past tense.
    VBD,
    /// Verb, gerund.
    VBG,
    /// Verb, past participle.
    VBN,
    /// Verb, non-3rd person present.
    VBP,
    /// Verb, 3rd person present.
    VBZ,
    JJ,
    JJR,
    JJS,
    RB,
    RBR,
    RBS,
    DT,
    IN,
    CC,
    PRP,
    #[serde(rename = "PRP$")]
    PRPS,
    CD,
    MD,
    TO,
    WDT,
    WP,
    WRB,
    EX,
    UH,
    SYM,
}

impl PosTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::DT => "DT",
            PosTag::IN => "IN",
            PosTag::CC => "CC",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::CD => "CD",
            PosTag::MD => "MD",
            PosTag::TO => "TO",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WRB => "WRB",
            PosTag::EX => "EX",
            PosTag::UH => "UH",
            PosTag::SYM => "SYM",
        }
    }

    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_verb(self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    /// Nouns and verbs are the only tokens that become model words.
    pub fn is_keyword_class(self) -> bool {
        self.is_noun() || self.is_verb()
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub pos: PosTag,
}

static LEXICON: LazyLock<HashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let groups: &[(PosTag, &[&str])] = &[
        (
            PosTag::DT,
            &[
                "the", "a", "an", "this", "that", "these", "those", "every", "each", "some",
                "any", "no", "all", "both", "another", "either", "neither",
            ],
        ),
        (
            PosTag::IN,
            &[
                "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "about",
                "over", "under", "between", "through", "during", "without", "within", "as",
                "than", "like", "after", "before", "since", "until", "because", "if",
                "although", "though", "while", "among", "around", "against", "across", "upon",
                "toward", "towards", "near", "per", "whether", "despite",
            ],
        ),
        (PosTag::CC, &["and", "or", "but", "nor", "plus"]),
        (
            PosTag::PRP,
            &[
                "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them",
                "itself", "themselves", "himself", "herself", "yourself", "ourselves",
            ],
        ),
        (PosTag::PRPS, &["my", "your", "his", "its", "our", "their", "her"]),
        (
            PosTag::MD,
            &["can", "could", "may", "might", "must", "shall", "should", "will", "would"],
        ),
        (PosTag::TO, &["to"]),
        (PosTag::EX, &["there"]),
        (PosTag::WDT, &["which", "whatever"]),
        (PosTag::WP, &["who", "whom", "what"]),
        (PosTag::WRB, &["when", "where", "why", "how"]),
        (
            PosTag::RB,
            &[
                "not", "very", "also", "often", "too", "quite", "rather", "just", "only", "even",
                "still", "always", "never", "sometimes", "usually", "here", "well", "almost",
                "so", "much", "again", "already", "ever", "once", "then", "however", "yet",
                "perhaps", "especially", "generally",
            ],
        ),
        (PosTag::RBR, &["less"]),
        (PosTag::RBS, &["least"]),
        (PosTag::JJR, &["more", "bigger", "smaller", "larger", "longer", "shorter"]),
        (PosTag::JJS, &["most", "biggest", "smallest", "largest", "longest", "shortest"]),
        (
            PosTag::JJ,
            &[
                "medium", "large", "small", "big", "little", "short", "long", "great", "good",
                "new", "old", "high", "low", "many", "few", "other", "same", "different", "own",
                "soft", "thick", "dense", "fine", "such", "able", "known", "easy", "true",
            ],
        ),
        (PosTag::VBZ, &["is", "has", "does"]),
        (PosTag::VBP, &["are", "am", "have", "do"]),
        (PosTag::VBD, &["was", "were", "had", "did"]),
        (PosTag::VB, &["be"]),
        (PosTag::VBN, &["been"]),
        (PosTag::VBG, &["being"]),
        (PosTag::UH, &["oh", "yes", "wow"]),
    ];

    groups
        .iter()
        .flat_map(|(tag, words)| words.iter().map(move |w| (*w, *tag)))
        .collect()
});

/// Lexicon plus shape rules plus contextual fixups.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tagger;

impl Tagger {
    pub fn new() -> Self {
        Tagger
    }

    /// Tag a tokenized sentence. Output is parallel to the input.
    pub fn tag(&self, words: &[String]) -> Vec<TaggedWord> {
        let mut tagged: Vec<TaggedWord> = words
            .iter()
            .map(|w| TaggedWord {
                word: w.clone(),
                pos: self.lexical_tag(w),
            })
            .collect();

        for i in 1..tagged.len() {
            let prev = tagged[i - 1].pos;
            let current = tagged[i].pos;

            // "the walk", "their play": a verb reading after a determiner is a noun
            if matches!(prev, PosTag::DT | PosTag::PRPS)
                && matches!(current, PosTag::VB | PosTag::VBD | PosTag::VBP | PosTag::VBN)
            {
                tagged[i].pos = PosTag::NN;
            }

            // "to purr", "can climb": a bare noun reading after to/modal is a verb
            if matches!(prev, PosTag::TO | PosTag::MD) && current == PosTag::NN {
                tagged[i].pos = PosTag::VB;
            }
        }

        tagged
    }

    /// Tag a single word without context.
    pub fn lexical_tag(&self, word: &str) -> PosTag {
        if let Some(tag) = LEXICON.get(word) {
            return *tag;
        }
        let lower = word.to_lowercase();
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return *tag;
        }
        guess_by_shape(word, &lower)
    }
}

fn guess_by_shape(word: &str, lower: &str) -> PosTag {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::CD;
    }
    if !word.chars().any(char::is_alphabetic) {
        return if word.chars().any(|c| c.is_ascii_digit()) {
            PosTag::CD
        } else {
            PosTag::SYM
        };
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::NNP;
    }

    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ing") {
        PosTag::VBG
    } else if len > 3 && lower.ends_with("ed") {
        PosTag::VBN
    } else if len > 3 && lower.ends_with("ly") {
        PosTag::RB
    } else if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        PosTag::NNS
    } else {
        PosTag::NN
    }
}
