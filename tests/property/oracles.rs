//! Differential tests against reference implementations.

use proptest::prelude::*;
use whisker::{levenshtein, levenshtein_within, split_sentences, TermFrequencyBuilder};

proptest! {
    /// Property: edit distance agrees with strsim on arbitrary Unicode.
    #[test]
    fn prop_levenshtein_matches_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: the bounded check agrees with the full distance.
    #[test]
    fn prop_within_matches_distance(a in "[a-c]{0,8}", b in "[a-c]{0,8}", max in 0usize..5) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein(&a, &b) <= max);
    }

    /// Property: splitting loses no words.
    #[test]
    fn prop_sentences_keep_all_words(words in prop::collection::vec("[a-z]{1,6}[.!?]?", 1..20)) {
        let text = words.join(" ");
        let rejoined = split_sentences(&text).join(" ");
        let strip = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(strip(&rejoined), strip(&text));
    }
}

#[test]
fn test_idf_matches_formula() {
    let mut builder = TermFrequencyBuilder::new();
    builder.add_document("calm lap cat");
    builder.add_document("playful cat");
    builder.add_document("playful climber");
    builder.add_document("quiet companion");
    let tf = builder.finish();

    let n = 4.0_f64;
    assert!((tf.idf("playful") - (1.0 + (n / 3.0).ln())).abs() < 1e-12);
    assert!((tf.idf("calm") - (1.0 + (n / 2.0).ln())).abs() < 1e-12);
    assert!((tf.idf("absent") - (1.0 + n.ln())).abs() < 1e-12);
    assert!((tf.tfidf("cat", 0) - tf.idf("cat")).abs() < 1e-12);
}
