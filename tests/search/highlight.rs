//! Result titles: which field and which word the excerpt comes from.

use super::common::{make_full_breed, siamese_entry, DATA_INDEX};
use whisker::{
    build_index, highlight_word, search, select_title, CatalogEntry, Highlight, SynonymTable,
};

fn assert_reassembles(h: &Highlight) {
    assert_eq!(format!("{}{}{}", h.excerpt1, h.highlight_word, h.excerpt2), h.excerpt);
    assert_eq!(h.index, h.excerpt1.len());
}

#[test]
fn test_siamese_title_excerpt() {
    let index = build_index(vec![siamese_entry()], &SynonymTable::new()).unwrap();
    let results = search(&index, "talkative").unwrap();
    let title = results[0].title.as_ref().unwrap();

    assert_reassembles(title);
    assert_eq!(title.excerpt, "... cats are very talkative.");
    assert_eq!(title.excerpt1, "... cats are very ");
    assert_eq!(title.excerpt2, ".");
}

#[test]
fn test_did_you_know_preferred_over_description() {
    let catalog = vec![CatalogEntry::new(
        "Bengal",
        make_full_breed(
            "Large",
            "Short",
            "Spotted",
            "Bengals like water bowls.",
            "Bengals swim in water happily.",
        ),
    )];
    let index = build_index(catalog, &SynonymTable::new()).unwrap();
    let results = search(&index, "water").unwrap();
    let title = results[0].title.as_ref().unwrap();
    assert!(title.excerpt.contains("swim in water"));
}

#[test]
fn test_falls_back_to_description() {
    let results = search(&DATA_INDEX, "climbers").unwrap();
    let bengal = results.iter().find(|r| r.key == "Bengal").unwrap();
    let title = bengal.title.as_ref().unwrap();

    assert_reassembles(title);
    assert_eq!(title.highlight_word, "climbers");
    assert!(title.excerpt1.ends_with("playful "));
    assert!(title.excerpt.starts_with("..."));
}

#[test]
fn test_every_data_result_reassembles() {
    for query in ["talkative", "coat", "water", "lap", "swimmers", "legend"] {
        for result in search(&DATA_INDEX, query).unwrap() {
            if let Some(title) = &result.title {
                assert_reassembles(title);
            }
        }
    }
}

#[test]
fn test_select_title_without_spotlight_uses_first_word() {
    let index = build_index(vec![siamese_entry()], &SynonymTable::new()).unwrap();
    let entity = index.entity("Siamese").unwrap();
    let first = entity.model.first().unwrap().word.clone();

    let title = select_title(entity, None).unwrap();
    assert_eq!(title.highlight_word, first);
}

#[test]
fn test_long_field_clipped_on_both_sides() {
    let text = "Maine Coons are gentle giants that follow their people from room to room \
                and chirp at birds through the window every single morning.";
    let h = highlight_word(text, "room").unwrap();
    assert_reassembles(&h);
    assert!(h.excerpt.starts_with("..."));
    assert!(h.excerpt.ends_with("..."));
    assert!(h.excerpt.len() < text.len());
}
