//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{BreedRecord, CatalogEntry};

/// A breed with only a description.
pub fn make_breed(description: &str) -> BreedRecord {
    BreedRecord {
        description: description.to_string(),
        ..BreedRecord::default()
    }
}

/// A breed with every field set.
pub fn make_full_breed(
    size: &str,
    coat: &str,
    color: &str,
    description: &str,
    did_you_know: &str,
) -> BreedRecord {
    BreedRecord {
        size: size.to_string(),
        coat: coat.to_string(),
        color: color.to_string(),
        description: description.to_string(),
        did_you_know: did_you_know.to_string(),
    }
}

/// The one-breed catalog used throughout the docs.
pub fn siamese_entry() -> CatalogEntry {
    CatalogEntry::new(
        "Siamese",
        make_full_breed(
            "Medium",
            "Short",
            "Cream",
            "Vocal and social.",
            "Siamese cats are very talkative.",
        ),
    )
}

/// A handful of breeds with overlapping vocabulary.
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        siamese_entry(),
        CatalogEntry::new(
            "Persian",
            make_full_breed(
                "Medium",
                "Long",
                "White",
                "Persians are quiet companions that enjoy a calm home.",
                "The Persian coat needs daily grooming.",
            ),
        ),
        CatalogEntry::new(
            "Bengal",
            make_full_breed(
                "Large",
                "Short",
                "Spotted",
                "Bengals are playful climbers with wild markings.",
                "Many Bengals love water and will join you in the shower.",
            ),
        ),
        CatalogEntry::new(
            "Maine Coon",
            make_full_breed(
                "Large",
                "Long",
                "Tabby",
                "Gentle giants, playful and friendly with children.",
                "Maine Coons often chirp instead of meowing.",
            ),
        ),
        CatalogEntry::new(
            "Sphynx",
            make_full_breed(
                "Medium",
                "Hairless",
                "Pink",
                "Warm, affectionate and curious.",
                "Sphynx cats need regular baths because their skin gets oily.",
            ),
        ),
        CatalogEntry::new(
            "Ragdoll",
            make_full_breed(
                "Large",
                "Semi-long",
                "Colorpoint",
                "Docile cats that go limp when held.",
                "Ragdolls follow their owners from room to room.",
            ),
        ),
    ]
}
