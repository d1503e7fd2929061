// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: sentences, word tokens, and part-of-speech tags.
//!
//! The corpus and the query go through the same word tokenizer, so whatever a
//! model word looks like, a query token can spell it identically. No stemming
//! and no case folding happens here: highlighting later searches the raw field
//! text for the model word verbatim, so the surface form has to survive.

mod tagger;
mod tokenizer;

pub use tagger::*;
pub use tokenizer::*;
