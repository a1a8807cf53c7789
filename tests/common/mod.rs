//! Helpers shared across integration tests.

use anagram_core::{AnagramEngine, Sentence};

pub const YES_MAN_DICTIONARY: [&str; 9] =
    ["yes", "man", "men", "say", "as", "en", "my", "sane", "sean"];

pub fn yes_man_engine() -> AnagramEngine {
    AnagramEngine::new(YES_MAN_DICTIONARY)
}

pub fn sentence(words: &[&str]) -> Sentence {
    words.iter().map(|w| w.to_string()).collect()
}
