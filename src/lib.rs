// src/lib.rs
//! Sentence anagrams over a fixed dictionary.
//!
//! Text is reduced to a [`Signature`], its sorted letter counts. The
//! [`DictionaryIndex`] groups words by signature, and a sentence search
//! splits a signature into sub-signatures that each match dictionary words.

pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::combinations::{combinations, subtract};
pub use crate::core::engine::AnagramEngine;
pub use crate::core::index::DictionaryIndex;
pub use crate::core::occurrences::{sentence_occurrences, word_occurrences};
pub use crate::core::search::SentenceSearch;
pub use crate::core::types::{Occurrence, Sentence, Signature};
pub use crate::error::{AnagramError, Result};
