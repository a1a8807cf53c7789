use crate::config::EngineConfig;
use crate::core::combinations;
use crate::core::index::DictionaryIndex;
use crate::core::occurrences::sentence_occurrences;
use crate::core::search::SentenceSearch;
use crate::core::types::{Sentence, Signature};
use crate::dictionary::{load_words, DictionarySource};
use crate::error::{AnagramError, Result};
use crate::persistence::{load_index, save_index};
use std::path::Path;

// The engine owns the immutable index; every search gets its own memo table.
// It is Send + Sync, so one engine can serve concurrent searches behind an Arc.
pub struct AnagramEngine {
    index: DictionaryIndex,
    config: EngineConfig,
    /// Word list file the index was built from, recorded in snapshots.
    source: Option<DictionarySource>,
}

impl AnagramEngine {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, EngineConfig::default())
    }

    pub fn with_config<I, S>(words: I, config: EngineConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_index(DictionaryIndex::from_words(words), config)
    }

    pub fn from_index(index: DictionaryIndex, config: EngineConfig) -> Self {
        Self { index, config, source: None }
    }

    pub fn from_word_file(path: &Path, config: EngineConfig) -> Result<Self> {
        // Probed before reading, so an edit made while loading shows up as stale next time.
        let source = DictionarySource::probe(path)?;
        let words = load_words(path)?;
        let mut engine = Self::with_config(words, config);
        engine.source = Some(source);
        Ok(engine)
    }

    /// Loads the cached index snapshot if there is a usable one, otherwise
    /// builds the index from the configured dictionary and caches it.
    ///
    /// A snapshot is only usable if it was built from the configured word list
    /// as it is now. When the word list cannot be read, the snapshot is used as is.
    pub fn from_cache_or_build(config: EngineConfig) -> Result<Self> {
        if let Some(cache) = config.index_cache.as_deref() {
            if cache.exists() {
                let expected = config
                    .dictionary
                    .as_deref()
                    .and_then(|path| DictionarySource::probe(path).ok());
                match load_index(cache, expected.as_ref()) {
                    Ok(index) => {
                        return Ok(Self {
                            index,
                            config,
                            source: expected,
                        })
                    }
                    Err(e) => {
                        tracing::warn!(path = %cache.display(), error = %e, "discarding index snapshot")
                    }
                }
            }
        }

        let dictionary = config
            .dictionary
            .clone()
            .ok_or(AnagramError::MissingDictionary)?;
        let engine = Self::from_word_file(&dictionary, config)?;
        if let Some(cache) = engine.config.index_cache.as_deref() {
            engine.save_index(cache)?;
        }
        Ok(engine)
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Signature of a word or sentence; words are pooled.
    pub fn occurrences<S: AsRef<str>>(&self, words: &[S]) -> Signature {
        sentence_occurrences(words)
    }

    pub fn anagrams_of_word(&self, word: &str) -> &[String] {
        self.index.anagrams_of_word(word)
    }

    pub fn combinations(&self, signature: &Signature) -> Vec<Signature> {
        combinations::combinations(signature)
    }

    pub fn subtract(&self, x: &Signature, y: &Signature) -> Result<Signature> {
        combinations::subtract(x, y)
    }

    /// Every ordering of dictionary words that uses exactly the letters of `sentence`.
    pub fn sentence_anagrams<S: AsRef<str>>(&self, sentence: &[S]) -> Result<Vec<Sentence>> {
        let target = sentence_occurrences(sentence);
        if let Some(limit) = self.config.max_letters {
            let letters = target.letter_count();
            if letters > limit {
                return Err(AnagramError::InputTooLong { letters, limit });
            }
        }
        SentenceSearch::new(&self.index).run(&target)
    }

    pub fn save_index(&self, path: &Path) -> Result<()> {
        save_index(&self.index, self.source.as_ref(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_bound_is_enforced() {
        let config = EngineConfig {
            max_letters: Some(3),
            ..EngineConfig::default()
        };
        let engine = AnagramEngine::with_config(["yes", "man"], config);
        let err = engine.sentence_anagrams(&["yes", "man"]).unwrap_err();
        assert!(matches!(err, AnagramError::InputTooLong { letters: 6, limit: 3 }));
        assert_eq!(engine.sentence_anagrams(&["yes"]).unwrap(), vec![vec!["yes"]]);
    }

    #[test]
    fn mixed_case_dictionary_entries_collapse() {
        let engine = AnagramEngine::new(["Yes", "yes", "MAN"]);
        let mut found = engine.sentence_anagrams(&["yes", "man"]).unwrap();
        found.sort();
        assert_eq!(found, vec![vec!["man", "yes"], vec!["yes", "man"]]);
    }

    #[test]
    fn build_without_dictionary_fails() {
        let err = AnagramEngine::from_cache_or_build(EngineConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, AnagramError::MissingDictionary));
    }
}
