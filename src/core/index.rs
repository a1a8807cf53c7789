// --- File: src/core/index.rs
use crate::core::occurrences::word_occurrences;
use crate::core::types::Signature;
use crate::error::{AnagramError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Groups dictionary words by their signature.
///
/// Built once, read-only afterwards. Buckets are sorted and deduplicated, and
/// the empty signature never has a bucket, so a sentence search can never
/// loop on a zero-letter word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryIndex {
    buckets: HashMap<Signature, Vec<String>>,
    word_count: usize,
}

impl DictionaryIndex {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: HashMap<Signature, Vec<String>> = HashMap::new();
        let mut skipped = 0usize;

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            let signature = word_occurrences(&word);
            if signature.is_empty() {
                skipped += 1;
                continue;
            }
            buckets.entry(signature).or_default().push(word);
        }

        let mut word_count = 0;
        for bucket in buckets.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
            word_count += bucket.len();
        }

        tracing::info!(
            words = word_count,
            signatures = buckets.len(),
            skipped,
            "built dictionary index"
        );

        Self { buckets, word_count }
    }

    /// Words whose signature is exactly `signature`. Empty when there are none.
    pub fn lookup(&self, signature: &Signature) -> &[String] {
        self.buckets
            .get(signature)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All dictionary words made of the same letters as `word`, `word` included
    /// if it is in the dictionary.
    pub fn anagrams_of_word(&self, word: &str) -> &[String] {
        self.lookup(&word_occurrences(word))
    }

    /// Number of distinct words indexed.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct signatures.
    pub fn signature_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Re-checks what `from_words` guarantees, for indexes that did not come
    /// through it (decoded snapshots).
    pub(crate) fn check_consistency(&self) -> Result<()> {
        let corrupt =
            |reason: String| -> Result<()> { Err(AnagramError::CorruptSnapshot(reason)) };

        let mut word_count = 0;
        for (signature, bucket) in &self.buckets {
            if signature.is_empty() {
                return corrupt("bucket for the empty signature".to_string());
            }
            if bucket.is_empty() {
                return corrupt(format!("empty bucket for {signature}"));
            }
            let misfiled = bucket
                .iter()
                .find(|w| word_occurrences(w.as_str()) != *signature || w.to_lowercase() != **w);
            if let Some(word) = misfiled {
                return corrupt(format!("word {word:?} filed under {signature}"));
            }
            word_count += bucket.len();
        }
        if word_count != self.word_count {
            return corrupt(format!(
                "word count {} does not match {} indexed words",
                self.word_count, word_count
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_words_by_signature() {
        let index = DictionaryIndex::from_words(["eat", "tea", "ate", "tan", "nat"]);
        assert_eq!(index.anagrams_of_word("tea"), &["ate", "eat", "tea"]);
        assert_eq!(index.anagrams_of_word("ant"), &["nat", "tan"]);
        assert_eq!(index.signature_count(), 2);
        assert_eq!(index.word_count(), 5);
    }

    #[test]
    fn words_are_lowercased_before_grouping() {
        let index = DictionaryIndex::from_words(["Yes", "yes", "YES"]);
        assert_eq!(index.anagrams_of_word("yes"), &["yes"]);
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn built_index_is_consistent() {
        let index = DictionaryIndex::from_words(["eat", "Tea", "", "tan"]);
        assert!(index.check_consistency().is_ok());
    }

    #[test]
    fn lookup_is_case_insensitive_on_the_query() {
        let index = DictionaryIndex::from_words(["married", "admirer"]);
        assert_eq!(index.anagrams_of_word("Married"), &["admirer", "married"]);
    }

    #[test]
    fn missing_signature_is_empty() {
        let index = DictionaryIndex::from_words(["player"]);
        assert!(index.anagrams_of_word("xyz").is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let index = DictionaryIndex::from_words(["yes", "yes", " yes "]);
        assert_eq!(index.anagrams_of_word("yes"), &["yes"]);
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn blank_words_are_never_indexed() {
        let index = DictionaryIndex::from_words(["", "   ", "a"]);
        assert!(index.lookup(&Signature::empty()).is_empty());
        assert_eq!(index.word_count(), 1);
    }
}
