// File: src/core/search.rs
use crate::core::combinations::{combinations, subtract};
use crate::core::index::DictionaryIndex;
use crate::core::types::{Sentence, Signature};
use crate::error::Result;
use std::collections::HashMap;
use std::rc::Rc;

/// Sentences borrowed from the index while the search runs.
type Completions<'a> = Rc<Vec<Vec<&'a str>>>;

/// One top-level sentence search.
///
/// Completions are memoized per remainder signature for the lifetime of this
/// value only; create a fresh `SentenceSearch` per query.
pub struct SentenceSearch<'a> {
    index: &'a DictionaryIndex,
    memo: HashMap<Signature, Completions<'a>>,
}

impl<'a> SentenceSearch<'a> {
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self { index, memo: HashMap::new() }
    }

    /// Every sentence of dictionary words whose pooled letters are exactly `target`.
    pub fn run(mut self, target: &Signature) -> Result<Vec<Sentence>> {
        let found = self.completions(target)?;
        tracing::debug!(
            signature = %target,
            remainders = self.memo.len(),
            sentences = found.len(),
            "sentence search finished"
        );
        Ok(found
            .iter()
            .map(|words| words.iter().map(|w| w.to_string()).collect())
            .collect())
    }

    fn completions(&mut self, target: &Signature) -> Result<Completions<'a>> {
        if target.is_empty() {
            return Ok(Rc::new(vec![Vec::new()]));
        }
        if let Some(cached) = self.memo.get(target) {
            return Ok(Rc::clone(cached));
        }

        let index = self.index;
        let mut sentences = Vec::new();
        for candidate in combinations(target) {
            let words = index.lookup(&candidate);
            if words.is_empty() {
                continue;
            }
            let remainder = subtract(target, &candidate)?;
            let tails = self.completions(&remainder)?;
            for word in words {
                for tail in tails.iter() {
                    let mut sentence = Vec::with_capacity(tail.len() + 1);
                    sentence.push(word.as_str());
                    sentence.extend_from_slice(tail);
                    sentences.push(sentence);
                }
            }
        }

        let sentences = Rc::new(sentences);
        self.memo.insert(target.clone(), Rc::clone(&sentences));
        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::occurrences::sentence_occurrences;

    #[test]
    fn empty_target_yields_the_empty_sentence() {
        let index = DictionaryIndex::from_words(["a"]);
        let found = SentenceSearch::new(&index).run(&Signature::empty()).unwrap();
        assert_eq!(found, vec![Vec::<String>::new()]);
    }

    #[test]
    fn no_match_yields_nothing() {
        let index = DictionaryIndex::from_words(["ab"]);
        let found = SentenceSearch::new(&index)
            .run(&sentence_occurrences(&["abc"]))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn repeated_letters_use_single_letter_words() {
        let index = DictionaryIndex::from_words(["a", "aa"]);
        let mut found = SentenceSearch::new(&index)
            .run(&sentence_occurrences(&["aaa"]))
            .unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![
                vec!["a", "a", "a"],
                vec!["a", "aa"],
                vec!["aa", "a"],
            ]
        );
    }

    #[test]
    fn memo_is_populated_once_per_remainder() {
        let index = DictionaryIndex::from_words(["ab", "a", "b"]);
        let mut search = SentenceSearch::new(&index);
        let target = sentence_occurrences(&["ab"]);
        let first = search.completions(&target).unwrap();
        let second = search.completions(&target).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        // ab, a, b
        assert_eq!(search.memo.len(), 3);
    }
}
