// File: src/core/occurrences.rs
use crate::core::types::Signature;

/// Computes the signature of a single word. Letters are case-folded first.
pub fn word_occurrences(word: &str) -> Signature {
    Signature::from_counts(word.chars().flat_map(char::to_lowercase).map(|c| (c, 1)))
}

/// Computes the signature of a sentence by pooling the letters of all its words.
pub fn sentence_occurrences<S: AsRef<str>>(sentence: &[S]) -> Signature {
    Signature::from_counts(
        sentence
            .iter()
            .flat_map(|word| word.as_ref().chars())
            .flat_map(char::to_lowercase)
            .map(|c| (c, 1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_sorted_and_case_folded() {
        let sig = word_occurrences("Robert");
        assert_eq!(
            sig.occurrences(),
            &[('b', 1), ('e', 1), ('o', 1), ('r', 2), ('t', 1)]
        );
    }

    #[test]
    fn sentence_pools_letters_across_words() {
        let sig = sentence_occurrences(&["abcd", "e"]);
        assert_eq!(
            sig.occurrences(),
            &[('a', 1), ('b', 1), ('c', 1), ('d', 1), ('e', 1)]
        );
        assert_eq!(sentence_occurrences(&["Yes", "man"]), word_occurrences("yesman"));
    }

    #[test]
    fn empty_inputs_give_empty_signature() {
        assert!(word_occurrences("").is_empty());
        let none: [&str; 0] = [];
        assert!(sentence_occurrences(&none).is_empty());
    }
}
