// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A case-folded letter together with how many times it occurs.
/// The count is always at least 1 inside a `Signature`.
pub type Occurrence = (char, usize);

/// An ordered list of words. `["man", "yes"]` and `["yes", "man"]` are distinct.
pub type Sentence = Vec<String>;

/// The canonical letter-frequency encoding of a piece of text.
///
/// Entries are strictly sorted by letter and never carry a zero count, so two
/// signatures compare (and hash) equal exactly when they describe the same
/// multiset of letters. This is what lets a `Signature` key the dictionary index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(Vec<Occurrence>);

impl Signature {
    /// The signature of the empty letter multiset.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Builds a canonical signature from arbitrary `(letter, count)` pairs.
    /// Counts for the same letter are summed and zero totals are dropped.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = Occurrence>,
    {
        let mut merged: BTreeMap<char, usize> = BTreeMap::new();
        for (letter, count) in counts {
            *merged.entry(letter).or_insert(0) += count;
        }
        Self(merged.into_iter().filter(|&(_, count)| count > 0).collect())
    }

    /// Wraps entries that are already sorted and zero-free.
    pub(crate) fn from_sorted(occurrences: Vec<Occurrence>) -> Self {
        debug_assert!(occurrences.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(occurrences.iter().all(|&(_, count)| count > 0));
        Self(occurrences)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of letters, counting repeats.
    pub fn letter_count(&self) -> usize {
        self.0.iter().map(|&(_, count)| count).sum()
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "∅");
        }
        for (i, (letter, count)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}{count}")?;
        }
        Ok(())
    }
}
