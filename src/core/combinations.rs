// File: src/core/combinations.rs
use crate::core::types::{Occurrence, Signature};
use crate::error::{AnagramError, Result};
use std::collections::BTreeMap;

/// Enumerates every sub-signature of `signature`, including the empty one and
/// `signature` itself. The result holds `∏(count + 1)` entries in no
/// particular order.
pub fn combinations(signature: &Signature) -> Vec<Signature> {
    let mut acc: Vec<Vec<Occurrence>> = vec![Vec::new()];

    // Walking from the last letter to the first means every prepended entry is
    // smaller than the ones already in the partial, which keeps it sorted.
    for &(letter, max) in signature.iter().rev() {
        let mut next = Vec::with_capacity(acc.len() * (max + 1));
        for count in 1..=max {
            for partial in &acc {
                let mut extended = Vec::with_capacity(partial.len() + 1);
                extended.push((letter, count));
                extended.extend_from_slice(partial);
                next.push(extended);
            }
        }
        // Letter absent.
        next.append(&mut acc);
        acc = next;
    }

    acc.into_iter().map(Signature::from_sorted).collect()
}

/// Removes the letters of `y` from `x`. `y` must be a sub-signature of `x`.
pub fn subtract(x: &Signature, y: &Signature) -> Result<Signature> {
    let mut remaining: BTreeMap<char, usize> = x.iter().copied().collect();

    for &(letter, requested) in y {
        let available = remaining.get(&letter).copied().unwrap_or(0);
        match available.checked_sub(requested) {
            Some(0) => {
                remaining.remove(&letter);
            }
            Some(left) => {
                remaining.insert(letter, left);
            }
            None => {
                return Err(AnagramError::InvalidSubtraction {
                    letter,
                    available,
                    requested,
                })
            }
        }
    }

    Ok(Signature::from_sorted(remaining.into_iter().collect()))
}
