// File: src/dictionary.rs
//! Loading word lists and turning raw input lines into sentences.

use crate::core::types::Sentence;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Identifies the word list file an index was built from.
/// Any change of path, size or modification time makes it a different source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySource {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl DictionarySource {
    pub fn probe(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            path: fs::canonicalize(path)?,
            len: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads a word list file, one word per line.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let words = read_words(BufReader::new(File::open(path)?))?;
    tracing::info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Reads one word per line. Entries are trimmed and lowercased; blank lines,
/// `#` comments and entries with non-alphabetic characters are skipped.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        if entry.chars().all(char::is_alphabetic) {
            words.push(entry.to_lowercase());
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "ignored non-alphabetic word list entries");
    }
    Ok(words)
}

/// Splits an input line into words, keeping only alphabetic characters.
pub fn tokenize_sentence(line: &str) -> Sentence {
    line.split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_alphabetic()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_and_normalizes_entries() {
        let input = "# header\nYes\n  man \n\nrock'n'roll\nmen\n";
        let words = read_words(Cursor::new(input)).unwrap();
        assert_eq!(words, vec!["yes", "man", "men"]);
    }

    #[test]
    fn tokenize_strips_punctuation() {
        assert_eq!(tokenize_sentence("  Yes, man! "), vec!["Yes", "man"]);
        assert_eq!(tokenize_sentence("-- ..."), Vec::<String>::new());
    }

    #[test]
    fn source_changes_with_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "yes\nman\n").unwrap();
        let before = DictionarySource::probe(&path).unwrap();
        assert_eq!(DictionarySource::probe(&path).unwrap(), before);

        fs::write(&path, "yes\nman\nmen\n").unwrap();
        assert_ne!(DictionarySource::probe(&path).unwrap(), before);
    }

    #[test]
    fn load_words_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_words(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, crate::error::AnagramError::Io(_)));
    }
}
