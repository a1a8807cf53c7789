// File: src/config.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const DEFAULT_MAX_DISPLAY: usize = 50;

/// Settings shared by the engine and the binaries.
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Word list, one word per line.
    pub dictionary: Option<PathBuf>,
    /// Where the built index snapshot is cached.
    pub index_cache: Option<PathBuf>,
    /// Upper bound on the letters of a sentence search input.
    pub max_letters: Option<usize>,
    /// How many sentences the binaries print.
    pub max_display: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            index_cache: None,
            max_letters: None,
            max_display: DEFAULT_MAX_DISPLAY,
        }
    }
}

impl EngineConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Command-line values win over the file; unset ones leave it alone.
    pub fn with_overrides(
        mut self,
        dictionary: Option<PathBuf>,
        index_cache: Option<PathBuf>,
        max_letters: Option<usize>,
    ) -> Self {
        if dictionary.is_some() {
            self.dictionary = dictionary;
        }
        if index_cache.is_some() {
            self.index_cache = index_cache;
        }
        if max_letters.is_some() {
            self.max_letters = max_letters;
        }
        self
    }
}
