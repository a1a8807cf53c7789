// File: src/error.rs
use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, AnagramError>;

#[derive(Error, Debug)]
pub enum AnagramError {
    /// The subtrahend is not a sub-signature of the minuend.
    #[error("cannot subtract {requested} x '{letter}' from a signature holding {available}")]
    InvalidSubtraction {
        letter: char,
        available: usize,
        requested: usize,
    },

    #[error("input has {letters} letters, the configured limit is {limit}")]
    InputTooLong { letters: usize, limit: usize },

    #[error("no dictionary path configured and no usable index snapshot")]
    MissingDictionary,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot format version {found} is not supported (expected {expected})")]
    IncompatibleSnapshot { found: u32, expected: u32 },

    #[error("snapshot does not hold a valid index: {0}")]
    CorruptSnapshot(String),

    #[error("snapshot was built from a different dictionary than {}", .0.display())]
    StaleSnapshot(std::path::PathBuf),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
