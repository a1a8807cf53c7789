// File: src/persistence.rs
use crate::core::index::DictionaryIndex;
use crate::dictionary::DictionarySource;
use crate::error::{AnagramError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const SNAPSHOT_FORMAT_VERSION: u32 = 2;

/// The on-disk form of a built index.
#[derive(Serialize, Deserialize)]
struct IndexSnapshot<T> {
    format_version: u32,
    /// Word list the index was built from, if it came from a file.
    source: Option<DictionarySource>,
    index: T,
}

/// Writes the index atomically: serialize into a temp file next to `path`,
/// then rename it over the destination.
pub fn save_index(
    index: &DictionaryIndex,
    source: Option<&DictionarySource>,
    path: &Path,
) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = IndexSnapshot {
        format_version: SNAPSHOT_FORMAT_VERSION,
        source: source.cloned(),
        index,
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), "saved index snapshot");
    Ok(())
}

/// Loads a snapshot. With `expected` set, the snapshot must have been built
/// from exactly that word list.
pub fn load_index(path: &Path, expected: Option<&DictionarySource>) -> Result<DictionaryIndex> {
    let reader = BufReader::new(File::open(path)?);
    let snapshot: IndexSnapshot<DictionaryIndex> = bincode::deserialize_from(reader)?;

    if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(AnagramError::IncompatibleSnapshot {
            found: snapshot.format_version,
            expected: SNAPSHOT_FORMAT_VERSION,
        });
    }
    if let Some(expected) = expected {
        if snapshot.source.as_ref() != Some(expected) {
            return Err(AnagramError::StaleSnapshot(expected.path().to_path_buf()));
        }
    }
    snapshot.index.check_consistency()?;

    tracing::info!(
        path = %path.display(),
        words = snapshot.index.word_count(),
        "loaded index snapshot"
    );
    Ok(snapshot.index)
}
