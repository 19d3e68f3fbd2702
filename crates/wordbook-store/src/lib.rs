use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use wordbook_core::Dictionary;

/// Import/export failures, kept distinguishable so a caller can react to a
/// missing source differently from an unreadable one.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Read a word -> candidate-list JSON map from `path` and union-merge every
/// entry into `dictionary` (duplicates collapse, same policy as
/// `add_translation`). Returns the number of merged entries.
///
/// The file is parsed in full before anything is merged, so the dictionary
/// is left unchanged on any failure.
pub fn import_translations(dictionary: &mut Dictionary, path: &Path) -> Result<usize, StoreError> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::FileNotFound(path.display().to_string()),
        _ => StoreError::Io(e),
    })?;
    let entries: BTreeMap<String, Vec<String>> =
        serde_json::from_str(&json).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    let merged = dictionary.merge_entries(entries);
    tracing::info!("imported {merged} entries into {dictionary} from {}", path.display());
    Ok(merged)
}

/// Write the dictionary's full map to `path` as a word -> candidate-list
/// JSON object, overwriting any existing content. Candidate lists are
/// sorted for stable output; only set-equality survives a round trip.
///
/// Serialization is read-only with respect to the dictionary: a transient
/// sorted view is built for output. The write goes through a temporary file
/// in the destination directory which is then persisted over the target.
pub fn export_translations(dictionary: &Dictionary, path: &Path) -> Result<(), StoreError> {
    let view: BTreeMap<&str, Vec<&str>> = dictionary
        .entries()
        .map(|(word, candidates)| {
            let mut list: Vec<&str> = candidates.iter().map(String::as_str).collect();
            list.sort_unstable();
            (word, list)
        })
        .collect();

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    let mut writer = io::BufWriter::new(&tmp);
    serde_json::to_writer_pretty(&mut writer, &view).map_err(io::Error::from)?;
    writer.flush()?;
    drop(writer);
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

    tracing::info!("exported {} entries from {dictionary} to {}", dictionary.len(), path.display());
    Ok(())
}
