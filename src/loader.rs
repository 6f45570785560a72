//! File loading for documents and synonym tables.
//!
//! These are the only functions in the crate that touch the filesystem.
//! Their output is ready to hand to the canonical stage unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use canonical::SynonymTable;

/// Errors raised while reading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path of the file that could not be loaded.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } => path,
        }
    }
}

/// Appends `.<default_extension>` to `path` unless it already ends with it.
///
/// ```rust
/// use std::path::PathBuf;
/// use tuplecheck::resolve_path;
///
/// assert_eq!(resolve_path("essay", Some("txt")), PathBuf::from("essay.txt"));
/// assert_eq!(resolve_path("essay.txt", Some("txt")), PathBuf::from("essay.txt"));
/// assert_eq!(resolve_path("essay.md", Some("txt")), PathBuf::from("essay.md.txt"));
/// assert_eq!(resolve_path("essay", None), PathBuf::from("essay"));
/// ```
pub fn resolve_path(path: impl AsRef<Path>, default_extension: Option<&str>) -> PathBuf {
    let path = path.as_ref();
    let Some(ext) = default_extension else {
        return path.to_path_buf();
    };
    let suffix = format!(".{ext}");
    if path.as_os_str().to_string_lossy().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut resolved = path.as_os_str().to_os_string();
    resolved.push(&suffix);
    PathBuf::from(resolved)
}

/// Reads a document and flattens it to one line.
///
/// Every line is followed by a single space, so a file holding one blank
/// line loads as `" "` while a zero-byte file loads as `""`. Case is left
/// alone; lowercasing belongs to the canonical stage.
pub fn load_document_text(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    let mut text = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        text.push_str(line);
        text.push(' ');
    }
    debug!(path = %path.display(), bytes = raw.len(), "document_loaded");
    Ok(text)
}

/// Reads and parses a synonym file, one group per line.
pub fn load_synonym_table(path: impl AsRef<Path>) -> Result<SynonymTable, LoadError> {
    let path = path.as_ref();
    let table = SynonymTable::parse(&read(path)?);
    debug!(path = %path.display(), keys = table.len(), "synonyms_loaded");
    Ok(table)
}

/// Reads a file as text. Invalid UTF-8 sequences become U+FFFD, which the
/// delimiter step later turns into a word boundary.
fn read(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), "invalid_utf8_replaced");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}
