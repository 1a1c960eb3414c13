//! Persisted document access and sync checking.
//!
//! Responsibilities:
//! - Compare a fresh rendering with the persisted document.
//! - Read and write the persisted document as whole files.
//!
//! Does NOT handle:
//! - Deciding whether to write (see `run`).
//!
//! Invariants:
//! - The comparison is exact string equality; there is no structural diffing.
//! - A missing document is out of sync.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::DocsError;

/// Whether the persisted document matches the fresh rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    InSync,
    OutOfSync,
}

impl SyncStatus {
    pub fn is_in_sync(self) -> bool {
        self == Self::InSync
    }
}

/// Compare the fresh rendering with the persisted content, if any.
pub fn check_sync(rendered: &str, persisted: Option<&str>) -> SyncStatus {
    match persisted {
        Some(content) if content == rendered => SyncStatus::InSync,
        _ => SyncStatus::OutOfSync,
    }
}

/// Read the persisted document, returning `None` when it does not exist.
pub fn read_persisted(path: &Path) -> Result<Option<String>, DocsError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Persisted document does not exist");
            Ok(None)
        }
        Err(e) => Err(DocsError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Overwrite the document, creating parent directories as needed.
pub fn write_document(path: &Path, content: &str) -> Result<(), DocsError> {
    let io_err = |source| DocsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, content).map_err(io_err)?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote hot keys document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn equal_content_is_in_sync() {
        assert_eq!(check_sync("same", Some("same")), SyncStatus::InSync);
    }

    #[test]
    fn any_difference_is_out_of_sync() {
        assert_eq!(check_sync("same", Some("same\n")), SyncStatus::OutOfSync);
        assert_eq!(check_sync("same", Some("Same")), SyncStatus::OutOfSync);
    }

    #[test]
    fn missing_document_is_out_of_sync() {
        assert_eq!(check_sync("anything", None), SyncStatus::OutOfSync);
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_persisted(&dir.path().join("absent.md")).unwrap(), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs").join("hotkeys.md");

        write_document(&path, "content").unwrap();

        assert_eq!(read_persisted(&path).unwrap().as_deref(), Some("content"));
    }

    #[test]
    fn read_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_persisted(dir.path()).unwrap_err();
        assert!(matches!(err, DocsError::Io { .. }));
    }
}
