use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// An immediate child of the scanned directory
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: String, is_dir: bool) -> Self {
        Self { name, is_dir }
    }
}

/// Check that `target` exists and is a directory
pub fn validate_directory(target: &Path) -> Result<(), ScannerError> {
    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    Ok(())
}

/// List the immediate entries of `target`, files and subdirectories alike.
///
/// Entries are sorted by name so a batch is processed in a stable order.
/// Names that are not valid UTF-8 cannot be matched and are left out.
/// A symlink counts as a directory when its target is one.
pub fn scan_directory(target: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    validate_directory(target)?;

    let mut entries = Vec::new();

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                warn!(name = ?raw, "Skipping entry with non UTF-8 name");
                continue;
            }
        };

        let is_dir = path.is_dir();

        entries.push(DirectoryEntry::new(name, is_dir));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
