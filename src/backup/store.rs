use super::types::{BackupRecord, RenamePair};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const BACKUP_EXTENSION: &str = "json";

/// Everything that is not allowed in a directory key
static KEY_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Backup file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize backup: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Backup file is corrupt: {path}: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// Derive the key that identifies `directory` in the backup store.
///
/// The path is canonicalized first so that `docs`, `./docs` and
/// `docs/sub/..` all map to the same key.
pub fn directory_key(directory: &Path) -> Result<String, BackupError> {
    let absolute = match fs::canonicalize(directory) {
        Ok(path) => path,
        Err(e) => {
            debug!(path = ?directory, error = %e, "Cannot canonicalize, using absolute path");
            std::path::absolute(directory)?
        }
    };

    let key = KEY_STRIP
        .replace_all(&absolute.to_string_lossy(), "")
        .into_owned();

    debug!(path = ?absolute, key = %key, "Derived directory key");
    Ok(key)
}

/// Keeps one backup record per directory key as `<key>.json` under `root`.
///
/// Records are overwritten without locking: two concurrent runs against the
/// same directory leave whichever record was written last.
#[derive(Debug, Clone)]
pub struct BackupStore {
    root: PathBuf,
}

impl BackupStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of the record for a directory key
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", key, BACKUP_EXTENSION))
    }

    /// Persist `pairs` as the record for `directory`, replacing any older one
    pub fn save(&self, directory: &Path, pairs: Vec<RenamePair>) -> Result<PathBuf, BackupError> {
        let key = directory_key(directory)?;
        let path = self.path_for_key(&key);
        let record = BackupRecord::new(key, pairs);

        fs::create_dir_all(&self.root)?;

        // Write to temporary file first (atomic write)
        let temp_path = path.with_extension(format!("{}.tmp", BACKUP_EXTENSION));

        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &record).map_err(BackupError::Serialize)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, &path)?;

        info!("Saved backup with {} pairs to {:?}", record.len(), path);
        Ok(path)
    }

    /// Load the record for `directory`, or `None` if there is none
    pub fn load(&self, directory: &Path) -> Result<Option<BackupRecord>, BackupError> {
        let key = directory_key(directory)?;
        let path = self.path_for_key(&key);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No backup found at {:?}", path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let record: BackupRecord =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| BackupError::Corrupt {
                path: path.clone(),
                message: format!("Invalid JSON: {}", e),
            })?;

        if record.directory != key {
            return Err(BackupError::Corrupt {
                path,
                message: format!(
                    "Record belongs to '{}', expected '{}'",
                    record.directory, key
                ),
            });
        }

        info!("Loaded backup with {} pairs from {:?}", record.len(), path);
        Ok(Some(record))
    }

    /// Remove the record for `directory`. Returns whether a file was removed.
    pub fn delete(&self, directory: &Path) -> Result<bool, BackupError> {
        let key = directory_key(directory)?;
        let path = self.path_for_key(&key);

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted backup {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
