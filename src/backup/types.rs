use serde::{Deserialize, Serialize};

/// One successful rename, stored as a two element JSON array
/// `["original", "renamed"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePair(pub String, pub String);

impl RenamePair {
    pub fn new(original: impl Into<String>, renamed: impl Into<String>) -> Self {
        Self(original.into(), renamed.into())
    }

    /// Name the entry had before the rename
    pub fn original(&self) -> &str {
        &self.0
    }

    /// Name the entry was given
    pub fn renamed(&self) -> &str {
        &self.1
    }
}

/// The persisted record of the most recent rename batch in a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Directory key the record belongs to
    pub directory: String,

    /// Successful renames in the order they happened
    pub pairs: Vec<RenamePair>,
}

impl BackupRecord {
    pub fn new(directory: String, pairs: Vec<RenamePair>) -> Self {
        Self { directory, pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}
