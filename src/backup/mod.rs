mod store;
mod types;

pub use store::{directory_key, BackupError, BackupStore, BACKUP_EXTENSION};
pub use types::{BackupRecord, RenamePair};
