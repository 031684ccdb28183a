pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod rename;
pub mod scanner;

pub use backup::{directory_key, BackupError, BackupRecord, BackupStore, RenamePair};
pub use config::{config_from_env, Config};
pub use error::{AppError, ExitCode};
pub use progress::Progress;
pub use rename::{
    process, undo, ProcessError, RenameError, RenameOptions, RenameOutcome, RenameReport,
    UndoOptions,
};
pub use scanner::{scan_directory, validate_directory, DirectoryEntry, ScannerError};
