mod codes;

pub use codes::ExitCode;

use crate::backup::BackupError;
use crate::rename::ProcessError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: rname [-d <directory>] <pattern> [replacement]
       rname [-d <directory>] undo";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid pattern: {pattern}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Backup not found for `{key}`")]
    BackupNotFound { key: String },

    #[error("Backup file is corrupt: {path}")]
    BackupCorrupt { path: PathBuf, message: String },

    #[error("Backup error: {message}")]
    BackupError { message: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidArguments(_) => ExitCode::InvalidArguments,
            AppError::InvalidPattern { .. } => ExitCode::InvalidPattern,
            AppError::BackupNotFound { .. } => ExitCode::BackupNotFound,
            AppError::BackupCorrupt { .. } => ExitCode::BackupCorrupt,
            AppError::BackupError { .. } => ExitCode::BackupError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::InvalidArguments(message) => {
                format!("{}\n\n{}", message, USAGE)
            }

            AppError::InvalidPattern { pattern, message } => {
                format!(
                    "The pattern is not a valid regular expression:\n  {}\n\n{}\n\n\
                     No files were renamed.",
                    pattern, message
                )
            }

            AppError::BackupNotFound { key } => {
                format!(
                    "Backup not found for `{}`\n\n\
                     Nothing to undo: no rename has been recorded for this directory,\n\
                     or the last one was already undone.",
                    key
                )
            }

            AppError::BackupCorrupt { path, message } => {
                format!(
                    "The backup file cannot be read:\n  {}\n  {}\n\n\
                     No files were renamed. Delete the file to discard the backup.",
                    path.display(),
                    message
                )
            }

            AppError::BackupError { message } => {
                format!(
                    "Backup error: {}\n\n\
                     Check that the backup directory is writable \
                     (set RNAME_BACKUP_DIR or --backup-dir to change it).",
                    message
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<ProcessError> for AppError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::InvalidPattern { pattern, source } => AppError::InvalidPattern {
                pattern,
                message: source.to_string(),
            },
            ProcessError::Scan(e) => e.into(),
        }
    }
}

impl From<BackupError> for AppError {
    fn from(err: BackupError) -> Self {
        match err {
            BackupError::Corrupt { path, message } => AppError::BackupCorrupt { path, message },
            other => AppError::BackupError {
                message: other.to_string(),
            },
        }
    }
}
