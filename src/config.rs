use std::env;
use std::path::PathBuf;

/// Environment variable naming the directory that holds backup records
pub const ENV_BACKUP_DIR: &str = "RNAME_BACKUP_DIR";

/// Runtime configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backup_dir: PathBuf,
}

impl Config {
    /// Replace the backup directory when one was given explicitly
    pub fn with_backup_dir(mut self, backup_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = backup_dir {
            self.backup_dir = dir;
        }
        self
    }
}

/// Load configuration from environment variables
///
/// - `RNAME_BACKUP_DIR`: where backup records are kept. Defaults to the
///   system temp directory.
///
/// This can be set in a `.env` file in the working directory.
pub fn config_from_env() -> Config {
    let backup_dir = env::var_os(ENV_BACKUP_DIR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir);

    Config { backup_dir }
}
