use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::types::RenameError;

/// True if something exists at `path`, without following symlinks
fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Both ends of a move must name an entry directly inside the directory
fn validate_target(name: &str) -> Result<(), RenameError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR);

    if invalid {
        return Err(RenameError::InvalidTarget(name.to_string()));
    }
    Ok(())
}

/// Rename `from` to `to` inside `directory`, never overwriting an existing entry
pub(crate) fn move_entry(directory: &Path, from: &str, to: &str) -> Result<(), RenameError> {
    validate_target(from)?;
    validate_target(to)?;

    let source = directory.join(from);
    let destination = directory.join(to);

    if !entry_exists(&source) {
        return Err(RenameError::SourceMissing(from.to_string()));
    }

    if entry_exists(&destination) {
        return Err(RenameError::NameCollision(to.to_string()));
    }

    fs::rename(&source, &destination).map_err(|e| RenameError::Io {
        from: from.to_string(),
        to: to.to_string(),
        source: e,
    })?;

    info!("Renamed: {} -> {}", from, to);
    Ok(())
}

/// Applies the same checks as [`move_entry`] to an imagined directory state,
/// so a dry run reports the collisions a real run would hit.
#[derive(Debug, Default)]
pub(crate) struct Simulation {
    claimed: HashSet<String>,
    vacated: HashSet<String>,
}

impl Simulation {
    fn exists(&self, directory: &Path, name: &str) -> bool {
        self.claimed.contains(name)
            || (!self.vacated.contains(name) && entry_exists(&directory.join(name)))
    }

    pub(crate) fn plan(&mut self, directory: &Path, from: &str, to: &str) -> Result<(), RenameError> {
        validate_target(from)?;
        validate_target(to)?;

        if !self.exists(directory, from) {
            return Err(RenameError::SourceMissing(from.to_string()));
        }

        if self.exists(directory, to) {
            return Err(RenameError::NameCollision(to.to_string()));
        }

        self.claimed.remove(from);
        self.vacated.insert(from.to_string());
        self.vacated.remove(to);
        self.claimed.insert(to.to_string());

        debug!("Planned: {} -> {}", from, to);
        Ok(())
    }
}
