use thiserror::Error;

use crate::backup::RenamePair;
use crate::scanner::ScannerError;

/// Per-entry failures. None of these abort a batch.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("File already exists: {0}")]
    NameCollision(String),

    #[error("File does not exist: {0}")]
    SourceMissing(String),

    #[error("Not a valid file name: '{0}'")]
    InvalidTarget(String),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Io {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures that stop a process run before any entry is touched
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScannerError),
}

/// Options for a process run
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Refuse renames that would leave a blank base name
    pub skip_if_result_blank: bool,
    /// Treat subdirectories as renamable entries
    pub include_directories: bool,
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            skip_if_result_blank: true,
            include_directories: false,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UndoOptions {
    pub dry_run: bool,
}

/// What happened to a single entry
#[derive(Debug)]
pub enum RenameOutcome {
    /// The entry was moved
    Renamed { from: String, to: String },
    /// The entry would be moved (dry run)
    Planned { from: String, to: String },
    /// The substitution left nothing of the base name
    SkippedBlank { from: String },
    Failed {
        from: String,
        to: String,
        error: RenameError,
    },
}

impl RenameOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RenameOutcome::Failed { .. })
    }
}

/// Outcomes of a process or undo run, in the order entries were handled
#[derive(Debug, Default)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
    pub dry_run: bool,
}

impl RenameReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, outcome: RenameOutcome) {
        self.outcomes.push(outcome);
    }

    /// Entries actually moved
    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count()
    }

    /// Entries a dry run would move
    pub fn planned_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Planned { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::SkippedBlank { .. }))
            .count()
    }

    /// Successful renames as backup pairs, in processing order
    pub fn pairs(&self) -> Vec<RenamePair> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                RenameOutcome::Renamed { from, to } => Some(RenamePair::new(from, to)),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renamed(from: &str, to: &str) -> RenameOutcome {
        RenameOutcome::Renamed {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_default_options() {
        let options = RenameOptions::default();
        assert!(options.skip_if_result_blank);
        assert!(!options.include_directories);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_report_counts() {
        let mut report = RenameReport::new(false);
        assert!(report.is_empty());

        report.push(renamed("a1.txt", "a_.txt"));
        report.push(RenameOutcome::SkippedBlank {
            from: "123.txt".to_string(),
        });
        report.push(RenameOutcome::Failed {
            from: "a.txt".to_string(),
            to: "b.txt".to_string(),
            error: RenameError::NameCollision("b.txt".to_string()),
        });
        report.push(renamed("c2.txt", "c_.txt"));

        assert_eq!(report.len(), 4);
        assert_eq!(report.renamed_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.planned_count(), 0);
    }

    #[test]
    fn test_pairs_keep_order_and_skip_failures() {
        let mut report = RenameReport::new(false);
        report.push(renamed("b1", "b_"));
        report.push(RenameOutcome::Failed {
            from: "x".to_string(),
            to: "y".to_string(),
            error: RenameError::SourceMissing("x".to_string()),
        });
        report.push(renamed("a1", "a_"));

        assert_eq!(
            report.pairs(),
            vec![RenamePair::new("b1", "b_"), RenamePair::new("a1", "a_")]
        );
    }

    #[test]
    fn test_planned_outcomes_are_not_pairs() {
        let mut report = RenameReport::new(true);
        report.push(RenameOutcome::Planned {
            from: "a1".to_string(),
            to: "a_".to_string(),
        });

        assert_eq!(report.planned_count(), 1);
        assert!(report.pairs().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = RenameError::NameCollision("b.txt".to_string());
        assert_eq!(err.to_string(), "File already exists: b.txt");

        let err = RenameError::SourceMissing("gone.txt".to_string());
        assert_eq!(err.to_string(), "File does not exist: gone.txt");
    }
}
