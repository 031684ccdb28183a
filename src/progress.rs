//! Progress output for user-facing status updates.
//!
//! Every entry the engine handles becomes one line on stderr, colored when
//! the terminal supports it. The final summary goes to stdout through the
//! output module.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::rename::RenameOutcome;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        if !colors_enabled {
            colored::control::set_override(false);
        }
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report the start of a process run
    pub fn process_start(&mut self, directory: &Path, pattern: &str, dry_run: bool) {
        if self.silent {
            return;
        }
        let verb = if dry_run { "Checking" } else { "Renaming" };
        let line = format!(
            "{} entries of {} matching `{}`",
            verb,
            directory.display(),
            pattern
        );
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.bold());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report what happened to one entry
    pub fn outcome(&mut self, outcome: &RenameOutcome) {
        if self.silent {
            return;
        }
        match outcome {
            RenameOutcome::Renamed { from, to } => self.moved("Renamed", from, to),
            RenameOutcome::Planned { from, to } => self.moved("Would rename", from, to),
            RenameOutcome::SkippedBlank { from } => {
                self.warn(&format!("Blank name not set: {}", from))
            }
            RenameOutcome::Failed { error, .. } => self.warn(&error.to_string()),
        }
    }

    fn moved(&mut self, verb: &str, from: &str, to: &str) {
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                verb.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "{} '{}' -> '{}'", verb, from, to);
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report backup record written
    pub fn backup_saved(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        let line = format!("Backup saved to: {}", path.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report starting an undo run
    pub fn undo_start(&mut self, total: usize, key: &str) {
        if self.silent {
            return;
        }
        let line = format!("Restoring {} files from backup `{}`", total, key);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.bold());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report backup record removed after undo
    pub fn backup_deleted(&mut self, key: &str) {
        if self.silent {
            return;
        }
        let line = format!("Backup deleted for `{}`", key);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::RenameError;

    fn create_test_progress() -> (Progress, std::sync::Arc<std::sync::Mutex<Vec<u8>>>) {
        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    struct TestWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(buffer: &std::sync::Arc<std::sync::Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_renamed_outcome() {
        let (mut progress, buffer) = create_test_progress();

        progress.outcome(&RenameOutcome::Renamed {
            from: "1t2e3s4t5.txt".to_string(),
            to: "_t_e_s_t_.txt".to_string(),
        });

        assert_eq!(
            output(&buffer),
            "Renamed '1t2e3s4t5.txt' -> '_t_e_s_t_.txt'\n"
        );
    }

    #[test]
    fn test_failed_outcome() {
        let (mut progress, buffer) = create_test_progress();

        progress.outcome(&RenameOutcome::Failed {
            from: "a.txt".to_string(),
            to: "b.txt".to_string(),
            error: RenameError::NameCollision("b.txt".to_string()),
        });

        assert!(output(&buffer).contains("Warning: File already exists: b.txt"));
    }

    #[test]
    fn test_blank_outcome() {
        let (mut progress, buffer) = create_test_progress();

        progress.outcome(&RenameOutcome::SkippedBlank {
            from: "123.txt".to_string(),
        });

        assert!(output(&buffer).contains("Blank name not set: 123.txt"));
    }

    #[test]
    fn test_silent_writes_nothing() {
        let mut progress = Progress::silent();
        progress.warn("ignored");
        progress.backup_deleted("key");
    }
}
