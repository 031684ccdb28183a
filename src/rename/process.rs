use std::path::Path;

use regex::Regex;
use tracing::{debug, info, trace};

use crate::progress::Progress;
use crate::scanner::scan_directory;

use super::name::{substitute, Substitution};
use super::safe_move::{move_entry, Simulation};
use super::types::{ProcessError, RenameOptions, RenameOutcome, RenameReport};

/// Compile a user supplied pattern
pub fn compile_pattern(pattern: &str) -> Result<Regex, ProcessError> {
    Regex::new(pattern).map_err(|source| ProcessError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Rename every entry of `directory` whose base name matches `pattern`.
///
/// The pattern is compiled before anything is listed or moved. Per-entry
/// failures are recorded in the report and the batch carries on.
pub fn process(
    directory: &Path,
    pattern: &str,
    replacement: &str,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RenameReport, ProcessError> {
    let regex = compile_pattern(pattern)?;
    let entries = scan_directory(directory)?;

    info!(
        "Processing {} entries with `{}` -> `{}`",
        entries.len(),
        pattern,
        replacement
    );
    progress.process_start(directory, pattern, options.dry_run);

    let mut report = RenameReport::new(options.dry_run);
    let mut simulation = Simulation::default();

    for entry in &entries {
        if entry.is_dir && !options.include_directories {
            trace!(name = %entry.name, "Skipping subdirectory");
            continue;
        }

        let new_name = match substitute(
            &entry.name,
            &regex,
            replacement,
            options.skip_if_result_blank,
        ) {
            Substitution::NoMatch => continue,
            Substitution::Unchanged => {
                debug!(name = %entry.name, "Substitution leaves name unchanged");
                continue;
            }
            Substitution::Blank => {
                let outcome = RenameOutcome::SkippedBlank {
                    from: entry.name.clone(),
                };
                progress.outcome(&outcome);
                report.push(outcome);
                continue;
            }
            Substitution::Renamed(name) => name,
        };

        let result = if options.dry_run {
            simulation.plan(directory, &entry.name, &new_name)
        } else {
            move_entry(directory, &entry.name, &new_name)
        };

        let outcome = match result {
            Ok(()) if options.dry_run => RenameOutcome::Planned {
                from: entry.name.clone(),
                to: new_name,
            },
            Ok(()) => RenameOutcome::Renamed {
                from: entry.name.clone(),
                to: new_name,
            },
            Err(error) => RenameOutcome::Failed {
                from: entry.name.clone(),
                to: new_name,
                error,
            },
        };

        progress.outcome(&outcome);
        report.push(outcome);
    }

    info!(
        renamed = report.renamed_count(),
        failed = report.failed_count(),
        "Process complete"
    );

    Ok(report)
}
