use std::path::Path;

use tracing::{debug, info};

use crate::backup::BackupRecord;
use crate::progress::Progress;

use super::safe_move::{move_entry, Simulation};
use super::types::{RenameOutcome, RenameReport, UndoOptions};

/// Move every renamed entry of `record` back to its original name.
///
/// Pairs are replayed in record order. A pair whose renamed entry is gone,
/// or whose original name is taken again, is reported and skipped.
pub fn undo(
    directory: &Path,
    record: &BackupRecord,
    options: &UndoOptions,
    progress: &mut Progress,
) -> RenameReport {
    info!("Undoing {} renames in {:?}", record.len(), directory);
    progress.undo_start(record.len(), &record.directory);

    let mut report = RenameReport::new(options.dry_run);
    let mut simulation = Simulation::default();

    for pair in &record.pairs {
        let from = pair.renamed();
        let to = pair.original();

        debug!("Checking undo: {} -> {}", from, to);

        let result = if options.dry_run {
            simulation.plan(directory, from, to)
        } else {
            move_entry(directory, from, to)
        };

        let outcome = match result {
            Ok(()) if options.dry_run => RenameOutcome::Planned {
                from: from.to_string(),
                to: to.to_string(),
            },
            Ok(()) => RenameOutcome::Renamed {
                from: from.to_string(),
                to: to.to_string(),
            },
            Err(error) => RenameOutcome::Failed {
                from: from.to_string(),
                to: to.to_string(),
                error,
            },
        };

        progress.outcome(&outcome);
        report.push(outcome);
    }

    info!(
        restored = report.renamed_count(),
        failed = report.failed_count(),
        "Undo complete"
    );

    report
}
