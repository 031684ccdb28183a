use crate::rename::RenameReport;
use std::io::{self, Write};
use std::path::Path;

/// Display the summary of a process run
pub fn display_process_result(
    result: &RenameReport,
    pattern: &str,
    directory: &Path,
    writer: &mut impl Write,
) -> io::Result<()> {
    if result.dry_run {
        writeln!(
            writer,
            "Dry run: {} files would be processed by `{}`",
            result.planned_count(),
            pattern
        )?;
    } else {
        writeln!(
            writer,
            "{} files are processed by `{}`",
            result.renamed_count(),
            pattern
        )?;
    }

    write_problems(result, writer)?;

    if result.dry_run {
        writeln!(writer, "Run without --dry to apply these changes.")?;
    } else if result.renamed_count() > 0 {
        writeln!(writer, "to undo: rname -d {} undo", directory.display())?;
    }

    Ok(())
}

/// Display the summary of an undo run
pub fn display_undo_result(result: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    if result.dry_run {
        writeln!(
            writer,
            "Dry run: {} files would be restored",
            result.planned_count()
        )?;
    } else {
        writeln!(writer, "Processed {} files", result.renamed_count())?;
    }

    write_problems(result, writer)
}

fn write_problems(result: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    let failed = result.failed_count();
    if failed > 0 {
        writeln!(writer, "  {} files could not be renamed", failed)?;
    }

    let skipped = result.skipped_count();
    if skipped > 0 {
        writeln!(writer, "  {} files skipped (blank name)", skipped)?;
    }

    Ok(())
}
