use std::path::Path;

use clap::Parser;
use rname::backup::{directory_key, BackupStore};
use rname::cli::{Args, Mode};
use rname::config::config_from_env;
use rname::error::AppError;
use rname::logging;
use rname::output::{display_process_result, display_undo_result};
use rname::progress::Progress;
use rname::rename::{self, RenameOptions, UndoOptions};
use rname::scanner::validate_directory;
use tracing::{debug, error, info, warn};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mode = args.mode()?;
    let config = config_from_env().with_backup_dir(args.backup_dir.clone());

    debug!("Backup directory: {:?}", config.backup_dir);

    validate_directory(&args.directory)?;

    let store = BackupStore::new(config.backup_dir);
    let mut progress = Progress::new();

    match mode {
        Mode::Process {
            pattern,
            replacement,
        } => {
            let options = RenameOptions {
                skip_if_result_blank: !args.allow_blank,
                include_directories: args.include_dirs,
                dry_run: args.dry,
            };
            run_process(&args.directory, &pattern, &replacement, &options, &store, &mut progress)
        }
        Mode::Undo => {
            let options = UndoOptions { dry_run: args.dry };
            run_undo(&args.directory, &options, &store, &mut progress)
        }
    }
}

fn run_process(
    directory: &Path,
    pattern: &str,
    replacement: &str,
    options: &RenameOptions,
    store: &BackupStore,
    progress: &mut Progress,
) -> Result<(), AppError> {
    let result = rename::process(directory, pattern, replacement, options, progress)?;

    if !options.dry_run {
        // Written even when nothing was renamed, replacing the previous record
        let path = store.save(directory, result.pairs())?;
        progress.backup_saved(&path);
    }

    display_process_result(&result, pattern, directory, &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))
}

fn run_undo(
    directory: &Path,
    options: &UndoOptions,
    store: &BackupStore,
    progress: &mut Progress,
) -> Result<(), AppError> {
    let record = match store.load(directory)? {
        Some(record) => record,
        None => {
            return Err(AppError::BackupNotFound {
                key: directory_key(directory)?,
            })
        }
    };

    info!("Undo mode: {} recorded renames", record.len());

    let result = rename::undo(directory, &record, options, progress);

    if !options.dry_run {
        if result.failed_count() > 0 {
            warn!(
                "{} renames could not be undone; the backup is deleted anyway",
                result.failed_count()
            );
        }
        store.delete(directory)?;
        progress.backup_deleted(&record.directory);
    }

    display_undo_result(&result, &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))
}
