use clap::Parser;
use std::path::PathBuf;

use crate::error::AppError;

/// Positional word that selects undo mode
pub const UNDO_KEYWORD: &str = "undo";

#[derive(Parser, Debug)]
#[command(name = "rname")]
#[command(author, version, long_about = None)]
#[command(about = "Batch rename files in a directory with a regular expression, and undo the last run")]
#[command(after_help = "Examples:\n  rname -d photos '[0-9]' _\n  rname -d photos undo")]
pub struct Args {
    /// Regular expression matched against each file's base name
    pub pattern: Option<String>,

    /// Replacement for every match ($1 and ${name} refer to capture groups)
    pub replacement: Option<String>,

    /// Directory whose files are renamed
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Undo the last rename in the directory
    #[arg(short, long, conflicts_with_all = ["replacement"])]
    pub undo: bool,

    /// Show what would change without touching anything
    #[arg(long)]
    pub dry: bool,

    /// Allow substitutions that leave a blank base name
    #[arg(long)]
    pub allow_blank: bool,

    /// Also rename subdirectories
    #[arg(long)]
    pub include_dirs: bool,

    /// Directory holding backup records (overrides RNAME_BACKUP_DIR)
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Process {
        pattern: String,
        replacement: String,
    },
    Undo,
}

impl Args {
    /// Resolve the mode. A lone positional `undo` means undo.
    pub fn mode(&self) -> Result<Mode, AppError> {
        if self.undo {
            if self.pattern.is_some() {
                return Err(AppError::InvalidArguments(
                    "--undo does not take a pattern".to_string(),
                ));
            }
            return Ok(Mode::Undo);
        }

        match (&self.pattern, &self.replacement) {
            (Some(pattern), None) if pattern == UNDO_KEYWORD => Ok(Mode::Undo),
            (Some(pattern), replacement) => Ok(Mode::Process {
                pattern: pattern.clone(),
                replacement: replacement.clone().unwrap_or_default(),
            }),
            (None, _) => Err(AppError::InvalidArguments(
                "No pattern given".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rname").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_process_with_replacement() {
        let args = parse(&["-d", "photos", "[0-9]", "_"]);

        assert_eq!(args.directory, PathBuf::from("photos"));
        assert_eq!(
            args.mode().unwrap(),
            Mode::Process {
                pattern: "[0-9]".to_string(),
                replacement: "_".to_string()
            }
        );
    }

    #[test]
    fn test_replacement_defaults_to_empty() {
        let args = parse(&["[0-9]"]);

        assert_eq!(args.directory, PathBuf::from("."));
        assert_eq!(
            args.mode().unwrap(),
            Mode::Process {
                pattern: "[0-9]".to_string(),
                replacement: String::new()
            }
        );
    }

    #[test]
    fn test_undo_keyword() {
        let args = parse(&["-d", "photos", "undo"]);
        assert_eq!(args.mode().unwrap(), Mode::Undo);
    }

    #[test]
    fn test_undo_flag() {
        let args = parse(&["--undo", "-d", "photos"]);
        assert_eq!(args.mode().unwrap(), Mode::Undo);
    }

    #[test]
    fn test_undo_word_with_replacement_is_a_pattern() {
        let args = parse(&["undo", "redo"]);
        assert_eq!(
            args.mode().unwrap(),
            Mode::Process {
                pattern: "undo".to_string(),
                replacement: "redo".to_string()
            }
        );
    }

    #[test]
    fn test_undo_flag_with_pattern() {
        let args = parse(&["--undo", "abc"]);
        assert!(matches!(args.mode(), Err(AppError::InvalidArguments(_))));
    }

    #[test]
    fn test_missing_pattern() {
        let args = parse(&["-d", "photos"]);
        assert!(matches!(args.mode(), Err(AppError::InvalidArguments(_))));
    }

    #[test]
    fn test_flags() {
        let args = parse(&["--dry", "--allow-blank", "--include-dirs", "-vv", "x"]);

        assert!(args.dry);
        assert!(args.allow_blank);
        assert!(args.include_dirs);
        assert_eq!(args.verbose, 2);
    }
}
