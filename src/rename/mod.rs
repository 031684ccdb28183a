mod name;
mod process;
mod safe_move;
mod types;
mod undo;

pub use name::{substitute, NameParts, Substitution};
pub use process::{compile_pattern, process};
pub use types::{ProcessError, RenameError, RenameOptions, RenameOutcome, RenameReport, UndoOptions};
pub use undo::undo;
