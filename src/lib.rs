#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod filter;
pub mod listing;
pub mod natural;
pub mod preview;
pub mod rename;
pub mod sanitize;
pub mod session;
pub mod undo;

pub use errors::{Error, ErrorKind, Result};
pub use filter::{is_sentinel, ExtensionFilter, ALL_FILES, ALL_WITH_HIDDEN, HIDDEN_ONLY};
pub use listing::{list_files, split_basename, FileEntry};
pub use preview::format_outcome;
pub use rename::{
    rename_files, RenameOptions, RenameOutcome, TargetExtension, UndoSession,
    INVALID_EXTENSION_CHARS,
};
pub use sanitize::{fold_accents, replace_whitespace, sanitize_name};
pub use session::{JsonSessionStore, MemorySessionStore, SessionRecord, SessionStore};
pub use undo::reverse_session;
