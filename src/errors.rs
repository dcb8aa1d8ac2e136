use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], so callers can branch on the
/// category without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The supplied directory, filter or options are unusable.
    Configuration,
    /// A computed name failed the reserved-character check.
    Validation,
    /// A filesystem operation failed.
    Io,
    /// JSON data could not be read from the session store or produced from
    /// an outcome.
    Store,
}

/// Errors produced by listing, renaming and session reversal.
#[derive(Debug, Error)]
pub enum Error {
    /// The source path does not exist or is not a directory.
    #[error("invalid source directory: {}", path.display())]
    InvalidSource { path: PathBuf },

    /// An "all files" sentinel was combined with explicit extension names.
    #[error("conflicting contents {entry:?} with applied extension names")]
    ConflictingFilter { entry: String },

    /// Renaming was requested with an empty extension filter.
    #[error("no extension defined, files cannot be renamed")]
    NoExtensions,

    /// The final extension (or a hidden-file candidate name) ends with a
    /// reserved character.
    #[error("invalid character {character:?} at end of extension while renaming {file:?}")]
    InvalidExtension { character: char, file: String },

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed session store: {}", path.display())]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An outcome could not be rendered as JSON, e.g. because a path is not
    /// valid UTF-8.
    #[error("failed to render outcome as JSON")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSource { .. } | Self::ConflictingFilter { .. } | Self::NoExtensions => {
                ErrorKind::Configuration
            },
            Self::InvalidExtension { .. } => ErrorKind::Validation,
            Self::Io { .. } => ErrorKind::Io,
            Self::StoreFormat { .. } | Self::Serialize { .. } => ErrorKind::Store,
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
