//! Error types for loading rules and patching files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a patch run.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Reading or writing the target file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern could not be compiled.
    #[error("invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Command-line arguments could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more rules matched nothing while the unmatched policy is `error`.
    #[error("rules matched nothing: {}", .0.join(", "))]
    Unmatched(Vec<String>),
}

impl PatchError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PatchError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;
