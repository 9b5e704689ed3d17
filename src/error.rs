//! Error types and result alias for meldfmt.
//!
//! Every failure mode of the engine is a distinct variant so callers can
//! match on what went wrong instead of parsing messages. Validation errors
//! carry a `role` naming which caller-supplied path failed ("File to
//! format" vs "Formatter setup") so the invocation can be corrected
//! immediately.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested formatter name does not match any known backend.
    #[error("formatter is not specified properly: {0:?} is not a known formatter")]
    FormatterNotSpecified(String),

    /// A required path does not exist.
    #[error("{role} does not exist: {path}")]
    PathNotFound { role: &'static str, path: PathBuf },

    /// A path exists but is not a regular file.
    #[error("{role} must point to a file: {path}")]
    NotAFile { role: &'static str, path: PathBuf },

    /// A path exists but is not a directory.
    #[error("directory to format must point to a directory: {0}")]
    NotADirectory(PathBuf),

    /// An external tool (merge tool, linter, formatter) is not on PATH.
    #[error("{tool} not found. Please install it and add it to PATH")]
    ToolUnavailable { tool: String },

    /// An invoked external process exited non-zero.
    #[error("external command failed:\n{output}")]
    CommandFailed { output: String },

    /// The merge tool exited non-zero.
    #[error("error occurred while running the merge tool:\n{output}")]
    MergeFailed { output: String },

    /// The formatter backend could not process the input.
    #[error("{formatter} could not format {path}: {message}")]
    Formatting {
        formatter: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
