//! meldfmt - run a code formatter and reconcile its changes
//!
//! Given a source file or directory tree, run a pluggable formatter backend
//! over the content, detect whether it changed anything beyond line-ending
//! style, and either apply the change directly or hand original and
//! formatted versions to an interactive three-way merge tool (meld) so a
//! human can pick which edits to keep.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod classify;
pub mod cli;
pub mod collect;
pub mod error;
pub mod exec;
pub mod formatter;
pub mod process;
pub mod reconcile;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use error::{Error, Result};
pub use formatter::{Autopep8, ClangFormat, Formatter, FormatterKind};
pub use process::{format_dir, format_file, FormatOutcome};
pub use reconcile::ReconcileMode;
