//! Format-and-reconcile orchestration.
//!
//! The pipeline ties the other modules together: validate the caller's
//! paths, have a formatter backend produce a candidate, classify the
//! change, reconcile it into the original, and surface any lint findings.
//!
//! The main entry points are [`format_file`] for a single file and
//! [`format_dir`] for a directory tree.

pub mod pipeline;

pub use pipeline::{format_dir, format_file, FormatOutcome};
