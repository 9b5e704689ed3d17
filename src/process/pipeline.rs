//! Single-file and directory formatting entry points.
//!
//! Control flow: `format_dir` → collector → for each candidate path →
//! `format_file` → backend (produce candidate) → classifier (decide) →
//! reconciler (apply/merge) → optional lint. Processing is sequential and
//! fail-fast: the first per-file error aborts a directory run.

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::collect::collect_files;
use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::reconcile::{reconcile, ReconcileMode};

/// Role labels used in path validation errors.
const TARGET_ROLE: &str = "File to format";
const SETTINGS_ROLE: &str = "Formatter setup file";

/// Outcome of formatting one file.
#[derive(Debug, Clone, Default)]
pub struct FormatOutcome {
    /// Whether the file content actually changed.
    pub changed: bool,
    /// Path now holding the reconciled content; `None` when nothing changed.
    pub final_path: Option<PathBuf>,
    /// Linter diagnostics for the reconciled file, if any.
    pub lint_report: Option<String>,
}

/// Format one file and reconcile the result.
///
/// The path and optional settings path are resolved against the current
/// working directory, tolerating one layer of surrounding double quotes
/// (paste-from-shell inputs). An unchanged file yields an outcome with
/// `changed = false` and no `final_path`.
///
/// # Errors
///
/// `PathNotFound`/`NotAFile` for invalid target or settings paths,
/// `ToolUnavailable` when a required external tool is missing, plus any
/// backend, merge, or lint failure.
pub fn format_file(
    formatter: &dyn Formatter,
    path: &Path,
    settings: Option<&Path>,
    mode: ReconcileMode,
) -> Result<FormatOutcome> {
    let path = resolve_path(path)?;
    validate_file(TARGET_ROLE, &path)?;
    let settings = resolve_settings(settings)?;

    match mode {
        ReconcileMode::Interactive => info!(
            "Formatting {} with {}, merging changes interactively",
            path.display(),
            formatter.name()
        ),
        ReconcileMode::Direct => {
            info!("Formatting {} with {}", path.display(), formatter.name());
        }
    }

    let candidate = formatter.format_file(&path, settings.as_deref())?;
    if !reconcile(&path, candidate, mode)? {
        return Ok(FormatOutcome::default());
    }

    let lint_report = match formatter.lint_file(&path, settings.as_deref()) {
        Some(report) => {
            let report = report?;
            if report.is_empty() {
                info!("{} is clean", path.display());
                None
            } else {
                Some(report)
            }
        }
        None => None,
    };

    Ok(FormatOutcome {
        changed: true,
        final_path: Some(path),
        lint_report,
    })
}

/// Format every supported file under `root`.
///
/// Files are processed sequentially in collection order. Returns outcomes
/// only for files that changed; an empty vector means nothing in the tree
/// needed formatting.
///
/// # Errors
///
/// `PathNotFound`/`NotADirectory` for an invalid root; the first per-file
/// error aborts the run.
pub fn format_dir(
    formatter: &dyn Formatter,
    root: &Path,
    settings: Option<&Path>,
    mode: ReconcileMode,
) -> Result<Vec<FormatOutcome>> {
    let root = resolve_path(root)?;
    let files = collect_files(formatter, &root)?;
    if files.is_empty() {
        info!("No files to format in {}", root.display());
        return Ok(Vec::new());
    }

    let mut outcomes = Vec::new();
    for file in files {
        let outcome = format_file(formatter, &file, settings, mode)?;
        if outcome.changed {
            outcomes.push(outcome);
        }
    }
    Ok(outcomes)
}

/// Resolve a caller-supplied path against the current working directory.
/// Absolute paths pass through unchanged.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    Ok(env::current_dir()?.join(strip_quotes(path)))
}

/// Strip one layer of surrounding double quotes, tolerating shell-quoted
/// paths pasted into the call.
fn strip_quotes(path: &Path) -> &Path {
    if let Some(s) = path.to_str() {
        if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            return Path::new(&s[1..s.len() - 1]);
        }
    }
    path
}

fn validate_file(role: &'static str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::PathNotFound {
            role,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(Error::NotAFile {
            role,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn resolve_settings(settings: Option<&Path>) -> Result<Option<PathBuf>> {
    match settings {
        Some(path) => {
            let path = resolve_path(path)?;
            validate_file(SETTINGS_ROLE, &path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
