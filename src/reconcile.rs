//! Reconciliation of a formatter candidate with the original file.
//!
//! Once a backend has produced a candidate, three things can happen: the
//! candidate is discarded because nothing meaningful changed, the user
//! picks hunks in an interactive three-way merge tool, or the candidate
//! replaces the original outright. The candidate temp file is consumed or
//! deleted on every path, success or failure.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::classify;
use crate::error::{Error, Result};
use crate::exec::{find_tool, run};

/// External three-way merge tool.
const MERGE_TOOL: &str = "meld";

/// How a formatter candidate is applied to the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileMode {
    /// Hand original and candidate to the merge tool and let the user pick.
    #[default]
    Interactive,
    /// Overwrite the original with the candidate.
    Direct,
}

/// Apply `candidate` to `original` according to `mode`.
///
/// Returns `false` and discards the candidate when the two differ at most
/// in line-terminator style; the original keeps its bytes, terminators
/// included.
pub fn reconcile(original: &Path, candidate: NamedTempFile, mode: ReconcileMode) -> Result<bool> {
    if !classify::has_real_changes(original, candidate.path())? {
        info!("No changes in {}", original.display());
        return Ok(false);
    }

    match mode {
        ReconcileMode::Interactive => {
            merge_changes(original, candidate.path(), MERGE_TOOL)?;
            // candidate dropped here, temp file removed
        }
        ReconcileMode::Direct => apply_direct(original, candidate)?,
    }
    Ok(true)
}

/// Launch the merge tool with the original as both base and local, the
/// candidate as remote, and the original path as the output target. The
/// tool is expected to write the user's selection back over the original.
fn merge_changes(original: &Path, candidate: &Path, tool: &str) -> Result<()> {
    let tool_path = find_tool(tool).ok_or_else(|| Error::ToolUnavailable {
        tool: tool.to_string(),
    })?;

    debug!("merging {} in {}", original.display(), tool);
    run(
        tool_path,
        [
            original.as_os_str(),
            original.as_os_str(),
            candidate.as_os_str(),
            OsStr::new("-o"),
            original.as_os_str(),
        ],
    )
    .map_err(|e| match e {
        Error::CommandFailed { output } => Error::MergeFailed { output },
        other => other,
    })?;
    Ok(())
}

/// Replace `original` with the candidate via an atomic rename, keeping the
/// original's permissions. The original is never left partially written.
fn apply_direct(original: &Path, candidate: NamedTempFile) -> Result<()> {
    let permissions = fs::metadata(original)?.permissions();
    let replaced = candidate.persist(original).map_err(|e| Error::Io(e.error))?;
    replaced.set_permissions(permissions)?;
    Ok(())
}
