//! Change detection between an original file and a formatter candidate.
//!
//! The engine only cares about one signal: is the content equal after
//! line-terminator normalization? Byte-identical files and files that
//! differ only in terminator style (`\n` vs `\r\n`) are the same outcome,
//! "unchanged", and reconciliation is skipped for both.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Compare two files line by line, ignoring line-terminator style.
///
/// `"a\nb\n"` and `"a\r\nb\r\n"` compare equal. Returns `true` only when
/// the logical line sequences differ.
pub fn has_real_changes(original: &Path, candidate: &Path) -> Result<bool> {
    let original = fs::read(original)?;
    let candidate = fs::read(candidate)?;
    if original == candidate {
        return Ok(false);
    }

    let original = String::from_utf8_lossy(&original);
    let candidate = String::from_utf8_lossy(&candidate);
    Ok(!original.lines().eq(candidate.lines()))
}
