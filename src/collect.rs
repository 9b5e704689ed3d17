//! Recursive collection of formattable files.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::formatter::Formatter;

/// Recursively collect every file under `root` whose extension is claimed
/// by `formatter`, in lexical path order.
///
/// Directories and non-matching files are skipped. Symbolic links are not
/// followed, so link cycles cannot recurse forever.
pub fn collect_files(formatter: &dyn Formatter, root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::PathNotFound {
            role: "Directory to format",
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && claims_extension(formatter, entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Case-insensitive membership test against the formatter's extension set.
fn claims_extension(formatter: &dyn Formatter, path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    formatter
        .supported_extensions()
        .iter()
        .any(|claimed| *claimed == ext)
}
