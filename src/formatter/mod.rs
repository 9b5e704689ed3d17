//! Formatter backends behind one uniform capability interface.
//!
//! A backend is an opaque "given a file and optional settings, produce a
//! reformatted copy" capability plus the set of file extensions it claims
//! and an optional linter. The built-in set is closed: [`FormatterKind`]
//! enumerates the supported backends and dispatches on the tag.

mod autopep8;
mod clang_format;

pub use autopep8::Autopep8;
pub use clang_format::ClangFormat;

use std::ffi::OsStr;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// A pluggable code formatter backend.
///
/// Backends never mutate the input file: they produce a reformatted
/// *candidate* as a temporary file in the input's directory. The candidate
/// is deleted when dropped, so every exit path of a format operation either
/// consumes it or cleans it up.
pub trait Formatter {
    /// Display label, used in log lines and error messages.
    fn name(&self) -> &'static str;

    /// Lowercase file extensions (without the dot) this backend claims.
    fn supported_extensions(&self) -> &'static [&'static str];

    /// Produce a reformatted copy of `path` as a temporary file.
    ///
    /// `settings` is backend-specific configuration passed through opaquely;
    /// when absent the backend's own defaults apply.
    fn format_file(&self, path: &Path, settings: Option<&Path>) -> Result<NamedTempFile>;

    /// Lint `path` and return the diagnostics text, empty when clean.
    ///
    /// Returns `None` for backends without a linter. A linter binary missing
    /// from PATH is an error; findings are not.
    fn lint_file(&self, _path: &Path, _settings: Option<&Path>) -> Option<Result<String>> {
        None
    }
}

/// The closed set of built-in formatter backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    Autopep8,
    ClangFormat,
}

impl FormatterKind {
    /// Look up a backend by its CLI name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "autopep8" => Ok(Self::Autopep8),
            "clang-format" | "clangformat" => Ok(Self::ClangFormat),
            _ => Err(Error::FormatterNotSpecified(name.to_string())),
        }
    }

    /// The backend implementation for this variant.
    #[must_use]
    pub fn backend(self) -> &'static dyn Formatter {
        match self {
            Self::Autopep8 => &Autopep8,
            Self::ClangFormat => &ClangFormat,
        }
    }
}

/// Create the temporary file that receives a backend's output.
///
/// The file lives in the input's directory so that persisting it over the
/// original is an atomic rename on a single filesystem, and keeps the
/// input's stem and extension so merge tools pick up syntax highlighting.
pub fn candidate_file(input: &Path) -> Result<NamedTempFile> {
    let parent = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("formatted");
    let suffix = input
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    Ok(tempfile::Builder::new()
        .prefix(&format!(".{stem}_"))
        .suffix(&suffix)
        .tempfile_in(parent)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_known_backends() {
        assert_eq!(
            FormatterKind::from_name("autopep8").unwrap(),
            FormatterKind::Autopep8
        );
        assert_eq!(
            FormatterKind::from_name("clang-format").unwrap(),
            FormatterKind::ClangFormat
        );
        assert_eq!(
            FormatterKind::from_name("ClangFormat").unwrap(),
            FormatterKind::ClangFormat
        );
    }

    #[test]
    fn test_from_name_rejects_unknown_backend() {
        let err = FormatterKind::from_name("dummy_formatter").unwrap_err();
        match err {
            Error::FormatterNotSpecified(name) => assert_eq!(name, "dummy_formatter"),
            other => panic!("expected FormatterNotSpecified, got {other:?}"),
        }
    }

    #[test]
    fn test_backend_extension_sets() {
        assert_eq!(
            FormatterKind::Autopep8.backend().supported_extensions(),
            &["py"]
        );
        assert!(FormatterKind::ClangFormat
            .backend()
            .supported_extensions()
            .contains(&"hxx"));
    }

    #[test]
    fn test_candidate_file_lands_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("module.py");
        std::fs::write(&input, "pass\n").unwrap();

        let candidate = candidate_file(&input).unwrap();
        assert_eq!(candidate.path().parent().unwrap(), dir.path());
        let name = candidate.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(".module_"), "unexpected name: {name}");
        assert!(name.ends_with(".py"), "unexpected name: {name}");
    }

    #[test]
    fn test_candidate_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("module.py");
        std::fs::write(&input, "pass\n").unwrap();

        let candidate = candidate_file(&input).unwrap();
        let candidate_path = candidate.path().to_path_buf();
        drop(candidate);
        assert!(!candidate_path.exists());
    }
}
