//! C-family formatting via the `clang-format` tool.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::{candidate_file, Formatter};
use crate::error::{Error, Result};
use crate::exec::{find_tool, run_stdout};

const FORMATTER_TOOL: &str = "clang-format";

/// Style fixer for C and C++ sources. No linter.
pub struct ClangFormat;

impl Formatter for ClangFormat {
    fn name(&self) -> &'static str {
        "ClangFormat"
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &["c", "h", "cpp", "cxx", "hpp", "hxx"]
    }

    fn format_file(&self, path: &Path, settings: Option<&Path>) -> Result<NamedTempFile> {
        let tool = find_tool(FORMATTER_TOOL).ok_or_else(|| Error::ToolUnavailable {
            tool: FORMATTER_TOOL.to_string(),
        })?;

        let mut args: Vec<OsString> = Vec::new();
        if let Some(settings) = settings {
            // point clang-format at the style file directly instead of
            // relying on .clang-format discovery from the input's directory
            let mut arg = OsString::from("--style=file:");
            arg.push(settings);
            args.push(arg);
        }
        args.push(path.into());

        let formatted = run_stdout(&tool, &args).map_err(|e| match e {
            Error::CommandFailed { output } => Error::Formatting {
                formatter: self.name(),
                path: path.to_path_buf(),
                message: output,
            },
            other => other,
        })?;

        let mut candidate = candidate_file(path)?;
        candidate.write_all(formatted.as_bytes())?;
        Ok(candidate)
    }
}
