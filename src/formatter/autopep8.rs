//! Python formatting via the `autopep8` tool, linted with `flake8`.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use super::{candidate_file, Formatter};
use crate::error::{Error, Result};
use crate::exec::{find_tool, run, run_stdout};

const FORMATTER_TOOL: &str = "autopep8";
const LINTER_TOOL: &str = "flake8";

/// PEP 8 style fixer for Python sources.
pub struct Autopep8;

impl Formatter for Autopep8 {
    fn name(&self) -> &'static str {
        "Autopep8"
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn format_file(&self, path: &Path, settings: Option<&Path>) -> Result<NamedTempFile> {
        let tool = find_tool(FORMATTER_TOOL).ok_or_else(|| Error::ToolUnavailable {
            tool: FORMATTER_TOOL.to_string(),
        })?;

        let mut args: Vec<OsString> = Vec::new();
        if let Some(settings) = settings {
            let mut arg = OsString::from("--global-config=");
            arg.push(settings);
            args.push(arg);
        }
        args.push(path.into());

        // autopep8 prints the reformatted source to stdout
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

    fn lint_file(&self, path: &Path, settings: Option<&Path>) -> Option<Result<String>> {
        Some(lint(path, settings))
    }
}

fn lint(path: &Path, settings: Option<&Path>) -> Result<String> {
    info!("Linting {} with {}", path.display(), LINTER_TOOL);
    let tool = find_tool(LINTER_TOOL).ok_or_else(|| Error::ToolUnavailable {
        tool: LINTER_TOOL.to_string(),
    })?;

    let mut args: Vec<OsString> = vec![path.into()];
    if let Some(settings) = settings {
        let mut arg = OsString::from("--config=");
        arg.push(settings);
        args.push(arg);
    }

    match run(&tool, &args) {
        Ok(_) => Ok(String::new()),
        // a non-zero exit means the linter has findings; the captured
        // output is the report, not a failure
        Err(Error::CommandFailed { output }) => Ok(output),
        Err(e) => Err(e),
    }
}
