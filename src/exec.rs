//! External process execution.
//!
//! Everything the engine shells out to (merge tool, linter, formatter
//! backends) goes through here. Invocations are synchronous and never
//! retried: a partially applied merge must not be silently repeated.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Run an external command, capturing stdout and stderr as one report.
///
/// On non-zero exit the combined output becomes the message of
/// [`Error::CommandFailed`]. On success the combined output is returned
/// (possibly empty).
pub fn run<I, S>(program: impl AsRef<OsStr>, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!("running {:?}", program.as_ref());
    let output = Command::new(&program).args(args).output()?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(combined)
    } else {
        Err(Error::CommandFailed { output: combined })
    }
}

/// Run an external command whose stdout is the payload.
///
/// Used for formatter backends that print the reformatted source to stdout:
/// stderr is kept separate so backend warnings never leak into the formatted
/// content, and becomes the failure message on non-zero exit.
pub fn run_stdout<I, S>(program: impl AsRef<OsStr>, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!("running {:?}", program.as_ref());
    let output = Command::new(&program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(Error::CommandFailed {
            output: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Locate an executable on PATH.
///
/// Returns the first matching entry, or `None` if the tool is not
/// installed. Windows installs expose tools as `name.exe`, so that spelling
/// is probed as well.
#[must_use]
pub fn find_tool(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        let exe = dir.join(format!("{name}.exe"));
        if exe.is_file() {
            return Some(exe);
        }
    }
    None
}
