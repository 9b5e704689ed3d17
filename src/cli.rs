//! Command-line interface for meldfmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Formatter backend name (autopep8, clang-format)
    pub formatter: String,

    /// File or directory to format
    pub path: PathBuf,

    /// Formatter setup file passed through to the backend
    pub setup: Option<PathBuf>,

    /// Overwrite files directly instead of merging interactively
    pub no_merge: bool,

    /// Enable debug-level logging
    pub verbose: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("meldfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a code formatter and reconcile its changes in an interactive merge tool")
        .arg(
            Arg::new("formatter")
                .help("Formatter backend: autopep8 or clang-format")
                .value_name("FORMATTER")
                .required(true),
        )
        .arg(
            Arg::new("path")
                .help("File or directory to format")
                .value_name("PATH")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("setup")
                .short('s')
                .long("setup")
                .help("Formatter setup file (passed through to the backend)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-merge")
                .short('n')
                .long("no-merge")
                .help("Apply changes directly instead of opening the merge tool")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        formatter: matches
            .get_one::<String>("formatter")
            .cloned()
            .unwrap_or_default(),
        path: matches
            .get_one::<PathBuf>("path")
            .cloned()
            .unwrap_or_default(),
        setup: matches.get_one::<PathBuf>("setup").cloned(),
        no_merge: matches.get_flag("no-merge"),
        verbose: matches.get_flag("verbose"),
    }
}
