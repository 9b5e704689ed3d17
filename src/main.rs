//! meldfmt - run a code formatter and reconcile its changes in a merge tool

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use anyhow::Result;

use meldfmt::{format_dir, format_file, parse_args, FormatOutcome, FormatterKind, ReconcileMode};

fn main() -> Result<()> {
    let args = parse_args();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "meldfmt={log_level}"
        )))
        .with_target(false)
        .init();

    let formatter = FormatterKind::from_name(&args.formatter)?.backend();
    let mode = if args.no_merge {
        ReconcileMode::Direct
    } else {
        ReconcileMode::Interactive
    };

    if args.path.is_dir() {
        let outcomes = format_dir(formatter, &args.path, args.setup.as_deref(), mode)?;
        if outcomes.is_empty() {
            println!("Nothing to change in {}", args.path.display());
        } else {
            for outcome in &outcomes {
                report(outcome);
            }
        }
    } else {
        let outcome = format_file(formatter, &args.path, args.setup.as_deref(), mode)?;
        if outcome.changed {
            report(&outcome);
        } else {
            println!("No changes in {}", args.path.display());
        }
    }

    Ok(())
}

fn report(outcome: &FormatOutcome) {
    if let Some(path) = &outcome.final_path {
        println!("Formatted {}", path.display());
    }
    if let Some(lint_report) = &outcome.lint_report {
        println!("{lint_report}");
    }
}
