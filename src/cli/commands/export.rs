//! `export` command handler.

use crate::cli::args::ExportArgs;
use crate::error::{ReportError, Result};
use crate::reports::{find_report, suggest_report};

/// Prints the raw YAML of a built-in report, suitable for piping into a
/// file and editing as custom content.
///
/// # Errors
///
/// Returns `ReportError::UnknownReport` if the id is not built in.
pub fn run(args: &ExportArgs) -> Result<()> {
    let report = find_report(&args.report).ok_or_else(|| ReportError::UnknownReport {
        id: args.report.clone(),
        suggestion: suggest_report(&args.report),
    })?;

    print!("{}", report.yaml);
    Ok(())
}
