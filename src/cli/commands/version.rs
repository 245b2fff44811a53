//! `version` command handler.
//!
//! Besides the crate version, lists the report ids compiled into the
//! binary so a build can be matched to the content it ships.

use serde_json::json;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::Result;
use crate::reports::report_ids;

/// Prints version information.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn run(args: &VersionArgs) -> Result<()> {
    println!("{}", describe(args.format)?);
    Ok(())
}

fn describe(format: OutputFormat) -> Result<String> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let reports = report_ids();

    Ok(match format {
        OutputFormat::Human => format!("{name} {version} (reports: {})", reports.join(", ")),
        OutputFormat::Json => serde_json::to_string(&json!({
            "name": name,
            "version": version,
            "reports": reports,
        }))?,
    })
}
