//! `validate` command handler.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::content::loader::{ContentLimits, load_file};
use crate::error::{ContentError, Result, Severity, ValidationIssue};

/// Validation outcome for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Validated file.
    pub file: PathBuf,
    /// Whether the file passed under the requested strictness.
    pub valid: bool,
    /// Errors and warnings, in discovery order.
    pub issues: Vec<ValidationIssue>,
}

/// Validates every file and prints a report for each.
///
/// All files are checked before failing, so one run surfaces every
/// problem.
///
/// # Errors
///
/// Returns `ContentError::ValidationError` naming the first failing file.
/// I/O and parse failures of a file count as failures of that file.
pub fn run(args: &ValidateArgs, quiet: bool) -> Result<()> {
    let limits = ContentLimits::default();
    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| check_file(path, &limits, args.strict))
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Human if !quiet => {
            for report in &reports {
                print!("{}", describe(report));
            }
        }
        OutputFormat::Human => {}
    }

    match reports.into_iter().find(|r| !r.valid) {
        Some(failed) => Err(ContentError::ValidationError {
            path: failed.file.display().to_string(),
            errors: failed.issues,
        }
        .into()),
        None => Ok(()),
    }
}

/// Loads one file and classifies the outcome.
#[must_use]
pub fn check_file(path: &Path, limits: &ContentLimits, strict: bool) -> FileReport {
    info!(file = %path.display(), "validating content");
    let issues = match load_file(path, limits) {
        Ok(loaded) => loaded.warnings,
        Err(ContentError::ValidationError { errors, .. }) => errors,
        Err(e) => vec![ValidationIssue {
            path: path.display().to_string(),
            message: e.to_string(),
            severity: Severity::Error,
        }],
    };
    let valid = issues
        .iter()
        .all(|i| i.severity == Severity::Warning && !strict);

    FileReport {
        file: path.to_path_buf(),
        valid,
        issues,
    }
}

fn describe(report: &FileReport) -> String {
    let mut out = format!(
        "{} {}\n",
        if report.valid { "ok    " } else { "FAILED" },
        report.file.display()
    );
    for issue in &report.issues {
        out.push_str(&format!("  {issue}\n"));
    }
    out
}
