//! `generate` command handler.

use chrono::NaiveDate;
use tracing::info;

use crate::cli::args::GenerateArgs;
use crate::compose::ComposeOptions;
use crate::error::{ReportError, Result};
use crate::generate::{ContentSource, GenerateReport, GenerateRequest, generate};
use crate::render::OutputFormat;
use crate::reports::report_ids;

/// Generates every requested report.
///
/// # Errors
///
/// Returns a usage error for `--output` with more than one report, and the
/// first generation failure otherwise. Reports written before the failure
/// are kept.
pub fn run(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let date = args.date.unwrap_or_else(|| ComposeOptions::today().date);
    let requests = plan(args, date)?;
    info!(reports = requests.len(), %date, "generating reports");

    for request in &requests {
        let report = generate(request)?;
        if !quiet {
            print_written(&report, args.format);
        }
    }
    Ok(())
}

/// Expands the arguments into one request per output file.
///
/// # Errors
///
/// Returns `ReportError::UnknownReport` for an unknown id and
/// `ReportError::Usage` when `--output` names one file for several reports.
pub fn plan(args: &GenerateArgs, date: NaiveDate) -> Result<Vec<GenerateRequest>> {
    let sources = if let Some(path) = &args.content {
        vec![ContentSource::File(path.clone())]
    } else if args.reports.is_empty() {
        report_ids()
            .into_iter()
            .map(ContentSource::builtin)
            .collect::<Result<Vec<_>>>()?
    } else {
        args.reports
            .iter()
            .map(|id| ContentSource::builtin(id))
            .collect::<Result<Vec<_>>>()?
    };

    if args.output.is_some() && sources.len() > 1 {
        return Err(ReportError::Usage(format!(
            "--output names a single file but {} reports were requested; use --output-dir",
            sources.len()
        )));
    }

    Ok(sources
        .into_iter()
        .map(|source| GenerateRequest {
            source,
            output: args.output.clone(),
            output_dir: args.output_dir.clone(),
            format: args.format,
            date,
        })
        .collect())
}

fn print_written(report: &GenerateReport, format: OutputFormat) {
    match format {
        OutputFormat::Pdf => println!("PDF report generated: {}", report.path.display()),
        OutputFormat::Markdown | OutputFormat::Outline => {
            println!("{format} report generated: {}", report.path.display());
        }
    }
}
