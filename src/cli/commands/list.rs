//! `list` command handler.

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::reports::list_reports;

/// Lists the built-in reports.
///
/// Output file names come from the embedded content itself.
///
/// # Errors
///
/// Returns a content error if embedded content fails to load and a JSON
/// error if serialization fails.
pub fn run(args: &ListArgs) -> Result<()> {
    let reports = list_reports()
        .into_iter()
        .map(|r| -> Result<_> { Ok((r, r.load()?.content.output_file())) })
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = reports
                .iter()
                .map(|(r, output)| {
                    serde_json::json!({
                        "id": r.id,
                        "description": r.description,
                        "output": output,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            println!("Built-in Reports ({} available)\n", reports.len());
            for (r, output) in &reports {
                println!("  {:<12}{output:<32}{}", r.id, r.description);
            }
            println!();
            println!("Generate a report: endoreport generate <id>");
            println!("View YAML:         endoreport export <id>");
        }
    }

    Ok(())
}
