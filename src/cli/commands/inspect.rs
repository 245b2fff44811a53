//! `inspect` command handler.
//!
//! Prints the structural outline of a report without writing any file.

use crate::cli::args::{InspectArgs, OutputFormat};
use crate::compose::ComposeOptions;
use crate::document::Outline;
use crate::error::{ReportError, Result};
use crate::generate::{ContentSource, build_document};
use crate::layout::layout;

/// Prints the outline of a built-in report or a content file.
///
/// # Errors
///
/// Returns the loading, composing or layout failure of the report.
pub fn run(args: &InspectArgs) -> Result<()> {
    let source = match (&args.content, &args.report) {
        (Some(path), _) => ContentSource::File(path.clone()),
        (None, Some(id)) => ContentSource::builtin(id)?,
        (None, None) => {
            return Err(ReportError::Usage(
                "inspect needs a report id or --content".to_string(),
            ));
        }
    };
    let date = args.date.unwrap_or_else(|| ComposeOptions::today().date);

    let loaded = source.load()?;
    let doc = build_document(&loaded.content, date)?;
    let outline = doc.outline();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outline)?);
        }
        OutputFormat::Human => {
            let pages = layout(&doc)?.len();
            print!("{}", describe(&outline, pages));
        }
    }
    Ok(())
}

fn describe(outline: &Outline, pages: usize) -> String {
    let mut lines = vec![
        outline.title.clone(),
        format!(
            "  {} blocks, {} page breaks, {pages} pages",
            outline.blocks, outline.page_breaks
        ),
        String::new(),
        "Headings".to_string(),
    ];
    for heading in &outline.headings {
        let indent = "  ".repeat(usize::from(heading.level));
        lines.push(format!("{indent}{}", heading.text));
    }
    lines.push(String::new());
    lines.push("Tables".to_string());
    for (i, table) in outline.tables.iter().enumerate() {
        let first = table
            .cells
            .first()
            .map(|row| row.join(" | "))
            .unwrap_or_default();
        lines.push(format!(
            "  [{i}] {:?} {}x{}: {first}",
            table.kind, table.rows, table.columns
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{HeadingEntry, TableKind, TableOutline};

    #[test]
    fn test_describe_lists_headings_and_tables() {
        let outline = Outline {
            title: "ML Training Report".to_string(),
            blocks: 12,
            page_breaks: 3,
            headings: vec![
                HeadingEntry {
                    level: 1,
                    text: "1. Executive Summary".to_string(),
                },
                HeadingEntry {
                    level: 2,
                    text: "Dataset".to_string(),
                },
            ],
            tables: vec![TableOutline {
                kind: TableKind::Grid,
                rows: 2,
                columns: 2,
                cells: vec![
                    vec!["Parameter".to_string(), "Value".to_string()],
                    vec!["Learning Rate".to_string(), "1e-5".to_string()],
                ],
            }],
        };
        let text = describe(&outline, 5);
        assert!(text.starts_with("ML Training Report\n  12 blocks, 3 page breaks, 5 pages\n"));
        assert!(text.contains("\n  1. Executive Summary\n    Dataset\n"));
        assert!(text.contains("[0] Grid 2x2: Parameter | Value"));
    }
}
