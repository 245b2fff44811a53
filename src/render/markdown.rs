//! Markdown output.

use crate::document::{Block, Document, Inline, Paragraph, StyleName, Table, TableKind};
use crate::error::RenderError;
use crate::render::{OutputFormat, Rendered, Renderer};

/// Renders the block list as Markdown, one section per block.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<Rendered, RenderError> {
        let text = to_markdown(doc);
        if text.trim().is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        Ok(Rendered {
            bytes: text.into_bytes(),
            pages: None,
        })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Markdown text of `doc`.
#[must_use]
pub fn to_markdown(doc: &Document) -> String {
    let mut sections: Vec<String> = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => sections.push(paragraph(p)),
            Block::Table(t) => sections.push(table(t)),
            Block::PageBreak => sections.push("---".to_string()),
            Block::Spacer(_) => {}
        }
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn paragraph(p: &Paragraph) -> String {
    let text = inline(&p.runs);
    match p.style {
        StyleName::Title => format!("# {text}"),
        StyleName::Heading1 => format!("## {text}"),
        StyleName::Heading2 => format!("### {text}"),
        StyleName::Body | StyleName::Footer => text,
    }
}

fn inline(runs: &[Inline]) -> String {
    let mut out = String::new();
    for run in runs {
        match run {
            Inline::Text { text, bold, italic } => {
                let marker = match (bold, italic) {
                    (true, true) => "***",
                    (true, false) => "**",
                    (false, true) => "*",
                    (false, false) => "",
                };
                let core = text.trim();
                if marker.is_empty() || core.is_empty() {
                    out.push_str(text);
                    continue;
                }
                // Emphasis markers must hug the text.
                let lead = &text[..text.len() - text.trim_start().len()];
                let trail = &text[text.trim_end().len()..];
                out.push_str(lead);
                out.push_str(marker);
                out.push_str(core);
                out.push_str(marker);
                out.push_str(trail);
            }
            Inline::LineBreak => out.push_str("  \n"),
        }
    }
    out
}

fn table(t: &Table) -> String {
    if t.style().kind == TableKind::KeyValue {
        return t
            .rows()
            .iter()
            .map(|row| {
                let (label, rest) = row
                    .split_first()
                    .map_or(("", &[][..]), |(l, r)| (l.as_str(), r));
                format!("- **{label}** {}", rest.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut lines = Vec::new();
    let header_rows = t.header_rows().max(1);
    for (i, row) in t.rows().iter().enumerate() {
        lines.push(format!(
            "| {} |",
            row.iter().map(|c| cell(c)).collect::<Vec<_>>().join(" | ")
        ));
        if i + 1 == header_rows {
            lines.push(format!("|{}|", vec!["---"; t.column_count()].join("|")));
        }
    }
    lines.join("\n")
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
