//! Turns [`ReportContent`] into a [`Document`].
//!
//! Every report is assembled the same way: a cover (titles and a metadata
//! table), one heading per section followed by its blocks, and an optional
//! italic footer. Strings are used literally apart from inline markup and
//! the `{date}` placeholder.

use chrono::NaiveDate;
use tracing::debug;

use crate::content::schema::{DATE_PLACEHOLDER, ReportContent, SectionBlock, TableContent};
use crate::document::{Block, Document, INCH, StyleName, Stylesheet, Table, TableStyle};
use crate::error::DocumentError;

/// Gap inserted after every data table.
pub const TABLE_GAP: f32 = 0.2 * INCH;

/// Prefix of bullet list items.
pub const BULLET: &str = "\u{2022} ";

/// Prefix of checklist items.
pub const CHECK: &str = "\u{2713} ";

/// Inputs that vary between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Date substituted for `{date}`.
    pub date: NaiveDate,
}

impl ComposeOptions {
    /// Options for today's local date.
    #[must_use]
    pub fn today() -> Self {
        Self {
            date: chrono::Local::now().date_naive(),
        }
    }
}

/// Formats a date the way the reports print it (`October 19, 2026`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Replaces every `{date}` in `text`.
#[must_use]
pub fn substitute(text: &str, date: NaiveDate) -> String {
    if text.contains(DATE_PLACEHOLDER) {
        text.replace(DATE_PLACEHOLDER, &format_date(date))
    } else {
        text.to_string()
    }
}

/// Bullet list item markup.
#[must_use]
pub fn bullet(text: &str) -> String {
    format!("{BULLET}{text}")
}

/// Checklist item markup.
#[must_use]
pub fn check(text: &str) -> String {
    format!("{CHECK}{text}")
}

/// `<b>term:</b> description` markup.
#[must_use]
pub fn definition(term: &str, description: &str) -> String {
    format!("<b>{term}:</b> {description}")
}

/// Builds the ordered block list for `content`.
///
/// # Errors
///
/// Returns a `DocumentError` when a table is ragged or a style or page
/// dimension is unusable.
pub fn compose(
    content: &ReportContent,
    options: &ComposeOptions,
) -> Result<Document, DocumentError> {
    content.page.check()?;
    let stylesheet = Stylesheet::default().with_overrides(&content.styles);
    stylesheet.check()?;

    let mut doc = Document::new(&content.title, content.page, stylesheet);
    let sub = |text: &str| substitute(text, options.date);

    // Cover
    let cover = &content.cover;
    spacer(&mut doc, cover.space_before);
    for title in &cover.titles {
        doc.paragraph(StyleName::Title, &sub(title));
    }
    spacer(&mut doc, cover.space_after_titles);
    if !cover.metadata.is_empty() {
        let rows = cover
            .metadata
            .iter()
            .map(|[label, value]| vec![sub(label), sub(value)])
            .collect();
        doc.push(Block::Table(Table::new(
            cover.metadata_widths.clone(),
            rows,
            0,
            TableStyle::key_value(cover.metadata_font_size),
        )?));
    }
    if cover.page_break_after {
        doc.push(Block::PageBreak);
    } else {
        spacer(&mut doc, cover.space_after);
    }

    // Sections
    for section in &content.sections {
        if section.break_before {
            doc.push(Block::PageBreak);
        }
        doc.paragraph(StyleName::Heading1, &sub(&section.heading));
        for block in &section.blocks {
            push_block(&mut doc, block, &sub)?;
        }
    }

    // Footer
    if let Some(footer) = &content.footer {
        spacer(&mut doc, footer.space_before);
        doc.paragraph(StyleName::Footer, &format!("<i>{}</i>", sub(&footer.text)));
    }

    debug!(
        report = %content.id,
        blocks = doc.blocks.len(),
        sections = content.sections.len(),
        "composed document"
    );
    Ok(doc)
}

fn push_block(
    doc: &mut Document,
    block: &SectionBlock,
    sub: &impl Fn(&str) -> String,
) -> Result<(), DocumentError> {
    match block {
        SectionBlock::Paragraph { text } => doc.paragraph(StyleName::Body, &sub(text)),
        SectionBlock::Subheading { text } => doc.paragraph(StyleName::Heading2, &sub(text)),
        SectionBlock::Bullets { items } => {
            for item in items {
                doc.paragraph(StyleName::Body, &bullet(&sub(item)));
            }
        }
        SectionBlock::Checklist { items } => {
            for item in items {
                doc.paragraph(StyleName::Body, &check(&sub(item)));
            }
        }
        SectionBlock::Definitions { items } => {
            for item in items {
                doc.paragraph(
                    StyleName::Body,
                    &definition(&sub(&item.term), &sub(&item.description)),
                );
            }
        }
        SectionBlock::Table(table) => {
            doc.push(Block::Table(grid_table(table, sub)?));
            doc.push(Block::Spacer(TABLE_GAP));
        }
        SectionBlock::Spacer { height } => spacer(doc, *height),
    }
    Ok(())
}

fn grid_table(table: &TableContent, sub: &impl Fn(&str) -> String) -> Result<Table, DocumentError> {
    let mut style = TableStyle::grid();
    if let Some(padding) = table.header_padding {
        style.header_bottom_padding = padding;
    }
    let rows = table
        .all_rows()
        .iter()
        .map(|row| row.iter().map(|cell| sub(cell)).collect())
        .collect();
    Table::new(table.widths.clone(), rows, 1, style)
}

fn spacer(doc: &mut Document, height: f32) {
    if height > 0.0 {
        doc.push(Block::Spacer(height));
    }
}
