//! Document model: the ordered list of content blocks handed to the
//! layout engine.
//!
//! A [`Document`] is built once, never mutated after composition, and
//! consumed by a renderer. It also answers the structural questions the
//! test-suite and the `inspect` command ask (headings in order, table
//! dimensions).

pub mod geometry;
pub mod markup;
pub mod style;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

pub use geometry::{INCH, Margins, PageGeometry, PageSize};
pub use markup::Inline;
pub use style::{Alignment, Color, Font, ParagraphStyle, StyleName, Stylesheet};

// ============================================================================
// Blocks
// ============================================================================

/// A single layout unit in the render list.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Styled text.
    Paragraph(Paragraph),
    /// Grid or key/value table.
    Table(Table),
    /// Fixed vertical gap in points.
    Spacer(f32),
    /// Forces the next block onto a new page.
    PageBreak,
}

/// A paragraph: a style preset and its inline runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Preset used for font, size and spacing.
    pub style: StyleName,
    /// Parsed inline content.
    pub runs: Vec<Inline>,
}

impl Paragraph {
    /// Builds a paragraph from markup text.
    #[must_use]
    pub fn new(style: StyleName, markup: &str) -> Self {
        Self {
            style,
            runs: markup::parse(markup),
        }
    }

    /// Text content with markup removed.
    #[must_use]
    pub fn text(&self) -> String {
        markup::plain_text(&self.runs)
    }
}

// ============================================================================
// Tables
// ============================================================================

/// How a table is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Data table: filled header row, grid lines, alternating row fills.
    Grid,
    /// Label/value pairs: bold colored first column, no lines.
    KeyValue,
}

/// Visual attributes of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Decoration preset.
    pub kind: TableKind,
    /// Font size of header rows.
    pub header_font_size: f32,
    /// Font size of body rows.
    pub body_font_size: f32,
    /// Extra bottom padding under header cells.
    pub header_bottom_padding: f32,
    /// Header fill (grid tables).
    pub header_background: Color,
    /// Header text color (grid tables).
    pub header_text: Color,
    /// Alternating body row fills (grid tables).
    pub row_backgrounds: [Color; 2],
    /// Grid line color and width (grid tables).
    pub grid: (Color, f32),
    /// First-column text color (key/value tables).
    pub label_color: Color,
}

impl TableStyle {
    /// The data-table preset: `#3949ab` header with whitesmoke text,
    /// 1pt black grid, white/lightgrey body rows.
    #[must_use]
    pub const fn grid() -> Self {
        Self {
            kind: TableKind::Grid,
            header_font_size: 11.0,
            body_font_size: 10.0,
            header_bottom_padding: 3.0,
            header_background: Color::rgb(0x39, 0x49, 0xab),
            header_text: Color::WHITESMOKE,
            row_backgrounds: [Color::WHITE, Color::LIGHTGREY],
            grid: (Color::BLACK, 1.0),
            label_color: Color::BLACK,
        }
    }

    /// The metadata preset: bold `#283593` labels, plain values.
    #[must_use]
    pub const fn key_value(font_size: f32) -> Self {
        Self {
            kind: TableKind::KeyValue,
            header_font_size: font_size,
            body_font_size: font_size,
            header_bottom_padding: 3.0,
            header_background: Color::WHITE,
            header_text: Color::BLACK,
            row_backgrounds: [Color::WHITE, Color::WHITE],
            grid: (Color::BLACK, 0.0),
            label_color: Color::rgb(0x28, 0x35, 0x93),
        }
    }
}

/// A rectangular table of literal cell strings.
///
/// Every row holds exactly one cell per column; [`Table::new`] enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    column_widths: Vec<f32>,
    rows: Vec<Vec<String>>,
    header_rows: usize,
    style: TableStyle,
}

impl Table {
    /// Creates a table, checking its dimensions.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::EmptyTable` when there are no columns or rows,
    /// `DocumentError::RaggedTable` when a row's cell count differs from the
    /// column count, and `DocumentError::InvalidDimension` for a
    /// non-positive column width.
    pub fn new(
        column_widths: Vec<f32>,
        rows: Vec<Vec<String>>,
        header_rows: usize,
        style: TableStyle,
    ) -> Result<Self, DocumentError> {
        if column_widths.is_empty() {
            return Err(DocumentError::EmptyTable("columns"));
        }
        if rows.is_empty() {
            return Err(DocumentError::EmptyTable("rows"));
        }
        for &width in &column_widths {
            style::positive("column width", width)?;
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != column_widths.len())
        {
            return Err(DocumentError::RaggedTable {
                row,
                expected: column_widths.len(),
                found: cells.len(),
            });
        }
        style::positive("table font size", style.header_font_size)?;
        style::positive("table font size", style.body_font_size)?;

        Ok(Self {
            column_widths,
            header_rows: header_rows.min(rows.len()),
            rows,
            style,
        })
    }

    /// Column widths in points.
    #[must_use]
    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    /// All rows, header rows first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of leading header rows.
    #[must_use]
    pub const fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Visual style.
    #[must_use]
    pub const fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Number of rows, header included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Total width in points.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Cell text at `(row, column)`.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// First row whose first cell equals `label`.
    #[must_use]
    pub fn find_row(&self, label: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|cells| cells.first().is_some_and(|c| c == label))
            .map(Vec::as_slice)
    }
}

// ============================================================================
// Document
// ============================================================================

/// An ordered render list bound to a title, page geometry and stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Title written into the PDF metadata.
    pub title: String,
    /// Page size and margins.
    pub geometry: PageGeometry,
    /// Style presets referenced by paragraphs.
    pub stylesheet: Stylesheet,
    /// Blocks in render order.
    pub blocks: Vec<Block>,
}

/// A heading as it appears in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// 1 for section headings, 2 for sub-sections.
    pub level: u8,
    /// Heading text.
    pub text: String,
}

/// Dimensions and cells of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOutline {
    /// Decoration preset.
    pub kind: TableKind,
    /// Row count, header included.
    pub rows: usize,
    /// Column count.
    pub columns: usize,
    /// Literal cells.
    pub cells: Vec<Vec<String>>,
}

/// Layout-independent structural summary of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Document title.
    pub title: String,
    /// Total block count.
    pub blocks: usize,
    /// Number of explicit page breaks.
    pub page_breaks: usize,
    /// Headings in order.
    pub headings: Vec<HeadingEntry>,
    /// Tables in order.
    pub tables: Vec<TableOutline>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new(title: impl Into<String>, geometry: PageGeometry, stylesheet: Stylesheet) -> Self {
        Self {
            title: title.into(),
            geometry,
            stylesheet,
            blocks: Vec::new(),
        }
    }

    /// Appends a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Appends a paragraph parsed from markup.
    pub fn paragraph(&mut self, style: StyleName, markup: &str) {
        self.push(Block::Paragraph(Paragraph::new(style, markup)));
    }

    /// Headings (levels 1 and 2) in render order.
    #[must_use]
    pub fn headings(&self) -> Vec<HeadingEntry> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => p.style.heading_level().map(|level| HeadingEntry {
                    level,
                    text: p.text(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Section (level 1) heading texts in render order.
    #[must_use]
    pub fn section_titles(&self) -> Vec<String> {
        self.headings()
            .into_iter()
            .filter(|h| h.level == 1)
            .map(|h| h.text)
            .collect()
    }

    /// Number of level-1 sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_titles().len()
    }

    /// Tables in render order.
    #[must_use]
    pub fn tables(&self) -> Vec<&Table> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Paragraphs in render order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Structural summary used for comparisons and the `inspect` command.
    #[must_use]
    pub fn outline(&self) -> Outline {
        Outline {
            title: self.title.clone(),
            blocks: self.blocks.len(),
            page_breaks: self
                .blocks
                .iter()
                .filter(|b| matches!(b, Block::PageBreak))
                .count(),
            headings: self.headings(),
            tables: self
                .tables()
                .into_iter()
                .map(|t| TableOutline {
                    kind: t.style().kind,
                    rows: t.row_count(),
                    columns: t.column_count(),
                    cells: t.rows().to_vec(),
                })
                .collect(),
        }
    }
}
