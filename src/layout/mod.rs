//! Pagination: turns a [`Document`] into pages of positioned draw operations.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of
//! the page; text `y` is the baseline. The engine keeps a single cursor
//! moving down the frame (the page minus its margins) and starts a new page
//! whenever the next line, table row or spacer does not fit.

pub mod encoding;
pub mod metrics;
pub mod text;

use serde::Serialize;
use tracing::{debug, warn};

use crate::document::{
    Alignment, Block, Color, Document, Font, PageGeometry, Paragraph, ParagraphStyle, Table,
    TableKind,
};
use crate::error::RenderError;
use crate::layout::metrics::text_width;
use crate::layout::text::{Line, break_lines, space_width, tokenize};

/// Horizontal cell padding.
pub const CELL_PADDING_X: f32 = 6.0;

/// Vertical cell padding.
pub const CELL_PADDING_Y: f32 = 3.0;

/// Cell line height as a multiple of the font size.
const CELL_LEADING: f32 = 1.2;

// ============================================================================
// Output
// ============================================================================

/// A positioned drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum DrawOp {
    /// Text with its baseline at `y`.
    Text {
        /// Left edge.
        x: f32,
        /// Baseline.
        y: f32,
        /// Face.
        font: Font,
        /// Size in points.
        size: f32,
        /// Fill color.
        color: Color,
        /// Characters.
        text: String,
    },
    /// Axis-aligned rectangle with its lower-left corner at `(x, y)`.
    Rect {
        /// Left edge.
        x: f32,
        /// Bottom edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color, if filled.
        fill: Option<Color>,
        /// Stroke color and line width, if stroked.
        stroke: Option<(Color, f32)>,
    },
}

/// One finished page.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Page {
    /// Draw operations in painting order.
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text operations on the page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rect { .. } => None,
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Lays out every block of `doc`.
///
/// # Errors
///
/// Returns `RenderError::NoPrintableArea` when the margins leave no frame.
pub fn layout(doc: &Document) -> Result<Vec<Page>, RenderError> {
    let mut engine = Engine::new(doc.geometry)?;

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => engine.paragraph(p, doc.stylesheet.get(p.style)),
            Block::Table(t) => engine.table(t),
            Block::Spacer(height) => engine.spacer(*height),
            Block::PageBreak => engine.page_break(),
        }
    }

    let pages = engine.finish();
    debug!(pages = pages.len(), blocks = doc.blocks.len(), "layout complete");
    Ok(pages)
}

struct Engine {
    left: f32,
    top: f32,
    bottom: f32,
    width: f32,
    y: f32,
    current: Page,
    pages: Vec<Page>,
}

impl Engine {
    fn new(geometry: PageGeometry) -> Result<Self, RenderError> {
        let width = geometry.frame_width();
        let height = geometry.frame_height();
        if width <= 0.0 || height <= 0.0 {
            return Err(RenderError::NoPrintableArea { width, height });
        }
        let top = geometry.height() - geometry.margins.top;
        Ok(Self {
            left: geometry.margins.left,
            top,
            bottom: geometry.margins.bottom,
            width,
            y: top,
            current: Page::default(),
            pages: Vec::new(),
        })
    }

    fn at_top(&self) -> bool {
        (self.y - self.top).abs() < f32::EPSILON
    }

    fn remaining(&self) -> f32 {
        self.y - self.bottom
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.top;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.ops.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }

    fn page_break(&mut self) {
        if !self.at_top() || !self.current.ops.is_empty() {
            self.new_page();
        }
    }

    fn spacer(&mut self, height: f32) {
        if height > self.remaining() {
            if !self.at_top() {
                self.new_page();
            }
        } else {
            self.y -= height;
        }
    }

    // ------------------------------------------------------------------------
    // Paragraphs
    // ------------------------------------------------------------------------

    fn paragraph(&mut self, paragraph: &Paragraph, style: &ParagraphStyle) {
        if !self.at_top() {
            self.y -= style.space_before.min(self.remaining());
        }

        let tokens = tokenize(&paragraph.runs, style.font, style.font_size);
        let lines = break_lines(tokens, self.width, style.font_size);
        let count = lines.len();

        for (index, line) in lines.iter().enumerate() {
            if style.leading > self.remaining() {
                if self.at_top() {
                    warn!(leading = style.leading, "line taller than the page frame");
                } else {
                    self.new_page();
                }
            }
            let baseline = self.y - style.font_size;
            let last = index + 1 == count;
            self.line(line, style, baseline, last);
            self.y -= style.leading;
        }

        if style.space_after > self.remaining() {
            self.new_page();
        } else {
            self.y -= style.space_after;
        }
    }

    fn line(&mut self, line: &Line, style: &ParagraphStyle, baseline: f32, last: bool) {
        let slack = (self.width - line.width).max(0.0);
        let justify = style.alignment == Alignment::Justify
            && !last
            && !line.forced_break
            && line.words.len() > 1;

        let mut x = match style.alignment {
            Alignment::Center => self.left + slack / 2.0,
            Alignment::Left | Alignment::Justify => self.left,
        };

        if justify {
            #[allow(clippy::cast_precision_loss)]
            let extra = slack / (line.words.len() - 1) as f32;
            for word in &line.words {
                for fragment in &word.fragments {
                    self.text(x, baseline, fragment.font, style, &fragment.text);
                    x += fragment.width;
                }
                x += space_width(word, style.font_size) + extra;
            }
            return;
        }

        // Merge same-face pieces so plain lines become a single text op.
        let mut pieces: Vec<(Font, String)> = Vec::new();
        for (i, word) in line.words.iter().enumerate() {
            for (j, fragment) in word.fragments.iter().enumerate() {
                let lead = if i > 0 && j == 0 { " " } else { "" };
                match pieces.last_mut() {
                    Some((font, text)) if *font == fragment.font => {
                        text.push_str(lead);
                        text.push_str(&fragment.text);
                    }
                    Some((_, text)) if !lead.is_empty() => {
                        text.push(' ');
                        pieces.push((fragment.font, fragment.text.clone()));
                    }
                    _ => pieces.push((fragment.font, fragment.text.clone())),
                }
            }
        }
        for (font, text) in pieces {
            let advance = text_width(font, style.font_size, &text);
            self.text(x, baseline, font, style, &text);
            x += advance;
        }
    }

    fn text(&mut self, x: f32, y: f32, font: Font, style: &ParagraphStyle, text: &str) {
        self.current.ops.push(DrawOp::Text {
            x,
            y,
            font,
            size: style.font_size,
            color: style.color,
            text: text.to_string(),
        });
    }

    // ------------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------------

    fn table(&mut self, table: &Table) {
        let style = table.style();
        let x0 = self.left + (self.width - table.width()).max(0.0) / 2.0;

        for (index, row) in table.rows().iter().enumerate() {
            let header = index < table.header_rows();
            let cells = self.row_cells(table, row, header);
            let bottom_pad = if header {
                style.header_bottom_padding
            } else {
                CELL_PADDING_Y
            };
            let content = cells
                .iter()
                .map(|c| c.lines.len())
                .max()
                .unwrap_or(1);
            #[allow(clippy::cast_precision_loss)]
            let height =
                content as f32 * cells[0].size * CELL_LEADING + CELL_PADDING_Y + bottom_pad;

            if height > self.remaining() {
                if self.at_top() {
                    warn!(row = index, height, "table row taller than the page frame");
                } else {
                    self.new_page();
                }
            }

            let row_bottom = self.y - height;
            let mut x = x0;
            for (column, cell) in cells.iter().enumerate() {
                let width = table.column_widths()[column];
                if style.kind == TableKind::Grid {
                    let fill = if header {
                        style.header_background
                    } else {
                        style.row_backgrounds[(index - table.header_rows()) % 2]
                    };
                    self.current.ops.push(DrawOp::Rect {
                        x,
                        y: row_bottom,
                        width,
                        height,
                        fill: Some(fill),
                        stroke: (style.grid.1 > 0.0).then_some(style.grid),
                    });
                }
                let leading = cell.size * CELL_LEADING;
                for (n, line) in cell.lines.iter().enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let baseline = self.y - CELL_PADDING_Y - cell.size - n as f32 * leading;
                    self.current.ops.push(DrawOp::Text {
                        x: x + CELL_PADDING_X,
                        y: baseline,
                        font: cell.font,
                        size: cell.size,
                        color: cell.color,
                        text: line.clone(),
                    });
                }
                x += width;
            }
            self.y = row_bottom;
        }
    }

    fn row_cells(&self, table: &Table, row: &[String], header: bool) -> Vec<Cell> {
        let style = table.style();
        row.iter()
            .zip(table.column_widths())
            .enumerate()
            .map(|(column, (text, &width))| {
                let (font, size, color) = match (style.kind, header) {
                    (TableKind::Grid, true) => {
                        (Font::HelveticaBold, style.header_font_size, style.header_text)
                    }
                    (TableKind::Grid, false) => {
                        (Font::Helvetica, style.body_font_size, Color::BLACK)
                    }
                    (TableKind::KeyValue, _) if column == 0 => {
                        (Font::HelveticaBold, style.body_font_size, style.label_color)
                    }
                    (TableKind::KeyValue, _) => {
                        (Font::Helvetica, style.body_font_size, Color::BLACK)
                    }
                };
                let lines = wrap_cell(text, font, size, width - 2.0 * CELL_PADDING_X);
                Cell {
                    font,
                    size,
                    color,
                    lines,
                }
            })
            .collect()
    }
}

struct Cell {
    font: Font,
    size: f32,
    color: Color,
    lines: Vec<String>,
}

fn wrap_cell(text: &str, font: Font, size: f32, width: f32) -> Vec<String> {
    let runs = [crate::document::Inline::plain(text)];
    let lines = break_lines(tokenize(&runs, font, size), width.max(1.0), size);
    lines
        .iter()
        .map(|line| {
            line.words
                .iter()
                .map(crate::layout::text::Word::text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
