//! PDF output via `printpdf`.
//!
//! Pagination happens in [`crate::layout`]; this module only replays the
//! positioned text and rectangles onto PDF pages using the built-in
//! Helvetica faces, so no font files are needed at run time.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};
use tracing::debug;

use crate::document::geometry::pt_to_mm;
use crate::document::{Color, Document, Font};
use crate::error::RenderError;
use crate::layout::{DrawOp, Page, layout};
use crate::render::{OutputFormat, Rendered, Renderer};

const LAYER: &str = "Layer 1";

/// Paginates and writes PDF bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl Renderer for PdfRenderer {
    fn render(&self, doc: &Document) -> Result<Rendered, RenderError> {
        let pages = layout(doc)?;
        let bytes = write_pdf(doc, &pages)?;
        if bytes.is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        debug!(pages = pages.len(), bytes = bytes.len(), "rendered PDF");
        Ok(Rendered {
            bytes,
            pages: Some(pages.len()),
        })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }
}

/// Writes already laid-out pages.
///
/// # Errors
///
/// Returns `RenderError::Pdf` when the backend fails to register fonts or
/// serialize the file.
pub fn write_pdf(doc: &Document, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
    let width = Mm(pt_to_mm(doc.geometry.width()));
    let height = Mm(pt_to_mm(doc.geometry.height()));
    let (pdf, first_page, first_layer) = PdfDocument::new(doc.title.as_str(), width, height, LAYER);
    let fonts = Fonts::register(&pdf)?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(width, height, LAYER)
        };
        let layer = pdf.get_page(page_index).get_layer(layer_index);
        draw_page(&layer, page, &fonts);
    }

    pdf.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    bold_oblique: IndirectFontRef,
}

impl Fonts {
    fn register(pdf: &PdfDocumentReference) -> Result<Self, RenderError> {
        let add = |font: BuiltinFont| {
            pdf.add_builtin_font(font)
                .map_err(|e| RenderError::Pdf(e.to_string()))
        };
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            oblique: add(BuiltinFont::HelveticaOblique)?,
            bold_oblique: add(BuiltinFont::HelveticaBoldOblique)?,
        })
    }

    const fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.regular,
            Font::HelveticaBold => &self.bold,
            Font::HelveticaOblique => &self.oblique,
            Font::HelveticaBoldOblique => &self.bold_oblique,
        }
    }
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                layer.set_fill_color(pdf_color(*color));
                layer.use_text(
                    text.as_str(),
                    *size,
                    Mm(pt_to_mm(*x)),
                    Mm(pt_to_mm(*y)),
                    fonts.get(*font),
                );
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let mode = match (fill, stroke) {
                    (Some(_), Some(_)) => PaintMode::FillStroke,
                    (Some(_), None) => PaintMode::Fill,
                    (None, Some(_)) => PaintMode::Stroke,
                    (None, None) => continue,
                };
                if let Some(color) = fill {
                    layer.set_fill_color(pdf_color(*color));
                }
                if let Some((color, thickness)) = stroke {
                    layer.set_outline_color(pdf_color(*color));
                    layer.set_outline_thickness(*thickness);
                }
                let rect = Rect::new(
                    Mm(pt_to_mm(*x)),
                    Mm(pt_to_mm(*y)),
                    Mm(pt_to_mm(x + width)),
                    Mm(pt_to_mm(y + height)),
                )
                .with_mode(mode);
                layer.add_rect(rect);
            }
        }
    }
}

fn pdf_color(color: Color) -> PdfColor {
    let (r, g, b) = color.to_unit();
    PdfColor::Rgb(Rgb::new(r, g, b, None))
}
