//! Output renderers.
//!
//! Supports three output formats:
//! - PDF, paginated by [`crate::layout`] and written with `printpdf`
//! - Markdown, for diffing and review
//! - a JSON outline of headings and tables

pub mod markdown;
pub mod outline;
pub mod pdf;

use std::fmt;

use crate::document::Document;
use crate::error::RenderError;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Paginated PDF.
    #[default]
    Pdf,
    /// Markdown text.
    Markdown,
    /// JSON outline.
    Outline,
}

impl OutputFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Markdown => "md",
            Self::Outline => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Markdown => write!(f, "markdown"),
            Self::Outline => write!(f, "outline"),
        }
    }
}

/// Bytes produced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// File content.
    pub bytes: Vec<u8>,
    /// Page count, for paginated formats.
    pub pages: Option<usize>,
}

/// Renders a document into one output format.
pub trait Renderer {
    /// Renders `doc`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if layout or encoding fails.
    fn render(&self, doc: &Document) -> Result<Rendered, RenderError>;

    /// Returns the format this renderer produces.
    fn format(&self) -> OutputFormat;
}

/// Creates the renderer for `format`.
#[must_use]
pub fn create_renderer(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Pdf => Box::new(pdf::PdfRenderer),
        OutputFormat::Markdown => Box::new(markdown::MarkdownRenderer),
        OutputFormat::Outline => Box::new(outline::OutlineRenderer),
    }
}
