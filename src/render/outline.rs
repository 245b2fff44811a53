//! JSON outline output.
//!
//! The outline is layout-independent: it lists headings and table cells
//! but not page numbers, so two runs with the same date compare equal.

use crate::document::Document;
use crate::error::RenderError;
use crate::render::{OutputFormat, Rendered, Renderer};

/// Renders [`Document::outline`] as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn render(&self, doc: &Document) -> Result<Rendered, RenderError> {
        let mut bytes = serde_json::to_vec_pretty(&doc.outline())?;
        bytes.push(b'\n');
        Ok(Rendered { bytes, pages: None })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Outline, PageGeometry, StyleName, Stylesheet};

    #[test]
    fn test_outline_json_parses_back() {
        let mut doc = Document::new("Report", PageGeometry::default(), Stylesheet::default());
        doc.paragraph(StyleName::Heading1, "Executive Summary");
        doc.paragraph(StyleName::Heading2, "Key Achievements");

        let rendered = OutlineRenderer.render(&doc).unwrap();
        let outline: Outline = serde_json::from_slice(&rendered.bytes).unwrap();
        assert_eq!(outline, doc.outline());

        let value: serde_json::Value = serde_json::from_slice(&rendered.bytes).unwrap();
        assert_eq!(value["headings"][1]["text"], "Key Achievements");
        assert_eq!(value["headings"][1]["level"], 2);
    }
}
