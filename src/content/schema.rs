//! Content file schema.
//!
//! A content file carries every literal string of a report plus the few
//! layout knobs that differ between reports. The fixed assembly order
//! (cover, sections, footer) lives in [`crate::compose`].

use serde::{Deserialize, Serialize};

use crate::document::{INCH, PageGeometry};
use crate::document::style::StyleOverrides;

/// Placeholder replaced with the generation date.
pub const DATE_PLACEHOLDER: &str = "{date}";

// ============================================================================
// Root
// ============================================================================

/// One report's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportContent {
    /// Short identifier (e.g. `training`).
    pub id: String,

    /// Document title written into the PDF metadata.
    pub title: String,

    /// Default output file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Page size and margins.
    #[serde(default)]
    pub page: PageGeometry,

    /// Overrides applied to the default stylesheet.
    #[serde(default)]
    pub styles: StyleOverrides,

    /// Title page.
    pub cover: Cover,

    /// Body sections in order.
    pub sections: Vec<Section>,

    /// Closing line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl ReportContent {
    /// Output file name, falling back to `<id>.pdf`.
    #[must_use]
    pub fn output_file(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.pdf", self.id))
    }

    /// Section headings in order.
    #[must_use]
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }
}

// ============================================================================
// Cover
// ============================================================================

/// Title block plus metadata table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cover {
    /// Gap above the first title line.
    #[serde(default)]
    pub space_before: f32,

    /// Title lines, each set in the title style.
    pub titles: Vec<String>,

    /// Gap between the titles and the metadata table.
    #[serde(default)]
    pub space_after_titles: f32,

    /// `[label, value]` rows.
    #[serde(default)]
    pub metadata: Vec<[String; 2]>,

    /// Label and value column widths.
    #[serde(default = "default_metadata_widths")]
    pub metadata_widths: Vec<f32>,

    /// Font size of the metadata table.
    #[serde(default = "default_metadata_font_size")]
    pub metadata_font_size: f32,

    /// End the cover with a page break.
    #[serde(default)]
    pub page_break_after: bool,

    /// Gap after the metadata when no page break follows.
    #[serde(default)]
    pub space_after: f32,
}

fn default_metadata_widths() -> Vec<f32> {
    vec![1.5 * INCH, 4.5 * INCH]
}

const fn default_metadata_font_size() -> f32 {
    10.0
}

// ============================================================================
// Sections
// ============================================================================

/// A top-level section introduced by a level-1 heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    /// Heading text.
    pub heading: String,

    /// Start the section on a new page.
    #[serde(default)]
    pub break_before: bool,

    /// Content after the heading.
    #[serde(default)]
    pub blocks: Vec<SectionBlock>,
}

/// Content inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBlock {
    /// Body paragraph (inline markup allowed).
    Paragraph {
        /// Markup text.
        text: String,
    },
    /// Level-2 heading.
    Subheading {
        /// Heading text.
        text: String,
    },
    /// One body paragraph per item, prefixed with a bullet.
    Bullets {
        /// Items.
        items: Vec<String>,
    },
    /// One body paragraph per item, prefixed with a check mark.
    Checklist {
        /// Items.
        items: Vec<String>,
    },
    /// `term: description` paragraphs with the term in bold.
    Definitions {
        /// Pairs.
        items: Vec<Definition>,
    },
    /// Grid table followed by a small gap.
    Table(TableContent),
    /// Vertical gap.
    Spacer {
        /// Height in points.
        height: f32,
    },
}

impl SectionBlock {
    /// Schema name of the block type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Subheading { .. } => "subheading",
            Self::Bullets { .. } => "bullets",
            Self::Checklist { .. } => "checklist",
            Self::Definitions { .. } => "definitions",
            Self::Table(_) => "table",
            Self::Spacer { .. } => "spacer",
        }
    }
}

/// A bold term and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definition {
    /// Term, rendered bold and followed by a colon.
    pub term: String,
    /// Description.
    pub description: String,
}

/// A data table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableContent {
    /// Column widths in points.
    pub widths: Vec<f32>,

    /// Header cells.
    pub header: Vec<String>,

    /// Body rows.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,

    /// Bottom padding of header cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_padding: Option<f32>,
}

impl TableContent {
    /// Header followed by body rows.
    #[must_use]
    pub fn all_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Closing line, set in italics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    /// Gap above the footer.
    #[serde(default)]
    pub space_before: f32,

    /// Footer text.
    pub text: String,
}
