//! Style presets: fonts, colors and paragraph styles.
//!
//! The presets mirror the handful of named styles every report uses
//! (`title`, `heading1`, `heading2`, `body`, `footer`). Reports override
//! individual fields through [`StyleOverride`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

// ============================================================================
// Color
// ============================================================================

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// `whitesmoke` (header text on dark fills).
    pub const WHITESMOKE: Self = Self::rgb(0xf5, 0xf5, 0xf5);
    /// `beige` (table body fill).
    pub const BEIGE: Self = Self::rgb(0xf5, 0xf5, 0xdc);
    /// `lightgrey` (alternating table rows).
    pub const LIGHTGREY: Self = Self::rgb(0xd3, 0xd3, 0xd3);
    /// `grey` (footer text).
    pub const GREY: Self = Self::rgb(0x80, 0x80, 0x80);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`.
    #[must_use]
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "whitesmoke" => Self::WHITESMOKE,
            "beige" => Self::BEIGE,
            "lightgrey" | "lightgray" => Self::LIGHTGREY,
            "grey" | "gray" => Self::GREY,
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(color) = Self::named(&trimmed.to_ascii_lowercase()) {
            return Ok(color);
        }

        let hex = trimmed
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| DocumentError::InvalidColor(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| DocumentError::InvalidColor(s.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Font
// ============================================================================

/// The built-in Helvetica family (no font files required).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Font {
    /// Regular weight.
    #[default]
    #[serde(rename = "Helvetica")]
    Helvetica,
    /// Bold weight.
    #[serde(rename = "Helvetica-Bold")]
    HelveticaBold,
    /// Regular oblique.
    #[serde(rename = "Helvetica-Oblique")]
    HelveticaOblique,
    /// Bold oblique.
    #[serde(rename = "Helvetica-BoldOblique")]
    HelveticaBoldOblique,
}

impl Font {
    /// All variants, in a stable order.
    pub const ALL: [Self; 4] = [
        Self::Helvetica,
        Self::HelveticaBold,
        Self::HelveticaOblique,
        Self::HelveticaBoldOblique,
    ];

    /// Returns `true` for the bold weights.
    #[must_use]
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::HelveticaBold | Self::HelveticaBoldOblique)
    }

    /// Returns `true` for the oblique variants.
    #[must_use]
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::HelveticaOblique | Self::HelveticaBoldOblique)
    }

    /// Applies inline emphasis on top of this font.
    ///
    /// Emphasis only adds: `<b>` inside a bold style stays bold.
    #[must_use]
    pub const fn emphasized(self, bold: bool, italic: bool) -> Self {
        match (self.is_bold() || bold, self.is_italic() || italic) {
            (false, false) => Self::Helvetica,
            (true, false) => Self::HelveticaBold,
            (false, true) => Self::HelveticaOblique,
            (true, true) => Self::HelveticaBoldOblique,
        }
    }

    /// PostScript name of the font.
    #[must_use]
    pub const fn postscript_name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }
}

// ============================================================================
// Paragraph styles
// ============================================================================

/// Horizontal alignment of paragraph lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Ragged right.
    #[default]
    Left,
    /// Centered within the frame.
    Center,
    /// Stretched to both edges except the last line.
    Justify,
}

/// Named style presets available to paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    /// Cover page title lines.
    Title,
    /// Section heading.
    Heading1,
    /// Sub-section heading.
    Heading2,
    /// Body text, bullets and definitions.
    Body,
    /// Closing "Report Generated" line.
    Footer,
}

impl StyleName {
    /// Heading level for outline purposes, if this is a heading style.
    #[must_use]
    pub const fn heading_level(self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Title | Self::Body | Self::Footer => None,
        }
    }
}

/// Font, size, color and spacing for one class of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Base font; inline markup may add bold or oblique.
    pub font: Font,
    /// Font size in points.
    pub font_size: f32,
    /// Baseline-to-baseline distance in points.
    pub leading: f32,
    /// Text color.
    pub color: Color,
    /// Vertical space above the paragraph (dropped at the top of a page).
    pub space_before: f32,
    /// Vertical space below the paragraph.
    pub space_after: f32,
    /// Line alignment.
    pub alignment: Alignment,
}

/// Partial style used by content files to tweak a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverride {
    /// Replacement font.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Replacement size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Replacement leading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading: Option<f32>,
    /// Replacement color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Replacement space before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    /// Replacement space after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
    /// Replacement alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl ParagraphStyle {
    /// Returns a copy with every field present in `over` replaced.
    #[must_use]
    pub fn with_override(&self, over: &StyleOverride) -> Self {
        Self {
            font: over.font.unwrap_or(self.font),
            font_size: over.font_size.unwrap_or(self.font_size),
            leading: over.leading.unwrap_or(self.leading),
            color: over.color.unwrap_or(self.color),
            space_before: over.space_before.unwrap_or(self.space_before),
            space_after: over.space_after.unwrap_or(self.space_after),
            alignment: over.alignment.unwrap_or(self.alignment),
        }
    }

    /// Rejects sizes that would stall or invert the layout.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidDimension` for non-positive sizes or
    /// negative spacing.
    pub fn check(&self) -> Result<(), DocumentError> {
        positive("font size", self.font_size)?;
        positive("leading", self.leading)?;
        non_negative("space before", self.space_before)?;
        non_negative("space after", self.space_after)
    }
}

pub(crate) fn positive(what: &'static str, value: f32) -> Result<(), DocumentError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DocumentError::InvalidDimension { what, value })
    }
}

pub(crate) fn non_negative(what: &'static str, value: f32) -> Result<(), DocumentError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DocumentError::InvalidDimension { what, value })
    }
}

// ============================================================================
// Stylesheet
// ============================================================================

/// The five presets a report draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Cover title lines.
    pub title: ParagraphStyle,
    /// Section headings.
    pub heading1: ParagraphStyle,
    /// Sub-section headings.
    pub heading2: ParagraphStyle,
    /// Body text.
    pub body: ParagraphStyle,
    /// Footer line.
    pub footer: ParagraphStyle,
}

/// Per-preset overrides as written in a content file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverrides {
    /// Title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<StyleOverride>,
    /// Heading 1 override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading1: Option<StyleOverride>,
    /// Heading 2 override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading2: Option<StyleOverride>,
    /// Body override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<StyleOverride>,
    /// Footer override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<StyleOverride>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            title: ParagraphStyle {
                font: Font::HelveticaBold,
                font_size: 24.0,
                leading: 22.0,
                color: Color::rgb(0x1a, 0x23, 0x7e),
                space_before: 0.0,
                space_after: 30.0,
                alignment: Alignment::Center,
            },
            heading1: ParagraphStyle {
                font: Font::HelveticaBold,
                font_size: 16.0,
                leading: 22.0,
                color: Color::rgb(0x28, 0x35, 0x93),
                space_before: 12.0,
                space_after: 12.0,
                alignment: Alignment::Left,
            },
            heading2: ParagraphStyle {
                font: Font::HelveticaBold,
                font_size: 14.0,
                leading: 18.0,
                color: Color::rgb(0x39, 0x49, 0xab),
                space_before: 10.0,
                space_after: 10.0,
                alignment: Alignment::Left,
            },
            body: ParagraphStyle {
                font: Font::Helvetica,
                font_size: 11.0,
                leading: 14.0,
                color: Color::BLACK,
                space_before: 0.0,
                space_after: 12.0,
                alignment: Alignment::Justify,
            },
            footer: ParagraphStyle {
                font: Font::Helvetica,
                font_size: 9.0,
                leading: 12.0,
                color: Color::GREY,
                space_before: 0.0,
                space_after: 0.0,
                alignment: Alignment::Center,
            },
        }
    }
}

impl Stylesheet {
    /// Looks up a preset by name.
    #[must_use]
    pub const fn get(&self, name: StyleName) -> &ParagraphStyle {
        match name {
            StyleName::Title => &self.title,
            StyleName::Heading1 => &self.heading1,
            StyleName::Heading2 => &self.heading2,
            StyleName::Body => &self.body,
            StyleName::Footer => &self.footer,
        }
    }

    /// Returns a stylesheet with the given overrides applied.
    #[must_use]
    pub fn with_overrides(&self, overrides: &StyleOverrides) -> Self {
        let apply = |base: &ParagraphStyle, over: Option<&StyleOverride>| {
            over.map_or_else(|| base.clone(), |o| base.with_override(o))
        };
        Self {
            title: apply(&self.title, overrides.title.as_ref()),
            heading1: apply(&self.heading1, overrides.heading1.as_ref()),
            heading2: apply(&self.heading2, overrides.heading2.as_ref()),
            body: apply(&self.body, overrides.body.as_ref()),
            footer: apply(&self.footer, overrides.footer.as_ref()),
        }
    }

    /// Checks every preset.
    ///
    /// # Errors
    ///
    /// Returns the first `DocumentError::InvalidDimension` found.
    pub fn check(&self) -> Result<(), DocumentError> {
        for style in [
            &self.title,
            &self.heading1,
            &self.heading2,
            &self.body,
            &self.footer,
        ] {
            style.check()?;
        }
        Ok(())
    }
}
