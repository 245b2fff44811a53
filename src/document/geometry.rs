//! Page geometry: paper sizes, margins and unit helpers.
//!
//! All lengths are PostScript points (1/72 inch).

use serde::{Deserialize, Serialize};

use crate::document::style::non_negative;
use crate::error::DocumentError;

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Points to millimetres.
#[must_use]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt * 25.4 / INCH
}

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4, 210 × 297 mm.
    #[default]
    A4,
    /// US Letter, 8.5 × 11 in.
    Letter,
}

impl PageSize {
    /// Width and height in points.
    #[must_use]
    pub const fn dimensions(self) -> (f32, f32) {
        match self {
            Self::A4 => (595.276, 841.89),
            Self::Letter => (612.0, 792.0),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Left margin.
    pub left: f32,
    /// Right margin.
    pub right: f32,
    /// Top margin.
    pub top: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: INCH,
            right: INCH,
            top: INCH,
            bottom: 18.0,
        }
    }
}

/// Paper size plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Paper size.
    #[serde(default)]
    pub size: PageSize,
    /// Margins.
    #[serde(default)]
    pub margins: Margins,
}

impl PageGeometry {
    /// Page width in points.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.dimensions().0
    }

    /// Page height in points.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.dimensions().1
    }

    /// Width of the printable frame.
    #[must_use]
    pub fn frame_width(&self) -> f32 {
        self.width() - self.margins.left - self.margins.right
    }

    /// Height of the printable frame.
    #[must_use]
    pub fn frame_height(&self) -> f32 {
        self.height() - self.margins.top - self.margins.bottom
    }

    /// Rejects negative margins.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidDimension` for a negative or
    /// non-finite margin.
    pub fn check(&self) -> Result<(), DocumentError> {
        non_negative("left margin", self.margins.left)?;
        non_negative("right margin", self.margins.right)?;
        non_negative("top margin", self.margins.top)?;
        non_negative("bottom margin", self.margins.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_a4_with_short_bottom_margin() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.size, PageSize::A4);
        assert!((geometry.margins.bottom - 18.0).abs() < f32::EPSILON);
        assert!((geometry.frame_width() - (595.276 - 144.0)).abs() < 0.01);
        assert!((geometry.frame_height() - (841.89 - 90.0)).abs() < 0.01);
    }

    #[test]
    fn letter_dimensions() {
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
    }

    #[test]
    fn pt_to_mm_one_inch() {
        assert!((pt_to_mm(72.0) - 25.4).abs() < 1e-4);
    }

    #[test]
    fn negative_margin_rejected() {
        let mut geometry = PageGeometry::default();
        geometry.margins.left = -1.0;
        assert!(geometry.check().is_err());
    }

    #[test]
    fn geometry_yaml_defaults() {
        let geometry: PageGeometry = serde_yaml::from_str("size: letter").unwrap();
        assert_eq!(geometry.size, PageSize::Letter);
        assert_eq!(geometry.margins, Margins::default());
    }
}
