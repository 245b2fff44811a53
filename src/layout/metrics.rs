//! Glyph advance widths for the built-in Helvetica faces.
//!
//! Values are the standard Adobe AFM widths in 1/1000 em for printable
//! ASCII, plus the few WinAnsi characters the reports use. Oblique faces
//! share the upright widths.

use crate::document::Font;

/// Advance for characters missing from the tables.
const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn extended_width(c: char, bold: bool) -> Option<u16> {
    let width = match c {
        '\u{a0}' => 278,
        '×' | '±' => 584,
        '°' => 400,
        '•' => 350,
        '–' => 556,
        '—' => 1000,
        '‘' | '’' => {
            if bold {
                278
            } else {
                222
            }
        }
        '“' | '”' => {
            if bold {
                500
            } else {
                333
            }
        }
        '…' => 1000,
        'é' | 'è' => 556,
        _ => return None,
    };
    Some(width)
}

/// Advance width of `c` in 1/1000 em.
#[must_use]
pub fn char_width(font: Font, c: char) -> u16 {
    let table = if font.is_bold() {
        &HELVETICA_BOLD
    } else {
        &HELVETICA
    };
    let code = c as u32;
    if (0x20..0x7f).contains(&code) {
        // `code - 0x20` is below 95
        #[allow(clippy::cast_possible_truncation)]
        return table[(code - 0x20) as usize];
    }
    extended_width(c, font.is_bold()).unwrap_or(DEFAULT_WIDTH)
}

/// Width of `text` in points at `size`.
#[must_use]
pub fn text_width(font: Font, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(font, c))).sum();
    #[allow(clippy::cast_precision_loss)]
    let units = units as f32;
    units * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths() {
        assert_eq!(char_width(Font::Helvetica, ' '), 278);
        assert_eq!(char_width(Font::Helvetica, 'A'), 667);
        assert_eq!(char_width(Font::Helvetica, 'i'), 222);
        assert_eq!(char_width(Font::Helvetica, '~'), 584);
        assert_eq!(char_width(Font::HelveticaBold, 'i'), 278);
        assert_eq!(char_width(Font::HelveticaBold, 'm'), 889);
    }

    #[test]
    fn oblique_shares_upright_widths() {
        for c in ['a', 'W', '7', '{'] {
            assert_eq!(
                char_width(Font::HelveticaOblique, c),
                char_width(Font::Helvetica, c)
            );
            assert_eq!(
                char_width(Font::HelveticaBoldOblique, c),
                char_width(Font::HelveticaBold, c)
            );
        }
    }

    #[test]
    fn extended_and_unknown_widths() {
        assert_eq!(char_width(Font::Helvetica, '×'), 584);
        assert_eq!(char_width(Font::Helvetica, '•'), 350);
        assert_eq!(char_width(Font::Helvetica, 'γ'), DEFAULT_WIDTH);
    }

    #[test]
    fn text_width_scales_with_size() {
        let w10 = text_width(Font::Helvetica, 10.0, "Epochs");
        let w20 = text_width(Font::Helvetica, 20.0, "Epochs");
        assert!((w20 - 2.0 * w10).abs() < 1e-3);
        // E 667 + p 556 + o 556 + c 500 + h 556 + s 500 = 3335
        assert!((w10 - 33.35).abs() < 1e-3);
    }

    #[test]
    fn empty_text_has_zero_width() {
        assert!(text_width(Font::HelveticaBold, 12.0, "").abs() < f32::EPSILON);
    }
}
