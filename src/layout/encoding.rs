//! WinAnsi coverage of the built-in PDF fonts.
//!
//! The standard 14 fonts only carry the WinAnsi character set. Text is
//! mapped before measuring so the laid-out widths match what is drawn.

/// Characters in `0x80..=0x9F` that WinAnsi maps to typographic glyphs.
///
/// printpdf writes `•` as byte 0x7F rather than 0x95. Viewers still draw a
/// bullet but text extraction drops it.
const WIN_ANSI_EXTRAS: &[char] = &[
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“', '”', '•',
    '–', '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

/// Returns `true` when `c` can be drawn with a built-in font.
#[must_use]
pub fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRAS.contains(&c)
}

/// Replacement text for a character outside WinAnsi.
#[must_use]
pub fn replacement(c: char) -> &'static str {
    match c {
        'α' => "alpha",
        'β' => "beta",
        'γ' => "gamma",
        'δ' => "delta",
        'λ' => "lambda",
        'μ' => "mu",
        'σ' => "sigma",
        '≤' => "<=",
        '≥' => ">=",
        '≈' => "~",
        '≠' => "!=",
        '→' => "->",
        '←' => "<-",
        '✓' | '✔' => "\u{bb}",
        '✗' | '✘' => "x",
        '−' => "-",
        '\u{2009}' | '\u{202f}' => " ",
        _ => "?",
    }
}
