//! Word segmentation and greedy line breaking.

use crate::document::{Font, Inline};
use crate::layout::encoding::{is_win_ansi, replacement};
use crate::layout::metrics::text_width;

/// A run of characters set in one font.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Face used for these characters.
    pub font: Font,
    /// Characters.
    pub text: String,
    /// Advance width in points.
    pub width: f32,
}

/// An unbreakable word, possibly mixing faces (`<b>Minimum:</b>` is one
/// word in bold, `x<b>y</b>` is one word in two faces).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Word {
    /// Face changes inside the word.
    pub fragments: Vec<Fragment>,
}

impl Word {
    /// Total advance of the word.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.fragments.iter().map(|f| f.width).sum()
    }

    /// Face of the last fragment (used for the following space).
    #[must_use]
    pub fn trailing_font(&self) -> Option<Font> {
        self.fragments.last().map(|f| f.font)
    }

    fn push(&mut self, font: Font, c: char) {
        match self.fragments.last_mut() {
            Some(last) if last.font == font => last.text.push(c),
            _ => self.fragments.push(Fragment {
                font,
                text: c.to_string(),
                width: 0.0,
            }),
        }
    }

    fn measure(&mut self, size: f32) {
        for fragment in &mut self.fragments {
            fragment.width = text_width(fragment.font, size, &fragment.text);
        }
    }

    /// Plain text of the word.
    #[must_use]
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// Element of a tokenized paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A word.
    Word(Word),
    /// A forced break.
    Break,
}

/// One laid-out line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Words on the line, in order.
    pub words: Vec<Word>,
    /// Natural width including single spaces between words.
    pub width: f32,
    /// `true` when the line was ended by `<br/>` rather than wrapping.
    pub forced_break: bool,
}

/// Splits inline runs into words, collapsing whitespace.
///
/// Characters the built-in fonts cannot draw are replaced here, so word
/// widths describe the text that is finally drawn.
#[must_use]
pub fn tokenize(runs: &[Inline], base: Font, size: f32) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = Word::default();

    let finish = |word: &mut Word, tokens: &mut Vec<Token>| {
        if !word.fragments.is_empty() {
            let mut done = std::mem::take(word);
            done.measure(size);
            tokens.push(Token::Word(done));
        }
    };

    for run in runs {
        match run {
            Inline::Text { text, bold, italic } => {
                let font = base.emphasized(*bold, *italic);
                for c in text.chars() {
                    if c.is_whitespace() && c != '\u{a0}' {
                        finish(&mut word, &mut tokens);
                    } else if is_win_ansi(c) {
                        word.push(font, c);
                    } else {
                        replacement(c).chars().for_each(|r| word.push(font, r));
                    }
                }
            }
            Inline::LineBreak => {
                finish(&mut word, &mut tokens);
                tokens.push(Token::Break);
            }
        }
    }
    finish(&mut word, &mut tokens);
    tokens
}

/// Width of the space following `word`.
#[must_use]
pub fn space_width(word: &Word, size: f32) -> f32 {
    text_width(word.trailing_font().unwrap_or_default(), size, " ")
}

/// Greedy line breaking to `max_width`.
///
/// A word wider than `max_width` gets a line of its own and overflows.
/// Consecutive forced breaks produce empty lines.
#[must_use]
pub fn break_lines(tokens: Vec<Token>, max_width: f32, size: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();

    for token in tokens {
        match token {
            Token::Break => {
                line.forced_break = true;
                lines.push(std::mem::take(&mut line));
            }
            Token::Word(word) => {
                let gap = line.words.last().map_or(0.0, |w| space_width(w, size));
                let needed = line.width + gap + word.width();
                if !line.words.is_empty() && needed > max_width + 0.01 {
                    lines.push(std::mem::take(&mut line));
                    line.width = word.width();
                } else {
                    line.width = needed;
                }
                line.words.push(word);
            }
        }
    }

    if !line.words.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::markup::parse;
    use proptest::prelude::*;

    fn words(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                Token::Word(w) => w.text(),
                Token::Break => "<br>".to_string(),
            })
            .collect()
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        let tokens = tokenize(&parse("  Drag  &amp; Drop\tUpload "), Font::Helvetica, 11.0);
        assert_eq!(words(&tokens), vec!["Drag", "&", "Drop", "Upload"]);
    }

    #[test]
    fn tokenize_keeps_mixed_face_word_together() {
        let tokens = tokenize(&parse("<b>Backend:</b> Python"), Font::Helvetica, 11.0);
        assert_eq!(words(&tokens), vec!["Backend:", "Python"]);
        let Token::Word(first) = &tokens[0] else {
            panic!("expected word");
        };
        assert_eq!(first.fragments[0].font, Font::HelveticaBold);
    }

    #[test]
    fn tokenize_word_spanning_faces() {
        let tokens = tokenize(&parse("a<b>b</b>c"), Font::Helvetica, 10.0);
        let Token::Word(word) = &tokens[0] else {
            panic!("expected word");
        };
        assert_eq!(tokens.len(), 1);
        assert_eq!(word.fragments.len(), 3);
        assert_eq!(word.text(), "abc");
    }

    #[test]
    fn tokenize_replaces_non_win_ansi() {
        let tokens = tokenize(&parse("Loss (γ=2.0)"), Font::Helvetica, 10.0);
        assert_eq!(words(&tokens), vec!["Loss", "(gamma=2.0)"]);
    }

    #[test]
    fn tokenize_breaks() {
        let tokens = tokenize(&parse("a<br/>b"), Font::Helvetica, 10.0);
        assert_eq!(words(&tokens), vec!["a", "<br>", "b"]);
    }

    #[test]
    fn short_text_is_one_line() {
        let tokens = tokenize(&parse("Python 3.8+"), Font::Helvetica, 11.0);
        let lines = break_lines(tokens, 400.0, 11.0);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].forced_break);
    }

    #[test]
    fn long_text_wraps() {
        let text = "word ".repeat(100);
        let tokens = tokenize(&parse(&text), Font::Helvetica, 11.0);
        let lines = break_lines(tokens, 200.0, 11.0);
        assert!(lines.len() > 5);
        let total: usize = lines.iter().map(|l| l.words.len()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn overlong_word_gets_own_line() {
        let tokens = tokenize(&parse("a Supercalifragilistic b"), Font::Helvetica, 11.0);
        let lines = break_lines(tokens, 30.0, 11.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].words[0].text(), "Supercalifragilistic");
        assert!(lines[1].width > 30.0);
    }

    #[test]
    fn forced_break_marks_line() {
        let tokens = tokenize(&parse("one<br/>two"), Font::Helvetica, 11.0);
        let lines = break_lines(tokens, 400.0, 11.0);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].forced_break);
        assert!(!lines[1].forced_break);
    }

    #[test]
    fn empty_paragraph_has_one_empty_line() {
        let lines = break_lines(Vec::new(), 100.0, 10.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].words.is_empty());
    }

    proptest! {
        #[test]
        fn wrapped_lines_fit_unless_single_word(
            text in "[a-z]{1,12}( [a-z]{1,12}){0,60}",
            width in 40.0_f32..400.0,
        ) {
            let tokens = tokenize(&parse(&text), Font::Helvetica, 10.0);
            let count = tokens.len();
            let lines = break_lines(tokens, width, 10.0);
            let placed: usize = lines.iter().map(|l| l.words.len()).sum();
            prop_assert_eq!(placed, count);
            for line in &lines {
                prop_assert!(line.words.len() == 1 || line.width <= width + 0.01);
            }
        }
    }
}
