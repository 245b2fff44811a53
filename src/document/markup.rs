//! Inline paragraph markup.
//!
//! Content strings may carry a tiny markup subset: `<b>…</b>`, `<i>…</i>`
//! and `<br/>`, plus the `&amp;`, `&lt;`, `&gt;` and `&quot;` entities.
//! Anything else that looks like a tag is kept as literal text.

use serde::{Deserialize, Serialize};

/// One inline run of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Inline {
    /// Text with emphasis flags.
    Text {
        /// The literal text (entities already decoded).
        text: String,
        /// Inside `<b>`.
        bold: bool,
        /// Inside `<i>`.
        italic: bool,
    },
    /// Forced line break (`<br/>`).
    LineBreak,
}

impl Inline {
    /// Plain, unemphasized text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }
}

/// Parses markup into inline runs.
///
/// Adjacent runs with identical emphasis are merged. Closing tags without a
/// matching opener are ignored.
#[must_use]
pub fn parse(source: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut buffer = String::new();
    let mut bold = 0_u32;
    let mut italic = 0_u32;
    let mut rest = source;

    while let Some(pos) = rest.find(['<', '&']) {
        buffer.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('&') {
            let (decoded, consumed) = decode_entity(rest);
            buffer.push_str(decoded);
            rest = &rest[consumed..];
            continue;
        }

        let Some(end) = rest.find('>') else {
            break;
        };
        let tag = rest[1..end].trim().to_ascii_lowercase();
        let (b, i) = (bold > 0, italic > 0);

        match tag.as_str() {
            "b" | "strong" => {
                flush(&mut runs, &mut buffer, b, i);
                bold += 1;
            }
            "/b" | "/strong" => {
                flush(&mut runs, &mut buffer, b, i);
                bold = bold.saturating_sub(1);
            }
            "i" | "em" => {
                flush(&mut runs, &mut buffer, b, i);
                italic += 1;
            }
            "/i" | "/em" => {
                flush(&mut runs, &mut buffer, b, i);
                italic = italic.saturating_sub(1);
            }
            "br" | "br/" | "br /" => {
                flush(&mut runs, &mut buffer, b, i);
                runs.push(Inline::LineBreak);
            }
            _ => buffer.push_str(&rest[..=end]),
        }
        rest = &rest[end + 1..];
    }

    buffer.push_str(rest);
    flush(&mut runs, &mut buffer, bold > 0, italic > 0);
    runs
}

/// Concatenates the text of `runs`, rendering line breaks as `\n`.
#[must_use]
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text { text, .. } => text.as_str(),
            Inline::LineBreak => "\n",
        })
        .collect()
}

fn flush(runs: &mut Vec<Inline>, buffer: &mut String, bold: bool, italic: bool) {
    if buffer.is_empty() {
        return;
    }
    let text = std::mem::take(buffer);
    if let Some(Inline::Text {
        text: last,
        bold: last_bold,
        italic: last_italic,
    }) = runs.last_mut()
    {
        if *last_bold == bold && *last_italic == italic {
            last.push_str(&text);
            return;
        }
    }
    runs.push(Inline::Text { text, bold, italic });
}

fn decode_entity(s: &str) -> (&'static str, usize) {
    for (entity, decoded) in [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&nbsp;", "\u{a0}"),
    ] {
        if s.starts_with(entity) {
            return (decoded, entity.len());
        }
    }
    ("&", 1)
}
