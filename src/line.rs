//! Line classification.
//!
//! One physical line (already stripped of its terminator) is classified into a
//! [`LineKind`]: blank, comment-only, section header, or key/value. The scan is
//! left-to-right and the first occurrence of a control character wins; names may
//! not themselves contain the configured control characters (no escaping).

use crate::document::KeyLayout;
use crate::IniOptions;

/// An inline comment captured after content on the same physical line.
///
/// `text: None` means no comment marker appeared at all; `Some("")` means a
/// marker with nothing after it. `indent` counts the whitespace between the
/// content and the marker.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct InlineComment {
    pub text: Option<String>,
    pub indent: usize,
}

impl InlineComment {
    fn absent() -> Self {
        InlineComment {
            text: None,
            indent: 0,
        }
    }
}

/// The classification of one physical line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// The first non-whitespace character is the comment starter.
    Comment { indent: usize, text: String },
    /// A `[name]` header, possibly followed by an inline comment.
    SectionHeader {
        indent: usize,
        name: String,
        trailing: InlineComment,
    },
    /// A `name = value` line, possibly followed by an inline comment.
    KeyValue {
        name: String,
        value: String,
        layout: KeyLayout,
        trailing: InlineComment,
    },
}

/// Counts the characters of `whole` not present in its trimmed tail `tail`.
fn width_before(whole: &str, tail: &str) -> usize {
    whole[..whole.len() - tail.len()].chars().count()
}

/// Scans the text following a section header's close wrapper: optional
/// whitespace, then either end of line or an inline comment.
fn scan_after_header(after: &str, comment: char) -> Result<InlineComment, &'static str> {
    let rest = after.trim_start();
    if rest.is_empty() {
        return Ok(InlineComment::absent());
    }
    match rest.strip_prefix(comment) {
        Some(text) => Ok(InlineComment {
            text: Some(text.to_string()),
            indent: width_before(after, rest),
        }),
        None => Err("unexpected characters after section header"),
    }
}

/// Classifies one physical line under the given syntax.
///
/// Errors carry a static message; the parser attaches the line number and raw
/// text.
pub(crate) fn classify(line: &str, options: &IniOptions) -> Result<LineKind, &'static str> {
    let comment = options.comment_char();
    let open = options.section_open();
    let close = options.section_close();
    let delimiter = options.delimiter_char();

    let content = line.trim_start();
    if content.is_empty() {
        return Ok(LineKind::Blank);
    }
    let indent = width_before(line, content);

    if let Some(text) = content.strip_prefix(comment) {
        return Ok(LineKind::Comment {
            indent,
            text: text.to_string(),
        });
    }

    if let Some(inner) = content.strip_prefix(open) {
        let Some(close_idx) = inner.find(close) else {
            return Err("unterminated section header");
        };
        let name = inner[..close_idx].trim().to_string();
        let after = &inner[close_idx + close.len_utf8()..];
        let trailing = scan_after_header(after, comment)?;
        return Ok(LineKind::SectionHeader {
            indent,
            name,
            trailing,
        });
    }

    // First occurrence wins: a comment starter before any delimiter leaves the
    // content part without a delimiter, which is malformed.
    for (i, c) in content.char_indices() {
        if c == delimiter {
            let name_region = &content[..i];
            let name = name_region.trim_end();
            let rest = &content[i + c.len_utf8()..];

            let (value_region, trailing_text) = match rest.find(comment) {
                Some(pos) => (
                    &rest[..pos],
                    Some(rest[pos + comment.len_utf8()..].to_string()),
                ),
                None => (rest, None),
            };
            let value_and_gap = value_region.trim_start();
            let value = value_and_gap.trim_end();
            // Whitespace between value and marker travels with the comment;
            // without a marker it is dropped, as in plain value trimming.
            let trailing = match trailing_text {
                Some(text) => InlineComment {
                    text: Some(text),
                    indent: value_and_gap.chars().count() - value.chars().count(),
                },
                None => InlineComment::absent(),
            };

            return Ok(LineKind::KeyValue {
                name: name.to_string(),
                value: value.to_string(),
                layout: KeyLayout {
                    indent,
                    before_delimiter: name_region[name.len()..].chars().count(),
                    after_delimiter: width_before(value_region, value_and_gap),
                },
                trailing,
            });
        }
        if c == comment {
            return Err("missing key delimiter");
        }
    }

    Err("missing key delimiter")
}
