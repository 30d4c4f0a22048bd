//! INI formatting.
//!
//! The inverse of the parser: walks the document tree in order and regenerates
//! text from the recorded layout — blank-line counts, comment indentation,
//! whitespace around the key delimiter. A document produced by the parser and
//! left unmutated formats back to its source byte-for-byte (given matching
//! line endings; see the crate docs for the known exceptions).
//!
//! Formatting itself cannot fail. Encoding to bytes can fail only for an ASCII
//! target holding non-ASCII text, and writing adds ordinary I/O errors.

use crate::document::{IniComment, IniDocument};
use crate::{Error, Result};

fn push_spaces(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}

/// Emits the blank lines and comment line(s) preceding a structural line.
///
/// Multi-line blocks keep their text joined with `'\n'`; each segment gets the
/// block's indentation and the comment marker.
fn write_leading(out: &mut String, comment: &IniComment, marker: char, eol: &str) {
    for _ in 0..comment.empty_lines_before() {
        out.push_str(eol);
    }
    if let Some(text) = comment.text() {
        for segment in text.split('\n') {
            push_spaces(out, comment.left_indentation());
            out.push(marker);
            out.push_str(segment);
            out.push_str(eol);
        }
    }
}

/// Emits an inline comment after content on the same line.
fn write_trailing(out: &mut String, comment: &IniComment, marker: char) {
    if let Some(text) = comment.text() {
        push_spaces(out, comment.left_indentation());
        out.push(marker);
        out.push_str(text);
    }
}

/// Regenerates the document's text.
pub(crate) fn format_document(document: &IniDocument) -> String {
    let options = document.options();
    let eol = options.line_ending.as_str();
    let marker = options.comment_char();
    let mut out = String::with_capacity(256);

    for section in document.sections() {
        // The global section has no header line; its keys carry any comments.
        if !section.is_global() {
            write_leading(&mut out, section.leading_comment(), marker, eol);
            push_spaces(&mut out, section.indent());
            out.push(options.section_open());
            out.push_str(section.name());
            out.push(options.section_close());
            write_trailing(&mut out, section.trailing_comment(), marker);
            out.push_str(eol);
        }
        for key in section.keys() {
            write_leading(&mut out, key.leading_comment(), marker, eol);
            let layout = key.layout();
            push_spaces(&mut out, layout.indent);
            out.push_str(key.name());
            push_spaces(&mut out, layout.before_delimiter);
            out.push(options.delimiter_char());
            push_spaces(&mut out, layout.after_delimiter);
            out.push_str(key.value());
            write_trailing(&mut out, key.trailing_comment(), marker);
            out.push_str(eol);
        }
    }

    if !document.trailing_newline() && out.ends_with(eol) {
        out.truncate(out.len() - eol.len());
    }
    out
}

/// Formats the document and encodes it under the configured encoding.
pub(crate) fn encode_document(document: &IniDocument) -> Result<Vec<u8>> {
    let text = format_document(document);
    let encoding = document.options().encoding;
    for (idx, line) in text.lines().enumerate() {
        encoding
            .check_encodable(line)
            .map_err(|msg| Error::encoding(idx + 1, &msg))?;
    }
    Ok(text.into_bytes())
}
