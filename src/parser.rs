//! INI parsing.
//!
//! The parser splits the input bytes into physical lines (accepting `\n`,
//! `\r\n`, and lone `\r`), decodes each line under the configured encoding,
//! classifies it, and folds the classified lines into an [`IniDocument`].
//!
//! Parsing is a single pass with an explicit accumulator: the comment tracker
//! carries the pending comment block and blank-line run between structural
//! lines, and the section list's tail is the "current section" of the state
//! machine. The first error aborts the parse with a 1-based line number.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use ini_preserve::from_str;
//!
//! let doc = from_str("[db]\nhost = localhost\n").unwrap();
//! assert_eq!(doc.sections()[0].name(), "db");
//! ```

use crate::document::{IniComment, IniDocument, IniKey, IniSection};
use crate::line::{classify, InlineComment, LineKind};
use crate::{Error, IniOptions, Result};

/// Splits raw bytes into physical lines on any terminator convention.
///
/// Returns the lines (terminators excluded) and whether the input ended with a
/// terminator. Both supported encodings are ASCII-compatible, so splitting on
/// raw bytes is safe.
fn split_lines(bytes: &[u8]) -> (Vec<&[u8]>, bool) {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&bytes[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&bytes[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    let ended_with_terminator = !bytes.is_empty() && start == bytes.len();
    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }
    (lines, ended_with_terminator)
}

/// A contiguous run of comment-only lines waiting for the next structural line.
struct PendingBlock {
    indent: usize,
    lines: Vec<String>,
    empty_lines_before: usize,
}

/// Running state between structural lines: the blank-line run and at most one
/// pending comment block. A blank line detaches any pending block (the most
/// recent block wins) and restarts the run.
#[derive(Default)]
struct CommentTracker {
    blank_run: usize,
    pending: Option<PendingBlock>,
}

impl CommentTracker {
    fn blank(&mut self) {
        if self.pending.take().is_some() {
            self.blank_run = 1;
        } else {
            self.blank_run += 1;
        }
    }

    fn comment(&mut self, indent: usize, text: String) {
        match &mut self.pending {
            Some(block) => block.lines.push(text),
            None => {
                self.pending = Some(PendingBlock {
                    indent,
                    lines: vec![text],
                    empty_lines_before: self.blank_run,
                });
                self.blank_run = 0;
            }
        }
    }

    /// Consumes the accumulated state as the leading comment of a structural
    /// line. With no pending block the comment is absent but still carries the
    /// blank-line run.
    fn take_leading(&mut self) -> IniComment {
        match self.pending.take() {
            Some(block) => IniComment::with_layout(
                Some(block.lines.join("\n")),
                block.indent,
                block.empty_lines_before,
            ),
            None => IniComment::with_layout(None, 0, std::mem::take(&mut self.blank_run)),
        }
    }
}

fn trailing_comment(inline: InlineComment) -> IniComment {
    IniComment::with_layout(inline.text, inline.indent, 0)
}

/// Parses a byte stream into a document under the given syntax.
///
/// Validates the options before reading any input. Any still-pending comment
/// or blank run at end of input attaches to nothing and is discarded.
pub(crate) fn parse_bytes(bytes: &[u8], options: IniOptions) -> Result<IniDocument> {
    options.validate()?;

    let (lines, trailing_newline) = split_lines(bytes);
    let mut sections: Vec<IniSection> = Vec::new();
    let mut tracker = CommentTracker::default();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_number = idx + 1;
        let line = options
            .encoding
            .decode(raw)
            .map_err(|msg| Error::encoding(line_number, &msg))?;
        let kind =
            classify(line, &options).map_err(|msg| Error::malformed_line(line_number, msg, line))?;

        match kind {
            LineKind::Blank => tracker.blank(),
            LineKind::Comment { indent, text } => tracker.comment(indent, text),
            LineKind::SectionHeader {
                indent,
                name,
                trailing,
            } => {
                sections.push(IniSection::from_parts(
                    name,
                    tracker.take_leading(),
                    trailing_comment(trailing),
                    indent,
                ));
            }
            LineKind::KeyValue {
                name,
                value,
                layout,
                trailing,
            } => {
                let key = IniKey::from_parts(
                    name,
                    value,
                    tracker.take_leading(),
                    trailing_comment(trailing),
                    layout,
                );
                // Keys before the first header populate the implicit global section.
                if sections.is_empty() {
                    sections.push(IniSection::global());
                }
                if let Some(current) = sections.last_mut() {
                    current.push_key(key);
                }
            }
        }
    }

    Ok(IniDocument::from_parts(sections, options, trailing_newline))
}
