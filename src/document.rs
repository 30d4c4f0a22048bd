//! The INI document tree.
//!
//! This module provides the in-memory representation produced by the parser and
//! consumed by the formatter: [`IniDocument`] owns [`IniSection`]s, sections own
//! [`IniKey`]s, and each section/key carries its [`IniComment`]s and layout
//! metadata. The tree records enough formatting detail (blank-line counts,
//! indentation, whitespace around the delimiter) for the formatter to reproduce
//! the original text.
//!
//! All types derive `serde::Serialize`, so a parsed document can be exported
//! (e.g. as JSON) for inspection.
//!
//! ## Examples
//!
//! ```rust
//! use ini_preserve::{from_str, to_string};
//!
//! let source = ";database settings\n[db]\nhost = localhost\nport = 5432\n";
//! let doc = from_str(source).unwrap();
//!
//! let db = doc.section("db").unwrap();
//! assert_eq!(db.leading_comment().text(), Some("database settings"));
//! assert_eq!(db.key("host").unwrap().value(), "localhost");
//! assert_eq!(to_string(&doc), source);
//! ```

use crate::IniOptions;
use serde::Serialize;

/// Reserved name of the implicit global section.
///
/// Keys appearing before any explicit section header belong to a section with
/// this name; it has no header line of its own.
pub const GLOBAL_SECTION_NAME: &str = "__global__";

/// A comment attached to a section or key.
///
/// Distinguishes three states: absent (`text` is `None`, no comment at all),
/// present-empty (`Some("")`, a bare comment marker), and present with text.
/// Leading comment blocks spanning several physical lines keep their per-line
/// texts joined with `'\n'`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IniComment {
    text: Option<String>,
    left_indentation: usize,
    empty_lines_before: usize,
}

impl IniComment {
    /// An absent comment carrying no blank lines.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A present comment with the given text, no indentation, no blank lines.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        IniComment {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub(crate) fn with_layout(
        text: Option<String>,
        left_indentation: usize,
        empty_lines_before: usize,
    ) -> Self {
        IniComment {
            text,
            left_indentation,
            empty_lines_before,
        }
    }

    /// The comment text, or `None` when no comment is present.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the comment text (`None` removes the comment).
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Whether a comment is present (including present-empty).
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.text.is_some()
    }

    /// Whitespace before the comment marker: on its own line for leading
    /// comments, between the content and the marker for inline trailing ones.
    #[must_use]
    pub fn left_indentation(&self) -> usize {
        self.left_indentation
    }

    pub fn set_left_indentation(&mut self, indentation: usize) {
        self.left_indentation = indentation;
    }

    /// Count of fully blank lines immediately preceding this comment block
    /// (or preceding the annotated element itself when no comment is present).
    #[must_use]
    pub fn empty_lines_before(&self) -> usize {
        self.empty_lines_before
    }

    pub fn set_empty_lines_before(&mut self, count: usize) {
        self.empty_lines_before = count;
    }
}

/// Whitespace layout of a key line, recorded on parse and reapplied on write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KeyLayout {
    /// Whitespace before the key name.
    pub indent: usize,
    /// Whitespace between the key name and the delimiter.
    pub before_delimiter: usize,
    /// Whitespace between the delimiter and the value.
    pub after_delimiter: usize,
}

/// A single `name = value` entry.
///
/// Keys are exclusively owned by their section; order within a section is
/// insertion order and is preserved on write. Duplicate names are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IniKey {
    name: String,
    value: String,
    leading_comment: IniComment,
    trailing_comment: IniComment,
    layout: KeyLayout,
}

impl IniKey {
    /// Creates a key with no comments and compact layout (`name=value`).
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        IniKey {
            name: name.into(),
            value: value.into(),
            leading_comment: IniComment::none(),
            trailing_comment: IniComment::none(),
            layout: KeyLayout::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The comment block on the line(s) preceding this key.
    #[must_use]
    pub fn leading_comment(&self) -> &IniComment {
        &self.leading_comment
    }

    pub fn leading_comment_mut(&mut self) -> &mut IniComment {
        &mut self.leading_comment
    }

    /// The inline comment sharing this key's line.
    #[must_use]
    pub fn trailing_comment(&self) -> &IniComment {
        &self.trailing_comment
    }

    pub fn trailing_comment_mut(&mut self) -> &mut IniComment {
        &mut self.trailing_comment
    }

    #[must_use]
    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut KeyLayout {
        &mut self.layout
    }

    pub(crate) fn from_parts(
        name: String,
        value: String,
        leading_comment: IniComment,
        trailing_comment: IniComment,
        layout: KeyLayout,
    ) -> Self {
        IniKey {
            name,
            value,
            leading_comment,
            trailing_comment,
            layout,
        }
    }
}

/// A named section holding an ordered sequence of keys.
///
/// The section named [`GLOBAL_SECTION_NAME`] is the implicit global section;
/// it emits no header line, and its header comments stay absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IniSection {
    name: String,
    keys: Vec<IniKey>,
    leading_comment: IniComment,
    trailing_comment: IniComment,
    indent: usize,
}

impl IniSection {
    /// Creates an empty section with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        IniSection {
            name: name.into(),
            keys: Vec::new(),
            leading_comment: IniComment::none(),
            trailing_comment: IniComment::none(),
            indent: 0,
        }
    }

    /// Creates the implicit global section.
    #[must_use]
    pub fn global() -> Self {
        Self::new(GLOBAL_SECTION_NAME)
    }

    /// Whether this is the implicit global section.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.name == GLOBAL_SECTION_NAME
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn keys(&self) -> &[IniKey] {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut Vec<IniKey> {
        &mut self.keys
    }

    /// First key with the given name, if any.
    #[must_use]
    pub fn key(&self, name: &str) -> Option<&IniKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// Appends a key, keeping insertion order.
    pub fn push_key(&mut self, key: IniKey) {
        self.keys.push(key);
    }

    /// The comment block on the line(s) preceding this section's header.
    #[must_use]
    pub fn leading_comment(&self) -> &IniComment {
        &self.leading_comment
    }

    pub fn leading_comment_mut(&mut self) -> &mut IniComment {
        &mut self.leading_comment
    }

    /// The inline comment sharing the header line.
    #[must_use]
    pub fn trailing_comment(&self) -> &IniComment {
        &self.trailing_comment
    }

    pub fn trailing_comment_mut(&mut self) -> &mut IniComment {
        &mut self.trailing_comment
    }

    /// Whitespace before the opening wrapper on the header line.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    pub(crate) fn from_parts(
        name: String,
        leading_comment: IniComment,
        trailing_comment: IniComment,
        indent: usize,
    ) -> Self {
        IniSection {
            name,
            keys: Vec::new(),
            leading_comment,
            trailing_comment,
            indent,
        }
    }
}

/// An INI document: an ordered sequence of sections plus the syntax it was
/// (or will be) written with.
///
/// Duplicate section names are kept as separate entries in order. The tree is
/// a plain in-memory structure with no internal locking; concurrent mutation
/// needs external synchronization.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IniDocument {
    sections: Vec<IniSection>,
    options: IniOptions,
    trailing_newline: bool,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new(IniOptions::default())
    }
}

impl IniDocument {
    /// Creates an empty document using the given syntax.
    #[must_use]
    pub fn new(options: IniOptions) -> Self {
        IniDocument {
            sections: Vec::new(),
            options,
            trailing_newline: true,
        }
    }

    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    #[must_use]
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut Vec<IniSection> {
        &mut self.sections
    }

    /// First section with the given name, if any.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Appends a section, keeping insertion order.
    pub fn push_section(&mut self, section: IniSection) {
        self.sections.push(section);
    }

    /// Whether the source ended with a line terminator (reapplied on write).
    #[must_use]
    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    pub fn set_trailing_newline(&mut self, trailing_newline: bool) {
        self.trailing_newline = trailing_newline;
    }

    pub(crate) fn from_parts(
        sections: Vec<IniSection>,
        options: IniOptions,
        trailing_newline: bool,
    ) -> Self {
        IniDocument {
            sections,
            options,
            trailing_newline,
        }
    }
}
