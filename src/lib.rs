//! # ini_preserve
//!
//! A format-preserving reader/writer for the INI configuration file format.
//!
//! ## What makes it different?
//!
//! Most INI parsers keep the logical key/value content and throw the rest away.
//! This crate's defining property is **round-trip fidelity**: parsing a file and
//! re-serializing it reproduces the original layout — comments, blank lines,
//! indentation, and the whitespace around the key delimiter — byte for byte.
//! The document tree tracks formatting metadata alongside the data, and the
//! formatter replays it exactly.
//!
//! ## Key Features
//!
//! - **Round-trip fidelity**: `to_string(&from_str(s)?) == s` for unmutated documents
//! - **Configurable syntax**: comment starter (`;`/`#`), section wrappers
//!   (`[...]`/`{...}`), key delimiter (`=`/`:`), custom characters, UTF-8 or
//!   ASCII encoding, LF or CRLF line endings
//! - **Comment model**: leading comment blocks, inline trailing comments, with
//!   absent / present-empty / non-empty kept as distinct states
//! - **Order preserving**: duplicate sections and keys are kept as-is, in order
//! - **Serde export**: the whole tree derives `Serialize` for inspection
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_preserve::{from_str, to_string};
//!
//! let source = "; connection settings\n[db]\nhost = localhost\nport = 5432 ;default\n";
//! let doc = from_str(source).unwrap();
//!
//! let db = doc.section("db").unwrap();
//! assert_eq!(db.key("host").unwrap().value(), "localhost");
//! assert_eq!(db.key("port").unwrap().trailing_comment().text(), Some("default"));
//!
//! // Byte-for-byte reproduction
//! assert_eq!(to_string(&doc), source);
//! ```
//!
//! ## Custom Syntax
//!
//! ```rust
//! use ini_preserve::{
//!     from_str_with_options, CommentStarter, IniOptions, KeyDelimiter, SectionWrapper,
//! };
//!
//! let options = IniOptions::new()
//!     .with_comment_starter(CommentStarter::Hash)
//!     .with_section_wrapper(SectionWrapper::CurlyBrackets)
//!     .with_key_delimiter(KeyDelimiter::Colon);
//!
//! let doc = from_str_with_options("{Name}#c\nKey:Value", options).unwrap();
//! assert_eq!(doc.sections()[0].trailing_comment().text(), Some("c"));
//! ```
//!
//! ## Global Section
//!
//! Keys before the first `[...]` header land in an implicit section named
//! [`GLOBAL_SECTION_NAME`]; it has no header line of its own.
//!
//! ## Known Limitations
//!
//! - No escaping: names and values may not contain the configured control
//!   characters (first occurrence always wins)
//! - Trailing whitespace after a value without an inline comment is trimmed
//! - Whitespace-only "blank" lines are normalized to empty lines on write
//! - Comment blocks separated from the next element by a blank line do not
//!   attach (the most recent block wins)
//!
//! ## Concurrency
//!
//! Parsing and formatting are single-threaded, single-pass, and all-or-nothing.
//! The document tree has no internal locking; wrap it yourself if you share it.

pub mod document;
pub mod error;
pub mod options;

mod line;
mod parser;
mod writer;

pub use document::{IniComment, IniDocument, IniKey, IniSection, KeyLayout, GLOBAL_SECTION_NAME};
pub use error::{Error, Result};
pub use options::{
    CommentStarter, Encoding, IniOptions, KeyDelimiter, LineEnding, SectionWrapper,
};

use std::io;

/// Parses INI text with the default syntax (`;` / `[...]` / `=` / UTF-8).
///
/// # Examples
///
/// ```rust
/// use ini_preserve::from_str;
///
/// let doc = from_str("Key1 = Value1\nKey2 = Value2").unwrap();
/// assert_eq!(doc.sections().len(), 1);
/// assert!(doc.sections()[0].is_global());
/// ```
///
/// # Errors
///
/// Returns an error on the first malformed line, with its 1-based line number
/// and raw text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<IniDocument> {
    from_str_with_options(s, IniOptions::default())
}

/// Parses INI text with a custom syntax.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] before reading any input if the
/// configured control characters collide, otherwise the first parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: IniOptions) -> Result<IniDocument> {
    parser::parse_bytes(s.as_bytes(), options)
}

/// Parses INI bytes with the default syntax.
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<IniDocument> {
    from_slice_with_options(bytes, IniOptions::default())
}

/// Parses INI bytes with a custom syntax, decoding under its encoding.
///
/// # Examples
///
/// ```rust
/// use ini_preserve::{from_slice_with_options, Encoding, IniOptions};
///
/// let options = IniOptions::new().with_encoding(Encoding::Ascii);
/// assert!(from_slice_with_options(b"Key = Value", options).is_ok());
/// assert!(from_slice_with_options("Key = V\u{00e4}lue".as_bytes(), options).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options(bytes: &[u8], options: IniOptions) -> Result<IniDocument> {
    parser::parse_bytes(bytes, options)
}

/// Parses INI data from an I/O stream with the default syntax.
///
/// The stream is read to the end in one pass; it is the caller's resource and
/// is closed by the caller on all paths.
///
/// # Errors
///
/// Returns an error if reading fails, the bytes cannot be decoded, or the text
/// is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<IniDocument> {
    from_reader_with_options(reader, IniOptions::default())
}

/// Parses INI data from an I/O stream with a custom syntax.
///
/// # Errors
///
/// Returns an error if reading fails, the bytes cannot be decoded, or the text
/// is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(
    mut reader: R,
    options: IniOptions,
) -> Result<IniDocument> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    parser::parse_bytes(&bytes, options)
}

/// Formats a document back to text using its own syntax.
///
/// Formatting cannot fail; a document produced by the parser and left
/// unmutated reproduces its source exactly.
///
/// # Examples
///
/// ```rust
/// use ini_preserve::{from_str, to_string};
///
/// let source = "[Section]  ;note\nKey = Value\n";
/// let doc = from_str(source).unwrap();
/// assert_eq!(to_string(&doc), source);
/// ```
#[must_use]
pub fn to_string(document: &IniDocument) -> String {
    writer::format_document(document)
}

/// Formats a document and encodes it under its configured encoding.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the text is not representable (ASCII target
/// holding non-ASCII characters).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(document: &IniDocument) -> Result<Vec<u8>> {
    writer::encode_document(document)
}

/// Formats a document and writes the encoded bytes to an I/O stream.
///
/// # Errors
///
/// Returns an error if encoding is not possible or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, document: &IniDocument) -> Result<()> {
    let bytes = to_vec(document)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))
}
