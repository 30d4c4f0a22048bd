//! Configuration options for INI parsing and formatting.
//!
//! This module provides types to customize the recognized INI syntax:
//!
//! - [`IniOptions`]: Main configuration struct
//! - [`CommentStarter`]: Character opening a comment (`;`, `#`, or custom)
//! - [`SectionWrapper`]: Character pair wrapping section names (`[...]`, `{...}`, or custom)
//! - [`KeyDelimiter`]: Character separating key names from values (`=`, `:`, or custom)
//! - [`Encoding`]: Text encoding of the byte stream
//! - [`LineEnding`]: Line terminator emitted on write
//!
//! ## Examples
//!
//! ```rust
//! use ini_preserve::{from_str_with_options, CommentStarter, IniOptions, KeyDelimiter, SectionWrapper};
//!
//! let options = IniOptions::new()
//!     .with_comment_starter(CommentStarter::Hash)
//!     .with_section_wrapper(SectionWrapper::CurlyBrackets)
//!     .with_key_delimiter(KeyDelimiter::Colon);
//!
//! let doc = from_str_with_options("{Name}#c\nKey:Value", options).unwrap();
//! assert_eq!(doc.sections()[0].name(), "Name");
//! ```

use crate::{Error, Result};
use serde::Serialize;

/// The character that opens a comment.
///
/// # Examples
///
/// ```rust
/// use ini_preserve::CommentStarter;
///
/// assert_eq!(CommentStarter::Semicolon.as_char(), ';');
/// assert_eq!(CommentStarter::Hash.as_char(), '#');
/// assert_eq!(CommentStarter::Custom('!').as_char(), '!');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum CommentStarter {
    #[default]
    Semicolon,
    Hash,
    Custom(char),
}

impl CommentStarter {
    /// Returns the character this starter stands for.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            CommentStarter::Semicolon => ';',
            CommentStarter::Hash => '#',
            CommentStarter::Custom(c) => *c,
        }
    }
}

/// The character pair that wraps section names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum SectionWrapper {
    #[default]
    SquareBrackets,
    CurlyBrackets,
    Custom(char, char),
}

impl SectionWrapper {
    /// Returns the opening wrapper character.
    #[must_use]
    pub const fn open(&self) -> char {
        match self {
            SectionWrapper::SquareBrackets => '[',
            SectionWrapper::CurlyBrackets => '{',
            SectionWrapper::Custom(open, _) => *open,
        }
    }

    /// Returns the closing wrapper character.
    #[must_use]
    pub const fn close(&self) -> char {
        match self {
            SectionWrapper::SquareBrackets => ']',
            SectionWrapper::CurlyBrackets => '}',
            SectionWrapper::Custom(_, close) => *close,
        }
    }
}

/// The character that separates a key name from its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum KeyDelimiter {
    #[default]
    Equals,
    Colon,
    Custom(char),
}

impl KeyDelimiter {
    /// Returns the character this delimiter stands for.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            KeyDelimiter::Equals => '=',
            KeyDelimiter::Colon => ':',
            KeyDelimiter::Custom(c) => *c,
        }
    }
}

/// Text encoding of the underlying byte stream.
///
/// Both variants are ASCII-compatible, so line splitting happens on raw bytes
/// and each line is decoded individually (which keeps encoding errors tied to
/// a line number).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
}

impl Encoding {
    /// Decodes one line of raw bytes. On failure returns a message describing
    /// the offending byte; the caller attaches the line number.
    pub(crate) fn decode<'a>(&self, bytes: &'a [u8]) -> std::result::Result<&'a str, String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).map_err(|e| e.to_string()),
            Encoding::Ascii => {
                if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(format!("non-ASCII byte 0x{:02X} at column {}", bytes[pos], pos + 1));
                }
                // All bytes are ASCII, which is valid UTF-8.
                std::str::from_utf8(bytes).map_err(|e| e.to_string())
            }
        }
    }

    /// Checks that formatted text is representable in this encoding.
    pub(crate) fn check_encodable(&self, text: &str) -> std::result::Result<(), String> {
        match self {
            Encoding::Utf8 => Ok(()),
            Encoding::Ascii => match text.chars().find(|c| !c.is_ascii()) {
                Some(c) => Err(format!("character {:?} is not representable in ASCII", c)),
                None => Ok(()),
            },
        }
    }
}

/// Line terminator emitted by the formatter.
///
/// The parser accepts `\n`, `\r\n`, and lone `\r` regardless of this setting;
/// byte-exact round-trips require the input to use the configured terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this terminator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration of the recognized INI syntax.
///
/// Immutable once handed to a parse or format call. The four control characters
/// (comment starter, section open, section close, key delimiter) must be
/// pairwise distinct and non-whitespace; violations surface as
/// [`Error::InvalidConfiguration`] before any input is touched.
///
/// # Examples
///
/// ```rust
/// use ini_preserve::{CommentStarter, IniOptions, KeyDelimiter, SectionWrapper};
///
/// // Default syntax: `;` comments, `[...]` sections, `=` delimiter, UTF-8
/// let options = IniOptions::new();
///
/// // Custom configuration
/// let options = IniOptions::new()
///     .with_comment_starter(CommentStarter::Hash)
///     .with_section_wrapper(SectionWrapper::CurlyBrackets)
///     .with_key_delimiter(KeyDelimiter::Colon);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct IniOptions {
    pub comment_starter: CommentStarter,
    pub section_wrapper: SectionWrapper,
    pub key_delimiter: KeyDelimiter,
    pub encoding: Encoding,
    pub line_ending: LineEnding,
}

impl IniOptions {
    /// Creates the default options (`;` / `[...]` / `=` / UTF-8 / LF).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment starter.
    #[must_use]
    pub fn with_comment_starter(mut self, starter: CommentStarter) -> Self {
        self.comment_starter = starter;
        self
    }

    /// Sets the section wrapper pair.
    #[must_use]
    pub fn with_section_wrapper(mut self, wrapper: SectionWrapper) -> Self {
        self.section_wrapper = wrapper;
        self
    }

    /// Sets the key/value delimiter.
    #[must_use]
    pub fn with_key_delimiter(mut self, delimiter: KeyDelimiter) -> Self {
        self.key_delimiter = delimiter;
        self
    }

    /// Sets the text encoding of the byte stream.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the line terminator emitted on write.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Shorthand for [`CommentStarter::as_char`].
    #[must_use]
    pub fn comment_char(&self) -> char {
        self.comment_starter.as_char()
    }

    /// Shorthand for [`SectionWrapper::open`].
    #[must_use]
    pub fn section_open(&self) -> char {
        self.section_wrapper.open()
    }

    /// Shorthand for [`SectionWrapper::close`].
    #[must_use]
    pub fn section_close(&self) -> char {
        self.section_wrapper.close()
    }

    /// Shorthand for [`KeyDelimiter::as_char`].
    #[must_use]
    pub fn delimiter_char(&self) -> char {
        self.key_delimiter.as_char()
    }

    /// Validates that the four control characters are pairwise distinct and
    /// non-whitespace.
    ///
    /// Every parse/format entry point calls this before touching input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the colliding characters.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("comment starter", self.comment_char()),
            ("section open wrapper", self.section_open()),
            ("section close wrapper", self.section_close()),
            ("key delimiter", self.delimiter_char()),
        ];

        for (name, c) in named {
            if c.is_whitespace() {
                return Err(Error::invalid_configuration(format!(
                    "{} {:?} must not be whitespace",
                    name, c
                )));
            }
        }
        for i in 0..named.len() {
            for j in (i + 1)..named.len() {
                if named[i].1 == named[j].1 {
                    return Err(Error::invalid_configuration(format!(
                        "{} and {} are both {:?}",
                        named[i].0, named[j].0, named[i].1
                    )));
                }
            }
        }
        Ok(())
    }
}
