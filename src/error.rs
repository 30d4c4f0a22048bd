//! Error types for INI parsing and formatting.
//!
//! ## Error Categories
//!
//! - **Configuration errors**: two of the configured control characters coincide,
//!   detected before any input is read
//! - **Malformed lines**: unterminated section wrappers, lines that fit no
//!   classification, reported with the 1-based line number and the raw line text
//! - **Encoding errors**: bytes that cannot be decoded (or characters that cannot
//!   be encoded) under the configured encoding
//! - **I/O errors**: stream reading/writing failures
//!
//! Parsing is all-or-nothing: the first error aborts the whole parse, there is no
//! recovery or partial result.
//!
//! ## Examples
//!
//! ```rust
//! use ini_preserve::{from_str, Error};
//!
//! let result = from_str("[unterminated");
//! assert!(matches!(result, Err(Error::MalformedLine { line: 1, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or writing INI data.
///
/// Parse errors carry the 1-based line number of the offending line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Two of the configured control characters coincide, or one is whitespace
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A line that matches none of the recognized line forms
    #[error("malformed line {line}: {msg}: {text:?}")]
    MalformedLine {
        line: usize,
        msg: String,
        text: String,
    },

    /// Bytes undecodable (or characters unencodable) under the configured encoding
    #[error("encoding error at line {line}: {msg}")]
    Encoding { line: usize, msg: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an invalid-configuration error.
    pub fn invalid_configuration<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidConfiguration(msg.to_string())
    }

    /// Creates a malformed-line error with the 1-based line number and raw text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_preserve::Error;
    ///
    /// let err = Error::malformed_line(3, "unterminated section header", "[Section");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed_line(line: usize, msg: &str, text: &str) -> Self {
        Error::MalformedLine {
            line,
            msg: msg.to_string(),
            text: text.to_string(),
        }
    }

    /// Creates an encoding error at the given 1-based line number.
    pub fn encoding(line: usize, msg: &str) -> Self {
        Error::Encoding {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
