//! Error types for VDF parsing and value conversion.
//!
//! Parsing is fail-fast: the first structural problem aborts the parse and
//! surfaces here. Absent keys are never errors; the typed readers on
//! [`VdfNode`](crate::VdfNode) return defaults for missing data and reserve
//! [`Error::Conversion`] for values that are present but unparsable.
//!
//! ## Error Categories
//!
//! - **Structural errors**: unbalanced braces discovered while parsing
//! - **Conversion errors**: a leaf value that cannot parse as the requested type
//! - **Duplicate keys**: repeated keys rejected by a strict multimap policy
//! - **I/O errors**: reader/writer failures from the streaming entry points
//!
//! ## Examples
//!
//! ```rust
//! use vdf::Error;
//!
//! let result = vdf::parse("root { key value");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("parse failed: {}", err);
//!     assert!(err.is_structural());
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced while parsing VDF text or reading
/// typed values out of a parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A closing brace appeared with no open node to close
    #[error("unbalanced document: '}}' has no matching '{{'")]
    UnmatchedClose,

    /// Input ended while one or more nodes were still open
    #[error("unbalanced document: {open} node(s) still open at end of input")]
    UnmatchedOpen {
        /// How many nodes were left unclosed.
        open: usize,
    },

    /// A value exists under the key but does not parse as the requested type
    #[error("value {value:?} under key {key:?} is not a valid {target}: {reason}")]
    Conversion {
        key: String,
        value: String,
        target: &'static str,
        reason: String,
    },

    /// A repeated key was rejected by the active multimap policy
    #[error("duplicate key {key:?} rejected by multimap policy")]
    DuplicateKey { key: String },
}

impl Error {
    /// Creates a conversion error for a value that failed to parse as `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::Error;
    ///
    /// let err = Error::conversion("port", "eighty", "i32", "invalid digit found in string");
    /// assert!(err.to_string().contains("not a valid i32"));
    /// ```
    pub fn conversion(key: &str, value: &str, target: &'static str, reason: impl ToString) -> Self {
        Error::Conversion {
            key: key.to_string(),
            value: value.to_string(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for reader or writer failures.
    pub fn io(msg: impl ToString) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors caused by unbalanced braces in the input.
    ///
    /// Structural errors mean the document as a whole is malformed, as
    /// opposed to a single value failing conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::Error;
    ///
    /// assert!(Error::UnmatchedClose.is_structural());
    /// assert!(!Error::conversion("k", "v", "i32", "bad digit").is_structural());
    /// ```
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::UnmatchedClose | Error::UnmatchedOpen { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
