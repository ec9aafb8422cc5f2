//! Configuration options for VDF parsing and writing.
//!
//! This module provides the two configuration surfaces of the crate:
//!
//! - [`WriteOptions`]: output layout for the writer
//! - [`MultimapPolicy`]: what a node does when a key is inserted twice
//!
//! ## Examples
//!
//! ```rust
//! use vdf::{vdf, WriteOptions};
//!
//! let node = vdf! {
//!     "settings" => { "volume" => "0.5" },
//! };
//!
//! // Default layout keeps the opening brace on the key's line
//! let text = vdf::to_string(&node);
//! assert!(text.starts_with("\"settings\" {"));
//!
//! // Valve's own files put the brace on its own line
//! let options = WriteOptions::new().with_brace_on_own_line(true);
//! let text = vdf::to_string_with_options(&node, options);
//! assert!(text.starts_with("\"settings\"\n{"));
//! ```

/// Behavior of [`VdfNode::put_with_policy`](crate::VdfNode::put_with_policy)
/// when the key already holds a value.
///
/// VDF documents repeat keys freely, so the default keeps every value and the
/// multimap grows. The stricter policies exist for callers that want
/// single-valued documents, and the reducing policies for callers that want
/// repeated sub-node groups pre-merged.
///
/// # Examples
///
/// ```rust
/// use vdf::{MultimapPolicy, Parser};
///
/// let text = "\"sub\" { \"a\" \"1\" } \"sub\" { \"b\" \"2\" }";
///
/// let root = Parser::new().parse(text).unwrap();
/// assert_eq!(root.values("sub"), 2);
///
/// let root = Parser::with_policy(MultimapPolicy::AutoReduceEnd)
///     .parse(text)
///     .unwrap();
/// assert_eq!(root.values("sub"), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MultimapPolicy {
    /// Append to the key's sequence (standard VDF multimap behavior).
    #[default]
    Append,
    /// Keep the existing value and silently drop the new one.
    Reject,
    /// Refuse the insert with [`Error::DuplicateKey`](crate::Error::DuplicateKey).
    Fail,
    /// Append, then immediately collapse that key's sub-node group.
    AutoReduce,
    /// Append freely; the whole tree is reduced once parsing finishes.
    AutoReduceEnd,
}

/// Configuration options for VDF output.
///
/// Controls indentation width and brace placement. The written text is
/// always re-parseable regardless of the layout chosen.
///
/// # Examples
///
/// ```rust
/// use vdf::WriteOptions;
///
/// // Default layout
/// let options = WriteOptions::new();
///
/// // Brace on its own line
/// let options = WriteOptions::pretty();
///
/// // Custom configuration
/// let options = WriteOptions::new()
///     .with_indent(2)
///     .with_brace_on_own_line(true);
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    pub indent: usize,
    pub brace_on_own_line: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 4,
            brace_on_own_line: false,
        }
    }
}

impl WriteOptions {
    /// Creates default options (4-space indent, brace on the key's line).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::WriteOptions;
    ///
    /// let options = WriteOptions::new();
    /// assert_eq!(options.indent, 4);
    /// assert!(!options.brace_on_own_line);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options matching the layout of Valve's own files: every
    /// opening brace on its own line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::WriteOptions;
    ///
    /// let options = WriteOptions::pretty();
    /// assert!(options.brace_on_own_line);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions {
            brace_on_own_line: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per nesting level).
    ///
    /// Default is 4.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::WriteOptions;
    ///
    /// let options = WriteOptions::new().with_indent(2);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether an opening brace goes on its own line below the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::WriteOptions;
    ///
    /// let options = WriteOptions::new().with_brace_on_own_line(true);
    /// assert!(options.brace_on_own_line);
    /// ```
    #[must_use]
    pub fn with_brace_on_own_line(mut self, brace_on_own_line: bool) -> Self {
        self.brace_on_own_line = brace_on_own_line;
        self
    }
}
