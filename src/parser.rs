//! VDF parsing.
//!
//! This module provides the [`Parser`] that turns VDF text into a
//! [`VdfNode`] tree.
//!
//! ## Overview
//!
//! Parsing is two-stage: raw text goes through [`preprocess`](crate::preprocess)
//! once, and the resulting canonical string drives a character-at-a-time
//! state machine:
//!
//! - **Single-pass parsing**: O(n) over the input, no backtracking
//! - **Multimap commits**: repeated keys accumulate per the configured
//!   [`MultimapPolicy`]
//! - **Fail-fast**: the first unbalanced brace aborts with a structural
//!   error and no partial tree
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! let root = vdf::parse("\"root\" { \"key\" \"value\" }").unwrap();
//! assert_eq!(root.get_node("root").unwrap().get_str("key"), Some("value"));
//! ```
//!
//! A `Parser` instance only carries configuration:
//!
//! ```rust
//! use vdf::{MultimapPolicy, Parser};
//!
//! let parser = Parser::with_policy(MultimapPolicy::AutoReduceEnd);
//! let root = parser
//!     .parse("\"sub\" { \"a\" \"1\" } \"sub\" { \"b\" \"2\" }")
//!     .unwrap();
//! assert_eq!(root.values("sub"), 1);
//! ```

use crate::error::{Error, Result};
use crate::node::VdfNode;
use crate::options::MultimapPolicy;
use crate::preprocess;
use crate::value::Value;

/// The VDF parser.
///
/// Stateless apart from its [`MultimapPolicy`]; one instance can parse any
/// number of documents. Every parse runs the preprocessor first, so input
/// may freely contain comments, conditionals, and decorative whitespace.
///
/// # Examples
///
/// ```rust
/// use vdf::Parser;
///
/// let parser = Parser::new();
/// let root = parser.parse("\"key\" \"value\"").unwrap();
/// assert_eq!(root.get_str("key"), Some("value"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    policy: MultimapPolicy,
}

impl Parser {
    /// Creates a parser with the default [`MultimapPolicy::Append`] policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that applies `policy` to every repeated key.
    ///
    /// [`MultimapPolicy::AutoReduceEnd`] reduces the whole tree once after a
    /// successful parse; the other policies act at each insert.
    #[must_use]
    pub fn with_policy(policy: MultimapPolicy) -> Self {
        Parser { policy }
    }

    /// Parses a VDF document.
    ///
    /// # Errors
    ///
    /// Returns a structural error for unbalanced braces, or
    /// [`Error::DuplicateKey`] under [`MultimapPolicy::Fail`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::Parser;
    ///
    /// let root = Parser::new()
    ///     .parse("// settings\n\"volume\" \"0.5\"")
    ///     .unwrap();
    /// assert_eq!(root.get_f32("volume").unwrap(), 0.5);
    /// ```
    pub fn parse(&self, text: &str) -> Result<VdfNode> {
        self.parse_processed(&preprocess::process(text))
    }

    /// Parses a VDF document from pre-split lines.
    pub fn parse_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Result<VdfNode> {
        self.parse_processed(&preprocess::process_lines(lines))
    }

    fn parse_processed(&self, processed: &str) -> Result<VdfNode> {
        let mut state = ParserState::new(self.policy);
        for c in processed.chars() {
            state.step(c)?;
        }
        state.finish()
    }
}

/// One open sub-node: the node being filled and the key it will be stored
/// under in its parent once its `}` arrives.
struct Frame {
    key: String,
    node: VdfNode,
}

/// The internal state of one parse call.
///
/// The root node sits below a stack of open frames. Values commit into the
/// innermost open node; a frame's node commits into *its* parent only at the
/// matching `}`, which keeps each node exclusively owned while open.
struct ParserState {
    root: VdfNode,
    stack: Vec<Frame>,
    /// The token being accumulated. Cleared on every commit.
    buffer: String,
    /// The key half of the pair under construction. Never cleared, only
    /// overwritten; a `{` with no preceding key reuses the previous one.
    key_name: String,
    /// Inside a quoted token.
    quoted: bool,
    /// The previous character was an unconsumed `\`.
    escaped: bool,
    /// A key has been stored and the next committed token is its value.
    value_pending: bool,
    /// The just-closed quoted token was empty but must still commit.
    null_token: bool,
    policy: MultimapPolicy,
}

impl ParserState {
    fn new(policy: MultimapPolicy) -> Self {
        ParserState {
            root: VdfNode::new(),
            stack: Vec::new(),
            buffer: String::new(),
            key_name: String::new(),
            quoted: false,
            escaped: false,
            value_pending: false,
            null_token: false,
            policy,
        }
    }

    /// Feeds one character of preprocessed input.
    fn step(&mut self, c: char) -> Result<()> {
        match c {
            '"' => self.quote(),
            ' ' | '\t' => self.whitespace(c),
            '\\' => {
                self.escape();
                Ok(())
            }
            '{' => {
                self.begin_node();
                Ok(())
            }
            '}' => self.end_node(),
            other => {
                self.character(other);
                Ok(())
            }
        }
    }

    /// Flushes a trailing pair and checks that every `{` was matched.
    fn finish(mut self) -> Result<VdfNode> {
        self.whitespace(' ')?;
        if !self.stack.is_empty() {
            return Err(Error::UnmatchedOpen {
                open: self.stack.len(),
            });
        }
        if self.policy == MultimapPolicy::AutoReduceEnd {
            self.root.reduce();
        }
        Ok(self.root)
    }

    fn quote(&mut self) -> Result<()> {
        if self.escaped {
            self.character('"');
            return Ok(());
        }
        self.quoted = !self.quoted;
        if self.quoted {
            // A quoted token replaces anything buffered before it.
            self.reset_token();
            Ok(())
        } else {
            if self.buffer.is_empty() {
                self.null_token = true;
            }
            // A closing quote commits the token like whitespace would.
            self.whitespace(' ')
        }
    }

    fn whitespace(&mut self, c: char) -> Result<()> {
        if self.quoted {
            self.character(c);
            return Ok(());
        }
        // A separator with nothing buffered means nothing, unless the empty
        // token came from a closed pair of quotes.
        if self.buffer.is_empty() && !self.null_token {
            return Ok(());
        }
        self.value_pending = !self.value_pending;
        if self.value_pending {
            self.key_name = std::mem::take(&mut self.buffer);
        } else {
            let value = std::mem::take(&mut self.buffer);
            self.commit_value(Value::String(value))?;
        }
        self.reset_token();
        Ok(())
    }

    fn escape(&mut self) {
        // `\\` must emit one literal backslash, so pairing is tracked by
        // toggling rather than setting.
        self.escaped = !self.escaped;
        if !self.escaped {
            self.character('\\');
        }
    }

    fn character(&mut self, c: char) {
        let c = if self.escaped && c == 'n' { '\n' } else { c };
        self.buffer.push(c);
        self.escaped = false;
    }

    fn begin_node(&mut self) {
        if self.escaped || self.quoted {
            self.character('{');
            return;
        }
        // The child is keyed by whatever key is pending right now; anything
        // still in the buffer was never separated and is discarded.
        self.stack.push(Frame {
            key: self.key_name.clone(),
            node: VdfNode::new(),
        });
        self.reset_pair();
    }

    fn end_node(&mut self) -> Result<()> {
        if self.escaped || self.quoted {
            self.character('}');
            return Ok(());
        }
        self.reset_pair();
        match self.stack.pop() {
            Some(frame) => {
                let policy = self.policy;
                self.current_mut()
                    .put_with_policy(frame.key, Value::Node(frame.node), policy)
            }
            None => Err(Error::UnmatchedClose),
        }
    }

    /// The innermost open node, or the root when no sub-node is open.
    fn current_mut(&mut self) -> &mut VdfNode {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.node,
            None => &mut self.root,
        }
    }

    fn commit_value(&mut self, value: Value) -> Result<()> {
        let key = self.key_name.clone();
        let policy = self.policy;
        self.current_mut().put_with_policy(key, value, policy)
    }

    fn reset_token(&mut self) {
        self.buffer.clear();
        self.null_token = false;
    }

    fn reset_pair(&mut self) {
        self.reset_token();
        self.value_pending = false;
    }
}
