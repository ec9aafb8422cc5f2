//! VDF serialization.
//!
//! This module provides the [`Writer`] that turns a [`VdfNode`] tree back
//! into VDF text.
//!
//! ## Overview
//!
//! - **Always re-parseable**: keys and leaf values are quoted and escaped,
//!   so round-tripping a tree through text preserves its content
//! - **Key-ordered**: nodes emit their keys in ascending order (the tree
//!   does not remember source order across keys), each key's values in
//!   sequence order
//! - **Layout via [`WriteOptions`]**: indent width and brace placement
//!
//! Original formatting is not preserved: comments and conditionals are gone
//! by parse time, and key order is normalized. The guarantee is content
//! equivalence, not text equality.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use vdf::vdf;
//!
//! let node = vdf! {
//!     "root" => { "key" => "value" },
//! };
//! assert_eq!(vdf::to_string(&node), "\"root\" {\n    \"key\" \"value\"\n}\n");
//! ```

use crate::node::VdfNode;
use crate::options::WriteOptions;
use crate::value::Value;

/// The VDF writer.
///
/// Carries only its [`WriteOptions`]; one instance can write any number of
/// trees. Writing is pure string building and cannot fail.
///
/// # Examples
///
/// ```rust
/// use vdf::{vdf, WriteOptions, Writer};
///
/// let node = vdf! { "key" => "value" };
///
/// let writer = Writer::new();
/// assert_eq!(writer.write(&node), "\"key\" \"value\"\n");
///
/// let writer = Writer::with_options(WriteOptions::new().with_indent(2));
/// assert_eq!(writer.write(&node), "\"key\" \"value\"\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Writer {
    options: WriteOptions,
}

impl Writer {
    /// Creates a writer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given options.
    #[must_use]
    pub fn with_options(options: WriteOptions) -> Self {
        Writer { options }
    }

    /// Serializes a tree to VDF text.
    ///
    /// Every key emits one slot per value: quoted key, one space, then
    /// either the quoted leaf or the braced child body. An empty child
    /// writes as `{}` on the key's line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vdf::{vdf, Writer};
    ///
    /// let node = vdf! {
    ///     "key" => "a",
    ///     "key" => "b",
    /// };
    /// assert_eq!(Writer::new().write(&node), "\"key\" \"a\"\n\"key\" \"b\"\n");
    /// ```
    #[must_use]
    pub fn write(&self, root: &VdfNode) -> String {
        let mut out = String::new();
        self.write_node(root, 0, &mut out);
        out
    }

    fn write_node(&self, node: &VdfNode, depth: usize, out: &mut String) {
        for (key, slots) in node.iter() {
            for (i, value) in slots.iter().enumerate() {
                self.push_indent(out, depth);
                push_quoted(out, key);
                out.push(' ');
                match value {
                    Value::String(leaf) => {
                        push_quoted(out, leaf);
                        if i + 1 < slots.len() {
                            out.push('\n');
                        }
                    }
                    Value::Node(child) => {
                        if self.options.brace_on_own_line {
                            out.push('\n');
                            self.push_indent(out, depth);
                        }
                        out.push('{');
                        if !child.is_empty() {
                            out.push('\n');
                            self.write_node(child, depth + 1, out);
                            self.push_indent(out, depth);
                        }
                        out.push('}');
                    }
                }
            }
            out.push('\n');
        }
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.options.indent {
            out.push(' ');
        }
    }
}

/// Quotes a token, escaping the characters that would otherwise change the
/// parse: `\`, `"`, and line breaks. Carriage returns have no escape in this
/// format and do not survive a round trip.
fn push_quoted(out: &mut String, raw: &str) {
    out.push('"');
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
