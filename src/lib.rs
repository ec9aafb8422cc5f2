//! # vdf
//!
//! A parser and writer for the VDF (Valve Data Format) nested key-value text format.
//!
//! ## What is VDF?
//!
//! VDF, also called KeyValues, is the configuration format used by Source engine
//! games and the Steam client: app manifests, `gameinfo.txt`, localization files,
//! and controller bindings are all VDF documents. The format is a tree of string
//! pairs and brace delimited nodes in which keys may repeat.
//!
//! ## Key Features
//!
//! - **Multimap Nodes**: Repeated keys keep every value in document order, the way
//!   real Valve files use them
//! - **Full Preprocessing**: Comments, conditional `[...]` markers, and stray
//!   whitespace are stripped before parsing
//! - **Typed Access**: Read leaves as `&str`, integers, floats, or hex pointers
//!   with optional defaults
//! - **Canonical Writer**: Deterministic, re-parseable output with configurable
//!   indentation and brace placement
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vdf = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! let root = vdf::parse(r#"
//! "AppState"
//! {
//!     "appid"  "440"
//!     "name"   "Team Fortress 2"  // comment
//! }
//! "#).unwrap();
//!
//! let app = root.get_node("AppState").unwrap();
//! assert_eq!(app.get_str("name"), Some("Team Fortress 2"));
//! assert_eq!(app.get_i32("appid").unwrap(), 440);
//! ```
//!
//! ### Repeated Keys
//!
//! A key bound more than once keeps all of its values. `values` counts them,
//! the `_at` accessors index into them, and [`VdfNode::reduce`] merges sibling
//! nodes that share a key:
//!
//! ```rust
//! let mut root = vdf::parse(r#"
//! "bind" "w forward"
//! "bind" "s back"
//! "libraries" { "path" "/a" }
//! "libraries" { "path" "/b" }
//! "#).unwrap();
//!
//! assert_eq!(root.values("bind"), 2);
//! assert_eq!(root.get_str_at("bind", 1), Some("s back"));
//!
//! root.reduce();
//! assert_eq!(root.values("libraries"), 1);
//! assert_eq!(root.get_node("libraries").unwrap().values("path"), 2);
//! ```
//!
//! ### Building and Writing Documents
//!
//! ```rust
//! use vdf::vdf;
//!
//! let node = vdf! {
//!     "settings" => {
//!         "volume" => "0.5",
//!     },
//! };
//!
//! assert_eq!(
//!     vdf::to_string(&node),
//!     "\"settings\" {\n    \"volume\" \"0.5\"\n}\n",
//! );
//! ```
//!
//! Writing is canonical rather than byte-preserving: keys come out sorted and
//! quoted, comments and conditionals do not survive. Parsing the output yields
//! a tree equal to the one written.
//!
//! ## Feature Flags
//!
//! - `serde`: implements [`serde::Serialize`] for [`Value`] and [`VdfNode`] so
//!   parsed documents can be re-encoded through other formats such as JSON
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass over the preprocessed text, no backtracking
//! - **Writing**: O(n) over the tree with a single output buffer
//! - **Lookups**: O(log k) by key within a node
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Malformed input fails with an [`Error`], never a panic
//! - Structural errors (unbalanced braces) are detected exactly
//!
//! ## Format Reference
//!
//! The [`format`] module documents the accepted syntax in full. The format
//! itself is described on the Valve Developer Community wiki:
//! <https://developer.valvesoftware.com/wiki/KeyValues>

pub mod error;
pub mod format;
pub mod macros;
pub mod node;
pub mod options;
pub mod parser;
pub mod preprocess;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use node::VdfNode;
pub use options::{MultimapPolicy, WriteOptions};
pub use parser::Parser;
pub use value::Value;
pub use writer::Writer;

use std::io;

/// Parse a VDF document into a [`VdfNode`] tree.
///
/// Comments, conditional markers, and insignificant whitespace are stripped
/// first; the remaining tokens build the tree. Repeated keys append.
///
/// # Examples
///
/// ```rust
/// let root = vdf::parse("\"key\" \"value\"").unwrap();
/// assert_eq!(root.get_str("key"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error if braces are unbalanced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<VdfNode> {
    Parser::new().parse(text)
}

/// Parse a VDF document supplied as individual lines.
///
/// Equivalent to [`parse`] on the joined text; useful when the input is
/// already split, such as lines read from a file.
///
/// # Examples
///
/// ```rust
/// let lines = ["\"root\"", "{", "    \"key\" \"value\"", "}"];
/// let root = vdf::parse_lines(lines).unwrap();
/// assert!(root.get_node("root").is_some());
/// ```
///
/// # Errors
///
/// Returns an error if braces are unbalanced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<VdfNode> {
    Parser::new().parse_lines(lines)
}

/// Parse a VDF document from an I/O stream.
///
/// The reader is drained fully before parsing starts.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"\"key\" \"value\"");
/// let root = vdf::from_reader(cursor).unwrap();
/// assert_eq!(root.get_str("key"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8, or the
/// document is unbalanced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<VdfNode>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    parse(&text)
}

/// Write a node tree as VDF text with default options.
///
/// Keys are sorted and quoted; nesting is indented with four spaces.
///
/// # Examples
///
/// ```rust
/// use vdf::vdf;
///
/// let node = vdf! { "key" => "value" };
/// assert_eq!(vdf::to_string(&node), "\"key\" \"value\"\n");
/// ```
#[must_use]
pub fn to_string(node: &VdfNode) -> String {
    Writer::new().write(node)
}

/// Write a node tree as VDF text with opening braces on their own lines.
///
/// # Examples
///
/// ```rust
/// use vdf::vdf;
///
/// let node = vdf! { "sub" => { "key" => "value" } };
/// assert_eq!(
///     vdf::to_string_pretty(&node),
///     "\"sub\"\n{\n    \"key\" \"value\"\n}\n",
/// );
/// ```
#[must_use]
pub fn to_string_pretty(node: &VdfNode) -> String {
    Writer::with_options(WriteOptions::pretty()).write(node)
}

/// Write a node tree as VDF text with custom options.
///
/// # Examples
///
/// ```rust
/// use vdf::{vdf, WriteOptions};
///
/// let node = vdf! { "sub" => { "key" => "value" } };
/// let options = WriteOptions::new().with_indent(2);
/// assert_eq!(
///     vdf::to_string_with_options(&node, options),
///     "\"sub\" {\n  \"key\" \"value\"\n}\n",
/// );
/// ```
#[must_use]
pub fn to_string_with_options(node: &VdfNode, options: WriteOptions) -> String {
    Writer::with_options(options).write(node)
}

/// Write a node tree as VDF text to a writer.
///
/// # Examples
///
/// ```rust
/// use vdf::vdf;
///
/// let node = vdf! { "key" => "value" };
/// let mut buffer = Vec::new();
/// vdf::to_writer(&mut buffer, &node).unwrap();
/// assert_eq!(buffer, b"\"key\" \"value\"\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, node: &VdfNode) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, node, WriteOptions::default())
}

/// Write a node tree as VDF text to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, node: &VdfNode, options: WriteOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(node, options);
    writer.write_all(text.as_bytes()).map_err(Error::io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = r#"
"root"
{
    "name"   "sample"   // inline comment
    "flags"  "4"
    "nested"
    {
        "key" "value"
        "key" "other"
    }
}
"#;

    #[test]
    fn test_parse_and_access() {
        let root = parse(SAMPLE).unwrap();
        let node = root.get_node("root").unwrap();
        assert_eq!(node.get_str("name"), Some("sample"));
        assert_eq!(node.get_i32("flags").unwrap(), 4);
        assert_eq!(node.get_node("nested").unwrap().values("key"), 2);
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let root = parse(SAMPLE).unwrap();
        let text = to_string(&root);
        let back = parse(&text).unwrap();
        assert_eq!(root, back);
    }

    #[test]
    fn test_pretty_round_trip() {
        let root = parse(SAMPLE).unwrap();
        let text = to_string_pretty(&root);
        let back = parse(&text).unwrap();
        assert_eq!(root, back);
    }

    #[test]
    fn test_reader_and_writer() {
        let root = from_reader(Cursor::new(SAMPLE.as_bytes())).unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &root).unwrap();
        let back = parse(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(root, back);
    }

    #[test]
    fn test_parse_lines_matches_parse() {
        let joined = parse(SAMPLE).unwrap();
        let split = parse_lines(SAMPLE.split('\n')).unwrap();
        assert_eq!(joined, split);
    }

    #[test]
    fn test_unbalanced_fails() {
        assert!(parse("\"root\" {").is_err());
        assert!(parse("}").is_err());
        assert!(parse("\"root\" { \"k\" \"v\" }").is_ok());
    }
}
