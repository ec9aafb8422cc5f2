//! VDF Format Reference
//!
//! This module documents the VDF (Valve Data Format, also known as KeyValues)
//! text format as understood and produced by this library.
//!
//! # Overview
//!
//! VDF is a nested key-value text format used by Source engine games and the
//! Steam client for configuration files, app manifests, localization tables,
//! and depot metadata. A document is a sequence of string pairs and brace
//! delimited nodes; nodes nest to arbitrary depth and keys may repeat.
//!
//! ```text
//! "AppState"
//! {
//!     "appid"        "440"
//!     "Universe"     "1"
//!     "name"         "Team Fortress 2"
//!     "StateFlags"   "4"
//!     "UserConfig"
//!     {
//!         "language" "english"
//!     }
//! }
//! ```
//!
//! # Core Syntax
//!
//! ## Pairs
//!
//! A pair is two consecutive tokens: the first becomes the key, the second the
//! value. Tokens are either quoted or bare:
//!
//! ```text
//! "key" "value"
//! key value
//! key "value with spaces"
//! ```
//!
//! **Rules**:
//! - Bare tokens end at the next unquoted space, tab, brace, or line end
//! - Quoted tokens may contain whitespace and comment markers literally
//! - The empty string is only expressible quoted: `"key" ""`
//! - Quoted and bare tokens mix freely within a document
//!
//! ## Nodes
//!
//! A `{` after a key opens a node under that key; the matching `}` closes it.
//! The brace may sit on the key's line or the next one, since line breaks
//! carry no meaning after preprocessing:
//!
//! ```text
//! "settings" {
//!     "volume" "0.5"
//! }
//! ```
//!
//! An unmatched `}` or an unclosed `{` makes the document unbalanced and
//! parsing fails. Braces inside quotes or behind a backslash are ordinary
//! characters.
//!
//! ## Escape Sequences
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `\"` | literal quote, does not open or close a token |
//! | `\\` | literal backslash |
//! | `\n` | newline inside a token |
//! | `\{`, `\}` | literal brace, does not open or close a node |
//! | `\x` (other) | the character itself, backslash dropped |
//!
//! There is no escape for carriage return or tab; a tab inside quotes is kept
//! as a literal tab.
//!
//! # Comments
//!
//! `//` and `/*` both start a comment that runs to the end of the line. VDF
//! has no multi-line comment form; `/*` is not closed by `*/`, the line end
//! closes it. Comment markers inside quotes are literal text:
//!
//! ```text
//! // whole line comment
//! "key" "value"  // trailing comment
//! "url" "https://example.com/feed"  // slashes inside quotes are kept
//! ```
//!
//! # Conditional Markers
//!
//! An unquoted, unescaped `[` cuts the rest of the line. This drops the
//! platform conditionals some Valve files carry, such as `[$WIN32]` or
//! `[!$OSX]`. The conditions are not evaluated; the pair before the marker is
//! always kept:
//!
//! ```text
//! "driver" "d3d9" [$WIN32]
//! ```
//!
//! parses as `"driver" "d3d9"` on every platform.
//!
//! # Whitespace
//!
//! Spaces, tabs, and vertical tabs separate tokens. Outside quotes, runs of
//! them collapse to a single space and leading or trailing runs disappear;
//! inside quotes every character is kept verbatim. Line breaks never reach
//! the parser, so a pair may not span lines unless the break is escaped as
//! `\n` inside a quoted token.
//!
//! # Repeated Keys
//!
//! A key may appear any number of times. Each occurrence appends a value to
//! that key's slot sequence in document order:
//!
//! ```text
//! "bind" "w forward"
//! "bind" "s back"
//! ```
//!
//! yields one key `bind` holding two values. Repeated node keys are common in
//! real files (several `"Game"` blocks in a `gameinfo.txt` search path, one
//! block per depot in a manifest) and can be merged after parsing; see
//! [`VdfNode::reduce`](crate::VdfNode::reduce) and
//! [`MultimapPolicy`](crate::MultimapPolicy).
//!
//! # Processing Model
//!
//! Parsing runs in two stages:
//!
//! 1. **Preprocessing** flattens the document to a single line: comments and
//!    conditional tails drop, unquoted whitespace collapses, lines join with
//!    single spaces. Each line is handled on its own, so a quote left open on
//!    one line does not leak into the next.
//! 2. **Parsing** walks the flattened text character by character, building
//!    tokens and pushing or popping nodes at braces.
//!
//! The preprocessor tracks quotes with a one-character lookbehind: a quote
//! preceded by a backslash never toggles, even when that backslash is itself
//! escaped as in `\\"`. The parser applies full escape semantics afterwards,
//! so token content is unaffected; only comment or `[` stripping inside such
//! a token can misfire.
//!
//! # Edge Cases
//!
//! - `"key" ""` keeps an empty leaf value under `key`
//! - `""` is a valid (empty) key
//! - Adjacent quoted tokens need no separator: `"key""value"` is a pair
//! - A `{` with no key token of its own attaches under the most recently
//!   seen key, even if that key already committed a value
//! - A trailing lone token with no value is dropped at end of input
//! - An unterminated quoted token at end of input is dropped, but any nodes
//!   still open fail the parse
//!
//! # Canonical Output
//!
//! The writer emits a normalized form rather than preserving input bytes:
//!
//! - every key and leaf value is quoted and escaped
//! - keys are sorted; values under one key keep insertion order
//! - four spaces of indentation per level (configurable)
//! - `{` follows the key on the same line (configurable)
//!
//! Writing a parsed document and parsing it again yields an equal tree.
//! Comments, conditionals, bare tokens, and original key order do not
//! survive the trip; carriage returns in values have no escape form and are
//! lost as well.
//!
//! # Limitations
//!
//! - `#include` and `#base` directives are not followed
//! - Conditional markers are dropped, not evaluated
//! - Values are strings; numeric interpretation happens at access time via
//!   the typed getters on [`VdfNode`](crate::VdfNode)
//!
//! # References
//!
//! The format is described on the Valve Developer Community wiki:
//! <https://developer.valvesoftware.com/wiki/KeyValues>

// This module contains only documentation; no implementation code
