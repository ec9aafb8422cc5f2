//! Line-wise normalization of raw VDF text.
//!
//! The preprocessing pass turns human-readable VDF into minified, less
//! readable, but still valid VDF that the parser can consume without ever
//! thinking about comments, conditionals, or insignificant whitespace.
//! Each line is transformed independently and the non-empty results are
//! joined with single spaces, so callers with very large documents can run
//! [`process_line`] across lines in parallel and join in original order.
//!
//! Per line:
//!
//! - a line opening with `//` or `/*` is discarded whole
//! - outside quotes, `//` and `/*` truncate the line (VDF comments always
//!   run to end of line, so `*/` is never looked for)
//! - outside quotes, an unescaped `[` truncates the line (conditional
//!   markers like `[$WIN32]` sit at end of line)
//! - outside quotes, runs of whitespace collapse to one space, and leading
//!   and trailing whitespace disappears
//! - inside quotes, every character passes through verbatim
//!
//! Quote tracking resets at the start of every line, so a string value must
//! not contain a literal line break; use the `\n` escape instead.
//!
//! ## Examples
//!
//! ```rust
//! use vdf::preprocess;
//!
//! let raw = "// game manifest\n\"key\"     \"value\"\n\"other\"\t\"pair\"";
//! assert_eq!(preprocess::process(raw), "\"key\" \"value\" \"other\" \"pair\"");
//! ```

/// Normalizes a whole document into the parser's single-line input form.
///
/// Splits on `\n`, applies [`process_line`] to each line, and joins the
/// non-empty results with single spaces in original line order.
///
/// # Examples
///
/// ```rust
/// use vdf::preprocess;
///
/// let raw = "\"a\" \"1\"\n// comment\n\"b\" \"2\"";
/// assert_eq!(preprocess::process(raw), "\"a\" \"1\" \"b\" \"2\"");
/// ```
#[must_use]
pub fn process(text: &str) -> String {
    process_lines(text.split('\n'))
}

/// Normalizes pre-split lines into the parser's single-line input form.
#[must_use]
pub fn process_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for line in lines {
        let processed = process_line(line);
        if processed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&processed);
    }
    out
}

/// Normalizes one line. An empty result means the line contributes nothing.
///
/// # Examples
///
/// ```rust
/// use vdf::preprocess;
///
/// assert_eq!(preprocess::process_line("   \"key\"\t\t\"value\"  "), "\"key\" \"value\"");
/// assert_eq!(preprocess::process_line("// a whole-line comment"), "");
/// assert_eq!(preprocess::process_line("\"key\" \"value\"// rest"), "\"key\" \"value\"");
/// ```
#[must_use]
pub fn process_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();

    // A line that opens with a comment is discarded whole.
    if chars.len() >= 2 && is_comment_start(chars[0], chars[1]) {
        return String::new();
    }

    let mut out = String::with_capacity(line.len());
    // Whether a word character has been hit yet on this line.
    let mut hit_word = false;
    // Whether the line currently has unclosed quotes.
    let mut open_quotes = false;

    for i in 0..chars.len() {
        let c = chars[i];

        // Lines are already split; stray line terminators are dropped.
        if c == '\n' || c == '\r' {
            continue;
        }

        // Naive previous-character check: `\"` never toggles, even at the
        // end of an escape run like `\\"`. The parser owns real escape
        // semantics; this pass only has to keep comment and conditional
        // stripping out of quoted text.
        if c == '"' && (i == 0 || chars[i - 1] != '\\') {
            open_quotes = !open_quotes;
        }

        if !open_quotes {
            // Comments run to end of line.
            if i + 1 < chars.len() && is_comment_start(c, chars[i + 1]) {
                break;
            }
            // Conditional markers run to end of line too.
            if c == '[' && (i == 0 || chars[i - 1] != '\\') {
                break;
            }
        }

        if !open_quotes && is_vdf_whitespace(c) {
            // Leading whitespace disappears.
            if !hit_word {
                continue;
            }
            // Only the last character of a run emits anything.
            if i + 1 < chars.len() && is_vdf_whitespace(chars[i + 1]) {
                continue;
            }
            // A run reaching end of line is trailing whitespace.
            if chars[i..].iter().all(|&ch| is_vdf_whitespace(ch)) {
                break;
            }
            // Whatever whitespace character this was, a space comes out.
            out.push(' ');
        } else {
            hit_word = true;
            out.push(c);
        }
    }

    out
}

/// VDF comments are C-style, but always run to end of line.
fn is_comment_start(first: char, second: char) -> bool {
    first == '/' && (second == '/' || second == '*')
}

/// Space, tab, and vertical tab. Line terminators are handled separately.
fn is_vdf_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{0B}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(process_line("a     b\t\tc"), "a b c");
    }

    #[test]
    fn test_trims_leading_and_trailing_whitespace() {
        assert_eq!(process_line("   \t key value \t  "), "key value");
    }

    #[test]
    fn test_whole_line_comments_are_discarded() {
        assert_eq!(process_line("// line comment"), "");
        assert_eq!(process_line("/* block-style comment"), "");
    }

    #[test]
    fn test_trailing_comment_truncates() {
        assert_eq!(process_line("\"key\" \"value\" // rest"), "\"key\" \"value\" ");
        assert_eq!(process_line("\"key\" \"value\"// rest"), "\"key\" \"value\"");
    }

    #[test]
    fn test_comment_markers_inside_quotes_survive() {
        assert_eq!(
            process_line("\"url\" \"http://example.com\""),
            "\"url\" \"http://example.com\""
        );
    }

    #[test]
    fn test_conditional_marker_truncates() {
        assert_eq!(process_line("\"key\" \"value\" [$WIN32]"), "\"key\" \"value\" ");
    }

    #[test]
    fn test_conditional_marker_inside_quotes_survives() {
        assert_eq!(process_line("\"key\" \"[not a conditional]\""), "\"key\" \"[not a conditional]\"");
    }

    #[test]
    fn test_escaped_bracket_survives() {
        assert_eq!(process_line("key \\[literal"), "key \\[literal");
    }

    #[test]
    fn test_quoted_whitespace_passes_through() {
        assert_eq!(process_line("\"key\" \"a  \tb \""), "\"key\" \"a  \tb \"");
    }

    #[test]
    fn test_escaped_quote_does_not_close_the_token() {
        assert_eq!(
            process_line("\"key \\\"quoted\\\"\" x"),
            "\"key \\\"quoted\\\"\" x"
        );
    }

    #[test]
    fn test_vertical_tab_is_whitespace() {
        assert_eq!(process_line("a\u{0B}b"), "a b");
    }

    #[test]
    fn test_join_skips_empty_lines() {
        assert_eq!(
            process_lines(["", "a 1", "", "// gone", "b 2", ""]),
            "a 1 b 2"
        );
    }

    #[test]
    fn test_join_has_no_trailing_separator() {
        assert_eq!(process("a 1\n// trailing comment line"), "a 1");
    }
}
