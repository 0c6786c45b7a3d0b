//! Column model: line numbers and minimal columns from the raw stream.
//!
//!     Source positions are not stored on tokens; both coordinates are
//!     reconstructed by walking the stream. The minimal column deliberately
//!     ignores the current width of the whitespace directly in front of a
//!     token, counting it as a single canonical space. The computed column
//!     is therefore independent of padding left behind by an earlier
//!     alignment pass, which is what makes repeated alignment converge
//!     instead of drift.

use crate::align::tokens::{TokenId, TokenKind, TokenStream};

/// Line number of `token`: the count of line breaks strictly before it.
/// Line 0 is the first line.
pub fn line_of(stream: &TokenStream, token: TokenId) -> usize {
    let mut line = 0;
    let mut current = token;
    while let Some(prev) = stream.prev(current) {
        if stream.kind(prev).is_line_break() {
            line += 1;
        }
        current = prev;
    }
    line
}

/// Column `token` would occupy under canonical single-space separation.
///
/// Walks back to the nearest token that starts the line, then sums token
/// text widths forward up to (excluding) `token`. The token immediately
/// preceding `token` contributes exactly 1 when it is whitespace, whatever
/// its current length.
pub fn minimal_column(stream: &TokenStream, token: TokenId) -> usize {
    let Some(prev) = stream.prev(token) else {
        return 0;
    };

    // Nearest token that starts the line: start of stream, or the first
    // token after the previous line break.
    let mut first = prev;
    while let Some(p) = stream.prev(first) {
        if stream.kind(p).is_line_break() {
            break;
        }
        first = p;
    }

    let mut column = 0;
    let mut current = first;
    while current != token {
        if current == prev && stream.kind(current) == TokenKind::WhiteSpace {
            column += 1;
        } else {
            column += stream.value(current).chars().count();
        }
        current = match stream.next(current) {
            Some(next) => next,
            None => break,
        };
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::testing::tokenize;

    fn token_at(stream: &TokenStream, value: &str, occurrence: usize) -> TokenId {
        stream
            .ids()
            .filter(|&id| stream.value(id) == value)
            .nth(occurrence)
            .unwrap()
    }

    #[test]
    fn test_line_of_counts_line_breaks() {
        let stream = tokenize("var a = 1;\nvar b = 2;\n\nvar c = 3;\n").unwrap();
        assert_eq!(line_of(&stream, token_at(&stream, "a", 0)), 0);
        assert_eq!(line_of(&stream, token_at(&stream, "b", 0)), 1);
        assert_eq!(line_of(&stream, token_at(&stream, "c", 0)), 3);
    }

    #[test]
    fn test_minimal_column_sums_line_prefix() {
        let stream = tokenize("var abc = 1;\n").unwrap();
        // "var abc " -> 3 + 1 + 3 + 1
        assert_eq!(minimal_column(&stream, token_at(&stream, "=", 0)), 8);
    }

    #[test]
    fn test_minimal_column_ignores_existing_padding() {
        let padded = tokenize("var abc    = 1;\n").unwrap();
        let canonical = tokenize("var abc = 1;\n").unwrap();
        assert_eq!(
            minimal_column(&padded, token_at(&padded, "=", 0)),
            minimal_column(&canonical, token_at(&canonical, "=", 0)),
        );
    }

    #[test]
    fn test_minimal_column_counts_padding_earlier_in_line() {
        // Only the whitespace directly before the token collapses to one
        // space; padding further left is real width.
        let stream = tokenize("var   abc = 1;\n").unwrap();
        assert_eq!(minimal_column(&stream, token_at(&stream, "=", 0)), 10);
    }

    #[test]
    fn test_minimal_column_on_later_line() {
        let stream = tokenize("var a = 1;\nfoo.bar = 2;\n").unwrap();
        // "foo.bar " -> 7 + 1
        assert_eq!(minimal_column(&stream, token_at(&stream, "=", 1)), 8);
    }

    #[test]
    fn test_minimal_column_of_first_token() {
        let stream = tokenize("var a = 1;\n").unwrap();
        let first = stream.ids().next().unwrap();
        assert_eq!(minimal_column(&stream, first), 0);
    }
}
