//! Token stream arena shared by the alignment engine and its fixtures.
//!
//!     The engine operates on an ordered sequence of lexical tokens produced
//!     by an external tokenizer. The sequence owns every token; syntax nodes
//!     reference tokens by handle and never own them. Tokens are never
//!     inserted into or removed from the sequence once it is built, so a
//!     token's neighbours are simply the adjacent arena slots. The only
//!     mutation the engine ever performs is replacing the text of a
//!     whitespace token.

use std::fmt;

/// Handle into a [`TokenStream`].
///
/// Because the stream is append-only and tokens are never removed, handle
/// arithmetic gives O(1) access to a token's neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Lexical classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Punctuator,
    Literal,
    WhiteSpace,
    LineBreak,
    LineComment,
}

impl TokenKind {
    pub fn is_white_space(self) -> bool {
        matches!(self, TokenKind::WhiteSpace)
    }

    pub fn is_line_break(self) -> bool {
        matches!(self, TokenKind::LineBreak)
    }
}

/// A single lexical unit: its classification and its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

/// The one linear, append-only sequence of tokens for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        TokenStream { tokens: Vec::new() }
    }

    pub fn push(&mut self, kind: TokenKind, value: impl Into<String>) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(Token {
            kind,
            value: value.into(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub fn kind(&self, id: TokenId) -> TokenKind {
        self.tokens[id.index()].kind
    }

    pub fn value(&self, id: TokenId) -> &str {
        &self.tokens[id.index()].value
    }

    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        id.0.checked_sub(1).map(TokenId)
    }

    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        let next = id.0 + 1;
        if (next as usize) < self.tokens.len() {
            Some(TokenId(next))
        } else {
            None
        }
    }

    /// Iterate over every token handle in stream order.
    pub fn ids(&self) -> impl Iterator<Item = TokenId> {
        (0..self.tokens.len() as u32).map(TokenId)
    }

    /// Replace the text of a whitespace token. This is the only mutation
    /// the alignment engine performs on a stream.
    pub fn set_white_space(&mut self, id: TokenId, value: String) {
        debug_assert!(self.kind(id).is_white_space());
        self.tokens[id.index()].value = value;
    }

    /// Is `id` a punctuator with exactly the given text?
    pub fn is_punctuator(&self, id: TokenId, text: &str) -> bool {
        self.kind(id) == TokenKind::Punctuator && self.value(id) == text
    }

    /// Serialize the stream back to source text. The caller-facing inverse
    /// of tokenization: concatenating every token value reproduces the
    /// document, including whitespace rewritten by the engine.
    pub fn to_source(&self) -> String {
        let mut result = String::new();
        for token in &self.tokens {
            result.push_str(&token.value);
        }
        result
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenStream {
        let mut stream = TokenStream::new();
        stream.push(TokenKind::Keyword, "var");
        stream.push(TokenKind::WhiteSpace, " ");
        stream.push(TokenKind::Identifier, "a");
        stream.push(TokenKind::WhiteSpace, " ");
        stream.push(TokenKind::Punctuator, "=");
        stream.push(TokenKind::WhiteSpace, " ");
        stream.push(TokenKind::Literal, "1");
        stream.push(TokenKind::Punctuator, ";");
        stream
    }

    #[test]
    fn test_push_preserves_order() {
        let stream = sample();
        let values: Vec<&str> = stream.ids().map(|id| stream.value(id)).collect();
        assert_eq!(values, vec!["var", " ", "a", " ", "=", " ", "1", ";"]);
    }

    #[test]
    fn test_neighbour_access() {
        let stream = sample();
        let first = stream.ids().next().unwrap();
        assert_eq!(stream.prev(first), None);
        let second = stream.next(first).unwrap();
        assert_eq!(stream.prev(second), Some(first));
        let last = stream.ids().last().unwrap();
        assert_eq!(stream.next(last), None);
    }

    #[test]
    fn test_to_source_round_trip() {
        let stream = sample();
        assert_eq!(stream.to_source(), "var a = 1;");
    }

    #[test]
    fn test_set_white_space() {
        let mut stream = sample();
        let ws = stream.ids().find(|&id| stream.kind(id).is_white_space()).unwrap();
        stream.set_white_space(ws, "   ".to_string());
        assert_eq!(stream.to_source(), "var   a = 1;");
    }

    #[test]
    fn test_is_punctuator_checks_text() {
        let stream = sample();
        let eq = stream.ids().find(|&id| stream.value(id) == "=").unwrap();
        assert!(stream.is_punctuator(eq, "="));
        assert!(!stream.is_punctuator(eq, ";"));
        let var = stream.ids().next().unwrap();
        assert!(!stream.is_punctuator(var, "var"));
    }
}
