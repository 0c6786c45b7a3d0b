//! Logos lexer for the JavaScript subset the fixtures use.
//!
//!     Whitespace and line breaks are tokens, not trivia: the alignment
//!     engine reconstructs columns from them and rewrites them. A run of
//!     spaces or tabs lexes as one whitespace token, matching how the
//!     host tokenizer delivers inter-token padding.

use logos::Logos;

use crate::align::tokens::{TokenKind, TokenStream};

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawToken {
    #[token("\n")]
    LineBreak,

    #[regex(r"[ \t]+")]
    WhiteSpace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    StringLiteral,

    #[token("===")]
    #[token("==")]
    #[token("=")]
    #[token("||")]
    #[token("&&")]
    #[token("?")]
    #[token(":")]
    #[token(";")]
    #[token(",")]
    #[token(".")]
    #[token("{")]
    #[token("}")]
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    Punctuator,
}

const KEYWORDS: &[&str] = &[
    "var", "let", "const", "function", "return", "if", "else", "for", "while", "new", "typeof",
];

/// A character the lexer has no token for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub offset: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unexpected character at offset {}", self.offset)
    }
}

impl std::error::Error for LexError {}

/// Tokenize fixture source into a [`TokenStream`]. Every input byte lands
/// in exactly one token, so `to_source` reproduces the input.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut stream = TokenStream::new();

    while let Some(result) = lexer.next() {
        let raw = result.map_err(|_| LexError {
            offset: lexer.span().start,
        })?;
        let slice = lexer.slice();
        let kind = match raw {
            RawToken::LineBreak => TokenKind::LineBreak,
            RawToken::WhiteSpace => TokenKind::WhiteSpace,
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::Word => {
                if KEYWORDS.contains(&slice) {
                    TokenKind::Keyword
                } else if matches!(slice, "true" | "false" | "null") {
                    TokenKind::Literal
                } else {
                    TokenKind::Identifier
                }
            }
            RawToken::Number | RawToken::StringLiteral => TokenKind::Literal,
            RawToken::Punctuator => TokenKind::Punctuator,
        };
        stream.push(kind, slice);
    }
    Ok(stream)
}
