//! Fixture front end for exercising the alignment engine.
//!
//!     Production hosts hand the engine a token stream and AST built by a
//!     real JavaScript parser. Tests build the same structures from source
//!     text with the small front end in this module: a logos lexer and a
//!     recursive-descent parser covering exactly the statement and
//!     expression shapes the alignment constructs need. Round-tripping is
//!     exact — concatenating token values reproduces the input — so tests
//!     can compare aligned output against expected source strings.

pub mod lexer;
pub mod parser;

use std::fmt;

use crate::align::aligner::{AlignError, Aligner};
use crate::align::config::AlignOptions;

pub use lexer::{tokenize, LexError};
pub use parser::{parse_source, ParseError, ParsedSource};

/// Errors from the source-to-source convenience entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    Parse(ParseError),
    Align(AlignError),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Parse(e) => write!(f, "Parse error: {}", e),
            HarnessError::Align(e) => write!(f, "Align error: {}", e),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<ParseError> for HarnessError {
    fn from(err: ParseError) -> Self {
        HarnessError::Parse(err)
    }
}

impl From<AlignError> for HarnessError {
    fn from(err: AlignError) -> Self {
        HarnessError::Align(err)
    }
}

/// Parse `source`, run one alignment pass with `options` merged over the
/// defaults, and serialize the stream back to text.
pub fn align_source(source: &str, options: &AlignOptions) -> Result<String, HarnessError> {
    let parsed = parse_source(source)?;
    let mut stream = parsed.stream;
    let aligner = Aligner::with_options(options);
    aligner.transform(&parsed.tree, &mut stream)?;
    Ok(stream.to_source())
}
