//! # align
//!
//! A whitespace alignment engine for tokenized JavaScript source.
//!
//! Given a parsed program (an AST whose leaves are linked to an ordered
//! token stream), the engine rewrites inter-token whitespace so that
//! semantically parallel constructs line up in the same source column
//! across consecutive lines:
//!
//!     var first  = 1;
//!     var second = 2;
//!
//! The engine only mutates the contents of whitespace tokens. It never
//! inserts or removes tokens, never reorders statements, and never
//! touches non-whitespace token text. Repeated runs converge: aligning
//! an already-aligned stream is a byte-for-byte no-op.
//!
//! ## Testing
//!
//! Fixtures for tests are produced by the [testing module](align::testing),
//! which lexes and parses the small JavaScript subset the alignment
//! constructs need.

pub mod align;

pub use crate::align::aligner::{AlignError, Aligner};
pub use crate::align::config::{AlignConfig, AlignOptions};
pub use crate::align::syntax::{NodeId, NodeKind, SyntaxNode, SyntaxTree};
pub use crate::align::tokens::{Token, TokenId, TokenKind, TokenStream};
