//! Main module for the alignment engine

pub mod aligner;
pub mod column;
pub mod config;
pub mod engine;
pub mod grouping;
pub mod handlers;
pub mod syntax;
pub mod testing;
pub mod tokens;
