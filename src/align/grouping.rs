//! Group finder: which statements and which target tokens align together.
//!
//!     Two notions of adjacency matter. Statements are adjacent when they
//!     are consecutive siblings matching the same structural predicate.
//!     Target tokens are adjacent when their line numbers are exactly one
//!     apart; any larger jump (a blank line, or a line whose construct
//!     produced no target token) starts a fresh group. The test is on line
//!     numbers of the tokens that are present, not on how many constructs
//!     were skipped in between.

use crate::align::column::line_of;
use crate::align::syntax::{NodeId, SyntaxTree};
use crate::align::tokens::{TokenId, TokenStream};

/// Run of consecutive siblings satisfying `predicate`, starting at `node`.
/// Non-empty when the start node itself matches; includes the start node.
pub fn consecutive_siblings<F>(tree: &SyntaxTree, node: NodeId, predicate: F) -> Vec<NodeId>
where
    F: Fn(&SyntaxTree, NodeId) -> bool,
{
    let mut nodes = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
        if !predicate(tree, id) {
            break;
        }
        nodes.push(id);
        current = tree.node(id).next;
    }
    nodes
}

/// Partition target tokens into maximal sub-runs of physically consecutive
/// lines. Each sub-run is aligned independently.
pub fn consecutive_lines(stream: &TokenStream, tokens: &[TokenId]) -> Vec<Vec<TokenId>> {
    let mut groups = Vec::new();
    let mut group: Vec<TokenId> = Vec::new();
    let mut last: Option<usize> = None;

    for &token in tokens {
        let line = line_of(stream, token);
        match last {
            Some(previous) if line != previous + 1 => {
                groups.push(std::mem::take(&mut group));
                group.push(token);
            }
            _ => group.push(token),
        }
        last = Some(line);
    }
    if !group.is_empty() {
        groups.push(group);
    }
    groups
}
