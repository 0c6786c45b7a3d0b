//! Alignment engine: the single whitespace rewrite primitive.
//!
//!     Every construct handler reduces its work to "here are the target
//!     tokens, align them". The engine partitions the targets into
//!     consecutive-line sub-runs, computes each sub-run's common column as
//!     the maximum of the members' minimal columns, and pads the whitespace
//!     token in front of each member up to that column. Existing trailing
//!     padding is stripped first, so the rewrite normalizes rather than
//!     accumulates.

use crate::align::column::minimal_column;
use crate::align::grouping::consecutive_lines;
use crate::align::tokens::{TokenId, TokenKind, TokenStream};

/// Align `tokens` to a common column, one consecutive-line sub-run at a
/// time.
pub fn align(stream: &mut TokenStream, tokens: &[TokenId]) {
    for group in consecutive_lines(stream, tokens) {
        align_run(stream, &group);
    }
}

/// Regroup per-statement token lists by occurrence index: all first
/// occurrences together, all second occurrences together, and so on.
/// Ragged — a statement with fewer occurrences contributes no entry at
/// the indices it lacks.
pub fn group_by_occurrence(token_lines: &[Vec<TokenId>]) -> Vec<Vec<TokenId>> {
    let max_length = token_lines.iter().map(Vec::len).max().unwrap_or(0);
    (0..max_length)
        .map(|index| {
            token_lines
                .iter()
                .filter_map(|tokens| tokens.get(index).copied())
                .collect()
        })
        .collect()
}

/// Rewrite one consecutive-line sub-run to its common column. A
/// one-element sub-run is left untouched: its target is its own minimal
/// column.
fn align_run(stream: &mut TokenStream, group: &[TokenId]) {
    if group.len() < 2 {
        return;
    }
    let Some(target_column) = group
        .iter()
        .map(|&token| minimal_column(stream, token))
        .max()
    else {
        return;
    };

    for &token in group {
        let Some(prev) = stream.prev(token) else {
            continue;
        };
        // A token with no whitespace in front of it cannot be padded
        // without inserting a token, which the engine never does.
        if stream.kind(prev) != TokenKind::WhiteSpace {
            continue;
        }
        // Final width: the canonical single separator plus the column
        // deficit of this token within the sub-run.
        let want = target_column - minimal_column(stream, token) + 1;
        let mut value = stream.value(prev).trim_end_matches(' ').to_string();
        let have = value.chars().count();
        for _ in have..want {
            value.push(' ');
        }
        stream.set_white_space(prev, value);
    }
}
