//! Construct handlers: one per alignable syntactic pattern.
//!
//!     Every handler has the same shape. Locate the run of eligible
//!     constructs (the properties of one object literal, or a chain of
//!     consecutive sibling statements), mark the run as visited so the
//!     orchestrator never reprocesses it, extract one target token per
//!     construct, and hand the targets to the engine. Token lookups are
//!     partial: a construct whose line has no qualifying token simply
//!     drops out of the group instead of contributing a placeholder.
//!
//!     The logical-OR handler is the odd one out: a chain may carry
//!     several `||` tokens on one line and neighbouring chains may differ
//!     in length, so per-statement token lists are regrouped by occurrence
//!     index and each occurrence group is aligned on its own.

use crate::align::aligner::{AlignError, VisitedSet};
use crate::align::column::line_of;
use crate::align::engine;
use crate::align::grouping::consecutive_siblings;
use crate::align::syntax::{LogicalOperator, NodeId, NodeKind, SyntaxTree};
use crate::align::tokens::{TokenId, TokenStream};

/// First token at or after `start`, on the same line, satisfying the
/// predicate. `None` when the line ends first.
pub fn find_next_in_line<F>(stream: &TokenStream, start: TokenId, predicate: F) -> Option<TokenId>
where
    F: Fn(&TokenStream, TokenId) -> bool,
{
    let mut current = Some(start);
    while let Some(id) = current {
        if stream.kind(id).is_line_break() {
            return None;
        }
        if predicate(stream, id) {
            return Some(id);
        }
        current = stream.next(id);
    }
    None
}

/// All tokens at or after `start`, on the same line, satisfying the
/// predicate, in stream order.
pub fn find_all_in_line<F>(stream: &TokenStream, start: TokenId, predicate: F) -> Vec<TokenId>
where
    F: Fn(&TokenStream, TokenId) -> bool,
{
    let mut tokens = Vec::new();
    let mut current = Some(start);
    while let Some(id) = current {
        if stream.kind(id).is_line_break() {
            break;
        }
        if predicate(stream, id) {
            tokens.push(id);
        }
        current = stream.next(id);
    }
    tokens
}

pub fn is_variable_declaration(tree: &SyntaxTree, node: NodeId) -> bool {
    matches!(tree.node(node).kind, NodeKind::VariableDeclaration { .. })
}

pub fn is_assignment_statement(tree: &SyntaxTree, node: NodeId) -> bool {
    expression_statement_expression(tree, node).is_some_and(|expression| {
        matches!(
            tree.node(expression).kind,
            NodeKind::AssignmentExpression { .. }
        )
    })
}

pub fn is_ternary_statement(tree: &SyntaxTree, node: NodeId) -> bool {
    expression_statement_expression(tree, node).is_some_and(|expression| {
        matches!(
            tree.node(expression).kind,
            NodeKind::ConditionalExpression { .. }
        )
    })
}

pub fn is_logical_or_statement(tree: &SyntaxTree, node: NodeId) -> bool {
    expression_statement_expression(tree, node).is_some_and(|expression| {
        matches!(
            tree.node(expression).kind,
            NodeKind::LogicalExpression {
                operator: LogicalOperator::Or,
                ..
            }
        )
    })
}

fn expression_statement_expression(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    match tree.node(node).kind {
        NodeKind::ExpressionStatement { expression } => Some(expression),
        _ => None,
    }
}

fn malformed(tree: &SyntaxTree, stream: &TokenStream, node: NodeId) -> AlignError {
    AlignError::MalformedNode {
        node: tree.node(node).kind.name(),
        line: line_of(stream, tree.node(node).start_token),
    }
}

/// Align the values of all properties of one object literal. Properties
/// on the same line fall into one-element groups, so a single-line
/// literal is left untouched.
pub fn align_object_expression(
    tree: &SyntaxTree,
    stream: &mut TokenStream,
    node: NodeId,
) -> Result<(), AlignError> {
    let NodeKind::ObjectExpression { properties } = &tree.node(node).kind else {
        return Err(malformed(tree, stream, node));
    };

    let mut targets = Vec::new();
    for &property in properties {
        let NodeKind::Property { value, .. } = tree.node(property).kind else {
            return Err(malformed(tree, stream, property));
        };
        targets.push(tree.node(value).start_token);
    }
    engine::align(stream, &targets);
    Ok(())
}

/// Align the `=` of every declarator across a run of consecutive sibling
/// variable declarations. A declarator without an initializer on its
/// line contributes no target.
pub fn align_variable_declarations(
    tree: &SyntaxTree,
    stream: &mut TokenStream,
    node: NodeId,
    visited: &mut VisitedSet,
) -> Result<(), AlignError> {
    let run = consecutive_siblings(tree, node, is_variable_declaration);
    visited.extend(run.iter().copied());

    let mut targets = Vec::new();
    for &declaration in &run {
        let NodeKind::VariableDeclaration { declarators } = &tree.node(declaration).kind else {
            return Err(malformed(tree, stream, declaration));
        };
        for &declarator in declarators {
            let start = tree.node(declarator).start_token;
            if let Some(equals) =
                find_next_in_line(stream, start, |s, id| s.is_punctuator(id, "="))
            {
                targets.push(equals);
            }
        }
    }
    engine::align(stream, &targets);
    Ok(())
}

/// Align the `=` across a run of consecutive sibling expression
/// statements whose expression is a top-level assignment.
pub fn align_assignment_expressions(
    tree: &SyntaxTree,
    stream: &mut TokenStream,
    node: NodeId,
    visited: &mut VisitedSet,
) -> Result<(), AlignError> {
    let run = consecutive_siblings(tree, node, is_assignment_statement);
    visited.extend(run.iter().copied());

    let mut targets = Vec::new();
    for &statement in &run {
        let expression = expression_statement_expression(tree, statement)
            .ok_or_else(|| malformed(tree, stream, statement))?;
        let NodeKind::AssignmentExpression { left, .. } = tree.node(expression).kind else {
            return Err(malformed(tree, stream, expression));
        };
        let start = tree.node(left).start_token;
        if let Some(equals) = find_next_in_line(stream, start, |s, id| s.is_punctuator(id, "=")) {
            targets.push(equals);
        }
    }
    engine::align(stream, &targets);
    Ok(())
}

/// Align the `?` across a run of consecutive sibling ternary statements.
pub fn align_ternary_conditions(
    tree: &SyntaxTree,
    stream: &mut TokenStream,
    node: NodeId,
    visited: &mut VisitedSet,
) -> Result<(), AlignError> {
    let run = consecutive_siblings(tree, node, is_ternary_statement);
    visited.extend(run.iter().copied());

    let mut targets = Vec::new();
    for &statement in &run {
        let expression = expression_statement_expression(tree, statement)
            .ok_or_else(|| malformed(tree, stream, statement))?;
        let NodeKind::ConditionalExpression { test, .. } = tree.node(expression).kind else {
            return Err(malformed(tree, stream, expression));
        };
        let start = tree.node(test).start_token;
        if let Some(question) = find_next_in_line(stream, start, |s, id| s.is_punctuator(id, "?"))
        {
            targets.push(question);
        }
    }
    engine::align(stream, &targets);
    Ok(())
}

/// Align the `:` across the same run, as a separate pass after the `?`.
pub fn align_ternary_results(
    tree: &SyntaxTree,
    stream: &mut TokenStream,
    node: NodeId,
    visited: &mut VisitedSet,
) -> Result<(), AlignError> {
    let run = consecutive_siblings(tree, node, is_ternary_statement);
    visited.extend(run.iter().copied());

    let mut targets = Vec::new();
    for &statement in &run {
        let expression = expression_statement_expression(tree, statement)
            .ok_or_else(|| malformed(tree, stream, statement))?;
        let NodeKind::ConditionalExpression { consequent, .. } = tree.node(expression).kind
        else {
            return Err(malformed(tree, stream, expression));
        };
        let start = tree.node(consequent).start_token;
        if let Some(colon) = find_next_in_line(stream, start, |s, id| s.is_punctuator(id, ":")) {
            targets.push(colon);
        }
    }
    engine::align(stream, &targets);
    Ok(())
}

/// Align every `||` across a run of consecutive sibling statements whose
/// top-level expression is a logical-OR chain, grouped by occurrence
/// index so chains of different lengths align pairwise.
pub fn align_logical_or_expressions(
    tree: &SyntaxTree,
    stream: &mut TokenStream,
    node: NodeId,
    visited: &mut VisitedSet,
) -> Result<(), AlignError> {
    let run = consecutive_siblings(tree, node, is_logical_or_statement);
    visited.extend(run.iter().copied());

    let mut token_lines = Vec::new();
    for &statement in &run {
        let expression = expression_statement_expression(tree, statement)
            .ok_or_else(|| malformed(tree, stream, statement))?;
        let NodeKind::LogicalExpression { left, .. } = tree.node(expression).kind else {
            return Err(malformed(tree, stream, expression));
        };
        let start = tree.node(left).start_token;
        token_lines.push(find_all_in_line(stream, start, |s, id| {
            s.is_punctuator(id, "||")
        }));
    }
    for group in engine::group_by_occurrence(&token_lines) {
        engine::align(stream, &group);
    }
    Ok(())
}
