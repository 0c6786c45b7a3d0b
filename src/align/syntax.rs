//! Syntax tree arena: the AST view over the token stream.
//!
//!     Nodes live in a single arena and reference each other (and their
//!     first/last token) by handle, avoiding cyclic ownership between the
//!     tree and the stream. The tree is read-only for the alignment engine;
//!     only the fixture parser in [testing](crate::align::testing) builds
//!     and patches it.
//!
//!     `next` is the statement-level sibling link the group finder follows
//!     to collect runs of alignable statements. Only statements carry it;
//!     nested expressions leave it `None`.

use crate::align::tokens::TokenId;

/// Handle into a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Operator of a logical expression. Only `||` chains are alignment
/// targets, but the fixture parser also produces `&&` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    Or,
    And,
}

/// Structural classification of a node, with per-construct child links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program {
        body: Vec<NodeId>,
    },
    VariableDeclaration {
        declarators: Vec<NodeId>,
    },
    VariableDeclarator {
        init: Option<NodeId>,
    },
    ExpressionStatement {
        expression: NodeId,
    },
    AssignmentExpression {
        left: NodeId,
        right: NodeId,
    },
    ConditionalExpression {
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
    },
    LogicalExpression {
        operator: LogicalOperator,
        left: NodeId,
        right: NodeId,
    },
    BinaryExpression {
        left: NodeId,
        right: NodeId,
    },
    ObjectExpression {
        properties: Vec<NodeId>,
    },
    Property {
        key: NodeId,
        value: NodeId,
    },
    Identifier,
    Literal,
}

impl NodeKind {
    /// Human-readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "Program",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::VariableDeclarator { .. } => "VariableDeclarator",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::AssignmentExpression { .. } => "AssignmentExpression",
            NodeKind::ConditionalExpression { .. } => "ConditionalExpression",
            NodeKind::LogicalExpression { .. } => "LogicalExpression",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::ObjectExpression { .. } => "ObjectExpression",
            NodeKind::Property { .. } => "Property",
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
        }
    }
}

/// A structural unit of the parsed program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    /// Next sibling at statement level, if any.
    pub next: Option<NodeId>,
    pub start_token: TokenId,
    pub end_token: TokenId,
}

/// Arena of syntax nodes for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        SyntaxTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn push(&mut self, node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[id.index()].parent = Some(parent);
    }

    pub fn set_next(&mut self, id: NodeId, next: NodeId) {
        self.nodes[id.index()].next = Some(next);
    }

    pub fn set_end_token(&mut self, id: NodeId, end: TokenId) {
        self.nodes[id.index()].end_token = end;
    }

    /// Children of a node, in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match &self.node(id).kind {
            NodeKind::Program { body } => body.clone(),
            NodeKind::VariableDeclaration { declarators } => declarators.clone(),
            NodeKind::VariableDeclarator { init } => init.iter().copied().collect(),
            NodeKind::ExpressionStatement { expression } => vec![*expression],
            NodeKind::AssignmentExpression { left, right }
            | NodeKind::LogicalExpression { left, right, .. }
            | NodeKind::BinaryExpression { left, right } => vec![*left, *right],
            NodeKind::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => vec![*test, *consequent, *alternate],
            NodeKind::ObjectExpression { properties } => properties.clone(),
            NodeKind::Property { key, value } => vec![*key, *value],
            NodeKind::Identifier | NodeKind::Literal => Vec::new(),
        }
    }

    /// Pre-order traversal of the whole tree, starting at the root.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }
}

/// Pre-order node iterator returned by [`SyntaxTree::walk`].
pub struct Walk<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let mut children = self.tree.children(id);
        children.reverse();
        self.stack.extend(children);
        Some(id)
    }
}
