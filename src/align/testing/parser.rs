//! Recursive-descent fixture parser.
//!
//!     Builds the syntax arena over a fixture token stream. The grammar
//!     covers statements the alignment constructs target (variable
//!     declarations, expression statements) and the expressions that can
//!     appear inside them (assignments, ternaries, logical and binary
//!     chains, object literals, identifiers, literals). Member chains like
//!     `foo.bar.baz` collapse into a single identifier leaf spanning their
//!     tokens; the engine only ever reads a leaf's start token.
//!
//!     The parser reads past whitespace, line breaks, and comments; they
//!     stay in the stream and nodes point at significant tokens only.

use std::fmt;

use crate::align::column::line_of;
use crate::align::syntax::{LogicalOperator, NodeId, NodeKind, SyntaxNode, SyntaxTree};
use crate::align::testing::lexer::{tokenize, LexError};
use crate::align::tokens::{TokenId, TokenKind, TokenStream};

/// Errors from fixture parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    UnexpectedToken { found: String, line: usize },
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "Lex error: {}", e),
            ParseError::UnexpectedToken { found, line } => {
                write!(f, "unexpected token `{}` on line {}", found, line)
            }
            ParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// A fixture document: the stream and the tree built over it.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub stream: TokenStream,
    pub tree: SyntaxTree,
}

/// Tokenize and parse fixture source.
pub fn parse_source(source: &str) -> Result<ParsedSource, ParseError> {
    let stream = tokenize(source)?;
    let tree = Parser::new(&stream).parse_program()?;
    Ok(ParsedSource { stream, tree })
}

const BINARY_OPERATORS: &[&str] = &["+", "-", "*", "<", ">", "==", "==="];

struct Parser<'a> {
    stream: &'a TokenStream,
    significant: Vec<TokenId>,
    pos: usize,
    tree: SyntaxTree,
}

impl<'a> Parser<'a> {
    fn new(stream: &'a TokenStream) -> Self {
        let significant = stream
            .ids()
            .filter(|&id| {
                !matches!(
                    stream.kind(id),
                    TokenKind::WhiteSpace | TokenKind::LineBreak | TokenKind::LineComment
                )
            })
            .collect();
        Parser {
            stream,
            significant,
            pos: 0,
            tree: SyntaxTree::new(),
        }
    }

    fn parse_program(mut self) -> Result<SyntaxTree, ParseError> {
        let start = self.stream.ids().next().ok_or(ParseError::UnexpectedEnd)?;
        let end = self.stream.ids().last().ok_or(ParseError::UnexpectedEnd)?;

        let mut body = Vec::new();
        while self.peek().is_some() {
            body.push(self.parse_statement()?);
        }
        for pair in body.windows(2) {
            self.tree.set_next(pair[0], pair[1]);
        }

        let root = self.node(NodeKind::Program { body }, start, end);
        self.tree.set_root(root);
        self.link_parents();
        Ok(self.tree)
    }

    fn link_parents(&mut self) {
        let ids: Vec<NodeId> = self.tree.walk().collect();
        for id in ids {
            for child in self.tree.children(id) {
                self.tree.set_parent(child, id);
            }
        }
    }

    // ----- statements -----

    fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        if self.at_keyword("var") || self.at_keyword("let") || self.at_keyword("const") {
            self.parse_variable_declaration()
        } else {
            self.parse_expression_statement()
        }
    }

    fn parse_variable_declaration(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.advance().ok_or(ParseError::UnexpectedEnd)?;
        let mut declarators = vec![self.parse_declarator()?];
        while self.at_punct(",") {
            self.advance();
            declarators.push(self.parse_declarator()?);
        }
        let mut end = self.end_of(declarators[declarators.len() - 1]);
        if self.at_punct(";") {
            if let Some(semi) = self.advance() {
                end = semi;
            }
        }
        Ok(self.node(NodeKind::VariableDeclaration { declarators }, keyword, end))
    }

    fn parse_declarator(&mut self) -> Result<NodeId, ParseError> {
        let name = self.expect_identifier()?;
        let mut end = name;
        let mut init = None;
        if self.at_punct("=") {
            self.advance();
            let expression = self.parse_assignment()?;
            end = self.end_of(expression);
            init = Some(expression);
        }
        Ok(self.node(NodeKind::VariableDeclarator { init }, name, end))
    }

    fn parse_expression_statement(&mut self) -> Result<NodeId, ParseError> {
        let expression = self.parse_expression()?;
        let start = self.start_of(expression);
        let mut end = self.end_of(expression);
        if self.at_punct(";") {
            if let Some(semi) = self.advance() {
                end = semi;
            }
        }
        Ok(self.node(NodeKind::ExpressionStatement { expression }, start, end))
    }

    // ----- expressions, loosest binding first -----

    fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<NodeId, ParseError> {
        let left = self.parse_conditional()?;
        if self.at_punct("=") {
            self.advance();
            let right = self.parse_assignment()?;
            let start = self.start_of(left);
            let end = self.end_of(right);
            return Ok(self.node(NodeKind::AssignmentExpression { left, right }, start, end));
        }
        Ok(left)
    }

    fn parse_conditional(&mut self) -> Result<NodeId, ParseError> {
        let test = self.parse_logical_or()?;
        if self.at_punct("?") {
            self.advance();
            let consequent = self.parse_assignment()?;
            self.expect_punct(":")?;
            let alternate = self.parse_assignment()?;
            let start = self.start_of(test);
            let end = self.end_of(alternate);
            return Ok(self.node(
                NodeKind::ConditionalExpression {
                    test,
                    consequent,
                    alternate,
                },
                start,
                end,
            ));
        }
        Ok(test)
    }

    fn parse_logical_or(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_logical_and()?;
        while self.at_punct("||") {
            self.advance();
            let right = self.parse_logical_and()?;
            let start = self.start_of(left);
            let end = self.end_of(right);
            left = self.node(
                NodeKind::LogicalExpression {
                    operator: LogicalOperator::Or,
                    left,
                    right,
                },
                start,
                end,
            );
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_binary()?;
        while self.at_punct("&&") {
            self.advance();
            let right = self.parse_binary()?;
            let start = self.start_of(left);
            let end = self.end_of(right);
            left = self.node(
                NodeKind::LogicalExpression {
                    operator: LogicalOperator::And,
                    left,
                    right,
                },
                start,
                end,
            );
        }
        Ok(left)
    }

    fn parse_binary(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_member()?;
        while BINARY_OPERATORS.iter().copied().any(|op| self.at_punct(op)) {
            self.advance();
            let right = self.parse_member()?;
            let start = self.start_of(left);
            let end = self.end_of(right);
            left = self.node(NodeKind::BinaryExpression { left, right }, start, end);
        }
        Ok(left)
    }

    fn parse_member(&mut self) -> Result<NodeId, ParseError> {
        let expression = self.parse_primary()?;
        while self.at_punct(".") {
            self.advance();
            let name = self.expect_identifier()?;
            self.tree.set_end_token(expression, name);
        }
        Ok(expression)
    }

    fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let Some(id) = self.peek() else {
            return Err(ParseError::UnexpectedEnd);
        };
        match self.stream.kind(id) {
            TokenKind::Identifier => {
                self.advance();
                Ok(self.node(NodeKind::Identifier, id, id))
            }
            TokenKind::Literal => {
                self.advance();
                Ok(self.node(NodeKind::Literal, id, id))
            }
            TokenKind::Punctuator if self.stream.value(id) == "{" => self.parse_object(),
            TokenKind::Punctuator if self.stream.value(id) == "(" => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect_punct(")")?;
                Ok(expression)
            }
            _ => Err(self.unexpected(id)),
        }
    }

    fn parse_object(&mut self) -> Result<NodeId, ParseError> {
        let open = self.expect_punct("{")?;
        let mut properties = Vec::new();
        while !self.at_punct("}") {
            properties.push(self.parse_property()?);
            if self.at_punct(",") {
                self.advance();
            } else {
                break;
            }
        }
        let close = self.expect_punct("}")?;
        Ok(self.node(NodeKind::ObjectExpression { properties }, open, close))
    }

    fn parse_property(&mut self) -> Result<NodeId, ParseError> {
        let Some(id) = self.peek() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let key = match self.stream.kind(id) {
            TokenKind::Identifier => {
                self.advance();
                self.node(NodeKind::Identifier, id, id)
            }
            TokenKind::Literal => {
                self.advance();
                self.node(NodeKind::Literal, id, id)
            }
            _ => return Err(self.unexpected(id)),
        };
        self.expect_punct(":")?;
        let value = self.parse_assignment()?;
        let start = self.start_of(key);
        let end = self.end_of(value);
        Ok(self.node(NodeKind::Property { key, value }, start, end))
    }

    // ----- cursor helpers -----

    fn peek(&self) -> Option<TokenId> {
        self.significant.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<TokenId> {
        let id = self.peek()?;
        self.pos += 1;
        Some(id)
    }

    fn at_punct(&self, text: &str) -> bool {
        self.peek()
            .is_some_and(|id| self.stream.is_punctuator(id, text))
    }

    fn at_keyword(&self, word: &str) -> bool {
        self.peek().is_some_and(|id| {
            self.stream.kind(id) == TokenKind::Keyword && self.stream.value(id) == word
        })
    }

    fn expect_punct(&mut self, text: &str) -> Result<TokenId, ParseError> {
        match self.peek() {
            Some(id) if self.stream.is_punctuator(id, text) => {
                self.pos += 1;
                Ok(id)
            }
            Some(id) => Err(self.unexpected(id)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expect_identifier(&mut self) -> Result<TokenId, ParseError> {
        match self.peek() {
            Some(id) if self.stream.kind(id) == TokenKind::Identifier => {
                self.pos += 1;
                Ok(id)
            }
            Some(id) => Err(self.unexpected(id)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn unexpected(&self, id: TokenId) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.stream.value(id).to_string(),
            line: line_of(self.stream, id),
        }
    }

    // ----- node helpers -----

    fn node(&mut self, kind: NodeKind, start: TokenId, end: TokenId) -> NodeId {
        self.tree.push(SyntaxNode {
            kind,
            parent: None,
            next: None,
            start_token: start,
            end_token: end,
        })
    }

    fn start_of(&self, id: NodeId) -> TokenId {
        self.tree.node(id).start_token
    }

    fn end_of(&self, id: NodeId) -> TokenId {
        self.tree.node(id).end_token
    }
}
