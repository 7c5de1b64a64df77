//! Parser implementation for building the expression tree.
//!
//! This module contains the Parser struct, which tracks the position in the
//! token stream, and the `parse` entry point.

use crate::{
    ast::ast::ExpressionNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::expr::parse_expr;

/// Deepest recursion the grammar functions may reach.
pub const MAX_NESTING: usize = 256;
/// Upper bound on the depth of a built tree, counting operator chains.
pub const MAX_TREE_DEPTH: usize = 2048;

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream and the index of the current token. A parser is
/// built per call to [`parse`], so independent calls never share state.
///
/// Nesting and tree depth are capped so that neither parsing nor the
/// recursive walks over the finished tree can exhaust the stack.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current recursion depth of the grammar functions
    nesting: usize,
    /// Depth of the tree along the current path, including chain links
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance positioned at the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            nesting: 0,
            depth: 0,
        }
    }

    /// Enters one level of grammar recursion. Pair with [`Parser::leave`].
    pub fn enter(&mut self) -> Result<(), Error> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            return Err(self.too_deep(MAX_NESTING));
        }
        self.deepen()
    }

    pub fn leave(&mut self) {
        self.nesting -= 1;
        self.depth -= 1;
    }

    /// Records one more link of a left-associative operator chain.
    pub fn deepen(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_TREE_DEPTH {
            return Err(self.too_deep(MAX_TREE_DEPTH));
        }
        Ok(())
    }

    /// Undoes `levels` calls to [`Parser::deepen`].
    pub fn flatten(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn too_deep(&self, limit: usize) -> Error {
        Error::new(ErrorImpl::NestingTooDeep { limit }, self.get_position())
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns true if the current token has the given kind and text.
    pub fn current_is(&self, kind: TokenKind, text: &str) -> bool {
        self.current_token()
            .is_some_and(|token| token.kind == kind && token.text == text)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches, otherwise
    /// returns an error naming the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token_kind() {
            Some(kind) if kind == expected_kind => self
                .advance()
                .ok_or_else(|| self.unexpected(format!("`{}`", expected_kind))),
            _ => Err(self.unexpected(format!("`{}`", expected_kind))),
        }
    }

    /// Builds the error for finding something other than `expected` here.
    pub fn unexpected(&self, expected: String) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.text.clone(),
                    expected,
                },
                token.position,
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput { expected },
                self.get_position(),
            ),
        }
    }

    /// Returns the source position of the current token, or just past the
    /// last token once the stream is exhausted.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.position,
            None => self
                .tokens
                .last()
                .map(Token::end_position)
                .unwrap_or(Position(0)),
        }
    }
}

/// Parses a stream of tokens into an expression tree.
///
/// Every token must be consumed: anything left after a complete expression
/// is reported as trailing input.
pub fn parse(tokens: Vec<Token>) -> Result<ExpressionNode, Error> {
    let mut parser = Parser::new(tokens);
    let root = parse_expr(&mut parser)?;

    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::TrailingInput {
                token: token.text.clone(),
            },
            token.position,
        ));
    }

    Ok(root)
}
