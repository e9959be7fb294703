//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! The parser is a one-token-lookahead recursive descent parser; statements
//! and prefix expressions are dispatched through lookup tables keyed by the
//! leading token kind.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions and atoms

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
    SourceContext,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_function,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// statements and expressions. The stream always ends with an EOF token,
/// and the position never moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended when the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let context = tokens
                .last()
                .map(|token| token.context)
                .unwrap_or_else(|| SourceContext::new(1, 1));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                context,
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the position of the current token.
    pub fn current_context(&self) -> SourceContext {
        self.current_token().context
    }

    /// Kind of the token `offset` places ahead, EOF past the end.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// UnexpectedToken error at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        self.expect_one_of(&[expected_kind])
    }

    /// Consumes a token whose kind is any of `expected`.
    pub fn expect_one_of(&mut self, expected: &[TokenKind]) -> Result<Token, ParseError> {
        if expected.contains(&self.current_token_kind()) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for the current token not being any of `expected`.
    pub fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_vec(),
            got: self.current_token_kind(),
            context: self.current_context(),
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables and parses function definitions until EOF.
/// The first grammar violation aborts the parse.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let context = parser.current_context();

    if parser.current_token_kind() == TokenKind::Newline {
        parser.advance();
    }

    let mut functions = vec![];
    while parser.current_token_kind() != TokenKind::EOF {
        functions.push(parse_function(&mut parser)?);
    }

    debug!("parsed {} functions", functions.len());

    Ok(Program { functions, context })
}
