use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, ParseError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Prefix operators
    parser.nud(TokenKind::Plus, parse_unary_plus_expr);
    parser.nud(TokenKind::Minus, parse_negation_expr);
    parser.nud(TokenKind::LeftParen, parse_grouping_expr);

    // Literals and symbols
    parser.nud(TokenKind::UnsignedInt, parse_atom_expr);
    parser.nud(TokenKind::Identifier, parse_atom_expr);
    parser.nud(TokenKind::True, parse_atom_expr);
    parser.nud(TokenKind::False, parse_atom_expr);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
