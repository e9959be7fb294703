//! Type annotation parsing.
//!
//! Built-in types are keywords; any identifier in type position is kept as
//! an unresolved `TypeIdentifier` for the type checker to resolve.

use crate::{ast::types::Type, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::parser::Parser;

const TYPE_START: [TokenKind; 5] = [
    TokenKind::Void,
    TokenKind::Bool,
    TokenKind::I8,
    TokenKind::U8,
    TokenKind::Identifier,
];

/// `type := VOID | BOOL | I8 | U8 | IDENTIFIER`
pub fn parse_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let token = parser.expect_one_of(&TYPE_START)?;

    Ok(match token.kind {
        TokenKind::Void => Type::Void,
        TokenKind::Bool => Type::Bool,
        TokenKind::I8 => Type::I8,
        TokenKind::U8 => Type::U8,
        _ => Type::TypeIdentifier(token.value),
    })
}
