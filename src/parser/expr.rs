use crate::{
    ast::expressions::{
        AdditionExpr, BoolExpr, EqualExpr, Expr, FunctionCallExpr, IdentifierExpr, NegationExpr,
        NotEqualExpr, UnsignedIntExpr,
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Token kinds an atom may start with.
pub const ATOM_START: [TokenKind; 4] = [
    TokenKind::UnsignedInt,
    TokenKind::Identifier,
    TokenKind::True,
    TokenKind::False,
];

/// `comparison := addition ((EQUAL | NOT_EQUAL) addition)*`, left-associative.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut left = parse_addition_expr(parser)?;

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Equal | TokenKind::NotEqual => parser.advance(),
            _ => return Ok(left),
        };
        let right = parse_addition_expr(parser)?;

        left = match operator.kind {
            TokenKind::Equal => Expr::Equal(EqualExpr {
                left: Box::new(left),
                right: Box::new(right),
                context: operator.context,
            }),
            _ => Expr::NotEqual(NotEqualExpr {
                left: Box::new(left),
                right: Box::new(right),
                context: operator.context,
            }),
        };
    }
}

/// `addition := factor (PLUS addition)?`, so `a + b + c` nests to the right.
pub fn parse_addition_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let left = parse_factor_expr(parser)?;

    if parser.current_token_kind() != TokenKind::Plus {
        return Ok(left);
    }

    let operator = parser.advance();
    let right = parse_addition_expr(parser)?;

    Ok(Expr::Addition(AdditionExpr {
        left: Box::new(left),
        right: Box::new(right),
        context: operator.context,
    }))
}

pub fn parse_factor_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token_kind = parser.current_token_kind();
    let Some(handler) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected(&ATOM_START));
    };

    handler(parser)
}

pub fn parse_unary_plus_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.expect(TokenKind::Plus)?;
    parse_factor_expr(parser)
}

pub fn parse_negation_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let operator = parser.expect(TokenKind::Minus)?;
    let expression = parse_factor_expr(parser)?;

    Ok(Expr::Negation(NegationExpr {
        expression: Box::new(expression),
        context: operator.context,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.expect(TokenKind::LeftParen)?;
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::RightParen)?;

    Ok(expression)
}

pub fn parse_atom_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    match parser.current_token_kind() {
        TokenKind::UnsignedInt => {
            let token = parser.advance();
            let value = token
                .value
                .parse::<u8>()
                .map_err(|_| ParseError::NumberOutOfRange {
                    lexeme: token.value.clone(),
                    context: token.context,
                })?;

            Ok(Expr::UnsignedInt(UnsignedIntExpr {
                value,
                context: token.context,
            }))
        }
        TokenKind::Identifier if parser.peek_kind(1) == TokenKind::LeftParen => {
            parse_call_expr(parser)
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Identifier(IdentifierExpr {
                value: token.value,
                context: token.context,
            }))
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            Ok(Expr::Bool(BoolExpr {
                value: token.kind == TokenKind::True,
                context: token.context,
            }))
        }
        _ => Err(parser.unexpected(&ATOM_START)),
    }
}

/// `IDENTIFIER LPAREN (expression (COMMA expression)*)? RPAREN`
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::LeftParen)?;

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::RightParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::RightParen)?;

    Ok(Expr::FunctionCall(FunctionCallExpr {
        name: name.value,
        arguments,
        context: name.context,
    }))
}
