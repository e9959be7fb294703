use crate::{
    ast::{
        ast::{Function, Parameter},
        statements::{
            AssignmentStmt, BlockStmt, IfStmt, LetStmt, PrintStmt, ReturnStmt, Stmt,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::{parser::Parser, types::parse_type};

/// Simple statements end with a NEWLINE; `if` ends with its block's DEDENT.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    // Two tokens of lookahead tell an assignment from an expression statement.
    if token_kind == TokenKind::Identifier && parser.peek_kind(1) == TokenKind::Assign {
        return parse_assignment_stmt(parser);
    }

    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Expression(expression))
}

/// `DEF IDENTIFIER LPAREN params RPAREN ARROW type COLON NEWLINE block`
pub fn parse_function(parser: &mut Parser) -> Result<Function, ParseError> {
    let start = parser.expect(TokenKind::Def)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::LeftParen)?;
    let parameters = parse_parameters(parser)?;
    parser.expect(TokenKind::RightParen)?;

    parser.expect(TokenKind::Arrow)?;
    let return_type = parse_type(parser)?;
    parser.expect(TokenKind::Colon)?;
    parser.expect(TokenKind::Newline)?;

    let body = parse_block(parser)?;

    Ok(Function {
        name,
        parameters,
        return_type,
        body,
        context: start.context,
    })
}

fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, ParseError> {
    let mut parameters = Vec::new();

    if parser.current_token_kind() == TokenKind::RightParen {
        return Ok(parameters);
    }

    loop {
        let name = parser.expect(TokenKind::Identifier)?;
        parser.expect(TokenKind::Colon)?;
        let param_type = parse_type(parser)?;

        parameters.push(Parameter {
            name: name.value,
            param_type,
            context: name.context,
        });

        if parser.current_token_kind() != TokenKind::Comma {
            return Ok(parameters);
        }
        parser.advance();
    }
}

/// `INDENT statement* DEDENT`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    let start = parser.expect(TokenKind::Indent)?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::Dedent {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::Dedent)?;

    Ok(BlockStmt {
        body,
        context: start.context,
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    parser.expect(TokenKind::Newline)?;

    let consequence = parse_block(parser)?;

    Ok(Stmt::If(IfStmt {
        condition,
        consequence: Box::new(Stmt::Block(consequence)),
        context: start.context,
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.expect(TokenKind::Print)?;

    parser.expect(TokenKind::LeftParen)?;
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Print(PrintStmt {
        expression,
        context: start.context,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.expect(TokenKind::Let)?;

    let identifier = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let var_type = parse_type(parser)?;
    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Let(LetStmt {
        identifier,
        var_type,
        value,
        context: start.context,
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        identifier: name.value,
        value,
        context: name.context,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.expect(TokenKind::Return)?;

    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        context: start.context,
    }))
}
