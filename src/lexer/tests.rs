//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals
//! - Operators and punctuation
//! - Newlines, indentation and blank lines
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};
use crate::errors::errors::ScanError;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_unsigned_int() {
    let tokens = tokenize("  123  ").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 3, TokenKind::UnsignedInt, "123"),
            Token::new(1, 8, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens, vec![Token::new(1, 1, TokenKind::EOF, "")]);
}

#[test]
fn test_tokenize_assignment_and_print() {
    let tokens = tokenize("x = 1\nprint(1 + y)").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 1, TokenKind::Identifier, "x"),
            Token::new(1, 3, TokenKind::Assign, "="),
            Token::new(1, 5, TokenKind::UnsignedInt, "1"),
            Token::new(1, 6, TokenKind::Newline, "\n"),
            Token::new(2, 1, TokenKind::Print, "print"),
            Token::new(2, 6, TokenKind::LeftParen, "("),
            Token::new(2, 7, TokenKind::UnsignedInt, "1"),
            Token::new(2, 9, TokenKind::Plus, "+"),
            Token::new(2, 11, TokenKind::Identifier, "y"),
            Token::new(2, 12, TokenKind::RightParen, ")"),
            Token::new(2, 13, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_newline_after_spaces() {
    let tokens = tokenize("  \n123").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 3, TokenKind::Newline, "\n"),
            Token::new(2, 1, TokenKind::UnsignedInt, "123"),
            Token::new(2, 4, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_trailing_spaces_after_newline() {
    let tokens = tokenize("  \n  ").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 3, TokenKind::Newline, "\n"),
            Token::new(2, 3, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("def return print true false bool u8 i8 void let if").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Def,
            TokenKind::Return,
            TokenKind::Print,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Bool,
            TokenKind::U8,
            TokenKind::I8,
            TokenKind::Void,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("  _identifier_ letter u8x iffy x1").unwrap();

    assert_eq!(tokens[0], Token::new(1, 3, TokenKind::Identifier, "_identifier_"));
    assert_eq!(tokens[1], Token::new(1, 16, TokenKind::Identifier, "letter"));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "u8x");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "iffy");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "x1");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_digits_then_letters() {
    let tokens = tokenize("12ab").unwrap();

    assert_eq!(tokens[0], Token::new(1, 1, TokenKind::UnsignedInt, "12"));
    assert_eq!(tokens[1], Token::new(1, 3, TokenKind::Identifier, "ab"));
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("-> == != = - + ( ) : ,").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Arrow,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::Assign,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_longest_match_without_spaces() {
    let tokens = tokenize("a==-b->c=d").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_indent_and_dedent() {
    let tokens = tokenize("if true:\n    y\nz").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 1, TokenKind::If, "if"),
            Token::new(1, 4, TokenKind::True, "true"),
            Token::new(1, 8, TokenKind::Colon, ":"),
            Token::new(1, 9, TokenKind::Newline, "\n"),
            Token::new(2, 1, TokenKind::Indent, "    "),
            Token::new(2, 5, TokenKind::Identifier, "y"),
            Token::new(2, 6, TokenKind::Newline, "\n"),
            Token::new(3, 1, TokenKind::Dedent, "    "),
            Token::new(3, 1, TokenKind::Identifier, "z"),
            Token::new(3, 2, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_nested_blocks_close_together() {
    let tokens = tokenize("a:\n    b:\n        c\nd").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Dedent,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_indent_balance_tracks_level() {
    let source = "def f() -> void:\n    if a:\n        if b:\n            c\n    d\n";
    let tokens = tokenize(source).unwrap();

    let mut level: i64 = 0;
    let mut deepest = 0;
    for token in tokens.iter() {
        match token.kind {
            TokenKind::Indent => level += 1,
            TokenKind::Dedent => level -= 1,
            _ => {}
        }
        assert!(level >= 0);
        deepest = deepest.max(level);
    }

    assert_eq!(deepest, 3);
    assert_eq!(level, 0);
}

#[test]
fn test_tokenize_blank_lines_collapse() {
    let tokens = tokenize("a\n\n\nb").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 1, TokenKind::Identifier, "a"),
            Token::new(3, 1, TokenKind::Newline, "\n"),
            Token::new(4, 1, TokenKind::Identifier, "b"),
            Token::new(4, 2, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_whitespace_only_line_inside_block() {
    let tokens = tokenize("if x:\n    a\n  \n    b\n").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 1, TokenKind::If, "if"),
            Token::new(1, 4, TokenKind::Identifier, "x"),
            Token::new(1, 5, TokenKind::Colon, ":"),
            Token::new(1, 6, TokenKind::Newline, "\n"),
            Token::new(2, 1, TokenKind::Indent, "    "),
            Token::new(2, 5, TokenKind::Identifier, "a"),
            Token::new(3, 3, TokenKind::Newline, "\n"),
            Token::new(4, 5, TokenKind::Identifier, "b"),
            Token::new(4, 6, TokenKind::Newline, "\n"),
            Token::new(5, 1, TokenKind::Dedent, "    "),
            Token::new(5, 1, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_leading_newline() {
    let tokens = tokenize("\nx").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(1, 1, TokenKind::Newline, "\n"),
            Token::new(2, 1, TokenKind::Identifier, "x"),
            Token::new(2, 2, TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_uneven_indentation() {
    let result = tokenize("if x:\n   a");

    assert_eq!(
        result,
        Err(ScanError::UnevenIndentation {
            line: 2,
            column: 1,
            space_count: 3,
        })
    );
}

#[test]
fn test_tokenize_unrecognized_token() {
    let result = tokenize("let x = @");

    assert_eq!(
        result,
        Err(ScanError::UnrecognizedToken {
            line: 1,
            column: 9,
            character: '@',
        })
    );
}

#[test]
fn test_tokenize_tab_is_unrecognized() {
    let result = tokenize("x\n\ty");

    assert!(matches!(
        result,
        Err(ScanError::UnrecognizedToken { line: 2, column: 1, character: '\t' })
    ));
}

#[test]
fn test_lexemes_sit_at_their_columns() {
    let source = "def add(a: u8, b: u8) -> u8:\n    return a + b\n";
    let lines: Vec<&str> = source.split('\n').collect();
    let tokens = tokenize(source).unwrap();

    for token in tokens.iter().filter(|token| {
        !matches!(
            token.kind,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::EOF
        )
    }) {
        let line = lines[token.context.line - 1];
        let start = token.context.column - 1;
        assert_eq!(&line[start..start + token.value.len()], token.value);
    }
}
