use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::SourceContext;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("return", TokenKind::Return);
        map.insert("print", TokenKind::Print);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("bool", TokenKind::Bool);
        map.insert("u8", TokenKind::U8);
        map.insert("i8", TokenKind::I8);
        map.insert("void", TokenKind::Void);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Significant whitespace
    EOF,
    Newline,
    Indent,
    Dedent,

    // Reserved
    Def,
    Return,
    Print,
    True,
    False,
    Bool,
    U8,
    I8,
    Void,
    Let,
    If,

    Colon,
    Comma,
    Arrow,

    LeftParen,
    RightParen,

    Plus,
    Minus,
    Equal,    // ==
    NotEqual, // !=
    Assign,   // =

    UnsignedInt,
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            TokenKind::EOF => "EOF",
            TokenKind::Newline => "\\n",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::Print => "print",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Bool => "bool",
            TokenKind::U8 => "u8",
            TokenKind::I8 => "i8",
            TokenKind::Void => "void",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Arrow => "->",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Assign => "=",
            TokenKind::UnsignedInt => "<decimal>",
            TokenKind::Identifier => "<identifier>",
        };
        write!(f, "'{}'", spelling)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub context: SourceContext,
}

impl Token {
    pub fn new(line: usize, column: usize, kind: TokenKind, value: &str) -> Self {
        Token {
            kind,
            value: String::from(value),
            context: SourceContext::new(line, column),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.value, self.context)
    }
}
