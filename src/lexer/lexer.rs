use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::ScanError, SourceContext, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Number of spaces making up one indentation level.
pub const INDENT_WIDTH: usize = 4;

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), ScanError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Tried in order, so longer spellings sit before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^ +", skip_handler),
        pattern("^\n", newline_handler),
        pattern("^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equal, "==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEqual, "!=")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assign, "=")),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("^[0-9]+", number_handler),
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
    indent_level: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
            indent_level: 0,
        }
    }

    /// Advances within the current line.
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
        self.column += n;
    }

    fn advance_line(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.column = 1;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn context(&self) -> SourceContext {
        SourceContext::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Compares the leading spaces of the line that starts at the current
    /// position with the indentation level and emits INDENT/DEDENT tokens.
    fn consume_indentation(&mut self) -> Result<(), ScanError> {
        let remainder = self.remainder();
        let space_count = remainder.chars().take_while(|c| *c == ' ').count();
        let rest_of_line = &remainder[space_count..];

        // Blank lines leave the level untouched.
        if rest_of_line.starts_with('\n') {
            return Ok(());
        }

        // Spaces running up to the end of input close every open block.
        let space_count = if rest_of_line.is_empty() { 0 } else { space_count };

        if space_count % INDENT_WIDTH != 0 {
            return Err(ScanError::UnevenIndentation {
                line: self.line,
                column: self.column,
                space_count,
            });
        }

        let new_level = space_count / INDENT_WIDTH;
        let kind = if new_level > self.indent_level {
            TokenKind::Indent
        } else {
            TokenKind::Dedent
        };
        let context = self.context();

        for _ in 0..new_level.abs_diff(self.indent_level) {
            self.push(MK_TOKEN!(kind, " ".repeat(INDENT_WIDTH), context));
        }

        trace!("indentation level {} -> {} at {}", self.indent_level, new_level, context);

        self.advance_n(space_count);
        self.indent_level = new_level;
        Ok(())
    }
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), ScanError> {
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn newline_handler(lexer: &mut Lexer, _lexeme: &str) -> Result<(), ScanError> {
    let context = lexer.context();
    lexer.push(MK_TOKEN!(TokenKind::Newline, String::from("\n"), context));
    lexer.advance_line();
    lexer.consume_indentation()
}

fn number_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), ScanError> {
    let context = lexer.context();
    lexer.push(MK_TOKEN!(TokenKind::UnsignedInt, String::from(lexeme), context));
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), ScanError> {
    let kind = RESERVED_LOOKUP
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let context = lexer.context();
    lexer.push(MK_TOKEN!(kind, String::from(lexeme), context));
    lexer.advance_n(lexeme.len());
    Ok(())
}

/// Keeps only the last NEWLINE of every run of NEWLINEs.
fn remove_extra_newlines(tokens: Vec<Token>) -> Vec<Token> {
    let mut filtered = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let next_is_newline = tokens
            .peek()
            .is_some_and(|next| next.kind == TokenKind::Newline);

        if token.kind == TokenKind::Newline && next_is_newline {
            continue;
        }
        filtered.push(token);
    }

    filtered
}

/// Scans the whole source. The first unrecognised character or uneven
/// indentation aborts the scan.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, String::from(found.as_str())))
        });

        match matched {
            Some((handler, lexeme)) => handler(&mut lex, &lexeme)?,
            None => {
                return Err(ScanError::UnrecognizedToken {
                    line: lex.line,
                    column: lex.column,
                    character: lex.remainder().chars().next().unwrap_or_default(),
                })
            }
        }
    }

    let context = lex.context();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), context));

    let tokens = remove_extra_newlines(lex.tokens);
    debug!("scanned {} tokens", tokens.len());

    Ok(tokens)
}
