//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - INDENT/DEDENT synthesis from leading spaces
//! - Line and column tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
