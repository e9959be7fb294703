//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive descent parser with
//! one token of lookahead (two for telling assignments apart) and handles:
//!
//! - Function definitions with typed parameters
//! - Statement parsing (let, assignment, print, return, if)
//! - Expression parsing (equality, addition, negation, calls, literals)
//! - Type parsing for type annotations
//!
//! Parsing stops at the first unexpected token.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
