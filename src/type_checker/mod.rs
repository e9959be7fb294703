//! Type checking and semantic analysis module.
//!
//! This module performs type checking and semantic analysis on the AST
//! without modifying it:
//!
//! - Verifying type correctness of expressions and statements
//! - Resolving variable and function references
//! - Checking function signatures, call arity and argument types
//! - Managing scopes through an environment stack
//!
//! A failing statement does not stop the rest of its block from being
//! checked; every failure of a block is reported together.

pub mod environment;
pub mod type_checker;

#[cfg(test)]
mod tests;
