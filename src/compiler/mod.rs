//! Code generation module for the compiler.
//!
//! This module turns a type checked AST into Z80 assembly for sjasmplus.
//! It handles:
//!
//! - Function prologues and epilogues around an IX frame pointer
//! - Stack slots for parameters and block-scoped locals
//! - Expressions evaluated into the A register
//! - The `start` entry point and the optional snapshot wrapper

pub mod compiler;
pub mod expr;
pub mod frame;
pub mod stmt;
