//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Scan and parse errors, which abort their stage on the first failure
//! - Typecheck errors, which are collected per block into `Combined`
//! - Codegen errors for programs whose frames cannot be laid out
//! - The `CompileError` umbrella used by the pipeline

pub mod errors;
