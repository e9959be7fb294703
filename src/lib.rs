#![allow(clippy::module_inception)]

use std::fmt::Display;

use log::debug;

use crate::{
    compiler::compiler::{generate, CodegenOptions},
    errors::errors::CompileError,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Line and column (both 1-based) of the token a node or token was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceContext {
    pub line: usize,
    pub column: usize,
}

impl SourceContext {
    pub fn new(line: usize, column: usize) -> Self {
        SourceContext { line, column }
    }
}

impl Display for SourceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Runs every stage over `source` and returns the generated assembly.
pub fn compile_source(source: &str, options: &CodegenOptions) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;
    type_check(&program)?;
    let assembly = generate(&program, options)?;

    debug!("generated {} lines of assembly", assembly.lines().count());
    Ok(assembly)
}

pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line - 1)
}


/// Prints the error with the offending source line and a caret under its column.
pub fn display_error(error: &CompileError, source: &str, file: &str) {
    print!("{}", render_error(error, source, file));
}

pub fn render_error(error: &CompileError, source: &str, file: &str) -> String {
    /*
        Error: TypeMismatch
        -> main.zx
          |
        2 | let x: u8 = true
          | ------------^
        At line 2, column 17: Expected type u8. Received type bool.
    */

    let mut rendered = format!("Error: {}\n-> {}\n", error.get_error_name(), file);

    for context in error.contexts() {
        let Some(line_text) = get_line(source, context.line) else {
            continue;
        };

        let line_string = context.line.to_string();
        let padding = line_string.len() + 2;

        rendered.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = context.column.saturating_sub(removed_whitespace).max(1);
        rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    rendered.push_str(&format!("{}\n", error));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
