//! Main compiler module.
//!
//! This module contains the core Compiler structure and the entry point that
//! turns a type checked program into Z80 assembly in sjasmplus syntax.

use log::debug;

use crate::{
    ast::ast::{Function, Program},
    errors::errors::CodegenError,
};

use super::{frame::FrameLayout, stmt::gen_block};

const INDENTATION: &str = "    ";

/// Options controlling the shape of the generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodegenOptions {
    /// When set, the program is wrapped in the directives that make
    /// sjasmplus save a `<name>.sna` ZX Spectrum snapshot.
    pub snapshot_name: Option<String>,
}

/// The main compiler structure that holds the state of the compilation process.
///
/// The generated text accumulates in `output`. Values are computed into the
/// A register; locals and arguments live in the IX-relative stack frame.
pub struct Compiler {
    /// The assembly emitted so far
    pub output: String,
    /// Layout of the function being generated
    pub frame: FrameLayout,
    /// Counter for unique jump labels
    label_counter: usize,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            output: String::new(),
            frame: FrameLayout::new(),
            label_counter: 0,
        }
    }

    /// Emits one indented instruction.
    pub fn emit(&mut self, instruction: &str) {
        self.output.push_str(INDENTATION);
        self.output.push_str(instruction);
        self.output.push('\n');
    }

    pub fn emit_label(&mut self, label: &str) {
        self.output.push_str(label);
        self.output.push_str(":\n");
    }

    pub fn emit_blank(&mut self) {
        self.output.push('\n');
    }

    /// A label nobody else in the program uses.
    pub fn new_label(&mut self, prefix: &str) -> String {
        let label = format!("{}_{}", prefix, self.label_counter);
        self.label_counter += 1;
        label
    }

    /// Restores the caller's frame and returns. A is left untouched.
    pub fn emit_epilogue(&mut self) {
        self.emit("ld sp, ix");
        self.emit("pop ix");
        self.emit("ret");
    }

    fn gen_function(&mut self, function: &Function) -> Result<(), CodegenError> {
        self.frame
            .enter_function(&function.name, &function.parameters, function.context)?;

        self.emit_label(&function_label(&function.name));
        self.emit("push ix");
        self.emit("ld ix, 0");
        self.emit("add ix, sp");

        gen_block(self, &function.body)?;

        self.emit_epilogue();
        debug!("generated function {}", function.name);
        Ok(())
    }

    fn gen_program(
        &mut self,
        program: &Program,
        options: &CodegenOptions,
    ) -> Result<(), CodegenError> {
        if options.snapshot_name.is_some() {
            self.emit("DEVICE ZXSPECTRUM48");
        }
        self.emit("org $8000");
        self.emit_blank();

        self.emit_label("start");
        if let Some(main) = program.functions.iter().find(|function| function.name == "main") {
            if !main.parameters.is_empty() {
                return Err(CodegenError::MainHasParameters {
                    context: main.context,
                });
            }
            self.emit(&format!("call {}", function_label("main")));
        }
        self.emit("ret");

        for function in program.functions.iter() {
            self.emit_blank();
            self.gen_function(function)?;
        }

        if let Some(name) = &options.snapshot_name {
            self.emit_blank();
            self.emit(&format!("SAVESNA \"{}.sna\", start", name));
        }

        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}

pub fn function_label(name: &str) -> String {
    format!("fn_{}", name)
}

/// Generates the assembly of a program that passed type checking.
pub fn generate(program: &Program, options: &CodegenOptions) -> Result<String, CodegenError> {
    let mut compiler = Compiler::new();
    compiler.gen_program(program, options)?;

    Ok(compiler.output)
}
