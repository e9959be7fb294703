use crate::{
    ast::statements::{BlockStmt, Stmt},
    errors::errors::CodegenError,
};

use super::{
    compiler::Compiler,
    expr::{gen_expression, slot_of},
    frame::ix_operand,
};

/// Locals declared in the block are popped when it ends.
pub fn gen_block(compiler: &mut Compiler, block: &BlockStmt) -> Result<(), CodegenError> {
    compiler.frame.open_block();

    for statement in block.iter() {
        gen_statement(compiler, statement)?;
    }

    for _ in 0..compiler.frame.close_block() {
        compiler.emit("pop bc");
    }

    Ok(())
}

pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) -> Result<(), CodegenError> {
    match statement {
        Stmt::Block(block) => gen_block(compiler, block),
        Stmt::Expression(expression) => gen_expression(compiler, expression),
        Stmt::Print(print) => {
            gen_expression(compiler, &print.expression)?;
            compiler.emit("rst $10");
            Ok(())
        }
        Stmt::If(if_stmt) => {
            let end_label = compiler.new_label("if_end");

            gen_expression(compiler, &if_stmt.condition)?;
            compiler.emit("cp 1");
            compiler.emit(&format!("jp nz, {}", end_label));

            gen_statement(compiler, &if_stmt.consequence)?;
            compiler.emit_label(&end_label);
            Ok(())
        }
        Stmt::Let(let_stmt) => {
            gen_expression(compiler, &let_stmt.value)?;
            compiler.emit("push af");
            compiler.frame.push_local(&let_stmt.identifier)?;
            Ok(())
        }
        Stmt::Assignment(assignment) => {
            gen_expression(compiler, &assignment.value)?;
            let displacement = slot_of(compiler, &assignment.identifier, assignment.context)?;
            compiler.emit(&format!("ld {}, a", ix_operand(displacement)));
            Ok(())
        }
        Stmt::Return(return_stmt) => {
            gen_expression(compiler, &return_stmt.value)?;
            compiler.emit_epilogue();
            Ok(())
        }
    }
}
