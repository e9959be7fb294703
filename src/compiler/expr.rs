use crate::{ast::expressions::Expr, errors::errors::CodegenError, SourceContext};

use super::{
    compiler::{function_label, Compiler},
    frame::ix_operand,
};

pub fn slot_of(
    compiler: &Compiler,
    name: &str,
    context: SourceContext,
) -> Result<i8, CodegenError> {
    compiler
        .frame
        .lookup(name)
        .ok_or_else(|| CodegenError::UnresolvedVariable {
            name: String::from(name),
            context,
        })
}

/// Leaves the left operand in B and the right one in A.
fn gen_operands(compiler: &mut Compiler, left: &Expr, right: &Expr) -> Result<(), CodegenError> {
    gen_expression(compiler, left)?;
    compiler.emit("push af");
    gen_expression(compiler, right)?;
    compiler.emit("pop bc");
    Ok(())
}

/// Sets A to 1 when A equals B, otherwise to 0. `ld` keeps the flags of `cp`.
fn gen_comparison(compiler: &mut Compiler, when_equal: u8) -> Result<(), CodegenError> {
    let end_label = compiler.new_label("cmp_end");

    compiler.emit("cp b");
    compiler.emit(&format!("ld a, {}", 1 - when_equal));
    compiler.emit(&format!("jr nz, {}", end_label));
    compiler.emit(&format!("ld a, {}", when_equal));
    compiler.emit_label(&end_label);
    Ok(())
}

/// Emits code leaving the value of `expression` in A.
pub fn gen_expression(compiler: &mut Compiler, expression: &Expr) -> Result<(), CodegenError> {
    match expression {
        Expr::UnsignedInt(literal) => {
            compiler.emit(&format!("ld a, {}", literal.value));
            Ok(())
        }
        Expr::Bool(literal) => {
            compiler.emit(&format!("ld a, {}", u8::from(literal.value)));
            Ok(())
        }
        Expr::Identifier(identifier) => {
            let displacement = slot_of(compiler, &identifier.value, identifier.context)?;
            compiler.emit(&format!("ld a, {}", ix_operand(displacement)));
            Ok(())
        }
        Expr::Addition(addition) => {
            gen_operands(compiler, &addition.left, &addition.right)?;
            compiler.emit("add a, b");
            Ok(())
        }
        Expr::Negation(negation) => {
            gen_expression(compiler, &negation.expression)?;
            compiler.emit("neg");
            Ok(())
        }
        Expr::Equal(equal) => {
            gen_operands(compiler, &equal.left, &equal.right)?;
            gen_comparison(compiler, 1)
        }
        Expr::NotEqual(not_equal) => {
            gen_operands(compiler, &not_equal.left, &not_equal.right)?;
            gen_comparison(compiler, 0)
        }
        Expr::FunctionCall(call) => {
            for argument in call.arguments.iter() {
                gen_expression(compiler, argument)?;
                compiler.emit("push af");
            }

            compiler.emit(&format!("call {}", function_label(&call.name)));

            // The result stays in A; `pop bc` leaves it alone.
            for _ in call.arguments.iter() {
                compiler.emit("pop bc");
            }
            Ok(())
        }
    }
}
