use log::debug;

use crate::{
    ast::{
        ast::{Function, Program},
        expressions::Expr,
        statements::{BlockStmt, Stmt},
        types::Type,
    },
    errors::errors::TypecheckError,
    SourceContext,
};

use super::environment::{EnvironmentStack, Scope};

#[derive(Debug)]
pub struct TypeChecker {
    pub environment: EnvironmentStack,
    pub current_function_return_type: Type,
    pub return_has_occurred: bool,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::with_environment(EnvironmentStack::new())
    }

    pub fn with_environment(environment: EnvironmentStack) -> Self {
        TypeChecker {
            environment,
            current_function_return_type: Type::Void,
            return_has_occurred: false,
        }
    }

    /// Resolves named types through the environment; built-in types resolve
    /// to themselves.
    pub fn resolve_type(&self, ty: &Type, context: SourceContext) -> Result<Type, TypecheckError> {
        match ty {
            Type::TypeIdentifier(name) => self.environment.get_type(name, context),
            _ => Ok(ty.clone()),
        }
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        TypeChecker::new()
    }
}

/// `Combined` of the collected errors, if there are any.
fn combine(errors: Vec<TypecheckError>) -> Result<(), TypecheckError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(TypecheckError::Combined(errors))
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<Type, TypecheckError> {
    match ast {
        Expr::UnsignedInt(_) => Ok(Type::NumberLiteral),
        Expr::Bool(_) => Ok(Type::Bool),
        Expr::Identifier(identifier) => {
            let variable_type = type_checker
                .environment
                .get_variable_type(&identifier.value, identifier.context)?;

            // Functions are only reachable through a call.
            if let Type::Callable { .. } = variable_type {
                return Err(TypecheckError::UndefinedVariable {
                    name: identifier.value.clone(),
                    context: identifier.context,
                });
            }

            Ok(variable_type)
        }
        Expr::Addition(addition) => {
            let lhs_type = type_check_expr(type_checker, &addition.left)?;
            let rhs_type = type_check_expr(type_checker, &addition.right)?;

            if !lhs_type.is_numerical() {
                return Err(TypecheckError::ExpectedNumericalType {
                    got: lhs_type,
                    context: addition.left.context(),
                });
            }
            if !rhs_type.is_numerical() {
                return Err(TypecheckError::ExpectedNumericalType {
                    got: rhs_type,
                    context: addition.right.context(),
                });
            }

            match (lhs_type, rhs_type) {
                (Type::NumberLiteral, other) | (other, Type::NumberLiteral) => Ok(other),
                (lhs_type, rhs_type) if lhs_type == rhs_type => Ok(lhs_type),
                (lhs_type, rhs_type) => Err(TypecheckError::TypeMismatch {
                    expected: lhs_type,
                    received: rhs_type,
                    context: addition.context,
                }),
            }
        }
        Expr::Negation(negation) => {
            let expression_type = type_check_expr(type_checker, &negation.expression)?;

            if !expression_type.is_numerical() {
                return Err(TypecheckError::ExpectedNumericalType {
                    got: expression_type,
                    context: negation.context,
                });
            }

            Ok(Type::I8)
        }
        Expr::Equal(equal) => {
            type_check_comparison(type_checker, &equal.left, &equal.right, equal.context)
        }
        Expr::NotEqual(not_equal) => type_check_comparison(
            type_checker,
            &not_equal.left,
            &not_equal.right,
            not_equal.context,
        ),
        Expr::FunctionCall(call) => {
            let callee_type = type_checker
                .environment
                .get_variable_type(&call.name, call.context)?;

            let Type::Callable {
                return_type,
                parameter_types,
            } = callee_type
            else {
                return Err(TypecheckError::NotFunctionCall {
                    name: call.name.clone(),
                    context: call.context,
                });
            };

            let got = call.arguments.len();
            let expected = parameter_types.len();

            if got < expected {
                return Err(TypecheckError::NotEnoughArguments {
                    name: call.name.clone(),
                    got,
                    expected,
                    context: call.context,
                });
            } else if got > expected {
                return Err(TypecheckError::TooManyArguments {
                    name: call.name.clone(),
                    got,
                    expected,
                    context: call.context,
                });
            }

            for (argument, parameter_type) in call.arguments.iter().zip(parameter_types.iter()) {
                let argument_type = type_check_expr(type_checker, argument)?;

                if !parameter_type.accepts(&argument_type) {
                    return Err(TypecheckError::TypeMismatch {
                        expected: parameter_type.clone(),
                        received: argument_type.defaulted(),
                        context: argument.context(),
                    });
                }
            }

            Ok(*return_type)
        }
    }
}

/// `==` and `!=` compare values of one type; a literal matches any numerical type.
fn type_check_comparison(
    type_checker: &mut TypeChecker,
    left: &Expr,
    right: &Expr,
    context: SourceContext,
) -> Result<Type, TypecheckError> {
    let lhs_type = type_check_expr(type_checker, left)?;
    let rhs_type = type_check_expr(type_checker, right)?;

    if !lhs_type.accepts(&rhs_type) && !rhs_type.accepts(&lhs_type) {
        return Err(TypecheckError::TypeMismatch {
            expected: lhs_type.defaulted(),
            received: rhs_type.defaulted(),
            context,
        });
    }

    Ok(Type::Bool)
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Result<(), TypecheckError> {
    match ast {
        Stmt::Block(block) => type_check_block(type_checker, block),
        Stmt::Expression(expression) => type_check_expr(type_checker, expression).map(|_| ()),
        Stmt::Print(print) => type_check_expr(type_checker, &print.expression).map(|_| ()),
        Stmt::If(if_stmt) => {
            let condition_type = type_check_expr(type_checker, &if_stmt.condition)?;

            if condition_type != Type::Bool {
                return Err(TypecheckError::TypeMismatch {
                    expected: Type::Bool,
                    received: condition_type.defaulted(),
                    context: if_stmt.condition.context(),
                });
            }

            type_check_stmt(type_checker, &if_stmt.consequence)
        }
        Stmt::Let(let_stmt) => {
            let rhs_type = type_check_expr(type_checker, &let_stmt.value)?;

            if type_checker
                .environment
                .has_variable_in_current_scope(&let_stmt.identifier)
            {
                return Err(TypecheckError::AlreadyDefinedVariable {
                    name: let_stmt.identifier.clone(),
                    context: let_stmt.context,
                });
            }

            let variable_type = type_checker.resolve_type(&let_stmt.var_type, let_stmt.context)?;
            type_checker
                .environment
                .set_variable(&let_stmt.identifier, variable_type.clone());

            // Any numerical value initialises any numerical variable.
            let compatible = variable_type.accepts(&rhs_type)
                || (variable_type.is_numerical() && rhs_type.is_numerical());

            if !compatible {
                return Err(TypecheckError::TypeMismatch {
                    expected: variable_type,
                    received: rhs_type.defaulted(),
                    context: let_stmt.context,
                });
            }

            Ok(())
        }
        Stmt::Assignment(assignment) => {
            let rhs_type = type_check_expr(type_checker, &assignment.value)?;
            let variable_type = type_checker
                .environment
                .get_variable_type(&assignment.identifier, assignment.context)?;

            if !variable_type.accepts(&rhs_type) {
                return Err(TypecheckError::TypeMismatch {
                    expected: variable_type,
                    received: rhs_type.defaulted(),
                    context: assignment.context,
                });
            }

            Ok(())
        }
        Stmt::Return(return_stmt) => {
            let return_type = type_check_expr(type_checker, &return_stmt.value)?;
            let function_return_type = type_checker.current_function_return_type.clone();

            if !function_return_type.accepts(&return_type) {
                return Err(TypecheckError::TypeMismatch {
                    expected: function_return_type,
                    received: return_type.defaulted(),
                    context: return_stmt.context,
                });
            }

            type_checker.return_has_occurred = true;
            Ok(())
        }
    }
}

/// Checks every statement of the block in a fresh scope. A failing statement
/// does not stop its siblings from being checked; all failures come back
/// together as one `Combined` error.
pub fn type_check_block(
    type_checker: &mut TypeChecker,
    ast: &BlockStmt,
) -> Result<(), TypecheckError> {
    type_checker.environment.push_scope(Scope::new());

    let errors: Vec<TypecheckError> = ast
        .iter()
        .filter_map(|stmt| type_check_stmt(type_checker, stmt).err())
        .collect();

    type_checker.environment.pop_scope();
    combine(errors)
}

pub fn type_check_function(
    type_checker: &mut TypeChecker,
    ast: &Function,
) -> Result<(), TypecheckError> {
    type_checker.return_has_occurred = false;
    type_checker.current_function_return_type = ast.return_type.clone();

    // The signature is visible inside its own body.
    let signature = resolve_signature(type_checker, ast).unwrap_or_else(|_| ast.signature());
    type_checker.environment.set_variable(&ast.name, signature);

    type_checker.environment.push_scope(Scope::new());
    let result = type_check_function_body(type_checker, ast);
    type_checker.environment.pop_scope();

    result
}

fn type_check_function_body(
    type_checker: &mut TypeChecker,
    ast: &Function,
) -> Result<(), TypecheckError> {
    let return_type = type_checker.resolve_type(&ast.return_type, ast.context)?;
    type_checker.current_function_return_type = return_type.clone();

    for parameter in ast.parameters.iter() {
        let param_type = type_checker.resolve_type(&parameter.param_type, parameter.context)?;
        type_checker
            .environment
            .add_variable(&parameter.name, param_type, parameter.context)?;
    }

    type_check_block(type_checker, &ast.body)?;

    if !type_checker.return_has_occurred && return_type != Type::Void {
        return Err(TypecheckError::NoReturn {
            expected: return_type,
            function_name: ast.name.clone(),
            context: ast.context,
        });
    }

    Ok(())
}

/// The callable type of `ast` with every named type resolved.
pub fn resolve_signature(
    type_checker: &TypeChecker,
    ast: &Function,
) -> Result<Type, TypecheckError> {
    let return_type = type_checker.resolve_type(&ast.return_type, ast.context)?;
    let parameter_types = ast
        .parameters
        .iter()
        .map(|parameter| type_checker.resolve_type(&parameter.param_type, parameter.context))
        .collect::<Result<Vec<Type>, TypecheckError>>()?;

    Ok(Type::callable(return_type, parameter_types))
}

pub fn type_check_program(
    type_checker: &mut TypeChecker,
    ast: &Program,
) -> Result<(), TypecheckError> {
    // Every signature is known before any body is checked. A signature
    // naming an unknown type is reported by its function's body check.
    let redefinitions: Vec<Option<TypecheckError>> = ast
        .functions
        .iter()
        .map(|function| {
            let signature =
                resolve_signature(type_checker, function).unwrap_or_else(|_| function.signature());

            type_checker
                .environment
                .add_variable(&function.name, signature, function.context)
                .err()
        })
        .collect();

    let mut errors = vec![];
    for (function, redefinition) in ast.functions.iter().zip(redefinitions) {
        errors.extend(redefinition);

        if let Err(error) = type_check_function(type_checker, function) {
            errors.push(error);
        }
    }

    combine(errors)
}

/// Checks the whole program against a fresh environment.
pub fn type_check(ast: &Program) -> Result<(), TypecheckError> {
    let mut type_checker = TypeChecker::new();
    let result = type_check_program(&mut type_checker, ast);

    match &result {
        Ok(()) => debug!("type checked {} functions", ast.functions.len()),
        Err(error) => debug!("type checking found {} errors", error.leaves().len()),
    }

    result
}
