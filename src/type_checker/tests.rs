//! Unit tests for the type checker.
//!
//! This module covers:
//! - Expression typing (literals, addition, negation, equality, calls)
//! - Statement rules (let, assignment, return, if)
//! - Scoping and shadowing through the environment stack
//! - Error aggregation

use super::environment::{EnvironmentStack, Scope};
use super::type_checker::{
    type_check, type_check_block, type_check_expr, type_check_function, type_check_program,
    TypeChecker,
};
use crate::ast::ast::Program;
use crate::ast::expressions::{BoolExpr, Expr, FunctionCallExpr, UnsignedIntExpr};
use crate::ast::types::Type;
use crate::errors::errors::TypecheckError;
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;
use crate::SourceContext;

fn parse_source(source: &str) -> Program {
    parse(tokenize(source).unwrap()).unwrap()
}

fn check(source: &str) -> Result<(), TypecheckError> {
    type_check(&parse_source(source))
}

/// Every reported error, flattened, in source order.
fn errors_of(source: &str) -> Vec<TypecheckError> {
    match check(source) {
        Ok(()) => vec![],
        Err(error) => error.leaves().into_iter().cloned().collect(),
    }
}

#[test]
fn test_assignment_type_mismatch_in_block() {
    let program = parse_source("def main() -> void:\n    let x: u8 = 1\n    x = true\n");
    let mut type_checker = TypeChecker::new();

    let result = type_check_block(&mut type_checker, &program.functions[0].body);

    assert_eq!(
        result,
        Err(TypecheckError::Combined(vec![TypecheckError::TypeMismatch {
            expected: Type::U8,
            received: Type::Bool,
            context: SourceContext::new(3, 5),
        }]))
    );
}

#[test]
fn test_missing_return() {
    let result = check("def main() -> u8:\n    print(1)\n");

    assert_eq!(
        result,
        Err(TypecheckError::Combined(vec![TypecheckError::NoReturn {
            expected: Type::U8,
            function_name: String::from("main"),
            context: SourceContext::new(1, 1),
        }]))
    );
}

#[test]
fn test_missing_return_from_function_check() {
    let program = parse_source("def main() -> u8:\n    print(1)\n");
    let mut type_checker = TypeChecker::new();

    let result = type_check_function(&mut type_checker, &program.functions[0]);

    assert!(matches!(result, Err(TypecheckError::NoReturn { .. })));
    assert_eq!(type_checker.environment.depth(), 1);
}

#[test]
fn test_return_inside_if_counts() {
    assert_eq!(check("def f(c: bool) -> u8:\n    if c:\n        return 1\n"), Ok(()));
}

#[test]
fn test_too_many_arguments() {
    let mut environment = EnvironmentStack::new();
    environment.set_variable("f", Type::callable(Type::Void, vec![Type::U8]));
    let mut type_checker = TypeChecker::with_environment(environment);

    let call = Expr::FunctionCall(FunctionCallExpr {
        name: String::from("f"),
        arguments: vec![
            Expr::UnsignedInt(UnsignedIntExpr {
                value: 1,
                context: SourceContext::new(1, 3),
            }),
            Expr::Bool(BoolExpr {
                value: true,
                context: SourceContext::new(1, 6),
            }),
        ],
        context: SourceContext::new(1, 1),
    });

    assert_eq!(
        type_check_expr(&mut type_checker, &call),
        Err(TypecheckError::TooManyArguments {
            name: String::from("f"),
            got: 2,
            expected: 1,
            context: SourceContext::new(1, 1),
        })
    );
}

#[test]
fn test_arity_is_exact() {
    let source = "def f(a: u8, b: u8) -> void:\n    print(a)\n\ndef main() -> void:\n    f(1)\n    f(1, 2, 3)\n    f(1, 2)\n";

    assert_eq!(
        errors_of(source),
        vec![
            TypecheckError::NotEnoughArguments {
                name: String::from("f"),
                got: 1,
                expected: 2,
                context: SourceContext::new(5, 5),
            },
            TypecheckError::TooManyArguments {
                name: String::from("f"),
                got: 3,
                expected: 2,
                context: SourceContext::new(6, 5),
            },
        ]
    );
}

#[test]
fn test_call_result_has_return_type() {
    let mut environment = EnvironmentStack::new();
    environment.set_variable("g", Type::callable(Type::Bool, vec![]));
    let mut type_checker = TypeChecker::with_environment(environment);

    let call = Expr::FunctionCall(FunctionCallExpr {
        name: String::from("g"),
        arguments: vec![],
        context: SourceContext::new(1, 1),
    });

    assert_eq!(type_check_expr(&mut type_checker, &call), Ok(Type::Bool));
}

#[test]
fn test_argument_type_mismatch() {
    let source = "def f(a: bool) -> void:\n    print(a)\n\ndef main() -> void:\n    f(1)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::TypeMismatch {
            expected: Type::Bool,
            received: Type::U8,
            context: SourceContext::new(5, 7),
        }]
    );
}

#[test]
fn test_calling_a_variable() {
    let source = "def main() -> void:\n    let x: u8 = 1\n    x(1)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::NotFunctionCall {
            name: String::from("x"),
            context: SourceContext::new(3, 5),
        }]
    );
}

#[test]
fn test_let_in_if_does_not_leak() {
    let source = "def main() -> void:\n    if true:\n        let y: u8 = 1\n    print(y)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::UndefinedVariable {
            name: String::from("y"),
            context: SourceContext::new(4, 11),
        }]
    );
}

#[test]
fn test_shadowing_outer_variable() {
    let source = "def main() -> void:\n    let x: u8 = 1\n    if true:\n        let x: bool = true\n        print(x)\n    x = 2\n";

    assert_eq!(check(source), Ok(()));
}

#[test]
fn test_redefinition_in_same_scope() {
    let source = "def main() -> void:\n    let x: u8 = 1\n    let x: u8 = 2\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::AlreadyDefinedVariable {
            name: String::from("x"),
            context: SourceContext::new(3, 5),
        }]
    );
}

#[test]
fn test_errors_are_collected_in_order() {
    let source = "def main() -> void:\n    let a: bool = 1\n    b = 2\n    print(true + 1)\n    print(1)\n";

    assert_eq!(
        errors_of(source),
        vec![
            TypecheckError::TypeMismatch {
                expected: Type::Bool,
                received: Type::U8,
                context: SourceContext::new(2, 5),
            },
            TypecheckError::UndefinedVariable {
                name: String::from("b"),
                context: SourceContext::new(3, 5),
            },
            TypecheckError::ExpectedNumericalType {
                got: Type::Bool,
                context: SourceContext::new(4, 11),
            },
        ]
    );
}

#[test]
fn test_errors_of_several_functions() {
    let source = "def f() -> void:\n    x = 1\n\ndef main() -> void:\n    y = 1\n";
    let result = check(source);

    let Err(TypecheckError::Combined(errors)) = result else {
        panic!("expected a combined error");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|error| matches!(error, TypecheckError::Combined(inner) if inner.len() == 1)));
}

#[test]
fn test_if_condition_must_be_bool() {
    let source = "def main() -> void:\n    if 1:\n        print(1)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::TypeMismatch {
            expected: Type::Bool,
            received: Type::U8,
            context: SourceContext::new(2, 8),
        }]
    );
}

#[test]
fn test_return_type_mismatch() {
    assert_eq!(
        errors_of("def f() -> bool:\n    return 1\n"),
        vec![TypecheckError::TypeMismatch {
            expected: Type::Bool,
            received: Type::U8,
            context: SourceContext::new(2, 5),
        }]
    );
}

#[test]
fn test_negation_is_signed() {
    assert_eq!(check("def f() -> i8:\n    return -1\n"), Ok(()));
    assert_eq!(
        errors_of("def f() -> u8:\n    return -1\n"),
        vec![TypecheckError::TypeMismatch {
            expected: Type::U8,
            received: Type::I8,
            context: SourceContext::new(2, 5),
        }]
    );
}

#[test]
fn test_negation_of_bool() {
    assert_eq!(
        errors_of("def main() -> void:\n    print(-true)\n"),
        vec![TypecheckError::ExpectedNumericalType {
            got: Type::Bool,
            context: SourceContext::new(2, 11),
        }]
    );
}

#[test]
fn test_literal_fits_either_numerical_type() {
    let source = "def main() -> void:\n    let a: u8 = 1 + 2\n    let b: i8 = 3\n    let c: u8 = -1\n    a = a + 1\n    b = 1 + b\n";

    assert_eq!(check(source), Ok(()));
}

#[test]
fn test_addition_of_different_numerical_types() {
    let source = "def main() -> void:\n    let a: u8 = 1\n    let b: i8 = -1\n    print(a + b)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::TypeMismatch {
            expected: Type::U8,
            received: Type::I8,
            context: SourceContext::new(4, 13),
        }]
    );
}

#[test]
fn test_equality_types() {
    let source = "def main() -> void:\n    let a: u8 = 1\n    if a == 1:\n        print(a)\n    if true != false:\n        print(a)\n";
    assert_eq!(check(source), Ok(()));

    assert_eq!(
        errors_of("def main() -> void:\n    print(1 == true)\n"),
        vec![TypecheckError::TypeMismatch {
            expected: Type::U8,
            received: Type::Bool,
            context: SourceContext::new(2, 13),
        }]
    );
}

#[test]
fn test_forward_call_and_recursion() {
    let source = "def main() -> void:\n    print(double(2))\n\ndef double(x: u8) -> u8:\n    return x + double(x)\n";

    assert_eq!(check(source), Ok(()));
}

#[test]
fn test_duplicate_function() {
    let source = "def f() -> void:\n    print(1)\n\ndef f() -> void:\n    print(2)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::AlreadyDefinedVariable {
            name: String::from("f"),
            context: SourceContext::new(4, 1),
        }]
    );
}

#[test]
fn test_undefined_type() {
    assert_eq!(
        errors_of("def main() -> void:\n    let p: Point = 1\n"),
        vec![TypecheckError::UndefinedType {
            type_: Type::TypeIdentifier(String::from("Point")),
            context: SourceContext::new(2, 5),
        }]
    );
}

#[test]
fn test_user_defined_type_resolves() {
    let mut environment = EnvironmentStack::new();
    environment.add_type("Byte", Type::U8);
    let mut type_checker = TypeChecker::with_environment(environment);
    let program = parse_source("def main(b: Byte) -> void:\n    let c: Byte = b + 1\n");

    assert_eq!(type_check_program(&mut type_checker, &program), Ok(()));
}

#[test]
fn test_call_with_user_defined_parameter_type() {
    let mut environment = EnvironmentStack::new();
    environment.add_type("Byte", Type::U8);
    let mut type_checker = TypeChecker::with_environment(environment);
    let source = "def f(b: Byte) -> Byte:\n    return b\n\ndef main() -> void:\n    let x: u8 = 1\n    let y: u8 = f(x)\n    let z: Byte = f(y)\n";

    assert_eq!(type_check_program(&mut type_checker, &parse_source(source)), Ok(()));
}

#[test]
fn test_unknown_parameter_type_reported_once() {
    let source = "def f(b: Point) -> void:\n    print(b)\n";

    assert_eq!(
        errors_of(source),
        vec![TypecheckError::UndefinedType {
            type_: Type::TypeIdentifier(String::from("Point")),
            context: SourceContext::new(1, 7),
        }]
    );
}

#[test]
fn test_function_name_is_not_a_value() {
    let source = "def f() -> void:\n    print(1)\n\ndef main() -> void:\n    print(f)\n    let x: u8 = f\n";

    assert_eq!(
        errors_of(source),
        vec![
            TypecheckError::UndefinedVariable {
                name: String::from("f"),
                context: SourceContext::new(5, 11),
            },
            TypecheckError::UndefinedVariable {
                name: String::from("f"),
                context: SourceContext::new(6, 17),
            },
        ]
    );
}

#[test]
fn test_duplicate_function_error_follows_source_order() {
    let source = "def f() -> void:\n    x = 1\n\ndef f() -> void:\n    print(2)\n";

    assert_eq!(
        errors_of(source),
        vec![
            TypecheckError::UndefinedVariable {
                name: String::from("x"),
                context: SourceContext::new(2, 5),
            },
            TypecheckError::AlreadyDefinedVariable {
                name: String::from("f"),
                context: SourceContext::new(4, 1),
            },
        ]
    );
}

#[test]
fn test_scopes_are_balanced_after_errors() {
    let program = parse_source(
        "def f() -> u8:\n    if true:\n        x = 1\n\ndef main() -> void:\n    print(z)\n",
    );
    let mut type_checker = TypeChecker::new();

    assert!(type_check_program(&mut type_checker, &program).is_err());
    assert_eq!(type_checker.environment.depth(), 1);
}

#[test]
fn test_environment_lookup_is_innermost_first() {
    let context = SourceContext::default();
    let mut environment = EnvironmentStack::new();
    environment.add_variable("x", Type::U8, context).unwrap();

    environment.push_scope(Scope::new());
    environment.add_variable("x", Type::Bool, context).unwrap();
    assert_eq!(environment.get_variable_type("x", context), Ok(Type::Bool));
    assert!(environment.add_variable("x", Type::I8, context).is_err());

    environment.pop_scope();
    assert_eq!(environment.get_variable_type("x", context), Ok(Type::U8));
    assert!(environment.has_variable("x"));
    assert!(!environment.has_variable("y"));
}

#[test]
fn test_environment_keeps_base_scope() {
    let mut environment = EnvironmentStack::new();

    assert!(environment.pop_scope().is_none());
    assert_eq!(environment.depth(), 1);

    environment.push_scope(Scope::new());
    assert_eq!(environment.depth(), 2);
    assert!(environment.pop_scope().is_some());
    assert_eq!(environment.depth(), 1);
}
