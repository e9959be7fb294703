use thiserror::Error;

use crate::{ast::types::Type, lexer::tokens::TokenKind, SourceContext};

/// Errors raised while scanning. The first one aborts the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("At line {line}, column {column}: Unrecognized syntax. There is no valid token that starts with `{character}`.")]
    UnrecognizedToken {
        line: usize,
        column: usize,
        character: char,
    },
    #[error("At line {line}, column {column}: The only whitespace that is allowed at the beginning of a line is one or more indentations and each must be made of four spaces. Whitespace count at this line is {space_count} which is not a multiple of 4.")]
    UnevenIndentation {
        line: usize,
        column: usize,
        space_count: usize,
    },
}

impl ScanError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ScanError::UnrecognizedToken { .. } => "UnrecognizedToken",
            ScanError::UnevenIndentation { .. } => "UnevenIndentation",
        }
    }

    pub fn context(&self) -> SourceContext {
        match self {
            ScanError::UnrecognizedToken { line, column, .. }
            | ScanError::UnevenIndentation { line, column, .. } => {
                SourceContext::new(*line, *column)
            }
        }
    }
}

/// Errors raised while parsing. The first one aborts the parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("At line {}, column {}: Unexpected token. Expected {} but received {got}.", .context.line, .context.column, describe_expected(.expected))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        got: TokenKind,
        context: SourceContext,
    },
    #[error("At line {}, column {}: Integer literal {lexeme} does not fit in 8 bits.", .context.line, .context.column)]
    NumberOutOfRange {
        lexeme: String,
        context: SourceContext,
    },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NumberOutOfRange { .. } => "NumberOutOfRange",
        }
    }

    pub fn context(&self) -> SourceContext {
        match self {
            ParseError::UnexpectedToken { context, .. }
            | ParseError::NumberOutOfRange { context, .. } => *context,
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [single] => single.to_string(),
        _ => format!(
            "one of {}",
            expected
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        ),
    }
}

/// Static typing errors.
///
/// These are values, not aborts: a block checks every statement and returns
/// the failures of all of them wrapped in `Combined`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypecheckError {
    #[error("At line {}, column {}: Expected type {expected}. Received type {received}.", .context.line, .context.column)]
    TypeMismatch {
        expected: Type,
        received: Type,
        context: SourceContext,
    },
    #[error("At line {}, column {}: Expected numerical type. Received type {got}.", .context.line, .context.column)]
    ExpectedNumericalType { got: Type, context: SourceContext },
    #[error("At line {}, column {}: Undefined variable {name}.", .context.line, .context.column)]
    UndefinedVariable { name: String, context: SourceContext },
    #[error("At line {}, column {}: Undefined type {type_}.", .context.line, .context.column)]
    UndefinedType { type_: Type, context: SourceContext },
    #[error("At line {}, column {}: Variable `{name}` is already defined.", .context.line, .context.column)]
    AlreadyDefinedVariable { name: String, context: SourceContext },
    #[error("At line {}, column {}: Function `{function_name}` return type is {expected}, but there is no return statement inside it.", .context.line, .context.column)]
    NoReturn {
        expected: Type,
        function_name: String,
        context: SourceContext,
    },
    #[error("At line {}, column {}: `{name}` is not a function and cannot be called.", .context.line, .context.column)]
    NotFunctionCall { name: String, context: SourceContext },
    #[error("At line {}, column {}: Function `{name}` takes {expected} arguments, but {got} were given.", .context.line, .context.column)]
    TooManyArguments {
        name: String,
        got: usize,
        expected: usize,
        context: SourceContext,
    },
    #[error("At line {}, column {}: Function `{name}` takes {expected} arguments, but only {got} were given.", .context.line, .context.column)]
    NotEnoughArguments {
        name: String,
        got: usize,
        expected: usize,
        context: SourceContext,
    },
    #[error("{}", combined_message(.0))]
    Combined(Vec<TypecheckError>),
}

impl TypecheckError {
    pub fn get_error_name(&self) -> &str {
        match self {
            TypecheckError::TypeMismatch { .. } => "TypeMismatch",
            TypecheckError::ExpectedNumericalType { .. } => "ExpectedNumericalType",
            TypecheckError::UndefinedVariable { .. } => "UndefinedVariable",
            TypecheckError::UndefinedType { .. } => "UndefinedType",
            TypecheckError::AlreadyDefinedVariable { .. } => "AlreadyDefinedVariable",
            TypecheckError::NoReturn { .. } => "NoReturn",
            TypecheckError::NotFunctionCall { .. } => "NotFunctionCall",
            TypecheckError::TooManyArguments { .. } => "TooManyArguments",
            TypecheckError::NotEnoughArguments { .. } => "NotEnoughArguments",
            TypecheckError::Combined(_) => "Combined",
        }
    }

    /// `None` for `Combined`, which has no position of its own.
    pub fn context(&self) -> Option<SourceContext> {
        match self {
            TypecheckError::TypeMismatch { context, .. }
            | TypecheckError::ExpectedNumericalType { context, .. }
            | TypecheckError::UndefinedVariable { context, .. }
            | TypecheckError::UndefinedType { context, .. }
            | TypecheckError::AlreadyDefinedVariable { context, .. }
            | TypecheckError::NoReturn { context, .. }
            | TypecheckError::NotFunctionCall { context, .. }
            | TypecheckError::TooManyArguments { context, .. }
            | TypecheckError::NotEnoughArguments { context, .. } => Some(*context),
            TypecheckError::Combined(_) => None,
        }
    }

    /// Every non-aggregate error, in source order, with `Combined` flattened.
    pub fn leaves(&self) -> Vec<&TypecheckError> {
        match self {
            TypecheckError::Combined(errors) => {
                errors.iter().flat_map(|error| error.leaves()).collect()
            }
            _ => vec![self],
        }
    }
}

fn combined_message(errors: &[TypecheckError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Errors raised while emitting assembly for an already checked program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("At line {}, column {}: Variable {name} has no stack slot.", .context.line, .context.column)]
    UnresolvedVariable { name: String, context: SourceContext },
    #[error("At line {}, column {}: Function `{function_name}` needs more stack slots than an IX displacement can reach.", .context.line, .context.column)]
    FrameTooLarge {
        function_name: String,
        context: SourceContext,
    },
    #[error("At line {}, column {}: Function `main` is called with no arguments, so it cannot take parameters.", .context.line, .context.column)]
    MainHasParameters { context: SourceContext },
}

impl CodegenError {
    pub fn get_error_name(&self) -> &str {
        match self {
            CodegenError::UnresolvedVariable { .. } => "UnresolvedVariable",
            CodegenError::FrameTooLarge { .. } => "FrameTooLarge",
            CodegenError::MainHasParameters { .. } => "MainHasParameters",
        }
    }

    pub fn context(&self) -> SourceContext {
        match self {
            CodegenError::UnresolvedVariable { context, .. }
            | CodegenError::FrameTooLarge { context, .. }
            | CodegenError::MainHasParameters { context } => *context,
        }
    }
}

/// The error of whichever stage stopped the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Typecheck(#[from] TypecheckError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl CompileError {
    pub fn get_error_name(&self) -> &str {
        match self {
            CompileError::Scan(error) => error.get_error_name(),
            CompileError::Parse(error) => error.get_error_name(),
            CompileError::Typecheck(error) => error.get_error_name(),
            CompileError::Codegen(error) => error.get_error_name(),
        }
    }

    pub fn contexts(&self) -> Vec<SourceContext> {
        match self {
            CompileError::Scan(error) => vec![error.context()],
            CompileError::Parse(error) => vec![error.context()],
            CompileError::Typecheck(error) => error
                .leaves()
                .iter()
                .filter_map(|leaf| leaf.context())
                .collect(),
            CompileError::Codegen(error) => vec![error.context()],
        }
    }
}
