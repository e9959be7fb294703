/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, Function and Parameter
/// - expressions: Expression nodes
/// - statements: Statement nodes
/// - types: Static types used in annotations and by the type checker
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
