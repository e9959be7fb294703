use std::slice::Iter;

use crate::SourceContext;

use super::{expressions::Expr, types::Type};

/// Statement nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Block(BlockStmt),
    If(IfStmt),
    Print(PrintStmt),
    Let(LetStmt),
    Assignment(AssignmentStmt),
    Return(ReturnStmt),
    Expression(Expr),
}

impl Stmt {
    pub fn context(&self) -> SourceContext {
        match self {
            Stmt::Block(stmt) => stmt.context,
            Stmt::If(stmt) => stmt.context,
            Stmt::Print(stmt) => stmt.context,
            Stmt::Let(stmt) => stmt.context,
            Stmt::Assignment(stmt) => stmt.context,
            Stmt::Return(stmt) => stmt.context,
            Stmt::Expression(expr) => expr.context(),
        }
    }
}

/// An indented run of statements. Opens its own scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub context: SourceContext,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    /// Always a block when produced by the parser.
    pub consequence: Box<Stmt>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintStmt {
    pub expression: Expr,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStmt {
    pub identifier: String,
    pub var_type: Type,
    pub value: Expr,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub context: SourceContext,
}
