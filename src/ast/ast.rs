use crate::SourceContext;

use super::{statements::BlockStmt, types::Type};

/// Root of the tree: every function of the compile unit, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<Function>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: BlockStmt,
    pub context: SourceContext,
}

impl Function {
    /// The callable type other functions see when calling this one.
    pub fn signature(&self) -> Type {
        Type::callable(
            self.return_type.clone(),
            self.parameters.iter().map(|parameter| parameter.param_type.clone()).collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
    pub context: SourceContext,
}
