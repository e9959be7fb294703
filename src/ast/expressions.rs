use crate::SourceContext;

/// Expression nodes. Every variant owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Addition(AdditionExpr),
    Negation(NegationExpr),
    Equal(EqualExpr),
    NotEqual(NotEqualExpr),
    FunctionCall(FunctionCallExpr),
    Identifier(IdentifierExpr),
    UnsignedInt(UnsignedIntExpr),
    Bool(BoolExpr),
}

impl Expr {
    pub fn context(&self) -> SourceContext {
        match self {
            Expr::Addition(expr) => expr.context,
            Expr::Negation(expr) => expr.context,
            Expr::Equal(expr) => expr.context,
            Expr::NotEqual(expr) => expr.context,
            Expr::FunctionCall(expr) => expr.context,
            Expr::Identifier(expr) => expr.context,
            Expr::UnsignedInt(expr) => expr.context,
            Expr::Bool(expr) => expr.context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationExpr {
    pub expression: Box<Expr>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEqualExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpr {
    pub value: String,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedIntExpr {
    pub value: u8,
    pub context: SourceContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolExpr {
    pub value: bool,
    pub context: SourceContext,
}
