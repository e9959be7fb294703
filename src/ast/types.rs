//! Type representations shared by the parser and the type checker.

use std::fmt::Display;

/// A static type. Compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    U8,
    /// Signed 8-bit. Only produced by negation.
    I8,
    Bool,
    /// Type of an integer literal that has not been pinned to U8 or I8 yet.
    NumberLiteral,
    /// A named type that has not been resolved against the environment.
    TypeIdentifier(String),
    Callable {
        return_type: Box<Type>,
        parameter_types: Vec<Type>,
    },
}

impl Type {
    pub fn callable(return_type: Type, parameter_types: Vec<Type>) -> Self {
        Type::Callable {
            return_type: Box::new(return_type),
            parameter_types,
        }
    }

    /// U8, I8 and untyped literals take part in arithmetic.
    pub fn is_numerical(&self) -> bool {
        matches!(self, Type::U8 | Type::I8 | Type::NumberLiteral)
    }

    /// Literals default to U8 once nothing else pins them.
    pub fn defaulted(self) -> Type {
        match self {
            Type::NumberLiteral => Type::U8,
            other => other,
        }
    }

    /// Whether a value of type `received` can be stored where `self` is expected.
    pub fn accepts(&self, received: &Type) -> bool {
        self == received || (*received == Type::NumberLiteral && self.is_numerical())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::U8 => write!(f, "u8"),
            Type::I8 => write!(f, "i8"),
            Type::Bool => write!(f, "bool"),
            Type::NumberLiteral => write!(f, "{{integer}}"),
            Type::TypeIdentifier(name) => write!(f, "{}", name),
            Type::Callable {
                return_type,
                parameter_types,
            } => {
                let parameters = parameter_types
                    .iter()
                    .map(|ty| ty.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "({}) -> {}", parameters, return_type)
            }
        }
    }
}
