use std::collections::HashMap;

use log::trace;

use crate::{ast::types::Type, errors::errors::TypecheckError, SourceContext};

/// The variables and user-defined types of one lexical block.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    pub variable_lookup: HashMap<String, Type>,
    pub type_lookup: HashMap<String, Type>, // User defined types
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn declare_variable(
        &mut self,
        variable_name: &str,
        variable_type: Type,
        context: SourceContext,
    ) -> Result<(), TypecheckError> {
        if self.variable_lookup.contains_key(variable_name) {
            Err(TypecheckError::AlreadyDefinedVariable {
                name: String::from(variable_name),
                context,
            })
        } else {
            self.variable_lookup
                .insert(String::from(variable_name), variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Type> {
        self.variable_lookup.get(variable_name)
    }

    pub fn get_type(&self, type_name: &str) -> Option<&Type> {
        self.type_lookup.get(type_name)
    }
}

/// Stack of open scopes. There is always at least the base scope, so the
/// innermost scope is held apart from the ones enclosing it.
#[derive(Debug, Default)]
pub struct EnvironmentStack {
    current: Scope,
    enclosing: Vec<Scope>,
}

impl EnvironmentStack {
    /// A stack holding only an empty base scope.
    pub fn new() -> Self {
        EnvironmentStack::default()
    }

    pub fn push_scope(&mut self, scope: Scope) {
        let previous = std::mem::replace(&mut self.current, scope);
        self.enclosing.push(previous);
        trace!("pushed scope, depth {}", self.depth());
    }

    /// Pops the innermost scope. The base scope is never popped.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        let previous = self.enclosing.pop()?;
        let popped = std::mem::replace(&mut self.current, previous);
        trace!("popped scope, depth {}", self.depth());
        Some(popped)
    }

    /// Number of open scopes, the base scope included.
    pub fn depth(&self) -> usize {
        self.enclosing.len() + 1
    }

    /// Open scopes, innermost first.
    fn scopes(&self) -> impl Iterator<Item = &Scope> {
        std::iter::once(&self.current).chain(self.enclosing.iter().rev())
    }

    /// Declares `name` in the innermost scope. Names of enclosing scopes may
    /// be shadowed; a second declaration in the same scope is an error.
    pub fn add_variable(
        &mut self,
        name: &str,
        var_type: Type,
        context: SourceContext,
    ) -> Result<(), TypecheckError> {
        self.current.declare_variable(name, var_type, context)
    }

    /// Binds `name` in the innermost scope, replacing any earlier binding.
    pub fn set_variable(&mut self, name: &str, var_type: Type) {
        self.current
            .variable_lookup
            .insert(String::from(name), var_type);
    }

    pub fn has_variable_in_current_scope(&self, name: &str) -> bool {
        self.current.get_variable(name).is_some()
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.scopes().any(|scope| scope.get_variable(name).is_some())
    }

    /// Type of the innermost binding of `name`.
    pub fn get_variable_type(
        &self,
        name: &str,
        context: SourceContext,
    ) -> Result<Type, TypecheckError> {
        self.scopes()
            .find_map(|scope| scope.get_variable(name))
            .cloned()
            .ok_or_else(|| TypecheckError::UndefinedVariable {
                name: String::from(name),
                context,
            })
    }

    pub fn add_type(&mut self, name: &str, udt: Type) {
        self.current.type_lookup.insert(String::from(name), udt);
    }

    pub fn get_type(&self, name: &str, context: SourceContext) -> Result<Type, TypecheckError> {
        self.scopes()
            .find_map(|scope| scope.get_type(name))
            .cloned()
            .ok_or_else(|| TypecheckError::UndefinedType {
                type_: Type::TypeIdentifier(String::from(name)),
                context,
            })
    }
}
