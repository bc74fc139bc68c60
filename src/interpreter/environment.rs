use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A lexical scope.
///
/// Holds the bindings declared in the scope and an optional link to the
/// enclosing scope. Lookups and assignments walk outwards through the chain;
/// definitions always land in the scope itself.
///
/// Environments are shared through `Rc`: the interpreter points at the
/// current one while closures keep the one they were declared in.
#[derive(Debug, Default)]
pub struct Environment {
    values:    RefCell<HashMap<String, Value>>,
    enclosing: Option<Rc<Self>>,
}

impl Environment {
    /// Creates a scope with no enclosing scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope nested inside `enclosing`.
    #[must_use]
    pub fn new_enclosed(enclosing: Rc<Self>) -> Self {
        Self { values:    RefCell::default(),
               enclosing: Some(enclosing), }
    }

    /// Binds `name` in this scope.
    ///
    /// Redefining a name that already exists in this scope replaces its
    /// value. Bindings in enclosing scopes are shadowed, never touched.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.values.borrow_mut().insert(name.into(), value);
    }

    /// Looks `name` up in this scope, then in each enclosing one.
    ///
    /// ## Errors
    /// Returns `RuntimeError::UndefinedVariable` if no scope in the chain
    /// binds the name.
    ///
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use treelox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let globals = Rc::new(Environment::new());
    /// globals.define("a", Value::Number(1.0));
    ///
    /// let inner = Environment::new_enclosed(Rc::clone(&globals));
    /// assert_eq!(inner.get("a", 1).unwrap(), Value::Number(1.0));
    /// assert!(inner.get("b", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.values.borrow().get(name) {
                return Ok(value.clone());
            }
            match &scope.enclosing {
                Some(enclosing) => scope = enclosing,
                None => return Err(undefined(name, line)),
            }
        }
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// ## Errors
    /// Returns `RuntimeError::UndefinedVariable` if no scope in the chain
    /// binds the name; assignment never creates a binding.
    pub fn assign(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let mut scope = self;
        loop {
            if let Some(slot) = scope.values.borrow_mut().get_mut(name) {
                *slot = value;
                return Ok(());
            }
            match &scope.enclosing {
                Some(enclosing) => scope = enclosing,
                None => return Err(undefined(name, line)),
            }
        }
    }
}

fn undefined(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.to_string(),
                                      line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_overwrites_in_the_same_scope() {
        let env = Environment::new();
        env.define("a", Value::Number(1.0));
        env.define("a", Value::Number(2.0));
        assert_eq!(env.get("a", 1).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn inner_definition_shadows_outer() {
        let outer = Rc::new(Environment::new());
        outer.define("a", Value::from("outer"));
        let inner = Environment::new_enclosed(Rc::clone(&outer));
        inner.define("a", Value::from("inner"));

        assert_eq!(inner.get("a", 1).unwrap(), Value::from("inner"));
        assert_eq!(outer.get("a", 1).unwrap(), Value::from("outer"));
    }

    #[test]
    fn assign_updates_the_nearest_binding() {
        let outer = Rc::new(Environment::new());
        outer.define("a", Value::Number(1.0));
        let inner = Environment::new_enclosed(Rc::clone(&outer));

        inner.assign("a", Value::Number(5.0), 2).unwrap();
        assert_eq!(outer.get("a", 2).unwrap(), Value::Number(5.0));
    }

    #[test]
    fn assign_to_unknown_name_fails() {
        let env = Environment::new();
        let err = env.assign("missing", Value::Nil, 7).unwrap_err();
        let RuntimeError::UndefinedVariable { name, line } = &err else {
            panic!("expected an undefined variable error, got {err:?}");
        };
        assert_eq!((name.as_str(), *line), ("missing", 7));
        assert!(env.get("missing", 7).is_err());
    }
}
