use std::{fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::callable::Callable},
    util::num::format_number,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a variable can hold, an expression can
/// produce and a function can return. Values are cheap to clone: strings and
/// callables are reference counted.
#[derive(Clone)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A native function or a user-defined closure.
    Callable(Rc<dyn Callable>),
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Number(n) => Self::Number(n),
            LiteralValue::String(s) => Self::String(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl Value {
    /// Maps the value to a boolean for use in conditions.
    ///
    /// `nil` and `false` are falsy; every other value, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Extracts the number, or fails with an operand error.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::OperandMustBeNumber { line }),
        }
    }

}

/// Structural equality without coercion.
///
/// Values of different kinds are never equal. Numbers compare by value (so
/// `NaN` is not equal to itself), strings by content and callables by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Callable(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            _ => write!(f, "{self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_has_no_cross_kind_coercion() {
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_eq!(Value::Nil, Value::Nil);
        assert_eq!(Value::from("ab"), Value::from("ab"));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::from("raw text").to_string(), "raw text");
    }
}
