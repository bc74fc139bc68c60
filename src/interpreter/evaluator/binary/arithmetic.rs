use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operands,
        },
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `+`: adds two numbers or concatenates two strings.
    ///
    /// # Errors
    /// Any other pairing fails; there is no coercion between kinds.
    pub(crate) fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::String(Rc::from(joined)))
            },
            _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
        }
    }

    /// Evaluates `-`, `*` or `/` given as `apply` on two numbers.
    ///
    /// Division follows IEEE 754, so dividing by zero yields an infinity or
    /// `NaN` rather than an error.
    pub(crate) fn eval_numeric(left: &Value,
                               right: &Value,
                               line: usize,
                               apply: fn(f64, f64) -> f64)
                               -> EvalResult<Value> {
        let (a, b) = number_operands(left, right, line)?;
        Ok(Value::Number(apply(a, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_addition_is_rejected() {
        let err = Interpreter::eval_add(&Value::from("a"), &Value::Number(1.0), 3).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsMustBeNumbersOrStrings { line: 3 }));
    }

    #[test]
    fn division_by_zero_is_infinite() {
        let v = Interpreter::eval_numeric(&Value::Number(1.0), &Value::Number(0.0), 1, |a, b| a / b)
                .unwrap();
        assert_eq!(v, Value::Number(f64::INFINITY));
    }

    #[test]
    fn subtraction_needs_numbers() {
        let err = Interpreter::eval_numeric(&Value::from("a"), &Value::from("b"), 2, |a, b| a - b)
                  .unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsMustBeNumbers { line: 2 }));
    }
}
