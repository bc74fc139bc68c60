use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Interpreter},
        utils::number_operands,
    },
    value::core::Value,
};

impl Interpreter<'_> {
    /// Evaluates `<`, `>`, `<=` or `>=` given as `compare` on two numbers.
    pub(crate) fn eval_ordering(left: &Value,
                                right: &Value,
                                line: usize,
                                compare: fn(f64, f64) -> bool)
                                -> EvalResult<Value> {
        let (a, b) = number_operands(left, right, line)?;
        Ok(Value::Bool(compare(a, b)))
    }

    /// Equality for `==` and `!=`.
    ///
    /// Accepts any operands and never coerces: values of different kinds are
    /// unequal.
    pub(crate) fn values_equal(left: &Value, right: &Value) -> bool {
        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn equality_across_kinds() {
        assert!(Interpreter::values_equal(&Value::Nil, &Value::Nil));
        assert!(!Interpreter::values_equal(&Value::Number(1.0), &Value::from("1")));
        assert!(!Interpreter::values_equal(&Value::Bool(false), &Value::Nil));
    }

    #[test]
    fn ordering_needs_numbers() {
        let at_most = |a: f64, b: f64| a <= b;
        let v = Interpreter::eval_ordering(&Value::Number(2.0), &Value::Number(2.0), 1, at_most);
        assert_eq!(v.unwrap(), Value::Bool(true));

        let err = Interpreter::eval_ordering(&Value::from("a"), &Value::from("b"), 1, |a, b| a < b)
                  .unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsMustBeNumbers { line: 1 }));
    }
}
