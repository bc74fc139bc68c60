use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// - `Negate`: numeric negation; any other operand fails.
    /// - `Not`: the negated truthiness of any value.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Negate, &Value::from("x"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
