use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// `+` is routed to `eval_add`, the other arithmetic operators to
    /// `eval_numeric`, ordering operators to `eval_ordering` and equality to
    /// `values_equal`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Number(3.0),
    ///                                    &Value::Number(4.0),
    ///                                    1);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let joined = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       &Value::from("foo"),
    ///                                       &Value::from("bar"),
    ///                                       1);
    /// assert_eq!(joined.unwrap(), Value::from("foobar"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => Self::eval_add(left, right, line),
            Sub => Self::eval_numeric(left, right, line, |a, b| a - b),
            Mul => Self::eval_numeric(left, right, line, |a, b| a * b),
            Div => Self::eval_numeric(left, right, line, |a, b| a / b),
            Less => Self::eval_ordering(left, right, line, |a, b| a < b),
            Greater => Self::eval_ordering(left, right, line, |a, b| a > b),
            LessEqual => Self::eval_ordering(left, right, line, |a, b| a <= b),
            GreaterEqual => Self::eval_ordering(left, right, line, |a, b| a >= b),
            Equal => Ok(Value::Bool(Self::values_equal(left, right))),
            NotEqual => Ok(Value::Bool(!Self::values_equal(left, right))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Interpreter::eval_binary(op, &left, &right, 4)
    }

    #[test]
    fn every_operator_is_dispatched() {
        let (two, three) = (Value::Number(2.0), Value::Number(3.0));
        let cases = [(BinaryOperator::Add, Value::Number(5.0)),
                     (BinaryOperator::Sub, Value::Number(-1.0)),
                     (BinaryOperator::Mul, Value::Number(6.0)),
                     (BinaryOperator::Div, Value::Number(2.0 / 3.0)),
                     (BinaryOperator::Less, Value::Bool(true)),
                     (BinaryOperator::Greater, Value::Bool(false)),
                     (BinaryOperator::LessEqual, Value::Bool(true)),
                     (BinaryOperator::GreaterEqual, Value::Bool(false)),
                     (BinaryOperator::Equal, Value::Bool(false)),
                     (BinaryOperator::NotEqual, Value::Bool(true))];

        for (op, expected) in cases {
            assert_eq!(binary(op, two.clone(), three.clone()).unwrap(), expected, "{op}");
        }
    }

    #[test]
    fn operand_errors_keep_the_operator_line() {
        let err = binary(BinaryOperator::Mul, Value::Nil, Value::Number(1.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsMustBeNumbers { line: 4 }));

        let err = binary(BinaryOperator::GreaterEqual, Value::from("a"), Value::Nil).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsMustBeNumbers { line: 4 }));
    }
}
