use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The left operand is always evaluated. `or` yields it when truthy and
    /// `and` yields it when falsy; otherwise the right operand is evaluated and
    /// yielded. The result is an operand value, not a coerced boolean.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr)
                               -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        match op {
            LogicalOperator::Or if left.is_truthy() => Ok(left),
            LogicalOperator::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(right),
        }
    }
}
