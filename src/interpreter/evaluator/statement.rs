use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `expr` and writes its display text and a newline.
    pub(crate) fn exec_print(&mut self, expr: &Expr, line: usize) -> EvalResult<Flow> {
        let value = self.evaluate(expr)?;
        self.emit(line, value)?;
        Ok(Flow::Normal)
    }

    /// Defines `name` in the current scope, `nil` without an initializer.
    pub(crate) fn exec_var(&mut self, name: &str, initializer: Option<&Expr>) -> EvalResult<Flow> {
        let value = match initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };
        tracing::trace!(name, value = %value, "define");
        self.environment().define(name, value);
        Ok(Flow::Normal)
    }

    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          then_branch: &Statement,
                          else_branch: Option<&Statement>)
                          -> EvalResult<Flow> {
        if self.evaluate(condition)?.is_truthy() {
            self.execute(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute(else_branch)
        } else {
            Ok(Flow::Normal)
        }
    }

    /// Runs `body` while `condition` is truthy, stopping early on `return`.
    pub(crate) fn exec_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<Flow> {
        while self.evaluate(condition)?.is_truthy() {
            if let flow @ Flow::Return(_) = self.execute(body)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}
