use std::{io::Write, mem, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::function::core::define_builtins,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished executing.
///
/// `Return` carries the returned value outwards through enclosing blocks and
/// loops until the function call that owns it turns it back into a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` statement ran with this value.
    Return(Value),
}

/// Stores the runtime state of a program.
///
/// The interpreter points at the scope currently executing, which is the
/// global scope whenever no block or call is running, and writes `print`
/// output to the sink it was created with. A single interpreter can run
/// several programs in turn; globals persist between them, which is what the
/// REPL relies on.
///
/// ## Usage
///
/// ```
/// use treelox::{
///     error::Diagnostics,
///     interpreter::{evaluator::core::Interpreter, lexer::scan_tokens, parser::core::Parser},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan_tokens("var a = 1; print a + 2;", &mut diagnostics);
/// let statements = Parser::new(&tokens).parse(&mut diagnostics);
///
/// let mut out = Vec::new();
/// Interpreter::new(&mut out).interpret(&statements).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3\n");
/// ```
pub struct Interpreter<'out> {
    environment: Rc<Environment>,
    out:         &'out mut dyn Write,
}

impl<'out> Interpreter<'out> {
    /// Creates an interpreter whose global scope holds the native functions.
    ///
    /// # Parameters
    /// - `out`: Sink receiving the output of `print` statements.
    #[must_use]
    pub fn new(out: &'out mut dyn Write) -> Self {
        let globals = Environment::new();
        define_builtins(&globals);
        Self { environment: Rc::new(globals),
               out }
    }

    /// The output sink.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Writes one line of output, tagging write failures with `line`.
    pub(crate) fn emit(&mut self, line: usize, text: impl std::fmt::Display) -> EvalResult<()> {
        writeln!(self.out, "{text}").map_err(|source| RuntimeError::Output { source, line })
    }

    /// Executes a program.
    ///
    /// Statements run in order until one fails; the first runtime error
    /// aborts the rest of the program. A `return` outside any function stops
    /// the program without an error.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised.
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            if let Flow::Return(_) = self.execute(statement)? {
                tracing::debug!(line = statement.line_number(), "return at top level");
                break;
            }
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value produced by the expression.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value.clone())),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => {
                let value = self.evaluate(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Variable { name, line } => self.environment.get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
        }
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Flow::Return` when a `return` statement ran, `Flow::Normal`
    /// otherwise.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            },
            Statement::Print { expr, line } => self.exec_print(expr, *line),
            Statement::Var { name,
                             initializer,
                             .. } => self.exec_var(name, initializer.as_ref()),
            Statement::Block { statements, .. } => {
                let scope = Environment::new_enclosed(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(scope))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.exec_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::Function(def) => {
                self.declare_function(def);
                Ok(Flow::Normal)
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes `statements` inside `environment`.
    ///
    /// The previous environment is restored afterwards, whether the block
    /// finished normally, returned or failed.
    ///
    /// # Parameters
    /// - `statements`: The statements to execute in order.
    /// - `environment`: The scope to execute them in.
    pub fn execute_block(&mut self,
                         statements: &[Statement],
                         environment: Rc<Environment>)
                         -> EvalResult<Flow> {
        tracing::trace!(statements = statements.len(), "enter block");
        let previous = mem::replace(&mut self.environment, environment);
        let result = self.execute_all(statements);
        self.environment = previous;
        result
    }

    fn execute_all(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let flow @ Flow::Return(_) = self.execute(statement)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// The scope currently executing.
    pub(crate) const fn environment(&self) -> &Rc<Environment> {
        &self.environment
    }
}
