use std::fmt;

use crate::interpreter::{
    evaluator::core::{EvalResult, Interpreter},
    value::core::Value,
};

/// A value that can be called with `(...)`.
///
/// Implemented by host-provided native functions and by user-defined
/// functions paired with their closure environment. The evaluator checks the
/// argument count against [`arity`](Callable::arity) before calling
/// [`call`](Callable::call), so implementations may assume it matches.
///
/// The `Display` implementation is what `print` shows for the function.
pub trait Callable: fmt::Display {
    /// The name the function was declared or registered under.
    fn name(&self) -> &str;

    /// The exact number of arguments the function requires.
    fn arity(&self) -> usize;

    /// Invokes the function.
    ///
    /// # Parameters
    /// - `interpreter`: The running interpreter, used to execute bodies.
    /// - `arguments`: The evaluated arguments, `arity()` of them.
    /// - `line`: Line of the call for error reporting.
    fn call(&self,
            interpreter: &mut Interpreter<'_>,
            arguments: Vec<Value>,
            line: usize)
            -> EvalResult<Value>;
}
