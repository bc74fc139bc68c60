use std::{fmt, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Interpreter},
            function::{builtin, user::UserFunction},
        },
        value::{callable::Callable, core::Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number
/// of the call.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A function implemented by the host.
///
/// Natives live in the global scope under their name and display as
/// `<native fn>`.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name:  &'static str,
    arity: usize,
    func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table of natives that
/// `define_builtins` installs in the global scope.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[NativeFunction] = &[
            $(
                NativeFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "clock" => { arity: 0, func: builtin::clock },
}

/// Binds every native function in `globals`.
pub fn define_builtins(globals: &Environment) {
    for native in BUILTIN_TABLE {
        globals.define(native.name, Value::Callable(Rc::new(*native)));
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self,
            _interpreter: &mut Interpreter<'_>,
            arguments: Vec<Value>,
            line: usize)
            -> EvalResult<Value> {
        (self.func)(&arguments, line)
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}

impl Interpreter<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must be callable. The arguments are
    /// then evaluated left to right, their count is checked against the
    /// callee's arity and the callee is invoked.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value returned by the function.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let Value::Callable(function) = self.evaluate(callee)? else {
            return Err(RuntimeError::NotCallable { line });
        };

        let arg_vals = arguments.iter()
                                .map(|arg| self.evaluate(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        if arg_vals.len() != function.arity() {
            return Err(RuntimeError::ArityMismatch { expected: function.arity(),
                                                     found: arg_vals.len(),
                                                     line });
        }

        tracing::trace!(function = function.name(), arguments = arg_vals.len(), line, "call");
        function.call(self, arg_vals, line)
    }

    /// Binds a function declaration in the current scope.
    ///
    /// The function captures the current scope as its closure, so it sees
    /// every binding visible where it was declared, including later updates
    /// to them and its own name.
    pub(crate) fn declare_function(&mut self, def: &Rc<FunctionDef>) {
        let function = UserFunction::new(Rc::clone(def), Rc::clone(self.environment()));
        self.environment()
            .define(def.name.clone(), Value::Callable(Rc::new(function)));
    }
}
