use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::{callable::Callable, core::Value},
    },
};

/// A function declared in the program, paired with its closure.
///
/// Each call runs the body in a fresh scope enclosed by the closure, with
/// the parameters bound to the arguments.
pub struct UserFunction {
    declaration: Rc<FunctionDef>,
    closure:     Rc<Environment>,
}

impl UserFunction {
    /// Creates a function from its declaration and defining scope.
    #[must_use]
    pub const fn new(declaration: Rc<FunctionDef>, closure: Rc<Environment>) -> Self {
        Self { declaration,
               closure }
    }
}

impl Callable for UserFunction {
    fn name(&self) -> &str {
        &self.declaration.name
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self,
            interpreter: &mut Interpreter<'_>,
            arguments: Vec<Value>,
            _line: usize)
            -> EvalResult<Value> {
        let scope = Environment::new_enclosed(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            scope.define(param.as_str(), argument);
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(scope))? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}

impl fmt::Display for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name)
    }
}
