use std::io;

use thiserror::Error;

/// Represents all errors that can occur during evaluation and runtime.
///
/// A runtime error unwinds evaluation up to the top-level statement loop and
/// halts the rest of the program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Read or assigned a variable that no enclosing scope defines.
    #[error("[line {line}] Error: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator required a number.
    #[error("[line {line}] Error: Operand must be a number.")]
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic or ordering operator required two numbers.
    #[error("[line {line}] Error: Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` was applied to anything other than two numbers or two strings.
    #[error("[line {line}] Error: Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not a function.
    #[error("[line {line}] Error: Can only call functions.")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("[line {line}] Error: Expected {expected} arguments but got {found}.")]
    ArityMismatch {
        /// The arity of the callee.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The system clock could not be read.
    #[error("[line {line}] Error: System clock is set before the Unix epoch.")]
    ClockUnavailable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing `print` output failed.
    #[error("[line {line}] Error: Failed to write output: {source}")]
    Output {
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}
