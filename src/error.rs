/// Scanning errors.
///
/// Defines the errors raised while turning source text into tokens. They are
/// recorded without stopping the scan, so one pass can surface every bad
/// character and unterminated string in a file.
pub mod scan_error;
/// Parsing errors.
///
/// Defines the error raised when the token stream violates the grammar, along
/// with the location (end of input or offending lexeme) it is reported at.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution,
/// such as undefined variables, operand type mismatches, arity mismatches and
/// calls to values that are not callable.
pub mod runtime_error;
/// Diagnostics collection.
///
/// Gathers the errors of every pipeline stage into a single value that decides
/// the outcome (and exit code) of a run.
pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use parse_error::{ErrorLocation, ParseError};
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;
