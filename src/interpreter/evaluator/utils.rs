use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Extracts both operands of a binary operator as numbers.
///
/// # Errors
/// Returns `RuntimeError::OperandsMustBeNumbers` unless both are numbers.
pub fn number_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}
