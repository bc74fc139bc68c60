use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the wall-clock time in seconds since the Unix epoch.
///
/// ## Errors
/// Returns `RuntimeError::ClockUnavailable` if the system clock reads
/// earlier than the epoch.
pub fn clock(_args: &[Value], line: usize) -> EvalResult<Value> {
    SystemTime::now().duration_since(UNIX_EPOCH)
                     .map(|elapsed| Value::Number(elapsed.as_secs_f64()))
                     .map_err(|_| RuntimeError::ClockUnavailable { line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_seconds_since_epoch() {
        let Value::Number(now) = clock(&[], 1).unwrap() else {
            panic!("clock must return a number");
        };
        // 2020-01-01T00:00:00Z
        assert!(now > 1_577_836_800.0);
    }
}
