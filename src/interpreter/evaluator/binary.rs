/// Operator dispatch.
pub mod core;

/// Arithmetic operators and string concatenation.
pub mod arithmetic;

/// Ordering and equality comparisons.
pub mod comparison;

/// Short-circuiting `and` / `or`.
pub mod logic;
