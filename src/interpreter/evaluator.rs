/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality, plus
/// the short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the expression and statement dispatchers and
/// the control-flow signal used to unwind `return`.
pub mod core;

/// Statement execution.
///
/// Covers `print`, variable declarations, blocks, `if` and `while`.
pub mod statement;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the operator implementations.
pub mod utils;

/// Function evaluation.
///
/// Handles calls, native functions and user-defined closures.
pub mod function;
