/// Core parser state and the declaration-level entry points.
///
/// Holds the `Parser` struct, the top-level `parse` loop and the error
/// recovery that resynchronizes at statement boundaries.
pub mod core;

/// Unary, call and primary expression parsing.
///
/// Handles the highest-precedence levels: prefix operators, call suffixes and
/// literals, variables and groupings.
pub mod unary;

/// Binary operator parsing.
///
/// Implements assignment and every left-associative binary precedence level,
/// from logical `or` down to multiplication.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement lists used by blocks and function bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Token cursor helpers, expectation checks and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations and statements, including the desugaring of `for`
/// loops into `while` loops.
pub mod statement;
