/// Built-in function implementations.
///
/// Contains the native functions every program starts with.
pub mod builtin;
/// Call evaluation and the native function table.
pub mod core;
/// User-defined functions and their closures.
pub mod user;
