/// Callable values.
///
/// Defines the `Callable` capability shared by native functions and
/// user-defined closures: report an arity and be invoked with arguments.
pub mod callable;

pub mod core;
