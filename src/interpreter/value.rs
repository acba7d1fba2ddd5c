/// Object values.
///
/// Defines `ObjectValue`, an insertion-ordered mapping from string keys to
/// values, produced by object literals.
pub mod object;
/// Function values.
///
/// Defines host-provided native functions and interpreted user functions,
/// including the scope a user function captures at declaration.
pub mod function;

pub mod core;
