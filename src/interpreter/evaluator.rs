/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the expression dispatch and program
/// evaluation.
pub mod core;

/// Statement evaluation.
///
/// Implements variable and function declarations and assignment.
pub mod statement;

/// Binary operator evaluation.
///
/// Implements the five arithmetic operators on numbers.
pub mod binary;

/// Object literal evaluation.
///
/// Builds object values, resolving shorthand properties from scope.
pub mod object;

/// Function call evaluation.
///
/// Dispatches calls to native and user-defined functions and manages call
/// scopes.
pub mod call;

/// Host-provided functions.
///
/// The default native bindings registered in the global scope.
pub mod native;
