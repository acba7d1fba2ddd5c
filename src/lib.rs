//! # ember
//!
//! ember is a small expression-oriented scripting language with a
//! tree-walking interpreter written in Rust. Source text is tokenized,
//! parsed by a recursive-descent parser, and evaluated against a chain of
//! lexical scopes.
//!
//! ```
//! use ember::{Value, run};
//!
//! let result = run("let width = 4; const height = 3; width * height").unwrap();
//! assert_eq!(result, Value::Number(12.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per syntactic construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches line numbers and messages for user feedback.
/// - Converts phase errors into the crate-wide [`Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, evaluation and value
/// representations.
pub mod interpreter;

pub use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::Interpreter,
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse,
        value::core::Value,
    },
};

/// Evaluates `source` in a fresh interpreter and returns the value of its
/// last statement.
///
/// The interpreter starts with the builtin constants `true`, `false` and
/// `null` and the default native functions.
///
/// # Errors
/// Returns the first lexical, syntax or evaluation error.
///
/// # Examples
/// ```
/// use ember::{Error, Value, run};
///
/// assert_eq!(run("let x = 5; x").unwrap(), Value::Number(5.0));
///
/// // Constants cannot be reassigned.
/// assert!(matches!(run("const x = 1; x = 2;"), Err(Error::Eval(_))));
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    Interpreter::new().run(source)
}
