/// Parser entry points and the upper precedence levels.
///
/// Contains `parse`, the program loop, and the assignment and object-literal
/// levels of the expression grammar.
pub mod core;

/// Read position over the token buffer.
///
/// Provides one-token lookahead and consumption without mutating the buffer.
pub mod cursor;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Call, member and primary expression parsing.
///
/// Handles `f(x)`, curried calls `f(x)(y)`, `a.b`, `a[b]`, identifiers,
/// numbers and parenthesised groups.
pub mod member;

/// Utility functions for the parser.
///
/// Shared helpers for comma-separated lists and identifiers.
pub mod utils;

/// Statement parsing.
///
/// Implements `let`/`const` declarations and expression statements.
pub mod statement;
