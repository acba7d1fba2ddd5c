use thiserror::Error;

/// Lexical errors.
///
/// Raised while turning source text into tokens. The lexer stops at the first
/// character it does not recognise.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token stream: unexpected tokens, missing delimiters, malformed
/// declarations and invalid member access targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the scope resolution errors raised by the environment and the
/// evaluation errors raised while walking the syntax tree.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{EvalError, ResolutionError};

/// Any error that can abort running a piece of source text.
///
/// Each phase has its own error type; this enum lets the public entry points
/// compose all of them with `?`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}

impl From<ResolutionError> for Error {
    fn from(error: ResolutionError) -> Self {
        Self::Eval(EvalError::Resolution(error))
    }
}
