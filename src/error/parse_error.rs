use thiserror::Error;

use crate::error::LexError;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer rejected the source before parsing could begin.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found a token other than the one the grammar requires.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `const` declaration was terminated before an initializer.
    #[error("Error on line {line}: Constant '{name}' must be assigned a value.")]
    ConstantWithoutInitializer {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right-hand side of `.` was not an identifier.
    #[error("Error on line {line}: Cannot use dot operator without an identifier on the right.")]
    InvalidMemberProperty {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number literal could not be converted to a floating-point value.
    #[error("Error on line {line}: Invalid number literal '{lexeme}'.")]
    InvalidNumber {
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}
