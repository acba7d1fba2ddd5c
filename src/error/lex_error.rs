use thiserror::Error;

/// Represents all errors that can occur during tokenization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not part of the lexical grammar.
    #[error("Error on line {line}: Unrecognized character '{character}' found in source.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}
