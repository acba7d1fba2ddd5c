use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// A read position inside an immutable token buffer.
///
/// Parsing never removes tokens; consuming a token only moves the position
/// forward. The buffer is expected to end with a [`TokenKind::EndOfFile`]
/// token, which is never consumed by the statement loop.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Returns the kind of the current token without consuming it.
    #[must_use]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Whether the current token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Whether only the end-of-file marker (or nothing) is left.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek_kind().map_or(true, |kind| kind == TokenKind::EndOfFile)
    }

    /// Line of the current token, or of the last token once the buffer is
    /// exhausted.
    #[must_use]
    pub fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |token| token.line)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the current token has another kind. `expected`
    ///   describes what was required and appears in the message.
    /// - `UnexpectedEndOfInput` if the buffer is exhausted.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.position += 1;
                Ok(token)
            },
            Some(token) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                             found:    token.to_string(),
                                                             line:     token.line, }),
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }
}
