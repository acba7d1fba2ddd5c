use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// The lexical grammar is deliberately small: single-character punctuation,
/// the five arithmetic operators, runs of decimal digits and runs of letters.
/// A letter is any Unicode letter, so `café` is one identifier. Letter runs
/// become keywords when they spell one exactly and identifiers otherwise.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// A run of decimal digits such as `42`. No sign, fraction or exponent.
    #[regex(r"[0-9]+")]
    Number,
    /// A run of letters such as `total` or `größe`. Digits and underscores
    /// end the run.
    #[regex(r"\p{L}+")]
    Identifier,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// One of `+`, `-`, `*`, `/` or `%`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    BinaryOperator,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never matched from source text.
    EndOfFile,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:  TokenKind,
    /// The lexeme, verbatim. `EndOfFile` carries the text `EndOfFile`.
    pub value: String,
    /// Line on which the token starts.
    pub line:  usize,
}

impl Token {
    /// Creates a token from its kind, text and line.
    #[must_use]
    pub fn new(kind: TokenKind, value: &str, line: usize) -> Self {
        Self { kind,
               value: value.to_string(),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "end of file"),
            kind => write!(f, "{kind:?}('{}')", self.value),
        }
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// The sequence always ends with a single [`TokenKind::EndOfFile`] token.
/// Whitespace produces no tokens. Numeric text is kept verbatim; the parser
/// converts it to a number.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] for the first character that is
/// not part of the lexical grammar. No partial token list is returned.
///
/// # Example
/// ```
/// use ember::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12+3*4").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Number,
///                 TokenKind::BinaryOperator,
///                 TokenKind::Number,
///                 TokenKind::BinaryOperator,
///                 TokenKind::Number,
///                 TokenKind::EndOfFile]);
/// assert_eq!(tokens[0].value, "12");
///
/// assert!(tokenize("let x = 1.5 # comment").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), lexer.extras.line)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnrecognizedCharacter { character,
                                                             line: lexer.extras.line });
            },
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    tokens.push(Token::new(TokenKind::EndOfFile, "EndOfFile", lexer.extras.line));
    Ok(tokens)
}
