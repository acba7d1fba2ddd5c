use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// The opening delimiter must already be consumed. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    cursor: &mut TokenCursor<'_>,
    parse_item: impl Fn(&mut TokenCursor<'_>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if cursor.check(closing) {
        cursor.advance();
        return Ok(items);
    }

    loop {
        items.push(parse_item(cursor)?);
        match cursor.peek() {
            Some(token) if token.kind == TokenKind::Comma => {
                cursor.advance();
            },
            Some(token) if token.kind == closing => {
                cursor.advance();
                break;
            },
            Some(token) => {
                return Err(ParseError::UnexpectedToken { expected: format!("',' or {closing:?}"),
                                                         found:    token.to_string(),
                                                         line:     token.line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: cursor.line() }),
        }
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut TokenCursor<'_>,
                                                        context: &str)
                                                        -> ParseResult<String> {
    let token = cursor.expect(TokenKind::Identifier, context)?;
    Ok(token.value.clone())
}
