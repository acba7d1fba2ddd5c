use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
            utils::parse_comma_separated,
        },
    },
};

/// Parses a member expression optionally followed by a call.
///
/// Grammar: `call_member := member call?`
pub(crate) fn parse_call_member(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let member = parse_member(cursor)?;

    if cursor.check(TokenKind::OpenParen) {
        return parse_call(cursor, member);
    }

    Ok(member)
}

/// Parses the argument list of a call whose callee has already been parsed.
///
/// Calls chain, so `f(1)(2)` applies the result of `f(1)` to `2`.
///
/// Grammar: `call := arguments call?`
fn parse_call(cursor: &mut TokenCursor<'_>, caller: Expr) -> ParseResult<Expr> {
    let line = cursor.line();
    let arguments = parse_arguments(cursor)?;
    let call = Expr::CallExpr { caller: Box::new(caller),
                                arguments,
                                line };

    if cursor.check(TokenKind::OpenParen) {
        return parse_call(cursor, call);
    }

    Ok(call)
}

/// Parses a parenthesised, comma-separated argument list.
///
/// Each argument is a full expression, so `f(x = 1)` passes the result of an
/// assignment.
///
/// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
fn parse_arguments(cursor: &mut TokenCursor<'_>) -> ParseResult<Vec<Expr>> {
    cursor.expect(TokenKind::OpenParen, "'(' to open argument list")?;
    parse_comma_separated(cursor, parse_expression, TokenKind::CloseParen)
}

/// Parses member access chains.
///
/// `.` must be followed by an identifier and produces a non-computed access;
/// `[` takes any expression up to a mandatory `]` and produces a computed
/// access. Chains associate to the left: `a.b[c]` is `(a.b)[c]`.
///
/// Grammar:
/// ```text
///     member := primary ("." identifier | "[" expression "]")*
/// ```
///
/// # Errors
/// - `InvalidMemberProperty` when the token after `.` is not an identifier.
///   A parenthesised name such as `a.(b)` is rejected as well.
/// - `UnexpectedToken` when `]` is missing.
fn parse_member(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut object = parse_primary(cursor)?;

    while cursor.check(TokenKind::Dot) || cursor.check(TokenKind::OpenBracket) {
        let line = cursor.line();
        let computed = cursor.check(TokenKind::OpenBracket);
        cursor.advance();

        let property = if computed {
            let property = parse_expression(cursor)?;
            cursor.expect(TokenKind::CloseBracket, "']' after computed member")?;
            property
        } else {
            let token = cursor.expect(TokenKind::Identifier, "identifier after '.'")
                              .map_err(|_| ParseError::InvalidMemberProperty { line })?;
            Expr::Identifier { symbol: token.value.clone(),
                               line:   token.line, }
        };

        object = Expr::MemberExpr { object: Box::new(object),
                                    property: Box::new(property),
                                    computed,
                                    line };
    }

    Ok(object)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := identifier
///              | number
///              | "(" expression ")"
/// ```
///
/// Parentheses only group; they do not appear in the tree.
///
/// # Errors
/// Returns a `ParseError` for any other token, or when the closing `)` is
/// missing.
pub(crate) fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let token = cursor.peek()
                      .ok_or_else(|| ParseError::UnexpectedEndOfInput { line: cursor.line() })?;

    match token.kind {
        TokenKind::Identifier => {
            cursor.advance();
            Ok(Expr::Identifier { symbol: token.value.clone(),
                                  line:   token.line, })
        },
        TokenKind::Number => {
            cursor.advance();
            let value = token.value
                             .parse::<f64>()
                             .map_err(|_| ParseError::InvalidNumber { lexeme: token.value.clone(),
                                                                      line:   token.line, })?;
            Ok(Expr::NumericLiteral { value,
                                      line: token.line })
        },
        TokenKind::OpenParen => {
            cursor.advance();
            let value = parse_expression(cursor)?;
            cursor.expect(TokenKind::CloseParen,
                          "')' to close parenthesised expression")?;
            Ok(value)
        },
        TokenKind::EndOfFile => Err(ParseError::UnexpectedEndOfInput { line: token.line }),
        _ => Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                               found:    token.to_string(),
                                               line:     token.line, }),
    }
}
