use crate::{
    ast::{Expr, Program, Property},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::{binary::parse_additive, cursor::TokenCursor, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes and parses source text into a [`Program`].
///
/// # Errors
/// Returns the first lexical or syntax error. There is no recovery: a failed
/// parse never yields a partial tree.
///
/// # Example
/// ```
/// use ember::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::parser::core::parse,
/// };
///
/// let program = parse("1 + 2 * 3").unwrap();
///
/// let Statement::Expression { expr: Expr::BinaryExpr { operator, right, .. }, .. } =
///     &program.body[0]
/// else {
///     panic!("expected a binary expression");
/// };
/// assert_eq!(*operator, BinaryOperator::Add);
/// assert!(matches!(**right, Expr::BinaryExpr { operator: BinaryOperator::Mul, .. }));
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Parses an already tokenized source.
///
/// Statements are collected until the end-of-file marker is reached.
///
/// Grammar: `program := statement*`
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Program> {
    let mut cursor = TokenCursor::new(tokens);
    let mut body = Vec::new();

    while !cursor.at_end() {
        body.push(parse_statement(&mut cursor)?);
    }

    tracing::debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy:
///
/// ```text
///     assignment      (right-associative)
///     object literal
///     additive        + -
///     multiplicative  * / %
///     call / member   f(x)  a.b  a[b]
///     primary         identifier, number, ( expression )
/// ```
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_assignment(cursor)
}

/// Parses an assignment expression.
///
/// The left side may be any object-level expression; whether it is a valid
/// target is decided during evaluation. Assignment is right-associative, so
/// `a = b = 1` parses as `a = (b = 1)`.
///
/// Grammar: `assignment := object ("=" assignment)?`
pub fn parse_assignment(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let left = parse_object(cursor)?;

    if cursor.check(TokenKind::Equals) {
        let line = cursor.line();
        cursor.advance();
        let value = parse_assignment(cursor)?;

        return Ok(Expr::AssignmentExpr { assignee: Box::new(left),
                                         value: Box::new(value),
                                         line });
    }

    Ok(left)
}

/// Parses an object literal, or falls through to an additive expression when
/// the next token is not `{`.
///
/// Each property is either `key: expression` or the shorthand `key`, which
/// takes its value from the variable of the same name. A trailing comma before
/// `}` is accepted.
///
/// Grammar:
/// ```text
///     object   := "{" (property ("," property)* ","?)? "}"
///               | additive
///     property := identifier (":" expression)?
/// ```
///
/// # Errors
/// Returns a `ParseError` if a key is not an identifier, a `:` or `,` is
/// missing, or the closing `}` never arrives.
pub fn parse_object(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    if !cursor.check(TokenKind::OpenBrace) {
        return parse_additive(cursor);
    }

    let line = cursor.line();
    cursor.advance();
    let mut properties = Vec::new();

    while !cursor.at_end() && !cursor.check(TokenKind::CloseBrace) {
        let key = cursor.expect(TokenKind::Identifier, "object literal key")?;

        // Shorthand: { key, ... } or { key }
        if cursor.check(TokenKind::Comma) {
            cursor.advance();
            properties.push(Property { key:   key.value.clone(),
                                       value: None,
                                       line:  key.line, });
            continue;
        }
        if cursor.check(TokenKind::CloseBrace) {
            properties.push(Property { key:   key.value.clone(),
                                       value: None,
                                       line:  key.line, });
            continue;
        }

        cursor.expect(TokenKind::Colon, "':' after object literal key")?;
        let value = parse_expression(cursor)?;
        properties.push(Property { key:   key.value.clone(),
                                   value: Some(value),
                                   line:  key.line, });

        if !cursor.check(TokenKind::CloseBrace) {
            cursor.expect(TokenKind::Comma, "',' or '}' after object property")?;
        }
    }

    cursor.expect(TokenKind::CloseBrace, "'}' to close object literal")?;
    Ok(Expr::ObjectLiteral { properties,
                             line })
}
