use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
            utils::parse_identifier,
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a `let`/`const` declaration or an expression used
/// as a statement. Declarations must end with `;`. Expression statements
/// consume a trailing `;` when one is present, so `x` and `x;` are both
/// complete programs.
///
/// Grammar:
/// ```text
///     statement := declaration
///                | expression ";"?
/// ```
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    match cursor.peek_kind() {
        Some(TokenKind::Let | TokenKind::Const) => parse_var_declaration(cursor),
        _ => {
            let line = cursor.line();
            let expr = parse_expression(cursor)?;
            if cursor.check(TokenKind::Semicolon) {
                cursor.advance();
            }
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses a variable declaration.
///
/// ```text
///     declaration := ("let" | "const") identifier ("=" expression)? ";"
/// ```
///
/// `let x;` declares `x` without an initializer. A `const` must always be
/// initialized.
///
/// # Errors
/// - `ConstantWithoutInitializer` for `const x;`.
/// - `UnexpectedToken` when the name, `=` or the terminating `;` is missing.
fn parse_var_declaration(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let line = cursor.line();
    let constant = cursor.check(TokenKind::Const);
    cursor.advance();

    let identifier = parse_identifier(cursor, "identifier name after let or const")?;

    if cursor.check(TokenKind::Semicolon) {
        cursor.advance();
        if constant {
            return Err(ParseError::ConstantWithoutInitializer { name: identifier,
                                                                line });
        }

        return Ok(Statement::VarDeclaration { identifier,
                                              constant: false,
                                              value: None,
                                              line });
    }

    cursor.expect(TokenKind::Equals, "'=' or ';' after declared name")?;
    let value = parse_expression(cursor)?;
    cursor.expect(TokenKind::Semicolon,
                  "';' at the end of a variable declaration")?;

    Ok(Statement::VarDeclaration { identifier,
                                   constant,
                                   value: Some(value),
                                   line })
}
