use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor, member::parse_call_member},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Returns
/// An `Expr::BinaryExpr` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;

    while let Some((operator, line)) = operator_at(cursor, BinaryOperator::is_additive) {
        cursor.advance();
        let right = parse_multiplicative(cursor)?;
        left = Expr::BinaryExpr { left: Box::new(left),
                                  right: Box::new(right),
                                  operator,
                                  line };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := call_member (("*" | "/" | "%") call_member)*`
pub fn parse_multiplicative(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_call_member(cursor)?;

    while let Some((operator, line)) = operator_at(cursor, BinaryOperator::is_multiplicative) {
        cursor.advance();
        let right = parse_call_member(cursor)?;
        left = Expr::BinaryExpr { left: Box::new(left),
                                  right: Box::new(right),
                                  operator,
                                  line };
    }

    Ok(left)
}

/// Returns the operator under the cursor if it belongs to the requested
/// precedence level, together with its line. Does not consume anything.
fn operator_at(cursor: &TokenCursor<'_>,
               level: fn(BinaryOperator) -> bool)
               -> Option<(BinaryOperator, usize)> {
    let token = cursor.peek()?;
    if token.kind != TokenKind::BinaryOperator {
        return None;
    }

    BinaryOperator::from_symbol(&token.value).filter(|op| level(*op))
                                             .map(|op| (op, token.line))
}
