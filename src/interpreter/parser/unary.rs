use crate::{
    ast::{BinaryOperator, Expr, NumericKind},
    error::{ParseError, TypeError},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Cursor, ParseResult, parse_expression},
            utils::expect,
        },
    },
};

/// Parses a unary expression.
///
/// Negation is rewritten as a subtraction from zero, so `-x` becomes
/// `0 - x`. The zero is an integer literal outside declarations and a
/// fractional literal of the declared kind inside `float`/`double` ones.
/// Unary minus is right-associative: `--x` is `0 - (0 - x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    if cursor.at(&Token::Minus) {
        cursor.advance()?;
        let operand = parse_unary(cursor, kind)?;
        let zero = Expr::Literal { text: kind.ir_zero().to_string(),
                                   kind };
        return Ok(Expr::binary(zero, BinaryOperator::Sub, operand));
    }
    parse_primary(cursor, kind)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    match cursor.peek() {
        Token::Number(_) => parse_literal(cursor, kind),
        Token::Identifier(name) => {
            let name = name.clone();
            cursor.advance()?;
            Ok(Expr::Variable { name })
        },
        Token::LParen => parse_grouping(cursor, kind),
        found => Err(ParseError::ExpectedOperand { found: found.to_string() }.into()),
    }
}

/// Parses a numeric literal and infers its kind.
///
/// - Without a decimal point the literal is `Int`, unless the context is
///   `float` or `double`, which is a type error.
/// - With a decimal point it is `Double` in a `double` context and `Float`
///   everywhere else.
fn parse_literal(cursor: &mut Cursor<'_>, context: NumericKind) -> ParseResult<Expr> {
    let Token::Number(text) = cursor.advance()? else {
        unreachable!("parse_literal is only called on a number token")
    };

    let fractional = text.contains('.');
    if context.is_floating() && !fractional {
        return Err(TypeError::FractionalLiteralRequired { literal: text,
                                                          kind:    context, }.into());
    }

    let kind = match (fractional, context) {
        (false, _) => NumericKind::Int,
        (true, NumericKind::Double) => NumericKind::Double,
        (true, _) => NumericKind::Float,
    };
    Ok(Expr::Literal { text, kind })
}

/// Parses a parenthesized expression.
fn parse_grouping(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    cursor.advance()?;
    let expr = parse_expression(cursor, kind)?;
    expect(cursor, &Token::RParen, |found| ParseError::ExpectedClosingParen { found })?;
    Ok(expr)
}
