use crate::{
    ast::{NumericKind, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_conditional,
            core::{Cursor, ParseResult, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement, without its terminator.
///
/// A statement may be one of:
/// - a typed variable declaration, introduced by `what`.
/// - a conditional block, introduced by `if`.
/// - an expression used as a statement.
///
/// The choice is made from the current token alone.
pub fn parse_statement(cursor: &mut Cursor<'_>) -> ParseResult<Statement> {
    match cursor.peek() {
        Token::What => parse_variable_declaration(cursor),
        Token::If => parse_conditional(cursor),
        _ => {
            let expr = parse_expression(cursor, NumericKind::Int)?;
            Ok(Statement::Expression { expr })
        },
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `what <identifier> : <type> = <expression>`,
/// where `<type>` is `int`, `float` or `double`. The initializer is parsed
/// in the context of the declared kind, which decides how its literals are
/// typed.
///
/// # Errors
/// Returns a distinct `ParseError` for a missing name, `:`, type or `=`, and
/// propagates any error from the initializer.
fn parse_variable_declaration(cursor: &mut Cursor<'_>) -> ParseResult<Statement> {
    cursor.advance()?;

    let name = parse_identifier(cursor)?;
    expect(cursor, &Token::Colon, |found| ParseError::ExpectedColon { found })?;

    let kind = match cursor.peek() {
        Token::Int => NumericKind::Int,
        Token::Float => NumericKind::Float,
        Token::Double => NumericKind::Double,
        found => return Err(ParseError::ExpectedType { found: found.to_string() }.into()),
    };
    cursor.advance()?;

    expect(cursor, &Token::Assign, |found| ParseError::ExpectedAssign { found })?;

    let value = parse_expression(cursor, kind)?;
    Ok(Statement::Declaration { name, kind, value })
}
