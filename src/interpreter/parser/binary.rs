use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr, NumericKind},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Cursor, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses relational operators, the lowest precedence level.
///
/// Handles `gt`, `lt`, `gte`, `lte`, `di` and their symbolic forms
/// `>`, `<`, `>=`, `<=`, `!=`. Chains are left-associative, so `a gt b lt c`
/// parses as `(a gt b) lt c`.
///
/// The rule is: `relational := logical_or (comparison logical_or)*`
pub fn parse_relational(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    let mut left = parse_logical_or(cursor, kind)?;
    while let Some(op) = token_to_comparison_operator(cursor.peek()) {
        cursor.advance()?;
        let right = parse_logical_or(cursor, kind)?;
        left = Expr::comparison(left, op, right);
    }
    Ok(left)
}

/// Parses `||` chains.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    let mut left = parse_logical_and(cursor, kind)?;
    while cursor.at(&Token::OrOr) {
        cursor.advance()?;
        let right = parse_logical_and(cursor, kind)?;
        left = Expr::binary(left, BinaryOperator::Or, right);
    }
    Ok(left)
}

/// Parses `&&` chains.
///
/// The rule is: `logical_and := additive ("&&" additive)*`
pub fn parse_logical_and(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    let mut left = parse_additive(cursor, kind)?;
    while cursor.at(&Token::AndAnd) {
        cursor.advance()?;
        let right = parse_additive(cursor, kind)?;
        left = Expr::binary(left, BinaryOperator::And, right);
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor, kind)?;
    loop {
        let op = match token_to_binary_operator(cursor.peek()) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => op,
            _ => break,
        };
        cursor.advance()?;
        let right = parse_multiplicative(cursor, kind)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    let mut left = parse_unary(cursor, kind)?;
    loop {
        let op = match token_to_binary_operator(cursor.peek()) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)) => op,
            _ => break,
        };
        cursor.advance()?;
        let right = parse_unary(cursor, kind)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Maps a token to its arithmetic operator.
///
/// Returns `None` for every other token; `&&` and `||` are matched by their
/// own precedence levels.
///
/// # Example
/// ```
/// use volt::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::AndAnd), None);
/// assert_eq!(token_to_binary_operator(&Token::Greater), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its corresponding relational operator.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::Less => Some(ComparisonOperator::Less),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::NotEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}
