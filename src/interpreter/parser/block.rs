use crate::{
    ast::{Branch, NumericKind, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Cursor, ParseResult, parse_expression},
            statement::parse_statement,
            utils::expect,
        },
    },
};

/// Keywords that end the statement list of a branch.
const BRANCH_STOP_SET: [Token; 3] = [Token::ElseIf, Token::Else, Token::EndIf];

/// Parses a conditional statement up to and including `endif`.
///
/// Syntax:
/// ```text
///     if <condition> then ; <statements>
///     elseif <condition> then ; <statements>
///     else ; <statements>
///     endif
/// ```
/// Any number of `elseif` branches may follow the `if` branch; the `else`
/// branch is optional and must come last. The terminator after `endif` is
/// left to the caller, like for any other statement.
///
/// # Errors
/// - `ExpectedThen` / `ExpectedTerminator` when a branch header is
///   malformed.
/// - `MisplacedBranch` for a second `else` or an `elseif` after `else`.
/// - `UnclosedConditional` when the input ends before `endif`.
pub fn parse_conditional(cursor: &mut Cursor<'_>) -> ParseResult<Statement> {
    cursor.advance()?;
    let mut branches = vec![parse_guarded_branch(cursor, "if")?];

    while cursor.at(&Token::ElseIf) {
        cursor.advance()?;
        branches.push(parse_guarded_branch(cursor, "elseif")?);
    }

    if cursor.at(&Token::Else) {
        cursor.advance()?;
        expect(cursor, &Token::Semicolon, |found| ParseError::ExpectedTerminator { found })?;
        let body = parse_block_until(cursor, &BRANCH_STOP_SET)?;
        branches.push(Branch { guard: None, body });

        match cursor.peek() {
            Token::Else => return Err(ParseError::MisplacedBranch { keyword: "else" }.into()),
            Token::ElseIf => return Err(ParseError::MisplacedBranch { keyword: "elseif" }.into()),
            _ => {},
        }
    }

    cursor.advance()?;
    Ok(Statement::Conditional { branches })
}

/// Parses `<condition> then ; <statements>` for `if` and `elseif`.
///
/// Conditions are parsed in integer context.
fn parse_guarded_branch(cursor: &mut Cursor<'_>, keyword: &'static str) -> ParseResult<Branch> {
    let guard = parse_expression(cursor, NumericKind::Int)?;
    expect(cursor, &Token::Then, |found| ParseError::ExpectedThen { keyword, found })?;
    expect(cursor, &Token::Semicolon, |found| ParseError::ExpectedTerminator { found })?;
    let body = parse_block_until(cursor, &BRANCH_STOP_SET)?;
    Ok(Branch { guard: Some(guard),
                body })
}

/// Parses statements until the current token is in `stop_set`.
///
/// Every statement must be followed by `;`. Bare `;` tokens are empty
/// statements and are skipped. The stop token itself is not consumed.
///
/// # Errors
/// Returns `UnclosedConditional` if the input ends first.
pub fn parse_block_until(cursor: &mut Cursor<'_>, stop_set: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    loop {
        if stop_set.contains(cursor.peek()) {
            return Ok(statements);
        }

        match cursor.peek() {
            Token::End => return Err(ParseError::UnclosedConditional.into()),
            Token::Semicolon => {
                cursor.advance()?;
            },
            _ => {
                statements.push(parse_statement(cursor)?);
                if cursor.at(&Token::End) {
                    return Err(ParseError::UnclosedConditional.into());
                }
                expect(cursor, &Token::Semicolon, |found| ParseError::ExpectedTerminator { found })?;
            },
        }
    }
}
