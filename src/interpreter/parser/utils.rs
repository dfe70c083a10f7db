use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Cursor, ParseResult},
    },
};

/// Consumes the current token if it equals `expected`.
///
/// Otherwise builds the error with `error`, passing it a description of the
/// token that was found instead. Each grammar point supplies its own error
/// so diagnostics name exactly what was missing.
pub(in crate::interpreter::parser) fn expect(cursor: &mut Cursor<'_>,
                                             expected: &Token,
                                             error: impl FnOnce(String) -> ParseError)
                                             -> ParseResult<()> {
    if cursor.at(expected) {
        cursor.advance()?;
        Ok(())
    } else {
        Err(error(cursor.peek().to_string()).into())
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns [`ParseError::ExpectedIdentifier`] if the current token is not an
/// identifier.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut Cursor<'_>)
                                                       -> ParseResult<String> {
    match cursor.peek() {
        Token::Identifier(name) => {
            let name = name.clone();
            cursor.advance()?;
            Ok(name)
        },
        found => Err(ParseError::ExpectedIdentifier { found: found.to_string() }.into()),
    }
}
