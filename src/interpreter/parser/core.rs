use tracing::debug;

use crate::{
    ast::{Expr, NumericKind, Statement},
    error::{Error, LexError, ParseError},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{binary::parse_relational, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// One-token lookahead over a [`Lexer`].
///
/// The cursor owns the current token only; the next one is scanned when the
/// current one is consumed, so nothing beyond a single token is buffered.
pub struct Cursor<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor and scans the first token of `source`.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the first token is invalid.
    pub fn new(source: &'src str) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// The current token.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.current
    }

    /// Returns `true` if the current token equals `token`.
    #[must_use]
    pub fn at(&self, token: &Token) -> bool {
        &self.current == token
    }

    /// Consumes the current token and returns it.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the token after it is invalid.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// Parses one line of source text into a statement.
///
/// The line must hold exactly one statement followed by `;`. Anything after
/// the terminator is rejected.
///
/// # Errors
/// Returns a lexing, parsing or type error describing the first problem
/// found.
///
/// # Example
/// ```
/// use volt::{ast::{Expr, NumericKind, Statement}, interpreter::parser::core::parse};
///
/// let statement = parse("what x : int = 5;").unwrap();
/// assert_eq!(statement,
///            Statement::Declaration { name:  "x".to_string(),
///                                     kind:  NumericKind::Int,
///                                     value: Expr::Literal { text: "5".to_string(),
///                                                            kind: NumericKind::Int, }, });
///
/// assert!(parse("3 + 4; 5;").is_err());
/// ```
pub fn parse(line: &str) -> ParseResult<Statement> {
    let mut cursor = Cursor::new(line)?;
    let statement = parse_statement(&mut cursor)?;

    if !cursor.at(&Token::Semicolon) {
        return Err(ParseError::ExpectedTerminator { found: cursor.peek().to_string() }.into());
    }
    cursor.advance()?;

    if !cursor.at(&Token::End) {
        return Err(ParseError::TrailingInput { found: cursor.peek().to_string() }.into());
    }

    debug!(?statement, "parsed statement");
    Ok(statement)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the relational operators, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := relational`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first token of the expression.
/// - `kind`: Numeric kind of the enclosing declaration; `Int` outside one.
pub fn parse_expression(cursor: &mut Cursor<'_>, kind: NumericKind) -> ParseResult<Expr> {
    parse_relational(cursor, kind)
}
