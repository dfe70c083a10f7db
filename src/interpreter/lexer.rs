use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `2.` or `.5`.
    ///
    /// A literal holds at most one decimal point; in `1.2.3` the second point
    /// starts a new literal `.3`.
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `what`
    #[token("what")]
    What,
    /// `int`
    #[token("int")]
    Int,
    /// `float`
    #[token("float")]
    Float,
    /// `double`
    #[token("double")]
    Double,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `elseif`
    #[token("elseif")]
    ElseIf,
    /// `endif`
    #[token("endif")]
    EndIf,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `gt` or `>`
    #[token("gt")]
    #[token(">")]
    Greater,
    /// `lt` or `<`
    #[token("lt")]
    #[token("<")]
    Less,
    /// `gte` or `>=`
    #[token("gte")]
    #[token(">=")]
    GreaterEqual,
    /// `lte` or `<=`
    #[token("lte")]
    #[token("<=")]
    LessEqual,
    /// `di` or `!=`
    #[token("di")]
    #[token("!=")]
    NotEqual,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the scanner; returned by [`Lexer`] once
    /// the line is exhausted.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Number(text) => return write!(f, "number '{text}'"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::End => return write!(f, "end of input"),
            Self::What => "what",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::ElseIf => "elseif",
            Self::EndIf => "endif",
            Self::Colon => ":",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Greater => "gt",
            Self::Less => "lt",
            Self::GreaterEqual => "gte",
            Self::LessEqual => "lte",
            Self::NotEqual => "di",
            Self::Ignored => "whitespace",
        };
        write!(f, "'{symbol}'")
    }
}

/// Pull-based lexer over a single source line.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the input
/// is exhausted every further call returns [`Token::End`].
///
/// # Example
/// ```
/// use volt::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x >= 1.5;");
/// assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
/// assert_eq!(lexer.next_token().unwrap(), Token::GreaterEqual);
/// assert_eq!(lexer.next_token().unwrap(), Token::Number("1.5".to_string()));
/// assert_eq!(lexer.next_token().unwrap(), Token::Semicolon);
/// assert_eq!(lexer.next_token().unwrap(), Token::End);
/// assert_eq!(lexer.next_token().unwrap(), Token::End);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Scans the next token.
    ///
    /// # Errors
    /// Returns [`LexError::InvalidCharacter`] naming the first character that
    /// does not start any token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(())) => {
                let character = self.inner
                                    .slice()
                                    .chars()
                                    .next()
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexError::InvalidCharacter { character })
            },
            None => Ok(Token::End),
        }
    }
}
