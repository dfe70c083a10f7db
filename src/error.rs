use thiserror::Error;

/// Lexing errors.
///
/// Raised by the lexer when a character does not start any known token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into a
/// statement: missing or unexpected tokens, malformed declarations, unclosed
/// conditional blocks and input left over after the terminator.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and code
/// generation, such as undefined variables or division by zero.
pub mod runtime_error;
/// Type errors.
///
/// Raised by the parser when a literal does not fit the numeric kind of the
/// declaration it appears in.
pub mod type_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use type_error::TypeError;

/// Any error produced while processing one statement.
///
/// Each phase raises its own error type; this enum lets callers that drive
/// the whole pipeline propagate all of them with `?`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexer met a character it does not understand.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A literal does not match its declared numeric kind.
    #[error(transparent)]
    Type(#[from] TypeError),
    /// Evaluation or lowering failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
