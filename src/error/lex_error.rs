use thiserror::Error;

/// Represents all errors that can occur while lexing a line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}
