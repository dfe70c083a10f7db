use thiserror::Error;

/// Represents all errors that can occur during evaluation and lowering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to use a variable that was never declared.
    #[error("Undefined variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Attempted modulo by zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// Arithmetic operation overflowed.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
    /// A literal value was too large to be represented safely.
    #[error("Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal as written in the source.
        literal: String,
    },
}
