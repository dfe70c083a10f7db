use thiserror::Error;

use crate::ast::NumericKind;

/// Represents all errors raised when a literal disagrees with its context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A `float` or `double` declaration contains a literal without a
    /// decimal point.
    #[error("Value assigned to a {kind} variable must contain a decimal point (e.g. 3.0), found '{literal}'.")]
    FractionalLiteralRequired {
        /// The literal as written in the source.
        literal: String,
        /// The declared kind that demanded a fractional literal.
        kind:    NumericKind,
    },
}
