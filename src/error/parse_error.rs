use thiserror::Error;

/// Represents all errors that can occur while parsing a statement.
///
/// Token descriptions are rendered with the lexer's `Display` form, so a
/// missing token reads as `expected ':' after variable name, found 'int'`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A number, variable or `(` was expected at the start of an operand.
    #[error("Expected number, variable or '(', found {found}.")]
    ExpectedOperand {
        /// The token encountered.
        found: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')', found {found}.")]
    ExpectedClosingParen {
        /// The token encountered.
        found: String,
    },
    /// `what` was not followed by a variable name.
    #[error("Expected variable name after 'what', found {found}.")]
    ExpectedIdentifier {
        /// The token encountered.
        found: String,
    },
    /// The variable name of a declaration was not followed by `:`.
    #[error("Expected ':' after variable name, found {found}.")]
    ExpectedColon {
        /// The token encountered.
        found: String,
    },
    /// The `:` of a declaration was not followed by `int`, `float` or
    /// `double`.
    #[error("Expected type 'int', 'float' or 'double' after ':', found {found}.")]
    ExpectedType {
        /// The token encountered.
        found: String,
    },
    /// The type of a declaration was not followed by `=`.
    #[error("Expected '=' after type, found {found}.")]
    ExpectedAssign {
        /// The token encountered.
        found: String,
    },
    /// A branch guard was not followed by `then`.
    #[error("Expected 'then' after {keyword} condition, found {found}.")]
    ExpectedThen {
        /// The keyword that opened the branch (`if` or `elseif`).
        keyword: &'static str,
        /// The token encountered.
        found:   String,
    },
    /// A statement was not closed by `;`.
    #[error("Expected ';' at end of statement, found {found}.")]
    ExpectedTerminator {
        /// The token encountered.
        found: String,
    },
    /// Tokens follow the terminator of a statement.
    #[error("Unexpected input after ';': {found}.")]
    TrailingInput {
        /// The first extra token.
        found: String,
    },
    /// An `else` or `elseif` appeared after the `else` branch.
    #[error("'{keyword}' cannot follow the 'else' branch of a conditional.")]
    MisplacedBranch {
        /// The offending keyword.
        keyword: &'static str,
    },
    /// The input ended before `endif` closed a conditional.
    #[error("Expected 'endif' to close conditional, found end of input.")]
    UnclosedConditional,
    /// A source line does not end with `;`; checked before parsing in
    /// generate mode.
    #[error("Statement must end with ';': {line}")]
    MissingTerminator {
        /// The offending source line.
        line: String,
    },
}
