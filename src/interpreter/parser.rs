/// Core parser entry points and the token cursor.
///
/// Holds the one-token lookahead over the lexer, the line-level `parse`
/// function and the expression entry point.
pub mod core;

/// Statement parsing.
///
/// Dispatches between declarations, conditionals and expression statements.
pub mod statement;

/// Conditional blocks.
///
/// Parses `if`/`elseif`/`else`/`endif` chains and the statement lists they
/// guard.
pub mod block;

/// Binary operator parsing.
///
/// Implements one function per precedence level, from relational operators
/// down to multiplication.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, variables and parenthesized groups.
pub mod unary;

/// Shared helpers for expecting specific tokens.
pub mod utils;
