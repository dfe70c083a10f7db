/// Dispatch from an operator to its evaluation routine.
pub mod core;

/// Checked integer arithmetic: `+ - * / %`.
pub mod scalar;

/// `&&` and `||` with C-style truthiness.
pub mod logic;

/// Relational operators.
pub mod comparison;
