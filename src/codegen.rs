/// Listing assembly and the shared lowering types.
///
/// Defines the `Module` that wraps lowered statements in a `main` function,
/// the `Register` naming a lowered value, and temporary allocation.
pub mod core;

/// Expression lowering.
///
/// Emits instructions for literals, variables, arithmetic, logical and
/// relational operators, choosing integer or floating-point mnemonics from
/// the promoted operand kind.
pub mod expression;

/// Statement lowering.
///
/// Emits storage for declarations and the placeholder for conditionals.
pub mod statement;
