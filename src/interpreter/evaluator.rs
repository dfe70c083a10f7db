/// Core evaluation logic and context management.
///
/// Contains the runtime context shared with the code generator, the main
/// expression and statement dispatch, and statement-level rollback.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, logical and relational operators over integers.
pub mod binary;

/// Conditional statement evaluation.
///
/// Picks the first branch whose guard holds and runs its statements.
pub mod conditional;
