/// Numeric conversion helpers.
///
/// This module turns literal source text into the interpreter's integer type
/// without risking silent data loss: values that do not fit are reported
/// instead of being wrapped or saturated.
pub mod num;
