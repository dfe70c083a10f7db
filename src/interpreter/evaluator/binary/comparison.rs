use crate::{ast::ComparisonOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a comparison of the form `left <operator> right`.
    ///
    /// Returns `1` when the comparison holds and `0` otherwise.
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: i64, right: i64) -> i64 {
        let holds = match op {
            ComparisonOperator::Greater => left > right,
            ComparisonOperator::Less => left < right,
            ComparisonOperator::GreaterEqual => left >= right,
            ComparisonOperator::LessEqual => left <= right,
            ComparisonOperator::NotEqual => left != right,
        };
        i64::from(holds)
    }
}
