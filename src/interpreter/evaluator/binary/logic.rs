use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a logical operation between two integers.
    ///
    /// Zero is false and any other value is true. The result is `1` or `0`.
    /// Both operands have already been evaluated by the caller.
    ///
    /// # Example
    /// ```
    /// use volt::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, 3, -2), 1);
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, 1, 0), 0);
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, 0, 0), 0);
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: i64, right: i64) -> i64 {
        let (left, right) = (left != 0, right != 0);
        let result = match op {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
            _ => unreachable!("eval_logic used with arithmetic operator"),
        };
        i64::from(result)
    }
}
