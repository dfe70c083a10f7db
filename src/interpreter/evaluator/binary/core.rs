use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, `&&` and `||` to
    /// `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use volt::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, 7, 3).unwrap(), 1);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Or, 0, 5).unwrap(), 1);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, And, Div, Mod, Mul, Or, Sub};

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right),
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
