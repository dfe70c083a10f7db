use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a checked integer arithmetic operation.
    ///
    /// Division and modulo by zero are reported rather than panicking, and so
    /// is overflow. Division truncates toward zero and the remainder takes the
    /// sign of the dividend.
    pub fn eval_scalar_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
            },
            Mod => {
                if right == 0 {
                    return Err(RuntimeError::ModuloByZero);
                }
                left.checked_rem(right)
            },
            _ => unreachable!("eval_scalar_op used with logical operator"),
        };

        result.ok_or(RuntimeError::Overflow)
    }
}
