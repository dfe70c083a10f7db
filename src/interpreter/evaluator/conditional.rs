use crate::{
    ast::Branch,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a conditional statement.
    ///
    /// Guards are evaluated in order until one is non-zero; the `else` branch
    /// has no guard and is always taken when reached. The statements of the
    /// chosen branch run in order and the value of the last one is returned.
    /// If no branch is taken, or the taken branch is empty, the result is `0`.
    pub fn eval_conditional(&mut self, branches: &[Branch]) -> EvalResult<i64> {
        for branch in branches {
            if let Some(guard) = &branch.guard
               && self.eval(guard)? == 0
            {
                continue;
            }

            let mut last = 0;
            for statement in &branch.body {
                last = self.eval_statement(statement)?;
            }
            return Ok(last);
        }
        Ok(0)
    }
}
