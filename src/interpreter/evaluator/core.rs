use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, NumericKind, Statement},
    error::RuntimeError,
    util::num::literal_to_i64,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state shared by every statement of one run.
///
/// The interpreter reads and writes `variables`; the code generator reads
/// and writes `kinds` and `slots` and draws temporary names from
/// `next_temporary`.
/// Declarations are the only statements that change the tables, and there is
/// a single flat scope: a variable declared inside a conditional branch stays
/// visible after the conditional.
///
/// ## Usage
///
/// `Context` is created once per script and reused for every line.
#[derive(Debug, Clone)]
pub struct Context {
    /// Current value of every variable declared so far.
    pub variables:      HashMap<String, i64>,
    /// Declared kind of every variable lowered so far.
    pub kinds:          HashMap<String, NumericKind>,
    /// Storage allocated for each variable at each kind it was declared with.
    pub slots:          HashMap<(String, NumericKind), String>,
    /// Id of the next temporary minted by the code generator. Only grows.
    pub next_temporary: u32,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new context with no variables. Temporaries start at `%t1`.
    #[must_use]
    pub fn new() -> Self {
        Self { variables:      HashMap::new(),
               kinds:          HashMap::new(),
               slots:          HashMap::new(),
               next_temporary: 1, }
    }

    /// Evaluates an expression and returns the resulting integer.
    ///
    /// Both operands of a binary node are always evaluated, left first,
    /// before the operator is applied; `&&` and `||` do not short-circuit.
    ///
    /// # Example
    /// ```
    /// use volt::{
    ///     ast::{BinaryOperator, Expr, NumericKind},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let three = Expr::Literal { text: "3".to_string(),
    ///                             kind: NumericKind::Int, };
    /// let four = Expr::Literal { text: "4".to_string(),
    ///                            kind: NumericKind::Int, };
    ///
    /// let sum = Expr::binary(three, BinaryOperator::Add, four);
    /// assert_eq!(context.eval(&sum).unwrap(), 7);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { text, .. } => literal_to_i64(text),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::LogicOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_comparison(*op, left, right))
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Declarations store their value and return it; conditionals return the
    /// value of the last statement they ran; expressions return their value.
    ///
    /// A failing statement may leave earlier writes of the same statement in
    /// place; use [`Context::execute`] to get all-or-nothing behavior.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<i64> {
        match statement {
            Statement::Declaration { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(value)
            },
            Statement::Conditional { branches } => self.eval_conditional(branches),
            Statement::Expression { expr } => self.eval(expr),
        }
    }

    /// Evaluates a statement and commits its writes only if it succeeds.
    ///
    /// On error the variable table is restored to its state before the
    /// statement, so a failed line never leaves a partial update behind.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<i64> {
        let snapshot = self.variables.clone();
        let result = self.eval_statement(statement);
        if let Err(error) = &result {
            debug!(%error, "rolling back variable table");
            self.variables = snapshot;
        }
        result
    }

    /// Looks up a variable's current value.
    fn eval_variable(&self, name: &str) -> EvalResult<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}
