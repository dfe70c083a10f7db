use std::borrow::Cow;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr, NumericKind},
    codegen::core::{EmitResult, Register, emit_line},
    error::RuntimeError,
    interpreter::evaluator::core::Context,
};

impl Context {
    /// Lowers an expression, appending its instructions to `out`.
    ///
    /// Children are lowered first, left to right. The returned register names
    /// where the expression's value lives.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` for a variable that no earlier
    /// declaration introduced.
    pub fn emit_expr(&mut self, expr: &Expr, out: &mut String) -> EmitResult<Register> {
        match expr {
            Expr::Literal { text, kind } => Ok(self.emit_literal(text, *kind, out)),
            Expr::Variable { name } => self.emit_variable(name),
            Expr::BinaryOp { left, op, right } => {
                let left = self.emit_expr(left, out)?;
                let right = self.emit_expr(right, out)?;
                if op.is_logical() {
                    Ok(self.emit_logical(*op, &left, &right, out))
                } else {
                    Ok(self.emit_arithmetic(*op, &left, &right, out))
                }
            },
            Expr::LogicOp { left, op, right } => {
                let left = self.emit_expr(left, out)?;
                let right = self.emit_expr(right, out)?;
                Ok(self.emit_comparison(*op, &left, &right, out))
            },
        }
    }

    /// Materializes a literal as an addition to zero of its own kind.
    fn emit_literal(&mut self, text: &str, kind: NumericKind, out: &mut String) -> Register {
        let result = self.fresh_temporary(kind);
        let ty = kind.ir_type();
        let value = ir_literal(text);
        if kind.is_floating() {
            emit_line(out, format_args!("{result} = fadd {ty} 0.0, {value}"));
        } else {
            emit_line(out, format_args!("{result} = add {ty} 0, {value}"));
        }
        result
    }

    /// Variables are referenced by the storage of their current kind; nothing
    /// is emitted.
    fn emit_variable(&self, name: &str) -> EmitResult<Register> {
        let unknown = || RuntimeError::UnknownVariable { name: name.to_string() };
        let kind = self.kinds.get(name).copied().ok_or_else(unknown)?;
        let slot = self.slots.get(&(name.to_string(), kind)).ok_or_else(unknown)?;
        Ok(Register { name: slot.clone(),
                      kind })
    }

    /// Emits `+ - * / %` at the promoted kind of both operands.
    fn emit_arithmetic(&mut self,
                       op: BinaryOperator,
                       left: &Register,
                       right: &Register,
                       out: &mut String)
                       -> Register {
        let kind = left.kind.promote(right.kind);
        let mnemonic = arithmetic_mnemonic(op, kind);
        trace!(%op, %kind, mnemonic, "lowering arithmetic");
        let result = self.fresh_temporary(kind);
        emit_line(out,
                  format_args!("{result} = {mnemonic} {} {left}, {right}", kind.ir_type()));
        result
    }

    /// Emits `&&` and `||`.
    ///
    /// Each operand is compared against zero, the two `i1` results are
    /// combined bitwise and the combination is widened to `i32`.
    fn emit_logical(&mut self,
                    op: BinaryOperator,
                    left: &Register,
                    right: &Register,
                    out: &mut String)
                    -> Register {
        trace!(%op, "lowering logical operator");
        let left = self.emit_truth_test(left, out);
        let right = self.emit_truth_test(right, out);

        let combined = self.fresh_temporary(NumericKind::Int);
        let mnemonic = if op == BinaryOperator::And { "and" } else { "or" };
        emit_line(out, format_args!("{combined} = {mnemonic} i1 {left}, {right}"));

        self.emit_widen(&combined, out)
    }

    /// Emits a relational comparison at the promoted kind, widened to `i32`.
    fn emit_comparison(&mut self,
                       op: ComparisonOperator,
                       left: &Register,
                       right: &Register,
                       out: &mut String)
                       -> Register {
        let kind = left.kind.promote(right.kind);
        let (instruction, predicate) = comparison_predicate(op, kind);
        trace!(%op, %kind, predicate, "lowering comparison");
        let flag = self.fresh_temporary(NumericKind::Int);
        emit_line(out,
                  format_args!("{flag} = {instruction} {predicate} {} {left}, {right}",
                               kind.ir_type()));
        self.emit_widen(&flag, out)
    }

    /// Compares a value against zero of its own kind, producing an `i1`.
    fn emit_truth_test(&mut self, value: &Register, out: &mut String) -> Register {
        let flag = self.fresh_temporary(NumericKind::Int);
        let ty = value.kind.ir_type();
        let zero = value.kind.ir_zero();
        if value.kind.is_floating() {
            emit_line(out, format_args!("{flag} = fcmp one {ty} {value}, {zero}"));
        } else {
            emit_line(out, format_args!("{flag} = icmp ne {ty} {value}, {zero}"));
        }
        flag
    }

    /// Zero-extends an `i1` flag to the native integer width.
    fn emit_widen(&mut self, flag: &Register, out: &mut String) -> Register {
        let result = self.fresh_temporary(NumericKind::Int);
        emit_line(out, format_args!("{result} = zext i1 {flag} to i32"));
        result
    }
}

/// Selects the instruction for an arithmetic operator at `kind`.
fn arithmetic_mnemonic(op: BinaryOperator, kind: NumericKind) -> &'static str {
    match (op, kind.is_floating()) {
        (BinaryOperator::Add, false) => "add",
        (BinaryOperator::Sub, false) => "sub",
        (BinaryOperator::Mul, false) => "mul",
        (BinaryOperator::Div, false) => "sdiv",
        (BinaryOperator::Mod, false) => "srem",
        (BinaryOperator::Add, true) => "fadd",
        (BinaryOperator::Sub, true) => "fsub",
        (BinaryOperator::Mul, true) => "fmul",
        (BinaryOperator::Div, true) => "fdiv",
        (BinaryOperator::Mod, true) => "frem",
        (BinaryOperator::And | BinaryOperator::Or, _) => {
            unreachable!("logical operators are lowered by emit_logical")
        },
    }
}

/// Selects the compare instruction and predicate for a relational operator.
const fn comparison_predicate(op: ComparisonOperator,
                              kind: NumericKind)
                              -> (&'static str, &'static str) {
    if kind.is_floating() {
        let predicate = match op {
            ComparisonOperator::Greater => "ogt",
            ComparisonOperator::Less => "olt",
            ComparisonOperator::GreaterEqual => "oge",
            ComparisonOperator::LessEqual => "ole",
            ComparisonOperator::NotEqual => "one",
        };
        ("fcmp", predicate)
    } else {
        let predicate = match op {
            ComparisonOperator::Greater => "sgt",
            ComparisonOperator::Less => "slt",
            ComparisonOperator::GreaterEqual => "sge",
            ComparisonOperator::LessEqual => "sle",
            ComparisonOperator::NotEqual => "ne",
        };
        ("icmp", predicate)
    }
}

/// Writes a literal the way the listing expects: `.5` becomes `0.5` and `2.`
/// becomes `2.0`.
fn ir_literal(text: &str) -> Cow<'_, str> {
    match (text.starts_with('.'), text.ends_with('.')) {
        (true, _) => Cow::Owned(format!("0{text}")),
        (false, true) => Cow::Owned(format!("{text}0")),
        (false, false) => Cow::Borrowed(text),
    }
}
