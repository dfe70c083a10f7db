use tracing::{debug, warn};

use crate::{
    ast::{Branch, Expr, NumericKind, Statement},
    codegen::core::{EmitResult, Emitted, emit_line, storage_name},
    interpreter::evaluator::core::Context,
};

/// Placeholder written in place of a conditional statement.
pub const CONDITIONAL_PLACEHOLDER: &str =
    "; conditional statement not lowered: branch lowering is unsupported";

impl Context {
    /// Lowers one statement to instruction text.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the statement reads a
    /// variable that no earlier declaration introduced.
    ///
    /// # Example
    /// ```
    /// use volt::interpreter::{evaluator::core::Context, parser::core::parse};
    ///
    /// let mut context = Context::new();
    /// let emitted = context.emit_statement(&parse("1 + 2.5;").unwrap()).unwrap();
    ///
    /// assert_eq!(emitted.code,
    ///            "  %t1 = add i32 0, 1\n  %t2 = fadd float 0.0, 2.5\n  %t3 = fadd float %t1, %t2\n");
    /// assert_eq!(emitted.result.as_deref(), Some("%t3"));
    /// ```
    pub fn emit_statement(&mut self, statement: &Statement) -> EmitResult<Emitted> {
        let mut code = String::new();
        let result = match statement {
            Statement::Declaration { name, kind, value } => {
                Some(self.emit_declaration(name, *kind, value, &mut code)?)
            },
            Statement::Conditional { branches } => {
                Self::emit_conditional(branches, &mut code);
                None
            },
            Statement::Expression { expr } => Some(self.emit_expr(expr, &mut code)?.name),
        };
        Ok(Emitted { code, result })
    }

    /// Lowers the initializer, then stores its value into the variable. The
    /// variable's kind is recorded only once the initializer has been lowered.
    ///
    /// Each variable is allocated once per kind. Redeclaring at the same kind
    /// only stores; redeclaring at a new kind allocates `%<name>.<kind>`.
    fn emit_declaration(&mut self,
                        name: &str,
                        kind: NumericKind,
                        value: &Expr,
                        out: &mut String)
                        -> EmitResult<String> {
        let value = self.emit_expr(value, out)?;
        let ty = kind.ir_type();

        let key = (name.to_string(), kind);
        let slot = if let Some(slot) = self.slots.get(&key) {
            slot.clone()
        } else {
            let base = storage_name(name);
            let slot = if self.kinds.contains_key(name) { format!("{base}.{kind}") } else { base };
            emit_line(out, format_args!("{slot} = alloca {ty}"));
            self.slots.insert(key, slot.clone());
            slot
        };
        emit_line(out, format_args!("store {ty} {value}, {ty}* {slot}"));

        self.kinds.insert(name.to_string(), kind);
        debug!(%name, %kind, "declared variable");
        Ok(slot)
    }

    /// Conditionals have no lowering; a placeholder comment marks the gap.
    fn emit_conditional(branches: &[Branch], out: &mut String) {
        warn!(branches = branches.len(), "conditional statement is not lowered");
        emit_line(out, format_args!("{CONDITIONAL_PLACEHOLDER}"));
    }
}
