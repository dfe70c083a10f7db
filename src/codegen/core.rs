use std::fmt::{self, Write};

use tracing::trace;

use crate::{
    ast::NumericKind,
    error::RuntimeError,
    interpreter::evaluator::core::Context,
};

/// Result type used by the code generator.
pub type EmitResult<T> = Result<T, RuntimeError>;

/// Where a lowered value lives, and its kind.
///
/// Declared variables are named `%<name>`; computed values live in
/// temporaries `%t<n>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    /// The reference as written in the listing, including the `%` sigil.
    pub name: String,
    /// Numeric kind of the value.
    pub kind: NumericKind,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The lowering of one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    /// Instruction lines, each indented and newline-terminated.
    pub code:   String,
    /// Reference to the statement's result; `None` for statements that are
    /// not lowered.
    pub result: Option<String>,
}

impl Context {
    /// Mints a new temporary of the given kind.
    ///
    /// Ids come from the context's counter, which only grows, so a name is
    /// never handed out twice during one run.
    pub fn fresh_temporary(&mut self, kind: NumericKind) -> Register {
        let name = format!("%t{}", self.next_temporary);
        self.next_temporary += 1;
        trace!(%name, %kind, "minted temporary");
        Register { name, kind }
    }
}

/// The storage name of a declared variable.
///
/// A name shaped like a temporary (`t` followed by digits) gets a `.var`
/// suffix, so `%t1` always means the first temporary.
pub(crate) fn storage_name(name: &str) -> String {
    let looks_temporary = name.strip_prefix('t')
                              .is_some_and(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()));
    if looks_temporary { format!("%{name}.var") } else { format!("%{name}") }
}

/// Appends one indented instruction line to `out`.
pub(crate) fn emit_line(out: &mut String, instruction: fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "  {instruction}");
}

/// A complete listing: a `main` function holding every lowered statement.
///
/// # Example
/// ```
/// use volt::{codegen::core::Module, interpreter::{evaluator::core::Context, parser::core::parse}};
///
/// let mut context = Context::new();
/// let mut module = Module::new("demo");
///
/// let statement = parse("what x : int = 5;").unwrap();
/// let emitted = context.emit_statement(&statement).unwrap();
/// module.push_statement("what x : int = 5;", &emitted);
///
/// let listing = module.finish();
/// assert!(listing.contains("%t1 = add i32 0, 5"));
/// assert!(listing.contains("store i32 %t1, i32* %x"));
/// assert!(listing.ends_with("  ret i32 0\n}\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    body: String,
}

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               body: String::new() }
    }

    /// Appends a statement's instructions, preceded by its source line as a
    /// comment.
    pub fn push_statement(&mut self, source: &str, emitted: &Emitted) {
        emit_line(&mut self.body, format_args!("; {}", source.trim()));
        self.body.push_str(&emitted.code);
    }

    /// Wraps the collected statements in the module preamble and the closing
    /// return, and returns the listing.
    #[must_use]
    pub fn finish(self) -> String {
        let mut listing = String::new();
        listing.push_str(&format!("; ModuleID = '{}'\n", self.name));
        listing.push_str(&format!("source_filename = \"{}\"\n\n", self.name));
        listing.push_str("define i32 @main() {\n");
        listing.push_str("entry:\n");
        listing.push_str(&self.body);
        listing.push_str("  ret i32 0\n");
        listing.push_str("}\n");
        listing
    }
}
