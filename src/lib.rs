//! # volt
//!
//! volt is a small imperative expression language with typed declarations.
//! Every line of a script holds one statement; each statement can either be
//! interpreted directly or lowered to a textual, LLVM-flavoured listing.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use thiserror::Error as ThisError;
use tracing::{debug, info};

use crate::{
    codegen::core::Module,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser::core::parse, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the numeric
/// kinds that represent one line of source code as a tree. The AST is built
/// by the parser and consumed by both the evaluator and the code generator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the `int < float < double` promotion order.
pub mod ast;
/// Lowers the AST to a textual intermediate representation.
///
/// This module walks the same trees the evaluator runs and emits one or more
/// instruction lines per node, naming every computed value with a fresh
/// temporary drawn from the shared [`Context`].
///
/// # Responsibilities
/// - Selects integer or floating-point instructions from operand kinds.
/// - Allocates and stores declared variables.
/// - Marks conditional statements, which are not lowered, with a placeholder.
pub mod codegen;
/// Provides unified error types for lexing, parsing, typing and evaluation.
///
/// Each phase has its own error enum; [`error::Error`] gathers them so the
/// whole pipeline can propagate with `?`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// value shown to the user.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// An error tied to the script line that caused it.
#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
#[error("Error on line {line}: {error} in: {text}")]
pub struct LineError {
    /// 1-based line number in the script.
    pub line:  usize,
    /// The offending line as written.
    pub text:  String,
    /// What went wrong.
    pub error: Error,
}

/// What interpreting one script line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the script.
    pub line:   usize,
    /// The value, or the error that stopped the statement.
    pub result: Result<Value, LineError>,
}

/// Interprets one line against `context`.
///
/// The line is parsed and evaluated; if either step fails the context is left
/// exactly as it was.
///
/// # Example
/// ```
/// use volt::{interpret_line, interpreter::{evaluator::core::Context, value::Value}};
///
/// let mut context = Context::new();
/// assert_eq!(interpret_line(&mut context, "what x : int = 5;").unwrap(), Value::Integer(5));
/// assert_eq!(interpret_line(&mut context, "x * 2;").unwrap(), Value::Integer(10));
/// assert_eq!(interpret_line(&mut context, "1 && 0;").unwrap(), Value::Bool(false));
/// assert!(interpret_line(&mut context, "5 / 0;").is_err());
/// ```
pub fn interpret_line(context: &mut Context, line: &str) -> Result<Value, Error> {
    let statement = parse(line)?;
    let result = context.execute(&statement)?;
    Ok(Value::from_result(result, statement.is_logical()))
}

/// Interprets every non-blank line of `source` in order.
///
/// Errors do not stop the run: each failing line is reported in its outcome
/// and the next line is interpreted against the unchanged context.
///
/// # Example
/// ```
/// use volt::run_script;
///
/// let outcomes = run_script("3 + 4;\n\n5 / 0;\n1 || 0;\n");
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(outcomes[0].result.as_ref().unwrap().to_string(), "7");
/// assert!(outcomes[1].result.is_err());
/// assert_eq!(outcomes[2].result.as_ref().unwrap().to_string(), "true");
/// ```
#[must_use]
pub fn run_script(source: &str) -> Vec<LineOutcome> {
    let mut context = Context::new();
    let mut outcomes = Vec::new();

    for (line, text) in script_lines(source) {
        let result = interpret_line(&mut context, text).map_err(|error| LineError { line,
                                                                                    text: text.to_string(),
                                                                                    error });
        if let Err(error) = &result {
            debug!(%error, "statement failed");
        }
        outcomes.push(LineOutcome { line, result });
    }

    outcomes
}

/// Lowers every non-blank line of `source` into one listing.
///
/// Each line must end with `;`; this is checked before the line is parsed.
/// The first error of any kind stops the run.
///
/// # Example
/// ```
/// use volt::compile_script;
///
/// let listing = compile_script("demo", "what x : int = 5;\nx * 2;\n").unwrap();
/// assert!(listing.starts_with("; ModuleID = 'demo'"));
/// assert!(listing.contains("%t3 = mul i32 %x, %t2"));
///
/// assert!(compile_script("demo", "x * 2").is_err());
/// ```
pub fn compile_script(name: &str, source: &str) -> Result<String, LineError> {
    let mut context = Context::new();
    let mut module = Module::new(name);

    for (line, text) in script_lines(source) {
        let at_line = |error: Error| LineError { line,
                                                 text: text.to_string(),
                                                 error };

        if !text.trim_end().ends_with(';') {
            return Err(at_line(ParseError::MissingTerminator { line: text.to_string() }.into()));
        }

        let statement = parse(text).map_err(at_line)?;
        let emitted = context.emit_statement(&statement)
                             .map_err(|error| at_line(error.into()))?;
        module.push_statement(text, &emitted);
    }

    info!(temporaries = context.next_temporary - 1, "listing complete");
    Ok(module.finish())
}

/// Yields the non-blank lines of a script with their 1-based numbers.
fn script_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.lines()
          .enumerate()
          .map(|(index, text)| (index + 1, text))
          .filter(|(_, text)| !text.trim().is_empty())
}
