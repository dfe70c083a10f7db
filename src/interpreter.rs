/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies arithmetic, logical and relational operators, and manages the
/// variable table. It also owns [`evaluator::core::Context`], which the code
/// generator shares.
///
/// # Responsibilities
/// - Evaluates AST nodes to integers.
/// - Records declared variables in the context.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of source text and hands out one token per call,
/// covering numbers, identifiers, keywords and operators.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and builds the tree of exactly one
/// statement, enforcing the `;` terminator.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Infers literal kinds and checks them against declarations.
/// - Reports precise errors for every missing or unexpected token.
pub mod parser;
/// The value module defines how interpreted results are shown.
pub mod value;
