use volt::{
    ast::{NumericKind, Statement},
    error::{Error, LexError, ParseError, RuntimeError, TypeError},
    interpret_line,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, Token},
        parser::core::parse,
        value::Value,
    },
    run_script,
};

/// Runs `src` and checks that every line succeeded with the given printed
/// values, in order.
fn assert_success(src: &str, expected: &[&str]) {
    let printed: Vec<String> = run_script(src).into_iter()
                                              .map(|outcome| match outcome.result {
                                                  Ok(value) => value.to_string(),
                                                  Err(e) => panic!("Script failed: {e}"),
                                              })
                                              .collect();
    assert_eq!(printed, expected, "unexpected output for script:\n{src}");
}

/// Interprets a single line in a fresh context and returns its error.
fn assert_failure(src: &str) -> Error {
    let mut context = Context::new();
    match interpret_line(&mut context, src) {
        Ok(value) => panic!("Line succeeded with {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_success("3 + 4;", &["7"]);
    assert_success("7 * 9;", &["63"]);
    assert_success("8 - 5;", &["3"]);
    assert_success("10 / 3;", &["3"]);
    assert_success("10 % 3;", &["1"]);
}

#[test]
fn operator_precedence_and_associativity() {
    assert_success("2 + 3 * 4;", &["14"]);
    assert_success("(2 + 3) * 4;", &["20"]);
    assert_success("10 - 4 - 3;", &["3"]);
    assert_success("7 % 4 * 2;", &["6"]);
    assert_success("1 + 1 gt 1;", &["1"]);
    assert_success("1 && 0 gt 0;", &["0"]);
}

#[test]
fn unary_minus() {
    assert_success("-3 + 5;", &["2"]);
    assert_success("--3;", &["3"]);
    assert_success("-(2 * 3);", &["-6"]);
    assert_success("what f : float = -2.5;", &["-2"]);
}

#[test]
fn declarations_persist_across_lines() {
    assert_success("what x : int = 5;\nx * 2;\nx;", &["5", "10", "5"]);
    assert_success("what a : int = 2;\nwhat b : int = a * a;\na + b;", &["2", "4", "6"]);
}

#[test]
fn redeclaration_replaces_value() {
    assert_success("what x : int = 1;\nwhat x : int = 2;\nx;", &["1", "2", "2"]);
}

#[test]
fn fractional_literals_truncate() {
    assert_success("what d : double = 2.9;", &["2"]);
    assert_success("what d : double = -2.9;", &["-2"]);
    assert_success("what f : float = .5 + 2.;", &["2"]);
    assert_success("1.9 + 1.9;", &["2"]);
}

#[test]
fn logical_results_print_as_booleans() {
    assert_success("1 && 0;", &["false"]);
    assert_success("1 || 0;", &["true"]);
    assert_success("2 && 3;", &["true"]);
    assert_success("0 || 0;", &["false"]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let error = assert_failure("0 && 1 / 0;");
    assert_eq!(error, Error::Runtime(RuntimeError::DivisionByZero));

    let error = assert_failure("1 || y;");
    assert_eq!(error, Error::Runtime(RuntimeError::UnknownVariable { name: "y".to_string() }));
}

#[test]
fn comparisons_yield_integers() {
    assert_success("3 gt 2;", &["1"]);
    assert_success("3 > 2;", &["1"]);
    assert_success("2 lt 1;", &["0"]);
    assert_success("2 gte 2;", &["1"]);
    assert_success("2 <= 1;", &["0"]);
    assert_success("2 di 2;", &["0"]);
    assert_success("2 != 3;", &["1"]);
}

#[test]
fn conditional_picks_first_true_branch() {
    assert_success("what x : int = 3;\nif x gt 2 then; 10; else; 20; endif;", &["3", "10"]);
    assert_success("if 0 then; 1; elseif 1 then; 2; else; 3; endif;", &["2"]);
    assert_success("if 0 then; 1; elseif 0 then; 2; else; 3; endif;", &["3"]);
    assert_success("if 0 then; 1; endif;", &["0"]);
    assert_success("if 1 then; endif;", &["0"]);
}

#[test]
fn conditional_body_declares_variables() {
    assert_success("if 1 then; what y : int = 4; endif;\ny + 1;", &["4", "5"]);
}

#[test]
fn errors_do_not_stop_the_script() {
    let outcomes = run_script("5 / 0;\n1 + 1;");
    assert_eq!(outcomes.len(), 2);

    let first = outcomes[0].result.as_ref().unwrap_err();
    assert_eq!(first.line, 1);
    assert_eq!(first.error, Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(first.to_string(), "Error on line 1: Division by zero. in: 5 / 0;");

    assert_eq!(outcomes[1].result, Ok(Value::Integer(2)));
}

#[test]
fn blank_lines_are_skipped_but_counted() {
    let outcomes = run_script("1;\n\n   \nx;\n");
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[1].line, 4);
}

#[test]
fn failed_statement_leaves_context_unchanged() {
    let outcomes = run_script("what x : int = 1;\nif 1 then; what x : int = 9; 1 / 0; endif;\nx;");
    assert_eq!(outcomes[0].result, Ok(Value::Integer(1)));
    assert!(outcomes[1].result.is_err());
    assert_eq!(outcomes[2].result, Ok(Value::Integer(1)));

    let outcomes = run_script("what z : int = 1 / 0;\nz;");
    let error = &outcomes[1].result.as_ref().unwrap_err().error;
    assert_eq!(*error, Error::Runtime(RuntimeError::UnknownVariable { name: "z".to_string() }));
}

#[test]
fn evaluating_expressions_does_not_mutate_context() {
    let mut context = Context::new();
    interpret_line(&mut context, "what x : int = 6;").unwrap();

    let Ok(Statement::Expression { expr }) = parse("x * x - 1;") else {
        panic!("expected an expression statement");
    };
    assert_eq!(context.eval(&expr), Ok(35));
    assert_eq!(context.eval(&expr), Ok(35));
    assert_eq!(context.variables.len(), 1);
}

#[test]
fn runtime_errors() {
    assert_eq!(assert_failure("5 % 0;"), Error::Runtime(RuntimeError::ModuloByZero));
    assert_eq!(assert_failure("x;"),
               Error::Runtime(RuntimeError::UnknownVariable { name: "x".to_string() }));
    assert_eq!(assert_failure("9223372036854775807 + 1;"),
               Error::Runtime(RuntimeError::Overflow));
    assert_eq!(assert_failure("99999999999999999999;"),
               Error::Runtime(RuntimeError::LiteralTooLarge { literal: "99999999999999999999".to_string() }));
}

#[test]
fn floating_declarations_require_a_decimal_point() {
    assert_eq!(assert_failure("what y : double = 5;"),
               Error::Type(TypeError::FractionalLiteralRequired { literal: "5".to_string(),
                                                                  kind:    NumericKind::Double, }));
    assert_eq!(assert_failure("what y : float = 2.5 + 1;"),
               Error::Type(TypeError::FractionalLiteralRequired { literal: "1".to_string(),
                                                                  kind:    NumericKind::Float, }));
    assert_success("what y : int = 5;", &["5"]);
}

#[test]
fn lexical_errors() {
    assert_eq!(assert_failure("3 # 4;"),
               Error::Lex(LexError::InvalidCharacter { character: '#' }));
    assert_eq!(assert_failure("@;"),
               Error::Lex(LexError::InvalidCharacter { character: '@' }));
}

#[test]
fn statement_syntax_errors() {
    assert_eq!(assert_failure("3 + 4"),
               Error::Parse(ParseError::ExpectedTerminator { found: "end of input".to_string() }));
    assert_eq!(assert_failure("3 + 4; 5;"),
               Error::Parse(ParseError::TrailingInput { found: "number '5'".to_string() }));
    assert_eq!(assert_failure("3 == 4;"),
               Error::Parse(ParseError::ExpectedTerminator { found: "'='".to_string() }));
    assert_eq!(assert_failure("3 + ;"),
               Error::Parse(ParseError::ExpectedOperand { found: "';'".to_string() }));
    assert_eq!(assert_failure("(1 + 2;"),
               Error::Parse(ParseError::ExpectedClosingParen { found: "';'".to_string() }));
}

#[test]
fn declaration_syntax_errors() {
    assert_eq!(assert_failure("what : int = 1;"),
               Error::Parse(ParseError::ExpectedIdentifier { found: "':'".to_string() }));
    assert_eq!(assert_failure("what x int = 1;"),
               Error::Parse(ParseError::ExpectedColon { found: "'int'".to_string() }));
    assert_eq!(assert_failure("what x : long = 1;"),
               Error::Parse(ParseError::ExpectedType { found: "identifier 'long'".to_string() }));
    assert_eq!(assert_failure("what x : int 1;"),
               Error::Parse(ParseError::ExpectedAssign { found: "number '1'".to_string() }));
}

#[test]
fn conditional_syntax_errors() {
    assert_eq!(assert_failure("if 1 then; 1; else; 2; else; 3; endif;"),
               Error::Parse(ParseError::MisplacedBranch { keyword: "else" }));
    assert_eq!(assert_failure("if 1 then; 1; else; 2; elseif 1 then; 3; endif;"),
               Error::Parse(ParseError::MisplacedBranch { keyword: "elseif" }));
    assert_eq!(assert_failure("if 1 then; 1;"), Error::Parse(ParseError::UnclosedConditional));
    assert_eq!(assert_failure("if 1 then; 1 endif;"),
               Error::Parse(ParseError::ExpectedTerminator { found: "'endif'".to_string() }));
    assert_eq!(assert_failure("if 1 then; 1; endif"),
               Error::Parse(ParseError::ExpectedTerminator { found: "end of input".to_string() }));
    assert_eq!(assert_failure("if 1; 1; endif;"),
               Error::Parse(ParseError::ExpectedThen { keyword: "if",
                                                       found:   "';'".to_string(), }));
}

#[test]
fn empty_statements_inside_blocks_are_skipped() {
    assert_success("if 1 then; ; ; 5; ; endif;", &["5"]);
    assert_success("if 0 then; 1; else; ; 2; ; endif;", &["2"]);
}

#[test]
fn conditionals_nest_inside_branches() {
    assert_success("if 1 then; if 0 then; 1; else; 2; endif; endif;", &["2"]);
    assert_success("what x : int = 4;\nif x gt 2 then; if x gt 3 then; what y : int = x * 10; endif; endif;\ny;",
                   &["4", "40", "40"]);
}

#[test]
fn second_decimal_point_starts_a_new_number() {
    let mut lexer = Lexer::new("1.2.3");
    assert_eq!(lexer.next_token(), Ok(Token::Number("1.2".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Number(".3".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::End));

    assert_eq!(assert_failure("1.2.3;"),
               Error::Parse(ParseError::ExpectedTerminator { found: "number '.3'".to_string() }));
}

#[test]
fn keyword_prefixed_names_are_identifiers() {
    assert_eq!(assert_failure("gtx;"),
               Error::Runtime(RuntimeError::UnknownVariable { name: "gtx".to_string() }));
    assert_success("what gtx : int = 2;\ngtx gt 1;\nwhat iffy : int = gtx;", &["2", "1", "2"]);
}

#[test]
fn same_expression_gives_same_result_in_fresh_contexts() {
    let Ok(Statement::Expression { expr }) = parse("2 * (3 + 4) - 1 && 5 % 3;") else {
        panic!("expected an expression statement");
    };
    assert_eq!(Context::new().eval(&expr), Ok(1));
    assert_eq!(Context::new().eval(&expr), Context::new().eval(&expr));

    let script = "what a : int = 9;\na / 2 + a % 2;\n(a gt 3) || 0;";
    assert_eq!(run_script(script), run_script(script));
}
