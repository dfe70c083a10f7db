use pretty_assertions::assert_eq;
use volt::{
    LineError,
    ast::NumericKind,
    codegen::statement::CONDITIONAL_PLACEHOLDER,
    compile_script,
    error::{Error, ParseError, RuntimeError, TypeError},
    interpreter::{evaluator::core::Context, parser::core::parse},
};

/// Lowers one line in `context` and returns its instruction text.
fn lower(context: &mut Context, line: &str) -> String {
    let statement = parse(line).unwrap_or_else(|e| panic!("Failed to parse {line:?}: {e}"));
    context.emit_statement(&statement)
           .unwrap_or_else(|e| panic!("Failed to lower {line:?}: {e}"))
           .code
}

#[test]
fn full_listing() {
    let listing = compile_script("demo", "what x : int = 5;\n\nx * 2;\n").unwrap();
    let expected = "\
; ModuleID = 'demo'
source_filename = \"demo\"

define i32 @main() {
entry:
  ; what x : int = 5;
  %t1 = add i32 0, 5
  %x = alloca i32
  store i32 %t1, i32* %x
  ; x * 2;
  %t2 = add i32 0, 2
  %t3 = mul i32 %x, %t2
  ret i32 0
}
";
    assert_eq!(listing, expected);
}

#[test]
fn temporaries_grow_across_statements() {
    let mut context = Context::new();
    assert_eq!(lower(&mut context, "1;"), "  %t1 = add i32 0, 1\n");
    assert_eq!(lower(&mut context, "2;"), "  %t2 = add i32 0, 2\n");
    assert_eq!(context.next_temporary, 3);
}

#[test]
fn arithmetic_promotes_to_the_widest_kind() {
    let mut context = Context::new();
    assert_eq!(lower(&mut context, "7 / 2;"),
               "  %t1 = add i32 0, 7\n  %t2 = add i32 0, 2\n  %t3 = sdiv i32 %t1, %t2\n");

    let mut context = Context::new();
    assert_eq!(lower(&mut context, "1.5 % 2.5;"),
               "  %t1 = fadd float 0.0, 1.5\n  %t2 = fadd float 0.0, 2.5\n  %t3 = frem float %t1, %t2\n");

    let mut context = Context::new();
    lower(&mut context, "what d : double = .5;");
    assert_eq!(lower(&mut context, "d - 1;"),
               "  %t2 = add i32 0, 1\n  %t3 = fsub double %d, %t2\n");
}

#[test]
fn floating_declarations() {
    let mut context = Context::new();
    assert_eq!(lower(&mut context, "what d : double = .5;"),
               "  %t1 = fadd double 0.0, 0.5\n  %d = alloca double\n  store double %t1, double* %d\n");
    assert_eq!(context.kinds.get("d"), Some(&NumericKind::Double));

    let mut context = Context::new();
    assert_eq!(lower(&mut context, "what f : float = -2.;"),
               "  %t1 = fadd float 0.0, 0.0
  %t2 = fadd float 0.0, 2.0
  %t3 = fsub float %t1, %t2
  %f = alloca float
  store float %t3, float* %f
");
}

#[test]
fn logical_operators_lower_to_truth_tests() {
    let mut context = Context::new();
    assert_eq!(lower(&mut context, "1 && 0;"),
               "  %t1 = add i32 0, 1
  %t2 = add i32 0, 0
  %t3 = icmp ne i32 %t1, 0
  %t4 = icmp ne i32 %t2, 0
  %t5 = and i1 %t3, %t4
  %t6 = zext i1 %t5 to i32
");

    let mut context = Context::new();
    assert_eq!(lower(&mut context, "1.5 || 0;"),
               "  %t1 = fadd float 0.0, 1.5
  %t2 = add i32 0, 0
  %t3 = fcmp one float %t1, 0.0
  %t4 = icmp ne i32 %t2, 0
  %t5 = or i1 %t3, %t4
  %t6 = zext i1 %t5 to i32
");
}

#[test]
fn comparisons_lower_to_compare_and_widen() {
    let mut context = Context::new();
    lower(&mut context, "what f : float = 1.5;");
    assert_eq!(lower(&mut context, "f gt 2;"),
               "  %t2 = add i32 0, 2\n  %t3 = fcmp ogt float %f, %t2\n  %t4 = zext i1 %t3 to i32\n");

    let mut context = Context::new();
    assert_eq!(lower(&mut context, "1 di 2;"),
               "  %t1 = add i32 0, 1\n  %t2 = add i32 0, 2\n  %t3 = icmp ne i32 %t1, %t2\n  %t4 = zext i1 %t3 to i32\n");
}

#[test]
fn conditionals_emit_a_placeholder() {
    let mut context = Context::new();
    let statement = parse("if 1 then; 2; else; 3; endif;").unwrap();
    let emitted = context.emit_statement(&statement).unwrap();

    assert_eq!(emitted.code, format!("  {CONDITIONAL_PLACEHOLDER}\n"));
    assert_eq!(emitted.result, None);
    assert_eq!(context.next_temporary, 1);
}

#[test]
fn missing_terminator_is_rejected_before_parsing() {
    let error = compile_script("demo", "1;\n2\n").unwrap_err();
    assert_eq!(error,
               LineError { line:  2,
                           text:  "2".to_string(),
                           error: Error::Parse(ParseError::MissingTerminator { line: "2".to_string() }), });
}

#[test]
fn first_error_stops_the_listing() {
    let error = compile_script("demo", "1;\ny + 1;\nz;\n").unwrap_err();
    assert_eq!(error.line, 2);
    assert_eq!(error.error,
               Error::Runtime(RuntimeError::UnknownVariable { name: "y".to_string() }));

    let error = compile_script("demo", "what x : double = 1;").unwrap_err();
    assert_eq!(error.error,
               Error::Type(TypeError::FractionalLiteralRequired { literal: "1".to_string(),
                                                                  kind:    NumericKind::Double, }));
}

#[test]
fn empty_script_yields_an_empty_main() {
    let listing = compile_script("empty", "").unwrap();
    assert!(listing.ends_with("define i32 @main() {\nentry:\n  ret i32 0\n}\n"));
}

#[test]
fn variables_named_like_temporaries_get_their_own_storage() {
    let listing = compile_script("demo", "what t1 : int = 5;\nt1 + 1;\n").unwrap();
    assert_eq!(listing.matches("%t1 =").count(), 1);
    assert!(listing.contains("  %t1.var = alloca i32\n  store i32 %t1, i32* %t1.var\n"));
    assert!(listing.contains("  %t3 = add i32 %t1.var, %t2\n"));

    let mut context = Context::new();
    lower(&mut context, "1;");
    assert_eq!(lower(&mut context, "what t1 : int = 5;"),
               "  %t2 = add i32 0, 5\n  %t1.var = alloca i32\n  store i32 %t2, i32* %t1.var\n");

    let mut context = Context::new();
    assert_eq!(lower(&mut context, "what t1x : int = 5;"),
               "  %t1 = add i32 0, 5\n  %t1x = alloca i32\n  store i32 %t1, i32* %t1x\n");
}

#[test]
fn redeclaration_reuses_storage_of_the_same_kind() {
    let mut context = Context::new();
    assert_eq!(lower(&mut context, "what x : int = 1;"),
               "  %t1 = add i32 0, 1\n  %x = alloca i32\n  store i32 %t1, i32* %x\n");
    assert_eq!(lower(&mut context, "what x : int = 2;"),
               "  %t2 = add i32 0, 2\n  store i32 %t2, i32* %x\n");
    assert_eq!(lower(&mut context, "what x : double = 2.5;"),
               "  %t3 = fadd double 0.0, 2.5\n  %x.double = alloca double\n  store double %t3, double* %x.double\n");
    assert_eq!(lower(&mut context, "x * 2;"), "  %t4 = add i32 0, 2\n  %t5 = fmul double %x.double, %t4\n");
    assert_eq!(lower(&mut context, "what x : int = 3;"),
               "  %t6 = add i32 0, 3\n  store i32 %t6, i32* %x\n");

    let emitted = context.emit_statement(&parse("x;").unwrap()).unwrap();
    assert_eq!(emitted.code, "");
    assert_eq!(emitted.result.as_deref(), Some("%x"));
}
