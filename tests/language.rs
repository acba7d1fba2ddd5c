use std::fs;

use ember::{
    Error, Interpreter, Value,
    error::{EvalError, LexError, ParseError, ResolutionError},
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_ember_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No ember examples found in book/src");
}

fn extract_ember_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```ember") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str, expected: Value) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_number(src: &str, expected: f64) {
    assert_success(src, Value::Number(expected));
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn unicode_identifiers() {
    assert_number("let café = 1; const größe = 2; café + größe", 3.0);
}

#[test]
fn declaration_persists_across_runs() {
    let mut interpreter = Interpreter::new();
    interpreter.run("let x = 5;").unwrap();

    assert_eq!(interpreter.run("x").unwrap(), Value::Number(5.0));
}

#[test]
fn declarations_yield_bound_value() {
    assert_number("let x = 5;", 5.0);
    assert_success("let x;", Value::Null);
    assert_success("let x; x", Value::Null);
}

#[test]
fn empty_program_is_null() {
    assert_success("", Value::Null);
    assert_success("  \n\t ", Value::Null);
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_number("1 + 2 * 3", 7.0);
    assert_number("(1 + 2) * 3", 9.0);
    assert_number("10 - 4 - 3", 3.0);
    assert_number("64 / 4 / 2", 8.0);
    assert_number("7 % 4 * 2", 6.0);
    assert_number("1 / 2", 0.5);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_success("1 / 0", Value::Number(f64::INFINITY));

    let Value::Number(n) = run("0 % 0").unwrap() else {
        panic!("expected a number");
    };
    assert!(n.is_nan());
}

#[test]
fn non_numeric_arithmetic_is_null() {
    assert_success("true + 1", Value::Null);
    assert_success("null * 2", Value::Null);
}

#[test]
fn non_numeric_arithmetic_still_evaluates_both_sides() {
    let mut interpreter = Interpreter::new();
    interpreter.run("let x = 1; let y = 1;").unwrap();

    assert_eq!(interpreter.run("null + (x = 2)").unwrap(), Value::Null);
    assert_eq!(interpreter.run("(y = 3) + null").unwrap(), Value::Null);
    assert_eq!(interpreter.run("x + y").unwrap(), Value::Number(5.0));
}

#[test]
fn assignment_is_right_associative() {
    assert_number("let a = 0; let b = 0; a = b = 4; a + b", 8.0);
}

#[test]
fn builtin_constants() {
    assert_success("true", Value::Bool(true));
    assert_success("false", Value::Bool(false));
    assert_success("null", Value::Null);

    assert!(matches!(assert_failure("true = false;"),
                     Error::Eval(EvalError::Resolution(ResolutionError::ConstantReassignment { .. }))));
    assert!(matches!(assert_failure("let null = 1;"),
                     Error::Eval(EvalError::Resolution(ResolutionError::Redeclaration { .. }))));
}

#[test]
fn constant_reassignment_fails() {
    let error = assert_failure("const x = 1; x = 2;");

    assert_eq!(error,
               Error::Eval(EvalError::Resolution(ResolutionError::ConstantReassignment {
                   name: "x".to_string(),
                   line: 1,
               })));
}

#[test]
fn redeclaration_fails() {
    assert!(matches!(assert_failure("let x = 1;\nlet x = 2;"),
                     Error::Eval(EvalError::Resolution(ResolutionError::Redeclaration { line: 2, .. }))));
}

#[test]
fn unknown_identifier_fails() {
    assert!(matches!(assert_failure("y"),
                     Error::Eval(EvalError::Resolution(ResolutionError::UnknownVariable { .. }))));
    assert!(matches!(assert_failure("y = 3;"),
                     Error::Eval(EvalError::Resolution(ResolutionError::UnknownVariable { .. }))));
}

#[test]
fn calling_undeclared_identifier_is_a_resolution_error() {
    let error = assert_failure("foo()");

    assert_eq!(error,
               Error::Eval(EvalError::Resolution(ResolutionError::UnknownVariable {
                   name: "foo".to_string(),
                   line: 1,
               })));
}

#[test]
fn calling_a_non_function_fails() {
    assert!(matches!(assert_failure("let x = 1; x()"),
                     Error::Eval(EvalError::NotCallable { .. })));
    assert!(matches!(assert_failure("print()()"),
                     Error::Eval(EvalError::NotCallable { .. })));
}

#[test]
fn object_literal_with_shorthand() {
    let value = run("let b = 2; { a: 1, b }").unwrap();
    let object = value.as_object().expect("object value");

    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(object.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(object.get("b"), Some(&Value::Number(2.0)));
}

#[test]
fn object_shorthand_reads_current_binding() {
    let value = run("let b = 2; b = 7; { b, }").unwrap();

    assert_eq!(value.to_string(), "{ b: 7 }");
}

#[test]
fn object_shorthand_requires_a_variable() {
    assert!(matches!(assert_failure("{ missing }"),
                     Error::Eval(EvalError::Resolution(ResolutionError::UnknownVariable { .. }))));
}

#[test]
fn nested_objects_render_in_order() {
    let value = run("let inner = { z: 1 }; { y: inner, x: {} }").unwrap();

    assert_eq!(value.to_string(), "{ y: { z: 1 }, x: {} }");
}

#[test]
fn member_access_is_unsupported() {
    assert!(matches!(assert_failure("let o = { a: 1 }; o.a"),
                     Error::Eval(EvalError::Unsupported { kind: "MemberExpr", .. })));
    assert!(matches!(assert_failure("let o = { a: 1 }; o[0]"),
                     Error::Eval(EvalError::Unsupported { kind: "MemberExpr", .. })));
}

#[test]
fn member_assignment_is_rejected() {
    assert!(matches!(assert_failure("let o = { a: 1 }; o.a = 2;"),
                     Error::Eval(EvalError::InvalidAssignmentTarget { .. })));
    assert!(matches!(assert_failure("1 = 2;"),
                     Error::Eval(EvalError::InvalidAssignmentTarget { .. })));
}

#[test]
fn native_print_returns_null() {
    assert_success("print(1, { a: 2 })", Value::Null);
}

#[test]
fn native_time_returns_a_number() {
    assert!(run("time()").unwrap().as_number().is_some_and(|ms| ms > 0.0));
}

#[test]
fn natives_are_constants() {
    assert!(matches!(assert_failure("print = 1;"),
                     Error::Eval(EvalError::Resolution(ResolutionError::ConstantReassignment { .. }))));
}

#[test]
fn empty_interpreter_has_no_natives() {
    let mut interpreter = Interpreter::empty();

    assert!(interpreter.run("print(1)").is_err());
    assert_eq!(interpreter.run("true").unwrap(), Value::Bool(true));
}

#[test]
fn lexical_errors() {
    assert_eq!(assert_failure("let x = 1;\nlet y = \"s\";"),
               Error::Parse(ParseError::Lex(LexError::UnrecognizedCharacter { character: '"',
                                                                              line:      2, })));
    assert!(matches!(assert_failure("a_b"), Error::Parse(ParseError::Lex(_))));
    assert!(matches!(assert_failure("x > 1"), Error::Parse(ParseError::Lex(_))));
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("const x;"),
                     Error::Parse(ParseError::ConstantWithoutInitializer { .. })));
    assert!(matches!(assert_failure("let x = 1"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("let = 1;"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("1 +"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("{ a: 1 b: 2 }"), Error::Parse(_)));
    assert!(matches!(assert_failure("a.1"), Error::Parse(ParseError::InvalidMemberProperty { .. })));
}

#[test]
fn parse_errors_abort_before_evaluation() {
    let mut interpreter = Interpreter::new();

    assert!(interpreter.run("let x = 1; let y = ;").is_err());
    assert!(interpreter.run("x").is_err());
}

#[test]
fn errors_leave_interpreter_usable() {
    let mut interpreter = Interpreter::new();

    assert!(interpreter.run("let x = 1; x = y;").is_err());
    assert_eq!(interpreter.run("x").unwrap(), Value::Number(1.0));
}

#[test]
fn error_messages_name_the_line() {
    let error = assert_failure("let x = 1;\n\nx = undefinedName;");

    assert_eq!(error.to_string(),
               "Error on line 3: Cannot resolve 'undefinedName' as it does not exist.");
}
