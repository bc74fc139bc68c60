use std::fs;

use pretty_assertions::assert_eq;
use treelox::{
    RunOptions,
    error::{Diagnostic, Diagnostics, RuntimeError},
    interpreter::evaluator::core::Interpreter,
    run, run_with,
};
use walkdir::WalkDir;

const EXPECT_PREFIX: &str = "// expect: ";
const ERROR_PREFIX: &str = "// error: ";

#[test]
fn scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").sort_by_file_name()
                                     .into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "lox")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let expected_output = annotations(&source, EXPECT_PREFIX);
        let expected_errors = annotations(&source, ERROR_PREFIX);

        let (output, result) = execute(&source);
        assert_eq!(output.lines().collect::<Vec<_>>(),
                   expected_output,
                   "output of {path:?} differs");

        let errors = match result {
            Ok(()) => Vec::new(),
            Err(diagnostics) => diagnostics.iter().map(ToString::to_string).collect(),
        };
        assert_eq!(errors, expected_errors, "diagnostics of {path:?} differ");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn annotations<'a>(source: &'a str, prefix: &str) -> Vec<&'a str> {
    source.lines()
          .filter_map(|line| line.find(prefix).map(|at| &line[at + prefix.len()..]))
          .collect()
}

fn execute(src: &str) -> (String, Result<(), Diagnostics>) {
    let mut out = Vec::new();
    let result = run(src, &mut out);
    (String::from_utf8(out).expect("output is UTF-8"), result)
}

fn output_of(src: &str) -> String {
    match execute(src) {
        (output, Ok(())) => output,
        (_, Err(e)) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run(src, &mut Vec::new()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Diagnostics {
    match run(src, &mut Vec::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(output_of("print 1 + 2 * 3;"), "7\n");
    assert_eq!(output_of("print (1 + 2) * 3;"), "9\n");
    assert_eq!(output_of("print 10 / 4;"), "2.5\n");
    assert_eq!(output_of("print -2 - -3;"), "1\n");
    assert_eq!(output_of("print 0.1 + 0.2;"), "0.3\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(output_of("var a = \"foo\"; var b = \"bar\"; print a + b;"), "foobar\n");
    assert_failure("print \"a\" + 1;");
}

#[test]
fn truthiness() {
    assert_eq!(output_of("if (0) print \"zero\"; if (\"\") print \"empty\"; if (nil) print 1;"),
               "zero\nempty\n");
    assert_eq!(output_of("print !nil; print !0;"), "true\nfalse\n");
}

#[test]
fn logical_operators_return_operands() {
    assert_eq!(output_of("print nil or \"fallback\"; print 1 and 2; print false and boom;"),
               "fallback\n2\nfalse\n");
}

#[test]
fn short_circuit_skips_side_effects() {
    assert_eq!(output_of("var hit = false; fun mark() { hit = true; return true; }\n\
                          var r = true or mark(); print hit;"),
               "false\n");
}

#[test]
fn closures_capture_their_scope() {
    let src = "fun makeCounter() {
                   var i = 0;
                   fun count() { i = i + 1; return i; }
                   return count;
               }
               var c = makeCounter();
               print c(); print c();
               var d = makeCounter();
               print d();";
    assert_eq!(output_of(src), "1\n2\n1\n");
}

#[test]
fn recursion() {
    assert_eq!(output_of("fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }\n\
                          print fib(15);"),
               "610\n");
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(output_of("fun f() {} print f(); print f;"), "nil\n<fn f>\n");
    assert_eq!(output_of("print clock;"), "<native fn>\n");
}

#[test]
fn clock_is_callable() {
    assert_success("var t = clock(); if (t < 0) print \"backwards\";");
    assert_eq!(output_of("print clock() == clock() or clock() > 0;"), "true\n");
}

#[test]
fn runtime_error_halts_remaining_statements() {
    let (output, result) = execute("print 1;\nprint -\"x\";\nprint 2;");
    let diagnostics = result.unwrap_err();

    assert_eq!(output, "1\n");
    assert_eq!(diagnostics.to_string(), "[line 2] Error: Operand must be a number.");
    assert_eq!(diagnostics.exit_code(), 70);
    assert!(matches!(diagnostics.iter().next(),
                     Some(Diagnostic::Runtime(RuntimeError::OperandMustBeNumber { line: 2 }))));
}

#[test]
fn static_errors_prevent_execution() {
    let (output, result) = execute("print \"before\";\nprint 1 +;\n");
    let diagnostics = result.unwrap_err();

    assert_eq!(output, "");
    assert!(diagnostics.has_static_errors());
    assert_eq!(diagnostics.exit_code(), 65);
}

#[test]
fn scan_errors_are_all_reported() {
    let diagnostics = assert_failure("var a = 1 @ 2;\nprint #;\n\"open");
    let messages = diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>();

    assert_eq!(messages[..3],
               ["[line 1] Error: Unexpected character.",
                "[line 2] Error: Unexpected character.",
                "[line 3] Error: Unterminated string."]);
}

#[test]
fn arity_and_callability_are_checked() {
    assert_eq!(assert_failure("fun f(a, b) {} f(1);").to_string(),
               "[line 1] Error: Expected 2 arguments but got 1.");
    assert_eq!(assert_failure("var x = 1; x();").to_string(),
               "[line 1] Error: Can only call functions.");
}

#[test]
fn interpreter_state_persists_across_runs() {
    let mut out = Vec::new();
    {
        let mut interpreter = Interpreter::new(&mut out);
        let options = RunOptions::default();
        run_with("var total = 40;", &options, &mut interpreter).unwrap();
        run_with("fun add(n) { total = total + n; }", &options, &mut interpreter).unwrap();
        run_with("add(2); print total;", &options, &mut interpreter).unwrap();
    }
    assert_eq!(String::from_utf8(out).unwrap(), "42\n");
}

#[test]
fn plain_run_writes_only_program_output() {
    assert_eq!(output_of("var a = 1; print a;"), "1\n");
}

#[test]
fn debug_dumps() {
    let mut out = Vec::new();
    {
        let mut interpreter = Interpreter::new(&mut out);
        let options = RunOptions { dump_tokens: true,
                                   dump_ast:    true, };
        run_with("1 + 2;", &options, &mut interpreter).unwrap();
    }
    assert_eq!(String::from_utf8(out).unwrap(),
               "[NUMBER] token: 1\n[PLUS] token: +\n[NUMBER] token: 2\n[SEMICOLON] token: ;\n\
                [EOF] token: \n(+ 1 2)\n");
}
