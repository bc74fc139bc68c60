//! # treelox
//!
//! treelox is a tree-walking interpreter for a small dynamically typed
//! scripting language in the Lox family. It scans source text into tokens,
//! parses them into an abstract syntax tree and executes the tree directly,
//! with lexical scoping, first-class functions and closures.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Statement,
    error::{Diagnostics, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, scan_tokens},
        parser::core::Parser,
        printer::{print_expr, print_statement},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the operator
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code and
/// the `Diagnostics` collector that gathers them. Every error renders the
/// line it occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Maps the outcome of a run to a process exit code.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments and
/// value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive prompt.
pub mod repl;
/// General helpers shared by several phases, such as number formatting.
pub mod util;

/// Selects the debug dumps produced while running a program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Writes every scanned token, one per line, before parsing.
    pub dump_tokens: bool,
    /// Writes the parsed program in prefix form before executing it.
    pub dump_ast:    bool,
}

/// Runs a program in a fresh interpreter.
///
/// `print` output goes to `out`. Errors are not written anywhere; they are
/// returned for the caller to report.
///
/// # Errors
/// Returns every scan and parse error if the program is malformed, or the
/// runtime error that halted it.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// treelox::run("var greeting = \"hi\"; print greeting + \"!\";", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "hi!\n");
///
/// // 'x' is not defined
/// let err = treelox::run("print x;", &mut Vec::new()).unwrap_err();
/// assert_eq!(err.to_string(), "[line 1] Error: Undefined variable 'x'.");
/// assert_eq!(err.exit_code(), 70);
/// ```
pub fn run(source: &str, out: &mut dyn Write) -> Result<(), Diagnostics> {
    let mut interpreter = Interpreter::new(out);
    run_with(source, &RunOptions::default(), &mut interpreter)
}

/// Runs a program in an existing interpreter.
///
/// Globals defined by earlier runs stay visible. The program is only
/// executed if it scanned and parsed without errors; the requested dumps are
/// written to the interpreter's output either way.
///
/// # Errors
/// Returns the diagnostics of the run if any stage reported an error.
pub fn run_with(source: &str,
                options: &RunOptions,
                interpreter: &mut Interpreter<'_>)
                -> Result<(), Diagnostics> {
    let mut diagnostics = Diagnostics::new();

    let tokens = scan_tokens(source, &mut diagnostics);
    if options.dump_tokens
       && let Err(e) = dump_tokens(&tokens, interpreter)
    {
        diagnostics.report(e);
        return Err(diagnostics);
    }

    let statements = Parser::new(&tokens).parse(&mut diagnostics);
    if options.dump_ast
       && let Err(e) = dump_ast(&statements, interpreter)
    {
        diagnostics.report(e);
        return Err(diagnostics);
    }

    if diagnostics.has_static_errors() {
        tracing::debug!(errors = diagnostics.len(), "skipping execution");
        return Err(diagnostics);
    }

    if let Err(e) = interpreter.interpret(&statements) {
        diagnostics.report(e);
    }
    diagnostics.into_result()
}

fn dump_tokens(tokens: &[Token], interpreter: &mut Interpreter<'_>) -> Result<(), RuntimeError> {
    tokens.iter()
          .try_for_each(|token| interpreter.emit(token.line, token))
}

/// A program made of a single expression statement is dumped as the bare
/// expression.
fn dump_ast(statements: &[Statement],
            interpreter: &mut Interpreter<'_>)
            -> Result<(), RuntimeError> {
    if let [Statement::Expression { expr, line }] = statements {
        return interpreter.emit(*line, print_expr(expr));
    }
    statements.iter()
              .try_for_each(|s| interpreter.emit(s.line_number(), print_statement(s)))
}
