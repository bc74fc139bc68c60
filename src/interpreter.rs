/// The environment module implements lexical scopes.
///
/// An environment maps names to values and links to the scope enclosing it.
/// Closures keep their defining environment alive by holding a reference to
/// it.
pub mod environment;
/// The evaluator module executes statements and computes expression values.
///
/// The evaluator walks the AST produced by the parser, manages the chain of
/// environments, calls functions and reports runtime errors with the line
/// they occurred on. Execution stops at the first runtime error.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, lexeme, literal payload and source line. It reports
/// unexpected characters and unterminated strings and keeps scanning after
/// them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the token stream. It
/// desugars `for` loops into `while` loops, records syntax errors and
/// resynchronizes at statement boundaries so several errors can be reported
/// in one run.
pub mod parser;
/// Renders AST nodes as parenthesized prefix text.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: nil, booleans, numbers, strings and callables.
/// - Implements truthiness, structural equality and display.
/// - Declares the `Callable` capability.
pub mod value;
