use crate::{
    ast::{Expr, Statement},
    error::{Diagnostics, ParseError},
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of parameters of a function and arguments of a call.
pub const MAX_ARGUMENTS: usize = 255;

/// A recursive-descent parser over a scanned token stream.
///
/// The parser never aborts on a syntax error. An error raised inside a
/// declaration is recorded, the parser skips ahead to the next statement
/// boundary and parsing continues, so one pass reports every independent
/// mistake in a file. Some errors (an invalid assignment target, too many
/// arguments) are recorded without unwinding at all.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:  &'a [Token],
    pub(in crate::interpreter::parser) current: usize,
    pub(in crate::interpreter::parser) errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// The slice must end with a [`TokenKind::Eof`] token, as produced by
    /// [`scan_tokens`](crate::interpreter::lexer::scan_tokens).
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
                      "token stream must end with EOF");
        Self { tokens,
               current: 0,
               errors: Vec::new() }
    }

    /// Parses the whole token stream into a list of statements.
    ///
    /// Declarations that failed to parse are left out of the result; their
    /// errors are recorded in `diagnostics` in source order.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     error::Diagnostics,
    ///     interpreter::{lexer::scan_tokens, parser::core::Parser},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = scan_tokens("var a = ; print 1;", &mut diagnostics);
    /// let statements = Parser::new(&tokens).parse(&mut diagnostics);
    ///
    /// assert_eq!(statements.len(), 1);
    /// assert_eq!(diagnostics.to_string(), "[line 1] Error at ';': Expect expression.");
    /// ```
    pub fn parse(mut self, diagnostics: &mut Diagnostics) -> Vec<Statement> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        tracing::debug!(statements = statements.len(),
                        errors = self.errors.len(),
                        "parsed program");
        for error in self.errors {
            diagnostics.report(error);
        }
        statements
    }

    /// Parses one declaration, recovering from any error inside it.
    ///
    /// Grammar: `declaration := funDecl | varDecl | statement`
    ///
    /// # Returns
    /// The parsed statement, or `None` if the declaration was skipped.
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> Option<Statement> {
        let result = if self.match_kind(&[TokenKind::Fun]) {
            self.function()
        } else if self.match_kind(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.errors.push(error);
                self.synchronize();
                None
            },
        }
    }

    /// Discards tokens until the start of the next statement.
    ///
    /// Stops right after a `;` or right before a keyword that begins a
    /// statement.
    fn synchronize(&mut self) {
        use TokenKind::{Class, For, Fun, If, Print, Return, Semicolon, Var, While};

        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == Semicolon {
                return;
            }
            if matches!(self.peek().kind, Class | Fun | Var | For | If | While | Print | Return) {
                return;
            }
            self.advance();
        }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{BinaryOperator, Expr, LiteralValue, Statement},
        error::Diagnostics,
        interpreter::{lexer::scan_tokens, parser::core::Parser, printer::print_statement},
    };

    fn parse(source: &str) -> (Vec<Statement>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens(source, &mut diagnostics);
        let statements = Parser::new(&tokens).parse(&mut diagnostics);
        (statements, diagnostics)
    }

    fn printed(source: &str) -> Vec<String> {
        let (statements, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics}");
        statements.iter().map(print_statement).collect()
    }

    fn errors(source: &str) -> Vec<String> {
        let (_, diagnostics) = parse(source);
        diagnostics.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn precedence_and_left_associativity() {
        assert_eq!(printed("1 + 2 * 3 - 4 / 2;"), ["(; (- (+ 1 (* 2 3)) (/ 4 2)))"]);
        assert_eq!(printed("1 - 2 - 3;"), ["(; (- (- 1 2) 3))"]);
        assert_eq!(printed("!a == b < -c;"), ["(; (== (! a) (< b (- c))))"]);
        assert_eq!(printed("a or b and c;"), ["(; (or a (and b c)))"]);
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(printed("a = b = 3;"), ["(; (= a (= b 3)))"]);
    }

    #[test]
    fn calls_chain_and_group() {
        assert_eq!(printed("f(1, (2))(x);"), ["(; (call (call f 1 (group 2)) x))"]);
    }

    #[test]
    fn literal_payloads_reach_the_tree() {
        let (statements, _) = parse("\"hi\" + 2.5;");
        let Statement::Expression { expr: Expr::Binary { left, op, right, .. }, .. } =
            &statements[0]
        else {
            panic!("expected a binary expression statement");
        };

        assert_eq!(*op, BinaryOperator::Add);
        assert!(matches!(&**left,
                         Expr::Literal { value: LiteralValue::String(s), .. } if &**s == "hi"));
        assert!(matches!(&**right,
                         Expr::Literal { value: LiteralValue::Number(n), .. } if *n == 2.5));
    }

    #[test]
    fn for_loop_desugars_into_while() {
        assert_eq!(printed("for (var i = 0; i < 3; i = i + 1) print i;"),
                   ["(block (var i = 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))"]);
        assert_eq!(printed("for (;;) print 1;"), ["(while true (print 1))"]);
    }

    #[test]
    fn function_declaration() {
        assert_eq!(printed("fun add(a, b) { return a + b; }"),
                   ["(fun add(a b) (return (+ a b)))"]);
    }

    #[test]
    fn invalid_assignment_target_is_recorded_without_unwinding() {
        assert_eq!(errors("1 + 2 = 3; print 4;"),
                   ["[line 1] Error at '=': Invalid assignment target."]);
    }

    #[test]
    fn recovery_reports_every_broken_statement() {
        assert_eq!(errors("print ;\nvar = 2;\nprint 3;\nprint (1;"),
                   ["[line 1] Error at ';': Expect expression.",
                    "[line 2] Error at '=': Expect variable name.",
                    "[line 4] Error at ';': Expect ')' after expression."]);
    }

    #[test]
    fn valid_statements_after_an_error_are_kept() {
        let (statements, diagnostics) = parse("var 1 = 2; print \"after\";");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(statements.iter().map(print_statement).collect::<Vec<_>>(),
                   ["(print after)"]);
    }

    #[test]
    fn missing_semicolon_at_end_of_input() {
        assert_eq!(errors("print 1"), ["[line 1] Error at end: Expect ';' after value."]);
    }

    #[test]
    fn unclosed_block_is_reported_at_end() {
        assert_eq!(errors("{ print 1;"), ["[line 1] Error at end: Expect '}' after block."]);
    }

    #[test]
    fn too_many_parameters_is_recorded() {
        let params = (0..256).map(|i| format!("p{i}")).collect::<Vec<_>>().join(", ");
        let errors = errors(&format!("fun f({params}) {{}}"));

        assert_eq!(errors,
                   ["[line 1] Error at 'p255': Can't have more than 255 parameters."]);
    }

    #[test]
    fn too_many_arguments_is_recorded() {
        let args = vec!["1"; 256].join(", ");
        let errors = errors(&format!("f({args});"));

        assert_eq!(errors, ["[line 1] Error at '1': Can't have more than 255 arguments."]);
    }
}
