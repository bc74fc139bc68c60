use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, LiteralValue, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `for` loop (desugared into `while`),
    /// - an `if` statement,
    /// - a `print` statement,
    /// - a `return` statement,
    /// - a `while` loop,
    /// - a block,
    /// - an expression used as a statement.
    ///
    /// Grammar: `statement := forStmt | ifStmt | printStmt | returnStmt |
    /// whileStmt | block | exprStmt`
    pub(in crate::interpreter::parser) fn statement(&mut self) -> ParseResult<Statement> {
        let token = self.peek();
        let line = token.line;

        match token.kind {
            TokenKind::For => {
                self.advance();
                self.for_statement(line)
            },
            TokenKind::If => {
                self.advance();
                self.if_statement(line)
            },
            TokenKind::Print => {
                self.advance();
                self.print_statement(line)
            },
            TokenKind::Return => {
                self.advance();
                self.return_statement(line)
            },
            TokenKind::While => {
                self.advance();
                self.while_statement(line)
            },
            TokenKind::LeftBrace => {
                self.advance();
                Ok(Statement::Block { statements: self.block()?,
                                      line })
            },
            _ => self.expression_statement(),
        }
    }

    /// Parses a variable declaration whose `var` was just consumed.
    ///
    /// Grammar: `varDecl := "var" IDENTIFIER ("=" expression)? ";"`
    pub(in crate::interpreter::parser) fn var_declaration(&mut self) -> ParseResult<Statement> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kind(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Statement::Var { name: name.lexeme.clone(),
                            initializer,
                            line: name.line })
    }

    /// Parses a function declaration whose `fun` was just consumed.
    ///
    /// Grammar: `funDecl := "fun" IDENTIFIER "(" parameters? ")" block`
    ///
    /// More than 255 parameters are recorded as an error without unwinding.
    pub(in crate::interpreter::parser) fn function(&mut self) -> ParseResult<Statement> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let params = self.parse_comma_separated(TokenKind::RightParen,
                                                "Can't have more than 255 parameters.",
                                                |parser| {
                                                    parser.consume(TokenKind::Identifier,
                                                                   "Expect parameter name.")
                                                          .map(|t| t.lexeme.clone())
                                                })?;
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.block()?;

        Ok(Statement::Function(Rc::new(FunctionDef { name: name.lexeme.clone(),
                                                     params,
                                                     body,
                                                     line: name.line })))
    }

    /// Parses a `for` loop and desugars it.
    ///
    /// ```text
    ///     for (<init>; <cond>; <incr>) <body>
    /// ```
    /// becomes
    /// ```text
    ///     { <init>; while (<cond>) { <body>; <incr>; } }
    /// ```
    /// A missing condition is `true`; the outer block is only introduced when
    /// there is an initializer, the inner one only when there is an
    /// increment.
    fn for_statement(&mut self, line: usize) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kind(&[TokenKind::Semicolon]) {
            None
        } else if self.match_kind(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            let increment = Statement::Expression { line: increment.line_number(),
                                                    expr: increment };
            body = Statement::Block { statements: vec![body, increment],
                                      line };
        }

        let condition = condition.unwrap_or(Expr::Literal { value: LiteralValue::Bool(true),
                                                            line });
        body = Statement::While { condition,
                                  body: Box::new(body),
                                  line };

        if let Some(initializer) = initializer {
            body = Statement::Block { statements: vec![initializer, body],
                                      line };
        }

        Ok(body)
    }

    /// Grammar: `ifStmt := "if" "(" expression ")" statement ("else"
    /// statement)?`
    ///
    /// An `else` binds to the nearest `if`.
    fn if_statement(&mut self, line: usize) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           line })
    }

    /// Grammar: `whileStmt := "while" "(" expression ")" statement`
    fn while_statement(&mut self, line: usize) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = self.statement()?;

        Ok(Statement::While { condition,
                              body: Box::new(body),
                              line })
    }

    /// Grammar: `printStmt := "print" expression ";"`
    fn print_statement(&mut self, line: usize) -> ParseResult<Statement> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Statement::Print { expr, line })
    }

    /// Grammar: `returnStmt := "return" expression? ";"`
    fn return_statement(&mut self, line: usize) -> ParseResult<Statement> {
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Statement::Return { value, line })
    }

    /// Grammar: `exprStmt := expression ";"`
    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.peek().line;
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Statement::Expression { expr, line })
    }
}
