use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix operators.
    ///
    /// Prefix operators nest to the right: `!!x` parses as `!(!x)`.
    ///
    /// The rule is: `unary := ("!" | "-") unary | call`
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Bang => UnaryOperator::Not,
            TokenKind::Minus => UnaryOperator::Negate,
            _ => return self.call(),
        };

        let line = self.advance().line;
        let expr = self.unary()?;
        Ok(Expr::Unary { op,
                         expr: Box::new(expr),
                         line })
    }

    /// Parses a primary expression followed by any number of call suffixes.
    ///
    /// The rule is: `call := primary ("(" arguments? ")")*`
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.match_kind(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    /// Parses the argument list of a call whose `(` was just consumed.
    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_comma_separated(TokenKind::RightParen,
                                                   "Can't have more than 255 arguments.",
                                                   Self::expression)?;
        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        line: paren.line })
    }

    /// Parses literals, variable references and parenthesized groups.
    ///
    /// The rule is: `primary := "true" | "false" | "nil" | NUMBER | STRING |
    /// IDENTIFIER | "(" expression ")"`
    ///
    /// # Errors
    /// Returns `Expect expression.` at any other token.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();
        let line = token.line;

        let expr = match token.kind {
            TokenKind::False => Expr::Literal { value: LiteralValue::Bool(false),
                                                line },
            TokenKind::True => Expr::Literal { value: LiteralValue::Bool(true),
                                               line },
            TokenKind::Nil => Expr::Literal { value: LiteralValue::Nil,
                                              line },
            TokenKind::Number | TokenKind::String => {
                let value = token.literal
                                 .clone()
                                 .ok_or_else(|| ParseError::at(token, "Expect expression."))?;
                Expr::Literal { value, line }
            },
            TokenKind::Identifier => Expr::Variable { name: token.lexeme.clone(),
                                                      line },
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping { expr: Box::new(expr),
                                           line });
            },
            _ => return Err(ParseError::at(token, "Expect expression.")),
        };

        self.advance();
        Ok(expr)
    }
}
