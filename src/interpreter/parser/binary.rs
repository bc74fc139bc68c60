use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an assignment or falls through to logical `or`.
    ///
    /// The left-hand side is parsed as an ordinary expression first. If an
    /// `=` follows, it must have been a bare variable reference; any other
    /// target is recorded as an error and the right-hand expression is
    /// returned unassigned, without unwinding.
    ///
    /// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    pub(in crate::interpreter::parser) fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logical_or()?;

        if self.match_kind(&[TokenKind::Equal]) {
            let equals = self.previous();
            let value = self.assignment()?;

            if let Expr::Variable { name, line } = expr {
                return Ok(Expr::Assign { name,
                                         value: Box::new(value),
                                         line });
            }

            self.error(equals, "Invalid assignment target.");
            return Ok(value);
        }

        Ok(expr)
    }

    /// Parses logical `or` expressions.
    ///
    /// The rule is: `logic_or := logic_and ("or" logic_and)*`
    fn logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.logical_and()?;
        while self.match_kind(&[TokenKind::Or]) {
            let line = self.previous().line;
            let right = self.logical_and()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::Or,
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses logical `and` expressions.
    ///
    /// The rule is: `logic_and := equality ("and" equality)*`
    fn logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;
        while self.match_kind(&[TokenKind::And]) {
            let line = self.previous().line;
            let right = self.equality()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::And,
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses equality operators.
    ///
    /// The rule is: `equality := comparison (("!=" | "==") comparison)*`
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.comparison()?;
        while let Some(op) = token_to_binary_operator(self.peek().kind)
              && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            let line = self.advance().line;
            let right = self.comparison()?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
        }
        Ok(left)
    }

    /// Parses relational operators.
    ///
    /// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        while let Some(op) = token_to_binary_operator(self.peek().kind)
              && matches!(op,
                          BinaryOperator::Greater
                          | BinaryOperator::GreaterEqual
                          | BinaryOperator::Less
                          | BinaryOperator::LessEqual)
        {
            let line = self.advance().line;
            let right = self.term()?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `term := factor (("-" | "+") factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        while let Some(op) = token_to_binary_operator(self.peek().kind)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.advance().line;
            let right = self.factor()?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `factor := unary (("/" | "*") unary)*`
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.unary()?;
        while let Some(op) = token_to_binary_operator(self.peek().kind)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = self.advance().line;
            let right = self.unary()?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
        }
        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for arithmetic, comparison and equality
/// tokens and `None` for all other tokens (including `and` / `or`, which are
/// logical operators).
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::BangEqual), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
