use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_ARGUMENTS, ParseResult, Parser},
    },
};

impl<'a> Parser<'a> {
    /// Returns the current token without consuming it.
    ///
    /// Past the end of the stream this keeps returning the `EOF` sentinel.
    pub(in crate::interpreter::parser) fn peek(&self) -> &'a Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Returns the most recently consumed token.
    pub(in crate::interpreter::parser) fn previous(&self) -> &'a Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token and returns it. The `EOF` sentinel is
    /// never consumed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has one of the given kinds.
    pub(in crate::interpreter::parser) fn match_kind(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the expected kind.
    ///
    /// # Errors
    /// Returns a `ParseError` carrying `message`, reported at the current
    /// token, if it has a different kind.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &str)
                                                  -> ParseResult<&'a Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(ParseError::at(self.peek(), message))
    }

    /// Records an error that does not need to unwind the parser.
    pub(in crate::interpreter::parser) fn error(&mut self, token: &Token, message: &str) {
        self.errors.push(ParseError::at(token, message));
    }

    /// Parses a comma-separated list of items up to (not including) a
    /// closing token.
    ///
    /// This utility is shared by parameter lists and call arguments. An
    /// immediately encountered closing token produces an empty list. Lists
    /// longer than [`MAX_ARGUMENTS`] record `limit_message` once and keep
    /// parsing.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)?`
    ///
    /// # Errors
    /// Propagates any error from `parse_item`.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: TokenKind,
        limit_message: &str,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(closing) {
            return Ok(items);
        }

        loop {
            if items.len() == MAX_ARGUMENTS {
                let token = self.peek();
                self.error(token, limit_message);
            }
            items.push(parse_item(self)?);

            if !self.match_kind(&[TokenKind::Comma]) {
                break;
            }
        }
        Ok(items)
    }
}
