use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block body delimited by braces.
    ///
    /// The opening `{` has already been consumed. Declarations are parsed
    /// until the closing `}`; a broken declaration inside the block is
    /// recorded and skipped like one at the top level.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// # Errors
    /// Returns a `ParseError` if the input ends before the closing `}`.
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
