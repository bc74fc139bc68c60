use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

/// Where in the token stream a parse error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// At the end-of-input sentinel.
    End,
    /// At a token with the given lexeme.
    Lexeme(String),
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => write!(f, " at end"),
            Self::Lexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A violation of the grammar.
///
/// Parse errors are reported in the form `[line N] Error at 'x': message` and
/// never abort the parse as a whole: the parser records them and
/// resynchronizes at the next statement boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    /// The source line where the error occurred.
    pub line:     usize,
    /// The token the error is reported at.
    pub location: ErrorLocation,
    /// Details about the parse error.
    pub message:  String,
}

impl ParseError {
    /// Creates an error reported at `token`.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     error::ParseError,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let token = Token::new(TokenKind::Semicolon, ";", None, 3);
    /// let error = ParseError::at(&token, "Expect expression.");
    ///
    /// assert_eq!(error.to_string(), "[line 3] Error at ';': Expect expression.");
    /// ```
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        let location = if token.kind == TokenKind::Eof {
            ErrorLocation::End
        } else {
            ErrorLocation::Lexeme(token.lexeme.clone())
        };

        Self { line: token.line,
               location,
               message: message.into() }
    }
}
