use thiserror::Error;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that does not start any token.
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// End of input was reached before the closing `"`.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The source line where the input ended.
        line: usize,
    },
}
