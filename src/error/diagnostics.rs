use std::fmt;

use thiserror::Error;

use crate::error::{ParseError, RuntimeError, ScanError};

/// Exit code for input the scanner or parser rejected.
pub const EXIT_STATIC_ERROR: u8 = 65;
/// Exit code for a program halted by a runtime error.
pub const EXIT_RUNTIME_ERROR: u8 = 70;

/// One reported error from any stage of the pipeline.
#[derive(Debug, Error)]
pub enum Diagnostic {
    /// Raised by the lexer.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Raised by the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Raised by the evaluator.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Collects the errors of a run, in the order they were reported.
///
/// Each pipeline stage receives the collector and records into it instead of
/// flipping global flags; the collector then decides whether the run
/// succeeded and which exit code it maps to.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        tracing::debug!(%diagnostic, "diagnostic reported");
        self.entries.push(diagnostic);
    }

    /// Returns `true` if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the scanner or the parser reported an error.
    ///
    /// A program with static errors is never executed.
    #[must_use]
    pub fn has_static_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| matches!(d, Diagnostic::Scan(_) | Diagnostic::Parse(_)))
    }

    /// Returns `true` if execution was halted by a runtime error.
    #[must_use]
    pub fn has_runtime_error(&self) -> bool {
        self.entries.iter().any(|d| matches!(d, Diagnostic::Runtime(_)))
    }

    /// Maps the collected diagnostics to a process exit code.
    ///
    /// # Example
    /// ```
    /// use treelox::error::{Diagnostics, ScanError};
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// assert_eq!(diagnostics.exit_code(), 0);
    ///
    /// diagnostics.report(ScanError::UnterminatedString { line: 1 });
    /// assert_eq!(diagnostics.exit_code(), 65);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.has_static_errors() {
            EXIT_STATIC_ERROR
        } else if self.has_runtime_error() {
            EXIT_RUNTIME_ERROR
        } else {
            0
        }
    }

    /// Iterates over the recorded diagnostics in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Converts the collector into the outcome of a run.
    ///
    /// # Errors
    /// Returns `self` if any diagnostic was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
