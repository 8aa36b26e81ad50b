//! Parse error types for PO files.

use thiserror::Error;

/// An error that occurred while parsing PO text.
///
/// Only unrecoverable syntax is reported; unknown keywords and other stray
/// lines are skipped by the parser instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted string with no closing quote before the end of its line.
    #[error("line {line}: unterminated string literal")]
    UnterminatedString {
        /// 1-based line number.
        line: usize,
        /// 1-based byte column where the closing quote was expected.
        column: usize,
    },
}

impl ParseError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnterminatedString { line, .. } => *line,
        }
    }

    /// The 1-based byte column the error points at.
    pub fn column(&self) -> usize {
        match self {
            ParseError::UnterminatedString { column, .. } => *column,
        }
    }
}
