//! Miette diagnostic wrapper for .po parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use pomo::ParseError;
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for .po parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(pomo::syntax))]
pub struct PoDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("string starts here and is never closed")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PoDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column, message, help) = match err {
            ParseError::UnterminatedString { line, column } => (
                *line,
                *column,
                "unterminated string literal".to_string(),
                Some("close the string with a `\"` on the same line".to_string()),
            ),
        };

        let line_start = content
            .split('\n')
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>();
        let line_text = content[line_start.min(content.len())..]
            .split('\n')
            .next()
            .unwrap_or_default();

        // Point at the quote left open; fall back to the reported column.
        let offset = unclosed_quote(line_text).unwrap_or_else(|| column.saturating_sub(1))
            + line_start;

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());
        let length = usize::from(offset < content.len());

        PoDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            message,
            help,
        }
    }
}

/// Byte index of the `"` that opens a string never closed on this line.
fn unclosed_quote(line: &str) -> Option<usize> {
    let mut opened_at = None;
    let mut bytes = line.bytes().enumerate();
    while let Some((index, byte)) = bytes.next() {
        match byte {
            b'\\' if opened_at.is_some() => {
                bytes.next();
            }
            b'"' if opened_at.is_some() => opened_at = None,
            b'"' => opened_at = Some(index),
            _ => {}
        }
    }
    opened_at
}
