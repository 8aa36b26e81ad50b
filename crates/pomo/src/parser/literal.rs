//! Quoted string literals as they appear on PO lines.
//!
//! A line may hold several adjacent literals (`"a" "b"`); their decoded
//! contents are concatenated. Escapes follow C: `\n \t \r \" \\` plus the
//! less common `\a \b \f \v`, octal `\ooo` and hex `\xHH`.

use winnow::ascii::space0;
use winnow::combinator::{alt, cut_err, preceded, repeat};
use winnow::error::ErrMode;
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Why a line's literals could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralError {
    /// A literal was opened but never closed.
    Unterminated,
    /// The text is not a sequence of literals (missing opening quote, or
    /// trailing text after the last literal).
    Malformed,
}

/// Decode the literals making up the rest of a line.
///
/// `text` must already be trimmed of surrounding whitespace.
pub(crate) fn decode_literals(text: &[u8]) -> Result<Vec<u8>, LiteralError> {
    let mut input = text;
    match literals.parse_next(&mut input) {
        Ok(decoded) if input.is_empty() => Ok(decoded),
        Err(ErrMode::Cut(_)) => Err(LiteralError::Unterminated),
        _ if has_unpaired_quote(text) => Err(LiteralError::Unterminated),
        _ => Err(LiteralError::Malformed),
    }
}

/// Whether `text` holds an odd number of unescaped `"`.
///
/// Text that fails to parse as literals is only skippable when its quotes
/// pair up; otherwise a string on the line is left open.
fn has_unpaired_quote(text: &[u8]) -> bool {
    let mut open = false;
    let mut bytes = text.iter();
    while let Some(&byte) = bytes.next() {
        match byte {
            b'\\' if open => {
                bytes.next();
            }
            b'"' => open = !open,
            _ => {}
        }
    }
    open
}

/// One or more literals separated by blanks.
fn literals(input: &mut &[u8]) -> ModalResult<Vec<u8>> {
    let parts: Vec<Vec<u8>> = repeat(1.., preceded(space0, literal)).parse_next(input)?;
    space0.parse_next(input)?;
    Ok(parts.concat())
}

/// A single `"..."` literal. Once the opening quote is seen, a missing
/// closing quote is a hard failure.
fn literal(input: &mut &[u8]) -> ModalResult<Vec<u8>> {
    b'"'.parse_next(input)?;
    let decoded = literal_body(input)?;
    cut_err(b'"').parse_next(input)?;
    Ok(decoded)
}

/// Everything between the quotes, escapes decoded.
fn literal_body(input: &mut &[u8]) -> ModalResult<Vec<u8>> {
    repeat(0.., alt((plain_run.map(<[u8]>::to_vec), escape_sequence)))
        .fold(Vec::new, |mut decoded, chunk: Vec<u8>| {
            decoded.extend_from_slice(&chunk);
            decoded
        })
        .parse_next(input)
}

/// A run of bytes needing no decoding.
fn plain_run<'i>(input: &mut &'i [u8]) -> ModalResult<&'i [u8]> {
    take_while(1.., |b: u8| b != b'"' && b != b'\\').parse_next(input)
}

/// A backslash escape. Unknown escapes are kept verbatim.
fn escape_sequence(input: &mut &[u8]) -> ModalResult<Vec<u8>> {
    preceded(
        b'\\',
        alt((
            octal_escape.map(|b| vec![b]),
            hex_escape.map(|b| vec![b]),
            any.map(simple_escape),
        )),
    )
    .parse_next(input)
}

/// `\ooo`: one to three octal digits, wrapping to a byte like C does.
fn octal_escape(input: &mut &[u8]) -> ModalResult<u8> {
    take_while(1..=3, |b: u8| (b'0'..=b'7').contains(&b))
        .map(|digits: &[u8]| {
            digits
                .iter()
                .fold(0u8, |value, digit| value.wrapping_mul(8).wrapping_add(digit - b'0'))
        })
        .parse_next(input)
}

/// `\xHH`: one or two hex digits.
fn hex_escape(input: &mut &[u8]) -> ModalResult<u8> {
    preceded(b'x', take_while(1..=2, |b: u8| b.is_ascii_hexdigit()))
        .map(|digits: &[u8]| {
            digits
                .iter()
                .fold(0u8, |value, &digit| value.wrapping_mul(16).wrapping_add(hex_value(digit)))
        })
        .parse_next(input)
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// Decode a single-character escape.
fn simple_escape(escaped: u8) -> Vec<u8> {
    match escaped {
        b'n' => vec![b'\n'],
        b't' => vec![b'\t'],
        b'r' => vec![b'\r'],
        b'a' => vec![0x07],
        b'b' => vec![0x08],
        b'f' => vec![0x0c],
        b'v' => vec![0x0b],
        b'"' | b'\\' | b'\'' | b'?' => vec![escaped],
        other => vec![b'\\', other],
    }
}
