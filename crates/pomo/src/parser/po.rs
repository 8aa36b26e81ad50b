//! Line scanner for `.po` files.

use std::mem;

use super::error::ParseError;
use super::literal::{LiteralError, decode_literals};
use crate::types::{Catalog, Entry};

/// Parse PO source text into a catalog.
///
/// Blank lines end an entry. Entries missing a `msgid` or a `msgstr` are
/// dropped without error, as are lines the scanner does not recognize
/// (including plural forms). The only hard error is an unterminated string.
///
/// # Example
///
/// ```
/// let catalog = pomo::parse(b"msgid \"Hello\"\nmsgstr \"Bonjour\"\n").unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(b"Hello").unwrap().msgstr, b"Bonjour");
/// ```
pub fn parse(input: &[u8]) -> Result<Catalog, ParseError> {
    let mut scanner = Scanner::default();
    for (index, raw) in input.split(|&b| b == b'\n').enumerate() {
        let line = classify(raw, index + 1)?;
        scanner.feed(line);
    }
    Ok(scanner.finish())
}

/// The string field a keyword line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    Str,
}

impl Field {
    fn keyword(self) -> &'static [u8] {
        match self {
            Field::Context => b"msgctxt",
            Field::Id => b"msgid",
            Field::Str => b"msgstr",
        }
    }
}

/// A classified input line.
#[derive(Debug)]
enum Line<'a> {
    Blank,
    Comment(&'a [u8]),
    Keyword(Field, Vec<u8>),
    Continuation(Vec<u8>),
    /// Anything else; skipped.
    Unrecognized,
}

/// Classify one raw line, decoding its literals.
fn classify(raw: &[u8], line: usize) -> Result<Line<'_>, ParseError> {
    let trimmed = raw.trim_ascii();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }
    if let Some(comment) = trimmed.strip_prefix(b"#") {
        return Ok(Line::Comment(comment));
    }

    let (field, literals) = match keyword_line(trimmed) {
        Some((field, rest)) => (Some(field), rest),
        None if trimmed.starts_with(b"\"") => (None, trimmed),
        None => return Ok(Line::Unrecognized),
    };

    match decode_literals(literals) {
        Ok(decoded) => Ok(match field {
            Some(field) => Line::Keyword(field, decoded),
            None => Line::Continuation(decoded),
        }),
        Err(LiteralError::Malformed) => Ok(Line::Unrecognized),
        Err(LiteralError::Unterminated) => Err(ParseError::UnterminatedString {
            line,
            column: end_column(raw),
        }),
    }
}

/// Split `msgid "..."` style lines into their field and literal text.
///
/// The keyword must be followed by whitespace or a quote, so `msgid_plural`
/// and `msgstr[0]` are not mistaken for `msgid` and `msgstr`.
fn keyword_line(trimmed: &[u8]) -> Option<(Field, &[u8])> {
    [Field::Context, Field::Id, Field::Str]
        .into_iter()
        .find_map(|field| {
            let rest = trimmed.strip_prefix(field.keyword())?;
            match rest.first() {
                Some(b' ' | b'\t' | b'"') => Some((field, rest.trim_ascii_start())),
                _ => None,
            }
        })
}

/// Column just past the last non-blank byte of a line.
fn end_column(raw: &[u8]) -> usize {
    raw.trim_ascii_end().len() + 1
}

/// Whether a `#,` comment lists the `fuzzy` flag.
fn has_fuzzy_flag(comment: &[u8]) -> bool {
    comment
        .strip_prefix(b",")
        .is_some_and(|flags| flags.split(|&b| b == b',').any(|flag| flag.trim_ascii() == b"fuzzy"))
}

/// The entry under construction.
#[derive(Debug, Default)]
struct PendingEntry {
    msgctxt: Option<Vec<u8>>,
    msgid: Option<Vec<u8>>,
    msgstr: Option<Vec<u8>>,
    fuzzy: bool,
}

impl PendingEntry {
    /// A pending `msgctxt` still waiting for its msgid.
    fn awaits_msgid(&self) -> bool {
        self.msgctxt.is_some() && self.msgid.is_none() && self.msgstr.is_none()
    }

    fn field_mut(&mut self, field: Field) -> &mut Option<Vec<u8>> {
        match field {
            Field::Context => &mut self.msgctxt,
            Field::Id => &mut self.msgid,
            Field::Str => &mut self.msgstr,
        }
    }

    fn into_entry(self) -> Option<Entry> {
        Some(Entry {
            msgctxt: self.msgctxt,
            msgid: self.msgid?,
            msgstr: self.msgstr?,
            fuzzy: self.fuzzy,
        })
    }
}

/// Scan state threaded through the lines of one file.
#[derive(Debug, Default)]
struct Scanner {
    catalog: Catalog,
    pending: PendingEntry,
    /// Field that continuation lines append to.
    open: Option<Field>,
    /// A `fuzzy` flag seen in comments, not yet claimed by an entry.
    fuzzy_flag: bool,
}

impl Scanner {
    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Blank => {
                self.commit();
                self.open = None;
            }
            Line::Comment(comment) => {
                if has_fuzzy_flag(comment) {
                    self.fuzzy_flag = true;
                }
            }
            Line::Keyword(Field::Context, text) => {
                self.commit();
                self.start_entry();
                self.pending.msgctxt = Some(text);
                self.open = Some(Field::Context);
            }
            Line::Keyword(Field::Id, text) => {
                if !self.pending.awaits_msgid() {
                    self.commit();
                }
                self.start_entry();
                self.pending.msgid = Some(text);
                self.open = Some(Field::Id);
            }
            Line::Keyword(Field::Str, text) => {
                self.pending.msgstr = Some(text);
                self.open = Some(Field::Str);
            }
            Line::Continuation(text) => {
                if let Some(field) = self.open {
                    self.pending
                        .field_mut(field)
                        .get_or_insert_with(Vec::new)
                        .extend_from_slice(&text);
                }
            }
            Line::Unrecognized => self.open = None,
        }
    }

    /// Hand a pending `fuzzy` flag to the entry being started.
    fn start_entry(&mut self) {
        if mem::take(&mut self.fuzzy_flag) {
            self.pending.fuzzy = true;
        }
    }

    /// Move the pending entry into the catalog if it is complete.
    fn commit(&mut self) {
        if let Some(entry) = mem::take(&mut self.pending).into_entry() {
            self.catalog.insert(entry);
        }
    }

    fn finish(mut self) -> Catalog {
        self.commit();
        self.catalog
    }
}
