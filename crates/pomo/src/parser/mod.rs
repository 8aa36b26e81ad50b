//! Parser for gettext `.po` translation sources.
//!
//! The parser is line oriented and produces a [`Catalog`](crate::Catalog).
//! Comments are skipped apart from the `fuzzy` flag, and plural forms are not
//! supported: entries using `msgid_plural` / `msgstr[n]` never receive a
//! `msgstr` and are dropped.

pub mod error;
mod literal;
mod po;

pub use error::ParseError;
pub use po::parse;
