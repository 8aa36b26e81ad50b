//! Insertion-ordered translation catalog.

use std::collections::HashMap;
use std::mem;
use std::slice;

use serde::Serialize;

use crate::types::Entry;

/// Lookup key for deduplication: context plus msgid.
type EntryKey = (Option<Vec<u8>>, Vec<u8>);

/// An ordered collection of translation entries parsed from one PO file.
///
/// Entries are unique by `(msgctxt, msgid)`. Adding an entry whose key is
/// already present replaces the earlier entry in place, so the catalog keeps
/// the position of the first occurrence and the content of the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Entries in insertion order.
    entries: Vec<Entry>,
    /// Maps each entry key to its index in `entries`.
    index: HashMap<EntryKey, usize>,
}

/// Summary counts over the non-header entries of a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Number of messages, excluding the header.
    pub messages: usize,
    /// Messages flagged fuzzy.
    pub fuzzy: usize,
    /// Messages with an empty translation.
    pub untranslated: usize,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// The header entry (`msgid ""` without context), if present.
    pub fn header(&self) -> Option<&Entry> {
        self.get(b"")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a context-free entry by msgid.
    pub fn get(&self, msgid: &[u8]) -> Option<&Entry> {
        self.get_with_context(None, msgid)
    }

    /// Look up an entry by context and msgid.
    pub fn get_with_context(&self, msgctxt: Option<&[u8]>, msgid: &[u8]) -> Option<&Entry> {
        let key = (msgctxt.map(<[u8]>::to_vec), msgid.to_vec());
        self.index.get(&key).map(|&position| &self.entries[position])
    }

    /// Add a context-free translation, replacing any earlier one for the
    /// same msgid.
    pub fn add_or_replace(&mut self, msgid: impl Into<Vec<u8>>, msgstr: impl Into<Vec<u8>>) {
        self.insert(Entry::new(msgid, msgstr));
    }

    /// Insert an entry, replacing any earlier entry with the same key.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        let key = (entry.msgctxt.clone(), entry.msgid.clone());
        match self.index.get(&key) {
            Some(&position) => Some(mem::replace(&mut self.entries[position], entry)),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Count messages, fuzzy messages and untranslated messages.
    ///
    /// The header is metadata, not a message, and is not counted.
    pub fn stats(&self) -> CatalogStats {
        self.iter()
            .filter(|entry| !entry.is_header())
            .fold(CatalogStats::default(), |mut stats, entry| {
                stats.messages += 1;
                if entry.fuzzy {
                    stats.fuzzy += 1;
                }
                if !entry.is_translated() {
                    stats.untranslated += 1;
                }
                stats
            })
    }

    /// A copy of this catalog without fuzzy messages. The header is kept
    /// even when flagged fuzzy.
    pub fn without_fuzzy(&self) -> Catalog {
        self.iter()
            .filter(|entry| entry.is_header() || !entry.fuzzy)
            .cloned()
            .collect()
    }
}

impl FromIterator<Entry> for Catalog {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
