use std::borrow::Cow;

use bon::Builder;

/// Separates a message context from its msgid in compiled lookup keys.
pub const CONTEXT_SEPARATOR: u8 = 0x04;

/// A single translation: the original string and its translation.
///
/// Strings are raw bytes after escape decoding. They are usually UTF-8 but
/// nothing here depends on it; the header entry's charset decides.
///
/// # Example
///
/// ```
/// use pomo::Entry;
///
/// let entry = Entry::builder().msgid("Save").msgstr("Enregistrer").build();
/// assert!(!entry.is_header());
/// assert_eq!(entry.key().as_ref(), b"Save");
///
/// let scoped = Entry::builder()
///     .msgctxt("menu")
///     .msgid("Open")
///     .msgstr("Ouvrir")
///     .build();
/// assert_eq!(scoped.key().as_ref(), b"menu\x04Open");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder)]
pub struct Entry {
    /// Disambiguating context (`msgctxt`), if any.
    #[builder(into)]
    pub msgctxt: Option<Vec<u8>>,
    /// The original string.
    #[builder(into)]
    pub msgid: Vec<u8>,
    /// The translated string.
    #[builder(into)]
    pub msgstr: Vec<u8>,
    /// Whether the entry carried the `fuzzy` flag.
    #[builder(default)]
    pub fuzzy: bool,
}

impl Entry {
    /// Create an entry without context or flags.
    pub fn new(msgid: impl Into<Vec<u8>>, msgstr: impl Into<Vec<u8>>) -> Self {
        Self {
            msgctxt: None,
            msgid: msgid.into(),
            msgstr: msgstr.into(),
            fuzzy: false,
        }
    }

    /// The header is the context-free entry with an empty msgid. Its msgstr
    /// holds `Key: Value` metadata lines.
    pub fn is_header(&self) -> bool {
        self.msgctxt.is_none() && self.msgid.is_empty()
    }

    /// Whether the entry has a non-empty translation.
    pub fn is_translated(&self) -> bool {
        !self.msgstr.is_empty()
    }

    /// The lookup key written to the original-strings table.
    ///
    /// Context entries use `msgctxt EOT msgid`, the form gettext readers
    /// look up for `pgettext`.
    pub fn key(&self) -> Cow<'_, [u8]> {
        match &self.msgctxt {
            None => Cow::Borrowed(&self.msgid),
            Some(context) => {
                let mut key = Vec::with_capacity(context.len() + 1 + self.msgid.len());
                key.extend_from_slice(context);
                key.push(CONTEXT_SEPARATOR);
                key.extend_from_slice(&self.msgid);
                Cow::Owned(key)
            }
        }
    }
}
