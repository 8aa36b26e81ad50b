//! Binary MO layout.
//!
//! ```text
//! offset 0   magic               0x950412de
//!        4   revision            0
//!        8   N                   number of strings
//!       12   O                   offset of original-strings table (28)
//!       16   T                   offset of translated-strings table (O + 8N)
//!       20   S                   hash table size (0, no hash table)
//!       24   H                   hash table offset (T + 8N)
//!        O   N x {length, offset} for original strings
//!        T   N x {length, offset} for translated strings
//!        H   original strings, each NUL terminated, then translated strings
//! ```
//!
//! Descriptor offsets are absolute file offsets. Lengths exclude the NUL.

use std::borrow::Cow;

use bon::Builder;

use super::error::EncodeError;
use crate::types::Catalog;

/// The MO magic number, written in the file's byte order.
pub const MAGIC: u32 = 0x9504_12de;

/// The only file format revision written.
pub const REVISION: u32 = 0;

/// Size of the fixed header: seven `u32` fields.
pub const HEADER_SIZE: u32 = 28;

/// Size of one `{length, offset}` descriptor.
const DESCRIPTOR_SIZE: u32 = 8;

/// Byte order used for the magic number and every other field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    fn bytes(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }
}

/// Serializes catalogs into MO files.
///
/// # Example
///
/// ```
/// use pomo::{ByteOrder, Catalog, Encoder};
///
/// let mut catalog = Catalog::new();
/// catalog.add_or_replace("Hello", "Bonjour");
///
/// let encoder = Encoder::builder()
///     .byte_order(ByteOrder::BigEndian)
///     .sort(true)
///     .build();
/// let bytes = encoder.encode(&catalog).unwrap();
/// assert_eq!(&bytes[..4], &[0x95, 0x04, 0x12, 0xde]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Encoder {
    /// Byte order of every header field and descriptor.
    #[builder(default)]
    byte_order: ByteOrder,

    /// Write entries sorted by key instead of in catalog order.
    ///
    /// Not needed for correctness without a hash table, but readers that
    /// binary-search the original-strings table require it.
    #[builder(default)]
    sort: bool,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::builder().build()
    }
}

impl Encoder {
    /// Byte order of the written fields.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Whether entries are written sorted by key.
    pub fn sorts(&self) -> bool {
        self.sort
    }

    /// Encode a catalog.
    ///
    /// An empty catalog encodes to an empty buffer: there is nothing to
    /// write, which callers should not confuse with a malformed file.
    /// Encoding is deterministic.
    pub fn encode(&self, catalog: &Catalog) -> Result<Vec<u8>, EncodeError> {
        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let mut pairs: Vec<(Cow<'_, [u8]>, &[u8])> = catalog
            .iter()
            .map(|entry| (entry.key(), entry.msgstr.as_slice()))
            .collect();
        if self.sort {
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let layout = Layout::compute(&pairs)?;
        let mut out = MoWriter::with_capacity(self.byte_order, layout.file_size);

        out.put_u32(MAGIC);
        out.put_u32(REVISION);
        out.put_u32(layout.count);
        out.put_u32(HEADER_SIZE);
        out.put_u32(layout.trans_table_offset);
        out.put_u32(0); // hash table size
        out.put_u32(layout.hash_table_offset);

        for descriptor in layout.originals.iter().chain(&layout.translations) {
            out.put_u32(descriptor.length);
            out.put_u32(descriptor.offset);
        }
        for (key, _) in &pairs {
            out.put_string(key);
        }
        for (_, value) in &pairs {
            out.put_string(value);
        }

        debug_assert_eq!(out.len(), layout.file_size);
        Ok(out.into_bytes())
    }
}

/// Encode a catalog with the default settings: little-endian, catalog order.
pub fn encode(catalog: &Catalog) -> Result<Vec<u8>, EncodeError> {
    Encoder::default().encode(catalog)
}

/// A `{length, offset}` string descriptor.
#[derive(Debug, Clone, Copy)]
struct Descriptor {
    length: u32,
    offset: u32,
}

/// Offsets of every table and string, computed before anything is written.
#[derive(Debug)]
struct Layout {
    count: u32,
    trans_table_offset: u32,
    hash_table_offset: u32,
    originals: Vec<Descriptor>,
    translations: Vec<Descriptor>,
    file_size: usize,
}

impl Layout {
    fn compute(pairs: &[(Cow<'_, [u8]>, &[u8])]) -> Result<Self, EncodeError> {
        let too_large = || EncodeError::FileTooLarge {
            entries: pairs.len(),
        };

        let count = u32::try_from(pairs.len()).map_err(|_| too_large())?;
        let table_size = count.checked_mul(DESCRIPTOR_SIZE).ok_or_else(too_large)?;
        let trans_table_offset = HEADER_SIZE.checked_add(table_size).ok_or_else(too_large)?;
        let hash_table_offset = trans_table_offset
            .checked_add(table_size)
            .ok_or_else(too_large)?;

        // Strings start right after both tables, since the hash table is empty.
        let mut cursor = hash_table_offset;
        let mut place = |bytes: &[u8]| -> Result<Descriptor, EncodeError> {
            let length = checked_len(bytes.len())?;
            let descriptor = Descriptor {
                length,
                offset: cursor,
            };
            cursor = cursor
                .checked_add(length)
                .and_then(|end| end.checked_add(1))
                .ok_or_else(too_large)?;
            Ok(descriptor)
        };

        let originals = pairs
            .iter()
            .map(|(key, _)| place(key.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let translations = pairs
            .iter()
            .map(|&(_, value)| place(value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Layout {
            count,
            trans_table_offset,
            hash_table_offset,
            originals,
            translations,
            file_size: usize::try_from(cursor).map_err(|_| too_large())?,
        })
    }
}

/// Check that a string length fits a 32-bit length field.
fn checked_len(length: usize) -> Result<u32, EncodeError> {
    u32::try_from(length).map_err(|_| EncodeError::StringTooLong { length })
}

/// Appends fixed-width fields to a pre-sized buffer.
struct MoWriter {
    order: ByteOrder,
    buf: Vec<u8>,
}

impl MoWriter {
    fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            order,
            buf: Vec::with_capacity(capacity),
        }
    }

    fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&self.order.bytes(value));
    }

    fn put_string(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        self.buf.push(0);
    }

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
