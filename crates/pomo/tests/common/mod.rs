//! A minimal MO reader for checking encoder output.

#![allow(dead_code)]

use std::fmt::Write;

pub const MAGIC: u32 = 0x9504_12de;

/// The decoded contents of an MO file.
#[derive(Debug)]
pub struct MoFile {
    pub big_endian: bool,
    pub revision: u32,
    pub nstrings: u32,
    pub orig_table_offset: u32,
    pub trans_table_offset: u32,
    pub hash_table_size: u32,
    pub hash_table_offset: u32,
    pub originals: Vec<StringRef>,
    pub translations: Vec<StringRef>,
}

/// One string located through a descriptor.
#[derive(Debug, Clone)]
pub struct StringRef {
    pub length: u32,
    pub offset: u32,
    pub bytes: Vec<u8>,
}

impl MoFile {
    /// The `(original, translation)` pairs in table order.
    pub fn pairs(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.originals
            .iter()
            .zip(&self.translations)
            .map(|(original, translation)| (original.bytes.clone(), translation.bytes.clone()))
            .collect()
    }

    /// Look up a translation the way a gettext reader scans the tables.
    pub fn lookup(&self, key: &[u8]) -> Option<&[u8]> {
        self.originals
            .iter()
            .position(|original| original.bytes == key)
            .map(|index| self.translations[index].bytes.as_slice())
    }
}

/// Decode an MO file, detecting its byte order from the magic number.
///
/// Panics on anything a conformant reader would reject.
pub fn read_mo(bytes: &[u8]) -> MoFile {
    assert!(bytes.len() >= 28, "file shorter than the MO header");
    let big_endian = match &bytes[..4] {
        [0xde, 0x12, 0x04, 0x95] => false,
        [0x95, 0x04, 0x12, 0xde] => true,
        other => panic!("bad magic: {other:02x?}"),
    };
    let word = |offset: u32| -> u32 {
        let start = offset as usize;
        let raw: [u8; 4] = bytes[start..start + 4].try_into().unwrap();
        if big_endian {
            u32::from_be_bytes(raw)
        } else {
            u32::from_le_bytes(raw)
        }
    };

    let nstrings = word(8);
    let orig_table_offset = word(12);
    let trans_table_offset = word(16);
    let table = |table_offset: u32| -> Vec<StringRef> {
        (0..nstrings)
            .map(|index| {
                let length = word(table_offset + index * 8);
                let offset = word(table_offset + index * 8 + 4);
                let start = offset as usize;
                let end = start + length as usize;
                assert_eq!(bytes[end], 0, "string at {offset} is not NUL terminated");
                StringRef {
                    length,
                    offset,
                    bytes: bytes[start..end].to_vec(),
                }
            })
            .collect()
    };

    MoFile {
        big_endian,
        revision: word(4),
        nstrings,
        orig_table_offset,
        trans_table_offset,
        hash_table_size: word(20),
        hash_table_offset: word(24),
        originals: table(orig_table_offset),
        translations: table(trans_table_offset),
    }
}

/// A readable dump of an MO file's layout, one field per line.
pub fn dump_layout(bytes: &[u8]) -> String {
    let mo = read_mo(bytes);
    let mut out = String::new();
    writeln!(out, "magic {MAGIC:08x} {}", if mo.big_endian { "be" } else { "le" }).unwrap();
    writeln!(out, "revision {}", mo.revision).unwrap();
    writeln!(out, "nstrings {}", mo.nstrings).unwrap();
    writeln!(out, "orig_table {}", mo.orig_table_offset).unwrap();
    writeln!(out, "trans_table {}", mo.trans_table_offset).unwrap();
    writeln!(out, "hash_size {}", mo.hash_table_size).unwrap();
    writeln!(out, "hash_offset {}", mo.hash_table_offset).unwrap();
    for (name, strings) in [("orig", &mo.originals), ("trans", &mo.translations)] {
        for (index, string) in strings.iter().enumerate() {
            writeln!(
                out,
                "{name}[{index}] len={} off={} {:?}",
                string.length,
                string.offset,
                String::from_utf8_lossy(&string.bytes)
            )
            .unwrap();
        }
    }
    write!(out, "size {}", bytes.len()).unwrap();
    out
}
