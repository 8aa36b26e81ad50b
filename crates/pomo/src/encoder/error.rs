//! Error types for MO encoding.

use thiserror::Error;

/// An error that occurred while laying out an MO file.
///
/// Every length and offset in the format is a 32-bit unsigned integer; these
/// errors report catalogs that cannot be represented within that range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A single string is longer than a 32-bit length field can express.
    #[error("string of {length} bytes does not fit a 32-bit length field")]
    StringTooLong { length: usize },

    /// The file would extend past the last offset a 32-bit field can address.
    #[error("catalog of {entries} entries does not fit 32-bit file offsets")]
    FileTooLarge { entries: usize },
}
