//! MO file encoder.
//!
//! Serializes a [`Catalog`](crate::Catalog) into the binary layout read by
//! gettext runtimes. No hash table is emitted; readers fall back to scanning
//! or binary-searching the original-strings table.

pub mod error;
mod mo;

pub use error::EncodeError;
pub use mo::{ByteOrder, Encoder, HEADER_SIZE, MAGIC, REVISION, encode};
