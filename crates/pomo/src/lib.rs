//! Compiler for gettext translation catalogs.
//!
//! Parses `.po` translation sources into a [`Catalog`] and serializes it into
//! the binary `.mo` format loaded by gettext runtimes.
//!
//! ```
//! let po = b"msgid \"Hello\"\nmsgstr \"Bonjour\"\n\nmsgid \"Bye\"\nmsgstr \"Au revoir\"\n";
//! let catalog = pomo::parse(po).unwrap();
//! let mo = pomo::encode(&catalog).unwrap();
//! assert_eq!(u32::from_le_bytes(mo[8..12].try_into().unwrap()), 2);
//! ```

pub mod compiler;
pub mod encoder;
pub mod parser;
pub mod types;

pub use compiler::{
    CompileError, CompileOptions, FileError, FileReport, Outcome, OutcomeKind, Report,
    compile_directory, compile_file, mo_path_for,
};
pub use encoder::{ByteOrder, EncodeError, Encoder, encode};
pub use parser::{ParseError, parse};
pub use types::{Catalog, CatalogStats, Entry};
