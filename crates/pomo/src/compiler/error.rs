//! Error types for the compiler driver.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoder::EncodeError;
use crate::parser::ParseError;

/// Why a single file failed to compile. Recorded in the report; never
/// aborts the rest of a batch.
#[derive(Debug, Error)]
pub enum FileError {
    /// The `.po` file could not be read.
    #[error("cannot read file: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    /// The `.po` text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The catalog cannot be represented as an MO file.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The `.mo` file could not be written.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An error that stops a whole compilation run.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The input directory could not be listed.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
