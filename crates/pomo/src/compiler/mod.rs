//! Directory-level driver: `.po` in, `.mo` out.
//!
//! Each file runs through parse → encode → write on its own, so one bad
//! file never stops the rest of a batch. Results come back in file name
//! order.

mod driver;
pub mod error;
mod options;
mod report;

pub use driver::{compile_directory, compile_file, mo_path_for};
pub use error::{CompileError, FileError};
pub use options::CompileOptions;
pub use report::{FileReport, Outcome, OutcomeKind, Report};
