//! CLI command implementations.

mod compile;

pub use compile::{run_compile, CompileArgs};
