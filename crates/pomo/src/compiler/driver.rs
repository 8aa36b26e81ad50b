//! Batch compilation of a directory of `.po` files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{CompileError, FileError};
use super::options::CompileOptions;
use super::report::{FileReport, Outcome, Report};
use crate::parser::parse;

/// Compile every `.po` file in `dir` into a sibling `.mo` file.
///
/// Files are processed in file name order and each one is independent: a
/// failure is recorded in the report and the next file is still compiled.
/// Only failing to list the directory itself is an error.
pub fn compile_directory(dir: &Path, options: &CompileOptions) -> Result<Report, CompileError> {
    let sources = po_files_in(dir)?;
    if sources.is_empty() {
        info!(dir = %dir.display(), "no .po files found");
    } else {
        debug!(dir = %dir.display(), files = sources.len(), "compiling .po files");
    }

    let processed = sources
        .into_iter()
        .map(|path| {
            let outcome = compile_file(&path, options);
            FileReport { path, outcome }
        })
        .collect();
    Ok(Report { processed })
}

/// Compile one `.po` file, writing the `.mo` file next to it.
pub fn compile_file(source: &Path, options: &CompileOptions) -> Outcome {
    match try_compile_file(source, options) {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(path = %source.display(), %error, "failed to compile");
            Outcome::Failed(error)
        }
    }
}

fn try_compile_file(source: &Path, options: &CompileOptions) -> Result<Outcome, FileError> {
    let text = fs::read(source).map_err(|error| FileError::Read { source: error })?;

    let mut catalog = parse(&text)?;
    if !options.include_fuzzy() {
        catalog = catalog.without_fuzzy();
    }
    let stats = catalog.stats();
    debug!(path = %source.display(), entries = catalog.len(), ?stats, "parsed catalog");

    let bytes = options.encoder().encode(&catalog)?;
    if bytes.is_empty() {
        debug!(path = %source.display(), "catalog is empty, nothing to write");
        return Ok(Outcome::SkippedEmpty);
    }

    let output = mo_path_for(source);
    fs::write(&output, &bytes).map_err(|error| FileError::Write {
        path: output.clone(),
        source: error,
    })?;
    debug!(path = %output.display(), bytes = bytes.len(), "wrote .mo file");

    Ok(Outcome::Written { output, stats })
}

/// The `.mo` path for a `.po` file: same directory and stem.
///
/// ```
/// use std::path::Path;
///
/// assert_eq!(
///     pomo::mo_path_for(Path::new("lang/plugin-fr_FR.po")),
///     Path::new("lang/plugin-fr_FR.mo")
/// );
/// ```
pub fn mo_path_for(source: &Path) -> PathBuf {
    source.with_extension("mo")
}

/// List the `.po` files of a directory, sorted by file name.
///
/// Only regular files whose extension is exactly `po` qualify; `x.pox` or a
/// directory named `x.po` are ignored.
fn po_files_in(dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    let read_dir_error = |source: io::Error| CompileError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.extension().is_some_and(|ext| ext == "po") && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
