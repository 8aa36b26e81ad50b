//! Per-file results of a compilation run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::FileError;
use crate::types::CatalogStats;

/// What happened to one `.po` file.
#[derive(Debug)]
pub enum Outcome {
    /// The `.mo` file was written.
    Written {
        /// Path of the written `.mo` file.
        output: PathBuf,
        /// Message counts of the compiled catalog.
        stats: CatalogStats,
    },
    /// The catalog had no entries; nothing was written.
    SkippedEmpty,
    /// Reading, parsing, encoding or writing failed.
    Failed(FileError),
}

/// The kind of an [`Outcome`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Written,
    SkippedEmpty,
    Failed,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Written { .. } => OutcomeKind::Written,
            Outcome::SkippedEmpty => OutcomeKind::SkippedEmpty,
            Outcome::Failed(_) => OutcomeKind::Failed,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// The result for one input file.
#[derive(Debug)]
pub struct FileReport {
    /// Path of the `.po` file.
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Results of compiling a directory, in file name order.
#[derive(Debug, Default)]
pub struct Report {
    pub processed: Vec<FileReport>,
}

impl Report {
    /// Iterate over the per-file results.
    pub fn iter(&self) -> impl Iterator<Item = &FileReport> {
        self.processed.iter()
    }

    /// Whether any file failed.
    pub fn has_failures(&self) -> bool {
        self.iter().any(|file| file.outcome.is_failure())
    }

    /// Number of files with the given outcome.
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.iter().filter(|file| file.outcome.kind() == kind).count()
    }

    /// The outcome recorded for a file, if it was processed.
    pub fn outcome_for(&self, path: &Path) -> Option<&Outcome> {
        self.iter()
            .find(|file| file.path == path)
            .map(|file| &file.outcome)
    }
}
