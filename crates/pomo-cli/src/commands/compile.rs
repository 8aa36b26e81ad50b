//! Implementation of the directory compilation command.

use std::fs::read;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use pomo::{
    compile_directory, ByteOrder, CatalogStats, CompileOptions, Encoder, FileError, FileReport,
    Outcome, OutcomeKind, ParseError, Report,
};
use serde::Serialize;
use tracing::debug;

use crate::output::table::{format_stats_table, FileStats};
use crate::output::PoDiagnostic;

/// Exit code when at least one file failed to compile.
const EXIT_FILE_FAILED: i32 = 1;

/// Exit code when the directory could not be read.
const EXIT_BAD_DIRECTORY: i32 = 2;

/// Arguments for compiling a directory.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Directory containing the .po files
    pub directory: PathBuf,

    /// Write entries sorted by msgid
    #[arg(long)]
    pub sort: bool,

    /// Write big-endian .mo files
    #[arg(long)]
    pub big_endian: bool,

    /// Leave entries flagged fuzzy out of the .mo files
    #[arg(long)]
    pub exclude_fuzzy: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompileArgs {
    fn options(&self) -> CompileOptions {
        let byte_order = if self.big_endian {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        };
        CompileOptions::builder()
            .encoder(
                Encoder::builder()
                    .byte_order(byte_order)
                    .sort(self.sort)
                    .build(),
            )
            .include_fuzzy(!self.exclude_fuzzy)
            .build()
    }
}

/// JSON output for one processed file.
#[derive(Debug, Serialize)]
struct FileJson {
    path: String,
    outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<CatalogStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&FileReport> for FileJson {
    fn from(file: &FileReport) -> Self {
        let (output, stats, error) = match &file.outcome {
            Outcome::Written { output, stats } => {
                (Some(output.display().to_string()), Some(*stats), None)
            }
            Outcome::SkippedEmpty => (None, None, None),
            Outcome::Failed(e) => (None, None, Some(e.to_string())),
        };
        FileJson {
            path: file.path.display().to_string(),
            outcome: file.outcome.kind(),
            output,
            stats,
            error,
        }
    }
}

/// Run the compile command.
pub fn run_compile(args: CompileArgs, verbose: bool) -> Result<i32> {
    let options = args.options();
    debug!(?options, dir = %args.directory.display(), "starting compilation");

    let report = match compile_directory(&args.directory, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{:?}", miette::Report::from_err(e));
            return Ok(EXIT_BAD_DIRECTORY);
        }
    };

    if args.json {
        let json_data: Vec<FileJson> = report.iter().map(FileJson::from).collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for file in report.iter() {
            print_status(file);
        }
    }

    if verbose {
        print_details(&report);
    }

    if report.has_failures() {
        Ok(EXIT_FILE_FAILED)
    } else {
        Ok(exitcode::OK)
    }
}

/// Print the `OK`, `SKIP` or `ERROR` line for one file.
fn print_status(file: &FileReport) {
    let path = file.path.display();
    match &file.outcome {
        Outcome::Written { .. } => {
            println!("{} {}", "OK".if_supports_color(Stream::Stdout, |t| t.green()), path);
        }
        Outcome::SkippedEmpty => {
            println!("{} {}", "SKIP".if_supports_color(Stream::Stdout, |t| t.yellow()), path);
        }
        Outcome::Failed(e) => {
            println!(
                "{} {}: {}",
                "ERROR".if_supports_color(Stream::Stdout, |t| t.red()),
                path,
                e
            );
        }
    }
}

/// Print source diagnostics for parse failures and a statistics table to
/// stderr, keeping stdout to one line per file.
fn print_details(report: &Report) {
    for file in report.iter() {
        if let Outcome::Failed(FileError::Parse(e)) = &file.outcome {
            print_parse_diagnostic(&file.path, e);
        }
    }

    let rows: Vec<FileStats> = report
        .iter()
        .filter_map(|file| match &file.outcome {
            Outcome::Written { stats, .. } => Some(FileStats {
                file: file.path.display().to_string(),
                stats: *stats,
            }),
            Outcome::SkippedEmpty | Outcome::Failed(_) => None,
        })
        .collect();
    if !rows.is_empty() {
        eprintln!("{}", format_stats_table(&rows));
    }
}

fn print_parse_diagnostic(path: &Path, error: &ParseError) {
    let Ok(bytes) = read(path) else {
        return;
    };
    let content = String::from_utf8_lossy(&bytes);
    let diagnostic = PoDiagnostic::from_parse_error(path, &content, error);
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
