//! `compile-mo` entry point.
//!
//! Compiles every `.po` file in a directory into a sibling `.mo` file:
//! - `compile-mo lang/` - compile all catalogs in `lang/`
//! - `compile-mo --exclude-fuzzy --sort lang/` - leave out fuzzy entries and
//!   write sorted tables

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, ValueEnum};
use commands::{run_compile, CompileArgs};
use tracing_subscriber::EnvFilter;

/// Compile gettext .po files into binary .mo catalogs.
#[derive(Debug, Parser)]
#[command(name = "compile-mo")]
#[command(about = "Compile gettext .po files into .mo catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Show per-file statistics, detailed parse errors and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub compile: CompileArgs,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log library events to stderr. The level comes from `--verbose` only.
fn setup_logging(verbose: bool) {
    let filter = if verbose { "pomo=debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    match run_compile(cli.compile, cli.verbose) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
