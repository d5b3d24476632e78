//! These structs provide the CLI interface for the ofx2json CLI.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// ofx2json: Convert an OFX bank statement to JSON.
///
/// Reads an OFX document (SGML or XML) from INPUT, or from stdin when INPUT is absent or `-`, and
/// prints the account details, balances and transactions it contains as a single JSON object on
/// stdout.
///
/// Exits with status 1 when the document cannot be parsed and 2 when the result cannot be encoded.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    /// The statement file to read. Reads stdin when absent or `-`.
    input: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. Logs are written to stderr.
    #[arg(long, env = "OFX2JSON_LOG_LEVEL", default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

impl Args {
    pub fn new(input: Option<PathBuf>, pretty: bool, log_level: LevelFilter) -> Self {
        Self {
            input,
            pretty,
            log_level,
        }
    }

    /// The path to read from, or `None` for stdin.
    pub fn input(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
