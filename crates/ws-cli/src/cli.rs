//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// `.workstamps.txt` report tool.
///
/// Reads a time log of start, work and `restarttotals` entries and prints
/// per-day and per-period customer totals.
#[derive(Debug, Parser)]
#[command(name = "ws", version, about, long_about = None)]
pub struct Cli {
    /// Report a specific period, 0 being the most recent (default: all periods).
    pub week: Option<usize>,

    /// Report a single customer (default: all customers).
    #[arg(short = 'c', long)]
    pub customer: Option<String>,

    /// Input file (default: ~/.workstamps.txt).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
