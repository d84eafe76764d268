use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ws_cli::commands::report::{self, Selection};
use ws_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; stdout is reserved for the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_file(cli.file);
    tracing::debug!(?config, "loaded configuration");

    let selection = Selection {
        week: cli.week,
        customer: cli.customer,
    };
    report::run(&config.file, &selection, cli.json)
}
