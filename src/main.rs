//! This is the main entry point for respatch.

use colored::Colorize;
use respatch::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::parse(None) {
        eprintln!("{}", format!("fatal: {e}").red());
        std::process::exit(1);
    }
}
