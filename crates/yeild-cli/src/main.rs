//! yeild-tiers CLI
//!
//! Evaluates experience tiers and feature gates against the configured tier
//! table. Output goes to stdout; logs go to stderr.

mod commands;

use commands::{print_usage, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yeild_tiers::TierConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yeild_tiers=info,yeild_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let config = TierConfig::from_env();
    let table = config.load_table()?;
    tracing::debug!(?command, tiers = table.len(), "Running command");

    let output = command.execute(&table)?;
    println!("{}", output);

    Ok(())
}
