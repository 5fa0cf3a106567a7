//! Lanekeep command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Score twelve strikes
//! lanekeep score 10 10 10 10 10 10 10 10 10 10 10 10
//!
//! # Next three third-Wednesday league nights
//! lanekeep next --frequency monthly --day 3 --week 3 --time 19:00 --count 3
//!
//! # Describe a pattern in Japanese
//! lanekeep format --frequency weekly --day 2 --time 09:30 --labels ja
//! ```

use std::io;

use chrono::Local;
use clap::Parser;
use lanekeep_cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    tracing::debug!(command = ?cli.command, "lanekeep starting");

    run(&cli.command, Local::now().naive_local(), &mut io::stdout().lock())?;

    Ok(())
}
