#![deny(clippy::all, clippy::pedantic)]
//! # Lander
//!
//! Command line entry point. See `lander --help` for the flags.

use anyhow::Result;
use clap::Parser;
use runtime::app::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    app::run(&cli)?;
    Ok(())
}
