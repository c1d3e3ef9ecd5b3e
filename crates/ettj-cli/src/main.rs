//! ETTJ CLI - Command-line interface for NSS term structure curves.
//!
//! # Usage
//!
//! ```bash
//! # Show the latest nominal curve over the smooth grid
//! ettj curve show --curve-type pre
//!
//! # Query spot and forward at a single tenor
//! ettj curve query --tenor 1 --curve-type ipca
//!
//! # Evaluate explicit parameters over custom tenors
//! ettj curve show --params 0.06,0.08,0.1,0.23,1.97,0.17 --tenors "0.5,1,2,5,10"
//!
//! # Inspect the default parameter snapshots
//! ettj params list
//!
//! # Pull the scraped parameter history and show the latest row per type
//! ettj feed latest --source data/irts_params.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, format)?,
        Commands::Params(args) => commands::params::execute(args, format)?,
        Commands::Feed(args) => commands::feed::execute(args, format)?,
    }

    Ok(())
}
