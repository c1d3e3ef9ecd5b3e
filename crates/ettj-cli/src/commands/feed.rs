//! Feed command implementation.
//!
//! Loads the scraped parameter history and surfaces the latest rows.

use anyhow::Result;
use clap::{Args, Subcommand};
use tabled::Tabled;

use ettj_feed::{latest_by_type, load_path, load_url, NssRow};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the feed command.
#[derive(Args, Debug)]
pub struct FeedArgs {
    #[command(subcommand)]
    pub command: FeedCommand,
}

/// Feed subcommands.
#[derive(Subcommand, Debug)]
pub enum FeedCommand {
    /// Show the most recent parameter row per curve type
    Latest(LatestArgs),
}

/// Arguments for the latest subcommand.
#[derive(Args, Debug)]
pub struct LatestArgs {
    /// File path or HTTP URL of the parameter export
    #[arg(short, long)]
    pub source: String,

    /// Only show this curve-type tag
    #[arg(short, long)]
    pub curve_type: Option<String>,
}

/// A feed row for display.
#[derive(Tabled, serde::Serialize)]
struct FeedRow {
    #[tabled(rename = "Type")]
    curve_type: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "b1")]
    b1: String,
    #[tabled(rename = "b2")]
    b2: String,
    #[tabled(rename = "b3")]
    b3: String,
    #[tabled(rename = "b4")]
    b4: String,
    #[tabled(rename = "l1")]
    l1: String,
    #[tabled(rename = "l2")]
    l2: String,
}

impl From<&NssRow> for FeedRow {
    fn from(row: &NssRow) -> Self {
        Self {
            curve_type: row.curve_type.clone(),
            date: row.date.to_string(),
            b1: format!("{:.6}", row.b1),
            b2: format!("{:.6}", row.b2),
            b3: format!("{:.6}", row.b3),
            b4: format!("{:.6}", row.b4),
            l1: format!("{:.6}", row.l1),
            l2: format!("{:.6}", row.l2),
        }
    }
}

/// Execute the feed command.
pub fn execute(args: FeedArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        FeedCommand::Latest(latest_args) => execute_latest(latest_args, format),
    }
}

/// Execute the latest subcommand.
fn execute_latest(args: LatestArgs, format: OutputFormat) -> Result<()> {
    let rows = if args.source.starts_with("http://") || args.source.starts_with("https://") {
        load_url(&args.source)?
    } else {
        load_path(&args.source)?
    };

    let latest = latest_by_type(&rows);

    let mut display: Vec<FeedRow> = latest
        .values()
        .filter(|row| {
            args.curve_type
                .as_deref()
                .map_or(true, |wanted| row.curve_type == wanted)
        })
        .map(|row| FeedRow::from(*row))
        .collect();
    display.sort_by(|a, b| a.curve_type.cmp(&b.curve_type));

    if format == OutputFormat::Table {
        print_header("Latest Feed Parameters");
        println!("Source: {}", args.source);
        println!("Rows loaded: {}", rows.len());
        println!();
    }
    print_output(&display, format)
}
