//! Params command implementation.
//!
//! Inspects the default parameter snapshots.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use tabled::Tabled;

use ettj_curves::snapshot::{self, CurveType, ParamSnapshot};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the params command.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    #[command(subcommand)]
    pub command: ParamsCommand,
}

/// Params subcommands.
#[derive(Subcommand, Debug)]
pub enum ParamsCommand {
    /// List every default snapshot
    List,

    /// Show the latest snapshot for one curve type
    Show(ShowArgs),
}

/// Arguments for showing one snapshot.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Curve type
    #[arg(short, long, value_enum, default_value = "pre")]
    pub curve_type: SnapshotChoice,
}

/// Curve type choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SnapshotChoice {
    /// Nominal fixed-rate curve
    #[default]
    Pre,
    /// Inflation-linked curve
    Ipca,
}

impl From<SnapshotChoice> for CurveType {
    fn from(choice: SnapshotChoice) -> Self {
        match choice {
            SnapshotChoice::Pre => CurveType::Pre,
            SnapshotChoice::Ipca => CurveType::Ipca,
        }
    }
}

/// A snapshot row for display.
#[derive(Tabled, serde::Serialize)]
struct SnapshotRow {
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

impl From<&ParamSnapshot> for SnapshotRow {
    fn from(snap: &ParamSnapshot) -> Self {
        let (b1, b2, b3, b4, l1, l2) = snap.params.params();
        Self {
            curve_type: snap.curve_type.to_string(),
            date: snap.date.to_string(),
            b1: format!("{:.6}", b1),
            b2: format!("{:.6}", b2),
            b3: format!("{:.6}", b3),
            b4: format!("{:.6}", b4),
            l1: format!("{:.6}", l1),
            l2: format!("{:.6}", l2),
        }
    }
}

/// Execute the params command.
pub fn execute(args: ParamsArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        ParamsCommand::List => execute_list(format),
        ParamsCommand::Show(show_args) => execute_show(show_args, format),
    }
}

/// Execute the list subcommand.
fn execute_list(format: OutputFormat) -> Result<()> {
    let rows: Vec<SnapshotRow> = snapshot::all().iter().map(SnapshotRow::from).collect();

    if format == OutputFormat::Table {
        print_header("Default Parameter Snapshots");
    }
    print_output(&rows, format)
}

/// Execute the show subcommand.
fn execute_show(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let snap = snapshot::latest(args.curve_type.into());
    let rows = vec![SnapshotRow::from(snap)];

    if format == OutputFormat::Table {
        print_header("Latest Snapshot");
    }
    print_output(&rows, format)
}
