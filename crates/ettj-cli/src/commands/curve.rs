//! Curve command implementation.
//!
//! Evaluates spot and instantaneous forward curves over a maturity grid.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use tabled::Tabled;

use ettj_curves::grid::{self, GridPreset};
use ettj_curves::snapshot::{self, CurveType};
use ettj_curves::{sample, CurveSeries};
use ettj_math::Svensson;

use crate::cli::OutputFormat;
use crate::commands::{parse_params, validate_tenor};
use crate::output::{format_percent, print_header, print_output, KeyValue};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(subcommand)]
    pub command: CurveCommand,
}

/// Curve subcommands.
#[derive(Subcommand, Debug)]
pub enum CurveCommand {
    /// Display spot and forward curves over a grid
    Show(ShowArgs),

    /// Evaluate spot and forward at a single tenor
    Query(QueryArgs),
}

/// Arguments for showing a curve.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Curve type supplying the default parameter snapshot
    #[arg(short, long, value_enum, default_value = "pre")]
    pub curve_type: CurveTypeChoice,

    /// Explicit parameters "b1,b2,b3,b4,l1,l2" (overrides --curve-type)
    #[arg(short, long)]
    pub params: Option<String>,

    /// Grid preset
    #[arg(short, long, value_enum, default_value = "brazil")]
    pub grid: GridChoice,

    /// Custom tenors in years (comma-separated, overrides --grid)
    #[arg(short, long)]
    pub tenors: Option<String>,

    /// Dense grid horizon in years (with --points-per-year, overrides --grid)
    #[arg(long)]
    pub max_years: Option<u32>,

    /// Dense grid resolution (points per year)
    #[arg(long, default_value = "52")]
    pub points_per_year: u32,
}

/// Arguments for querying a single tenor.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Curve type supplying the default parameter snapshot
    #[arg(short, long, value_enum, default_value = "pre")]
    pub curve_type: CurveTypeChoice,

    /// Explicit parameters "b1,b2,b3,b4,l1,l2" (overrides --curve-type)
    #[arg(short, long)]
    pub params: Option<String>,

    /// Tenor to query, in years
    #[arg(short, long)]
    pub tenor: f64,
}

/// Curve type choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CurveTypeChoice {
    /// Nominal fixed-rate curve
    #[default]
    Pre,
    /// Inflation-linked curve
    Ipca,
}

impl From<CurveTypeChoice> for CurveType {
    fn from(choice: CurveTypeChoice) -> Self {
        match choice {
            CurveTypeChoice::Pre => CurveType::Pre,
            CurveTypeChoice::Ipca => CurveType::Ipca,
        }
    }
}

/// Grid preset choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GridChoice {
    /// Compact Brazil-flavored vertices out to ten years
    #[default]
    Brazil,
    /// Classic textbook vertices out to thirty years
    Classic,
    /// Dense 52 points/year over ten years
    Smooth,
}

impl From<GridChoice> for GridPreset {
    fn from(choice: GridChoice) -> Self {
        match choice {
            GridChoice::Brazil => GridPreset::Brazil,
            GridChoice::Classic => GridPreset::Classic,
            GridChoice::Smooth => GridPreset::Smooth,
        }
    }
}

/// A formatted curve point for display.
#[derive(Tabled, serde::Serialize)]
struct CurvePoint {
    #[tabled(rename = "Tenor (Y)")]
    tenor: String,
    #[tabled(rename = "Spot (%)")]
    spot: String,
    #[tabled(rename = "Forward (%)")]
    forward: String,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        CurveCommand::Show(show_args) => execute_show(show_args, format),
        CurveCommand::Query(query_args) => execute_query(query_args, format),
    }
}

/// Execute the show subcommand.
fn execute_show(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let model = resolve_model(&args.params, args.curve_type)?;
    let tenors = resolve_grid(&args);
    let series = sample(&model, &tenors);

    let points = to_points(&series);

    if format == OutputFormat::Table {
        print_header("ETTJ Curve");
        println!("Parameters: {}", describe_source(&args.params, args.curve_type));
        println!("Points: {}", series.len());
        println!();
    }
    print_output(&points, format)
}

/// Execute the query subcommand.
fn execute_query(args: QueryArgs, format: OutputFormat) -> Result<()> {
    let model = resolve_model(&args.params, args.curve_type)?;
    let tenor = validate_tenor(args.tenor)?;

    let spot = model.spot_rate(tenor);
    let forward = model.forward_rate(tenor);

    match format {
        OutputFormat::Table => {
            print_header("Curve Query Result");
            let results = [
                KeyValue::new("Tenor (Y)", format!("{:.4}", tenor)),
                KeyValue::new("Spot (%)", format_percent(spot)),
                KeyValue::new("Forward (%)", format_percent(forward)),
            ];
            for r in &results {
                println!("{}: {}", r.key, r.value);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "tenor": tenor,
                "spot": spot,
                "forward": forward,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            println!("tenor,spot,forward");
            println!("{},{},{}", tenor, spot, forward);
        }
        OutputFormat::Minimal => {
            println!("{} {}", format_percent(spot), format_percent(forward));
        }
    }

    Ok(())
}

/// Resolves explicit parameters or falls back to the snapshot.
fn resolve_model(params: &Option<String>, curve_type: CurveTypeChoice) -> Result<Svensson> {
    if let Some(text) = params {
        Ok(parse_params(text)?)
    } else {
        Ok(snapshot::latest(curve_type.into()).params)
    }
}

/// Resolves the maturity grid from the show arguments.
fn resolve_grid(args: &ShowArgs) -> Vec<f64> {
    if let Some(ref text) = args.tenors {
        grid::parse(text)
    } else if let Some(max_years) = args.max_years {
        grid::dense(max_years, args.points_per_year)
    } else {
        GridPreset::from(args.grid).tenors()
    }
}

/// Formats a sampled series into display rows.
fn to_points(series: &CurveSeries) -> Vec<CurvePoint> {
    series
        .tenors
        .iter()
        .zip(series.spot.iter().zip(series.forward.iter()))
        .map(|(&t, (&s, &f))| CurvePoint {
            tenor: format!("{:.2}", t),
            spot: format_percent(s),
            forward: format_percent(f),
        })
        .collect()
}

/// Human-readable description of where the parameters came from.
fn describe_source(params: &Option<String>, curve_type: CurveTypeChoice) -> String {
    if params.is_some() {
        "explicit".to_string()
    } else {
        let snap = snapshot::latest(curve_type.into());
        format!("{} snapshot {}", snap.curve_type, snap.date)
    }
}
