//! tinct - color literal toolbox
//!
//! Parses hex literals and catalog names, derives alternative color models,
//! rotates hue, and compares colors with a fuzz tolerance.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Color parsing and model conversion CLI")]
#[command(long_about = "
Color literal toolbox.

Parses hex literals and catalog names, derives alternative color models,
rotates hue, and compares colors with a fuzz tolerance, all at a chosen
channel precision.

Examples:
  tinct parse '#F00' rebeccapurple       # Inspect literals
  tinct -d 16 parse '#0000FFFF0000'      # Same grammar, 16-bit samples
  tinct convert '#336699' --to hsl
  tinct convert black --to mono
  tinct shift gold --degrees 120
  tinct diff '#FF0000' '#FE0101' --fuzz 1.5
  tinct names sea                        # Catalog names containing 'sea'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Channel precision: 8, 16, float
    #[arg(short = 'd', long, global = true, default_value = "8")]
    depth: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse color literals and print their canonical forms
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Derive an alternative color model from a literal
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Rotate the hue through the HSV model
    Shift(ShiftArgs),

    /// Compare two colors with a fuzz tolerance
    Diff(DiffArgs),

    /// List catalog color names
    Names(NamesArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Color literal(s): hex, catalog name, or 'transparent'
    #[arg(required = true)]
    colors: Vec<String>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Color literal
    color: String,

    /// Target model: gray, hsl, hsv, cmyk, yuv, mono
    #[arg(short, long)]
    to: String,
}

#[derive(Args)]
struct ShiftArgs {
    /// Color literal
    color: String,

    /// Rotation in degrees, negative rotates backwards
    #[arg(long, allow_negative_numbers = true)]
    degrees: f64,
}

#[derive(Args)]
struct DiffArgs {
    /// First color
    a: String,

    /// Second color
    b: String,

    /// Allowed difference as a percentage of the sample range
    #[arg(short, long, default_value = "0.0")]
    fuzz: f64,
}

#[derive(Args)]
struct NamesArgs {
    /// Only list names containing this substring
    pattern: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let depth = commands::parse_depth(&cli.depth)?;
    match cli.command {
        Commands::Parse(args) => commands::parse::run(args, cli.verbose, depth),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose, depth),
        Commands::Shift(args) => commands::shift::run(args, cli.verbose, depth),
        Commands::Diff(args) => commands::diff::run(args, cli.verbose, depth),
        Commands::Names(args) => commands::names::run(args, cli.verbose),
    }
}
