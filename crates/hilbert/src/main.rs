//! Command‑line entry point for the `hilbert` tool.
//!
//! Converts between distances along an N‑dimensional Hilbert curve and the
//! points they visit.

use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hilbertcurve::{BigInt, CurveConfig};

/// CLI command implementations.
mod cmd;

/// Parse a distance in decimal, or hexadecimal with a `0x` prefix.
fn parse_distance(s: &str) -> Result<BigInt, String> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (radix, digits) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, body),
    };
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .filter(|_| !digits.starts_with(['+', '-']))
        .ok_or_else(|| format!("invalid distance '{s}': expected an integer"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[derive(Parser)]
#[command(name = "hilbert")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Curve selection shared by every subcommand.
#[derive(Args, Clone, Copy, Debug)]
struct CurveArgs {
    /// Bits per axis.
    #[arg(short = 'p', long = "order", help = "Bits per axis (1..=64)")]
    order: u32,

    /// Number of axes.
    #[arg(short = 'n', long = "dimensions", help = "Number of dimensions (>= 2)")]
    dimensions: u32,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hilbert` tool.
enum Commands {
    #[command(about = "Map distances along the curve to points")]
    /// Map distances to points.
    Point {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            required = true,
            allow_negative_numbers = true,
            value_parser = parse_distance,
            help = "Distances along the curve (decimal or 0x-prefixed hex)"
        )]
        /// Distances to convert.
        distances: Vec<BigInt>,
    },

    #[command(about = "Map a point to its distance along the curve")]
    /// Map a point to a distance.
    Distance {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(required = true, help = "One coordinate per axis, axis 0 first")]
        /// Coordinates of the point.
        coords: Vec<u64>,
    },

    #[command(about = "Show the derived constants of a curve")]
    /// Describe a curve.
    Info {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,
    },
}

impl Commands {
    /// The curve selection carried by every subcommand.
    fn curve(&self) -> CurveArgs {
        match self {
            Self::Point { curve, .. } | Self::Distance { curve, .. } | Self::Info { curve } => {
                *curve
            }
        }
    }
}

/// Print result lines or exit with an error.
fn report(result: Result<Vec<String>>) {
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Validate the curve and dispatch the selected subcommand.
fn run(cli: &Cli) -> Result<Vec<String>> {
    let args = cli.command.curve();
    let curve = CurveConfig::new(args.order, args.dimensions)?;
    if cli.v > 0 {
        eprintln!(
            "{curve}: {} bits, distances 0..={}",
            curve.total_bits(),
            curve.max_distance()
        );
    }

    match &cli.command {
        Commands::Point { distances, .. } => cmd::points(&curve, distances),
        Commands::Distance { coords, .. } => {
            if cli.v > 1 {
                eprintln!("mapping {} coordinates", coords.len());
            }
            cmd::distance(&curve, coords).map(|line| vec![line])
        }
        Commands::Info { .. } => Ok(cmd::info(&curve)),
    }
}

fn main() {
    let cli = Cli::parse();
    report(run(&cli));
}
