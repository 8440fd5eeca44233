//! Marketplace proximity CLI
//!
//! Computes buyer-to-seller distances, inspects location payloads and
//! annotates listing exports with distance badges.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;

use commands::{annotate, distance, extract};

/// Distance and proximity tooling for marketplace listings
#[derive(Parser)]
#[command(name = "marketplace-proximity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Path to a config file (defaults to .marketplace-geo.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance between two points
    #[command(allow_negative_numbers = true)]
    Distance {
        /// Latitude of the first point
        lat1: f64,
        /// Longitude of the first point
        lon1: f64,
        /// Latitude of the second point
        lat2: f64,
        /// Longitude of the second point
        lon2: f64,
    },

    /// Show the coordinates and address found in a JSON entity
    Extract {
        /// JSON file holding a listing, shop or user ("-" for stdin)
        file: PathBuf,
    },

    /// Annotate a JSON array of listings with distances from the buyer
    #[command(allow_negative_numbers = true)]
    Annotate {
        /// JSON file holding the listings array ("-" for stdin)
        file: PathBuf,

        /// Buyer latitude
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Buyer longitude
        #[arg(long, requires = "lat")]
        lon: Option<f64>,

        /// Hide listings farther than this many km (overrides config)
        #[arg(short, long)]
        max_km: Option<f64>,

        /// Sort nearest first
        #[arg(short, long)]
        sort: bool,

        /// Look up sellers for listings without an embedded shop location
        #[arg(long)]
        fetch_sellers: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let result = match cli.command {
        Commands::Distance { lat1, lon1, lat2, lon2 } => {
            distance::run(lat1, lon1, lat2, lon2, &cli.format)
        }

        Commands::Extract { file } => extract::run(&file, &cli.format),

        Commands::Annotate { file, lat, lon, max_km, sort, fetch_sellers } => {
            let options = annotate::Options {
                buyer: lat.zip(lon),
                max_km,
                sort,
                fetch_sellers,
            };
            annotate::run(&file, options, cli.config.as_deref(), &cli.format).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, &cli.format);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn report_error(error: &anyhow::Error, format: &str) {
    let report = error
        .downcast_ref::<marketplace_core::Error>()
        .filter(|_| format == "json")
        .and_then(|err| serde_json::to_string_pretty(&err.to_report()).ok());

    match report {
        Some(json) => eprintln!("{json}"),
        None => eprintln!("{} {}", "Error:".red().bold(), error),
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    let code = error
        .downcast_ref::<marketplace_core::Error>()
        .map_or(marketplace_core::error::exit_codes::FAILURE, marketplace_core::Error::exit_code);
    u8::try_from(code).unwrap_or(1)
}
