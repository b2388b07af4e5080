//! Point d'entrée CLI pour llh2ecef

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

/// Convertir des coordonnées géodésiques (LLH) vers ECEF
#[derive(Parser)]
#[command(name = "llh2ecef")]
#[command(author, version)]
#[command(about = "Convertir latitude/longitude/hauteur en coordonnées cartésiennes ECEF")]
struct Cli {
    /// Geodetic latitude in degrees
    #[arg(allow_negative_numbers = true)]
    lat_deg: String,

    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    lon_deg: String,

    /// Height above the ellipsoid in km
    #[arg(allow_negative_numbers = true)]
    hae_km: String,

    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            // Mauvais nombre d'arguments ou option inconnue : usage sur stdout
            _ => {
                println!("Usage: llh2ecef <lat_deg> <lon_deg> <hae_km>");
                return ExitCode::from(1);
            }
        },
    };

    init_logging(cli.verbose, cli.quiet);

    debug!(lat = %cli.lat_deg, lon = %cli.lon_deg, hae = %cli.hae_km, "Converting LLH to ECEF");

    if let Err(err) = cli::run(&cli.lat_deg, &cli.lon_deg, &cli.hae_km) {
        eprintln!("error: {err:#}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (_, 0) => Level::WARN,
        (_, 1) => Level::INFO,
        (_, 2) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout est réservé aux trois coordonnées, les logs partent sur stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
