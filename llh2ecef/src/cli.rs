//! Implémentation de la commande de conversion

use anyhow::Result;
use geodesy::Geodetic;
use thiserror::Error;
use tracing::debug;

/// Erreurs de la frontière CLI (la conversion elle-même est infaillible)
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument non numérique
    #[error("invalid {name}: '{raw}' is not a valid number")]
    InvalidNumber { name: &'static str, raw: String },
}

/// Parse un argument de coordonnée en f64
fn parse_coordinate(name: &'static str, raw: &str) -> Result<f64, CliError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber {
            name,
            raw: raw.to_string(),
        })
}

/// Formate une coordonnée avec exactement 6 décimales
fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

/// Exécute la conversion et affiche x, y, z (km) sur stdout
pub fn run(lat_deg: &str, lon_deg: &str, hae_km: &str) -> Result<()> {
    let lat_deg = parse_coordinate("lat_deg", lat_deg)?;
    let lon_deg = parse_coordinate("lon_deg", lon_deg)?;
    let hae_km = parse_coordinate("hae_km", hae_km)?;

    let ecef = Geodetic::from_degrees(lat_deg, lon_deg, hae_km).to_ecef();

    debug!(x_km = ecef.x_km, y_km = ecef.y_km, z_km = ecef.z_km, "Converted");

    println!("{}", format_coordinate(ecef.x_km));
    println!("{}", format_coordinate(ecef.y_km));
    println!("{}", format_coordinate(ecef.z_km));

    Ok(())
}
