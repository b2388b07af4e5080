//! Conversion géodésique (LLH) vers cartésien ECEF
//!
//! Formule fermée sur l'ellipsoïde de référence : la grande normale donne la
//! distance à l'axe de rotation, corrigée de l'excentricité pour la
//! composante polaire.

use super::ellipsoid::Earth;

/// Point géodésique (radians + km)
#[derive(Debug, Clone, Copy)]
pub struct Geodetic {
    /// Latitude en radians
    pub lat: f64,
    /// Longitude en radians
    pub lon: f64,
    /// Hauteur au-dessus de l'ellipsoïde en km
    pub height_km: f64,
}

impl Geodetic {
    pub fn new(lat: f64, lon: f64, height_km: f64) -> Self {
        Self {
            lat,
            lon,
            height_km,
        }
    }

    /// Crée depuis des degrés
    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_km: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
            height_km,
        }
    }

    /// Convertit latitude et longitude en degrés
    pub fn to_degrees(self) -> (f64, f64) {
        (self.lat.to_degrees(), self.lon.to_degrees())
    }

    /// Convertit vers le repère cartésien ECEF
    pub fn to_ecef(self) -> Ecef {
        geodetic_to_ecef(self)
    }
}

/// Point cartésien ECEF (km)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecef {
    /// X en km (axe équatorial, méridien de Greenwich)
    pub x_km: f64,
    /// Y en km (axe équatorial, 90°E)
    pub y_km: f64,
    /// Z en km (axe de rotation)
    pub z_km: f64,
}

/// Calcule la grande normale (rayon de courbure dans le plan vertical)
fn grande_normale(lat: f64) -> f64 {
    Earth::A_KM / (1.0 - Earth::E2 * lat.sin().powi(2)).sqrt()
}

/// Convertit un point géodésique vers ECEF
///
/// Fonction pure, sans erreur possible pour une latitude réelle : le
/// dénominateur `sqrt(1 - e²·sin²(lat))` reste strictement positif car e < 1.
/// Les entrées NaN/infinies se propagent telles quelles (IEEE-754).
pub fn geodetic_to_ecef(geo: Geodetic) -> Ecef {
    let (sin_lat, cos_lat) = geo.lat.sin_cos();
    let (sin_lon, cos_lon) = geo.lon.sin_cos();

    let n = grande_normale(geo.lat);

    Ecef {
        x_km: (n + geo.height_km) * cos_lat * cos_lon,
        y_km: (n + geo.height_km) * cos_lat * sin_lon,
        z_km: (n * (1.0 - Earth::E2) + geo.height_km) * sin_lat,
    }
}
