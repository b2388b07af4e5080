//! # geodesy
//!
//! Conversion de coordonnées géodésiques (latitude, longitude, hauteur) vers
//! le repère cartésien ECEF (Earth-Centered, Earth-Fixed).
//!
//! ## Features
//!
//! - Formule fermée LLH → ECEF sur l'ellipsoïde de référence
//! - Pure Rust, sans dépendances
//!
//! ## Usage
//!
//! ```rust
//! use geodesy::Geodetic;
//!
//! let ecef = Geodetic::from_degrees(45.0, 5.72, 0.2).to_ecef();
//! println!("{} {} {}", ecef.x_km, ecef.y_km, ecef.z_km);
//! ```

pub mod ecef;
pub mod ellipsoid;

pub use ecef::{geodetic_to_ecef, Ecef, Geodetic};
pub use ellipsoid::Earth;
