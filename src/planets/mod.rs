//! # Planetary positions
//!
//! Geocentric ecliptic positions of the eight planets from Mercury to Pluto, following
//! P. Duffett-Smith's low-precision theory: osculating elements as polynomials of time,
//! closed-form perturbations, a Kepler solve, and a heliocentric to geocentric reduction
//! corrected for light travel time.
//!
//! ## Overview
//!
//! - [`PlanetId`]: identifier of a planet, parsable from its name.
//! - [`orbit`]: osculating elements and their evaluation at a given instant.
//! - [`perturbation`]: per-planet corrections to the Keplerian motion.
//! - [`sphera`]: per-epoch context shared by all the planets, with its orbit cache.
//! - [`planet`]: the planet registry and the position reduction.
//!
//! ## Example
//!
//! ```rust
//! use sphera::planets::{Planet, PlanetId, sphera::Sphera};
//!
//! let ctx = Sphera::create(36525.0, true).unwrap();
//! for id in PlanetId::ALL {
//!     let pos = Planet::for_id(id).geocentric_position(&ctx).unwrap();
//!     println!("{id:<8} {pos}");
//! }
//! ```

pub mod orbit;
pub mod perturbation;
pub mod planet;
pub mod sphera;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    constants::Degree,
    math_utils::dms,
    sphera_errors::SpheraError,
};

pub use planet::Planet;

/// Identifier of a planet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PlanetId {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl PlanetId {
    pub const ALL: [PlanetId; 8] = [
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
        PlanetId::Pluto,
    ];

    /// Position of the planet in [`PlanetId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
            PlanetId::Pluto => "Pluto",
        }
    }

    /// Mercury and Venus, whose orbits lie inside the Earth's.
    pub fn is_inner(self) -> bool {
        matches!(self, PlanetId::Mercury | PlanetId::Venus)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlanetId {
    type Err = SpheraError;

    /// Parse a planet name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PlanetId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SpheraError::InvalidIdentifier(s.to_string()))
    }
}

/// Geocentric ecliptic position of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Longitude, arc-degrees in `0..360`.
    pub longitude: Degree,
    /// Latitude, arc-degrees.
    pub latitude: Degree,
    /// Distance from the Earth, AU.
    pub distance: f64,
}

impl fmt::Display for EclipticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ld, lm, ls) = dms(self.longitude);
        let (bd, bm, bs) = dms(self.latitude.abs());
        let sign = if self.latitude < 0.0 { '-' } else { '+' };
        write!(
            f,
            "λ = {ld:03}°{lm:02}'{ls:05.2}\"  β = {sign}{bd:02}°{bm:02}'{bs:05.2}\"  Δ = {:.6} AU",
            self.distance
        )
    }
}
