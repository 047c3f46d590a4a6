use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::{Centuries, Degree, Radian, DAYS_PER_CENT},
    math_utils::{frac360, polynome, reduce_deg},
};

/// Mean daily motion of a body whose mean longitude grows by one degree per century.
const DAILY_MOTION_PER_CENTURY_RATE: f64 = 9.856263e-3;

/// Polynomial series of an osculating element in Julian centuries since 1900.
///
/// Coefficients are in arc-degrees (or dimensionless for the eccentricity), ordered from
/// the constant term to the highest power of `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terms {
    coeffs: &'static [f64],
}

impl Terms {
    pub const fn new(coeffs: &'static [f64]) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &'static [f64] {
        self.coeffs
    }

    /// Evaluate the series at `t` and reduce the result to `0..360`.
    pub fn assemble(&self, t: Centuries) -> Degree {
        reduce_deg(polynome(t, self.coeffs))
    }
}

/// Mean longitude series `a + b·t + c·t² + d·t³`.
///
/// The linear term accumulates hundreds of revolutions per century; whole revolutions are
/// dropped from `b·t` before the quadratic and cubic terms are added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLongitudeTerms {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl MeanLongitudeTerms {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn assemble(&self, t: Centuries) -> Degree {
        let b = frac360(self.b * t);
        reduce_deg(self.a + b + (self.d * t + self.c) * t * t)
    }
}

/// Osculating elements of a planetary orbit as functions of time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    pub mean_longitude: MeanLongitudeTerms,
    pub perihelion: Terms,
    pub eccentricity: Terms,
    pub inclination: Terms,
    pub mean_node: Terms,
    /// Semi-major axis in AU, constant.
    pub major_semiaxis: f64,
    daily_motion: Degree,
}

impl OrbitalElements {
    pub fn new(
        mean_longitude: MeanLongitudeTerms,
        perihelion: Terms,
        eccentricity: Terms,
        inclination: Terms,
        mean_node: Terms,
        major_semiaxis: f64,
    ) -> Self {
        let daily_motion = mean_longitude.b * DAILY_MOTION_PER_CENTURY_RATE
            + (mean_longitude.c + mean_longitude.d) / DAYS_PER_CENT;
        Self {
            mean_longitude,
            perihelion,
            eccentricity,
            inclination,
            mean_node,
            major_semiaxis,
            daily_motion,
        }
    }

    /// Mean daily motion, arc-degrees per day.
    pub fn daily_motion(&self) -> Degree {
        self.daily_motion
    }

    /// Mean anomaly at `t`, arc-degrees in `0..360`.
    pub fn assemble_mean_anomaly(&self, t: Centuries) -> Degree {
        reduce_deg(self.mean_longitude.assemble(t) - self.perihelion.assemble(t))
    }

    /// Evaluate every element at `t` (Julian centuries since 1900 January 0.5).
    pub fn instantiate(&self, t: Centuries) -> OrbitInstance {
        OrbitInstance {
            perihelion: self.perihelion.assemble(t).to_radians(),
            eccentricity: self.eccentricity.assemble(t),
            mean_node: self.mean_node.assemble(t).to_radians(),
            inclination: self.inclination.assemble(t).to_radians(),
            major_semiaxis: self.major_semiaxis,
            mean_anomaly: self.assemble_mean_anomaly(t).to_radians(),
            daily_motion: self.daily_motion.to_radians(),
        }
    }
}

/// Orbit evaluated at a given instant.
///
/// Units:
/// * `perihelion`, `mean_node`, `inclination`, `mean_anomaly`: radians
/// * `daily_motion`: radians per day
/// * `major_semiaxis`: AU
/// * `eccentricity`: unitless
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitInstance {
    pub perihelion: Radian,
    pub eccentricity: f64,
    pub mean_node: Radian,
    pub inclination: Radian,
    pub major_semiaxis: f64,
    pub mean_anomaly: Radian,
    pub daily_motion: Radian,
}

impl fmt::Display for OrbitInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbit instance")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.major_semiaxis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination.to_degrees()
        )?;
        writeln!(
            f,
            "  Ω   (mean node)             = {:.6} rad ({:.6}°)",
            self.mean_node,
            self.mean_node.to_degrees()
        )?;
        writeln!(
            f,
            "  ω   (perihelion)            = {:.6} rad ({:.6}°)",
            self.perihelion,
            self.perihelion.to_degrees()
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6} rad ({:.6}°)",
            self.mean_anomaly,
            self.mean_anomaly.to_degrees()
        )?;
        write!(
            f,
            "  n   (daily motion)          = {:.8} rad/day",
            self.daily_motion
        )
    }
}
