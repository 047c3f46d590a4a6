//! # Constants and type definitions for Sphera
//!
//! This module centralizes the **astronomical constants**, **conversion factors** and
//! **type aliases** shared by the ephemeris routines.
//!
//! ## Overview
//!
//! - Epoch conventions (DJD, Julian centuries since 1900 January 0.5)
//! - Angle units
//! - Constants of the geocentric reduction (light time, aberration)
//! - Core type aliases used across the crate
//!
//! All time arguments of the library are expressed in **DJD**, the number of Julian days
//! elapsed since 1900 January 0.5 (JD 2415020.0).

// -------------------------------------------------------------------------------------------------
// Angles and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Arcseconds per degree
pub const ARCSEC_PER_DEG: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Time scales
// -------------------------------------------------------------------------------------------------

/// Offset between Julian Date and DJD (JD of 1900 January 0.5)
pub const DJD_TO_JD: f64 = 2_415_020.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENT: f64 = 36_525.0;

/// Number of days in a tropical year
pub const TROPICAL_YEAR: f64 = 365.2422;

// -------------------------------------------------------------------------------------------------
// Geocentric reduction
// -------------------------------------------------------------------------------------------------

/// Light travel time for one astronomical unit, in days
pub const LIGHT_TIME_FACTOR: f64 = 5.775518e-3;

/// Constant of annual aberration, in radians (20.5")
pub const ABERRATION: f64 = 9.9387e-5;

/// Default convergence threshold of the Kepler solver, in radians
pub const KEPLER_EPS: f64 = 1e-7;

/// Default iteration ceiling of the Kepler solver
pub const KEPLER_MAX_ITER: usize = 50;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

pub type Degree = f64;
pub type Radian = f64;
pub type Hours = f64;
/// Julian days since 1900 January 0.5
pub type DJD = f64;
/// Julian centuries since 1900 January 0.5
pub type Centuries = f64;
