//! # Coordinate systems
//!
//! Conversions between ecliptic, equatorial and horizontal coordinates. All public
//! functions take and return arc-degrees.
//!
//! ## Overview
//!
//! - [`ecl_to_equ`], [`equ_to_ecl`]: rotation of the unit direction vector about the
//!   vernal equinox axis by the obliquity of the ecliptic.
//! - [`equ_to_hor`], [`hor_to_equ`]: hour angle and declination to azimuth and altitude
//!   and back. The relations are symmetrical, so both directions share the same code.
//!
//! Azimuths are counted from the North through the East.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::{
    constants::{Degree, Radian, DPI},
    math_utils::reduce_rad,
};

/// Principal axis of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Active rotation by `alpha` radians about a principal axis, in the direct sense.
///
/// The rotated vector is `x' = R · x`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Unit vector pointing at longitude `lon`, latitude `lat` (radians).
pub fn spherical_to_cartesian(lon: Radian, lat: Radian) -> Vector3<f64> {
    let (sl, cl) = lon.sin_cos();
    let (sb, cb) = lat.sin_cos();
    Vector3::new(cb * cl, cb * sl, sb)
}

/// Longitude in `[0, 2π)` and latitude of a direction vector, radians.
///
/// A null vector gives `(0, 0)`; a vector along the polar axis gives a zero longitude.
pub fn cartesian_to_spherical(v: &Vector3<f64>) -> (Radian, Radian) {
    let norm = v.norm();
    if norm == 0.0 {
        return (0.0, 0.0);
    }
    let lat = (v.z / norm).clamp(-1.0, 1.0).asin();
    if v.x == 0.0 && v.y == 0.0 {
        return (0.0, lat);
    }
    (reduce_rad(v.y.atan2(v.x)), lat)
}

fn rotate(x: Degree, y: Degree, angle: Degree) -> (Degree, Degree) {
    let v = rotmt(angle.to_radians(), Axis::X)
        * spherical_to_cartesian(x.to_radians(), y.to_radians());
    let (a, b) = cartesian_to_spherical(&v);
    (a.to_degrees(), b.to_degrees())
}

/// Ecliptic to equatorial coordinates.
///
/// Arguments
/// ---------
/// * `lambda`, `beta`: ecliptic longitude and latitude.
/// * `eps`: obliquity of the ecliptic.
///
/// Returns
/// --------
/// * Right ascension in `0..360` and declination, arc-degrees.
pub fn ecl_to_equ(lambda: Degree, beta: Degree, eps: Degree) -> (Degree, Degree) {
    rotate(lambda, beta, eps)
}

/// Equatorial to ecliptic coordinates.
///
/// Arguments
/// ---------
/// * `alpha`, `delta`: right ascension and declination.
/// * `eps`: obliquity of the ecliptic.
///
/// Returns
/// --------
/// * Ecliptic longitude in `0..360` and latitude, arc-degrees.
pub fn equ_to_ecl(alpha: Degree, delta: Degree, eps: Degree) -> (Degree, Degree) {
    rotate(alpha, delta, -eps)
}

fn equ_hor(x: Degree, y: Degree, phi: Degree) -> (Degree, Degree) {
    let (sx, cx) = x.to_radians().sin_cos();
    let (sy, cy) = y.to_radians().sin_cos();
    let (sphi, cphi) = phi.to_radians().sin_cos();

    let sq = (sy * sphi + cy * cphi * cx).clamp(-1.0, 1.0);
    let q = sq.asin();
    let cp = ((sy - sphi * sq) / (cphi * q.cos())).clamp(-1.0, 1.0);
    let mut p = cp.acos();
    if sx > 0.0 {
        p = DPI - p;
    }
    (p.to_degrees(), q.to_degrees())
}

/// Equatorial to horizontal coordinates.
///
/// Arguments
/// ---------
/// * `h`: local hour angle, `LST − α`.
/// * `delta`: declination.
/// * `phi`: geographic latitude, positive northwards.
///
/// Returns
/// --------
/// * Azimuth and altitude, arc-degrees.
pub fn equ_to_hor(h: Degree, delta: Degree, phi: Degree) -> (Degree, Degree) {
    equ_hor(h, delta, phi)
}

/// Horizontal to equatorial coordinates.
///
/// Arguments
/// ---------
/// * `az`: azimuth.
/// * `alt`: altitude.
/// * `phi`: geographic latitude, positive northwards.
///
/// Returns
/// --------
/// * Hour angle and declination, arc-degrees.
pub fn hor_to_equ(az: Degree, alt: Degree, phi: Degree) -> (Degree, Degree) {
    equ_hor(az, alt, phi)
}
