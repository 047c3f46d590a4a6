//! # Angle and polynomial helpers
//!
//! Small numerical building blocks shared by the ephemeris series:
//! polynomial evaluation in time, range reduction of angles, sexagesimal
//! conversions and circular distances.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{Degree, Radian, DPI};

/// Evaluate `a₀ + a₁·t + a₂·t² + ...` with Horner's scheme.
///
/// Coefficients are given from the lowest to the highest power of `t`.
/// An empty slice evaluates to zero.
pub fn polynome(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Reduce `x` to the range `0 <= x < r`.
#[inline]
pub fn to_range(x: f64, r: f64) -> f64 {
    let a = x.rem_euclid(r);
    // tiny negative inputs round up to r
    if a >= r {
        0.0
    } else {
        a
    }
}

/// Reduce arc-degrees to `0..360`.
#[inline]
pub fn reduce_deg(x: Degree) -> Degree {
    to_range(x, 360.0)
}

/// Reduce radians to `0..2π`.
#[inline]
pub fn reduce_rad(x: Radian) -> Radian {
    to_range(x, DPI)
}

/// Fractional part of `x`, keeping the sign of the argument.
#[inline]
pub fn frac(x: f64) -> f64 {
    x.fract()
}

/// Fractional part of a number of revolutions, converted to arc-degrees.
///
/// Used inside long-period polynomials so that the large linear term does not
/// swamp the higher order terms.
#[inline]
pub fn frac360(x: f64) -> Degree {
    frac(x) * 360.0
}

/// Convert sexagesimal values to decimal degrees (or hours).
///
/// The result is negative as soon as one of the components is negative, so that
/// `ddd(0, -45, 0.0)` yields `-0.75`.
pub fn ddd(d: i32, m: i32, s: f64) -> f64 {
    let x = f64::from(d.abs()) + (f64::from(m.abs()) + s.abs() / 60.0) / 60.0;
    if d < 0 || m < 0 || s < 0.0 {
        -x
    } else {
        x
    }
}

/// Convert decimal degrees (or hours) to `(degrees, minutes, seconds)`.
///
/// For negative input only the first non-zero field carries the sign.
pub fn dms(x: f64) -> (i32, i32, f64) {
    let ax = x.abs();
    let d = ax.trunc();
    let mf = (ax - d) * 60.0;
    let m = mf.trunc();
    let s = (mf - m) * 60.0;

    let (mut d, mut m, mut s) = (d as i32, m as i32, s);
    if x < 0.0 {
        if d != 0 {
            d = -d;
        } else if m != 0 {
            m = -m;
        } else {
            s = -s;
        }
    }
    (d, m, s)
}

/// Convert ecliptic longitude to `(zodiac sign, degrees, minutes, seconds)`.
///
/// Sign 0 is Aries, 11 is Pisces.
pub fn zdms(x: Degree) -> (i32, i32, i32, f64) {
    let (d, m, s) = dms(x);
    (d.div_euclid(30), d.rem_euclid(30), m, s)
}

/// Shortest arc between two angles, in arc-degrees.
pub fn shortest_arc_deg(a: Degree, b: Degree) -> Degree {
    let x = (a - b).abs();
    if x > 180.0 {
        360.0 - x
    } else {
        x
    }
}

/// Shortest arc between two angles, in radians.
pub fn shortest_arc_rad(a: Radian, b: Radian) -> Radian {
    let x = (a - b).abs();
    if x > PI {
        DPI - x
    } else {
        x
    }
}

/// Angle `b - a` in arc-degrees, in the range `-180..180`.
///
/// Both arguments are expected in `0..360`; the difference is taken across the
/// 0° boundary when needed (`359° → 1°` gives `+2°`).
pub fn diff_angle(a: Degree, b: Degree) -> Degree {
    let x = if b < a { b + 360.0 - a } else { b - a };
    if x > 180.0 {
        x - 360.0
    } else {
        x
    }
}

/// Polar coordinates: angular coordinate `phi` and radial coordinate `rho`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub phi: f64,
    pub rho: f64,
}

#[cfg(test)]
mod math_utils_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polynome() {
        assert_eq!(polynome(10.0, &[1.0, 2.0, 3.0]), 321.0);
        assert_eq!(polynome(2.0, &[5.0]), 5.0);
        assert_eq!(polynome(2.0, &[]), 0.0);
    }

    #[test]
    fn test_range_reduction() {
        assert_eq!(to_range(-700.0, 360.0), 20.0);
        assert_eq!(reduce_deg(-700.0), 20.0);
        assert_eq!(reduce_deg(720.0), 0.0);
        assert_abs_diff_eq!(reduce_rad(12.89), 0.3236, epsilon = 1e-4);
    }

    #[test]
    fn test_range_reduction_stays_below_bound() {
        assert_eq!(reduce_rad(-1e-17), 0.0);
        assert_eq!(reduce_deg(-1e-14), 0.0);
        assert_eq!(reduce_deg(-1.0), 359.0);
        for x in [-1e-300, -f64::EPSILON, -1e-16 * DPI] {
            let a = reduce_rad(x);
            assert!((0.0..DPI).contains(&a), "{x} -> {a}");
        }
    }

    #[test]
    fn test_frac() {
        assert_eq!(frac(-5.5), -0.5);
        assert_eq!(frac(5.25), 0.25);
        assert_abs_diff_eq!(frac360(862.7609301843507), 273.9349, epsilon = 1e-4);
    }

    #[test]
    fn test_sexagesimal() {
        assert_eq!(ddd(-55, 45, 0.0), -55.75);
        assert_eq!(ddd(0, -45, 0.0), -0.75);
        assert_abs_diff_eq!(ddd(10, 30, 36.0), 10.51, epsilon = 1e-12);

        let (d, m, s) = dms(55.75);
        assert_eq!((d, m), (55, 45));
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-9);

        let (d, m, s) = dms(-0.75);
        assert_eq!((d, m), (0, -45));
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zdms() {
        let (z, d, m, s) = zdms(320.25);
        assert_eq!((z, d, m), (10, 20, 15));
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_arcs() {
        assert_eq!(shortest_arc_deg(10.0, 270.0), 100.0);
        assert_eq!(shortest_arc_deg(270.0, 10.0), 100.0);
        assert_abs_diff_eq!(shortest_arc_rad(0.1, DPI - 0.1), 0.2, epsilon = 1e-12);
        assert_eq!(diff_angle(359.0, 1.0), 2.0);
        assert_eq!(diff_angle(1.0, 359.0), -2.0);
        assert_eq!(diff_angle(10.0, 100.0), 90.0);
    }
}
