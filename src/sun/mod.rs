//! # Position of the Sun
//!
//! Low-precision geocentric position of the Sun for the mean equinox of date:
//! Keplerian motion of the Earth on a slowly varying ellipse, corrected by the
//! main perturbations of Venus, Jupiter and the Moon.
//!
//! ## Overview
//!
//! - [`mean_longitude`], [`mean_anomaly`]: mean elements in arc-degrees.
//! - [`true_geocentric`]: geometric longitude and Sun–Earth distance.
//! - [`apparent`]: longitude corrected for nutation, aberration and optionally light time.
//! - [`seasons`]: instants of equinoxes and solstices.
//!
//! These routines feed the planetary reduction through [`crate::planets::sphera::Sphera`].

pub mod seasons;

use crate::{
    constants::{Centuries, Degree, DAYS_PER_CENT, DJD, DPI},
    earth_orientation::nutation,
    kepler::{solve_eccentric_anomaly_with, true_anomaly, KeplerParams},
    math_utils::{frac360, polynome, reduce_deg, Polar},
    sphera_errors::SpheraError,
};

/// Annual aberration of the Sun, arc-degrees.
const SUN_ABERRATION: Degree = 5.69e-3;

/// Mean longitude of the Sun, arc-degrees.
///
/// * `t`: Julian centuries since 1900 January 0.5.
pub fn mean_longitude(t: Centuries) -> Degree {
    reduce_deg(2.7969668e2 + 3.025e-4 * t * t + frac360(1.000021359e2 * t))
}

/// Mean anomaly of the Sun, arc-degrees.
///
/// * `t`: Julian centuries since 1900 January 0.5.
pub fn mean_anomaly(t: Centuries) -> Degree {
    reduce_deg(3.5847583e2 - (1.5e-4 + 3.3e-6 * t) * t * t + frac360(9.999736042e1 * t))
}

#[inline]
fn perturbation_angle(t: Centuries, a: Degree, b: f64) -> f64 {
    (a + frac360(b * t)).to_radians()
}

/// True geocentric position of the Sun, referred to the mean equinox of date.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since 1900 January 0.5.
/// * `ms`: mean anomaly of the Sun in arc-degrees; computed with [`mean_anomaly`] when `None`.
///
/// Returns
/// --------
/// * A [`Polar`] record: `phi` is the geometric longitude in arc-degrees, `rho` the
///   Sun–Earth distance in AU.
pub fn true_geocentric(t: Centuries, ms: Option<Degree>) -> Result<Polar, SpheraError> {
    true_geocentric_with(t, ms, &KeplerParams::default())
}

/// True geocentric position of the Sun with explicit Kepler solver settings.
///
/// See [`true_geocentric`].
pub fn true_geocentric_with(
    t: Centuries,
    ms: Option<Degree>,
    kepler: &KeplerParams,
) -> Result<Polar, SpheraError> {
    let ms = ms.unwrap_or_else(|| mean_anomaly(t));
    let ls = mean_longitude(t);
    let ma = ms.to_radians();
    let s = polynome(t, &[1.675104e-2, -4.18e-5, -1.26e-7]);
    let ea = solve_eccentric_anomaly_with(s, ma - DPI * (ma / DPI).floor(), kepler)?;
    let nu = true_anomaly(s, ea)?;
    let t2 = t * t;

    let a = perturbation_angle(t, 153.23, 6.255209472e1); // Venus
    let b = perturbation_angle(t, 216.57, 1.251041894e2);
    let c = perturbation_angle(t, 312.69, 9.156766028e1);
    let d = perturbation_angle(t, 350.74 - 1.44e-3 * t2, 1.236853095e3); // Moon
    let h = perturbation_angle(t, 353.4, 1.831353208e2);
    let e = (231.19 + 20.2 * t).to_radians(); // long period inequality

    let dl = 1.34e-3 * a.cos()
        + 1.54e-3 * b.cos()
        + 2e-3 * c.cos()
        + 1.79e-3 * d.sin()
        + 1.78e-3 * e.sin();
    let dr = 5.43e-6 * a.sin()
        + 1.575e-5 * b.sin()
        + 1.627e-5 * c.sin()
        + 3.076e-5 * d.cos()
        + 9.27e-6 * h.sin();

    Ok(Polar {
        phi: reduce_deg(nu.to_degrees() + ls - ms + dl),
        rho: 1.0000002 * (1.0 - s * ea.cos()) + dr,
    })
}

/// Apparent position of the Sun: nutation, aberration and optionally light travel time.
///
/// Arguments
/// ---------
/// * `djd`: Julian days since 1900 January 0.5.
/// * `dpsi`: nutation in longitude, arc-degrees; computed when `None`.
/// * `ignore_light_travel`: skip the light-time correction (about 20").
///
/// Returns
/// --------
/// * Apparent longitude in arc-degrees (`0..360`) and Sun–Earth distance in AU.
pub fn apparent(
    djd: DJD,
    dpsi: Option<Degree>,
    ignore_light_travel: bool,
) -> Result<Polar, SpheraError> {
    let t = djd / DAYS_PER_CENT;
    let dpsi = dpsi.unwrap_or_else(|| nutation(t).dpsi);

    let geo = true_geocentric(t, None)?;
    let mut lambda = geo.phi + dpsi - SUN_ABERRATION;
    if !ignore_light_travel {
        // 1.365 s of time per AU, converted to arc-degrees
        lambda -= 1.365 * geo.rho * 15.0 / 3600.0;
    }

    Ok(Polar {
        phi: reduce_deg(lambda),
        rho: geo.rho,
    })
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use approx::assert_relative_eq;

    // (djd, geometric longitude, distance, apparent longitude)
    const CASES: [(f64, f64, f64, f64); 4] = [
        (30916.5, 151.01309547440778, 1.010993800005251, 151.0035132296576),
        (
            30819.10833333333,
            57.83143688493146,
            1.011718488789592,
            57.82109236581925,
        ),
        (28804.5, 229.2517039627867, 0.9898375, 229.2450957063683),
        (
            33888.5,
            199.90600618015975,
            0.9975999344847888,
            199.9047664927989,
        ),
    ];

    #[test]
    fn test_true_geocentric() {
        for (djd, l, r, _) in CASES {
            let geo = true_geocentric(djd / DAYS_PER_CENT, None).unwrap();
            assert_relative_eq!(geo.phi, l, max_relative = 1e-4);
            assert_relative_eq!(geo.rho, r, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_explicit_mean_anomaly() {
        let t = 30700.5 / DAYS_PER_CENT;
        let implicit = true_geocentric(t, None).unwrap();
        let explicit = true_geocentric(t, Some(mean_anomaly(t))).unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_apparent() {
        for (djd, _, _, ap) in CASES {
            let geo = apparent(djd, None, true).unwrap();
            assert_relative_eq!(geo.phi, ap, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_light_travel() {
        let fast = apparent(30916.5, None, true).unwrap();
        let slow = apparent(30916.5, None, false).unwrap();
        assert_relative_eq!(
            fast.phi - slow.phi,
            1.365 * fast.rho * 15.0 / 3600.0,
            max_relative = 1e-9
        );
    }
}
