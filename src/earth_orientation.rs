use serde::{Deserialize, Serialize};

use crate::{
    constants::{Centuries, Degree, ARCSEC_PER_DEG, DAYS_PER_CENT, DJD},
    math_utils::frac360,
};

/// Nutation in ecliptic longitude (`dpsi`) and in obliquity of the ecliptic (`deps`),
/// both in arc-degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutation {
    pub dpsi: Degree,
    pub deps: Degree,
}

/// Compute the effects of nutation with an accuracy of about one arcsecond.
///
/// The model is the short Duffett-Smith series: thirteen periodic terms in longitude and
/// nine in obliquity, built on the mean longitudes and anomalies of the Sun and the Moon
/// and on the longitude of the lunar ascending node.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries elapsed since 1900 January 0.5.
///
/// Returns
/// --------
/// * A [`Nutation`] record, `dpsi` and `deps` in arc-degrees.
///
/// # See also
/// * [`obliquity`] – consumes `deps` to compute the true obliquity
pub fn nutation(t: Centuries) -> Nutation {
    let t2 = t * t;

    // Fundamental arguments (radians)
    let ls = (2.796967e2 + 3.030e-4 * t2 + frac360(1.000021358e2 * t)).to_radians();
    let ms = (3.584758e2 - 1.500e-4 * t2 + frac360(9.999736056e1 * t)).to_radians();
    let ld = (2.704342e2 - 1.133e-3 * t2 + frac360(1.336855231e3 * t)).to_radians();
    let md = (2.961046e2 + 9.192e-3 * t2 + frac360(1.325552359e3 * t)).to_radians();
    let nm = (2.591833e2 + 2.078e-3 * t2 - frac360(5.372616667 * t)).to_radians();
    let tls = ls + ls;
    let tld = ld + ld;
    let tnm = nm + nm;

    let dpsi = (-17.2327 - 1.737e-2 * t) * nm.sin()
        + (-1.2729 - 1.3e-4 * t) * tls.sin()
        + 2.088e-1 * tnm.sin()
        - 2.037e-1 * tld.sin()
        + (1.261e-1 - 3.1e-4 * t) * ms.sin()
        + 6.75e-2 * md.sin()
        - (4.97e-2 - 1.2e-4 * t) * (tls + ms).sin()
        - 3.42e-2 * (tld - nm).sin()
        - 2.61e-2 * (tld + md).sin()
        + 2.14e-2 * (tls - ms).sin()
        - 1.49e-2 * (tls - tld + md).sin()
        + 1.24e-2 * (tls - nm).sin()
        + 1.14e-2 * (tld - md).sin();

    let deps = (9.21 + 9.1e-4 * t) * nm.cos()
        + (5.522e-1 - 2.9e-4 * t) * tls.cos()
        - 9.04e-2 * tnm.cos()
        + 8.84e-2 * tld.cos()
        + 2.16e-2 * (tls + ms).cos()
        + 1.83e-2 * (tld - nm).cos()
        + 1.13e-2 * (tld + md).cos()
        - 9.3e-3 * (tls - ms).cos()
        - 6.6e-3 * (tls - nm).cos();

    Nutation {
        dpsi: dpsi / ARCSEC_PER_DEG,
        deps: deps / ARCSEC_PER_DEG,
    }
}

/// Compute the obliquity of the ecliptic.
///
/// With `deps = 0` the result is the **mean** obliquity; passing the nutation in
/// obliquity returns the **true** obliquity.
///
/// Arguments
/// ---------
/// * `djd`: Julian days since 1900 January 0.5.
/// * `deps`: nutation in obliquity, arc-degrees.
///
/// Returns
/// --------
/// * Obliquity of the ecliptic in arc-degrees.
///
/// Formula
/// -------
/// ```text
/// ε = 23.45229444° − (46.845·T + 0.0059·T² − 0.00181·T³)/3600 + Δε
/// ```
/// with `T` in Julian centuries since 1900, evaluated with Horner's scheme.
pub fn obliquity(djd: DJD, deps: Degree) -> Degree {
    let t = djd / DAYS_PER_CENT;
    let c = ((-0.00181 * t + 0.0059) * t + 46.845) * t;
    23.45229444 - c / ARCSEC_PER_DEG + deps
}
