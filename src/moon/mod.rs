//! # Position of the Moon
//!
//! Low-precision lunar theory after P. Duffett-Smith: mean elements with their main
//! periodic terms, then truncated series in longitude, latitude, horizontal parallax and
//! daily motion. Longitudes are accurate to a few arc-seconds for the 20th and 21st
//! centuries.
//!
//! ## Overview
//!
//! - [`true_position`]: geometric ecliptic position, parallax and motion.
//! - [`apparent`]: same, with the longitude corrected for nutation.
//! - [`mean_node`], [`lunar_node`]: ascending node of the lunar orbit.
//! - [`lunations`]: instants of the principal phases.

pub mod lunations;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::{Centuries, Degree, DAYS_PER_CENT, DJD},
    earth_orientation::nutation,
    math_utils::{frac360, polynome, reduce_deg},
};

/// Periods of the mean elements, days.
const PERIODS: [f64; 6] = [
    27.32158213,
    365.2596407,
    27.55455094,
    29.53058868,
    27.21222039,
    6798.363307,
];

/// Mean node referred to J2000, centuries since J2000.
const MEAN_NODE: [f64; 5] = [
    125.0445479,
    -1934.1362891,
    0.0020754,
    1.0 / 467441.0,
    1.0 / 60616000.0,
];

// ----------------------------------------------------------------------------------------
// Fundamental arguments of the true node, J2000
// ----------------------------------------------------------------------------------------

/// Mean elongation of the Moon.
const ELONGATION: [f64; 5] = [
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.0 / 545868.0,
    -(1.0 / 113065000.0),
];

/// Mean anomaly of the Moon.
const ANOMALY: [f64; 5] = [
    134.9633964,
    477198.8675055,
    0.0087414,
    1.0 / 69699.0,
    -(1.0 / 14712000.0),
];

/// Argument of latitude.
const LATITUDE_ARG: [f64; 5] = [
    93.272095,
    483202.0175233,
    -0.0036539,
    -(1.0 / 3526000.0),
    1.0 / 863310000.0,
];

/// Mean anomaly of the Sun.
const SUN_ANOMALY: [f64; 4] = [357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0];

/// Position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPosition {
    /// Ecliptic longitude, arc-degrees.
    pub lambda: Degree,
    /// Ecliptic latitude, arc-degrees.
    pub beta: Degree,
    /// Distance from the Earth, AU.
    pub delta: f64,
    /// Horizontal parallax, arc-degrees.
    pub parallax: Degree,
    /// Daily motion, arc-degrees.
    pub motion: Degree,
}

impl fmt::Display for MoonPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moon position")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  λ  (longitude)     = {:.6}°", self.lambda)?;
        writeln!(f, "  β  (latitude)      = {:.6}°", self.beta)?;
        writeln!(f, "  Δ  (distance)      = {:.8} AU", self.delta)?;
        writeln!(f, "  π  (parallax)      = {:.6}°", self.parallax)?;
        write!(f, "  v  (daily motion)  = {:.6}°", self.motion)
    }
}

/// Mean longitude of the ascending node of the lunar orbit, arc-degrees.
///
/// * `t`: Julian centuries since J2000.
pub fn mean_node(t: Centuries) -> Degree {
    reduce_deg(polynome(t, &MEAN_NODE))
}

/// Geometric position of the Moon, referred to the mean equinox of date.
///
/// Arguments
/// ---------
/// * `djd`: Julian days since 1900 January 0.5.
///
/// Returns
/// --------
/// * A [`MoonPosition`]; the longitude is in `0..360`.
pub fn true_position(djd: DJD) -> MoonPosition {
    let t = djd / DAYS_PER_CENT;
    let t2 = t * t;
    let m = PERIODS.map(|p| frac360(djd / p));

    let mut ld = 270.434164 + m[0] - (1.133e-3 - 1.9e-6 * t) * t2;
    let mut ms = 358.475833 + m[1] - (1.5e-4 + 3.3e-6 * t) * t2;
    let mut md = 296.104608 + m[2] + (9.192e-3 + 1.44e-5 * t) * t2;
    let mut de = 350.737486 + m[3] - (1.436e-3 - 1.9e-6 * t) * t2;
    let mut f = 11.250889 + m[4] - (3.211e-3 + 3e-7 * t) * t2;
    let n = 259.183275 - m[5] + (2.078e-3 + 2.2e-5 * t) * t2;

    // long period terms
    let sa = (51.2 + 20.2 * t).to_radians().sin();
    let sn = n.to_radians().sin();
    let b = 346.56 + (132.87 - 9.1731e-3 * t) * t;
    let sb = 3.964e-3 * b.to_radians().sin();
    let c = (n + 275.05 - 2.3 * t).to_radians();
    let sc = c.sin();
    ld += 2.33e-4 * sa + sb + 1.964e-3 * sn;
    ms -= 1.778e-3 * sa;
    md += 8.17e-4 * sa + sb + 2.541e-3 * sn;
    f += sb - 2.4691e-2 * sn - 4.328e-3 * sc;
    de += 2.011e-3 * sa + sb + 1.964e-3 * sn;

    let e = 1.0 - (2.495e-3 + 7.52e-6 * t) * t;
    let e2 = e * e;
    let n = n.to_radians();
    let ms = ms.to_radians();
    let de = de.to_radians();
    let f = f.to_radians();
    let md = md.to_radians();

    let de2 = de + de;
    let de3 = de2 + de;
    let de4 = de2 + de2;
    let md2 = md + md;
    let md3 = md2 + md;
    let ms2 = ms + ms;
    let f2 = f + f;
    let f3 = f2 + f;

    let l = 6.28875 * md.sin()
        + 1.274018 * (de2 - md).sin()
        + 6.58309e-1 * de2.sin()
        + 2.13616e-1 * md2.sin()
        - e * 1.85596e-1 * ms.sin()
        - 1.14336e-1 * f2.sin()
        + 5.8793e-2 * (2.0 * (de - md)).sin()
        + 5.7212e-2 * e * (de2 - ms - md).sin()
        + 5.332e-2 * (de2 + md).sin()
        + 4.5874e-2 * e * (de2 - ms).sin()
        + 4.1024e-2 * e * (md - ms).sin()
        - 3.4718e-2 * de.sin()
        - e * 3.0465e-2 * (ms + md).sin()
        + 1.5326e-2 * (2.0 * (de - f)).sin()
        - 1.2528e-2 * (f2 + md).sin()
        - 1.098e-2 * (f2 - md).sin()
        + 1.0674e-2 * (de4 - md).sin()
        + 1.0034e-2 * md3.sin()
        + 8.548e-3 * (de4 - md2).sin()
        - e * 7.91e-3 * (ms - md + de2).sin()
        - e * 6.783e-3 * (de2 + ms).sin()
        + 5.162e-3 * (md - de).sin()
        + e * 5e-3 * (ms + de).sin()
        + 3.862e-3 * de4.sin()
        + e * 4.049e-3 * (md - ms + de2).sin()
        + 3.996e-3 * (2.0 * (md + de)).sin()
        + 3.665e-3 * (de2 - md3).sin()
        + e * 2.695e-3 * (md2 - ms).sin()
        + 2.602e-3 * (md - 2.0 * (f + de)).sin()
        + e * 2.396e-3 * (2.0 * (de - md) - ms).sin()
        - 2.349e-3 * (md + de).sin()
        + e2 * 2.249e-3 * (2.0 * (de - ms)).sin()
        - e * 2.125e-3 * (md2 + ms).sin()
        - e2 * 2.079e-3 * ms2.sin()
        + e2 * 2.059e-3 * (2.0 * (de - ms) - md).sin()
        - 1.773e-3 * (md + 2.0 * (de - f)).sin()
        - 1.595e-3 * (2.0 * (f + de)).sin()
        + e * 1.22e-3 * (de4 - ms - md).sin()
        - 1.11e-3 * (2.0 * (md + f)).sin()
        + 8.92e-4 * (md - de3).sin()
        - e * 8.11e-4 * (ms + md + de2).sin()
        + e * 7.61e-4 * (de4 - ms - md2).sin()
        + e2 * 7.04e-4 * (md - 2.0 * (ms + de)).sin()
        + e * 6.93e-4 * (ms - 2.0 * (md - de)).sin()
        + e * 5.98e-4 * (2.0 * (de - f) - ms).sin()
        + 5.5e-4 * (md + de4).sin()
        + 5.38e-4 * (4.0 * md).sin()
        + e * 5.21e-4 * (de4 - ms).sin()
        + 4.86e-4 * (md2 - de).sin()
        + e2 * 7.17e-4 * (md - ms2).sin();
    let lambda = reduce_deg(ld + l);

    let g = 5.128189 * f.sin()
        + 0.280606 * (md + f).sin()
        + 0.277693 * (md - f).sin()
        + 0.173238 * (de2 - f).sin()
        + 0.055413 * (de2 + f - md).sin()
        + 0.046272 * (de2 - f - md).sin()
        + 0.032573 * (de2 + f).sin()
        + 0.017198 * (md2 + f).sin()
        + 0.009267 * (de2 + md - f).sin()
        + 0.008823 * (md2 - f).sin()
        + e * 0.008247 * (de2 - ms - f).sin()
        + 0.004323 * (2.0 * (de - md) - f).sin()
        + 0.0042 * (de2 + f + md).sin()
        + e * 0.003372 * (f - ms - de2).sin()
        + e * 0.002472 * (de2 + f - ms - md).sin()
        + e * 0.002222 * (de2 + f - ms).sin()
        + e * 0.002072 * (de2 - f - ms - md).sin()
        + e * 0.001877 * (f - ms + md).sin()
        + 0.001828 * (de4 - f - md).sin()
        - e * 0.001803 * (f + ms).sin()
        - 0.00175 * f3.sin()
        + e * 0.00157 * (md - ms - f).sin()
        - 0.001487 * (f + de).sin()
        - e * 0.001481 * (f + ms + md).sin()
        + e * 0.001417 * (f - ms - md).sin()
        + e * 0.00135 * (f - ms).sin()
        + 0.00133 * (f - de).sin()
        + 0.001106 * (f + md3).sin()
        + 0.00102 * (de4 - f).sin()
        + 0.000833 * (f + de4 - md).sin()
        + 0.000781 * (md - f3).sin()
        + 0.00067 * (f + de4 - md2).sin()
        + 0.000606 * (de2 - f3).sin()
        + 0.000597 * (2.0 * (de + md) - f).sin()
        + e * 0.000492 * (de2 + md - ms - f).sin()
        + 0.00045 * (2.0 * (md - de) - f).sin()
        + 0.000439 * (md3 - f).sin()
        + 0.000423 * (f + 2.0 * (de + md)).sin()
        + 0.000422 * (de2 - f - md3).sin()
        - e * 0.000367 * (ms + f + de2 - md).sin()
        - e * 0.000353 * (ms + f + de2).sin()
        + 0.000331 * (f + de4).sin()
        + e * 0.000317 * (de2 + f - ms + md).sin()
        + e2 * 0.000306 * (2.0 * (de - ms) - f).sin()
        - 0.000283 * (md + f3).sin();
    let w1 = 4.664e-4 * n.cos();
    let w2 = 7.54e-5 * c.cos();
    let beta = g * (1.0 - w1 - w2);

    let hp = 0.950724
        + 0.051818 * md.cos()
        + 0.009531 * (de2 - md).cos()
        + 0.007843 * de2.cos()
        + 0.002824 * md2.cos()
        + 0.000857 * (de2 + md).cos()
        + e * 0.000533 * (de2 - ms).cos()
        + e * 0.000401 * (de2 - md - ms).cos()
        + e * 0.00032 * (md - ms).cos()
        - 0.000271 * de.cos()
        - e * 0.000264 * (ms + md).cos()
        - 0.000198 * (f2 - md).cos()
        + 0.000173 * md3.cos()
        + 0.000167 * (de4 - md).cos()
        - e * 0.000111 * ms.cos()
        + 0.000103 * (de4 - md2).cos()
        - 0.000084 * (md2 - de2).cos()
        - e * 0.000083 * (de2 + ms).cos()
        + 0.000079 * (de2 + md2).cos()
        + 0.000072 * de4.cos()
        + e * 0.000064 * (de2 - ms + md).cos()
        - e * 0.000063 * (de2 + ms - md).cos()
        + e * 0.000041 * (ms + de).cos()
        + e * 0.000035 * (md2 - ms).cos()
        - 0.000033 * (md3 - de2).cos()
        - 0.00003 * (md + de).cos()
        - 0.000029 * (2.0 * (f - de)).cos()
        - e * 0.000029 * (md2 + ms).cos()
        + e2 * 0.000026 * (2.0 * (de - ms)).cos()
        - 0.000023 * (2.0 * (f - de) + md).cos()
        + e * 0.000019 * (de4 - ms - md).cos();

    let motion = 13.176397
        + 1.434006 * md.cos()
        + 0.280135 * de2.cos()
        + 0.251632 * (de2 - md).cos()
        + 0.097420 * md2.cos()
        - 0.052799 * f2.cos()
        + 0.034848 * (de2 + md).cos()
        + 0.018732 * (de2 - ms).cos()
        + 0.010316 * (de2 - ms - md).cos()
        + 0.008649 * (ms - md).cos()
        - 0.008642 * (f2 + md).cos()
        - 0.007471 * (ms + md).cos()
        - 0.007387 * de.cos()
        + 0.006864 * (md2 + md).cos()
        + 0.006650 * (de4 - md).cos()
        + 0.003523 * (de2 + md2).cos()
        + 0.003377 * (de4 - md2).cos()
        + 0.003287 * de4.cos()
        - 0.003193 * ms.cos()
        - 0.003003 * (de2 + ms).cos()
        + 0.002577 * (md - ms + de2).cos()
        - 0.002567 * (f2 - md).cos()
        - 0.001794 * (de2 - md2).cos()
        - 0.001716 * (md - f2 - de2).cos()
        - 0.001698 * (de2 + ms - md).cos()
        - 0.001415 * (de2 + f2).cos()
        + 0.001183 * (md2 - ms).cos()
        + 0.001150 * (de + ms).cos()
        - 0.001035 * (de + md).cos()
        - 0.001019 * (f2 + md2).cos()
        - 0.001006 * (ms + md2).cos();

    MoonPosition {
        lambda,
        beta,
        // 8.794" is the solar parallax
        delta: 8.794 / (hp * 3600.0),
        parallax: hp,
        motion,
    }
}

/// Apparent position of the Moon: the longitude is corrected for nutation.
///
/// Arguments
/// ---------
/// * `djd`: Julian days since 1900 January 0.5.
/// * `dpsi`: nutation in longitude, arc-degrees; computed when `None`.
pub fn apparent(djd: DJD, dpsi: Option<Degree>) -> MoonPosition {
    let pos = true_position(djd);
    let dpsi = dpsi.unwrap_or_else(|| nutation(djd / DAYS_PER_CENT).dpsi);
    MoonPosition {
        lambda: reduce_deg(pos.lambda + dpsi),
        ..pos
    }
}

#[inline]
fn fundamental_arg(t: Centuries, coeffs: &[f64]) -> f64 {
    reduce_deg(polynome(t, coeffs)).to_radians()
}

/// Longitude of the ascending node of the lunar orbit, arc-degrees.
///
/// Arguments
/// ---------
/// * `djd`: Julian days since 1900 January 0.5.
/// * `true_node`: add the periodic terms; otherwise the mean node is returned.
pub fn lunar_node(djd: DJD, true_node: bool) -> Degree {
    let t = (djd - DAYS_PER_CENT) / DAYS_PER_CENT;
    let mn = polynome(t, &MEAN_NODE);
    if !true_node {
        return reduce_deg(mn);
    }

    let d = fundamental_arg(t, &ELONGATION);
    let m = fundamental_arg(t, &ANOMALY);
    let f = fundamental_arg(t, &LATITUDE_ARG);
    let ms = fundamental_arg(t, &SUN_ANOMALY);
    reduce_deg(
        mn - 1.4979 * (2.0 * (d - f)).sin() - 0.15 * ms.sin() - 0.1226 * (2.0 * d).sin()
            + 0.1176 * (2.0 * f).sin()
            - 0.0801 * (2.0 * (m - f)).sin(),
    )
}
