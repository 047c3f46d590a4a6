//! # Planetary perturbations
//!
//! Closed-form corrections to the Keplerian motion of each planet, after
//! P. Duffett-Smith's low-precision theory.
//!
//! The inner planets and Mars depend on the mean anomalies of the perturbing bodies,
//! taken from the [`Sphera`] with the same light-time delay as the perturbed planet.
//! The four giant planets use the auxiliary Sun-derived angles precomputed by the
//! context. Pluto is not perturbed.
//!
//! Units of the returned [`PerturbationRecord`]:
//! * `dl`: arc-degrees
//! * `dr`, `da`: AU
//! * `dml`, `dm`, `dhl`: radians
//! * `ds`: unitless

use serde::{Deserialize, Serialize};

use crate::{
    math_utils::reduce_rad,
    planets::{sphera::Sphera, PlanetId},
};

/// Corrections to the heliocentric orbit of a planet. Unmodelled terms stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerturbationRecord {
    /// in longitude
    pub dl: f64,
    /// in radius vector
    pub dr: f64,
    /// in mean longitude
    pub dml: f64,
    /// in eccentricity
    pub ds: f64,
    /// in mean anomaly
    pub dm: f64,
    /// in semi-major axis
    pub da: f64,
    /// in heliocentric latitude
    pub dhl: f64,
}

/// Compute the perturbations of a planet.
///
/// Arguments
/// ---------
/// * `id`: perturbed planet.
/// * `ctx`: context of the epoch.
/// * `dt`: light-time delay in days, applied to the mean anomalies of every body involved.
pub fn perturbations(id: PlanetId, ctx: &Sphera, dt: f64) -> PerturbationRecord {
    match id {
        PlanetId::Mercury => mercury(ctx, dt),
        PlanetId::Venus => venus(ctx, dt),
        PlanetId::Mars => mars(ctx, dt),
        PlanetId::Jupiter => jupiter(ctx),
        PlanetId::Saturn => saturn(ctx),
        PlanetId::Uranus => uranus(ctx),
        PlanetId::Neptune => neptune(ctx),
        PlanetId::Pluto => PerturbationRecord::default(),
    }
}

fn mercury(ctx: &Sphera, dt: f64) -> PerturbationRecord {
    let me = ctx.mean_anomaly(PlanetId::Mercury, Some(dt));
    let ve = ctx.mean_anomaly(PlanetId::Venus, Some(dt));
    let ju = ctx.mean_anomaly(PlanetId::Jupiter, Some(dt));

    let dl = 0.00204 * (5.0 * ve - 2.0 * me + 0.21328).cos()
        + 0.00103 * (2.0 * ve - me - 2.8046).cos()
        + 0.00091 * (2.0 * ju - me - 0.64582).cos()
        + 0.00078 * (5.0 * ve - 3.0 * me + 0.17692).cos();

    let dr = 7.525e-06 * (2.0 * ju - me + 0.925251).cos()
        + 6.802e-06 * (5.0 * ve - 3.0 * me - 4.53642).cos()
        + 5.457e-06 * (2.0 * ve - 2.0 * me - 1.24246).cos()
        + 3.569e-06 * (5.0 * ve - me - 1.35699).cos();

    PerturbationRecord {
        dl,
        dr,
        ..Default::default()
    }
}

fn venus(ctx: &Sphera, dt: f64) -> PerturbationRecord {
    let t = ctx.t();
    let ms = ctx.manom_sun();
    let ve = ctx.mean_anomaly(PlanetId::Venus, Some(dt));
    let ju = ctx.mean_anomaly(PlanetId::Jupiter, Some(dt));

    let dl = 0.00313 * (2.0 * ms - 2.0 * ve - 2.587).cos()
        + 0.00198 * (3.0 * ms - 3.0 * ve + 0.044768).cos()
        + 0.00136 * (ms - ve - 2.0788).cos()
        + 0.00096 * (3.0 * ms - 2.0 * ve - 2.3721).cos()
        + 0.00082 * (ju - ve - 3.6318).cos();

    let dr = 2.2501e-05 * (2.0 * ms - 2.0 * ve - 1.01592).cos()
        + 1.9045e-05 * (3.0 * ms - 3.0 * ve + 1.61577).cos()
        + 6.887e-06 * (ju - ve - 2.06106).cos()
        + 5.172e-06 * (ms - ve - 0.508065).cos()
        + 3.62e-06 * (5.0 * ms - 4.0 * ve - 1.81877).cos()
        + 3.283e-06 * (4.0 * ms - 4.0 * ve + 1.10851).cos()
        + 3.074e-06 * (2.0 * ju - 2.0 * ve - 0.962846).cos();

    let dm = (7.7e-4 * (4.1406 + t * 2.6227).sin()).to_radians();

    PerturbationRecord {
        dl,
        dr,
        dml: dm,
        dm,
        ..Default::default()
    }
}

fn mars(ctx: &Sphera, dt: f64) -> PerturbationRecord {
    let ve = ctx.mean_anomaly(PlanetId::Venus, Some(dt));
    let ju = ctx.mean_anomaly(PlanetId::Jupiter, Some(dt));
    let ms = ctx.manom_sun();
    let ma = ctx.mean_anomaly(PlanetId::Mars, Some(dt));

    let a = 3.0 * ju - 8.0 * ma + 4.0 * ms;
    let (sa, ca) = a.sin_cos();

    let dl = 0.00705 * (ju - ma - 0.85448).cos()
        + 0.00607 * (2.0 * ju - ma - 3.2873).cos()
        + 0.00445 * (2.0 * ju - 2.0 * ma - 3.3492).cos()
        + 0.00388 * (ms - 2.0 * ma + 0.35771).cos()
        + 0.00238 * (ms - ma + 0.61256).cos()
        + 0.00204 * (2.0 * ms - 3.0 * ma + 2.7688).cos()
        + 0.00177 * (3.0 * ma - ve - 1.0053).cos()
        + 0.00136 * (2.0 * ms - 4.0 * ma + 2.6894).cos()
        + 0.00104 * (ju + 0.30749).cos();

    let dr = 5.3227e-05 * (ju - ma + 0.717864).cos()
        + 5.0989e-05 * (2.0 * ju - 2.0 * ma - 1.77997).cos()
        + 3.8278e-05 * (2.0 * ju - ma - 1.71617).cos()
        + 1.5996e-05 * (ms - ma - 0.969618).cos()
        + 1.4764e-05 * (2.0 * ms - 3.0 * ma + 1.19768).cos()
        + 8.966e-06 * (ju - 2.0 * ma + 0.761225).cos()
        + 7.914e-06 * (3.0 * ju - 2.0 * ma - 2.43887).cos()
        + 7.004e-06 * (2.0 * ju - 3.0 * ma - 1.79573).cos()
        + 6.62e-06 * (ms - 2.0 * ma + 1.97575).cos()
        + 4.93e-06 * (3.0 * ju - 3.0 * ma - 1.33069).cos()
        + 4.693e-06 * (3.0 * ms - 5.0 * ma + 3.32665).cos()
        + 4.571e-06 * (2.0 * ms - 4.0 * ma + 4.27086).cos()
        + 4.409e-06 * (3.0 * ju - ma - 2.02158).cos();

    let dm = (-(0.01133 * sa + 0.00933 * ca)).to_radians();

    PerturbationRecord {
        dl,
        dr,
        dml: dm,
        dm,
        ..Default::default()
    }
}

/// Multiples of the angles used by the Jupiter and Saturn series.
struct GiantArgs {
    x1: f64,
    sx3: f64,
    cx3: f64,
    s2x3: f64,
    c2x3: f64,
    sx5: f64,
    cx5: f64,
    s2x5: f64,
    sx6: f64,
    sx7: f64,
    cx7: f64,
    s2x7: f64,
    c2x7: f64,
    s3x7: f64,
    c3x7: f64,
    s4x7: f64,
    c4x7: f64,
    c5x7: f64,
}

impl GiantArgs {
    fn new(aux: &[f64; 6]) -> Self {
        let [x1, x2, x3, _, x5, x6] = *aux;
        let x7 = x3 - x2;
        Self {
            x1,
            sx3: x3.sin(),
            cx3: x3.cos(),
            s2x3: (2.0 * x3).sin(),
            c2x3: (2.0 * x3).cos(),
            sx5: x5.sin(),
            cx5: x5.cos(),
            s2x5: (2.0 * x5).sin(),
            sx6: x6.sin(),
            sx7: x7.sin(),
            cx7: x7.cos(),
            s2x7: (2.0 * x7).sin(),
            c2x7: (2.0 * x7).cos(),
            s3x7: (3.0 * x7).sin(),
            c3x7: (3.0 * x7).cos(),
            s4x7: (4.0 * x7).sin(),
            c4x7: (4.0 * x7).cos(),
            c5x7: (5.0 * x7).cos(),
        }
    }
}

fn jupiter(ctx: &Sphera) -> PerturbationRecord {
    let s = ctx.orbit_instance(PlanetId::Jupiter).eccentricity;
    let GiantArgs {
        x1,
        sx3,
        cx3,
        s2x3,
        c2x3,
        sx5,
        cx5,
        s2x5,
        sx6,
        sx7,
        cx7,
        s2x7,
        c2x7,
        s3x7,
        c3x7,
        s4x7,
        c4x7,
        c5x7,
    } = GiantArgs::new(ctx.aux_sun());

    let dml = (3.31364e-1 - (1.0281e-2 + 4.692e-3 * x1) * x1) * sx5
        + (3.228e-3 - (6.4436e-2 - 2.075e-3 * x1) * x1) * cx5
        - (3.083e-3 + (2.75e-4 - 4.89e-4 * x1) * x1) * s2x5
        + 2.472e-3 * sx6
        + 1.3619e-2 * sx7
        + 1.8472e-2 * s2x7
        + 6.717e-3 * s3x7
        + 2.775e-3 * s4x7
        + 6.417e-3 * s2x7 * sx3
        + (7.275e-3 - 1.253e-3 * x1) * sx7 * sx3
        + 2.439e-3 * s3x7 * sx3
        - (3.5681e-2 + 1.208e-3 * x1) * sx7 * cx3
        - 3.767e-3 * c2x7 * sx3
        - (3.3839e-2 + 1.125e-3 * x1) * cx7 * sx3
        - 4.261e-3 * s2x7 * cx3
        + (1.161e-3 * x1 - 6.333e-3) * cx7 * cx3
        + 2.178e-3 * cx3
        - 6.675e-3 * c2x7 * cx3
        - 2.664e-3 * c3x7 * cx3
        - 2.572e-3 * sx7 * s2x3
        - 3.567e-3 * s2x7 * s2x3
        + 2.094e-3 * cx7 * c2x3
        + 3.342e-3 * c2x7 * c2x3;
    let dml = dml.to_radians();

    let ds = (3606.0 + (130.0 - 43.0 * x1) * x1) * sx5 + (1289.0 - 580.0 * x1) * cx5
        - 6764.0 * sx7 * sx3
        - 1110.0 * s2x7 * sx3
        - 224.0 * s3x7 * sx3
        - 204.0 * sx3
        + (1284.0 + 116.0 * x1) * cx7 * sx3
        + 188.0 * c2x7 * sx3
        + (1460.0 + 130.0 * x1) * sx7 * cx3
        + 224.0 * s2x7 * cx3
        - 817.0 * cx3
        + 6074.0 * cx3 * cx7
        + 992.0 * c2x7 * cx3
        + 508.0 * c3x7 * cx3
        + 230.0 * c4x7 * cx3
        + 108.0 * c5x7 * cx3
        - (956.0 + 73.0 * x1) * sx7 * s2x3
        + 448.0 * s2x7 * s2x3
        + 137.0 * s3x7 * s2x3
        + (108.0 * x1 - 997.0) * cx7 * s2x3
        + 480.0 * c2x7 * s2x3
        + 148.0 * c3x7 * s2x3
        + (99.0 * x1 - 956.0) * sx7 * c2x3
        + 490.0 * s2x7 * c2x3
        + 158.0 * s3x7 * c2x3
        + 179.0 * c2x3
        + (1024.0 + 75.0 * x1) * cx7 * c2x3
        - 437.0 * c2x7 * c2x3
        - 132.0 * c3x7 * c2x3;
    let ds = ds * 1e-7;

    let dp = (7.192e-3 - 3.147e-3 * x1) * sx5 - 4.344e-3 * sx3
        + (x1 * (1.97e-4 * x1 - 6.75e-4) - 2.0428e-2) * cx5
        + 3.4036e-2 * cx7 * sx3
        + (7.269e-3 + 6.72e-4 * x1) * sx7 * sx3
        + 5.614e-3 * c2x7 * sx3
        + 2.964e-3 * c3x7 * sx3
        + 3.7761e-2 * sx7 * cx3
        + 6.158e-3 * s2x7 * cx3
        - 6.603e-3 * cx7 * cx3
        - 5.356e-3 * sx7 * s2x3
        + 2.722e-3 * s2x7 * s2x3
        + 4.483e-3 * cx7 * s2x3
        - 2.642e-3 * c2x7 * s2x3
        + 4.403e-3 * sx7 * c2x3
        - 2.536e-3 * s2x7 * c2x3
        + 5.547e-3 * cx7 * c2x3
        - 2.689e-3 * c2x7 * c2x3;

    let dm = dml - dp.to_radians() / s;

    let da = 205.0 * cx7 - 263.0 * cx5
        + 693.0 * c2x7
        + 312.0 * c3x7
        + 147.0 * c4x7
        + 299.0 * sx7 * sx3
        + 181.0 * c2x7 * sx3
        + 204.0 * s2x7 * cx3
        + 111.0 * s3x7 * cx3
        - 337.0 * cx7 * cx3
        - 111.0 * c2x7 * cx3;
    let da = da * 1e-6;

    PerturbationRecord {
        dml,
        ds,
        dm,
        da,
        ..Default::default()
    }
}

fn saturn(ctx: &Sphera) -> PerturbationRecord {
    let s = ctx.orbit_instance(PlanetId::Saturn).eccentricity;
    let aux = ctx.aux_sun();
    let GiantArgs {
        x1,
        sx3,
        cx3,
        s2x3,
        c2x3,
        sx5,
        cx5,
        s2x5,
        sx6,
        sx7,
        cx7,
        s2x7,
        c2x7,
        s3x7,
        c3x7,
        s4x7,
        c4x7,
        c5x7,
    } = GiantArgs::new(aux);

    let (x3, x4, x5, x7) = (aux[2], aux[3], aux[4], aux[2] - aux[1]);
    let x8 = x4 - x3;
    let s3x3 = (3.0 * x3).sin();
    let c3x3 = (3.0 * x3).cos();
    let s4x3 = (4.0 * x3).sin();
    let c4x3 = (4.0 * x3).cos();
    let c2x5 = (2.0 * x5).cos();
    let s5x7 = (5.0 * x7).sin();
    let s2x8 = (2.0 * x8).sin();
    let c2x8 = (2.0 * x8).cos();
    let s3x8 = (3.0 * x8).sin();
    let c3x8 = (3.0 * x8).cos();

    let dml = 7.581e-3 * s2x5 - 7.986e-3 * sx6 - 1.48811e-1 * sx7 - 4.0786e-2 * s2x7
        - (8.14181e-1 - (1.815e-2 - 1.6714e-2 * x1) * x1) * sx5
        - (1.0497e-2 - (1.60906e-1 - 4.1e-3 * x1) * x1) * cx5
        - 1.5208e-2 * s3x7
        - 6.339e-3 * s4x7
        - 6.244e-3 * sx3
        - 1.65e-2 * s2x7 * sx3
        + (8.931e-3 + 2.728e-3 * x1) * sx7 * sx3
        - 5.775e-3 * s3x7 * sx3
        + (8.1344e-2 + 3.206e-3 * x1) * cx7 * sx3
        + 1.5019e-2 * c2x7 * sx3
        + (8.5581e-2 + 2.494e-3 * x1) * sx7 * cx3
        + 1.4394e-2 * c2x7 * cx3
        + (2.5328e-2 - 3.117e-3 * x1) * cx7 * cx3
        + 6.319e-3 * c3x7 * cx3
        + 6.369e-3 * sx7 * s2x3
        + 9.156e-3 * s2x7 * s2x3
        + 7.525e-3 * s3x8 * s2x3
        - 5.236e-3 * cx7 * c2x3
        - 7.736e-3 * c2x7 * c2x3
        - 7.528e-3 * c3x8 * c2x3;
    let dml = dml.to_radians();

    let ds = (-7927.0 + (2548.0 + 91.0 * x1) * x1) * sx5
        + (13381.0 + (1226.0 - 253.0 * x1) * x1) * cx5
        + (248.0 - 121.0 * x1) * s2x5
        - (305.0 + 91.0 * x1) * c2x5
        + 412.0 * s2x7
        + 12415.0 * sx3
        + (390.0 - 617.0 * x1) * sx7 * sx3
        + (165.0 - 204.0 * x1) * s2x7 * sx3
        + 26599.0 * cx7 * sx3
        - 4687.0 * c2x7 * sx3
        - 1870.0 * c3x7 * sx3
        - 821.0 * c4x7 * sx3
        - 377.0 * c5x7 * sx3
        + 497.0 * c2x8 * sx3
        + (163.0 - 611.0 * x1) * cx3
        - 12696.0 * sx7 * cx3
        - 4200.0 * s2x7 * cx3
        - 1503.0 * s3x7 * cx3
        - 619.0 * s4x7 * cx3
        - 268.0 * s5x7 * cx3
        - (282.0 + 1306.0 * x1) * cx7 * cx3
        + (-86.0 + 230.0 * x1) * c2x7 * cx3
        + 461.0 * s2x8 * cx3
        - 350.0 * s2x3
        + (2211.0 - 286.0 * x1) * sx7 * s2x3
        - 2208.0 * s2x7 * s2x3
        - 568.0 * s3x7 * s2x3
        - 346.0 * s4x7 * s2x3
        - (2780.0 + 222.0 * x1) * cx7 * s2x3
        + (2022.0 + 263.0 * x1) * c2x7 * s2x3
        + 248.0 * c3x7 * s2x3
        + 242.0 * s3x8 * s2x3
        + 467.0 * c3x8 * s2x3
        - 490.0 * c2x3
        - (2842.0 + 279.0 * x1) * sx7 * c2x3
        + (128.0 + 226.0 * x1) * s2x7 * c2x3
        + 224.0 * s3x7 * c2x3
        + (-1594.0 + 282.0 * x1) * cx7 * c2x3
        + (2162.0 - 207.0 * x1) * c2x7 * c2x3
        + 561.0 * c3x7 * c2x3
        + 343.0 * c4x7 * c2x3
        + 469.0 * s3x8 * c2x3
        - 242.0 * c3x8 * c2x3
        - 205.0 * sx7 * s3x3
        + 262.0 * s3x7 * s3x3
        + 208.0 * cx7 * c3x3
        - 271.0 * c3x7 * c3x3
        - 382.0 * c3x7 * s4x3
        - 376.0 * s3x7 * c4x3;
    let ds = ds * 1e-7;

    let dp = (7.7108e-2 + (7.186e-3 - 1.533e-3 * x1) * x1) * sx5 - 7.075e-3 * sx7
        + (4.5803e-2 - (1.4766e-2 + 5.36e-4 * x1) * x1) * cx5
        - 7.2586e-2 * cx3
        - 7.5825e-2 * sx7 * sx3
        - 2.4839e-2 * s2x7 * sx3
        - 8.631e-3 * s3x7 * sx3
        - 1.50383e-1 * cx7 * cx3
        + 2.6897e-2 * c2x7 * cx3
        + 1.0053e-2 * c3x7 * cx3
        - (1.3597e-2 + 1.719e-3 * x1) * sx7 * s2x3
        + 1.1981e-2 * s2x7 * c2x3
        - (7.742e-3 - 1.517e-3 * x1) * cx7 * s2x3
        + (1.3586e-2 - 1.375e-3 * x1) * c2x7 * c2x3
        - (1.3667e-2 - 1.239e-3 * x1) * sx7 * c2x3
        + (1.4861e-2 + 1.136e-3 * x1) * cx7 * c2x3
        - (1.3064e-2 + 1.628e-3 * x1) * c2x7 * c2x3;

    let dm = dml - dp.to_radians() / s;

    let da = 572.0 * sx5 - 1590.0 * s2x7 * cx3 + 2933.0 * cx5 - 647.0 * s3x7 * cx3
        + 33629.0 * cx7
        - 344.0 * s4x7 * cx3
        - 3081.0 * c2x7
        + 2885.0 * cx7 * cx3
        - 1423.0 * c3x7
        + (2172.0 + 102.0 * x1) * c2x7 * cx3
        - 671.0 * c4x7
        + 296.0 * c3x7 * cx3
        - 320.0 * c5x7
        - 267.0 * s2x7 * s2x3
        + 1098.0 * sx3
        - 778.0 * cx7 * s2x3
        - 2812.0 * sx7 * sx3
        + 495.0 * c2x7 * s2x3
        + 688.0 * s2x7 * sx3
        + 250.0 * c3x7 * s2x3
        - 393.0 * s3x7 * sx3
        - 856.0 * sx7 * c2x3
        - 228.0 * s4x7 * sx3
        + 441.0 * s2x7 * c2x3
        + 2138.0 * cx7 * sx3
        + 296.0 * c2x7 * c2x3
        - 999.0 * c2x7 * sx3
        + 211.0 * c3x7 * c2x3
        - 642.0 * c3x7 * sx3
        - 427.0 * sx7 * s3x3
        - 325.0 * c4x7 * sx3
        + 398.0 * s3x7 * s3x3
        - 890.0 * cx3
        + 344.0 * cx7 * c3x3
        + 2206.0 * sx7 * cx3
        - 427.0 * c3x7 * c3x3;
    let da = da * 1e-6;

    let dhl = 7.47e-4 * cx7 * sx3
        + 1.069e-3 * cx7 * cx3
        + 2.108e-3 * s2x7 * s2x3
        + 1.261e-3 * c2x7 * s2x3
        + 1.236e-3 * s2x7 * c2x3
        - 2.075e-3 * c2x7 * c2x3;
    let dhl = dhl.to_radians();

    PerturbationRecord {
        dml,
        ds,
        dm,
        da,
        dhl,
        ..Default::default()
    }
}

/// Mean longitude of Neptune used by the Uranus and Neptune series, radians.
fn neptune_longitude(t: f64) -> f64 {
    reduce_rad(1.46205 + 3.81337 * t)
}

fn uranus(ctx: &Sphera) -> PerturbationRecord {
    let t = ctx.t();
    let s = ctx.orbit_instance(PlanetId::Uranus).eccentricity;
    let [x1, x2, x3, x4, _, x6] = *ctx.aux_sun();
    let x8 = neptune_longitude(t);
    let x9 = 2.0 * x8 - x4;
    let x10 = x4 - x2;
    let x11 = x4 - x3;
    let x12 = x8 - x4;
    let (sx9, cx9) = x9.sin_cos();
    let (s2x9, c2x9) = (2.0 * x9).sin_cos();

    let dml = (8.64319e-1 - 1.583e-3 * x1) * sx9
        + (8.2222e-2 - 6.833e-3 * x1) * cx9
        + 3.6017e-2 * s2x9
        - 3.019e-3 * c2x9
        + 8.122e-3 * x6.sin();
    let dml = dml.to_radians();

    let dp = 1.20303e-1 * sx9 + 6.197e-3 * s2x9 + (1.9472e-2 - 9.47e-4 * x1) * cx9;
    let dm = dml - dp.to_radians() / s;
    let ds = ((163.0 * x1 - 3349.0) * sx9 + 20981.0 * cx9 + 1311.0 * c2x9) * 1e-7;
    let da = -3.825e-3 * cx9;

    let dl = (1.0122e-2 - 9.88e-4 * x1) * (x4 + x11).sin()
        + (-3.8581e-2 + (2.031e-3 - 1.91e-3 * x1) * x1) * (x4 + x11).cos()
        + (3.4964e-2 - (1.038e-3 - 8.68e-4 * x1) * x1) * (2.0 * x4 + x11).cos()
        + 5.594e-3 * (x4 + 3.0 * x12).sin()
        - 1.4808e-2 * x10.sin()
        - 5.794e-3 * x11.sin()
        + 2.347e-3 * x11.cos()
        + 9.872e-3 * x12.sin()
        + 8.803e-3 * (2.0 * x12).sin()
        - 4.308e-3 * (3.0 * x12).sin();

    let (sx11, cx11) = x11.sin_cos();
    let (sx4, cx4) = x4.sin_cos();
    let (s2x4, c2x4) = (2.0 * x4).sin_cos();
    let dhl = (4.58e-4 * sx11 - 6.42e-4 * cx11 - 5.17e-4 * (4.0 * x12).cos()) * sx4
        - (3.47e-4 * sx11 + 8.53e-4 * cx11 + 5.17e-4 * (4.0 * x11).sin()) * cx4
        + 4.03e-4 * ((2.0 * x12).cos() * s2x4 + (2.0 * x12).sin() * c2x4);
    let dhl = dhl.to_radians();

    let dr = -25948.0 + 4985.0 * x10.cos() - 1230.0 * cx4
        + 3354.0 * x11.cos()
        + 904.0 * (2.0 * x12).cos()
        + 894.0 * (x12.cos() - (3.0 * x12).cos())
        + (5795.0 * cx4 - 1165.0 * sx4 + 1388.0 * c2x4) * sx11
        + (1351.0 * cx4 + 5702.0 * sx4 + 1388.0 * s2x4) * x11.cos();
    let dr = dr * 1e-6;

    PerturbationRecord {
        dl,
        dr,
        dml,
        ds,
        dm,
        da,
        dhl,
    }
}

fn neptune(ctx: &Sphera) -> PerturbationRecord {
    let t = ctx.t();
    let s = ctx.orbit_instance(PlanetId::Neptune).eccentricity;
    let [x1, x2, x3, x4, _, _] = *ctx.aux_sun();
    let x8 = neptune_longitude(t);
    let x9 = 2.0 * x8 - x4;
    let x10 = x8 - x2;
    let x11 = x8 - x3;
    let x12 = x8 - x4;
    let (sx9, cx9) = x9.sin_cos();
    let (s2x9, c2x9) = (2.0 * x9).sin_cos();

    let dml = (1.089e-3 * x1 - 5.89833e-1) * sx9 + (4.658e-3 * x1 - 5.6094e-2) * cx9
        - 2.4286e-2 * s2x9;
    let dml = dml.to_radians();
    let dp = 2.4039e-2 * sx9 - 2.5303e-2 * cx9 + 6.206e-3 * s2x9 - 5.992e-3 * c2x9;
    let dm = dml - dp.to_radians() / s;
    let ds = (4389.0 * sx9 + 1129.0 * s2x9 + 4262.0 * cx9 + 1089.0 * c2x9) * 1e-7;
    let da = (8189.0 * cx9 - 817.0 * sx9 + 781.0 * c2x9) * 1e-6;

    let (s2x12, c2x12) = (2.0 * x12).sin_cos();
    let (sx8, cx8) = x8.sin_cos();
    let dl = -9.556e-3 * x10.sin() - 5.178e-3 * x11.sin() + 2.572e-3 * s2x12
        - 2.972e-3 * c2x12 * sx8
        - 2.833e-3 * s2x12 * cx8;
    let dhl = (3.36e-4 * c2x12 * sx8 + 3.64e-4 * s2x12 * cx8).to_radians();
    let dr = (-40596.0 + 4992.0 * x10.cos() + 2744.0 * x11.cos() + 2044.0 * x12.cos()
        + 1051.0 * c2x12)
        * 1e-6;

    PerturbationRecord {
        dl,
        dr,
        dml,
        ds,
        dm,
        da,
        dhl,
    }
}
