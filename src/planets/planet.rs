//! Planet registry and the heliocentric to geocentric reduction.
//!
//! A position is computed in two passes. The first one neglects light travel time and
//! yields an approximate Earth–planet distance ρ. The second pass evaluates the orbit
//! `ρ · 5.775518e-3` days earlier, which is where the planet was when the light now
//! reaching the Earth left it. The distance of the first pass is kept as the result.

use log::trace;
use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, sync::LazyLock};

use crate::{
    constants::{Radian, ABERRATION, LIGHT_TIME_FACTOR},
    kepler::{solve_eccentric_anomaly_with, true_anomaly, KeplerParams},
    math_utils::reduce_rad,
    planets::{
        orbit::{MeanLongitudeTerms, OrbitInstance, OrbitalElements, Terms},
        perturbation::{perturbations, PerturbationRecord},
        sphera::Sphera,
        EclipticPosition, PlanetId,
    },
    sphera_errors::SpheraError,
};

/// Intermediate result of one reduction pass.
///
/// Angles in radians, distances in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricFrame {
    /// Heliocentric longitude of the planet minus that of the Earth.
    pub ll: Radian,
    /// Radius vector projected on the ecliptic.
    pub rpd: f64,
    /// Heliocentric ecliptic longitude.
    pub lpd: Radian,
    /// Sine of the heliocentric latitude.
    pub spsi: f64,
    /// Cosine of the heliocentric latitude.
    pub cpsi: f64,
    /// Distance from the Earth.
    pub rho: f64,
}

/// A planet of the theory: identifier, orbit and kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: &'static str,
    /// The orbit lies inside the Earth's.
    pub inner: bool,
    pub orbit: OrbitalElements,
}

static PLANETS: LazyLock<[Planet; 8]> = LazyLock::new(|| {
    PlanetId::ALL.map(|id| Planet {
        id,
        name: id.name(),
        inner: id.is_inner(),
        orbit: elements(id),
    })
});

/// Osculating elements referred to the mean equinox of date.
fn elements(id: PlanetId) -> OrbitalElements {
    match id {
        PlanetId::Mercury => OrbitalElements::new(
            MeanLongitudeTerms::new(178.179078, 415.2057519, 3.011e-4, 0.0),
            Terms::new(&[75.899697, 1.5554889, 2.947e-4]),
            Terms::new(&[2.0561421e-1, 2.046e-5, -3e-8]),
            Terms::new(&[7.002881, 1.8608e-3, -1.83e-5]),
            Terms::new(&[47.145944, 1.1852083, 1.739e-4]),
            3.870986e-1,
        ),
        PlanetId::Venus => OrbitalElements::new(
            MeanLongitudeTerms::new(342.767053, 162.5533664, 3.097e-4, 0.0),
            Terms::new(&[130.163833, 1.4080361, -9.764e-4]),
            Terms::new(&[6.82069e-3, -4.774e-5, 9.1e-8]),
            Terms::new(&[3.393631, 1.0058e-3, -1e-6]),
            Terms::new(&[75.779647, 8.9985e-1, 4.1e-4]),
            7.233316e-1,
        ),
        PlanetId::Mars => OrbitalElements::new(
            MeanLongitudeTerms::new(293.737334, 53.17137642, 3.107e-4, 0.0),
            Terms::new(&[3.34218203e2, 1.8407584, 1.299e-4, -1.19e-6]),
            Terms::new(&[9.33129e-2, 9.2064e-5, -7.7e-8]),
            Terms::new(&[1.850333, -6.75e-4, 1.26e-5]),
            Terms::new(&[48.786442, 7.709917e-1, -1.4e-6, -5.33e-6]),
            1.5236883,
        ),
        PlanetId::Jupiter => OrbitalElements::new(
            MeanLongitudeTerms::new(238.049257, 8.434172183, 3.347e-4, -1.65e-6),
            Terms::new(&[1.2720972e1, 1.6099617, 1.05627e-3, -3.43e-6]),
            Terms::new(&[4.833475e-2, 1.6418e-4, -4.676e-7, -1.7e-9]),
            Terms::new(&[1.308736, -5.6961e-3, 3.9e-6]),
            Terms::new(&[99.443414, 1.01053, 3.5222e-4, -8.51e-6]),
            5.202561,
        ),
        PlanetId::Saturn => OrbitalElements::new(
            MeanLongitudeTerms::new(266.564377, 3.398638567, 3.245e-4, -5.8e-6),
            Terms::new(&[9.1098214e1, 1.9584158, 8.2636e-4, 4.61e-6]),
            Terms::new(&[5.589232e-2, -3.455e-4, -7.28e-7, 7.4e-10]),
            Terms::new(&[2.492519, -3.9189e-3, -1.549e-5, 4e-8]),
            Terms::new(&[112.790414, 8.731951e-1, -1.5218e-4, -5.31e-6]),
            9.554747,
        ),
        PlanetId::Uranus => OrbitalElements::new(
            MeanLongitudeTerms::new(244.19747, 1.194065406, 3.16e-4, -6e-7),
            Terms::new(&[1.71548692e2, 1.4844328, 2.372e-4, -6.1e-7]),
            Terms::new(&[4.63444e-2, -2.658e-5, 7.7e-8]),
            Terms::new(&[7.72464e-1, 6.253e-4, 3.95e-5]),
            Terms::new(&[73.477111, 4.986678e-1, 1.3117e-3]),
            19.21814,
        ),
        PlanetId::Neptune => OrbitalElements::new(
            MeanLongitudeTerms::new(84.457994, 6.107942056e-1, 3.205e-4, -6e-7),
            Terms::new(&[4.6727364e1, 1.4245744, 3.9082e-4, -6.05e-7]),
            Terms::new(&[8.99704e-3, 6.33e-6, -2e-9]),
            Terms::new(&[1.779242, -9.5436e-3, -9.1e-6]),
            Terms::new(&[130.681389, 1.098935, 2.4987e-4, -4.718e-6]),
            30.10957,
        ),
        PlanetId::Pluto => OrbitalElements::new(
            MeanLongitudeTerms::new(95.3113544, 3.980332167e-1, 0.0, 0.0),
            Terms::new(&[224.017]),
            Terms::new(&[2.5515e-1]),
            Terms::new(&[17.1329]),
            Terms::new(&[110.191]),
            39.8151,
        ),
    }
}

impl Planet {
    pub fn for_id(id: PlanetId) -> &'static Planet {
        &PLANETS[id.index()]
    }

    /// Look a planet up by name, ignoring case.
    ///
    /// Errors
    /// ------
    /// * [`SpheraError::InvalidIdentifier`] for anything but the eight planet names.
    pub fn for_name(name: &str) -> Result<&'static Planet, SpheraError> {
        Ok(Self::for_id(name.parse()?))
    }

    /// Perturbations of this planet at the epoch of `ctx`, `dt` days earlier.
    pub fn perturbations(&self, ctx: &Sphera, dt: f64) -> PerturbationRecord {
        perturbations(self.id, ctx, dt)
    }

    /// One pass of the heliocentric reduction, with the default Kepler solver settings.
    ///
    /// Arguments
    /// ---------
    /// * `oi`: orbit at the epoch.
    /// * `ma`: mean anomaly of the planet, radians.
    /// * `re`: Sun–Earth distance, AU.
    /// * `lg`: heliocentric longitude of the Earth, radians.
    /// * `pert`: perturbations of the planet.
    ///
    /// Returns
    /// --------
    /// * The [`HeliocentricFrame`] of the planet.
    ///
    /// # See also
    /// * [`Planet::heliocentric_with`]
    pub fn heliocentric(
        oi: &OrbitInstance,
        ma: Radian,
        re: f64,
        lg: Radian,
        pert: &PerturbationRecord,
    ) -> Result<HeliocentricFrame, SpheraError> {
        Self::heliocentric_with(oi, ma, re, lg, pert, &KeplerParams::default())
    }

    /// Same as [`Planet::heliocentric`] with explicit Kepler solver settings.
    pub fn heliocentric_with(
        oi: &OrbitInstance,
        ma: Radian,
        re: f64,
        lg: Radian,
        pert: &PerturbationRecord,
        kepler: &KeplerParams,
    ) -> Result<HeliocentricFrame, SpheraError> {
        let s = oi.eccentricity + pert.ds;
        let ma = reduce_rad(ma + pert.dm);
        let ea = solve_eccentric_anomaly_with(s, ma, kepler)?;
        let nu = true_anomaly(s, ea)?;

        let rp = (oi.major_semiaxis + pert.da) * (1.0 - s * s) / (1.0 + s * nu.cos()) + pert.dr;
        let lp = nu + oi.perihelion + (pert.dml - pert.dm);
        let lo = lp - oi.mean_node;
        let (sin_lo, cos_lo) = lo.sin_cos();
        let (sin_i, cos_i) = oi.inclination.sin_cos();

        let psi = (sin_lo * sin_i).asin() + pert.dhl;
        let lpd = (sin_lo * cos_i).atan2(cos_lo) + oi.mean_node + pert.dl.to_radians();
        let (spsi, cpsi) = psi.sin_cos();
        let ll = lpd - lg;
        let rho = (re * re + rp * rp - 2.0 * re * rp * cpsi * ll.cos()).sqrt();

        Ok(HeliocentricFrame {
            ll,
            rpd: rp * cpsi,
            lpd,
            spsi,
            cpsi,
            rho,
        })
    }

    /// Heliocentric frame corrected for light travel time.
    fn light_time_corrected(
        &self,
        ctx: &Sphera,
        lg: Radian,
        rg: f64,
    ) -> Result<HeliocentricFrame, SpheraError> {
        let oi = ctx.orbit_instance(self.id);
        let kepler = ctx.kepler_params();

        let pass = |dt: f64| -> Result<HeliocentricFrame, SpheraError> {
            let ma = ctx.mean_anomaly(self.id, Some(dt));
            let pert = self.perturbations(ctx, dt);
            Self::heliocentric_with(oi, ma, rg, lg, &pert, kepler)
        };

        let first = pass(0.0)?;
        let dt = first.rho * LIGHT_TIME_FACTOR;
        trace!("{}: ρ = {:.8} AU, light time = {dt:.8} d", self.name, first.rho);

        let second = pass(dt)?;
        trace!("{}: corrected ll = {:.10}, lpd = {:.10}", self.name, second.ll, second.lpd);

        Ok(HeliocentricFrame {
            rho: first.rho,
            ..second
        })
    }

    /// Geocentric ecliptic position of the planet at the epoch of `ctx`.
    ///
    /// When the context is in apparent mode, the longitude is corrected for nutation and
    /// both coordinates for annual aberration.
    ///
    /// Errors
    /// ------
    /// * [`SpheraError::NonConvergence`] if Kepler's equation cannot be solved.
    pub fn geocentric_position(&self, ctx: &Sphera) -> Result<EclipticPosition, SpheraError> {
        let sg = ctx.sun_geo();
        // Earth as seen from the Sun
        let lg = sg.phi.to_radians() + PI;
        let rsn = sg.rho;
        let h = self.light_time_corrected(ctx, lg, rsn)?;

        let (sll, cll) = h.ll.sin_cos();
        let lam = if self.inner {
            (-h.rpd * sll).atan2(rsn - h.rpd * cll) + lg + PI
        } else {
            (rsn * sll).atan2(h.rpd - rsn * cll) + h.lpd
        };
        let mut lam = reduce_rad(lam);
        let mut bet = (h.rpd * h.spsi * (lam - h.lpd).sin() / (h.cpsi * rsn * sll)).atan();

        if ctx.apparent() {
            lam += ctx.nutation().dpsi.to_radians();
            let a = lg - lam;
            lam = reduce_rad(lam - ABERRATION * a.cos() / bet.cos());
            bet -= ABERRATION * a.sin() * bet.sin();
        }

        Ok(EclipticPosition {
            longitude: lam.to_degrees(),
            latitude: bet.to_degrees(),
            distance: h.rho,
        })
    }
}
