//! # Celestial context
//!
//! A [`Sphera`] gathers everything a planetary position needs besides the planet
//! itself, computed once for a given epoch:
//!
//! - the geocentric position and mean anomaly of the Sun,
//! - nutation and true obliquity of the ecliptic,
//! - six auxiliary Sun-derived angles used by the giant planet perturbations,
//! - a lazily filled cache of [`OrbitInstance`]s, one slot per planet.
//!
//! Perturbations of one planet depend on the mean anomalies of others (Mercury needs
//! Venus and Jupiter, for example), so sharing one context across all the planets of an
//! epoch avoids evaluating the same orbit several times.
//!
//! ## Example
//!
//! ```rust
//! use sphera::planets::{Planet, PlanetId, sphera::Sphera};
//!
//! let ctx = Sphera::create(30700.5, false).unwrap();
//! let pos = Planet::for_id(PlanetId::Jupiter).geocentric_position(&ctx).unwrap();
//! assert!((pos.longitude - 270.30024).abs() < 1e-4);
//! ```

use log::{debug, trace};
use once_cell::sync::OnceCell;

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    constants::{Centuries, Degree, Radian, DAYS_PER_CENT, DJD, KEPLER_EPS, KEPLER_MAX_ITER},
    earth_orientation::{nutation, obliquity, Nutation},
    kepler::KeplerParams,
    math_utils::{reduce_rad, Polar},
    planets::{orbit::OrbitInstance, Planet, PlanetId},
    sphera_errors::SpheraError,
    sun,
};

/// Configuration of a [`Sphera`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpheraParams {
    /// Correct positions for nutation and aberration.
    pub apparent: bool,
    /// Tolerance of the Kepler solver, radians.
    pub kepler_eps: f64,
    /// Iteration ceiling of the Kepler solver.
    pub kepler_max_iter: usize,
}

impl Default for SpheraParams {
    fn default() -> Self {
        Self {
            apparent: true,
            kepler_eps: KEPLER_EPS,
            kepler_max_iter: KEPLER_MAX_ITER,
        }
    }
}

impl SpheraParams {
    pub fn builder() -> SpheraParamsBuilder {
        SpheraParamsBuilder::new()
    }

    pub fn kepler(&self) -> KeplerParams {
        KeplerParams {
            eps: self.kepler_eps,
            max_iter: self.kepler_max_iter,
        }
    }
}

/// Builder for [`SpheraParams`].
///
/// ```rust
/// use sphera::planets::sphera::SpheraParams;
///
/// let params = SpheraParams::builder()
///     .apparent(false)
///     .kepler_eps(1e-10)
///     .build()
///     .unwrap();
/// assert!(!params.apparent);
/// ```
#[derive(Debug, Clone)]
pub struct SpheraParamsBuilder {
    params: SpheraParams,
}

impl Default for SpheraParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpheraParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SpheraParams::default(),
        }
    }

    pub fn apparent(mut self, v: bool) -> Self {
        self.params.apparent = v;
        self
    }
    pub fn kepler_eps(mut self, v: f64) -> Self {
        self.params.kepler_eps = v;
        self
    }
    pub fn kepler_max_iter(mut self, v: usize) -> Self {
        self.params.kepler_max_iter = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `kepler_eps > 0.0` (NaN rejected).
    /// * `kepler_max_iter >= 1`.
    pub fn build(self) -> Result<SpheraParams, SpheraError> {
        let p = &self.params;
        if p.kepler_eps.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
            return Err(SpheraError::InvalidParameter(
                "kepler_eps must be > 0".into(),
            ));
        }
        if p.kepler_max_iter < 1 {
            return Err(SpheraError::InvalidParameter(
                "kepler_max_iter must be >= 1".into(),
            ));
        }
        Ok(self.params)
    }
}

/// Per-epoch context of the planetary theory.
///
/// Immutable once built, except for the orbit cache which fills up on demand and is
/// never invalidated.
#[derive(Debug)]
pub struct Sphera {
    djd: DJD,
    t: Centuries,
    manom_sun: Radian,
    sun_geo: Polar,
    obliquity: Degree,
    nutation: Nutation,
    apparent: bool,
    aux_sun: [f64; 6],
    kepler: KeplerParams,
    orbits: [OnceCell<OrbitInstance>; 8],
    #[cfg(test)]
    instantiations: AtomicUsize,
}

impl Sphera {
    /// Build the context of an epoch with the default solver settings.
    ///
    /// Arguments
    /// ---------
    /// * `djd`: Julian days since 1900 January 0.5.
    /// * `apparent`: correct positions for nutation and aberration.
    pub fn create(djd: DJD, apparent: bool) -> Result<Self, SpheraError> {
        Self::with_params(
            djd,
            &SpheraParams {
                apparent,
                ..Default::default()
            },
        )
    }

    /// Build the context of an epoch with a custom configuration.
    ///
    /// Errors
    /// ------
    /// * [`SpheraError::NonConvergence`] if the solar Kepler equation does not converge
    ///   with the given settings.
    pub fn with_params(djd: DJD, params: &SpheraParams) -> Result<Self, SpheraError> {
        let t = djd / DAYS_PER_CENT;
        let kepler = params.kepler();
        let ms = sun::mean_anomaly(t);
        let sun_geo = sun::true_geocentric_with(t, Some(ms), &kepler)?;
        let nutation = nutation(t);
        let obliquity = obliquity(djd, nutation.deps);

        let mut aux = [0.0; 6];
        aux[0] = t / 5.0 + 0.1;
        aux[1] = reduce_rad(4.14473 + 5.29691e1 * t);
        aux[2] = reduce_rad(4.641118 + 2.132991e1 * t);
        aux[3] = reduce_rad(4.250177 + 7.478172 * t);
        aux[4] = 5.0 * aux[2] - 2.0 * aux[1];
        aux[5] = 2.0 * aux[1] - 6.0 * aux[2] + 3.0 * aux[3];

        debug!(
            "Sphera created for DJD {djd} (T = {t:.10}), apparent = {}",
            params.apparent
        );

        Ok(Self {
            djd,
            t,
            manom_sun: ms.to_radians(),
            sun_geo,
            obliquity,
            nutation,
            apparent: params.apparent,
            aux_sun: aux,
            kepler,
            orbits: Default::default(),
            #[cfg(test)]
            instantiations: AtomicUsize::new(0),
        })
    }

    /// Epoch, Julian days since 1900 January 0.5.
    pub fn djd(&self) -> DJD {
        self.djd
    }

    /// Epoch, Julian centuries since 1900 January 0.5.
    pub fn t(&self) -> Centuries {
        self.t
    }

    /// Mean anomaly of the Sun, radians.
    pub fn manom_sun(&self) -> Radian {
        self.manom_sun
    }

    /// True geocentric position of the Sun: longitude in arc-degrees, distance in AU.
    pub fn sun_geo(&self) -> Polar {
        self.sun_geo
    }

    /// True obliquity of the ecliptic, arc-degrees.
    pub fn obliquity(&self) -> Degree {
        self.obliquity
    }

    pub fn nutation(&self) -> Nutation {
        self.nutation
    }

    pub fn apparent(&self) -> bool {
        self.apparent
    }

    /// Auxiliary angles of the giant planet theory.
    pub fn aux_sun(&self) -> &[f64; 6] {
        &self.aux_sun
    }

    pub fn kepler_params(&self) -> &KeplerParams {
        &self.kepler
    }

    fn instantiate_orbit(&self, id: PlanetId) -> OrbitInstance {
        #[cfg(test)]
        self.instantiations.fetch_add(1, Ordering::Relaxed);
        trace!("instantiating orbit of {id} at T = {}", self.t);
        Planet::for_id(id).orbit.instantiate(self.t)
    }

    /// Orbit of a planet at the epoch of the context.
    ///
    /// Computed on first access, then served from the cache.
    pub fn orbit_instance(&self, id: PlanetId) -> &OrbitInstance {
        self.orbits[id.index()].get_or_init(|| self.instantiate_orbit(id))
    }

    /// Mean anomaly of a planet, radians.
    ///
    /// With a `delay` (days), the mean motion over that interval is subtracted, giving
    /// the mean anomaly at the moment the light now reaching the Earth left the planet.
    pub fn mean_anomaly(&self, id: PlanetId, delay: Option<f64>) -> Radian {
        let orbit = self.orbit_instance(id);
        match delay {
            Some(dt) => orbit.mean_anomaly - dt * orbit.daily_motion,
            None => orbit.mean_anomaly,
        }
    }
}

#[cfg(test)]
mod sphera_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ctx() -> Sphera {
        Sphera::create(30700.5, true).unwrap()
    }

    #[test]
    fn test_epoch_quantities() {
        let ctx = ctx();
        assert_abs_diff_eq!(ctx.t(), 0.8405338809034908, epsilon = 1e-6);
        assert_abs_diff_eq!(ctx.sun_geo().phi, 300.1307723107521, epsilon = 1e-6);
        assert_abs_diff_eq!(ctx.sun_geo().rho, 0.9839698373786032, epsilon = 1e-6);
        assert_abs_diff_eq!(
            ctx.manom_sun(),
            16.89671827974547_f64.to_radians(),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(ctx.nutation().dpsi, -0.004176852920102668, epsilon = 1e-6);
        assert_abs_diff_eq!(ctx.nutation().deps, 0.0006849657311651972, epsilon = 1e-6);
        assert_abs_diff_eq!(ctx.obliquity(), 23.442041099302447, epsilon = 1e-6);
        assert!(ctx.apparent());
    }

    #[test]
    fn test_mean_anomalies() {
        let ctx = ctx();
        let expected = [
            (PlanetId::Mercury, 1.7277480419370512),
            (PlanetId::Venus, 1.3753354318768864),
            (PlanetId::Mars, 3.616595436914378),
            (PlanetId::Jupiter, 4.469600429159891),
            (PlanetId::Saturn, 2.133162332104278),
            (PlanetId::Uranus, 1.2691334849854374),
            (PlanetId::Neptune, 3.863368991888066),
            (PlanetId::Pluto, 6.138953042601936),
        ];
        for (id, ma) in expected {
            assert_abs_diff_eq!(ctx.mean_anomaly(id, None), ma, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_mean_anomaly_with_delay() {
        let ctx = ctx();
        let orbit = *ctx.orbit_instance(PlanetId::Mars);
        let delayed = ctx.mean_anomaly(PlanetId::Mars, Some(10.0));
        assert_abs_diff_eq!(
            orbit.mean_anomaly - delayed,
            (10.0 * Planet::for_id(PlanetId::Mars).orbit.daily_motion()).to_radians(),
            epsilon = 1e-12
        );
        assert_eq!(
            ctx.mean_anomaly(PlanetId::Mars, Some(0.0)),
            orbit.mean_anomaly
        );
    }

    #[test]
    fn test_same_orbit_instance_is_cached() {
        let ctx = ctx();
        let first = *ctx.orbit_instance(PlanetId::Mercury);
        let second = *ctx.orbit_instance(PlanetId::Mercury);
        assert_eq!(first, second);
        assert_eq!(ctx.instantiations.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_different_orbit_instances() {
        let ctx = ctx();
        ctx.orbit_instance(PlanetId::Mercury);
        ctx.orbit_instance(PlanetId::Jupiter);
        ctx.orbit_instance(PlanetId::Jupiter);
        assert_eq!(ctx.instantiations.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_full_reduction_instantiates_each_orbit_once() {
        let ctx = ctx();
        for id in PlanetId::ALL {
            Planet::for_id(id).geocentric_position(&ctx).unwrap();
        }
        assert_eq!(ctx.instantiations.load(Ordering::Relaxed), 8);
    }

    #[test]
    fn test_aux_angles() {
        let ctx = ctx();
        let aux = ctx.aux_sun();
        assert_abs_diff_eq!(aux[0], ctx.t() / 5.0 + 0.1, epsilon = 1e-15);
        for x in &aux[1..4] {
            assert!((0.0..crate::constants::DPI).contains(x));
        }
        assert_abs_diff_eq!(aux[4], 5.0 * aux[2] - 2.0 * aux[1], epsilon = 1e-15);
    }

    #[test]
    fn test_params_builder() {
        let params = SpheraParams::builder()
            .apparent(false)
            .kepler_eps(1e-9)
            .kepler_max_iter(100)
            .build()
            .unwrap();
        assert!(!params.apparent);
        assert_eq!(params.kepler(), KeplerParams { eps: 1e-9, max_iter: 100 });

        assert!(matches!(
            SpheraParams::builder().kepler_eps(0.0).build(),
            Err(SpheraError::InvalidParameter(_))
        ));
        assert!(matches!(
            SpheraParams::builder().kepler_eps(f64::NAN).build(),
            Err(SpheraError::InvalidParameter(_))
        ));
        assert!(matches!(
            SpheraParams::builder().kepler_max_iter(0).build(),
            Err(SpheraError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_with_params() {
        let params = SpheraParams::builder().apparent(false).build().unwrap();
        let ctx = Sphera::with_params(30700.5, &params).unwrap();
        assert!(!ctx.apparent());
        assert_eq!(ctx.djd(), 30700.5);
        assert_eq!(ctx.kepler_params(), &KeplerParams::default());
    }

    #[test]
    fn test_kepler_settings_reach_the_sun() {
        let one_step = SpheraParams::builder().kepler_max_iter(1);
        let lenient = one_step.clone().build().unwrap();
        assert!(Sphera::with_params(30700.5, &lenient).is_ok());

        let strict = one_step.kepler_eps(1e-12).build().unwrap();
        assert!(matches!(
            Sphera::with_params(30700.5, &strict),
            Err(SpheraError::NonConvergence { iterations: 1, .. })
        ));
    }
}
