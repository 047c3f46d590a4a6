//! Equinoxes and solstices.
//!
//! The instant of the event is found by a damped fixed-point search on the apparent
//! longitude of the Sun, starting from a mean-calendar estimate.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, DJD, TROPICAL_YEAR},
    math_utils::shortest_arc_deg,
    sphera_errors::SpheraError,
    sun::apparent,
};

/// Convergence threshold on the solar longitude, arc-degrees.
const SEASON_EPS: Degree = 1e-6;

/// Ceiling of the search loop.
const SEASON_MAX_ITER: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonKind {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SeasonKind {
    pub const ALL: [SeasonKind; 4] = [
        SeasonKind::MarchEquinox,
        SeasonKind::JuneSolstice,
        SeasonKind::SeptemberEquinox,
        SeasonKind::DecemberSolstice,
    ];

    /// Apparent longitude of the Sun at the event, arc-degrees.
    pub fn solar_longitude(self) -> Degree {
        self.quarter() * 90.0
    }

    fn quarter(self) -> f64 {
        match self {
            SeasonKind::MarchEquinox => 0.0,
            SeasonKind::JuneSolstice => 1.0,
            SeasonKind::SeptemberEquinox => 2.0,
            SeasonKind::DecemberSolstice => 3.0,
        }
    }
}

/// Circumstances of an equinox or solstice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonEvent {
    /// Instant of the event, DJD.
    pub djd: DJD,
    /// Apparent longitude of the Sun at the last step, arc-degrees.
    pub longitude: Degree,
}

/// Find the instant of an equinox or solstice.
///
/// Arguments
/// ---------
/// * `year`: civil year.
/// * `kind`: which of the four events.
///
/// Returns
/// --------
/// * The [`SeasonEvent`], accurate to a few minutes of time.
///
/// Errors
/// ------
/// * [`SpheraError::NonConvergence`] if the longitude has not settled after 50 steps.
pub fn solstice_equinox(year: i32, kind: SeasonKind) -> Result<SeasonEvent, SpheraError> {
    let target = kind.solar_longitude();
    let mut djd = (f64::from(year) + kind.quarter() / 4.0) * TROPICAL_YEAR - 693_878.7;

    for i in 0..SEASON_MAX_ITER {
        let x = apparent(djd, None, true)?.phi;
        djd += 58.0 * (target - x).to_radians().sin();
        let residual = shortest_arc_deg(target, x);
        trace!("{kind:?} {year}: step {i}, djd = {djd}, residual = {residual:e}");
        if residual < SEASON_EPS {
            return Ok(SeasonEvent { djd, longitude: x });
        }
    }

    warn!("{kind:?} {year}: search did not converge");
    Err(SpheraError::NonConvergence {
        iterations: SEASON_MAX_ITER,
        residual: f64::NAN,
    })
}
