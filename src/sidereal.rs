//! # Sidereal time
//!
//! Conversion between civil time (UTC) and local sidereal time.
//!
//! Sidereal time runs faster than solar time by about four minutes a day, so a small
//! range of sidereal times occurs twice on the same calendar date: from 23h56m04s UT to
//! 0h03m56s UT. [`sidereal_to_utc`] flags results falling into that window.
//!
//! Longitudes are expressed in arc-degrees, **negative eastwards**.

use crate::{
    constants::{Degree, Hours, DAYS_PER_CENT, DJD},
    math_utils::to_range,
    sphera_errors::SpheraError,
    time::{cal_date, djd_midnight, jul_day},
};

/// Ratio of the mean solar day to the sidereal day.
const SIDEREAL_RATE: f64 = 0.9972695677;

/// Width of the ambiguous UTC window after midnight, hours.
const AMBIGUITY_WINDOW: Hours = 6.552e-2;

/// Greenwich sidereal time at 0h UT of the given date, not reduced to `0..24`.
fn t_naught(djd: DJD) -> Result<Hours, SpheraError> {
    let year = cal_date(djd).year;
    let dj0 = jul_day(year, 1, 0.0)?;
    let t = dj0 / DAYS_PER_CENT;
    Ok(6.57098e-2 * (djd - dj0)
        - (24.0
            - (6.6460656 + (5.1262e-2 + t * 2.581e-5) * t)
            - 2400.0 * (t - f64::from(year - 1900) / 100.0)))
}

/// Convert civil time to local sidereal time.
///
/// Arguments
/// ---------
/// * `djd`: Julian days since 1900 January 0.5 (UTC).
/// * `lng`: geographic longitude in arc-degrees, negative eastwards.
///
/// Returns
/// --------
/// * Local sidereal time in hours, `0..24`.
pub fn djd_to_sidereal(djd: DJD, lng: Degree) -> Result<Hours, SpheraError> {
    let djm = djd_midnight(djd);
    let utc = (djd - djm) * 24.0;
    let gst = utc / SIDEREAL_RATE + t_naught(djm)?;
    Ok(to_range(gst - lng / 15.0, 24.0))
}

/// Convert local sidereal time to civil time on the date of `djd`.
///
/// Returns
/// --------
/// * `(utc, ambiguous)`: UTC in hours, and `true` when the result falls into the window
///   where the same sidereal time occurs twice that day.
pub fn sidereal_to_utc(lst: Hours, djd: DJD, lng: Degree) -> Result<(Hours, bool), SpheraError> {
    let djm = djd_midnight(djd);
    let t0 = to_range(t_naught(djm)?, 24.0);
    let gst = lst + lng / 15.0;
    let utc = to_range(gst - t0, 24.0) * SIDEREAL_RATE;
    Ok((utc, utc < AMBIGUITY_WINDOW))
}
