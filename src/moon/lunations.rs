//! Principal phases of the Moon.
//!
//! The mean phase nearest to a date is computed from the lunation number, then corrected
//! by the periodic terms of the Sun and Moon anomalies and the argument of latitude.
//! Accuracy is about two minutes of time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::DJD,
    math_utils::reduce_deg,
    sphera_errors::SpheraError,
    time::{day_of_year, is_leap_year},
};

/// Lunations per year.
const LUNATIONS_PER_YEAR: f64 = 12.3685;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [
        Quarter::NewMoon,
        Quarter::FirstQuarter,
        Quarter::FullMoon,
        Quarter::LastQuarter,
    ];

    /// Fraction of the lunation at which the phase occurs.
    pub fn coeff(self) -> f64 {
        match self {
            Quarter::NewMoon => 0.0,
            Quarter::FirstQuarter => 0.25,
            Quarter::FullMoon => 0.5,
            Quarter::LastQuarter => 0.75,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Quarter::NewMoon => "New Moon",
            Quarter::FirstQuarter => "First Quarter",
            Quarter::FullMoon => "Full Moon",
            Quarter::LastQuarter => "Last Quarter",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Correction to the mean phase, days.
///
/// `ms`, `mm`, `f`: anomaly of the Sun, anomaly of the Moon, argument of latitude (radians).
fn phase_correction(quarter: Quarter, t: f64, ms: f64, mm: f64, f: f64) -> f64 {
    let tms = ms + ms;
    let tmm = mm + mm;
    let tf = f + f;

    match quarter {
        Quarter::NewMoon | Quarter::FullMoon => {
            (1.734e-1 - 3.93e-4 * t) * ms.sin() + 2.1e-3 * tms.sin() - 4.068e-1 * mm.sin()
                + 1.61e-2 * tmm.sin()
                - 4e-4 * (mm + tmm).sin()
                + 1.04e-2 * tf.sin()
                - 5.1e-3 * (ms + mm).sin()
                - 7.4e-3 * (ms - mm).sin()
                + 4e-4 * (tf + ms).sin()
                - 4e-4 * (tf - ms).sin()
                - 6e-4 * (tf + mm).sin()
                + 1e-3 * (tf - mm).sin()
                + 5e-4 * (ms + tmm).sin()
        }
        Quarter::FirstQuarter | Quarter::LastQuarter => {
            let delta = (0.1721 - 0.0004 * t) * ms.sin() + 0.0021 * tms.sin()
                - 0.6280 * mm.sin()
                + 0.0089 * tmm.sin()
                - 0.0004 * (tmm + mm).sin()
                + 0.0079 * tf.sin()
                - 0.0119 * (ms + mm).sin()
                - 0.0047 * (ms - mm).sin()
                + 0.0003 * (tf + ms).sin()
                - 0.0004 * (tf - ms).sin()
                - 0.0006 * (tf + mm).sin()
                + 0.0021 * (tf - mm).sin()
                + 0.0003 * (ms + tmm).sin()
                + 0.0004 * (ms - tmm).sin()
                - 0.0003 * (tms + mm).sin();
            let w = 0.0028 - 0.0004 * ms.cos() + 0.0003 * ms.cos();
            if quarter == Quarter::LastQuarter {
                delta - w
            } else {
                delta + w
            }
        }
    }
}

/// Find the instant of a lunar phase closest to a civil date.
///
/// Arguments
/// ---------
/// * `quarter`: phase to search for.
/// * `year`, `month`, `day`: civil date.
///
/// Returns
/// --------
/// * DJD of the phase.
///
/// Errors
/// ------
/// * [`SpheraError::InvalidParameter`] if the month or the day is out of range.
pub fn find_closest_phase(
    quarter: Quarter,
    year: i32,
    month: u32,
    day: u32,
) -> Result<DJD, SpheraError> {
    if !(1..=12).contains(&month) {
        return Err(SpheraError::InvalidParameter(format!(
            "month must be in 1..=12, got {month}"
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(SpheraError::InvalidParameter(format!(
            "day must be in 1..=31, got {day}"
        )));
    }

    let n = if is_leap_year(year) { 366.0 } else { 365.0 };
    let y = f64::from(year) + f64::from(day_of_year(year, month, f64::from(day))) / n;
    let k = ((y - 1900.0) * LUNATIONS_PER_YEAR).round_ties_even() + quarter.coeff();
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let assemble = |a: f64, b: f64, c: f64, d: f64| -> f64 {
        reduce_deg(a + b * k + c * t2 + d * t3).to_radians()
    };

    let c = (166.56 + (132.87 - 9.173e-3 * t) * t).to_radians();
    // mean phase
    let j = 0.75933 + 29.53058868 * k + 0.0001178 * t2 - 1.55e-07 * t3 + 3.3e-4 * c.sin();

    let ms = assemble(359.2242, 29.105356080, -0.0000333, -0.00000347);
    let mm = assemble(306.0253, 385.81691806, 0.0107306, 0.00001236);
    let f = assemble(21.2964, 390.67050646, -0.0016528, -0.00000239);

    Ok(j + phase_correction(quarter, t, ms, mm, f))
}

#[cfg(test)]
mod lunations_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_moon() {
        let cases = [
            (1984, 9, 1, 30919.310211618253),
            (1968, 12, 12, 25190.26339894182),
            (2019, 8, 21, 43705.94329684595),
        ];
        for (y, m, d, djd) in cases {
            let got = find_closest_phase(Quarter::NewMoon, y, m, d).unwrap();
            assert_abs_diff_eq!(got, djd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_new_moon_late_in_common_year() {
        let cases = [
            (2001, 10, 1, 37179.3084106503),
            (2023, 12, 26, 45300.998678642405),
        ];
        for (y, m, d, djd) in cases {
            let got = find_closest_phase(Quarter::NewMoon, y, m, d).unwrap();
            assert_abs_diff_eq!(got, djd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_first_quarter() {
        let got = find_closest_phase(Quarter::FirstQuarter, 2019, 8, 21).unwrap();
        assert_abs_diff_eq!(got, 43712.63307721984, epsilon = 1e-6);
    }

    #[test]
    fn test_full_moon() {
        let cases = [
            (1984, 9, 1, 30933.793794531903),
            (1965, 2, 1, 23787.51877441438),
            (2019, 8, 21, 43720.691244191235),
        ];
        for (y, m, d, djd) in cases {
            let got = find_closest_phase(Quarter::FullMoon, y, m, d).unwrap();
            assert_abs_diff_eq!(got, djd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_last_quarter() {
        let cases = [(2044, 1, 1, 52616.4909832585), (2019, 8, 21, 43728.613708547804)];
        for (y, m, d, djd) in cases {
            let got = find_closest_phase(Quarter::LastQuarter, y, m, d).unwrap();
            assert_abs_diff_eq!(got, djd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_phases_follow_each_other() {
        let phases: Vec<f64> = Quarter::ALL
            .into_iter()
            .map(|q| find_closest_phase(q, 2019, 8, 21).unwrap())
            .collect();
        for w in phases.windows(2) {
            // a quarter of the synodic month, give or take the inequalities
            assert!((w[1] - w[0] - 7.38).abs() < 1.0, "{phases:?}");
        }
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            find_closest_phase(Quarter::NewMoon, 2019, 13, 1),
            Err(SpheraError::InvalidParameter(_))
        ));
        assert!(matches!(
            find_closest_phase(Quarter::NewMoon, 2019, 1, 0),
            Err(SpheraError::InvalidParameter(_))
        ));
    }
}
