//! # Calendar and Julian days
//!
//! Conversions between civil calendar dates and **DJD**, the number of Julian days
//! elapsed since 1900 January 0.5 (JD 2415020.0), plus a few calendar helpers.
//!
//! ## Overview
//!
//! - [`jul_day`] / [`cal_date`]: civil date ↔ DJD, Julian calendar before the Gregorian
//!   reform (1582 October 15 by default), Gregorian afterwards.
//! - [`djd_midnight`], [`weekday`], [`is_leap_year`], [`day_of_year`], [`djd_zero`].
//! - [`djd_to_epoch`] / [`epoch_to_djd`] / [`iso_to_djd`]: bridge to [`hifitime::Epoch`].
//!
//! Civil years are used: there is no year 0, 1 BC is year `-1`.

use hifitime::{Duration, Epoch};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    constants::{DJD, DJD_TO_JD},
    sphera_errors::SpheraError,
};

/// Calendar date: civil year, month (1–12) and day with the time of day as fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Does this date fall on or after the given Gregorian reform date?
    pub fn is_after(&self, reform: &CalendarDate) -> bool {
        (self.year, self.month) > (reform.year, reform.month)
            || ((self.year, self.month) == (reform.year, reform.month) && self.day >= reform.day)
    }
}

/// First day of the Gregorian calendar, 1582 October 15.
pub const GREGORIAN_START: CalendarDate = CalendarDate {
    year: 1582,
    month: 10,
    day: 15.0,
};

/// Convert a civil date to DJD using the standard 1582 Gregorian reform.
///
/// Arguments
/// ---------
/// * `year`: civil year, negative for BC.
/// * `month`: month, 1–12.
/// * `day`: day of month, time of day as fractional part.
///
/// Returns
/// --------
/// * Julian days since 1900 January 0.5, or [`SpheraError::ZeroYear`] for `year == 0`.
///
/// ```rust
/// use sphera::time::jul_day;
/// assert_eq!(jul_day(1984, 8, 29.0).unwrap(), 30921.5);
/// ```
pub fn jul_day(year: i32, month: u32, day: f64) -> Result<DJD, SpheraError> {
    jul_day_with_reform(year, month, day, &GREGORIAN_START)
}

/// Same as [`jul_day`], with a custom date of the Gregorian reform.
pub fn jul_day_with_reform(
    year: i32,
    month: u32,
    day: f64,
    reform: &CalendarDate,
) -> Result<DJD, SpheraError> {
    if year == 0 {
        return Err(SpheraError::ZeroYear);
    }

    // civil → astronomical year
    let mut y = if year < 0 { year + 1 } else { year };
    let mut m = month as i32;
    if month < 3 {
        m += 12;
        y -= 1;
    }

    let b = if CalendarDate::new(year, month, day).is_after(reform) {
        let a = (f64::from(y) / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    let f = 365.25 * f64::from(y);
    let c = (if y < 0 { f - 0.75 } else { f }).trunc() - 694_025.0;
    let e = (30.6001 * f64::from(m + 1)).trunc();
    Ok(b + c + e + day - 0.5)
}

/// Convert DJD to a civil calendar date.
///
/// ```rust
/// use sphera::time::cal_date;
/// let date = cal_date(30921.5);
/// assert_eq!((date.year, date.month, date.day), (1984, 8, 29.0));
/// ```
pub fn cal_date(djd: DJD) -> CalendarDate {
    let d = djd + 0.5;
    let f = d.fract();
    let mut i = d.trunc();

    if i > -115_860.0 {
        let a = (i / 36_524.25 + 9.9835726e-1).floor() + 14.0;
        i += 1.0 + a - (a / 4.0).floor();
    }

    let b = (i / 365.25 + 8.02601e-1).floor();
    let c = i - (365.25 * b + 7.50001e-1).floor() + 416.0;
    let g = (c / 30.6001).floor();
    let day = c - (30.6001 * g).floor() + f;
    let month = g - if g > 13.5 { 13.0 } else { 1.0 };
    let mut year = b + if month < 2.5 { 1900.0 } else { 1899.0 };
    // astronomical → civil year
    if year < 1.0 {
        year -= 1.0;
    }

    CalendarDate::new(year as i32, month as u32, day)
}

/// DJD at the preceding Greenwich midnight.
pub fn djd_midnight(djd: DJD) -> DJD {
    let f = djd.floor();
    f + if (djd - f).abs() >= 0.5 { 0.5 } else { -0.5 }
}

/// Day of week, 0 for Sunday, 1 for Monday and so on.
pub fn weekday(djd: DJD) -> u32 {
    let j0 = djd_midnight(djd) + DJD_TO_JD;
    (j0 + 1.5).rem_euclid(7.0) as u32
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the year up to the given date, inclusive (1–366).
pub fn day_of_year(year: i32, month: u32, day: f64) -> u32 {
    let k = if is_leap_year(year) { 1.0 } else { 2.0 };
    let month = f64::from(month);
    let a = (275.0 * month / 9.0).floor();
    let b = k * ((month + 9.0) / 12.0).floor();
    (a - b + day.floor() - 30.0) as u32
}

/// DJD of January 0.0 of the given year.
pub fn djd_zero(year: i32) -> DJD {
    let y = f64::from(year - 1);
    let a = (y / 100.0).trunc();
    (365.25 * y).trunc() - a + (a / 4.0).trunc() - 693_595.5
}

/// Convert DJD (UTC) to a [`hifitime::Epoch`], rounded to the millisecond.
pub fn djd_to_epoch(djd: DJD) -> Epoch {
    Epoch::from_jde_utc(djd + DJD_TO_JD).round(Duration::from_milliseconds(1.0))
}

/// Convert a [`hifitime::Epoch`] to DJD in the UTC scale.
pub fn epoch_to_djd(epoch: &Epoch) -> DJD {
    epoch.to_jde_utc_days() - DJD_TO_JD
}

/// Parse an ISO-8601 date (e.g. `2021-01-01T12:00:00`) and convert it to DJD.
pub fn iso_to_djd(date: &str) -> Result<DJD, SpheraError> {
    let epoch = Epoch::from_str(date)
        .map_err(|e| SpheraError::InvalidParameter(format!("invalid date '{date}': {e}")))?;
    Ok(epoch_to_djd(&epoch))
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::math_utils::ddd;
    use approx::assert_abs_diff_eq;

    const CASES: [(i32, u32, f64, f64); 6] = [
        (1984, 8, 29.0, 30921.5),
        (1899, 12, 31.5, 0.0),
        (1938, 8, 17.0, 14107.5),
        (1, 1, 1.0, -693596.5),
        (-4713, 7, 12.0, -2414827.5),
        (-4713, 1, 1.5, -2415020.0),
    ];

    #[test]
    fn test_civil_to_julian() {
        for (y, m, d, djd) in CASES {
            assert_abs_diff_eq!(jul_day(y, m, d).unwrap(), djd, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(jul_day(1900, 1, 0.5).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_julian_to_civil() {
        for (y, m, d, djd) in CASES {
            let date = cal_date(djd);
            assert_eq!(date.year, y);
            assert_eq!(date.month, m);
            assert_abs_diff_eq!(date.day, d, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_year() {
        assert_eq!(jul_day(0, 12, 1.0), Err(SpheraError::ZeroYear));
    }

    #[test]
    fn test_custom_reform() {
        // Without any reform before 1900 the Julian calendar is used throughout.
        let never = CalendarDate::new(9999, 1, 1.0);
        let julian = jul_day_with_reform(1984, 8, 29.0, &never).unwrap();
        assert_abs_diff_eq!(julian, 30921.5 + 13.0, epsilon = 1e-6);
    }

    #[test]
    fn test_djd_zero() {
        assert_abs_diff_eq!(djd_zero(2010), 40176.5, epsilon = 1e-6);
    }

    #[test]
    fn test_djd_midnight() {
        assert_eq!(djd_midnight(23772.99), 23772.5);
        assert_eq!(djd_midnight(23773.3), 23772.5);
        assert_eq!(djd_midnight(23772.4), 23771.5);
        assert_eq!(djd_midnight(23771.9), 23771.5);
        assert_eq!(djd_midnight(23773.6), 23773.5);
    }

    #[test]
    fn test_weekday() {
        let cases = [
            (30921.5, 3),
            (0.0, 0),
            (14107.5, 3),
            (-693596.5, 6),
            (-2414827.5, 5),
            (-2415020.0, 1),
            (23772.99, 1),
        ];
        for (djd, wd) in cases {
            assert_eq!(weekday(djd), wd, "djd = {djd}");
        }
    }

    #[test]
    fn test_leap_years() {
        for y in (2000..=2048).step_by(4) {
            assert!(is_leap_year(y));
        }
        for y in [2001, 2003, 2010, 2014, 2017, 2019, 2025, 2026, 2035, 2038, 2045, 2047, 2049] {
            assert!(!is_leap_year(y));
        }
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(1990, 4, 1.0), 91);
        assert_eq!(day_of_year(2000, 4, 1.0), 92);
        assert_eq!(day_of_year(2000, 1, 1.0), 1);
        assert_eq!(day_of_year(2001, 12, 31.0), 365);
        assert_eq!(day_of_year(2000, 12, 31.0), 366);
    }

    #[test]
    fn test_day_of_year_late_months() {
        let cases = [(9, 30, 273), (10, 1, 274), (11, 15, 319), (12, 1, 335)];
        for (month, day, expected) in cases {
            assert_eq!(day_of_year(2001, month, f64::from(day)), expected);
            assert_eq!(day_of_year(2004, month, f64::from(day)), expected + 1);
        }
    }

    #[test]
    fn test_djd_to_epoch() {
        let djd = jul_day(1965, 2, 1.0 + ddd(11, 46, 0.0) / 24.0).unwrap();
        let (y, m, d, h, min, s, _) = djd_to_epoch(djd).to_gregorian_utc();
        assert_eq!((y, m, d, h, min, s), (1965, 2, 1, 11, 46, 0));
    }

    #[test]
    fn test_epoch_round_trip() {
        let epoch = Epoch::from_gregorian_utc_at_midnight(1984, 8, 29);
        assert_abs_diff_eq!(epoch_to_djd(&epoch), 30921.5, epsilon = 1e-8);

        let djd = iso_to_djd("2000-01-01T12:00:00").unwrap();
        assert_abs_diff_eq!(djd, 36525.0, epsilon = 1e-8);

        assert!(iso_to_djd("not a date").is_err());
    }
}
