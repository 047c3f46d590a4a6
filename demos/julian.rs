//! Print the Julian Day of a civil date and time.
//!
//! Usage:
//!   julian [-h | --help | DATETIME]
//!
//! DATETIME is an ISO-8601 UTC date, e.g. `2024-03-20T03:06:00`. Current time by default.

use std::{env, process, str::FromStr};

use hifitime::Epoch;
use sphera::{constants::DJD_TO_JD, math_utils::ddd, time::jul_day};

const USAGE: &str = "Usage: julian [-h, --help | DATETIME]

DATETIME is a civil date and time in ISO-8601 format, like
2024-03-20T03:06:00. Current date/time by default.";

fn main() {
    let epoch = match env::args().nth(1).as_deref() {
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return;
        }
        Some(arg) => Epoch::from_str(arg).unwrap_or_else(|_| {
            eprintln!("Unexpected date/time: '{arg}'");
            process::exit(1);
        }),
        None => Epoch::now().unwrap_or_else(|e| {
            eprintln!("Could not read the system clock: {e}");
            process::exit(1);
        }),
    };

    let (year, month, day, hour, minute, second, _) = epoch.to_gregorian_utc();
    let hm = ddd(i32::from(hour), i32::from(minute), f64::from(second));
    match jul_day(year, u32::from(month), f64::from(day) + hm / 24.0) {
        Ok(djd) => println!("{:12.6}", djd + DJD_TO_JD),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
