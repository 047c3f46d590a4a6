//! Print apparent geocentric positions of the Sun, the Moon and the planets.
//!
//! Usage:
//!   planet_positions [DATETIME] [--geometric]
//!
//! DATETIME is an ISO-8601 UTC date, e.g. `1984-01-21T12:00:00`. Current time by default.

use std::{env, error::Error};

use hifitime::Epoch;
use sphera::{
    math_utils::zdms,
    moon,
    planets::sphera::SpheraParams,
    sun,
    time::{epoch_to_djd, iso_to_djd},
    Planet, PlanetId, Sphera,
};

const SIGNS: [&str; 12] = [
    "Ari", "Tau", "Gem", "Cnc", "Leo", "Vir", "Lib", "Sco", "Sgr", "Cap", "Aqr", "Psc",
];

fn zodiac(x: f64) -> String {
    let (z, d, m, s) = zdms(x);
    format!("{d:02} {} {m:02} {s:04.1}", SIGNS[z as usize])
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let geometric = args.iter().any(|a| a == "--geometric");
    let djd = match args.iter().find(|a| !a.starts_with("--")) {
        Some(date) => iso_to_djd(date)?,
        None => epoch_to_djd(&Epoch::now()?),
    };

    let params = SpheraParams::builder().apparent(!geometric).build()?;
    let ctx = Sphera::with_params(djd, &params)?;

    println!("DJD {djd:.6}, obliquity {:.6}°", ctx.obliquity());
    println!();

    let sun = sun::apparent(djd, Some(ctx.nutation().dpsi), false)?;
    println!("{:<8} {}  {:>10.6} AU", "Sun", zodiac(sun.phi), sun.rho);

    let moon = moon::apparent(djd, Some(ctx.nutation().dpsi));
    println!(
        "{:<8} {}  {:+8.4}°",
        "Moon",
        zodiac(moon.lambda),
        moon.beta
    );

    for id in PlanetId::ALL {
        let pos = Planet::for_id(id).geocentric_position(&ctx)?;
        println!(
            "{:<8} {}  {:+8.4}°  {:>10.6} AU",
            id.name(),
            zodiac(pos.longitude),
            pos.latitude,
            pos.distance
        );
    }
    println!();
    println!(
        "Lunar node {}",
        zodiac(moon::lunar_node(djd, true))
    );
    Ok(())
}
