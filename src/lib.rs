pub mod constants;
pub mod earth_orientation;
pub mod kepler;
pub mod math_utils;
pub mod moon;
pub mod planets;
pub mod ref_system;
pub mod sidereal;
pub mod sphera_errors;
pub mod sun;
pub mod time;

pub use planets::{sphera::Sphera, EclipticPosition, Planet, PlanetId};
pub use sphera_errors::SpheraError;
