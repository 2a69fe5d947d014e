pub mod simplified;
pub mod time;
pub mod types;

pub use simplified::{Ephemeris, SimplifiedEphemeris, DEFAULT_RETROGRADE_PROBABILITY};
pub use time::{
    degree_in_sign, greenwich_sidereal_time, julian_day, local_sidereal_time, normalize_degrees,
    J2000,
};
pub use types::{EclipticPosition, OrbitalElements, Planet, PlanetPosition};
