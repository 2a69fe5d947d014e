use crate::houses::House;
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Truncated mean orbital elements referred to J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Mean longitude at epoch (degrees)
    pub mean_longitude: f64,
    /// Mean daily motion (degrees per day)
    pub daily_motion: f64,
    pub eccentricity: f64,
}

/// The ten bodies tracked in a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    pub const ALL: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    /// Localized (Japanese) name
    pub fn local_name(self) -> &'static str {
        match self {
            Planet::Sun => "太陽",
            Planet::Moon => "月",
            Planet::Mercury => "水星",
            Planet::Venus => "金星",
            Planet::Mars => "火星",
            Planet::Jupiter => "木星",
            Planet::Saturn => "土星",
            Planet::Uranus => "天王星",
            Planet::Neptune => "海王星",
            Planet::Pluto => "冥王星",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Planet::Sun => "☉",
            Planet::Moon => "☽",
            Planet::Mercury => "☿",
            Planet::Venus => "♀",
            Planet::Mars => "♂",
            Planet::Jupiter => "♃",
            Planet::Saturn => "♄",
            Planet::Uranus => "♅",
            Planet::Neptune => "♆",
            Planet::Pluto => "♇",
        }
    }

    pub fn elements(self) -> OrbitalElements {
        let (mean_longitude, daily_motion, eccentricity) = match self {
            Planet::Sun => (280.4665, 0.9856474, 0.0167),
            Planet::Moon => (218.3164, 13.1763966, 0.0549),
            Planet::Mercury => (252.2509, 4.0923344, 0.2056),
            Planet::Venus => (181.9798, 1.6021687, 0.0068),
            Planet::Mars => (355.4330, 0.5240207, 0.0934),
            Planet::Jupiter => (34.3515, 0.0830853, 0.0484),
            Planet::Saturn => (50.0774, 0.0334442, 0.0539),
            Planet::Uranus => (314.0550, 0.0117207, 0.0472),
            Planet::Neptune => (304.3487, 0.0060190, 0.0086),
            Planet::Pluto => (238.9508, 0.0039757, 0.2488),
        };
        OrbitalElements {
            mean_longitude,
            daily_motion,
            eccentricity,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw ephemeris output for one body, before house placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EclipticPosition {
    pub planet: Planet,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Simulated; see [`crate::ephemeris::SimplifiedEphemeris`]
    pub retrograde: bool,
}

/// A body placed in a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    #[serde(rename = "localName")]
    pub local_name: String,
    pub symbol: String,
    pub longitude: f64,
    pub latitude: f64,
    pub house: House,
    pub sign: ZodiacSign,
    /// Degree within `sign` (0 <= x < 30)
    pub degree: f64,
    /// Simulated; see [`crate::ephemeris::SimplifiedEphemeris`]
    pub retrograde: bool,
}

impl PlanetPosition {
    pub fn from_ecliptic(position: &EclipticPosition, house: House) -> Self {
        Self {
            planet: position.planet,
            local_name: position.planet.local_name().to_string(),
            symbol: position.planet.symbol().to_string(),
            longitude: position.longitude,
            latitude: position.latitude,
            house,
            sign: ZodiacSign::from_longitude(position.longitude),
            degree: crate::ephemeris::degree_in_sign(position.longitude),
            retrograde: position.retrograde,
        }
    }
}
