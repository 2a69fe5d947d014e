//! House cusp placement.
//!
//! Neither scheme is a quadrant house system. `Simplified` keeps the fixed
//! legacy offsets, including the fourth and seventh cusps sharing the
//! descendant and the midheaven a quarter turn past the ascendant. Latitude is
//! never consulted.

use crate::ephemeris::normalize_degrees;
use crate::houses::types::House;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Offsets from the ascendant for houses 1..=12 under the simplified scheme.
const SIMPLIFIED_OFFSETS: [f64; 12] = [
    0.0, 30.0, 60.0, 180.0, 120.0, 150.0, 180.0, 210.0, 240.0, 90.0, 300.0, 330.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseScheme {
    /// Fixed legacy offsets; midheaven = ascendant + 90
    #[default]
    Simplified,
    /// Twelve 30 degree houses from the ascendant
    Equal,
}

impl HouseScheme {
    pub fn cusps(self, ascendant: f64) -> [f64; 12] {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            let offset = match self {
                HouseScheme::Simplified => SIMPLIFIED_OFFSETS[i],
                HouseScheme::Equal => 30.0 * i as f64,
            };
            *cusp = normalize_degrees(ascendant + offset);
        }
        cusps
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseScheme::Simplified => "simplified",
            HouseScheme::Equal => "equal",
        }
    }
}

impl FromStr for HouseScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simplified" => Ok(HouseScheme::Simplified),
            "equal" => Ok(HouseScheme::Equal),
            other => Err(format!(
                "unknown house scheme: {} (valid: simplified, equal)",
                other
            )),
        }
    }
}

/// House whose arc `[cusp[i], cusp[i + 1])` contains `longitude`, scanning in
/// house order and wrapping at 0/360. Falls back to the First house when no
/// arc matches, which only happens with degenerate cusps.
pub fn find_house(longitude: f64, cusps: &[f64; 12]) -> House {
    let longitude = normalize_degrees(longitude);
    for (i, house) in House::ALL.iter().enumerate() {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if end < start {
            longitude >= start || longitude < end
        } else {
            longitude >= start && longitude < end
        };
        if inside {
            return *house;
        }
    }
    House::First
}
