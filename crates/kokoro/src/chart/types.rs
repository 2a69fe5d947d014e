use crate::aspects::{Aspect, OrbTable};
use crate::ephemeris::{PlanetPosition, DEFAULT_RETROGRADE_PROBABILITY};
use crate::houses::{HouseCusp, HouseScheme};
use crate::seed::SeedPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while setting up a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("latitude must be within [-90, 90], got {0}")]
    InvalidLatitude(f64),
    #[error("longitude must be within [-180, 180], got {0}")]
    InvalidLongitude(f64),
    #[error("timezone offset must be within [-14, 14] hours, got {0}")]
    InvalidTimezone(f64),
    #[error("birth time {0} is out of range after timezone conversion")]
    TimeOutOfRange(String),
}

/// Where and in which civil timezone a birth took place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartParams {
    pub latitude: f64,
    /// East-positive degrees
    pub longitude: f64,
    /// Hours ahead of UT, e.g. 9.0 for Japan
    #[serde(rename = "timezoneOffset")]
    pub timezone_offset: f64,
}

impl ChartParams {
    pub fn new(latitude: f64, longitude: f64, timezone_offset: f64) -> Result<Self, ChartError> {
        let params = Self {
            latitude,
            longitude,
            timezone_offset,
        };
        params.validate()?;
        Ok(params)
    }

    /// Rejects out-of-range and non-finite values.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidLongitude(self.longitude));
        }
        if !(-14.0..=14.0).contains(&self.timezone_offset) {
            return Err(ChartError::InvalidTimezone(self.timezone_offset));
        }
        Ok(())
    }
}

/// Settings for chart calculations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    pub house_scheme: HouseScheme,
    pub orbs: OrbTable,
    pub retrograde_probability: f64,
    pub seed: SeedPolicy,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_scheme: HouseScheme::default(),
            orbs: OrbTable::default(),
            retrograde_probability: DEFAULT_RETROGRADE_PROBABILITY,
            seed: SeedPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
    #[serde(rename = "siderealTime")]
    pub sidereal_time: f64,
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
    #[serde(rename = "houseScheme")]
    pub house_scheme: HouseScheme,
    /// Positions come from an approximate model
    pub approximate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NatalChart {
    pub houses: Vec<HouseCusp>,
    pub planets: Vec<PlanetPosition>,
    pub aspects: Vec<Aspect>,
    #[serde(rename = "chartData")]
    pub chart_data: ChartData,
}
