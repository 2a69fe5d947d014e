pub mod types;

pub use types::{ChartData, ChartError, ChartParams, ChartSettings, NatalChart};

use crate::aspects::AspectCalculator;
use crate::ephemeris::{
    julian_day, local_sidereal_time, Ephemeris, PlanetPosition, SimplifiedEphemeris,
};
use crate::houses::{find_house, House, HouseCusp};
use crate::zodiac::ZodiacSign;
use chrono::{Duration, NaiveDateTime};
use rand_chacha::ChaCha8Rng;

/// Convert a local civil time to UT given an offset in hours east of Greenwich.
pub fn local_to_universal(local: &NaiveDateTime, timezone_offset: f64) -> Result<NaiveDateTime, ChartError> {
    let offset = Duration::seconds((timezone_offset * 3600.0).round() as i64);
    local
        .checked_sub_signed(offset)
        .ok_or_else(|| ChartError::TimeOutOfRange(local.to_string()))
}

/// Natal chart using the simplified ephemeris.
pub fn calculate_natal_chart(
    birth_local: &NaiveDateTime,
    params: &ChartParams,
    settings: &ChartSettings,
) -> Result<NatalChart, ChartError> {
    let ephemeris = SimplifiedEphemeris::new(settings.retrograde_probability);
    let location_key = format!("{:.4},{:.4}", params.latitude, params.longitude);
    let mut rng = settings.seed.rng(birth_local, &location_key, "chart");
    calculate_natal_chart_with(&ephemeris, birth_local, params, settings, &mut rng)
}

/// Natal chart from any [`Ephemeris`] and an explicit random source.
pub fn calculate_natal_chart_with<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth_local: &NaiveDateTime,
    params: &ChartParams,
    settings: &ChartSettings,
    rng: &mut ChaCha8Rng,
) -> Result<NatalChart, ChartError> {
    params.validate()?;

    let ut = local_to_universal(birth_local, params.timezone_offset)?;
    let jd = julian_day(&ut);
    let sidereal_time = local_sidereal_time(jd, params.longitude);

    // Ascendant is taken to be the local sidereal time.
    let cusps = settings.house_scheme.cusps(sidereal_time);

    let planets: Vec<PlanetPosition> = ephemeris
        .positions(jd, rng)
        .iter()
        .map(|pos| PlanetPosition::from_ecliptic(pos, find_house(pos.longitude, &cusps)))
        .collect();

    let houses: Vec<HouseCusp> = House::ALL
        .iter()
        .zip(cusps.iter())
        .map(|(&house, &cusp)| HouseCusp {
            house,
            name: house.name().to_string(),
            local_name: house.local_name().to_string(),
            theme: house.theme().to_string(),
            description: house.description().to_string(),
            cusp,
            sign: ZodiacSign::from_longitude(cusp),
            planets: planets
                .iter()
                .filter(|p| p.house == house)
                .map(|p| p.planet)
                .collect(),
        })
        .collect();

    let aspects = AspectCalculator::new(settings.orbs.clone()).compute(&planets);

    if ephemeris.is_approximate() {
        log::debug!("natal chart for {} uses approximate positions", ut);
    }
    log::debug!(
        "natal chart jd={:.5} lst={:.3} planets={} aspects={}",
        jd,
        sidereal_time,
        planets.len(),
        aspects.len()
    );

    Ok(NatalChart {
        houses,
        planets,
        aspects,
        chart_data: ChartData {
            latitude: params.latitude,
            longitude: params.longitude,
            timezone: params.timezone_offset,
            sidereal_time,
            julian_day: jd,
            house_scheme: settings.house_scheme,
            approximate: ephemeris.is_approximate(),
        },
    })
}
