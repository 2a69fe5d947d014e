use crate::ephemeris::time::{normalize_degrees, J2000};
use crate::ephemeris::types::{EclipticPosition, Planet};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Default share of bodies flagged retrograde by [`SimplifiedEphemeris`].
pub const DEFAULT_RETROGRADE_PROBABILITY: f64 = 0.2;

/// Source of planetary positions for a chart.
///
/// Charts only see this trait, so a real ephemeris can replace the simplified
/// model without touching the chart assembly.
pub trait Ephemeris {
    /// Positions of every tracked body at `jd` (UT), in [`Planet::ALL`] order.
    fn positions(&self, jd: f64, rng: &mut ChaCha8Rng) -> Vec<EclipticPosition>;

    /// Whether the output is an approximation unsuitable for real astrology.
    fn is_approximate(&self) -> bool;
}

/// Mean-longitude model with a first-order eccentricity term.
///
/// Latitudes are always zero and the retrograde flag is drawn at random;
/// neither is derived from orbital mechanics.
#[derive(Debug, Clone)]
pub struct SimplifiedEphemeris {
    retrograde_probability: f64,
}

impl SimplifiedEphemeris {
    pub fn new(retrograde_probability: f64) -> Self {
        let retrograde_probability = if retrograde_probability.is_nan() {
            log::warn!("retrograde probability is NaN, using {}", DEFAULT_RETROGRADE_PROBABILITY);
            DEFAULT_RETROGRADE_PROBABILITY
        } else {
            retrograde_probability.clamp(0.0, 1.0)
        };
        Self {
            retrograde_probability,
        }
    }

    /// Ecliptic longitude of `planet` at `jd`, in [0, 360).
    pub fn longitude(&self, planet: Planet, jd: f64) -> f64 {
        let elements = planet.elements();
        let mean = normalize_degrees(elements.mean_longitude + elements.daily_motion * (jd - J2000));
        normalize_degrees(mean + 2.0 * elements.eccentricity * mean.to_radians().sin())
    }
}

impl Default for SimplifiedEphemeris {
    fn default() -> Self {
        Self::new(DEFAULT_RETROGRADE_PROBABILITY)
    }
}

impl Ephemeris for SimplifiedEphemeris {
    fn positions(&self, jd: f64, rng: &mut ChaCha8Rng) -> Vec<EclipticPosition> {
        Planet::ALL
            .iter()
            .map(|&planet| EclipticPosition {
                planet,
                longitude: self.longitude(planet, jd),
                latitude: 0.0,
                retrograde: rng.gen_bool(self.retrograde_probability),
            })
            .collect()
    }

    fn is_approximate(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_longitude_at_epoch() {
        let eph = SimplifiedEphemeris::default();
        let sun = eph.longitude(Planet::Sun, J2000);
        let expected = 280.4665 + 2.0 * 0.0167 * 280.4665f64.to_radians().sin();
        assert!((sun - expected).abs() < 1e-9);
    }

    #[test]
    fn test_longitudes_before_epoch_are_normalised() {
        let eph = SimplifiedEphemeris::default();
        for planet in Planet::ALL {
            let lon = eph.longitude(planet, J2000 - 30_000.0);
            assert!((0.0..360.0).contains(&lon), "{:?} {}", planet, lon);
        }
    }

    #[test]
    fn test_retrograde_probability_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let never = SimplifiedEphemeris::new(0.0).positions(J2000, &mut rng);
        assert!(never.iter().all(|p| !p.retrograde));
        let always = SimplifiedEphemeris::new(1.5).positions(J2000, &mut rng);
        assert!(always.iter().all(|p| p.retrograde));
    }
}
