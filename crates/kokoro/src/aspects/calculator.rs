use crate::aspects::types::{Aspect, AspectKind, AspectMatch, OrbTable};
use crate::ephemeris::{normalize_degrees, PlanetPosition};

/// Deviation at or below which an aspect counts as exact
const EXACT_ORB: f64 = 1.0;

/// Smallest angle between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Every aspect whose orb admits the separation between two longitudes.
///
/// Depends only on the unsigned separation, so swapping the arguments yields
/// the same matches.
pub fn aspects_between(lon1: f64, lon2: f64, orbs: &OrbTable) -> Vec<AspectMatch> {
    let separation = angular_separation(lon1, lon2);
    AspectKind::ALL
        .iter()
        .filter_map(|&kind| {
            let orb = (separation - kind.angle()).abs();
            (orb <= orbs.orb(kind)).then_some(AspectMatch {
                kind,
                orb,
                exact: orb <= EXACT_ORB,
            })
        })
        .collect()
}

/// Aspect calculator
pub struct AspectCalculator {
    orbs: OrbTable,
}

impl AspectCalculator {
    pub fn new(orbs: OrbTable) -> Self {
        Self { orbs }
    }

    /// Aspects between every pair of bodies, in the order the bodies are given.
    pub fn compute(&self, planets: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];
                for matched in aspects_between(p1.longitude, p2.longitude, &self.orbs) {
                    aspects.push(Aspect {
                        from: p1.planet,
                        to: p2.planet,
                        kind: matched.kind,
                        local_name: matched.kind.local_name().to_string(),
                        symbol: matched.kind.symbol().to_string(),
                        orb: matched.orb,
                        exact: matched.exact,
                    });
                }
            }
        }
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new(OrbTable::default())
    }
}
