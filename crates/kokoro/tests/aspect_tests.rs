use kokoro::aspects::{aspects_between, AspectCalculator, AspectKind, OrbTable};
use kokoro::ephemeris::{EclipticPosition, Planet, PlanetPosition};
use kokoro::houses::House;

fn at(planet: Planet, longitude: f64) -> PlanetPosition {
    let position = EclipticPosition {
        planet,
        longitude,
        latitude: 0.0,
        retrograde: false,
    };
    PlanetPosition::from_ecliptic(&position, House::First)
}

#[test]
fn test_calculate_aspect_conjunction() {
    let matches = aspects_between(100.0, 102.0, &OrbTable::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, AspectKind::Conjunction);
    assert!((matches[0].orb - 2.0).abs() < 1e-9);
    assert!(!matches[0].exact);
}

#[test]
fn test_calculate_aspect_opposition() {
    // 178 degrees apart
    let matches = aspects_between(100.0, 278.0, &OrbTable::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, AspectKind::Opposition);
}

#[test]
fn test_quincunx_uses_narrow_orb() {
    let hit = aspects_between(0.0, 152.5, &OrbTable::default());
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].kind, AspectKind::Quincunx);

    let miss = aspects_between(0.0, 154.0, &OrbTable::default());
    assert!(miss.is_empty());
}

#[test]
fn test_sextile_orb_boundary_inclusive() {
    let matches = aspects_between(0.0, 66.0, &OrbTable::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, AspectKind::Sextile);
    assert!(aspects_between(0.0, 66.5, &OrbTable::default()).is_empty());
}

#[test]
fn test_orb_override() {
    let orbs = OrbTable::new().with_orb(AspectKind::Conjunction, 1.0);
    assert!(aspects_between(10.0, 12.0, &orbs).is_empty());
    assert_eq!(orbs.orb(AspectKind::Trine), 8.0);
}

#[test]
fn test_aspects_symmetric() {
    let orbs = OrbTable::default();
    for i in 0..360 {
        let a = i as f64 * 1.7;
        let b = (i as f64 * 13.3) % 360.0;
        assert_eq!(aspects_between(a, b, &orbs), aspects_between(b, a, &orbs), "{} {}", a, b);
    }
}

#[test]
fn test_compute_pairs_in_planet_order() {
    let planets = vec![
        at(Planet::Sun, 100.0),
        at(Planet::Moon, 102.0),
        at(Planet::Mars, 220.0),
        at(Planet::Saturn, 10.0),
    ];
    let aspects = AspectCalculator::default().compute(&planets);

    let sun_moon = aspects
        .iter()
        .find(|a| a.from == Planet::Sun && a.to == Planet::Moon)
        .unwrap();
    assert_eq!(sun_moon.kind, AspectKind::Conjunction);
    assert_eq!(sun_moon.local_name, "合");
    assert_eq!(sun_moon.symbol, "☌");

    // Sun/Mars 120 exact trine; Moon/Mars 118
    assert!(aspects
        .iter()
        .any(|a| a.from == Planet::Sun && a.to == Planet::Mars && a.kind == AspectKind::Trine && a.exact));
    // Sun/Saturn 90 square
    assert!(aspects
        .iter()
        .any(|a| a.from == Planet::Sun && a.to == Planet::Saturn && a.kind == AspectKind::Square));

    for aspect in &aspects {
        let from = planets.iter().position(|p| p.planet == aspect.from).unwrap();
        let to = planets.iter().position(|p| p.planet == aspect.to).unwrap();
        assert!(from < to);
    }
}

#[test]
fn test_compute_single_planet_has_no_aspects() {
    let aspects = AspectCalculator::default().compute(&[at(Planet::Sun, 0.0)]);
    assert!(aspects.is_empty());
}
