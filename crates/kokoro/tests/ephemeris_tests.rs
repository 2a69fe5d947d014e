use chrono::NaiveDate;
use kokoro::ephemeris::{
    julian_day, local_sidereal_time, Ephemeris, Planet, SimplifiedEphemeris, J2000,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_julian_day_j2000_anchor() {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert!((julian_day(&epoch) - 2_451_545.0).abs() < 1e-9);
}

#[test]
fn test_julian_day_counts_days() {
    let a = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let b = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    // Dec 31 -> Mar 1 across a leap February
    assert_eq!(julian_day(&b) - julian_day(&a), 61.0);
}

#[test]
fn test_positions_normalised_over_centuries() {
    let eph = SimplifiedEphemeris::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut jd = J2000 - 36_525.0;
    while jd < J2000 + 36_525.0 {
        let positions = eph.positions(jd, &mut rng);
        assert_eq!(positions.len(), Planet::ALL.len());
        for (pos, planet) in positions.iter().zip(Planet::ALL) {
            assert_eq!(pos.planet, planet);
            assert!((0.0..360.0).contains(&pos.longitude), "{:?} {}", planet, pos.longitude);
            assert_eq!(pos.latitude, 0.0);
        }
        jd += 97.3;
    }
}

#[test]
fn test_sidereal_time_normalised() {
    let mut jd = J2000 - 10_000.0;
    while jd < J2000 + 10_000.0 {
        for lon in [-180.0, -0.5, 0.0, 135.0, 180.0] {
            let lst = local_sidereal_time(jd, lon);
            assert!((0.0..360.0).contains(&lst));
        }
        jd += 13.37;
    }
}

#[test]
fn test_retrograde_share_near_probability() {
    let eph = SimplifiedEphemeris::default();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut flagged = 0;
    let mut total = 0;
    for day in 0..2000 {
        for pos in eph.positions(J2000 + day as f64, &mut rng) {
            flagged += pos.retrograde as usize;
            total += 1;
        }
    }
    let share = flagged as f64 / total as f64;
    assert!((share - 0.2).abs() < 0.02, "{}", share);
    assert!(eph.is_approximate());
}
