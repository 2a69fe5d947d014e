//! Calendar and sidereal time conversions.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000: f64 = 2_451_545.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Map any angle onto [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Degree within the 30-degree sign containing `longitude`.
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

/// Julian day for a proleptic Gregorian date-time in Universal Time.
pub fn julian_day(ut: &NaiveDateTime) -> f64 {
    let year = ut.year() as i64;
    let month = ut.month() as i64;
    let day = ut.day() as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let day_number = day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    let hours = ut.hour() as f64 + ut.minute() as f64 / 60.0 + ut.second() as f64 / 3600.0;
    day_number as f64 + (hours - 12.0) / 24.0
}

/// Julian centuries elapsed since J2000.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees, normalised.
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let gst = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(gst)
}

/// Local sidereal time in degrees for an east-positive geographic longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_time(jd) + longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_julian_day_j2000() {
        assert_eq!(julian_day(&at(2000, 1, 1, 12, 0)), J2000);
    }

    #[test]
    fn test_julian_day_midnight_is_half_day() {
        assert_eq!(julian_day(&at(2000, 1, 1, 0, 0)), 2_451_544.5);
    }

    #[test]
    fn test_julian_day_reference_dates() {
        // Sputnik launch, Meeus example 7.a
        let jd = julian_day(&at(1957, 10, 4, 19, 26));
        assert!((jd - 2_436_116.31).abs() < 0.01, "{}", jd);
        assert_eq!(julian_day(&at(1987, 1, 27, 0, 0)), 2_446_822.5);
    }

    #[test]
    fn test_gst_at_epoch() {
        let gst = greenwich_sidereal_time(J2000);
        assert!((gst - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn test_local_sidereal_time_normalised() {
        for lon in [-180.0, -74.0, 0.0, 139.69, 180.0] {
            let lst = local_sidereal_time(J2000 + 1234.56, lon);
            assert!((0.0..360.0).contains(&lst), "{}", lst);
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }
}
