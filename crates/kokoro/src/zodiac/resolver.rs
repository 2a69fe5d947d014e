//! Sun, moon and rising sign resolution.
//!
//! Only the sun sign follows published calendar boundaries. The moon and
//! rising signs are deterministic placeholders (day-of-year bucketing and a
//! place-name hash); no ephemeris is consulted.

use crate::zodiac::types::ZodiacSign;
use chrono::Datelike;

/// Last (month, day) of each sign's range, in calendar order starting from
/// Capricorn's January tail. A date belongs to the first entry whose end it
/// does not pass.
const SUN_SIGN_ENDS: &[(u32, u32, ZodiacSign)] = &[
    (1, 19, ZodiacSign::Capricorn),
    (2, 18, ZodiacSign::Aquarius),
    (3, 20, ZodiacSign::Pisces),
    (4, 19, ZodiacSign::Aries),
    (5, 20, ZodiacSign::Taurus),
    (6, 20, ZodiacSign::Gemini),
    (7, 22, ZodiacSign::Cancer),
    (8, 22, ZodiacSign::Leo),
    (9, 22, ZodiacSign::Virgo),
    (10, 22, ZodiacSign::Libra),
    (11, 21, ZodiacSign::Scorpio),
    (12, 21, ZodiacSign::Sagittarius),
];

/// Sun sign for a calendar date. Only month and day are consulted.
pub fn resolve_sun_sign<D: Datelike>(date: &D) -> ZodiacSign {
    let key = (date.month(), date.day());
    SUN_SIGN_ENDS
        .iter()
        .find(|(month, day, _)| key <= (*month, *day))
        .map(|(_, _, sign)| *sign)
        // Only Dec 22-31 get past the table; they start the Capricorn that
        // the first entry closes on Jan 19, so every date resolves.
        .unwrap_or(ZodiacSign::Capricorn)
}

/// Simulated moon sign: `floor(day_of_year * 12 / 365) mod 12`.
pub fn resolve_moon_sign<D: Datelike>(date: &D) -> ZodiacSign {
    let day_of_year = date.ordinal() as usize;
    ZodiacSign::from_index(day_of_year * 12 / 365)
}

/// Simulated rising sign: birth hour plus a hash of the birth place, mod 12.
pub fn resolve_rising_sign(hour: u32, place: &str) -> ZodiacSign {
    let index = (hour as u64 + place_hash(place)) % 12;
    ZodiacSign::from_index(index as usize)
}

/// `h = h * 31 + unit` over UTF-16 code units with 32-bit wrap-around,
/// returned as an absolute value.
pub fn place_hash(place: &str) -> u64 {
    let hash = place
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32));
    (hash as i64).unsigned_abs()
}
