pub mod narrative;
pub mod synthesizer;
pub mod types;

pub use narrative::{daily_advice, describe_personality, describe_traits};
pub use synthesizer::{element_scores, synthesize_dimensions};
pub use types::{
    DailyAdvice, HoroscopeResult, PersonalityDimensions, PersonalityNarrative, ReadingSettings,
    TraitBundle,
};

use crate::zodiac::{resolve_moon_sign, resolve_rising_sign, resolve_sun_sign};
use chrono::{NaiveDateTime, Timelike};

/// Full sun/moon/rising reading for a local birth moment and place.
pub fn analyze_horoscope(
    birth: &NaiveDateTime,
    place: &str,
    settings: &ReadingSettings,
) -> HoroscopeResult {
    let mut rng = settings.seed.rng(birth, place, "reading");

    let sun = resolve_sun_sign(birth);
    let moon = resolve_moon_sign(birth);
    let rising = resolve_rising_sign(birth.hour(), place);

    let personality = describe_personality(sun, moon, rising, &mut rng);
    let dimensions = synthesize_dimensions(sun, moon, rising, &mut rng);
    let traits = describe_traits(sun, moon, rising);
    let daily_advice = daily_advice(sun, &mut rng);

    log::debug!(
        "reading for {}: sun={} moon={} rising={} dims={:?}",
        birth,
        sun,
        moon,
        rising,
        dimensions
    );

    HoroscopeResult {
        sun,
        moon,
        rising,
        personality,
        dimensions,
        traits,
        daily_advice,
    }
}
