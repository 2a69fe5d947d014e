use chrono::{NaiveDate, NaiveDateTime};
use kokoro::reading::{analyze_horoscope, synthesize_dimensions, ReadingSettings};
use kokoro::zodiac::{resolve_rising_sign, ZodiacSign};
use kokoro::SeedPolicy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn birth(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 15, 0)
        .unwrap()
}

#[test]
fn test_dimensions_always_within_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for sun in ZodiacSign::ALL {
        for moon in ZodiacSign::ALL {
            for rising in [ZodiacSign::Aries, ZodiacSign::Taurus, ZodiacSign::Gemini, ZodiacSign::Pisces] {
                for _ in 0..10 {
                    let dims = synthesize_dimensions(sun, moon, rising, &mut rng);
                    for score in [dims.love, dims.career, dims.wealth, dims.interpersonal] {
                        assert!((20..=95).contains(&score), "{:?}", dims);
                    }
                }
            }
        }
    }
}

#[test]
fn test_triple_earth_wealth_saturates() {
    // 110 +/- 10 always clamps to the ceiling
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..200 {
        let dims = synthesize_dimensions(
            ZodiacSign::Taurus,
            ZodiacSign::Virgo,
            ZodiacSign::Capricorn,
            &mut rng,
        );
        assert_eq!(dims.wealth, 95);
        assert!((40..=60).contains(&dims.love));
    }
}

#[test]
fn test_birth_seed_reading_is_reproducible() {
    let settings = ReadingSettings::default();
    let a = analyze_horoscope(&birth(1990, 7, 4, 6), "Yokohama", &settings);
    let b = analyze_horoscope(&birth(1990, 7, 4, 6), "Yokohama", &settings);
    assert_eq!(a.dimensions, b.dimensions);
    assert_eq!(a.personality.description, b.personality.description);
    assert_eq!(a.personality.rarity, b.personality.rarity);
    assert_eq!(a.daily_advice.lucky_color, b.daily_advice.lucky_color);
}

#[test]
fn test_reading_resolves_three_roles() {
    let settings = ReadingSettings {
        seed: SeedPolicy::Fixed(1),
    };
    let result = analyze_horoscope(&birth(1990, 7, 4, 6), "Yokohama", &settings);
    assert_eq!(result.sun, ZodiacSign::Cancer);
    // ordinal 185 -> 185 * 12 / 365 = 6
    assert_eq!(result.moon, ZodiacSign::Libra);
    assert_eq!(result.rising, resolve_rising_sign(6, "Yokohama"));
    assert_eq!(result.personality.title, format!("Sun in Cancer, Moon in Libra, {} Rising", result.rising));
    assert!((2.0..=17.0).contains(&result.personality.rarity));
    assert!(ZodiacSign::Cancer
        .profile()
        .lucky
        .colors
        .contains(&result.daily_advice.lucky_color.as_str()));
}

#[test]
fn test_entropy_policy_still_bounded() {
    let settings = ReadingSettings {
        seed: SeedPolicy::Entropy,
    };
    for _ in 0..20 {
        let result = analyze_horoscope(&birth(1985, 2, 28, 23), "Nagoya", &settings);
        assert_eq!(result.sun, ZodiacSign::Pisces);
        assert!((20..=95).contains(&result.dimensions.love));
    }
}

#[test]
fn test_result_serializes() {
    let result = analyze_horoscope(&birth(2000, 1, 1, 0), "Kobe", &ReadingSettings::default());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["sun"], "capricorn");
    assert!(json["dailyAdvice"]["luckyColor"].is_string());
}
