//! Canned narrative text for a reading.

use crate::reading::types::{DailyAdvice, PersonalityNarrative, TraitBundle};
use crate::zodiac::ZodiacSign;
use rand::seq::SliceRandom;
use rand::Rng;

const DESCRIPTIONS: &[&str] = &[
    "An easy-going free spirit who keeps a pure, eternally youthful heart",
    "A perfectionist with reason and feeling in fine balance, always seeking inner harmony",
    "A dreamer of rich creativity who expresses life's beauty from a unique point of view",
    "A gentle yet steadfast guardian who finds special wonder in everyday life",
];

const SUGGESTIONS: &[&str] = &[
    "Try expressing your feelings honestly",
    "Hold on to a positive outlook",
    "Focus on the goal in front of you",
    "Reach out and talk with the people around you",
];

const LUCKY_FOODS: &[&str] = &["coffee", "green tea", "chocolate", "fruit", "nuts"];

const AVOID: &[&str] = &[
    "pushing yourself too hard",
    "emotional decisions",
    "impulse buying",
];

const HIDDEN_TALENT: &str = "A gift for travelling toward a distant ideal";

/// Lower bound of the rarity percentage
pub const MIN_RARITY: f64 = 2.0;
/// Upper bound of the rarity percentage
pub const MAX_RARITY: f64 = 17.0;

fn pick<R: Rng>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn describe_personality<R: Rng>(
    sun: ZodiacSign,
    moon: ZodiacSign,
    rising: ZodiacSign,
    rng: &mut R,
) -> PersonalityNarrative {
    let title = format!("Sun in {}, Moon in {}, {} Rising", sun, moon, rising);
    let description = pick(DESCRIPTIONS, rng).to_string();
    let rarity = ((rng.gen::<f64>() * (MAX_RARITY - MIN_RARITY) + MIN_RARITY) * 10.0).round() / 10.0;
    PersonalityNarrative {
        title,
        description,
        rarity,
    }
}

fn surface_trait(rising: ZodiacSign) -> &'static str {
    match rising {
        ZodiacSign::Aries => "Light as a cloud, as if nothing could touch you",
        ZodiacSign::Taurus => "A steady presence people rely on",
        ZodiacSign::Gemini => "A quick-witted, socially gifted companion",
        ZodiacSign::Cancer => "A warm and caring protector",
        ZodiacSign::Leo => "A confident centre of attention",
        ZodiacSign::Virgo => "Careful attention to every detail",
        ZodiacSign::Libra => "Refined taste and a love of harmony",
        ZodiacSign::Scorpio => "A mysterious, perceptive observer",
        ZodiacSign::Sagittarius => "A free and open-hearted adventurer",
        ZodiacSign::Capricorn => "A dependable, responsible pragmatist",
        ZodiacSign::Aquarius => "A fiercely independent innovator",
        ZodiacSign::Pisces => "A romantic, dreamy artist",
    }
}

fn inner_trait(moon: ZodiacSign) -> &'static str {
    match moon {
        ZodiacSign::Aries => "Imagines everything and feels sure of knowing it all",
        ZodiacSign::Taurus => "Quietly longs for security and stability",
        ZodiacSign::Gemini => "A fast mind that thrives on change",
        ZodiacSign::Cancer => "Deep feelings and a wish to be understood",
        ZodiacSign::Leo => "A need to be recognised and praised",
        ZodiacSign::Virgo => "Aims for perfection but is hard on itself",
        ZodiacSign::Libra => "Seeks balance yet struggles to decide",
        ZodiacSign::Scorpio => "Intense emotion and strong attachment",
        ZodiacSign::Sagittarius => "A yearning for freedom and discovery",
        ZodiacSign::Capricorn => "Strong drive to improve and achieve",
        ZodiacSign::Aquarius => "Thinks independently but wants to be understood",
        ZodiacSign::Pisces => "Rich imagination and deep empathy",
    }
}

pub fn describe_traits(sun: ZodiacSign, moon: ZodiacSign, rising: ZodiacSign) -> TraitBundle {
    TraitBundle {
        surface: surface_trait(rising).to_string(),
        inner: inner_trait(moon).to_string(),
        hidden: HIDDEN_TALENT.to_string(),
        compatible: sun.element().compatible().to_vec(),
    }
}

/// Advice of the day; the lucky colour comes from the sun sign's palette.
pub fn daily_advice<R: Rng>(sun: ZodiacSign, rng: &mut R) -> DailyAdvice {
    DailyAdvice {
        suggestion: pick(SUGGESTIONS, rng).to_string(),
        lucky_food: pick(LUCKY_FOODS, rng).to_string(),
        lucky_color: pick(sun.profile().lucky.colors, rng).to_string(),
        avoid: AVOID.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Element;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rarity_bounds_and_precision() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let n = describe_personality(ZodiacSign::Leo, ZodiacSign::Leo, ZodiacSign::Leo, &mut rng);
            assert!((MIN_RARITY..=MAX_RARITY).contains(&n.rarity), "{}", n.rarity);
            assert!(((n.rarity * 10.0).round() - n.rarity * 10.0).abs() < 1e-9);
            assert!(DESCRIPTIONS.contains(&n.description.as_str()));
        }
    }

    #[test]
    fn test_traits_follow_roles() {
        let bundle = describe_traits(ZodiacSign::Cancer, ZodiacSign::Leo, ZodiacSign::Gemini);
        assert_eq!(bundle.surface, surface_trait(ZodiacSign::Gemini));
        assert_eq!(bundle.inner, inner_trait(ZodiacSign::Leo));
        assert_eq!(bundle.compatible, vec![Element::Water, Element::Earth]);
    }

    #[test]
    fn test_lucky_color_from_sun_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let advice = daily_advice(ZodiacSign::Scorpio, &mut rng);
            assert!(ZodiacSign::Scorpio
                .profile()
                .lucky
                .colors
                .contains(&advice.lucky_color.as_str()));
            assert_eq!(advice.avoid.len(), 3);
        }
    }
}
