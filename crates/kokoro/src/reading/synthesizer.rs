//! Fortune score synthesis from the sun/moon/rising elements.

use crate::reading::types::PersonalityDimensions;
use crate::zodiac::{Element, ZodiacSign};
use rand::Rng;

const BASE_SCORE: f64 = 50.0;
pub const MIN_SCORE: u8 = 20;
pub const MAX_SCORE: u8 = 95;
/// Jitter is drawn uniformly from [-JITTER, JITTER)
const JITTER: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
struct RawScores {
    love: f64,
    career: f64,
    wealth: f64,
    interpersonal: f64,
}

impl RawScores {
    fn add_element(&mut self, element: Element) {
        match element {
            Element::Fire => {
                self.love += 15.0;
                self.career += 10.0;
            }
            Element::Earth => {
                self.wealth += 20.0;
                self.career += 15.0;
            }
            Element::Air => {
                self.interpersonal += 18.0;
            }
            Element::Water => {
                self.love += 12.0;
                self.interpersonal += 10.0;
            }
        }
    }
}

/// Clamp then round a jittered score into [MIN_SCORE, MAX_SCORE].
fn finish(score: f64) -> u8 {
    score.clamp(MIN_SCORE as f64, MAX_SCORE as f64).round() as u8
}

/// Scores before jitter, useful for explaining a reading.
pub fn element_scores(signs: [ZodiacSign; 3]) -> [f64; 4] {
    let mut raw = RawScores {
        love: BASE_SCORE,
        career: BASE_SCORE,
        wealth: BASE_SCORE,
        interpersonal: BASE_SCORE,
    };
    for sign in signs {
        raw.add_element(sign.element());
    }
    [raw.love, raw.career, raw.wealth, raw.interpersonal]
}

pub fn synthesize_dimensions<R: Rng>(
    sun: ZodiacSign,
    moon: ZodiacSign,
    rising: ZodiacSign,
    rng: &mut R,
) -> PersonalityDimensions {
    let [love, career, wealth, interpersonal] = element_scores([sun, moon, rising]);
    let mut jittered = |score: f64| finish(score + rng.gen_range(-JITTER..JITTER));
    PersonalityDimensions {
        love: jittered(love),
        career: jittered(career),
        wealth: jittered(wealth),
        interpersonal: jittered(interpersonal),
    }
}
