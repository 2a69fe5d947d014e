use crate::seed::SeedPolicy;
use crate::zodiac::{Element, ZodiacSign};
use serde::{Deserialize, Serialize};

/// Four fortune scores, each an integer in [20, 95].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityDimensions {
    pub love: u8,
    pub career: u8,
    pub wealth: u8,
    pub interpersonal: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityNarrative {
    pub title: String,
    pub description: String,
    /// Share of people said to have this combination, in percent (2.0-17.0)
    pub rarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitBundle {
    /// How others see you (rising sign)
    pub surface: String,
    /// Who you are inside (moon sign)
    pub inner: String,
    /// Latent talent (sun sign)
    pub hidden: String,
    pub compatible: Vec<Element>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAdvice {
    pub suggestion: String,
    #[serde(rename = "luckyFood")]
    pub lucky_food: String,
    #[serde(rename = "luckyColor")]
    pub lucky_color: String,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoroscopeResult {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: ZodiacSign,
    pub personality: PersonalityNarrative,
    pub dimensions: PersonalityDimensions,
    pub traits: TraitBundle,
    #[serde(rename = "dailyAdvice")]
    pub daily_advice: DailyAdvice,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReadingSettings {
    pub seed: SeedPolicy,
}
