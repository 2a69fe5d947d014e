//! Fortune of the day, layered on a finished reading.
//!
//! Scores are drawn from the injected RNG. Lucky time, direction, number and
//! the time to avoid rotate with a calendar-derived day seed, so they are the
//! same for everyone on a given date.

use crate::reading::HoroscopeResult;
use crate::zodiac::{Element, ZodiacSign};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

const LUCKY_TIMES: [&str; 3] = ["6:00-8:00", "12:00-14:00", "18:00-20:00"];
const LUCKY_DIRECTIONS: [&str; 6] = ["east", "west", "south", "north", "northeast", "southwest"];
const AVOID_TIMES: [&str; 3] = ["2:00-4:00", "15:00-17:00", "21:00-23:00"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneAdvice {
    pub general: String,
    pub love: String,
    pub career: String,
    pub wealth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFortune {
    pub date: NaiveDate,
    pub overall: u8,
    pub love: u8,
    pub career: u8,
    pub wealth: u8,
    pub health: u8,
    #[serde(rename = "luckyTime")]
    pub lucky_time: String,
    #[serde(rename = "luckyDirection")]
    pub lucky_direction: String,
    #[serde(rename = "luckyNumber")]
    pub lucky_number: u8,
    #[serde(rename = "avoidTime")]
    pub avoid_time: String,
    pub advice: FortuneAdvice,
}

/// `day + zero_based_month * 31`
pub fn day_seed(date: &NaiveDate) -> usize {
    date.day() as usize + date.month0() as usize * 31
}

pub fn daily_fortune<R: Rng>(reading: &HoroscopeResult, today: NaiveDate, rng: &mut R) -> DailyFortune {
    let seed = day_seed(&today);
    DailyFortune {
        date: today,
        overall: rng.gen_range(60..100),
        love: rng.gen_range(50..100),
        career: rng.gen_range(50..100),
        wealth: rng.gen_range(50..100),
        health: rng.gen_range(60..100),
        lucky_time: LUCKY_TIMES[seed % LUCKY_TIMES.len()].to_string(),
        lucky_direction: LUCKY_DIRECTIONS[seed % LUCKY_DIRECTIONS.len()].to_string(),
        lucky_number: (seed % 9 + 1) as u8,
        avoid_time: AVOID_TIMES[seed % AVOID_TIMES.len()].to_string(),
        advice: FortuneAdvice {
            general: general_advice(reading.sun).to_string(),
            love: love_advice(reading.moon).to_string(),
            career: career_advice(reading.rising).to_string(),
            wealth: wealth_advice(reading.sun.element()).to_string(),
        },
    }
}

fn general_advice(sun: ZodiacSign) -> &'static str {
    match sun {
        ZodiacSign::Aries => "A day for bold action. Try something new.",
        ZodiacSign::Taurus => "Keep a steady pace and don't overreach.",
        ZodiacSign::Gemini => "Communication is the key today. Engage with people.",
        ZodiacSign::Cancer => "Honour your feelings and spend time with those close to you.",
        ZodiacSign::Leo => "Act with confidence and your charm will shine.",
        ZodiacSign::Virgo => "Pay close attention. Careful work is the key to success.",
        ZodiacSign::Libra => "Stay balanced and make time for beautiful things.",
        ZodiacSign::Scorpio => "Trust your intuition and cherish deep connections.",
        ZodiacSign::Sagittarius => "Explore new possibilities with a free mind.",
        ZodiacSign::Capricorn => "Planned action leads to success. Advance steadily.",
        ZodiacSign::Aquarius => "Use your originality. A new idea is on its way.",
        ZodiacSign::Pisces => "Value intuition and imagination. Art brings luck.",
    }
}

fn love_advice(moon: ZodiacSign) -> &'static str {
    match moon {
        ZodiacSign::Aries => "A proactive approach lifts your love life.",
        ZodiacSign::Taurus => "Take time to truly understand the other person.",
        ZodiacSign::Gemini => "A fun conversation could spark romance.",
        ZodiacSign::Cancer => "Open your heart and say how you feel.",
        ZodiacSign::Leo => "Be yourself. Your charm shines today.",
        ZodiacSign::Virgo => "Consideration for your partner deepens the bond.",
        ZodiacSign::Libra => "Build a balanced relationship.",
        ZodiacSign::Scorpio => "A longing for a deep bond grows stronger.",
        ZodiacSign::Sagittarius => "A free and open relationship feels right.",
        ZodiacSign::Capricorn => "Your sincerity leaves a good impression.",
        ZodiacSign::Aquarius => "Romance may grow out of friendship.",
        ZodiacSign::Pisces => "Cherish a romantic mood.",
    }
}

fn career_advice(rising: ZodiacSign) -> &'static str {
    match rising {
        ZodiacSign::Aries => "A perfect chance to show leadership.",
        ZodiacSign::Taurus => "Your steady effort is likely to be recognised.",
        ZodiacSign::Gemini => "Focus on gathering information and building your network.",
        ZodiacSign::Cancer => "Teamwork lifts your work fortune.",
        ZodiacSign::Leo => "Creative work promises results.",
        ZodiacSign::Virgo => "Detailed work and analysis will be valued.",
        ZodiacSign::Libra => "You can shine as a mediator today.",
        ZodiacSign::Scorpio => "Use your focus on a difficult task.",
        ZodiacSign::Sagittarius => "Taking on a new field is favoured.",
        ZodiacSign::Capricorn => "Expect to do well in a position of responsibility.",
        ZodiacSign::Aquarius => "An innovative idea may find use at work.",
        ZodiacSign::Pisces => "Intuition fuels creative work.",
    }
}

fn wealth_advice(element: Element) -> &'static str {
    match element {
        Element::Fire => "Bold investment or a new source of income is favoured.",
        Element::Earth => "Save steadily and plan your spending.",
        Element::Air => "Put your research to use for smart purchases.",
        Element::Water => "Trusting your intuition with money is the key to success.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_seed() {
        assert_eq!(day_seed(&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 1);
        assert_eq!(day_seed(&NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()), 67);
    }
}
