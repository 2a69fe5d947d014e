//! Horoscope readings and simplified natal charts.
//!
//! Sign resolution and reading synthesis live in [`zodiac`] and [`reading`];
//! chart geometry lives in [`ephemeris`], [`houses`], [`aspects`] and
//! [`chart`]. Moon and rising signs, house cusps and retrograde flags are
//! entertainment-grade approximations, not ephemeris results.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod fortune;
pub mod houses;
pub mod reading;
pub mod seed;
pub mod zodiac;

pub use chart::{calculate_natal_chart, ChartError, ChartParams, ChartSettings, NatalChart};
pub use fortune::{daily_fortune, DailyFortune};
pub use reading::{analyze_horoscope, HoroscopeResult, ReadingSettings};
pub use seed::SeedPolicy;
pub use zodiac::{resolve_moon_sign, resolve_rising_sign, resolve_sun_sign, ZodiacSign};
