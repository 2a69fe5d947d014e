pub mod resolver;
pub mod types;

pub use resolver::{place_hash, resolve_moon_sign, resolve_rising_sign, resolve_sun_sign};
pub use types::{Element, LuckyAttributes, Quality, SignProfile, ZodiacSign};
