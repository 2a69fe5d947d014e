//! Seeding for every pseudo-random choice in a reading or chart.
//!
//! Randomness is always injected as a [`ChaCha8Rng`]. With the default
//! [`SeedPolicy::Birth`] the seed is a SHA-256 digest of the birth data, so the
//! same person always gets the same reading.

use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Derived from the birth moment and place
    #[default]
    Birth,
    /// Fixed seed, independent of input
    Fixed(u64),
    /// Fresh OS entropy on every call; re-reads vary
    Entropy,
}

/// Stable 32-byte seed for a birth moment, place and purpose.
///
/// `purpose` separates streams so a reading and a chart for the same person
/// do not consume identical random sequences.
pub fn birth_seed(birth: &NaiveDateTime, place: &str, purpose: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(purpose.as_bytes());
    hasher.update([0u8]);
    hasher.update(birth.format("%Y-%m-%dT%H:%M:%S").to_string().as_bytes());
    hasher.update([0u8]);
    hasher.update(place.trim().as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&hasher.finalize());
    seed
}

impl SeedPolicy {
    pub fn rng(self, birth: &NaiveDateTime, place: &str, purpose: &str) -> ChaCha8Rng {
        match self {
            SeedPolicy::Birth => ChaCha8Rng::from_seed(birth_seed(birth, place, purpose)),
            SeedPolicy::Fixed(seed) => ChaCha8Rng::seed_from_u64(seed),
            SeedPolicy::Entropy => ChaCha8Rng::from_entropy(),
        }
    }
}
