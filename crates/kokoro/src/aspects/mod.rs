pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, aspects_between, AspectCalculator};
pub use types::{Aspect, AspectKind, AspectMatch, OrbTable};
