pub mod analysis;
pub mod cusps;
pub mod types;

pub use analysis::{analyze_house, HouseAnalysis};
pub use cusps::{find_house, HouseScheme};
pub use types::{House, HouseCusp};
