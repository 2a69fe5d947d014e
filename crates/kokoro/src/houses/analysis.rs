use crate::ephemeris::{Planet, PlanetPosition};
use crate::houses::types::House;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseAnalysis {
    pub house: House,
    pub description: String,
    pub influence: String,
    pub advice: String,
}

const QUIET_INFLUENCE: &str = "This area of life develops along its natural course.";
const QUIET_ADVICE: &str = "Move forward while keeping things in balance.";

/// Reading for one house given the chart's planet placements.
///
/// Advice is keyed on the most significant resident: Sun, then Moon, then
/// Saturn.
pub fn analyze_house(house: House, planets: &[PlanetPosition]) -> HouseAnalysis {
    let residents: Vec<Planet> = planets
        .iter()
        .filter(|p| p.house == house)
        .map(|p| p.planet)
        .collect();

    let (influence, advice) = if residents.is_empty() {
        (QUIET_INFLUENCE.to_string(), QUIET_ADVICE.to_string())
    } else {
        let names = residents
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ");
        let influence = format!(
            "Through the influence of {}, this area carries special weight in your life.",
            names
        );
        let advice = if residents.contains(&Planet::Sun) {
            "This area is a central theme of your life. Take it on actively."
        } else if residents.contains(&Planet::Moon) {
            "Emotional fulfilment comes from this area. Trust your intuition."
        } else if residents.contains(&Planet::Saturn) {
            "Steady work over time here brings great results."
        } else {
            QUIET_ADVICE
        };
        (influence, advice.to_string())
    };

    HouseAnalysis {
        house,
        description: house.description().to_string(),
        influence,
        advice,
    }
}
