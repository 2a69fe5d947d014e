use crate::ephemeris::Planet;
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};

/// Serialized as its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub const ALL: [House; 12] = [
        House::First,
        House::Second,
        House::Third,
        House::Fourth,
        House::Fifth,
        House::Sixth,
        House::Seventh,
        House::Eighth,
        House::Ninth,
        House::Tenth,
        House::Eleventh,
        House::Twelfth,
    ];

    /// 1-based house number.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<House> {
        match number {
            1..=12 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            House::First => "First House",
            House::Second => "Second House",
            House::Third => "Third House",
            House::Fourth => "Fourth House",
            House::Fifth => "Fifth House",
            House::Sixth => "Sixth House",
            House::Seventh => "Seventh House",
            House::Eighth => "Eighth House",
            House::Ninth => "Ninth House",
            House::Tenth => "Tenth House",
            House::Eleventh => "Eleventh House",
            House::Twelfth => "Twelfth House",
        }
    }

    /// Localized (Japanese) name
    pub fn local_name(self) -> &'static str {
        match self {
            House::First => "第1宮（アセンダント）",
            House::Second => "第2宮（物質・価値観）",
            House::Third => "第3宮（コミュニケーション）",
            House::Fourth => "第4宮（家庭・ルーツ）",
            House::Fifth => "第5宮（創造・恋愛）",
            House::Sixth => "第6宮（健康・奉仕）",
            House::Seventh => "第7宮（パートナーシップ）",
            House::Eighth => "第8宮（変容・共有財産）",
            House::Ninth => "第9宮（高等教育・哲学）",
            House::Tenth => "第10宮（キャリア・社会的地位）",
            House::Eleventh => "第11宮（友人・希望）",
            House::Twelfth => "第12宮（潜在意識・霊性）",
        }
    }

    pub fn theme(self) -> &'static str {
        match self {
            House::First => "self, appearance, first impressions",
            House::Second => "possessions, values, talents",
            House::Third => "intellect, learning, siblings",
            House::Fourth => "family, home, emotional foundation",
            House::Fifth => "romance, creativity, children",
            House::Sixth => "health, work, service",
            House::Seventh => "marriage, partners, open enemies",
            House::Eighth => "transformation, rebirth, inheritance",
            House::Ninth => "philosophy, religion, travel abroad",
            House::Tenth => "vocation, reputation, goals",
            House::Eleventh => "friends, groups, hopes for the future",
            House::Twelfth => "the unconscious, hidden matters, spirituality",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            House::First => "Your basic temperament, your appearance and the first impression you give. It shows how you approach life itself.",
            House::Second => "Your values, how you think about money, and the talents you were born with. It shows your approach to material comfort.",
            House::Third => "How you communicate and learn, your bond with siblings, and short journeys close to home.",
            House::Fourth => "Family ties, the place you grew up, your emotional footing and later life. It shows your roots and what sustains you.",
            House::Fifth => "Love affairs, creative expression, hobbies, children and speculation.",
            House::Sixth => "Your health, daily work, sense of service and relations with colleagues.",
            House::Seventh => "Spouses, business partners, open rivals and contracts. It holds the central themes of one-to-one relationships.",
            House::Eighth => "Great life changes, shared resources, inheritance, the deep psyche and the mysterious.",
            House::Ninth => "Higher education, religion, philosophy, foreign connections and long journeys. It shows spiritual growth.",
            House::Tenth => "Career, social standing, reputation and life goals. It shows the role you play in society.",
            House::Eleventh => "Friendships, the groups you belong to, hopes for the future and community work.",
            House::Twelfth => "The unconscious, hidden enemies, spirituality, karma and quiet service.",
        }
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.number()
    }
}

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        House::from_number(number).ok_or_else(|| format!("house number must be 1-12, got {}", number))
    }
}

/// One house of a computed chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseCusp {
    #[serde(rename = "number")]
    pub house: House,
    pub name: String,
    #[serde(rename = "localName")]
    pub local_name: String,
    pub theme: String,
    pub description: String,
    /// Cusp longitude in degrees (0-360)
    pub cusp: f64,
    /// Sign on the cusp
    pub sign: ZodiacSign,
    /// Bodies placed in this house
    pub planets: Vec<Planet>,
}
