//! Zodiac sign table.
//!
//! Twelve signs in tropical order, each with a static profile. The enum is the
//! only way to reach a profile, so the table can never be indexed out of range.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    /// Elements traditionally considered harmonious with this one (itself first).
    pub fn compatible(self) -> [Element; 2] {
        match self {
            Element::Fire => [Element::Fire, Element::Air],
            Element::Earth => [Element::Earth, Element::Water],
            Element::Air => [Element::Air, Element::Fire],
            Element::Water => [Element::Water, Element::Earth],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Serialize)]
pub struct LuckyAttributes {
    pub colors: &'static [&'static str],
    pub numbers: &'static [u8],
    pub stones: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SignProfile {
    /// Localized (Japanese) name
    pub name: &'static str,
    #[serde(rename = "nameEn")]
    pub name_en: &'static str,
    pub element: Element,
    pub quality: Quality,
    pub ruler: &'static str,
    pub symbol: &'static str,
    #[serde(rename = "dateRange")]
    pub date_range: &'static str,
    pub traits: &'static [&'static str],
    pub lucky: LuckyAttributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index` in declaration order, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Sign occupying an ecliptic longitude (30 degrees per sign from 0 Aries).
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = crate::ephemeris::normalize_degrees(longitude);
        Self::from_index((normalized / 30.0).floor() as usize)
    }

    pub fn element(self) -> Element {
        self.profile().element
    }

    pub fn quality(self) -> Quality {
        self.profile().quality
    }

    pub fn profile(self) -> &'static SignProfile {
        match self {
            ZodiacSign::Aries => &ARIES,
            ZodiacSign::Taurus => &TAURUS,
            ZodiacSign::Gemini => &GEMINI,
            ZodiacSign::Cancer => &CANCER,
            ZodiacSign::Leo => &LEO,
            ZodiacSign::Virgo => &VIRGO,
            ZodiacSign::Libra => &LIBRA,
            ZodiacSign::Scorpio => &SCORPIO,
            ZodiacSign::Sagittarius => &SAGITTARIUS,
            ZodiacSign::Capricorn => &CAPRICORN,
            ZodiacSign::Aquarius => &AQUARIUS,
            ZodiacSign::Pisces => &PISCES,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.profile().name_en)
    }
}

static ARIES: SignProfile = SignProfile {
    name: "牡羊座",
    name_en: "Aries",
    element: Element::Fire,
    quality: Quality::Cardinal,
    ruler: "Mars",
    symbol: "♈",
    date_range: "3/21 - 4/19",
    traits: &["passionate", "driven", "brave", "frank", "natural leader"],
    lucky: LuckyAttributes {
        colors: &["red", "orange"],
        numbers: &[1, 8, 17],
        stones: &["ruby", "garnet"],
    },
};

static TAURUS: SignProfile = SignProfile {
    name: "牡牛座",
    name_en: "Taurus",
    element: Element::Earth,
    quality: Quality::Fixed,
    ruler: "Venus",
    symbol: "♉",
    date_range: "4/20 - 5/20",
    traits: &["seeks stability", "realistic", "stubborn", "eye for beauty", "patient"],
    lucky: LuckyAttributes {
        colors: &["green", "pink"],
        numbers: &[2, 6, 24],
        stones: &["emerald", "rose quartz"],
    },
};

static GEMINI: SignProfile = SignProfile {
    name: "双子座",
    name_en: "Gemini",
    element: Element::Air,
    quality: Quality::Mutable,
    ruler: "Mercury",
    symbol: "♊",
    date_range: "5/21 - 6/20",
    traits: &["curious", "dexterous", "good communicator", "loves change", "versatile"],
    lucky: LuckyAttributes {
        colors: &["yellow", "silver"],
        numbers: &[3, 12, 21],
        stones: &["crystal", "agate"],
    },
};

static CANCER: SignProfile = SignProfile {
    name: "蟹座",
    name_en: "Cancer",
    element: Element::Water,
    quality: Quality::Cardinal,
    ruler: "Moon",
    symbol: "♋",
    date_range: "6/21 - 7/22",
    traits: &["sensitive", "family-minded", "intuitive", "emotional", "caring"],
    lucky: LuckyAttributes {
        colors: &["white", "silver"],
        numbers: &[4, 13, 22],
        stones: &["moonstone", "pearl"],
    },
};

static LEO: SignProfile = SignProfile {
    name: "獅子座",
    name_en: "Leo",
    element: Element::Fire,
    quality: Quality::Fixed,
    ruler: "Sun",
    symbol: "♌",
    date_range: "7/23 - 8/22",
    traits: &["confident", "generous", "dramatic", "creative", "charismatic"],
    lucky: LuckyAttributes {
        colors: &["gold", "orange"],
        numbers: &[5, 14, 23],
        stones: &["citrine", "amber"],
    },
};

static VIRGO: SignProfile = SignProfile {
    name: "乙女座",
    name_en: "Virgo",
    element: Element::Earth,
    quality: Quality::Mutable,
    ruler: "Mercury",
    symbol: "♍",
    date_range: "8/23 - 9/22",
    traits: &["perfectionist", "meticulous", "practical", "analytical", "helpful"],
    lucky: LuckyAttributes {
        colors: &["navy", "grey"],
        numbers: &[6, 15, 24],
        stones: &["sapphire", "tourmaline"],
    },
};

static LIBRA: SignProfile = SignProfile {
    name: "天秤座",
    name_en: "Libra",
    element: Element::Air,
    quality: Quality::Cardinal,
    ruler: "Venus",
    symbol: "♎",
    date_range: "9/23 - 10/22",
    traits: &["seeks harmony", "graceful", "indecisive", "sociable", "balanced"],
    lucky: LuckyAttributes {
        colors: &["pink", "light blue"],
        numbers: &[7, 16, 25],
        stones: &["rose quartz", "lapis lazuli"],
    },
};

static SCORPIO: SignProfile = SignProfile {
    name: "蠍座",
    name_en: "Scorpio",
    element: Element::Water,
    quality: Quality::Fixed,
    ruler: "Pluto",
    symbol: "♏",
    date_range: "10/23 - 11/21",
    traits: &["mysterious", "passionate", "intuitive", "possessive", "perceptive"],
    lucky: LuckyAttributes {
        colors: &["crimson", "black"],
        numbers: &[8, 17, 26],
        stones: &["obsidian", "ruby"],
    },
};

static SAGITTARIUS: SignProfile = SignProfile {
    name: "射手座",
    name_en: "Sagittarius",
    element: Element::Fire,
    quality: Quality::Mutable,
    ruler: "Jupiter",
    symbol: "♐",
    date_range: "11/22 - 12/21",
    traits: &["freedom-loving", "optimistic", "adventurous", "philosophical", "frank"],
    lucky: LuckyAttributes {
        colors: &["purple", "turquoise"],
        numbers: &[9, 18, 27],
        stones: &["turquoise", "amethyst"],
    },
};

static CAPRICORN: SignProfile = SignProfile {
    name: "山羊座",
    name_en: "Capricorn",
    element: Element::Earth,
    quality: Quality::Cardinal,
    ruler: "Saturn",
    symbol: "♑",
    date_range: "12/22 - 1/19",
    traits: &["ambitious", "realistic", "patient", "responsible", "traditional"],
    lucky: LuckyAttributes {
        colors: &["brown", "black"],
        numbers: &[10, 19, 28],
        stones: &["garnet", "obsidian"],
    },
};

static AQUARIUS: SignProfile = SignProfile {
    name: "水瓶座",
    name_en: "Aquarius",
    element: Element::Air,
    quality: Quality::Fixed,
    ruler: "Uranus",
    symbol: "♒",
    date_range: "1/20 - 2/18",
    traits: &["independent", "innovative", "humanitarian", "rational", "individualistic"],
    lucky: LuckyAttributes {
        colors: &["blue", "silver"],
        numbers: &[11, 20, 29],
        stones: &["amethyst", "aquamarine"],
    },
};

static PISCES: SignProfile = SignProfile {
    name: "魚座",
    name_en: "Pisces",
    element: Element::Water,
    quality: Quality::Mutable,
    ruler: "Neptune",
    symbol: "♓",
    date_range: "2/19 - 3/20",
    traits: &["dreamy", "empathetic", "artistic", "intuitive", "delicate"],
    lucky: LuckyAttributes {
        colors: &["sea green", "purple"],
        numbers: &[12, 21, 30],
        stones: &["aquamarine", "moonstone"],
    },
};
