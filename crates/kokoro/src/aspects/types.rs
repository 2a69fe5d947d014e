use crate::ephemeris::Planet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
}

impl AspectKind {
    pub const ALL: [AspectKind; 6] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
        AspectKind::Quincunx,
    ];

    /// Exact angle for this aspect in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Quincunx => 150.0,
        }
    }

    pub fn default_orb(self) -> f64 {
        match self {
            AspectKind::Conjunction
            | AspectKind::Opposition
            | AspectKind::Trine
            | AspectKind::Square => 8.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Quincunx => 3.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
            AspectKind::Quincunx => "Quincunx",
        }
    }

    /// Localized (Japanese) name
    pub fn local_name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "合",
            AspectKind::Opposition => "衝",
            AspectKind::Trine => "トライン",
            AspectKind::Square => "スクエア",
            AspectKind::Sextile => "セクスタイル",
            AspectKind::Quincunx => "クインカンクス",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Opposition => "☍",
            AspectKind::Trine => "△",
            AspectKind::Square => "□",
            AspectKind::Sextile => "⚹",
            AspectKind::Quincunx => "⚻",
        }
    }
}

/// Orb tolerance per aspect kind. Kinds without an override use their default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbTable {
    overrides: HashMap<AspectKind, f64>,
}

impl OrbTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        self.set(kind, orb);
        self
    }

    pub fn set(&mut self, kind: AspectKind, orb: f64) {
        self.overrides.insert(kind, orb.max(0.0));
    }

    pub fn orb(&self, kind: AspectKind) -> f64 {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_orb())
    }
}

/// One aspect a separation satisfies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Deviation from the exact angle in degrees
    pub orb: f64,
    /// Within one degree of exact
    pub exact: bool,
}

/// An aspect between two bodies of a chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aspect {
    pub from: Planet,
    pub to: Planet,
    pub kind: AspectKind,
    #[serde(rename = "localName")]
    pub local_name: String,
    pub symbol: String,
    pub orb: f64,
    pub exact: bool,
}
