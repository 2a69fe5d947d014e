use kokoro::aspects::{AspectKind, OrbTable};
use kokoro::houses::HouseScheme;
use kokoro::{ChartSettings, ReadingSettings, SeedPolicy};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Everything the CLI needs, resolved from `kokoro.toml`.
#[derive(Debug, Clone, Default)]
pub struct KokoroSettings {
    pub reading: ReadingSettings,
    pub chart: ChartSettings,
}

/// `seed = "birth"`, `seed = "entropy"` or `seed = 42`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SeedToml {
    Fixed(u64),
    Named(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ReadingToml {
    #[serde(default)]
    seed: Option<SeedToml>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartToml {
    #[serde(default)]
    seed: Option<SeedToml>,
    #[serde(default)]
    house_scheme: Option<String>,
    #[serde(default)]
    retrograde_probability: Option<f64>,
    #[serde(default)]
    orbs: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    reading: ReadingToml,
    #[serde(default)]
    chart: ChartToml,
}

/// Try common relative paths for `configs/kokoro.toml`.
pub fn read_kokoro_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/kokoro.toml", "../../configs/kokoro.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load kokoro.toml from {:?}", paths);
}

fn parse_seed(seed: SeedToml) -> anyhow::Result<SeedPolicy> {
    match seed {
        SeedToml::Fixed(n) => Ok(SeedPolicy::Fixed(n)),
        SeedToml::Named(name) => match name.trim().to_lowercase().as_str() {
            "birth" => Ok(SeedPolicy::Birth),
            "entropy" => Ok(SeedPolicy::Entropy),
            other => match other.parse::<u64>() {
                Ok(n) => Ok(SeedPolicy::Fixed(n)),
                Err(_) => anyhow::bail!(
                    "invalid seed {:?} (expected \"birth\", \"entropy\" or an integer)",
                    name
                ),
            },
        },
    }
}

fn parse_aspect_kind(name: &str) -> anyhow::Result<AspectKind> {
    AspectKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| anyhow::anyhow!("unknown aspect in chart.orbs: {}", name))
}

/// Parse settings from TOML text. Missing sections and keys keep their defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<KokoroSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kokoro.toml: {e}"))?;
    let RootConfigToml { reading, chart } = root;

    let mut settings = KokoroSettings::default();

    if let Some(seed) = reading.seed {
        settings.reading.seed = parse_seed(seed)?;
    }
    // Charts follow the reading policy unless overridden.
    settings.chart.seed = match chart.seed {
        Some(seed) => parse_seed(seed)?,
        None => settings.reading.seed,
    };

    if let Some(scheme) = chart.house_scheme {
        settings.chart.house_scheme = scheme
            .parse::<HouseScheme>()
            .map_err(|e| anyhow::anyhow!("chart.house_scheme: {e}"))?;
    }

    if let Some(p) = chart.retrograde_probability {
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!("chart.retrograde_probability must be within [0, 1], got {}", p);
        }
        settings.chart.retrograde_probability = p;
    }

    let mut orbs = OrbTable::new();
    for (name, orb) in chart.orbs {
        let kind = parse_aspect_kind(&name)?;
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("chart.orbs.{} must be a non-negative number, got {}", name, orb);
        }
        orbs.set(kind, orb);
    }
    settings.chart.orbs = orbs;

    Ok(settings)
}

/// Load settings from `path`, or from the default search list when `None`.
///
/// Without an explicit path a missing file is not an error: defaults are used.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<KokoroSettings> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?,
        None => match read_kokoro_toml_text() {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{e}; using default settings");
                return Ok(KokoroSettings::default());
            }
        },
    };
    parse_settings(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings.reading.seed, SeedPolicy::Birth);
        assert_eq!(settings.chart.seed, SeedPolicy::Birth);
        assert_eq!(settings.chart.house_scheme, HouseScheme::Simplified);
        assert_eq!(settings.chart.retrograde_probability, 0.2);
        assert_eq!(settings.chart.orbs.orb(AspectKind::Sextile), 6.0);
    }

    const SAMPLE: &str = include_str!("../../../configs/kokoro.toml");

    #[test]
    fn test_sample_config_parses() {
        let settings = parse_settings(SAMPLE).unwrap();
        assert_eq!(settings.reading.seed, SeedPolicy::Birth);
        assert_eq!(settings.chart.seed, SeedPolicy::Birth);
        assert_eq!(settings.chart.orbs.orb(AspectKind::Quincunx), 3.0);
    }

    #[test]
    fn test_sample_chart_seed_can_be_enabled() {
        assert!(SAMPLE.contains("# seed = \"birth\""));
        let enabled = SAMPLE.replace("# seed = \"birth\"", "seed = \"entropy\"");
        let settings = parse_settings(&enabled).unwrap();
        assert_eq!(settings.reading.seed, SeedPolicy::Birth);
        assert_eq!(settings.chart.seed, SeedPolicy::Entropy);
    }

    #[test]
    fn test_full_config() {
        let text = r#"
[reading]
seed = "entropy"

[chart]
seed = 7
house_scheme = "equal"
retrograde_probability = 0.0

[chart.orbs]
conjunction = 10.0
quincunx = 2
"#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.reading.seed, SeedPolicy::Entropy);
        assert_eq!(settings.chart.seed, SeedPolicy::Fixed(7));
        assert_eq!(settings.chart.house_scheme, HouseScheme::Equal);
        assert_eq!(settings.chart.retrograde_probability, 0.0);
        assert_eq!(settings.chart.orbs.orb(AspectKind::Conjunction), 10.0);
        assert_eq!(settings.chart.orbs.orb(AspectKind::Quincunx), 2.0);
        assert_eq!(settings.chart.orbs.orb(AspectKind::Trine), 8.0);
    }

    #[test]
    fn test_chart_seed_follows_reading() {
        let settings = parse_settings("[reading]\nseed = \"12\"\n").unwrap();
        assert_eq!(settings.reading.seed, SeedPolicy::Fixed(12));
        assert_eq!(settings.chart.seed, SeedPolicy::Fixed(12));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[reading]\nseed = \"sometimes\"\n").is_err());
        assert!(parse_settings("[chart]\nhouse_scheme = \"placidus\"\n").is_err());
        assert!(parse_settings("[chart]\nretrograde_probability = 1.5\n").is_err());
        assert!(parse_settings("[chart.orbs]\nsquare = -1.0\n").is_err());
        assert!(parse_settings("[chart.orbs]\nnovile = 1.0\n").is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        assert!(load_settings(Some(Path::new("/nonexistent/kokoro.toml"))).is_err());
    }
}
