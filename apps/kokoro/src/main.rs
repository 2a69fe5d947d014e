use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use clap::{Args as ClapArgs, Parser, Subcommand};
use kokoro::houses::{analyze_house, House, HouseAnalysis, HouseScheme};
use kokoro::zodiac::SignProfile;
use kokoro::{
    analyze_horoscope, calculate_natal_chart, daily_fortune, resolve_moon_sign,
    resolve_rising_sign, resolve_sun_sign, ChartParams, NatalChart, ZodiacSign,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Config file (default: search for configs/kokoro.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sun, moon and rising signs with the sun sign's profile.
    Sign(BirthArgs),
    /// Full personality reading.
    Reading(BirthArgs),
    /// Natal chart with houses and aspects.
    Chart {
        #[command(flatten)]
        birth: BirthArgs,

        /// Latitude in degrees, north positive.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees, east positive.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Timezone offset in hours ahead of UT (e.g. 9 for Japan).
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        tz: f64,

        /// Override the configured house scheme (simplified, equal).
        #[arg(long)]
        house_scheme: Option<HouseScheme>,

        /// Include a per-house analysis.
        #[arg(long, default_value_t = false)]
        analyze: bool,
    },
    /// Fortune of the day for a birth profile.
    Fortune {
        #[command(flatten)]
        birth: BirthArgs,

        /// Date to read for, YYYY-MM-DD (default: today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(ClapArgs, Debug)]
struct BirthArgs {
    /// Local birth time, YYYY-MM-DDTHH:MM[:SS].
    #[arg(long)]
    birth: String,

    /// Birth place name.
    #[arg(long, default_value = "")]
    place: String,
}

#[derive(Serialize)]
struct SignOutput {
    sun: ZodiacSign,
    moon: ZodiacSign,
    rising: ZodiacSign,
    profile: &'static SignProfile,
}

#[derive(Serialize)]
struct ChartOutput {
    #[serde(flatten)]
    chart: NatalChart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    analysis: Vec<HouseAnalysis>,
}

fn parse_birth(text: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("invalid --birth {:?} (expected YYYY-MM-DDTHH:MM)", text))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{}", json);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = kokoro_config::load_settings(args.config.as_deref())?;

    match args.command {
        Command::Sign(birth_args) => {
            let birth = parse_birth(&birth_args.birth)?;
            let sun = resolve_sun_sign(&birth);
            print_json(&SignOutput {
                sun,
                moon: resolve_moon_sign(&birth),
                rising: resolve_rising_sign(birth.time().hour(), &birth_args.place),
                profile: sun.profile(),
            })
        }
        Command::Reading(birth_args) => {
            let birth = parse_birth(&birth_args.birth)?;
            let reading = analyze_horoscope(&birth, &birth_args.place, &settings.reading);
            print_json(&reading)
        }
        Command::Chart {
            birth,
            lat,
            lon,
            tz,
            house_scheme,
            analyze,
        } => {
            let birth_time = parse_birth(&birth.birth)?;
            let params = ChartParams::new(lat, lon, tz)?;
            let mut chart_settings = settings.chart;
            if let Some(scheme) = house_scheme {
                chart_settings.house_scheme = scheme;
            }
            let chart = calculate_natal_chart(&birth_time, &params, &chart_settings)?;
            let analysis = if analyze {
                House::ALL
                    .iter()
                    .map(|&house| analyze_house(house, &chart.planets))
                    .collect()
            } else {
                Vec::new()
            };
            log::info!(
                "chart: {} planets, {} aspects",
                chart.planets.len(),
                chart.aspects.len()
            );
            print_json(&ChartOutput { chart, analysis })
        }
        Command::Fortune { birth, date } => {
            let birth_time = parse_birth(&birth.birth)?;
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let reading = analyze_horoscope(&birth_time, &birth.place, &settings.reading);
            let purpose = format!("fortune:{}", today);
            let mut rng = settings.reading.seed.rng(&birth_time, &birth.place, &purpose);
            print_json(&daily_fortune(&reading, today, &mut rng))
        }
    }
}
