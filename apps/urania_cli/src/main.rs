use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use urania::aspects::OrbStrictness;
use urania::ephemeris::{EphemerisProvider, StaticEphemeris};
use urania::geocoding::GeocodeQuery;
use urania::vedic::nakshatra_for_longitude;
use urania::{ChartService, ZodiacMode};
use urania_config::{build_geocoder, build_rules, load_chart_config, ChartConfig};

#[derive(Parser)]
#[command(name = "urania", about = "Natal chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a chart and print it as JSON
    Chart {
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (HH:MM, 24h)
        #[arg(long)]
        time: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        country: String,
        /// House system code, overrides the config
        #[arg(long)]
        house_system: Option<String>,
        /// tropical or sidereal, overrides the config
        #[arg(long)]
        zodiac: Option<String>,
        /// strict, standard or wide, overrides the config
        #[arg(long)]
        strictness: Option<String>,
        /// Include quincunx and quintile in the aspect list
        #[arg(long)]
        minor_aspects: bool,
        /// Use the built-in mean-motion ephemeris instead of Swiss Ephemeris
        #[arg(long)]
        offline: bool,
    },
    /// Nakshatra and pada for a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn provider_for(config: &ChartConfig, offline: bool) -> anyhow::Result<Arc<dyn EphemerisProvider>> {
    if offline {
        return Ok(Arc::new(StaticEphemeris::mean_j2000()));
    }
    swiss_provider(config)
}

#[cfg(feature = "swiss-ephemeris")]
fn swiss_provider(config: &ChartConfig) -> anyhow::Result<Arc<dyn EphemerisProvider>> {
    let adapter = urania::ephemeris::SwissEphemerisAdapter::new(config.ephemeris_path.clone())
        .context("Failed to initialise Swiss Ephemeris (use --offline to skip)")?;
    Ok(Arc::new(adapter))
}

#[cfg(not(feature = "swiss-ephemeris"))]
fn swiss_provider(_config: &ChartConfig) -> anyhow::Result<Arc<dyn EphemerisProvider>> {
    anyhow::bail!("Built without Swiss Ephemeris support; pass --offline")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            city,
            state,
            country,
            house_system,
            zodiac,
            strictness,
            minor_aspects,
            offline,
        } => {
            let config = load_chart_config()?;
            let rules = build_rules(&config)?;
            let provider = provider_for(&config, offline)?;

            let mut defaults = config.defaults.clone();
            if let Some(code) = house_system {
                defaults.house_system = code;
            }
            if let Some(value) = zodiac {
                defaults.zodiac = ZodiacMode::parse(&value)
                    .with_context(|| format!("Unknown zodiac '{value}'"))?;
            }
            if let Some(value) = strictness {
                defaults.strictness = OrbStrictness::parse(&value)
                    .with_context(|| format!("Unknown strictness '{value}'"))?;
            }
            if minor_aspects {
                defaults.options.include_minor_aspects = true;
            }

            let service = ChartService::new(
                Arc::new(build_geocoder(&config)),
                provider,
                Arc::new(rules),
            )
            .with_defaults(defaults);

            let query = GeocodeQuery::new(city, state, country);
            info!("Computing chart for {} at {} {}", query, date, time);
            let snapshot = service
                .chart_for_city(&query, &date, &time)
                .await
                .with_context(|| format!("Chart for {query} failed"))?;
            println!("{}", snapshot.to_json()?);
        }
        Commands::Nakshatra { lon } => {
            let placement = nakshatra_for_longitude(lon);
            println!(
                "{} (lord {}) - Pada {} ({:.4} deg in nakshatra)",
                placement.nakshatra.name,
                placement.nakshatra.lord.vedic_name(),
                placement.pada,
                placement.offset
            );
        }
    }
    Ok(())
}
