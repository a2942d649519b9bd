use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use urania::aspects::{OrbPreset, OrbStrictness};
use urania::chart::{ChartOptions, ChartRules, ZodiacMode};
use urania::ephemeris::ObserverMode;
use urania::geocoding::{FallbackGeocoder, GeocodeResult};
use urania::ChartDefaults;

/// Relative locations tried for the chart config, first match wins.
pub const CONFIG_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    pub defaults: ChartDefaults,
    pub ayanamsa: String,
    pub harmonics: Vec<u32>,
    pub ephemeris_path: Option<PathBuf>,
    pub orbs: OrbOverrides,
    pub cities: Vec<CityToml>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrbOverrides {
    #[serde(default)]
    pub strict: Option<OrbPresetToml>,
    #[serde(default)]
    pub standard: Option<OrbPresetToml>,
    #[serde(default)]
    pub wide: Option<OrbPresetToml>,
}

/// Partial orb preset; unset fields keep the built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrbPresetToml {
    pub conjunction: Option<f64>,
    pub opposition: Option<f64>,
    pub trine: Option<f64>,
    pub square: Option<f64>,
    pub sextile: Option<f64>,
    pub quincunx: Option<f64>,
    pub quintile: Option<f64>,
    pub luminary_bonus: Option<f64>,
}

impl OrbPresetToml {
    fn apply(&self, preset: &mut OrbPreset) {
        let fields = [
            (self.conjunction, &mut preset.conjunction),
            (self.opposition, &mut preset.opposition),
            (self.trine, &mut preset.trine),
            (self.square, &mut preset.square),
            (self.sextile, &mut preset.sextile),
            (self.quincunx, &mut preset.quincunx),
            (self.quintile, &mut preset.quintile),
            (self.luminary_bonus, &mut preset.luminary_bonus),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityToml {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: String,
    #[serde(default)]
    pub display_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default = "default_zodiac")]
    zodiac: String,
    #[serde(default = "default_strictness")]
    strictness: String,
    #[serde(default = "default_ayanamsa")]
    ayanamsa: String,
    #[serde(default)]
    observer: ObserverMode,
    #[serde(default = "default_true")]
    include_nodes: bool,
    #[serde(default)]
    include_minor_aspects: bool,
    #[serde(default = "default_true")]
    include_fixed_stars: bool,
    #[serde(default = "default_harmonics")]
    harmonics: Vec<u32>,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            house_system: default_house_system(),
            zodiac: default_zodiac(),
            strictness: default_strictness(),
            ayanamsa: default_ayanamsa(),
            observer: ObserverMode::default(),
            include_nodes: true,
            include_minor_aspects: false,
            include_fixed_stars: true,
            harmonics: default_harmonics(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    orbs: OrbOverrides,
    #[serde(default)]
    cities: Vec<CityToml>,
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_zodiac() -> String {
    "tropical".to_string()
}

fn default_strictness() -> String {
    "standard".to_string()
}

fn default_ayanamsa() -> String {
    "lahiri".to_string()
}

fn default_true() -> bool {
    true
}

fn default_harmonics() -> Vec<u32> {
    vec![5, 7, 9]
}

/// Try the common relative paths for `configs/chart.toml`.
pub fn read_chart_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load chart.toml from {:?}", CONFIG_PATHS);
}

pub fn parse_chart_config(text: &str) -> anyhow::Result<ChartConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;
    let RootConfigToml {
        chart,
        ephemeris,
        orbs,
        cities,
    } = root;

    let zodiac = ZodiacMode::parse(&chart.zodiac)
        .ok_or_else(|| anyhow::anyhow!("chart.zodiac must be tropical or sidereal, got '{}'", chart.zodiac))?;
    let strictness = OrbStrictness::parse(&chart.strictness).ok_or_else(|| {
        anyhow::anyhow!(
            "chart.strictness must be strict, standard or wide, got '{}'",
            chart.strictness
        )
    })?;

    Ok(ChartConfig {
        defaults: ChartDefaults {
            house_system: chart.house_system,
            zodiac,
            strictness,
            options: ChartOptions {
                observer: chart.observer,
                include_nodes: chart.include_nodes,
                include_minor_aspects: chart.include_minor_aspects,
                include_fixed_stars: chart.include_fixed_stars,
            },
        },
        ayanamsa: chart.ayanamsa,
        harmonics: chart.harmonics,
        ephemeris_path: ephemeris.path,
        orbs,
        cities,
    })
}

/// Load `configs/chart.toml`, or built-in defaults when no file exists.
pub fn load_chart_config() -> anyhow::Result<ChartConfig> {
    match read_chart_toml_text() {
        Ok(text) => parse_chart_config(&text),
        Err(e) => {
            log::warn!("{e}; using built-in chart defaults");
            parse_chart_config("")
        }
    }
}

/// Default rules with the config's ayanamsa, harmonics and orb overrides.
pub fn build_rules(config: &ChartConfig) -> anyhow::Result<ChartRules> {
    let mut rules = ChartRules::default()
        .with_ayanamsa_preset(&config.ayanamsa)
        .map_err(|e| anyhow::anyhow!("Invalid chart.ayanamsa: {e}"))?;
    rules.harmonics = config.harmonics.clone();

    let overrides = [
        (OrbStrictness::Strict, &config.orbs.strict),
        (OrbStrictness::Standard, &config.orbs.standard),
        (OrbStrictness::Wide, &config.orbs.wide),
    ];
    for (strictness, preset) in overrides {
        if let Some(preset) = preset {
            preset.apply(rules.orbs.preset_mut(strictness));
        }
    }

    rules
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid orb configuration: {e}"))?;
    Ok(rules)
}

/// Built-in city table plus the `[[cities]]` entries from the config.
pub fn build_geocoder(config: &ChartConfig) -> FallbackGeocoder {
    config
        .cities
        .iter()
        .fold(FallbackGeocoder::new(), |geocoder, city| {
            geocoder.with_city(
                &city.name,
                &city.country,
                GeocodeResult {
                    latitude: city.latitude,
                    longitude: city.longitude,
                    time_zone: city.time_zone.clone(),
                    display_address: city.display_address.clone().unwrap_or_else(|| city.name.clone()),
                },
            )
        })
}
