use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "ghori.toml";

/// Top-level Ghori configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GhoriConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Clock readout settings.
    #[serde(default)]
    pub clock: ClockToml,

    /// Weather settings.
    #[serde(default)]
    pub weather: WeatherToml,

    /// Extra festivals and observances.
    #[serde(default)]
    pub events: EventsToml,

    /// Watch-mode refresh cadence.
    #[serde(default)]
    pub watch: WatchToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default)]
    pub day_offset: i32,
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            day_offset: 0,
            script: default_script(),
        }
    }
}

fn default_script() -> String {
    "latin".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    #[serde(default = "default_hour_format")]
    pub hour_format: String,
}

impl Default for ClockToml {
    fn default() -> Self {
        Self {
            hour_format: default_hour_format(),
        }
    }
}

fn default_hour_format() -> String {
    "24h".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_city")]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for WeatherToml {
    fn default() -> Self {
        Self {
            enabled: true,
            city: default_city(),
            latitude: None,
            longitude: None,
            unit: default_unit(),
            refresh_secs: default_refresh_secs(),
            timeout_secs: default_timeout_secs(),
            base_url: None,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_city() -> Option<String> {
    Some("Dhaka".to_string())
}
fn default_unit() -> String {
    "celsius".to_string()
}
fn default_refresh_secs() -> u64 {
    600
}
fn default_timeout_secs() -> u64 {
    10
}

/// User-supplied events merged over the built-in table.
///
/// Festival keys are `"<MonthName>-<day>"` (e.g. `"Magh-1"`), observance keys
/// are `"<month>-<day>"` with a 1-based Gregorian month (e.g. `"3-17"`).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsToml {
    #[serde(default = "default_true")]
    pub builtin: bool,
    #[serde(default)]
    pub festivals: BTreeMap<String, String>,
    #[serde(default)]
    pub observances: BTreeMap<String, String>,
}

impl Default for EventsToml {
    fn default() -> Self {
        Self {
            builtin: true,
            festivals: BTreeMap::new(),
            observances: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchToml {
    #[serde(default = "default_clock_secs")]
    pub clock_secs: u64,
    #[serde(default = "default_calendar_secs")]
    pub calendar_secs: u64,
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for WatchToml {
    fn default() -> Self {
        Self {
            clock_secs: default_clock_secs(),
            calendar_secs: default_calendar_secs(),
            clear_screen: true,
        }
    }
}

fn default_clock_secs() -> u64 {
    1
}
fn default_calendar_secs() -> u64 {
    60
}

/// Reads and parses a config file.
pub fn read_config(path: &Path) -> Result<GhoriConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: GhoriConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `ghori.toml` in the working
/// directory is used when present, and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<GhoriConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                read_config(&fallback)
            } else {
                debug!("no config file, using defaults");
                Ok(GhoriConfig::default())
            }
        }
    }
}
