use std::io::Write;

use anyhow::Result;
use tracing::info_span;

use ghori_weather::{WeatherStatus, city_names};

use crate::cli::WeatherArgs;
use crate::config::GhoriConfig;
use crate::convert;

/// Fetch and print the current weather once.
pub fn run(args: WeatherArgs, mut config: GhoriConfig) -> Result<()> {
    let _cmd = info_span!("weather").entered();
    let mut out = std::io::stdout().lock();
    if args.list_cities {
        for name in city_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    // Command-line location replaces the configured one entirely.
    if args.city.is_some() {
        config.weather.city = args.city;
        config.weather.latitude = None;
        config.weather.longitude = None;
    } else if args.latitude.is_some() || args.longitude.is_some() {
        config.weather.city = None;
        config.weather.latitude = args.latitude;
        config.weather.longitude = args.longitude;
    }
    if let Some(unit) = args.unit {
        config.weather.unit = unit;
    }

    let service = convert::build_weather_service(&config.weather)?;
    let status = service.refresh().unwrap_or(WeatherStatus::Unavailable);
    match &status {
        WeatherStatus::Available(_) => writeln!(out, "{status}")?,
        WeatherStatus::Unavailable => writeln!(
            out,
            "{} {}",
            status.temperature_text(service.unit()),
            status.condition_text()
        )?,
    }
    Ok(())
}
