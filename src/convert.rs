//! Pure conversion functions: TOML config structs -> crate API types.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::cli::DisplayArgs;
use crate::config::*;
use crate::frame::Face;

use ghori_calendar::{Converter, Script};
use ghori_clock::HourFormat;
use ghori_events::{EventTable, standard_table};
use ghori_weather::{Coordinates, Location, OpenMeteo, TemperatureUnit, WeatherService, city};

/// Parses a script name (`latin` or `bengali`).
pub fn parse_script(s: &str) -> Result<Script> {
    s.parse()
        .with_context(|| format!("unknown script: {s:?} (expected latin or bengali)"))
}

/// Parses an hour format name (`12h` or `24h`).
pub fn parse_hour_format(s: &str) -> Result<HourFormat> {
    s.parse()
        .with_context(|| format!("unknown hour format: {s:?} (expected 12h or 24h)"))
}

/// Parses a temperature unit name (`celsius` or `fahrenheit`).
pub fn parse_unit(s: &str) -> Result<TemperatureUnit> {
    s.parse()
        .with_context(|| format!("unknown temperature unit: {s:?}"))
}

/// Builds a [`Converter`] from the calendar section, with an optional
/// command-line day offset taking precedence.
pub fn build_converter(calendar: &CalendarToml, day_offset: Option<i32>) -> Converter {
    Converter::new().with_day_offset(day_offset.unwrap_or(calendar.day_offset))
}

/// Builds the event table: the built-in entries (unless disabled) with the
/// configured festivals and observances layered on top.
pub fn build_event_table(events: &EventsToml) -> Result<EventTable> {
    let mut table = if events.builtin {
        standard_table().clone()
    } else {
        EventTable::empty()
    };
    for (key, label) in &events.festivals {
        table = table
            .with_festival(key, label.as_str())
            .context("invalid entry in [events].festivals")?;
    }
    for (key, label) in &events.observances {
        table = table
            .with_observance(key, label.as_str())
            .context("invalid entry in [events].observances")?;
    }
    Ok(table)
}

/// Resolves the weather location.
///
/// Explicit coordinates win over a city name. Exactly one of latitude and
/// longitude is an error.
pub fn build_location(weather: &WeatherToml) -> Result<Location> {
    match (weather.latitude, weather.longitude) {
        (Some(lat), Some(lon)) => Ok(Location::Fixed(Coordinates::new(lat, lon)?)),
        (Some(_), None) => bail!("latitude is set without longitude"),
        (None, Some(_)) => bail!("longitude is set without latitude"),
        (None, None) => match weather.city.as_deref() {
            Some(name) => Ok(Location::Fixed(city(name)?)),
            None => Ok(Location::Unset),
        },
    }
}

/// Builds a [`WeatherService`] backed by Open-Meteo.
pub fn build_weather_service(weather: &WeatherToml) -> Result<WeatherService> {
    let unit = parse_unit(&weather.unit)?;
    if weather.timeout_secs == 0 {
        bail!("weather timeout_secs must be at least 1");
    }
    let mut client = OpenMeteo::new()
        .with_unit(unit)
        .with_timeout(Duration::from_secs(weather.timeout_secs));
    if let Some(ref url) = weather.base_url {
        client = client.with_base_url(url);
    }
    let location = build_location(weather)?;
    Ok(WeatherService::new(client, location).with_unit(unit))
}

/// Builds the clock [`Face`] from config, applying command-line overrides.
pub fn build_face(config: &GhoriConfig, display: &DisplayArgs) -> Result<Face> {
    let script = parse_script(display.script.as_deref().unwrap_or(&config.calendar.script))?;
    let hour_format = parse_hour_format(
        display
            .hour_format
            .as_deref()
            .unwrap_or(&config.clock.hour_format),
    )?;
    let converter = build_converter(&config.calendar, display.day_offset);
    let events = build_event_table(&config.events)?;
    Ok(Face::new(converter, events)
        .with_script(script)
        .with_hour_format(hour_format))
}

/// Rejects a zero refresh period.
pub fn build_period(secs: u64, name: &str) -> Result<Duration> {
    if secs == 0 {
        bail!("{name} must be at least 1 second");
    }
    Ok(Duration::from_secs(secs))
}
