//! Weather readings and their placeholder-aware rendering.

use std::fmt;
use std::str::FromStr;

use crate::code::WeatherCode;
use crate::error::WeatherError;

/// Unit for temperatures (and, with it, wind speed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    /// Degrees Celsius, wind in km/h.
    #[default]
    Celsius,
    /// Degrees Fahrenheit, wind in mph.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Single-letter symbol shown after the degree sign.
    pub fn symbol(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }

    /// Value of the `temperature_unit` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Value of the `wind_speed_unit` query parameter.
    pub fn wind_query_value(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "kmh",
            TemperatureUnit::Fahrenheit => "mph",
        }
    }

    /// Label for wind speeds.
    pub fn wind_label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "km/h",
            TemperatureUnit::Fahrenheit => "mph",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(WeatherError::UnknownUnit {
                name: s.to_string(),
            }),
        }
    }
}

/// Current conditions at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Air temperature at 2 m.
    pub temperature: f64,
    /// Unit of `temperature` and `wind_speed`.
    pub unit: TemperatureUnit,
    /// WMO condition code, if reported.
    pub code: Option<WeatherCode>,
    /// Whether the sun is up at the location.
    pub is_day: bool,
    /// Wind speed at 10 m, if reported.
    pub wind_speed: Option<f64>,
    /// Relative humidity in percent, if reported.
    pub humidity: Option<f64>,
}

impl WeatherReading {
    /// Temperature rounded to whole degrees, e.g. `"23°C"`.
    pub fn temperature_text(&self) -> String {
        format!("{}°{}", self.temperature.round() as i64, self.unit.symbol())
    }

    /// Icon and description, e.g. `"⛅ Partly cloudy"`.
    pub fn condition_text(&self) -> String {
        match self.code {
            Some(code) => format!("{} {}", code.icon(self.is_day), code.description()),
            None => "Unknown conditions".to_string(),
        }
    }

    /// Wind and humidity, e.g. `"Wind 12 km/h · Humidity 64%"`.
    pub fn detail_text(&self) -> String {
        let wind = self
            .wind_speed
            .map(|w| format!("{} {}", w.round() as i64, self.unit.wind_label()))
            .unwrap_or_else(|| "--".to_string());
        let humidity = self
            .humidity
            .map(|h| format!("{}%", h.round() as i64))
            .unwrap_or_else(|| "--".to_string());
        format!("Wind {wind} · Humidity {humidity}")
    }
}

/// Outcome of a weather refresh.
///
/// `Unavailable` is distinct from any reading, so a failed fetch renders
/// as a placeholder instead of `0°`.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherStatus {
    /// A fresh reading.
    Available(WeatherReading),
    /// The reading could not be obtained.
    Unavailable,
}

impl WeatherStatus {
    /// Returns the reading, if any.
    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            WeatherStatus::Available(reading) => Some(reading),
            WeatherStatus::Unavailable => None,
        }
    }

    /// Temperature text or the `--°<unit>` placeholder.
    pub fn temperature_text(&self, unit: TemperatureUnit) -> String {
        match self {
            WeatherStatus::Available(reading) => reading.temperature_text(),
            WeatherStatus::Unavailable => format!("--°{}", unit.symbol()),
        }
    }

    /// Condition text or `"Unavailable"`.
    pub fn condition_text(&self) -> String {
        match self {
            WeatherStatus::Available(reading) => reading.condition_text(),
            WeatherStatus::Unavailable => "Unavailable".to_string(),
        }
    }
}

impl fmt::Display for WeatherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherStatus::Available(reading) => write!(
                f,
                "{} {} · {}",
                reading.temperature_text(),
                reading.condition_text(),
                reading.detail_text()
            ),
            WeatherStatus::Unavailable => write!(
                f,
                "{} {}",
                self.temperature_text(TemperatureUnit::Celsius),
                self.condition_text()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> WeatherReading {
        WeatherReading {
            temperature: 22.6,
            unit: TemperatureUnit::Celsius,
            code: Some(WeatherCode::new(2)),
            is_day: true,
            wind_speed: Some(11.8),
            humidity: Some(64.0),
        }
    }

    #[test]
    fn reading_texts() {
        let r = reading();
        assert_eq!(r.temperature_text(), "23°C");
        assert_eq!(r.condition_text(), "⛅ Partly cloudy");
        assert_eq!(r.detail_text(), "Wind 12 km/h · Humidity 64%");
    }

    #[test]
    fn zero_degrees_is_not_a_placeholder() {
        let r = WeatherReading {
            temperature: -0.2,
            ..reading()
        };
        assert_eq!(WeatherStatus::Available(r).temperature_text(TemperatureUnit::Celsius), "0°C");
        assert_eq!(
            WeatherStatus::Unavailable.temperature_text(TemperatureUnit::Celsius),
            "--°C"
        );
    }

    #[test]
    fn missing_details_render_dashes() {
        let r = WeatherReading {
            code: None,
            wind_speed: None,
            humidity: None,
            ..reading()
        };
        assert_eq!(r.condition_text(), "Unknown conditions");
        assert_eq!(r.detail_text(), "Wind -- · Humidity --");
    }

    #[test]
    fn unavailable_display() {
        assert_eq!(WeatherStatus::Unavailable.to_string(), "--°C Unavailable");
        assert_eq!(
            WeatherStatus::Unavailable.temperature_text(TemperatureUnit::Fahrenheit),
            "--°F"
        );
        assert!(WeatherStatus::Unavailable.reading().is_none());
    }

    #[test]
    fn available_display() {
        assert_eq!(
            WeatherStatus::Available(reading()).to_string(),
            "23°C ⛅ Partly cloudy · Wind 12 km/h · Humidity 64%"
        );
    }

    #[test]
    fn parse_unit() {
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("celsius".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }
}
