//! Open-Meteo forecast API client.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::code::WeatherCode;
use crate::error::WeatherError;
use crate::location::Coordinates;
use crate::provider::WeatherProvider;
use crate::reading::{TemperatureUnit, WeatherReading};

/// Public Open-Meteo forecast endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Variables requested in the `current` block.
const CURRENT_FIELDS: &str =
    "temperature_2m,weather_code,is_day,wind_speed_10m,relative_humidity_2m";

/// Blocking client for the Open-Meteo `current` weather endpoint.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ghori_weather::{OpenMeteo, TemperatureUnit};
///
/// let client = OpenMeteo::new()
///     .with_unit(TemperatureUnit::Fahrenheit)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(client.unit(), TemperatureUnit::Fahrenheit);
/// ```
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    base_url: String,
    unit: TemperatureUnit,
    timeout: Duration,
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            unit: TemperatureUnit::Celsius,
            timeout: Duration::from_secs(10),
        }
    }
}

impl OpenMeteo {
    /// Creates a client for the public endpoint, in Celsius, with a 10 s timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint URL (without query string).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the temperature unit.
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the temperature unit.
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Builds the request URL for `coords`.
    pub fn forecast_url(&self, coords: Coordinates) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={CURRENT_FIELDS}&temperature_unit={}&wind_speed_unit={}",
            self.base_url,
            coords.latitude(),
            coords.longitude(),
            self.unit.query_value(),
            self.unit.wind_query_value(),
        )
    }
}

impl WeatherProvider for OpenMeteo {
    fn current(&self, coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        let url = self.forecast_url(coords);
        debug!(%url, "requesting current weather");

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let body = match agent.get(&url).call() {
            Ok(response) => response.into_string().map_err(|e| WeatherError::Network {
                reason: e.to_string(),
            })?,
            Err(ureq::Error::Status(code, _)) => return Err(WeatherError::Status { code }),
            Err(ureq::Error::Transport(t)) => {
                return Err(WeatherError::Network {
                    reason: t.to_string(),
                });
            }
        };
        parse_current(&body, self.unit)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    current: Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f64>,
    weather_code: Option<u16>,
    is_day: Option<u8>,
    wind_speed_10m: Option<f64>,
    relative_humidity_2m: Option<f64>,
}

/// Decodes an Open-Meteo forecast body into a reading.
///
/// Only the temperature is mandatory; other fields default to "not reported"
/// and `is_day` to daytime.
///
/// # Errors
///
/// Returns [`WeatherError::Provider`] for an error payload and
/// [`WeatherError::MalformedPayload`] when the body is not JSON or has no
/// `current.temperature_2m`.
pub fn parse_current(body: &str, unit: TemperatureUnit) -> Result<WeatherReading, WeatherError> {
    let response: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::MalformedPayload {
            reason: e.to_string(),
        })?;
    if response.error {
        return Err(WeatherError::Provider {
            reason: response.reason.unwrap_or_else(|| "unspecified".to_string()),
        });
    }
    let current = response
        .current
        .ok_or_else(|| WeatherError::MalformedPayload {
            reason: "missing current block".to_string(),
        })?;
    let temperature = current
        .temperature_2m
        .filter(|t| t.is_finite())
        .ok_or_else(|| WeatherError::MalformedPayload {
            reason: "missing current.temperature_2m".to_string(),
        })?;

    Ok(WeatherReading {
        temperature,
        unit,
        code: current.weather_code.map(WeatherCode::new),
        is_day: current.is_day.is_none_or(|d| d != 0),
        wind_speed: current.wind_speed_10m,
        humidity: current.relative_humidity_2m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FULL: &str = r#"{
        "latitude": 23.75, "longitude": 90.375,
        "current_units": {"temperature_2m": "°C"},
        "current": {
            "time": "2024-01-01T12:00", "interval": 900,
            "temperature_2m": 21.4, "weather_code": 3, "is_day": 0,
            "wind_speed_10m": 7.9, "relative_humidity_2m": 71
        }
    }"#;

    #[test]
    fn url_contains_coordinates_and_unit() {
        let client = OpenMeteo::new().with_base_url("http://localhost:9/v1/forecast");
        let url = client.forecast_url(Coordinates::new(23.81, 90.41).unwrap());
        assert_eq!(
            url,
            "http://localhost:9/v1/forecast?latitude=23.81&longitude=90.41\
             &current=temperature_2m,weather_code,is_day,wind_speed_10m,relative_humidity_2m\
             &temperature_unit=celsius&wind_speed_unit=kmh"
        );
    }

    #[test]
    fn fahrenheit_url() {
        let client = OpenMeteo::new().with_unit(TemperatureUnit::Fahrenheit);
        let url = client.forecast_url(Coordinates::new(0.0, 0.0).unwrap());
        assert!(url.starts_with(DEFAULT_BASE_URL));
        assert!(url.ends_with("temperature_unit=fahrenheit&wind_speed_unit=mph"));
    }

    #[test]
    fn parse_full_payload() {
        let r = parse_current(FULL, TemperatureUnit::Celsius).unwrap();
        assert_relative_eq!(r.temperature, 21.4);
        assert_eq!(r.code, Some(WeatherCode::new(3)));
        assert!(!r.is_day);
        assert_eq!(r.wind_speed, Some(7.9));
        assert_eq!(r.humidity, Some(71.0));
    }

    #[test]
    fn parse_minimal_payload() {
        let r = parse_current(r#"{"current": {"temperature_2m": 0}}"#, TemperatureUnit::Celsius)
            .unwrap();
        assert_relative_eq!(r.temperature, 0.0);
        assert!(r.is_day);
        assert_eq!(r.code, None);
    }

    #[test]
    fn missing_temperature_is_malformed() {
        let err = parse_current(r#"{"current": {"weather_code": 1}}"#, TemperatureUnit::Celsius)
            .unwrap_err();
        assert_eq!(
            err,
            WeatherError::MalformedPayload {
                reason: "missing current.temperature_2m".to_string()
            }
        );
    }

    #[test]
    fn missing_current_is_malformed() {
        assert!(matches!(
            parse_current(r#"{"latitude": 1.0}"#, TemperatureUnit::Celsius),
            Err(WeatherError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            parse_current("<html>", TemperatureUnit::Celsius),
            Err(WeatherError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn provider_error_payload() {
        let body = r#"{"error": true, "reason": "Cannot initialize WeatherVariable"}"#;
        assert_eq!(
            parse_current(body, TemperatureUnit::Celsius).unwrap_err(),
            WeatherError::Provider {
                reason: "Cannot initialize WeatherVariable".to_string()
            }
        );
    }

    #[test]
    fn unreachable_host_is_network_error() {
        let client = OpenMeteo::new()
            .with_base_url("http://127.0.0.1:9/v1/forecast")
            .with_timeout(Duration::from_millis(500));
        let err = client
            .current(Coordinates::new(0.0, 0.0).unwrap())
            .unwrap_err();
        assert!(matches!(err, WeatherError::Network { .. }), "{err:?}");
    }
}
