//! WMO weather interpretation codes.

use std::fmt;

/// A WMO weather interpretation code as reported by Open-Meteo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeatherCode(u16);

impl WeatherCode {
    /// Wraps a raw code. Unknown codes are kept and described generically.
    pub fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Short English description of the condition.
    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 | 48 => "Fog",
            51 | 53 | 55 => "Drizzle",
            56 | 57 => "Freezing drizzle",
            61 | 63 | 65 => "Rain",
            66 | 67 => "Freezing rain",
            71 | 73 | 75 => "Snow",
            77 => "Snow grains",
            80..=82 => "Rain showers",
            85 | 86 => "Snow showers",
            95 => "Thunderstorm",
            96 | 99 => "Thunderstorm with hail",
            _ => "Unknown conditions",
        }
    }

    /// Icon for the condition; clear and mainly-clear skies differ by day and night.
    pub fn icon(self, is_day: bool) -> &'static str {
        match self.0 {
            0 if is_day => "☀️",
            0 => "🌙",
            1 | 2 if is_day => "⛅",
            1 | 2 => "☁️",
            3 => "☁️",
            45 | 48 => "🌫️",
            51..=57 => "🌦️",
            61..=67 | 80..=82 => "🌧️",
            71..=77 | 85 | 86 => "❄️",
            95..=99 => "⛈️",
            _ => "🌡️",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
