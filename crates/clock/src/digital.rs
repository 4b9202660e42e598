//! Digital time readout.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

use crate::error::ClockError;

/// 12-hour (AM/PM) or 24-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    /// `HH:MM:SS`, hours 00..=23.
    #[default]
    TwentyFour,
    /// `hh:MM:SS AM|PM`, hours 01..=12.
    Twelve,
}

impl HourFormat {
    /// Returns the other format.
    pub fn toggled(self) -> Self {
        match self {
            HourFormat::TwentyFour => HourFormat::Twelve,
            HourFormat::Twelve => HourFormat::TwentyFour,
        }
    }
}

impl FromStr for HourFormat {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "24h" | "24" => Ok(HourFormat::TwentyFour),
            "12h" | "12" | "ampm" => Ok(HourFormat::Twelve),
            _ => Err(ClockError::UnknownHourFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourFormat::TwentyFour => f.write_str("24h"),
            HourFormat::Twelve => f.write_str("12h"),
        }
    }
}

/// Zero-pads `n` to two digits.
pub fn pad_zero(n: u32) -> String {
    format!("{n:02}")
}

/// Formats a wall-clock time.
pub fn format_time(hour: u32, minute: u32, second: u32, format: HourFormat) -> String {
    let (m, s) = (pad_zero(minute), pad_zero(second));
    match format {
        HourFormat::TwentyFour => format!("{}:{m}:{s}", pad_zero(hour)),
        HourFormat::Twelve => {
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            let h12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{m}:{s} {meridiem}", pad_zero(h12))
        }
    }
}

/// Formats any chrono time value.
pub fn format_clock(time: &impl Timelike, format: HourFormat) -> String {
    format_time(time.hour(), time.minute(), time.second(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad() {
        assert_eq!(pad_zero(0), "00");
        assert_eq!(pad_zero(7), "07");
        assert_eq!(pad_zero(42), "42");
    }

    #[test]
    fn twenty_four_hour() {
        assert_eq!(format_time(0, 5, 9, HourFormat::TwentyFour), "00:05:09");
        assert_eq!(format_time(23, 59, 59, HourFormat::TwentyFour), "23:59:59");
    }

    #[test]
    fn twelve_hour() {
        assert_eq!(format_time(0, 0, 0, HourFormat::Twelve), "12:00:00 AM");
        assert_eq!(format_time(9, 30, 0, HourFormat::Twelve), "09:30:00 AM");
        assert_eq!(format_time(12, 0, 1, HourFormat::Twelve), "12:00:01 PM");
        assert_eq!(format_time(13, 4, 5, HourFormat::Twelve), "01:04:05 PM");
    }

    #[test]
    fn parse_and_toggle() {
        assert_eq!("12h".parse::<HourFormat>().unwrap(), HourFormat::Twelve);
        assert_eq!("24H".parse::<HourFormat>().unwrap(), HourFormat::TwentyFour);
        assert!("36h".parse::<HourFormat>().is_err());
        assert_eq!(HourFormat::Twelve.toggled(), HourFormat::TwentyFour);
        assert_eq!(HourFormat::TwentyFour.to_string(), "24h");
    }
}
