//! Analog hand rotation.

use chrono::Timelike;

/// Rotation of each clock hand in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    hour: f64,
    minute: f64,
    second: f64,
}

impl HandAngles {
    /// Computes the angles for a wall-clock time.
    ///
    /// The second hand sweeps with the milliseconds, the minute hand
    /// advances with the seconds and the hour hand with the minutes.
    pub fn new(hour: u32, minute: u32, second: u32, millis: u32) -> Self {
        let (h, m, s, ms) = (
            f64::from(hour % 12),
            f64::from(minute),
            f64::from(second),
            f64::from(millis),
        );
        Self {
            hour: (h + m / 60.0) * 30.0,
            minute: (m + s / 60.0) * 6.0,
            second: (s + ms / 1000.0) * 6.0,
        }
    }

    /// Computes the angles for any chrono time value.
    pub fn from_time(time: &impl Timelike) -> Self {
        // Leap seconds report nanoseconds past 1e9.
        let millis = (time.nanosecond() / 1_000_000).min(999);
        Self::new(time.hour(), time.minute(), time.second(), millis)
    }

    /// Hour hand angle in degrees.
    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Minute hand angle in degrees.
    pub fn minute(&self) -> f64 {
        self.minute
    }

    /// Second hand angle in degrees.
    pub fn second(&self) -> f64 {
        self.second
    }
}
