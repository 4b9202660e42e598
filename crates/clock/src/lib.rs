//! Clock-face geometry and digital readout.
//!
//! Converts a wall-clock time into hand rotation angles for an analog face
//! and a zero-padded `HH:MM:SS` string, optionally in 12-hour AM/PM form.

mod digital;
mod error;
mod hands;

pub use digital::{HourFormat, format_clock, format_time, pad_zero};
pub use error::ClockError;
pub use hands::HandAngles;
