//! Weather provider abstraction.

use crate::error::WeatherError;
use crate::location::Coordinates;
use crate::reading::WeatherReading;

/// Source of current weather conditions.
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current conditions at `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] on transport failure, non-2xx status or a
    /// payload without a temperature.
    fn current(&self, coords: Coordinates) -> Result<WeatherReading, WeatherError>;
}
