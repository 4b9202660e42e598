//! Error types for ghori-weather.

/// Error type for all fallible operations in the ghori-weather crate.
///
/// Every variant is collapsed to "weather unavailable" by
/// [`WeatherService`](crate::WeatherService); the distinction only matters
/// for logging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeatherError {
    /// Returned when the request never produced an HTTP response.
    #[error("network error: {reason}")]
    Network {
        /// Description of the transport failure.
        reason: String,
    },

    /// Returned when the provider answered with a non-2xx status.
    #[error("weather provider returned HTTP {code}")]
    Status {
        /// The HTTP status code.
        code: u16,
    },

    /// Returned when the provider reported an error in its payload.
    #[error("weather provider error: {reason}")]
    Provider {
        /// The reason given by the provider.
        reason: String,
    },

    /// Returned when the response body cannot be decoded or lacks a temperature.
    #[error("malformed weather payload: {reason}")]
    MalformedPayload {
        /// Description of what was wrong with the payload.
        reason: String,
    },

    /// Returned when no coordinates are available to query.
    #[error("location unavailable: {reason}")]
    LocationUnavailable {
        /// Why no location could be determined.
        reason: String,
    },

    /// Returned when a city name is not in the lookup table.
    #[error("unknown city: {name:?}")]
    UnknownCity {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when latitude or longitude is out of range.
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates {
        /// The latitude provided.
        latitude: f64,
        /// The longitude provided.
        longitude: f64,
    },

    /// Returned when a temperature unit name is not recognised.
    #[error("unknown temperature unit: {name:?} (expected celsius or fahrenheit)")]
    UnknownUnit {
        /// The text that failed to parse.
        name: String,
    },
}
