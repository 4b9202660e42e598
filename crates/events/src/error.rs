//! Error types for the ghori-events crate.

/// Error type for building custom event tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventsError {
    /// Returned when a festival key is not of the form `"<MonthName>-<day>"`.
    #[error("invalid festival key {key:?}: expected \"<MonthName>-<day>\"")]
    InvalidFestivalKey {
        /// The key that failed to parse.
        key: String,
    },

    /// Returned when an observance key is not of the form `"<month>-<day>"`.
    #[error("invalid observance key {key:?}: expected \"<month>-<day>\" with month 1..=12")]
    InvalidObservanceKey {
        /// The key that failed to parse.
        key: String,
    },

    /// Returned when an event label is empty.
    #[error("empty label for event {key:?}")]
    EmptyLabel {
        /// The key the empty label was attached to.
        key: String,
    },
}
