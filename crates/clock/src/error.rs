//! Error types for the ghori-clock crate.

/// Error type for all fallible operations in the ghori-clock crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    /// Returned when an hour-format name is not recognised.
    #[error("unknown hour format: {name:?} (expected 12h or 24h)")]
    UnknownHourFormat {
        /// The text that failed to parse.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_hour_format() {
        let err = ClockError::UnknownHourFormat {
            name: "36h".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown hour format: \"36h\" (expected 12h or 24h)"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ClockError>();
    }
}
