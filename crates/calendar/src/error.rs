//! Error types for the ghori-calendar crate.

/// Error type for all fallible operations in the ghori-calendar crate.
///
/// Conversion from a Gregorian date is total; these variants only arise
/// when a Bangla date is assembled from loose parts or parsed from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month index is outside the valid range 0..=11.
    #[error("invalid month index: {index} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month index that was provided.
        index: usize,
    },

    /// Returned when a weekday index is outside the valid range 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6)")]
    InvalidWeekday {
        /// The invalid weekday index that was provided.
        index: usize,
    },

    /// Returned when a day number exceeds the length of the month in that year.
    #[error("invalid day: {day} for {month} {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// Romanized name of the month for which the day is invalid.
        month: &'static str,
        /// The Bangla year the month belongs to.
        year: i32,
        /// The number of days in that month.
        max_day: u8,
    },

    /// Returned when a month name does not match any Bangla month.
    #[error("unknown month name: {name:?}")]
    UnknownMonthName {
        /// The text that failed to parse.
        name: String,
    },

    /// Returned when a script name is not recognised.
    #[error("unknown script: {name:?} (expected latin or bengali)")]
    UnknownScript {
        /// The text that failed to parse.
        name: String,
    },

    /// Returned when the Gregorian counterpart falls outside the supported date range.
    #[error("bangla year {year} has no representable gregorian date")]
    OutOfRange {
        /// The Bangla year that could not be mapped.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { index: 12 };
        assert_eq!(err.to_string(), "invalid month index: 12 (must be 0..=11)");
    }

    #[test]
    fn error_invalid_weekday() {
        let err = CalendarError::InvalidWeekday { index: 7 };
        assert_eq!(err.to_string(), "invalid weekday index: 7 (must be 0..=6)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: "Falgun",
            year: 1429,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for Falgun 1429 (max 29)");
    }

    #[test]
    fn error_unknown_month_name() {
        let err = CalendarError::UnknownMonthName {
            name: "Pous".to_string(),
        };
        assert_eq!(err.to_string(), "unknown month name: \"Pous\"");
    }

    #[test]
    fn error_out_of_range() {
        let err = CalendarError::OutOfRange { year: 400_000 };
        assert_eq!(
            err.to_string(),
            "bangla year 400000 has no representable gregorian date"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
