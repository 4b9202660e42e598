//! Gregorian to Bangla conversion.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::date::BanglaDate;
use crate::lengths::{MonthLengths, is_gregorian_leap};
use crate::names::Weekday;

/// Gregorian month of the Bangla new year (April).
pub(crate) const BOUNDARY_MONTH: u32 = 4;
/// Gregorian day of the Bangla new year.
pub(crate) const BOUNDARY_DAY: u32 = 14;
/// Bangla year = Gregorian year − 593 on and after the new year.
pub(crate) const EPOCH_OFFSET: i32 = 593;

/// Zero-based ordinal of April 14 in Gregorian year `year`.
fn boundary_ordinal0(year: i32) -> u32 {
    // Jan + Feb + Mar + 13 days of April.
    31 + 28 + 31 + (BOUNDARY_DAY - 1) + u32::from(is_gregorian_leap(year))
}

fn gregorian_year_length(year: i32) -> u32 {
    365 + u32::from(is_gregorian_leap(year))
}

/// Resolves the Bangla year of `date` and the number of days elapsed since
/// the applicable April 14 boundary.
///
/// A date before April 14 belongs to the year that began on April 14 of
/// the previous Gregorian year.
pub(crate) fn days_since_new_year(date: NaiveDate) -> (i32, u16) {
    let year = date.year();
    let ordinal = date.ordinal0();
    let boundary = boundary_ordinal0(year);
    if ordinal >= boundary {
        (year - EPOCH_OFFSET, (ordinal - boundary) as u16)
    } else {
        let prev = year - 1;
        let carried = gregorian_year_length(prev) - boundary_ordinal0(prev);
        (year - EPOCH_OFFSET - 1, (carried + ordinal) as u16)
    }
}

/// Converts Gregorian dates to Bangla dates.
///
/// The optional day offset recalibrates the result by a fixed number of
/// days, carrying across month and year boundaries. It defaults to 0.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ghori_calendar::{Converter, Month};
///
/// let date = NaiveDate::from_ymd_opt(2024, 4, 14).unwrap();
/// let bangla = Converter::new().convert(date);
/// assert_eq!((bangla.year(), bangla.month(), bangla.day()), (1431, Month::Boishakh, 1));
///
/// let shifted = Converter::new().with_day_offset(-1).convert(date);
/// assert_eq!((shifted.year(), shifted.month(), shifted.day()), (1430, Month::Choitro, 30));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    day_offset: i32,
}

impl Converter {
    /// Creates a converter with no day offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calibration offset in days.
    pub fn with_day_offset(mut self, days: i32) -> Self {
        self.day_offset = days;
        self
    }

    /// Returns the calibration offset in days.
    pub fn day_offset(&self) -> i32 {
        self.day_offset
    }

    /// Converts `date` to the Bangla calendar.
    ///
    /// The month-length table is rebuilt for the resolved year on every
    /// call. The weekday is the Gregorian weekday of `date`.
    pub fn convert(&self, date: NaiveDate) -> BanglaDate {
        let (year, elapsed) = days_since_new_year(date);
        let lengths = MonthLengths::for_year(year);
        let (month, day) = lengths
            .locate(elapsed)
            .expect("a boundary-to-boundary span always fits the month table");
        let weekday = Weekday::from_chrono(date.weekday());

        let mut bangla = BanglaDate::from_parts(year, month, day, weekday);
        if self.day_offset != 0 {
            bangla = bangla.offset_by(self.day_offset);
        }
        trace!(%date, %bangla, offset = self.day_offset, "converted date");
        bangla
    }
}

/// Converts `date` to the Bangla calendar without any day offset.
pub fn convert_date(date: NaiveDate) -> BanglaDate {
    Converter::new().convert(date)
}
