//! Bangla calendar date.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::convert::{BOUNDARY_DAY, BOUNDARY_MONTH, EPOCH_OFFSET};
use crate::error::CalendarError;
use crate::lengths::MonthLengths;
use crate::names::{Month, Weekday};
use crate::numerals::{Script, format_number};

/// A date in the Bangla calendar.
///
/// `day` always lies within the length of `month` in `year`. The weekday
/// is carried over from the Gregorian date the value was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BanglaDate {
    year: i32,
    month: Month,
    day: u8,
    weekday: Weekday,
}

impl PartialOrd for BanglaDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BanglaDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl BanglaDate {
    /// Creates a `BanglaDate` from year, month and day.
    ///
    /// The weekday is derived from the Gregorian counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is zero or past the end
    /// of `month` in `year`, and [`CalendarError::OutOfRange`] if the year
    /// cannot be mapped onto a Gregorian date.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, CalendarError> {
        let max_day = MonthLengths::for_year(year).days(month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.name(),
                year,
                max_day,
            });
        }
        let mut date = Self {
            year,
            month,
            day,
            weekday: Weekday::Robibar,
        };
        date.weekday = Weekday::from_chrono(date.to_gregorian()?.weekday());
        Ok(date)
    }

    /// Assembles a date from parts the caller has already validated.
    pub(crate) fn from_parts(year: i32, month: Month, day: u8, weekday: Weekday) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
        }
    }

    /// Returns the Bangla year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the 0-based month index (0 = Boishakh).
    pub fn month_index(self) -> usize {
        self.month.index()
    }

    /// Returns the day within the month (1-based).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday.
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the 0-based weekday index (0 = Sunday).
    pub fn weekday_index(self) -> usize {
        self.weekday.index()
    }

    /// Returns the month-length table for this date's year.
    pub fn month_lengths(self) -> MonthLengths {
        MonthLengths::for_year(self.year)
    }

    /// Maps this date back onto the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result would fall outside
    /// the range chrono can represent.
    pub fn to_gregorian(self) -> Result<NaiveDate, CalendarError> {
        let out_of_range = CalendarError::OutOfRange { year: self.year };
        let gregorian_year = self
            .year
            .checked_add(EPOCH_OFFSET)
            .ok_or_else(|| out_of_range.clone())?;
        let new_year = NaiveDate::from_ymd_opt(gregorian_year, BOUNDARY_MONTH, BOUNDARY_DAY)
            .ok_or_else(|| out_of_range.clone())?;
        let offset = self.month_lengths().days_before(self.month) + u16::from(self.day) - 1;
        new_year
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(out_of_range)
    }

    /// Shifts the date by `days`, carrying across month and year boundaries.
    ///
    /// The weekday is left untouched: the shift relabels the calendar date
    /// of the same civil day.
    pub(crate) fn offset_by(self, days: i32) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        let mut lengths = MonthLengths::for_year(year);
        let mut day = i64::from(self.day) + i64::from(days);

        while day < 1 {
            if month == Month::Boishakh {
                year -= 1;
                lengths = MonthLengths::for_year(year);
            }
            month = month.pred();
            day += i64::from(lengths.days(month));
        }
        while day > i64::from(lengths.days(month)) {
            day -= i64::from(lengths.days(month));
            if month == Month::Choitro {
                year += 1;
                lengths = MonthLengths::for_year(year);
            }
            month = month.succ();
        }

        Self {
            year,
            month,
            day: day as u8,
            weekday: self.weekday,
        }
    }

    /// Formats the date as `"<weekday>, <day> <month> <year>"` in `script`.
    pub fn format(self, script: Script) -> String {
        let (weekday, month) = match script {
            Script::Latin => (self.weekday.name(), self.month.name()),
            Script::Bengali => (self.weekday.bengali(), self.month.bengali()),
        };
        format!(
            "{weekday}, {} {month} {}",
            format_number(self.day, script),
            format_number(self.year, script)
        )
    }
}

impl fmt::Display for BanglaDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Script::Latin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = BanglaDate::new(1431, Month::Boishakh, 1).unwrap();
        assert_eq!(date.year(), 1431);
        assert_eq!(date.month(), Month::Boishakh);
        assert_eq!(date.day(), 1);
        // 2024-04-14 was a Sunday.
        assert_eq!(date.weekday(), Weekday::Robibar);
    }

    #[test]
    fn new_rejects_day_zero() {
        assert_eq!(
            BanglaDate::new(1431, Month::Poush, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: "Poush",
                year: 1431,
                max_day: 30,
            }
        );
    }

    #[test]
    fn new_rejects_falgun_30_in_short_year() {
        assert!(BanglaDate::new(1430, Month::Falgun, 30).is_ok());
        assert_eq!(
            BanglaDate::new(1431, Month::Falgun, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: "Falgun",
                year: 1431,
                max_day: 29,
            }
        );
    }

    #[test]
    fn to_gregorian_known_dates() {
        let pohela = BanglaDate::new(1431, Month::Boishakh, 1).unwrap();
        assert_eq!(
            pohela.to_gregorian().unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 14).unwrap()
        );
        let ekushey = BanglaDate::new(1430, Month::Falgun, 8).unwrap();
        assert_eq!(
            ekushey.to_gregorian().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 21).unwrap()
        );
    }

    #[test]
    fn to_gregorian_out_of_range() {
        let date = BanglaDate::from_parts(i32::MAX - 10, Month::Boishakh, 1, Weekday::Robibar);
        assert_eq!(
            date.to_gregorian().unwrap_err(),
            CalendarError::OutOfRange {
                year: i32::MAX - 10
            }
        );
    }

    #[test]
    fn offset_forward_within_month() {
        let date = BanglaDate::from_parts(1430, Month::Poush, 17, Weekday::Sombar);
        let shifted = date.offset_by(3);
        assert_eq!((shifted.month(), shifted.day()), (Month::Poush, 20));
        assert_eq!(shifted.weekday(), Weekday::Sombar);
    }

    #[test]
    fn offset_overflow_wraps_year() {
        let date = BanglaDate::from_parts(1430, Month::Choitro, 29, Weekday::Shukrobar);
        let shifted = date.offset_by(2);
        assert_eq!(shifted.year(), 1431);
        assert_eq!((shifted.month(), shifted.day()), (Month::Boishakh, 1));
    }

    #[test]
    fn offset_borrow_wraps_year() {
        let date = BanglaDate::from_parts(1431, Month::Boishakh, 1, Weekday::Robibar);
        let shifted = date.offset_by(-1);
        assert_eq!(shifted.year(), 1430);
        assert_eq!((shifted.month(), shifted.day()), (Month::Choitro, 30));
    }

    #[test]
    fn offset_borrow_across_short_falgun() {
        let date = BanglaDate::from_parts(1431, Month::Choitro, 1, Weekday::Robibar);
        let shifted = date.offset_by(-1);
        assert_eq!((shifted.month(), shifted.day()), (Month::Falgun, 29));
    }

    #[test]
    fn offset_zero_is_identity() {
        let date = BanglaDate::from_parts(1430, Month::Magh, 12, Weekday::Budhbar);
        assert_eq!(date.offset_by(0), date);
    }

    #[test]
    fn format_scripts() {
        let date = BanglaDate::from_parts(1430, Month::Poush, 17, Weekday::Sombar);
        assert_eq!(date.format(Script::Latin), "Sombar, 17 Poush 1430");
        assert_eq!(date.format(Script::Bengali), "সোমবার, ১৭ পৌষ ১৪৩০");
        assert_eq!(date.to_string(), "Sombar, 17 Poush 1430");
    }

    #[test]
    fn ordering_ignores_weekday() {
        let a = BanglaDate::from_parts(1430, Month::Choitro, 30, Weekday::Shonibar);
        let b = BanglaDate::from_parts(1431, Month::Boishakh, 1, Weekday::Robibar);
        assert!(a < b);
    }
}
