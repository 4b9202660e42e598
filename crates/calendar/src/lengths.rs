//! Month-length table for a Bangla year.

use crate::names::Month;

/// Offset between a Bangla year and the Gregorian year holding its Falgun.
///
/// Boishakh 1 of year `y` falls on April 14 of Gregorian year `y + 593`,
/// so Falgun of the same Bangla year falls in February/March of `y + 594`.
pub(crate) const FALGUN_GREGORIAN_OFFSET: i32 = 594;

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in each month of one Bangla year.
///
/// Boishakh through Ashwin have 31 days, Kartik through Magh 30 days,
/// Falgun 29 days (30 when its Gregorian year is a leap year) and
/// Choitro 30 days. The table therefore always sums to 365 or 366.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLengths([u8; 12]);

impl MonthLengths {
    /// Builds the table for Bangla year `year`.
    pub fn for_year(year: i32) -> Self {
        let falgun = if is_gregorian_leap(year.saturating_add(FALGUN_GREGORIAN_OFFSET)) {
            30
        } else {
            29
        };
        Self([31, 31, 31, 31, 31, 31, 30, 30, 30, 30, falgun, 30])
    }

    /// Returns the number of days in `month`.
    pub fn days(&self, month: Month) -> u8 {
        self.0[month.index()]
    }

    /// Returns the number of days in the whole year.
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&d| u16::from(d)).sum()
    }

    /// Returns the number of days before the first of `month`.
    pub fn days_before(&self, month: Month) -> u16 {
        self.0[..month.index()].iter().map(|&d| u16::from(d)).sum()
    }

    /// Splits a 0-based day count from Boishakh 1 into `(month, day)`.
    ///
    /// Returns `None` if `days` is past the end of the year.
    pub fn locate(&self, days: u16) -> Option<(Month, u8)> {
        let mut remaining = days;
        for month in Month::ALL {
            let len = u16::from(self.days(month));
            if remaining < len {
                return Some((month, (remaining + 1) as u8));
            }
            remaining -= len;
        }
        None
    }

    /// Returns the lengths as a plain array, Boishakh first.
    pub fn as_array(&self) -> [u8; 12] {
        self.0
    }
}
