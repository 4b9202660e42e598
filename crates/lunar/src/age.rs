//! Moon-age estimator.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::phase::MoonPhase;

/// Estimated days since the most recent new moon, in 0..=29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoonAge(u8);

impl MoonAge {
    /// Returns the age in days.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Classifies the age into one of four phase bands.
    pub fn phase(self) -> MoonPhase {
        MoonPhase::from_age(self.0)
    }
}

impl fmt::Display for MoonAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimates the moon age for a Gregorian `year`, `month` (1..=12) and `day`.
///
/// The arithmetic, including the 8.3-day correction after 2000, is kept
/// exactly as published; shifting it moves dates between phase bands.
/// Remainders truncate toward zero, as in C.
pub fn moon_age(year: i32, month: u32, day: u32) -> MoonAge {
    let mut cycle = (year % 100) % 19;
    if cycle > 9 {
        cycle -= 19;
    }

    let mut r = f64::from((cycle * 11) % 30 + month as i32 + day as i32);
    if month < 3 {
        r += 2.0;
    }
    r -= if year < 2000 { 4.0 } else { 8.3 };

    let mut r = (r + 0.5).floor() % 30.0;
    if r < 0.0 {
        r += 30.0;
    }
    MoonAge(r as u8)
}

/// Estimates the moon age for a chrono date.
pub fn moon_age_on(date: NaiveDate) -> MoonAge {
    moon_age(date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_new_year_2024() {
        assert_eq!(moon_age(2024, 1, 1).get(), 21);
    }

    #[test]
    fn fractional_correction_after_2000() {
        // 0 + 1 + 6 + 2 - 8.3 = 0.7, rounds to 1.
        assert_eq!(moon_age(2000, 1, 6).get(), 1);
    }

    #[test]
    fn integer_correction_before_2000() {
        // cycle 4: 44 % 30 + 12 + 22 - 4 = 44, mod 30 = 14.
        assert_eq!(moon_age(1999, 12, 22).get(), 14);
    }

    #[test]
    fn negative_cycle_wraps_positive() {
        // cycle 10 -> -9; -99 % 30 = -9; -9 + 1 + 1 + 2 - 8.3 = -13.3 -> -13 + 30.
        assert_eq!(moon_age(2010, 1, 1).get(), 17);
    }

    #[test]
    fn on_date_matches_components() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 23).unwrap();
        assert_eq!(moon_age_on(date), moon_age(2024, 4, 23));
    }

    #[test]
    fn display() {
        assert_eq!(moon_age(2024, 1, 1).to_string(), "21");
    }
}
