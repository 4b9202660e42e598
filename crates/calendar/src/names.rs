//! Bangla month and weekday names.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A month of the Bangla calendar, in order from the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Boishakh,
    Joishtho,
    Asharh,
    Srabon,
    Bhadro,
    Ashwin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Choitro,
}

/// Romanized and Bengali-script month names, indexed by [`Month::index`].
const MONTH_NAMES: [(&str, &str); 12] = [
    ("Boishakh", "বৈশাখ"),
    ("Joishtho", "জ্যৈষ্ঠ"),
    ("Asharh", "আষাঢ়"),
    ("Srabon", "শ্রাবণ"),
    ("Bhadro", "ভাদ্র"),
    ("Ashwin", "আশ্বিন"),
    ("Kartik", "কার্তিক"),
    ("Ogrohayon", "অগ্রহায়ণ"),
    ("Poush", "পৌষ"),
    ("Magh", "মাঘ"),
    ("Falgun", "ফাল্গুন"),
    ("Choitro", "চৈত্র"),
];

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Boishakh,
        Month::Joishtho,
        Month::Asharh,
        Month::Srabon,
        Month::Bhadro,
        Month::Ashwin,
        Month::Kartik,
        Month::Ogrohayon,
        Month::Poush,
        Month::Magh,
        Month::Falgun,
        Month::Choitro,
    ];

    /// Returns the month at 0-based position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `index` is not in 0..=11.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CalendarError::InvalidMonth { index })
    }

    /// Returns the 0-based position of the month (0 = Boishakh).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the romanized month name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.index()].0
    }

    /// Returns the month name in Bengali script.
    pub fn bengali(self) -> &'static str {
        MONTH_NAMES[self.index()].1
    }

    /// Returns the following month, wrapping Choitro to Boishakh.
    pub fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % 12]
    }

    /// Returns the preceding month, wrapping Boishakh to Choitro.
    pub fn pred(self) -> Self {
        Self::ALL[(self.index() + 11) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parses a romanized (case-insensitive) or Bengali-script month name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MONTH_NAMES
            .iter()
            .position(|(latin, bengali)| {
                latin.eq_ignore_ascii_case(trimmed) || *bengali == trimmed
            })
            .map(|i| Self::ALL[i])
            .ok_or_else(|| CalendarError::UnknownMonthName {
                name: s.to_string(),
            })
    }
}

/// A day of the seven-day week, shared with the Gregorian calendar.
///
/// Index 0 is Sunday (Robibar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Robibar,
    Sombar,
    Mongolbar,
    Budhbar,
    Brihoshpotibar,
    Shukrobar,
    Shonibar,
}

/// Romanized and Bengali-script weekday names, indexed by [`Weekday::index`].
const WEEKDAY_NAMES: [(&str, &str); 7] = [
    ("Robibar", "রবিবার"),
    ("Sombar", "সোমবার"),
    ("Mongolbar", "মঙ্গলবার"),
    ("Budhbar", "বুধবার"),
    ("Brihoshpotibar", "বৃহস্পতিবার"),
    ("Shukrobar", "শুক্রবার"),
    ("Shonibar", "শনিবার"),
];

impl Weekday {
    /// All seven weekdays starting from Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Robibar,
        Weekday::Sombar,
        Weekday::Mongolbar,
        Weekday::Budhbar,
        Weekday::Brihoshpotibar,
        Weekday::Shukrobar,
        Weekday::Shonibar,
    ];

    /// Returns the weekday at 0-based position `index` (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `index` is not in 0..=6.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CalendarError::InvalidWeekday { index })
    }

    /// Maps a chrono weekday onto its Bangla name.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }

    /// Returns the 0-based position of the weekday (0 = Sunday).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the romanized weekday name.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index()].0
    }

    /// Returns the weekday name in Bengali script.
    pub fn bengali(self) -> &'static str {
        WEEKDAY_NAMES[self.index()].1
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
