//! Festival and observance lookup tables.

use std::collections::BTreeMap;

use ghori_calendar::Month;
use tracing::debug;

use crate::error::EventsError;

/// Fixed festivals of the Bangla calendar, keyed by `"<MonthName>-<day>"`.
const FESTIVALS: &[(&str, &str)] = &[
    ("Boishakh-1", "Pohela Boishakh"),
    ("Boishakh-25", "Rabindra Jayanti"),
    ("Joishtho-11", "Nazrul Jayanti"),
    ("Srabon-22", "Baishe Srabon"),
    ("Ogrohayon-1", "Nobanno"),
    ("Poush-30", "Poush Sankranti"),
    ("Falgun-1", "Pohela Falgun"),
    ("Choitro-30", "Choitro Sankranti"),
];

/// Fixed civil and religious observances, keyed by Gregorian `"<month>-<day>"`.
const OBSERVANCES: &[(&str, &str)] = &[
    ("1-1", "New Year's Day"),
    ("2-21", "International Mother Language Day"),
    ("3-8", "International Women's Day"),
    ("3-26", "Independence Day"),
    ("5-1", "May Day"),
    ("12-14", "Martyred Intellectuals Day"),
    ("12-16", "Victory Day"),
    ("12-25", "Christmas Day"),
];

/// Builds the festival key for a Bangla month and day.
pub fn festival_key(month: Month, day: u8) -> String {
    format!("{}-{day}", month.name())
}

/// Builds the observance key for a Gregorian month and day.
pub fn observance_key(month: u32, day: u32) -> String {
    format!("{month}-{day}")
}

/// Two read-only lookup tables used to annotate a date.
///
/// Keys are compared by exact string equality. Custom entries are
/// normalised on insertion, so `"poush-07"` and `"Poush-7"` name the same
/// festival.
///
/// # Example
///
/// ```
/// use ghori_calendar::Month;
/// use ghori_events::EventTable;
///
/// let table = EventTable::standard()
///     .with_festival("Magh-1", "Magh Utsab")
///     .unwrap();
/// assert_eq!(table.festival(Month::Magh, 1), Some("Magh Utsab"));
/// assert_eq!(table.observance(12, 16), Some("Victory Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    festivals: BTreeMap<String, String>,
    observances: BTreeMap<String, String>,
}

impl EventTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the table of built-in festivals and observances.
    pub fn standard() -> Self {
        let to_map = |entries: &[(&str, &str)]| -> BTreeMap<String, String> {
            entries
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        Self {
            festivals: to_map(FESTIVALS),
            observances: to_map(OBSERVANCES),
        }
    }

    /// Adds or replaces a festival keyed by `"<MonthName>-<day>"`.
    ///
    /// The month may be written in either script and any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`EventsError::InvalidFestivalKey`] if the key does not parse
    /// or the day is outside 1..=31, and [`EventsError::EmptyLabel`] if
    /// `label` is blank.
    pub fn with_festival(
        mut self,
        key: &str,
        label: impl Into<String>,
    ) -> Result<Self, EventsError> {
        let invalid = || EventsError::InvalidFestivalKey {
            key: key.to_string(),
        };
        let (month, day) = key.rsplit_once('-').ok_or_else(invalid)?;
        let month: Month = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.trim().parse().map_err(|_| invalid())?;
        if !(1..=31).contains(&day) {
            return Err(invalid());
        }
        let label = non_empty(key, label.into())?;
        let key = festival_key(month, day);
        debug!(%key, %label, "registered festival");
        self.festivals.insert(key, label);
        Ok(self)
    }

    /// Adds or replaces an observance keyed by Gregorian `"<month>-<day>"`.
    ///
    /// # Errors
    ///
    /// Returns [`EventsError::InvalidObservanceKey`] if the key does not parse
    /// or is out of range, and [`EventsError::EmptyLabel`] if `label` is blank.
    pub fn with_observance(
        mut self,
        key: &str,
        label: impl Into<String>,
    ) -> Result<Self, EventsError> {
        let invalid = || EventsError::InvalidObservanceKey {
            key: key.to_string(),
        };
        let (month, day) = key.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        let day: u32 = day.trim().parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }
        let label = non_empty(key, label.into())?;
        let key = observance_key(month, day);
        debug!(%key, %label, "registered observance");
        self.observances.insert(key, label);
        Ok(self)
    }

    /// Looks up the festival on a Bangla month and day.
    pub fn festival(&self, month: Month, day: u8) -> Option<&str> {
        self.festivals
            .get(&festival_key(month, day))
            .map(String::as_str)
    }

    /// Looks up the observance on a Gregorian month and day.
    pub fn observance(&self, month: u32, day: u32) -> Option<&str> {
        self.observances
            .get(&observance_key(month, day))
            .map(String::as_str)
    }

    /// Returns the number of festivals.
    pub fn n_festivals(&self) -> usize {
        self.festivals.len()
    }

    /// Returns the number of observances.
    pub fn n_observances(&self) -> usize {
        self.observances.len()
    }
}

fn non_empty(key: &str, label: String) -> Result<String, EventsError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(EventsError::EmptyLabel {
            key: key.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
