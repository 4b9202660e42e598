//! Date annotation with festival, observance and lunar-phase fallback.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use ghori_calendar::BanglaDate;
use ghori_lunar::{MoonPhase, moon_age_on};

use crate::table::EventTable;

/// Marker glyph placed before observance labels.
pub const OBSERVANCE_MARKER: &str = "★";

static STANDARD: LazyLock<EventTable> = LazyLock::new(EventTable::standard);

/// Returns the process-wide built-in event table.
pub fn standard_table() -> &'static EventTable {
    &STANDARD
}

/// The text shown beneath the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// A Bangla-calendar festival.
    Festival(String),
    /// A Gregorian civil or religious observance.
    Observance(String),
    /// No event; the lunar phase of the day.
    Phase(MoonPhase),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Festival(label) => f.write_str(label),
            Annotation::Observance(label) => write!(f, "{OBSERVANCE_MARKER} {label}"),
            Annotation::Phase(phase) => write!(f, "{phase}"),
        }
    }
}

impl EventTable {
    /// Annotates a date.
    ///
    /// A festival on the Bangla date wins over an observance on the
    /// Gregorian date; with neither, the lunar phase of `gregorian` is used.
    pub fn annotate(&self, date: &BanglaDate, gregorian: NaiveDate) -> Annotation {
        if let Some(label) = self.festival(date.month(), date.day()) {
            return Annotation::Festival(label.to_string());
        }
        if let Some(label) = self.observance(gregorian.month(), gregorian.day()) {
            return Annotation::Observance(label.to_string());
        }
        Annotation::Phase(moon_age_on(gregorian).phase())
    }
}

/// Annotates a date against the built-in table.
pub fn annotate(date: &BanglaDate, gregorian: NaiveDate) -> Annotation {
    standard_table().annotate(date, gregorian)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghori_calendar::convert_date;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn festival() {
        let date = ymd(2024, 4, 14);
        assert_eq!(
            annotate(&convert_date(date), date),
            Annotation::Festival("Pohela Boishakh".to_string())
        );
    }

    #[test]
    fn observance_has_marker() {
        let date = ymd(2024, 12, 16);
        let annotation = annotate(&convert_date(date), date);
        assert_eq!(annotation, Annotation::Observance("Victory Day".to_string()));
        assert_eq!(annotation.to_string(), "★ Victory Day");
    }

    #[test]
    fn falls_back_to_phase() {
        let date = ymd(2024, 4, 23);
        assert_eq!(
            annotate(&convert_date(date), date),
            Annotation::Phase(MoonPhase::Full)
        );
    }

    #[test]
    fn standard_table_is_shared() {
        assert!(std::ptr::eq(standard_table(), standard_table()));
    }
}
