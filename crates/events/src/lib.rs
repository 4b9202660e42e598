//! # ghori-events
//!
//! Annotates a date with, in priority order, a Bangla festival, a
//! Gregorian observance, or the lunar phase.
//!
//! ```text
//!  BanglaDate ──▶ "<MonthName>-<day>" ──▶ festival?    ──▶ Festival
//!                                           │ no
//!  NaiveDate  ──▶ "<month>-<day>"     ──▶ observance? ──▶ Observance (★)
//!                                           │ no
//!                                           └──▶ moon age ──▶ Phase
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ghori_calendar::convert_date;
//! use ghori_events::annotate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 2, 21).unwrap();
//! let text = annotate(&convert_date(date), date).to_string();
//! assert_eq!(text, "★ International Mother Language Day");
//! ```

mod annotate;
mod error;
mod table;

pub use annotate::{Annotation, OBSERVANCE_MARKER, annotate, standard_table};
pub use error::EventsError;
pub use table::{EventTable, festival_key, observance_key};
