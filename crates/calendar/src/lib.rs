//! # ghori-calendar
//!
//! Pure date arithmetic mapping Gregorian dates onto the Bangla calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"days since April 14"| B["(year, elapsed)"]
//!     B -->|"MonthLengths::for_year().locate()"| C["(Month, day)"]
//!     C -->|"+ Gregorian weekday"| D["BanglaDate"]
//!     D -->|"Converter day offset"| D
//!     D -->|".to_gregorian()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use ghori_calendar::{Converter, Month, Script, convert_date};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let bangla = convert_date(date);
//! assert_eq!(bangla.month(), Month::Poush);
//! assert_eq!(bangla.format(Script::Latin), "Sombar, 17 Poush 1430");
//!
//! // Calibrated conversion
//! let shifted = Converter::new().with_day_offset(1).convert(date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | Year boundary resolution and the converter |
//! | `date` | Bangla date value, inverse conversion, formatting |
//! | `lengths` | Per-year month-length table and leap predicate |
//! | `names` | Month and weekday names |
//! | `numerals` | Bengali digits and script selection |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod lengths;
mod names;
mod numerals;

pub use convert::{Converter, convert_date};
pub use date::BanglaDate;
pub use error::CalendarError;
pub use lengths::{MonthLengths, is_gregorian_leap};
pub use names::{Month, Weekday};
pub use numerals::{Script, format_number, to_bengali_digits};
