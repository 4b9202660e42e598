//! Approximate moon age and lunar phase.
//!
//! A public-domain arithmetic approximation: the moon age (days since the
//! last new moon, 0..=29) is derived from the year's position in the
//! 19-year Metonic cycle plus the month and day. It is not astronomically
//! exact, but it is stable, so phase labels are reproducible for any date.
//!
//! # Quick start
//!
//! ```rust
//! use ghori_lunar::{MoonPhase, moon_age};
//!
//! let age = moon_age(2024, 1, 1);
//! assert_eq!(age.get(), 21);
//! assert_eq!(age.phase(), MoonPhase::Waning);
//! ```

mod age;
mod phase;

pub use age::{MoonAge, moon_age, moon_age_on};
pub use phase::MoonPhase;
