//! # ghori-weather
//!
//! Current weather for the clock face: a [`WeatherProvider`] trait with an
//! [Open-Meteo](https://open-meteo.com) implementation, a static city lookup
//! table, and a [`WeatherService`] that serialises refreshes and collapses
//! every failure into a placeholder.
//!
//! ```text
//!  LocationSource ──▶ Coordinates ──▶ WeatherProvider ──▶ WeatherReading
//!        │                                  │
//!        └──────────── error ───────────────┴──▶ WeatherStatus::Unavailable ("--°C")
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `code` | WMO condition codes, descriptions and icons |
//! | `location` | Coordinates, city table, location sources |
//! | `open_meteo` | HTTP client and payload decoding |
//! | `provider` | Provider trait |
//! | `reading` | Readings, units and placeholder rendering |
//! | `service` | Single-flight refresh |
//! | `error` | Error types |

mod code;
mod error;
mod location;
mod open_meteo;
mod provider;
mod reading;
mod service;

pub use code::WeatherCode;
pub use error::WeatherError;
pub use location::{Coordinates, Location, LocationSource, city, city_names};
pub use open_meteo::{DEFAULT_BASE_URL, OpenMeteo, parse_current};
pub use provider::WeatherProvider;
pub use reading::{TemperatureUnit, WeatherReading, WeatherStatus};
pub use service::{RefreshGate, RefreshGuard, WeatherService};
