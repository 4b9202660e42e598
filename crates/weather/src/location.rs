//! Coordinates and the static city lookup table.

use std::fmt;

use crate::error::WeatherError;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates coordinates after range-checking them.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::InvalidCoordinates`] unless latitude is in
    /// -90..=90 and longitude in -180..=180.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Known cities: (name, aliases, latitude, longitude).
#[rustfmt::skip]
const CITIES: &[(&str, &[&str], f64, f64)] = &[
    ("Dhaka",      &[],             23.8103, 90.4125),
    ("Chattogram", &["Chittagong"], 22.3569, 91.7832),
    ("Khulna",     &[],             22.8456, 89.5403),
    ("Rajshahi",   &[],             24.3745, 88.6042),
    ("Sylhet",     &[],             24.8949, 91.8687),
    ("Barishal",   &["Barisal"],    22.7010, 90.3535),
    ("Rangpur",    &[],             25.7439, 89.2752),
    ("Mymensingh", &[],             24.7471, 90.4203),
    ("Kolkata",    &["Calcutta"],   22.5726, 88.3639),
];

/// Looks up a city by name or alias, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`WeatherError::UnknownCity`] if the name is not in the table.
pub fn city(name: &str) -> Result<Coordinates, WeatherError> {
    let wanted = name.trim();
    CITIES
        .iter()
        .find(|(city, aliases, _, _)| {
            city.eq_ignore_ascii_case(wanted) || aliases.iter().any(|a| a.eq_ignore_ascii_case(wanted))
        })
        .map(|&(_, _, latitude, longitude)| Coordinates {
            latitude,
            longitude,
        })
        .ok_or_else(|| WeatherError::UnknownCity {
            name: name.to_string(),
        })
}

/// Returns the names of all cities in the lookup table.
pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|(name, _, _, _)| *name)
}

/// Supplies the coordinates to query weather for.
pub trait LocationSource: Send + Sync {
    /// Returns the current coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::LocationUnavailable`] when no position is known.
    fn locate(&self) -> Result<Coordinates, WeatherError>;
}

/// A location fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// Always report these coordinates.
    Fixed(Coordinates),
    /// No location configured; weather is unavailable.
    Unset,
}

impl LocationSource for Location {
    fn locate(&self) -> Result<Coordinates, WeatherError> {
        match self {
            Location::Fixed(coords) => Ok(*coords),
            Location::Unset => Err(WeatherError::LocationUnavailable {
                reason: "no city or coordinates configured".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_valid() {
        let c = Coordinates::new(23.81, 90.41).unwrap();
        assert_eq!(c.latitude(), 23.81);
        assert_eq!(c.longitude(), 90.41);
        assert_eq!(c.to_string(), "23.8100, 90.4100");
    }

    #[test]
    fn coordinates_out_of_range() {
        assert!(Coordinates::new(90.5, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn city_lookup_is_case_insensitive() {
        assert_eq!(city("dhaka").unwrap(), city("Dhaka").unwrap());
        assert_eq!(city(" SYLHET ").unwrap().latitude(), 24.8949);
    }

    #[test]
    fn city_aliases() {
        assert_eq!(city("Chittagong").unwrap(), city("Chattogram").unwrap());
        assert_eq!(city("calcutta").unwrap(), city("Kolkata").unwrap());
    }

    #[test]
    fn unknown_city() {
        assert_eq!(
            city("Atlantis").unwrap_err(),
            WeatherError::UnknownCity {
                name: "Atlantis".to_string()
            }
        );
    }

    #[test]
    fn every_table_entry_is_valid() {
        for name in city_names() {
            let c = city(name).unwrap();
            assert!(Coordinates::new(c.latitude(), c.longitude()).is_ok(), "{name}");
        }
    }

    #[test]
    fn unset_location_is_unavailable() {
        assert!(matches!(
            Location::Unset.locate(),
            Err(WeatherError::LocationUnavailable { .. })
        ));
    }

    #[test]
    fn fixed_location() {
        let c = Coordinates::new(1.0, 2.0).unwrap();
        assert_eq!(Location::Fixed(c).locate().unwrap(), c);
    }
}
