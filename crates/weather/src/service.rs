//! Refresh orchestration: location, provider, and the single-flight gate.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::location::LocationSource;
use crate::provider::WeatherProvider;
use crate::reading::{TemperatureUnit, WeatherStatus};

/// Admits at most one refresh at a time.
#[derive(Debug, Default)]
pub struct RefreshGate {
    busy: AtomicBool,
}

/// Held while a refresh is in flight; releases the gate on drop.
#[derive(Debug)]
pub struct RefreshGuard<'a> {
    gate: &'a RefreshGate,
}

impl RefreshGate {
    /// Creates an open gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate, or returns `None` if a refresh is already running.
    pub fn try_acquire(&self) -> Option<RefreshGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| RefreshGuard { gate: self })
    }

    /// Returns `true` while a refresh holds the gate.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

/// Looks up the location and fetches the weather, one request at a time.
///
/// Every failure is logged and collapsed to [`WeatherStatus::Unavailable`].
pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
    location: Box<dyn LocationSource>,
    unit: TemperatureUnit,
    gate: RefreshGate,
}

impl WeatherService {
    /// Creates a service from a provider and a location source.
    pub fn new(
        provider: impl WeatherProvider + 'static,
        location: impl LocationSource + 'static,
    ) -> Self {
        Self {
            provider: Box::new(provider),
            location: Box::new(location),
            unit: TemperatureUnit::Celsius,
            gate: RefreshGate::new(),
        }
    }

    /// Sets the unit used for placeholders.
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the unit used for placeholders.
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Returns `true` while a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.gate.is_busy()
    }

    /// Fetches the current weather.
    ///
    /// Returns `None` without touching the network if another refresh is
    /// still in flight.
    pub fn refresh(&self) -> Option<WeatherStatus> {
        let Some(_guard) = self.gate.try_acquire() else {
            info!("weather refresh already in flight, skipping");
            return None;
        };

        let result = self
            .location
            .locate()
            .and_then(|coords| {
                info!(%coords, "fetching weather");
                self.provider.current(coords)
            });

        Some(match result {
            Ok(reading) => {
                info!(
                    temperature = reading.temperature,
                    code = reading.code.map(|c| c.get()),
                    "weather updated"
                );
                WeatherStatus::Available(reading)
            }
            Err(e) => {
                warn!(error = %e, "weather unavailable");
                WeatherStatus::Unavailable
            }
        })
    }
}
