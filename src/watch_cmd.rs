//! Continuous redraw loop.
//!
//! The clock is redrawn every `clock_secs`, the calendar panel every
//! `calendar_secs` and the weather every `refresh_secs`. Weather requests
//! run on a worker thread and report back over a channel so a slow network
//! never stalls the clock.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use tracing::{debug, info, info_span, warn};

use ghori_weather::{WeatherService, WeatherStatus};

use crate::cli::WatchArgs;
use crate::config::GhoriConfig;
use crate::convert;
use crate::frame::{DisplaySink, TextSink, WeatherPanel};

/// Tracks when a periodic task last ran.
#[derive(Debug)]
struct Cadence {
    period: Duration,
    last: Option<Instant>,
}

impl Cadence {
    fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// Returns `true` (and records `now`) when the task is due.
    fn due(&mut self, now: Instant) -> bool {
        let due = self
            .last
            .is_none_or(|last| now.duration_since(last) >= self.period);
        if due {
            self.last = Some(now);
        }
        due
    }
}

/// Starts a background refresh. The service's gate drops overlapping runs.
fn spawn_refresh(service: &Arc<WeatherService>, tx: &Sender<WeatherStatus>) {
    if service.is_refreshing() {
        debug!("previous weather refresh still running");
        return;
    }
    let service = Arc::clone(service);
    let tx = tx.clone();
    thread::spawn(move || {
        if let Some(status) = service.refresh() {
            // The receiver is gone once the loop has exited.
            let _ = tx.send(status);
        }
    });
}

/// Drains finished refreshes, keeping the newest.
fn latest_status(rx: &Receiver<WeatherStatus>) -> Option<WeatherStatus> {
    rx.try_iter().last()
}

/// Redraw the clock face until interrupted or `--ticks` is reached.
pub fn run(args: WatchArgs, config: &GhoriConfig) -> Result<()> {
    let _cmd = info_span!("watch").entered();
    let face = convert::build_face(config, &args.display)?;
    let clock_period = convert::build_period(config.watch.clock_secs, "clock_secs")?;
    let mut calendar_cadence =
        Cadence::new(convert::build_period(config.watch.calendar_secs, "calendar_secs")?);

    let service = if config.weather.enabled && !args.no_weather {
        Some(Arc::new(convert::build_weather_service(&config.weather)?))
    } else {
        None
    };
    let mut weather_cadence =
        Cadence::new(convert::build_period(config.weather.refresh_secs, "refresh_secs")?);
    let (tx, rx) = mpsc::channel();

    info!(
        clock_secs = clock_period.as_secs(),
        calendar_secs = config.watch.calendar_secs,
        weather = service.is_some(),
        "watching"
    );

    let mut sink = TextSink::new(io::stdout()).with_clear(config.watch.clear_screen);
    calendar_cadence.due(Instant::now());
    let mut calendar = face.calendar(Local::now().date_naive());
    let mut weather = service
        .as_ref()
        .map(|s| WeatherPanel::from_status(&WeatherStatus::Unavailable, s.unit()));
    let mut ticks = 0u64;

    loop {
        let instant = Instant::now();
        let now = Local::now().naive_local();

        if calendar_cadence.due(instant) {
            calendar = face.calendar(now.date());
            debug!(bangla = %calendar.bangla, annotation = %calendar.annotation, "calendar redrawn");
        }
        if let Some(service) = &service {
            if weather_cadence.due(instant) {
                spawn_refresh(service, &tx);
            }
            if let Some(status) = latest_status(&rx) {
                weather = Some(WeatherPanel::from_status(&status, service.unit()));
            }
        }

        let frame = face.frame(&now, &calendar, weather.as_ref());
        if let Err(e) = sink.show(&frame) {
            warn!(error = %e, "display failed, stopping");
            return Err(e);
        }

        ticks += 1;
        if args.ticks.is_some_and(|limit| ticks >= limit) {
            info!(ticks, "tick limit reached");
            return Ok(());
        }
        thread::sleep(clock_period.saturating_sub(instant.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghori_weather::{
        Coordinates, Location, TemperatureUnit, WeatherError, WeatherProvider, WeatherReading,
    };

    #[test]
    fn cadence_first_call_is_due() {
        let mut cadence = Cadence::new(Duration::from_secs(60));
        let start = Instant::now();
        assert!(cadence.due(start));
        assert!(!cadence.due(start));
        assert!(!cadence.due(start + Duration::from_secs(59)));
        assert!(cadence.due(start + Duration::from_secs(60)));
    }

    struct Fixed;

    impl WeatherProvider for Fixed {
        fn current(&self, _coords: Coordinates) -> Result<WeatherReading, WeatherError> {
            Ok(WeatherReading {
                temperature: 28.0,
                unit: TemperatureUnit::Celsius,
                code: None,
                is_day: true,
                wind_speed: None,
                humidity: None,
            })
        }
    }

    #[test]
    fn background_refresh_reports_over_channel() {
        let coords = Coordinates::new(23.8, 90.4).unwrap();
        let service = Arc::new(WeatherService::new(Fixed, Location::Fixed(coords)));
        let (tx, rx) = mpsc::channel();
        spawn_refresh(&service, &tx);
        let status = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(status.temperature_text(TemperatureUnit::Celsius), "28°C");
        assert_eq!(latest_status(&rx), None);
    }

    #[test]
    fn latest_status_keeps_newest() {
        let (tx, rx) = mpsc::channel();
        tx.send(WeatherStatus::Unavailable).unwrap();
        tx.send(WeatherStatus::Available(WeatherReading {
            temperature: 30.0,
            unit: TemperatureUnit::Celsius,
            code: None,
            is_day: false,
            wind_speed: None,
            humidity: None,
        }))
        .unwrap();
        let status = latest_status(&rx).unwrap();
        assert!(status.reading().is_some());
    }
}
