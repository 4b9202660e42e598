//! Clock-face frames and the sinks that render them.
//!
//! A [`Face`] turns a local date-time into the three panels of the display:
//! the clock readout, the calendar panel and the weather line. A
//! [`DisplaySink`] writes the assembled [`Frame`] somewhere.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use ghori_calendar::{Converter, Script, to_bengali_digits};
use ghori_clock::{HandAngles, HourFormat, format_clock};
use ghori_events::{Annotation, EventTable};
use ghori_lunar::moon_age_on;
use ghori_weather::{TemperatureUnit, WeatherStatus};

/// Clock readout: digital time plus analog hand angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockPanel {
    pub time: String,
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

/// Calendar panel for one civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarPanel {
    /// ISO Gregorian date.
    pub gregorian: String,
    /// Formatted Bangla date.
    pub bangla: String,
    pub year: i32,
    pub month_index: usize,
    pub day: u8,
    pub weekday_index: usize,
    /// Festival, observance or moon phase.
    pub annotation: String,
    pub annotation_kind: &'static str,
    pub moon_age: u8,
}

/// Weather line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherPanel {
    pub temperature: String,
    pub conditions: String,
    pub details: Option<String>,
}

impl WeatherPanel {
    /// Renders a status; `unit` picks the placeholder symbol.
    pub fn from_status(status: &WeatherStatus, unit: TemperatureUnit) -> Self {
        Self {
            temperature: status.temperature_text(unit),
            conditions: status.condition_text(),
            details: status.reading().map(|r| r.detail_text()),
        }
    }
}

/// One full redraw of the display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub clock: ClockPanel,
    pub calendar: CalendarPanel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherPanel>,
}

/// Display settings and lookup tables shared by every frame.
#[derive(Debug, Clone)]
pub struct Face {
    converter: Converter,
    events: EventTable,
    script: Script,
    hour_format: HourFormat,
}

impl Face {
    pub fn new(converter: Converter, events: EventTable) -> Self {
        Self {
            converter,
            events,
            script: Script::default(),
            hour_format: HourFormat::default(),
        }
    }

    pub fn with_script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    pub fn with_hour_format(mut self, hour_format: HourFormat) -> Self {
        self.hour_format = hour_format;
        self
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Builds the clock readout for `now`.
    pub fn clock(&self, now: &NaiveDateTime) -> ClockPanel {
        let hands = HandAngles::from_time(now);
        let time = format_clock(now, self.hour_format);
        ClockPanel {
            time: self.digits(time),
            hour_angle: hands.hour(),
            minute_angle: hands.minute(),
            second_angle: hands.second(),
        }
    }

    /// Builds the calendar panel for the civil day `date`.
    pub fn calendar(&self, date: NaiveDate) -> CalendarPanel {
        let bangla = self.converter.convert(date);
        let annotation = self.events.annotate(&bangla, date);
        let (annotation_text, annotation_kind) = match &annotation {
            Annotation::Festival(_) => (annotation.to_string(), "festival"),
            Annotation::Observance(_) => (annotation.to_string(), "observance"),
            Annotation::Phase(phase) => match self.script {
                Script::Latin => (annotation.to_string(), "phase"),
                Script::Bengali => (format!("{} {}", phase.glyph(), phase.bengali()), "phase"),
            },
        };
        CalendarPanel {
            gregorian: date.format("%Y-%m-%d").to_string(),
            bangla: bangla.format(self.script),
            year: bangla.year(),
            month_index: bangla.month_index(),
            day: bangla.day(),
            weekday_index: bangla.weekday_index(),
            annotation: annotation_text,
            annotation_kind,
            moon_age: moon_age_on(date).get(),
        }
    }

    /// Assembles a frame from a fresh clock readout and cached panels.
    pub fn frame(
        &self,
        now: &NaiveDateTime,
        calendar: &CalendarPanel,
        weather: Option<&WeatherPanel>,
    ) -> Frame {
        Frame {
            clock: self.clock(now),
            calendar: calendar.clone(),
            weather: weather.cloned(),
        }
    }

    fn digits(&self, text: String) -> String {
        match self.script {
            Script::Latin => text,
            Script::Bengali => to_bengali_digits(&text),
        }
    }
}

/// Destination for rendered frames.
pub trait DisplaySink {
    /// Renders one frame.
    fn show(&mut self, frame: &Frame) -> Result<()>;
}

/// Plain-text renderer, one panel per line.
pub struct TextSink<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: false }
    }

    /// Clears the terminal before each frame.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        let clock = &frame.clock;
        writeln!(
            self.out,
            "{}  (hour {:.1}°, minute {:.1}°, second {:.1}°)",
            clock.time, clock.hour_angle, clock.minute_angle, clock.second_angle
        )?;
        writeln!(self.out, "{}", frame.calendar.bangla)?;
        writeln!(self.out, "{}", frame.calendar.annotation)?;
        if let Some(weather) = &frame.weather {
            match &weather.details {
                Some(details) => writeln!(
                    self.out,
                    "{} {} · {}",
                    weather.temperature, weather.conditions, details
                )?,
                None => writeln!(self.out, "{} {}", weather.temperature, weather.conditions)?,
            }
        }
        self.out.flush().context("failed to flush display")?;
        Ok(())
    }
}

/// JSON renderer, one object per line.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for JsonSink<W> {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame).context("failed to encode frame")?;
        writeln!(self.out)?;
        self.out.flush().context("failed to flush display")?;
        Ok(())
    }
}
