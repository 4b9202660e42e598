use std::io;

use anyhow::Result;
use chrono::Local;
use tracing::{info, info_span};

use crate::cli::TodayArgs;
use crate::config::GhoriConfig;
use crate::convert;
use crate::frame::{DisplaySink, JsonSink, TextSink, WeatherPanel};

/// Render a single frame for the current local time.
pub fn run(args: TodayArgs, config: &GhoriConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let face = convert::build_face(config, &args.display)?;
    info!(
        script = ?face.script(),
        hour_format = %face.hour_format(),
        day_offset = face.converter().day_offset(),
        "face ready"
    );

    let now = Local::now().naive_local();
    let calendar = face.calendar(now.date());

    let weather = if config.weather.enabled && !args.no_weather {
        let service = convert::build_weather_service(&config.weather)?;
        service
            .refresh()
            .map(|status| WeatherPanel::from_status(&status, service.unit()))
    } else {
        None
    };

    let frame = face.frame(&now, &calendar, weather.as_ref());
    let stdout = io::stdout().lock();
    if args.json {
        JsonSink::new(stdout).show(&frame)
    } else {
        TextSink::new(stdout).show(&frame)
    }
}
