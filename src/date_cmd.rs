//! The `convert` and `moon` subcommands.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, info_span};

use ghori_calendar::{Script, format_number};
use ghori_lunar::moon_age_on;

use crate::cli::DateArgs;
use crate::config::GhoriConfig;
use crate::convert;

fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Print the Bangla date and its annotation.
pub fn run_convert(args: DateArgs, config: &GhoriConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let face = convert::build_face(config, &args.display)?;
    let date = date_or_today(args.date);
    let panel = face.calendar(date);
    debug!(%date, year = panel.year, month = panel.month_index, day = panel.day, "converted");

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", panel.bangla)?;
    writeln!(out, "{}", panel.annotation)?;
    Ok(())
}

/// Print the estimated moon age and phase.
pub fn run_moon(args: DateArgs, config: &GhoriConfig) -> Result<()> {
    let _cmd = info_span!("moon").entered();
    let script = convert::parse_script(
        args.display
            .script
            .as_deref()
            .unwrap_or(&config.calendar.script),
    )?;
    let date = date_or_today(args.date);
    let age = moon_age_on(date);
    let phase = age.phase();
    debug!(%date, age = age.get(), "moon age");

    let mut out = std::io::stdout().lock();
    match script {
        Script::Latin => writeln!(out, "{date}: day {} of 30, {phase}", age.get())?,
        Script::Bengali => writeln!(
            out,
            "{}: {} {}",
            format_number(date, script),
            format_number(age.get(), script),
            phase.bengali()
        )?,
    }
    Ok(())
}
