use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Ghori clock face with Bangla calendar, moon phase and weather.
#[derive(Parser)]
#[command(
    name = "ghori",
    version,
    about = "Clock face with Bangla calendar date, moon phase and weather"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./ghori.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show one frame of the clock face for right now.
    Today(TodayArgs),
    /// Convert a Gregorian date to the Bangla calendar.
    Convert(DateArgs),
    /// Show the estimated moon age and phase for a date.
    Moon(DateArgs),
    /// Fetch the current weather once.
    Weather(WeatherArgs),
    /// Redraw the clock face continuously.
    Watch(WatchArgs),
}

/// Display overrides shared by several subcommands.
#[derive(clap::Args, Default)]
pub struct DisplayArgs {
    /// Script for names and digits: latin or bengali.
    #[arg(long)]
    pub script: Option<String>,

    /// Hour format for the digital readout: 12h or 24h.
    #[arg(long = "hour-format")]
    pub hour_format: Option<String>,

    /// Calibration offset in days applied to the Bangla date.
    #[arg(long = "day-offset", allow_hyphen_values = true)]
    pub day_offset: Option<i32>,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Print the frame as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip the weather request.
    #[arg(long = "no-weather")]
    pub no_weather: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `convert` and `moon` subcommands.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Gregorian date as YYYY-MM-DD (default: today).
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `weather` subcommand.
#[derive(clap::Args)]
pub struct WeatherArgs {
    /// City from the built-in lookup table.
    #[arg(long, conflicts_with_all = ["latitude", "longitude"])]
    pub city: Option<String>,

    /// Latitude in decimal degrees.
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees.
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Temperature unit: celsius or fahrenheit.
    #[arg(long)]
    pub unit: Option<String>,

    /// List the cities in the lookup table and exit.
    #[arg(long = "list-cities")]
    pub list_cities: bool,
}

/// Arguments for the `watch` subcommand.
#[derive(clap::Args)]
pub struct WatchArgs {
    /// Stop after this many clock ticks.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Skip weather requests.
    #[arg(long = "no-weather")]
    pub no_weather: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}
