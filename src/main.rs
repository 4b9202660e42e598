mod cli;
mod config;
mod convert;
mod date_cmd;
mod frame;
mod logging;
mod today_cmd;
mod watch_cmd;
mod weather_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Today(args) => today_cmd::run(args, &config),
        Command::Convert(args) => date_cmd::run_convert(args, &config),
        Command::Moon(args) => date_cmd::run_moon(args, &config),
        Command::Weather(args) => weather_cmd::run(args, config),
        Command::Watch(args) => watch_cmd::run(args, &config),
    }
}
