use std::io;

use crate::checker::Checker;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::source::default_sources;

mod checker;
mod config;
mod error;
mod runner;
mod source;
mod telemetry;
#[cfg(test)]
mod test_server;

fn main() {
    telemetry::init_telemetry();

    let config = match Config::load(DEFAULT_CONFIG_FILE, true) {
        Ok(conf) => conf,
        Err(err) => exit_err!(1, "Failed to read configuration: {:#}", err),
    };

    let checker = match Checker::new(&config) {
        Ok(checker) => checker,
        Err(err) => exit_err!(1, "{:#}", err),
    };

    let mut out = io::stdout().lock();
    match runner::run(&checker, &default_sources(), &mut out) {
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(err) => exit_err!(1, "Failed to write report: {:#}", err),
    }
}
