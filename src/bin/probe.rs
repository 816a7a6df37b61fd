use std::io;

use clap::Parser;
use clap_serde_derive::ClapSerde;

use crate::checker::Checker;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::source::Source;

#[path = "../checker.rs"]
mod checker;
#[allow(dead_code)]
#[path = "../config.rs"]
mod config;
#[allow(dead_code)]
#[path = "../error.rs"]
mod error;
#[allow(dead_code)]
#[path = "../source.rs"]
mod source;
#[path = "../telemetry.rs"]
mod telemetry;

/// Check a single URL the same way the full run checks each source
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Absolute http(s) URL to request
    url: String,

    /// Path to the configuration file
    #[arg(short, long, env, default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <Config as ClapSerde>::Opt,
}

fn main() {
    telemetry::init_telemetry();

    let args = Args::parse();
    let fallback = args.config_file == DEFAULT_CONFIG_FILE;
    let config = match Config::load(&args.config_file, fallback)
        .and_then(|conf| conf.with_overrides(args.opt_config))
    {
        Ok(conf) => conf,
        Err(err) => exit_err!(1, "Failed to read configuration: {:#}", err),
    };

    let source = match Source::from_url(&args.url) {
        Ok(source) => source,
        Err(err) => exit_err!(1, "{:#}", err),
    };

    let checker = match Checker::new(&config) {
        Ok(checker) => checker,
        Err(err) => exit_err!(1, "{:#}", err),
    };

    match checker.check(&source.name, &source.url, &mut io::stdout().lock()) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(err) => exit_err!(1, "Failed to write report: {:#}", err),
    }
}
