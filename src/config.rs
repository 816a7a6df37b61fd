use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap_serde_derive::ClapSerde;

/// File looked up in the working directory when no other path is given
pub const DEFAULT_CONFIG_FILE: &str = "ConnectivityChecker.toml";

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(ClapSerde, Debug)]
pub struct Config {
    /// Seconds to wait for the connection and response of a single check
    #[default(10)]
    #[arg(short, long, env)]
    pub(crate) timeout_secs: u64,

    /// User-Agent header sent with every request
    #[default(BROWSER_USER_AGENT.to_string())]
    #[arg(short, long, env)]
    pub(crate) user_agent: String,
}

impl Config {
    /// Read `path`, or fall back to defaults when it is absent and
    /// `fallback` is set. A file that exists but does not parse is always
    /// an error.
    pub fn load(path: &str, fallback: bool) -> Result<Self> {
        if !Path::new(path).exists() {
            if fallback {
                return Ok(Config::default());
            }
            bail!("Configuration file {} does not exist", path);
        }
        Self::from_toml(path)
    }

    pub fn from_toml(path: &str) -> Result<Self> {
        let str = std::fs::read_to_string(path)?;
        Self::parse_toml(&str).with_context(|| format!("Invalid configuration in {}", path))
    }

    pub(crate) fn parse_toml(str: &str) -> Result<Self> {
        let opt: <Config as ClapSerde>::Opt = toml::from_str(str)?;
        Config::default().merge(opt).validated()
    }

    /// Apply command line values on top of this configuration.
    pub fn with_overrides(self, opt: <Config as ClapSerde>::Opt) -> Result<Self> {
        self.merge(opt).validated()
    }

    fn validated(self) -> Result<Self> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
