use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::CheckFailure;

/// Issues one GET per source and reports the outcome as a console line.
pub struct Checker {
    client: Client,
    user_agent: HeaderValue,
}

impl Checker {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .with_context(|| format!("Invalid user agent {:?}", config.user_agent))?;

        Ok(Checker { client, user_agent })
    }

    /// Single attempt, no retries. Only an exact 200 counts as reachable.
    pub fn fetch(&self, url: &str) -> Result<(), CheckFailure> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.clone())
            .send()?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(CheckFailure::Status(status)),
        }
    }

    /// Check one source and write its progress and result lines to `out`.
    ///
    /// Failures of the request itself are reported and turned into `false`;
    /// only a failure to write to `out` is returned as an error.
    #[instrument(skip(self, out))]
    pub fn check<W: Write>(&self, name: &str, url: &str, out: &mut W) -> Result<bool> {
        writeln!(out, "Testing {} ({})...", name, url)?;

        debug!("Sending request");
        let started = Instant::now();
        let result = self.fetch(url);
        let elapsed = started.elapsed();

        match result {
            Ok(()) => {
                debug!(?elapsed, "Source responded with 200");
                writeln!(out, "✅ {} responded successfully.", name)?;
                Ok(true)
            }
            Err(failure) => {
                warn!(?elapsed, timed_out = failure.is_timeout(), "{}", failure);
                writeln!(out, "❌ {} {}", name, failure)?;
                Ok(false)
            }
        }
    }
}
