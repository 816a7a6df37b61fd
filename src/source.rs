use anyhow::{bail, Context, Result};
use url::Url;

/// A named endpoint to be checked for reachability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Build a source from an absolute http(s) URL, named after its host.
    pub fn from_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).with_context(|| format!("Invalid URL {}", raw))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Unsupported URL scheme {}", url.scheme());
        }
        let name = match url.host_str() {
            Some(host) => host.to_string(),
            None => bail!("URL {} has no host", raw),
        };
        Ok(Source::new(name, url.as_str()))
    }
}

static DEFAULT_SOURCES: [(&str, &str); 3] = [
    (
        "Reddit",
        "https://www.reddit.com/r/ArtificialIntelligence/top.json?t=day",
    ),
    ("Ben's Bites", "https://www.bensbites.com/archive"),
    ("AI Rundown", "https://www.therundown.ai/archive"),
];

/// The fixed list checked by every run, in report order
pub fn default_sources() -> Vec<Source> {
    DEFAULT_SOURCES
        .iter()
        .map(|(name, url)| Source::new(*name, *url))
        .collect()
}
