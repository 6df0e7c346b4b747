//! Page fetching over blocking HTTP.

use anyhow::Result;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// Source of raw HTML for a URL
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// HTTP fetcher backed by a blocking reqwest client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);

        let transport = |reason: String| ScrapeError::Transport {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Err(transport(format!("HTTP {}", status)).into());
        }

        let html = response.text().map_err(|e| transport(e.to_string()))?;
        Ok(html)
    }
}
