//! Configuration for shotlog.

use serde::{Deserialize, Serialize};

/// Scraper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site root every page URL is built from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    crate::espn::BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("shotlog/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `shotlog` config file
    /// and the environment
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("shotlog").required(false))
            // SHOTLOG__SCRAPER__TIMEOUT_SECS=10
            .add_source(
                config::Environment::with_prefix("SHOTLOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.scraper.base_url, "http://espn.go.com/nba");
        assert_eq!(config.scraper.timeout_secs, 30);
        assert!(config.scraper.user_agent.starts_with("shotlog/"));
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"scraper": {"timeout_secs": 5}}"#).unwrap();
        assert_eq!(config.scraper.timeout_secs, 5);
        assert_eq!(config.scraper.base_url, "http://espn.go.com/nba");
    }
}
