// src/config.rs
//! Client configuration: API key, base URL, protocol version, timeouts.

use crate::error::Error;
use crate::types::{ApiKey, ValidatedUrl};
use std::time::Duration;

/// Default base URL of the public Notion API.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API version this client speaks, sent as the
/// `Notion-Version` header on every request.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved client configuration, validated and ready to build a transport.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub api_key: ApiKey,
    pub base_url: ValidatedUrl,
    pub notion_version: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request deadline covering response read.
    pub read_timeout: Duration,
}

impl NotionConfig {
    /// Configuration with the public API defaults and the given key.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: ValidatedUrl::parse(DEFAULT_BASE_URL)
                .expect("default base URL is statically valid"),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Resolves configuration from the environment.
    ///
    /// Reads the API key from `NOTION_API_KEY`; everything else keeps its
    /// default and can be overridden with the builder methods.
    pub fn from_env() -> Result<Self, Error> {
        // Empty counts as missing: a configuration problem, not a
        // key-format one.
        let api_key_str = std::env::var("NOTION_API_KEY").unwrap_or_default();
        if api_key_str.is_empty() {
            return Err(Error::MissingConfiguration(
                "NOTION_API_KEY environment variable is not set or is empty".to_string(),
            ));
        }
        let api_key = ApiKey::new(api_key_str)?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL (self-hosted proxies, test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        self.base_url = ValidatedUrl::parse(base_url)?;
        Ok(self)
    }

    /// Override the `Notion-Version` protocol string.
    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the whole-request read deadline.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("secret_abcdefghijklmnopqrstuvwxyz").unwrap()
    }

    #[test]
    fn defaults_match_public_api() {
        let config = NotionConfig::new(test_key());
        assert_eq!(config.base_url.as_str(), "https://api.notion.com/v1");
        assert_eq!(config.notion_version, "2022-06-28");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn base_url_override_is_validated() {
        let config = NotionConfig::new(test_key());
        assert!(config
            .clone()
            .with_base_url("https://proxy.example.com/notion/v1")
            .is_ok());
        assert!(config.with_base_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn version_override() {
        let config = NotionConfig::new(test_key()).with_notion_version("2021-08-16");
        assert_eq!(config.notion_version, "2021-08-16");
    }

    #[test]
    fn from_env_requires_the_api_key_variable() {
        // One test walks all three states so the env mutations cannot race.
        std::env::set_var("NOTION_API_KEY", "secret_abcdefghijklmnopqrstuvwxyz");
        assert!(NotionConfig::from_env().is_ok());

        std::env::set_var("NOTION_API_KEY", "");
        match NotionConfig::from_env().unwrap_err() {
            Error::MissingConfiguration(message) => {
                assert!(message.contains("NOTION_API_KEY"));
            }
            other => panic!("expected missing configuration, got {:?}", other),
        }

        std::env::remove_var("NOTION_API_KEY");
        assert!(matches!(
            NotionConfig::from_env(),
            Err(Error::MissingConfiguration(_))
        ));
    }
}
