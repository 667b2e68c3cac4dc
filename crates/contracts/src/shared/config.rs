use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use super::list_view::DEFAULT_PAGE_SIZE;

/// Settings of the dashboard client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the admin API, without a trailing slash
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    /// Extra attempts for idempotent requests that failed transiently
    pub retry_attempts: u32,
    pub page_size: usize,
    /// How many orders the detail page scans for the requested id
    pub order_detail_batch: usize,
}

/// Default configuration, same values as `Default`
pub const DEFAULT_CONFIG: &str = r#"
[client]
api_base_url = "https://netgene-backend.onrender.com"
request_timeout_ms = 30000
retry_attempts = 1
page_size = 10
order_detail_batch = 100
"#;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    client: ClientConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://netgene-backend.onrender.com".to_string(),
            request_timeout_ms: 30_000,
            retry_attempts: 1,
            page_size: DEFAULT_PAGE_SIZE,
            order_detail_batch: 100,
        }
    }
}

impl ClientConfig {
    /// Parse a `config.toml` document with a `[client]` table
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).context("failed to parse client configuration")?;
        let config = file.client.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL, e.g. from a build-time variable
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.to_string();
        self.normalized()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.api_base_url.starts_with("http://")
                || self.api_base_url.starts_with("https://")
                || self.api_base_url.is_empty(),
            "api_base_url must start with http:// or https:// (got {:?})",
            self.api_base_url
        );
        ensure!(self.page_size > 0, "page_size must be greater than 0");
        ensure!(
            self.request_timeout_ms > 0,
            "request_timeout_ms must be greater than 0"
        );
        Ok(())
    }

    /// Absolute URL for an endpoint path. An empty base means same origin.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = trimmed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            [client]
            api_base_url = "http://localhost:8080/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.retry_attempts, 1);
        assert_eq!(
            config.endpoint("/api/v1/admin/orders"),
            "http://localhost:8080/api/v1/admin/orders"
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            ClientConfig::from_toml_str("").unwrap(),
            ClientConfig::default()
        );
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_values() {
        assert!(ClientConfig::from_toml_str("[client]\ntimeout = 5").is_err());
        assert!(ClientConfig::from_toml_str("[client]\npage_size = 0").is_err());
        assert!(ClientConfig::from_toml_str("[client]\napi_base_url = \"ftp://x\"").is_err());
    }

    #[test]
    fn test_override_base_url() {
        let config = ClientConfig::default().with_api_base_url("https://api.shop.test/");
        assert_eq!(config.api_base_url, "https://api.shop.test");
    }
}
