//! HTTP client for remotely hosted station data.

use serde_json::Value;

use super::error::CatalogError;

/// Configuration for the station data client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a config with the default timeout.
    pub fn new() -> Self {
        Self { timeout_secs: 30 }
    }

    /// Set a custom timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client that downloads raw station JSON.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
}

impl StationClient {
    /// Create a new client.
    pub fn new(config: StationClientConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch the station JSON document at `url`.
    ///
    /// A 404 is reported as a missing source rather than an API error.
    pub async fn fetch(&self, url: &str) -> Result<Value, CatalogError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::MissingSource(url.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StationClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = StationClientConfig::new().with_timeout_secs(5);
        assert_eq!(config.timeout_secs, 5);
    }
}
