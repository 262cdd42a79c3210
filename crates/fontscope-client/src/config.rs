//! Client configuration

use std::time::Duration;

use fontscope_core::AnalysisVariant;
use url::Url;

use crate::error::ClientError;

/// Service address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Upload body chunk size (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Connection settings injected into [`crate::HttpAnalysisClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Bytes per upload chunk, also the progress reporting granularity
    pub chunk_size: usize,
}

impl ClientConfig {
    /// Create a config for `base_url`.
    ///
    /// The URL must parse and use `http` or `https`. Trailing slashes are
    /// dropped so endpoint paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ClientError::invalid_url(base_url, e))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::invalid_url(
                base_url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
    }

    /// Set the request timeout. A zero duration means no timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            None
        } else {
            Some(timeout)
        };
        self
    }

    /// Set the upload chunk size (minimum 1 byte)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a variant's endpoint
    pub fn endpoint_url(&self, variant: AnalysisVariant) -> String {
        format!("{}{}", self.base_url, variant.endpoint())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        let config = ClientConfig::new("http://analysis.local:8080/").unwrap();
        assert_eq!(
            config.endpoint_url(AnalysisVariant::Advanced),
            "http://analysis.local:8080/api/fonts/advanced"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = ClientConfig::new("https://example.com/fonts-service").unwrap();
        assert_eq!(
            config.endpoint_url(AnalysisVariant::Detailed),
            "https://example.com/fonts-service/api/upload"
        );
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = ClientConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(config.timeout, None);
        let config = config.with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
