//! Page fetcher abstraction for retrieving results pages.

use async_trait::async_trait;

use crate::{PageQuery, Result};

/// Connection-level settings for a fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Proxy URL. Only `http://` and `https://` schemes are honored;
    /// anything else is treated as no proxy.
    pub proxy: Option<String>,
    /// Whether to verify TLS certificates.
    pub ssl_verify: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            proxy: None,
            ssl_verify: true,
        }
    }
}

impl FetcherConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the proxy URL.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Enables or disables TLS certificate verification.
    pub fn with_ssl_verify(mut self, ssl_verify: bool) -> Self {
        self.ssl_verify = ssl_verify;
        self
    }

    /// Returns the proxy URL if it carries a usable scheme.
    pub fn usable_proxy(&self) -> Option<&str> {
        self.proxy
            .as_deref()
            .filter(|p| p.starts_with("http://") || p.starts_with("https://"))
    }
}

/// Trait for fetching one results page as raw HTML.
///
/// The production implementation is `HttpFetcher`; tests substitute mocks.
/// All connection configuration is set at construction time; `fetch` is a
/// parameters-in, HTML-out interface.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the results page described by `page` and returns its body.
    async fn fetch(&self, page: &PageQuery) -> Result<String>;
}
