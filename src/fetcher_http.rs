//! HTTP-based page fetcher using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Proxy};
use tracing::debug;

use crate::fetcher::{FetcherConfig, PageFetcher};
use crate::{useragent, PageQuery, Result};

/// Brave's public HTML search endpoint.
const SEARCH_ENDPOINT: &str = "https://search.brave.com/search";

/// A page fetcher that issues one GET per results page via reqwest.
///
/// Each request carries a freshly randomized User-Agent. Non-2xx statuses
/// and transport failures surface as `SearchError::Http`; there is no
/// retry.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates an `HttpFetcher` with default settings.
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default()).expect("Failed to create HTTP client")
    }

    /// Creates an `HttpFetcher` from connection settings.
    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .danger_accept_invalid_certs(!config.ssl_verify);

        if let Some(proxy) = config.usable_proxy() {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn page_url(page: &PageQuery) -> String {
        format!(
            "{}?q={}&source=web&offset={}&count={}&lang={}&safesearch={}",
            SEARCH_ENDPOINT,
            urlencoding::encode(&page.term),
            page.offset,
            page.count,
            page.lang.to_lowercase(),
            page.safesearch.as_str()
        )
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, page: &PageQuery) -> Result<String> {
        let url = Self::page_url(page);
        debug!("Fetching results page at offset {}", page.offset);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, useragent::generate())
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SafeSearch;

    #[test]
    fn test_http_fetcher_new() {
        let _fetcher = HttpFetcher::new();
    }

    #[test]
    fn test_http_fetcher_default() {
        let _fetcher = HttpFetcher::default();
    }

    #[test]
    fn test_http_fetcher_with_config() {
        let config = FetcherConfig::new()
            .with_timeout(5)
            .with_proxy("http://127.0.0.1:8080")
            .with_ssl_verify(false);
        let fetcher = HttpFetcher::with_config(config);
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_http_fetcher_ignores_unusable_proxy() {
        let config = FetcherConfig::new().with_proxy("not-a-proxy");
        let fetcher = HttpFetcher::with_config(config);
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_http_fetcher_with_client() {
        let client = Client::builder().build().unwrap();
        let _fetcher = HttpFetcher::with_client(client);
    }

    #[test]
    fn test_page_url_carries_all_parameters() {
        let page = PageQuery::new("rust lang")
            .with_offset(20)
            .with_lang("EN")
            .with_safesearch(SafeSearch::Strict);
        let url = HttpFetcher::page_url(&page);
        assert!(url.starts_with("https://search.brave.com/search?"));
        assert!(url.contains("q=rust%20lang"));
        assert!(url.contains("source=web"));
        assert!(url.contains("offset=20"));
        assert!(url.contains("count=10"));
        assert!(url.contains("lang=en"));
        assert!(url.contains("safesearch=strict"));
    }
}
