//! # brave-search
//!
//! A scraping client for Brave Search's public HTML results page. No API
//! key required: the crate requests the same page a browser would, parses
//! the markup and lazily yields result links (or rich `SearchResult`
//! objects) while paginating on demand.
//!
//! - Pull-driven: a page is fetched only when the stream is polled past
//!   the results already in hand
//! - Pluggable extraction strategy to follow markup changes
//! - Optional URL deduplication within one search
//! - Randomized text-browser User-Agent per request
//!
//! ## Example
//!
//! ```rust,no_run
//! use brave_search::{BraveSearch, SearchOptions};
//! use futures::{pin_mut, StreamExt};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BraveSearch::new();
//!     let options = SearchOptions::new().with_num_results(15);
//!
//!     let results = client.search("brave search api", &options);
//!     pin_mut!(results);
//!
//!     while let Some(result) = results.next().await {
//!         let result = result?;
//!         println!("{}: {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod extract;
mod fetcher;
mod fetcher_http;
mod query;
mod result;
mod search;

pub mod redirect;
pub mod useragent;

pub use error::{Result, SearchError};
pub use extract::{Extractor, Hit, Selectors};
pub use fetcher::{FetcherConfig, PageFetcher};
pub use fetcher_http::HttpFetcher;
pub use query::{PageQuery, SafeSearch, SearchOptions};
pub use result::SearchResult;
pub use search::BraveSearch;
