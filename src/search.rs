//! Search orchestration and pagination.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use futures::stream::{self, Stream};
use futures::{StreamExt, TryStreamExt};
use tokio::time::sleep;
use tracing::debug;

use crate::extract::{Extractor, Selectors};
use crate::fetcher::{FetcherConfig, PageFetcher};
use crate::fetcher_http::HttpFetcher;
use crate::redirect::unwrap_redirect;
use crate::{PageQuery, Result, SearchError, SearchOptions, SearchResult};

/// Paging step of Brave's HTML endpoint. Every page is requested with this
/// count, independent of the caller's result target.
const PAGE_SIZE: u32 = 10;

/// Scraping client that paginates through Brave's HTML results.
///
/// One `search` call walks the result set page by page, lazily: nothing is
/// fetched until the returned stream is polled, and polling stops fetching.
pub struct BraveSearch {
    fetcher: Box<dyn PageFetcher>,
    extractor: Extractor,
}

/// Pagination state for one search invocation.
struct PageCursor {
    term: String,
    options: SearchOptions,
    fetched: usize,
    offset: u32,
    seen: HashSet<String>,
    queue: VecDeque<SearchResult>,
    paged: bool,
}

impl BraveSearch {
    /// Creates a client with default connection settings.
    pub fn new() -> Self {
        Self {
            fetcher: Box::new(HttpFetcher::new()),
            extractor: Extractor::default(),
        }
    }

    /// Creates a client from connection settings (timeout, proxy, TLS).
    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Box::new(HttpFetcher::with_config(config)?),
            extractor: Extractor::default(),
        })
    }

    /// Creates a client over a custom fetcher.
    pub fn with_fetcher(fetcher: Box<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            extractor: Extractor::default(),
        }
    }

    /// Replaces the extraction strategy.
    pub fn with_selectors(mut self, selectors: &Selectors) -> Result<Self> {
        self.extractor = Extractor::new(selectors)?;
        Ok(self)
    }

    /// Searches for `term`, yielding rich results lazily.
    ///
    /// Each invocation starts a fresh search. Pages are fetched on demand
    /// as the stream is polled; dropping the stream stops all fetching.
    /// A fetch failure ends the stream after yielding the error; results
    /// already yielded stay valid.
    pub fn search<'a>(
        &'a self,
        term: &str,
        options: &SearchOptions,
    ) -> impl Stream<Item = Result<SearchResult>> + 'a {
        if term.trim().is_empty() {
            return stream::once(async {
                Err::<SearchResult, _>(SearchError::InvalidQuery(
                    "Query cannot be empty".into(),
                ))
            })
            .left_stream();
        }

        let cursor = PageCursor {
            term: term.to_string(),
            options: options.clone(),
            fetched: 0,
            offset: options.start_offset,
            seen: HashSet::new(),
            queue: VecDeque::new(),
            paged: false,
        };

        stream::try_unfold(cursor, move |mut cursor| async move {
            loop {
                if let Some(result) = cursor.queue.pop_front() {
                    return Ok(Some((result, cursor)));
                }

                // Page boundary. The pacing pause sits between pages and
                // also runs once after the final page.
                if cursor.paged {
                    sleep(cursor.options.sleep_interval).await;
                }
                if cursor.fetched >= cursor.options.num_results {
                    return Ok(None);
                }

                let page = PageQuery::new(cursor.term.clone())
                    .with_offset(cursor.offset)
                    .with_count(PAGE_SIZE)
                    .with_lang(cursor.options.lang.clone())
                    .with_safesearch(cursor.options.safesearch);

                let html = self.fetcher.fetch(&page).await?;
                let hits = self.extractor.extract(&html);
                debug!("Offset {} returned {} hits", cursor.offset, hits.len());

                if hits.is_empty() {
                    return Ok(None);
                }

                let raw = Arc::new(html);
                for hit in hits {
                    if cursor.fetched >= cursor.options.num_results {
                        break;
                    }

                    let url = unwrap_redirect(&hit.href);
                    if cursor.options.unique && cursor.seen.contains(&url) {
                        continue;
                    }
                    cursor.seen.insert(url.clone());

                    cursor.queue.push_back(SearchResult::new(
                        url,
                        hit.title,
                        hit.description,
                        Arc::clone(&raw),
                    ));
                    cursor.fetched += 1;
                }

                cursor.offset += PAGE_SIZE;
                cursor.paged = true;
            }
        })
        .right_stream()
    }

    /// Searches for `term`, yielding plain destination URLs lazily.
    pub fn search_urls<'a>(
        &'a self,
        term: &str,
        options: &SearchOptions,
    ) -> impl Stream<Item = Result<String>> + 'a {
        self.search(term, options).map_ok(|result| result.url)
    }
}

impl Default for BraveSearch {
    fn default() -> Self {
        Self::new()
    }
}
