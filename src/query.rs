//! Query parameters for a search.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Safe search level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SafeSearch {
    /// No filtering.
    Off,
    /// Moderate filtering.
    #[default]
    Moderate,
    /// Strict filtering.
    Strict,
}

impl SafeSearch {
    /// Parses a level from its wire name, case-insensitively.
    ///
    /// Unrecognized values normalize to `Moderate` rather than failing.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "off" => Self::Off,
            "strict" => Self::Strict,
            _ => Self::Moderate,
        }
    }

    /// Returns the value sent as the `safesearch` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Moderate => "moderate",
            Self::Strict => "strict",
        }
    }
}

/// Parameters for fetching one results page.
///
/// Transient: built by the orchestrator per page, consumed by the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    /// The search terms.
    pub term: String,
    /// Pagination offset (0, 10, 20, ...).
    pub offset: u32,
    /// Results-per-page hint; the HTML endpoint honors 10-20.
    pub count: u32,
    /// Language code, lowercased on the wire.
    pub lang: String,
    /// Safe search level.
    pub safesearch: SafeSearch,
}

impl PageQuery {
    /// Creates page parameters for the given terms with defaults.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            offset: 0,
            count: 10,
            lang: "en".to_string(),
            safesearch: SafeSearch::Moderate,
        }
    }

    /// Sets the pagination offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the results-per-page hint.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the language code.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the safe search level.
    pub fn with_safesearch(mut self, level: SafeSearch) -> Self {
        self.safesearch = level;
        self
    }
}

/// Options for one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// How many results to yield in total.
    pub num_results: usize,
    /// Language code passed to every page fetch.
    pub lang: String,
    /// Safe search level.
    pub safesearch: SafeSearch,
    /// Pause between page fetches.
    pub sleep_interval: Duration,
    /// Pagination offset of the first page.
    pub start_offset: u32,
    /// Skip URLs that were already yielded in this invocation.
    pub unique: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            num_results: 10,
            lang: "en".to_string(),
            safesearch: SafeSearch::Moderate,
            sleep_interval: Duration::ZERO,
            start_offset: 0,
            unique: false,
        }
    }
}

impl SearchOptions {
    /// Creates options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of results to yield.
    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Sets the language code.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the safe search level.
    pub fn with_safesearch(mut self, level: SafeSearch) -> Self {
        self.safesearch = level;
        self
    }

    /// Sets the pause between page fetches.
    pub fn with_sleep_interval(mut self, interval: Duration) -> Self {
        self.sleep_interval = interval;
        self
    }

    /// Sets the pagination offset of the first page.
    pub fn with_start_offset(mut self, offset: u32) -> Self {
        self.start_offset = offset;
        self
    }

    /// Enables or disables URL deduplication.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}
