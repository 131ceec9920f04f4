//! Search result types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single organic search hit.
///
/// Immutable after construction. `page` holds the raw HTML of the results
/// page the hit was extracted from, shared across hits from the same page;
/// it exists for diagnostics and is skipped during serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Destination URL, with any Brave redirect layer already unwrapped.
    pub url: String,
    /// Link text of the hit.
    pub title: String,
    /// Descriptive snippet; empty when the page carries none.
    pub description: String,
    /// Raw HTML of the page this hit came from.
    #[serde(skip)]
    pub page: Arc<String>,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        page: Arc<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
            page,
        }
    }
}
