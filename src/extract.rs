//! Organic result extraction from a fetched results page.
//!
//! Correctness here is coupled to Brave's markup, so the selector set is a
//! plain value that can be swapped without touching the extraction logic.

use scraper::{ElementRef, Html, Selector};

use crate::{Result, SearchError};

/// CSS selectors locating the pieces of an organic hit.
///
/// The defaults match Brave's current markup: each organic hit lives in a
/// `div.snippet` container (ads and news blocks use other classes), the
/// first anchor carries the link and title, and the description sits in
/// `.snippet-content` with a bare paragraph as fallback.
#[derive(Debug, Clone)]
pub struct Selectors {
    /// Container marking one organic hit.
    pub result: String,
    /// Link element inside the container; the first match is used.
    pub link: String,
    /// Description region; the first match is used, absence means empty.
    pub description: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            result: "div.snippet".to_string(),
            link: "a".to_string(),
            description: ".snippet-content, p".to_string(),
        }
    }
}

impl Selectors {
    /// Creates the default Brave selector set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the organic-hit container selector.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    /// Sets the link selector.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Sets the description selector.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One extracted hit, before redirect resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Raw href, possibly wrapped in Brave's redirect endpoint.
    pub href: String,
    /// Visible text of the link element.
    pub title: String,
    /// Descriptive text; empty when the container carries none.
    pub description: String,
}

/// Extracts organic hits from results-page HTML with a compiled strategy.
#[derive(Debug)]
pub struct Extractor {
    result: Selector,
    link: Selector,
    description: Selector,
}

impl Extractor {
    /// Compiles the given selector set.
    pub fn new(selectors: &Selectors) -> Result<Self> {
        Ok(Self {
            result: compile(&selectors.result)?,
            link: compile(&selectors.link)?,
            description: compile(&selectors.description)?,
        })
    }

    /// Returns the hits on one page, in document order.
    ///
    /// A container without a link element is skipped; an empty vec means
    /// the result set is exhausted.
    pub fn extract(&self, html: &str) -> Vec<Hit> {
        let document = Html::parse_document(html);
        let mut hits = Vec::new();

        for element in document.select(&self.result) {
            let Some(anchor) = element.select(&self.link).next() else {
                continue;
            };
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            let description = element
                .select(&self.description)
                .next()
                .map(element_text)
                .unwrap_or_default();

            hits.push(Hit {
                href: href.to_string(),
                title: element_text(anchor),
                description,
            });
        }

        hits
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&Selectors::default()).expect("default selectors are valid")
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))
}

/// Collects an element's text with whitespace collapsed to single spaces.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
