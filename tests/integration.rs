//! Integration tests using real HTTP requests against Brave Search.
//!
//! These tests are marked with `#[ignore]` by default because they require
//! network access and may be slow or flaky.
//!
//! Run with: `cargo test --test integration -- --ignored`

use std::time::Duration;

use futures::{pin_mut, StreamExt, TryStreamExt};

use brave_search::{BraveSearch, SafeSearch, SearchOptions, SearchResult};

/// Helper to run a search and print the first few hits.
async fn run_search(term: &str, options: &SearchOptions) -> Vec<SearchResult> {
    let client = BraveSearch::new();
    let stream = client.search(term, options);
    pin_mut!(stream);

    let mut results = Vec::new();
    while let Some(result) = stream.next().await {
        match result {
            Ok(hit) => results.push(hit),
            Err(e) => {
                println!("Search for '{}' failed: {}", term, e);
                break;
            }
        }
    }

    println!("'{}' returned {} results", term, results.len());
    for (i, result) in results.iter().take(3).enumerate() {
        println!("  {}. {} - {}", i + 1, result.title, result.url);
    }
    results
}

#[tokio::test]
#[ignore]
async fn test_basic_search() {
    let options = SearchOptions::new().with_num_results(10);
    let results = run_search("rust programming", &options).await;
    assert!(!results.is_empty(), "Brave should return results");

    for result in &results {
        assert!(result.url.starts_with("http"), "unexpected URL: {}", result.url);
        assert!(
            !result.url.starts_with("https://search.brave.com/redirect"),
            "redirect should be unwrapped: {}",
            result.url
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_paginated_search() {
    let options = SearchOptions::new()
        .with_num_results(15)
        .with_sleep_interval(Duration::from_millis(500));
    let results = run_search("rust programming", &options).await;
    // More than one page's worth of results means pagination worked.
    assert!(results.len() > 10, "expected results past the first page");
}

#[tokio::test]
#[ignore]
async fn test_unique_search_has_no_duplicate_urls() {
    let options = SearchOptions::new().with_num_results(20).with_unique(true);
    let results = run_search("rust programming", &options).await;

    let mut seen = std::collections::HashSet::new();
    for result in &results {
        assert!(seen.insert(result.url.clone()), "duplicate URL: {}", result.url);
    }
}

#[tokio::test]
#[ignore]
async fn test_plain_url_search() {
    let client = BraveSearch::new();
    let options = SearchOptions::new().with_num_results(5);

    let urls: Vec<String> = client
        .search_urls("rust programming", &options)
        .try_collect()
        .await
        .expect("search should succeed");

    assert!(!urls.is_empty());
    for url in &urls {
        println!("  {}", url);
        assert!(url.starts_with("http"));
    }
}

#[tokio::test]
#[ignore]
async fn test_strict_safesearch() {
    let options = SearchOptions::new()
        .with_num_results(5)
        .with_safesearch(SafeSearch::Strict);
    let results = run_search("rust programming", &options).await;
    assert!(!results.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_non_english_search() {
    let options = SearchOptions::new().with_num_results(5).with_lang("de");
    let results = run_search("Rust Programmiersprache", &options).await;
    // May or may not return results for non-English queries.
    println!("German query returned {} results", results.len());
}
