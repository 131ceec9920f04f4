//! Example: Rich results with pacing, deduplication and strict safe search.

use std::time::Duration;

use brave_search::{BraveSearch, SafeSearch, SearchOptions};
use futures::{pin_mut, StreamExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let client = BraveSearch::new();
    let options = SearchOptions::new()
        .with_num_results(20)
        .with_safesearch(SafeSearch::Strict)
        .with_sleep_interval(Duration::from_secs(1))
        .with_unique(true);

    println!("Searching for: rust programming language");
    println!();

    let results = client.search("rust programming language", &options);
    pin_mut!(results);

    let mut i = 0;
    while let Some(result) = results.next().await {
        let result = result?;
        i += 1;
        println!("{}. {}", i, result.title);
        println!("   URL: {}", result.url);
        if !result.description.is_empty() {
            let snippet = if result.description.chars().count() > 100 {
                let head: String = result.description.chars().take(100).collect();
                format!("{}...", head)
            } else {
                result.description.clone()
            };
            println!("   {}", snippet);
        }
        println!();
    }

    Ok(())
}
