//! Example: Basic search yielding plain result URLs.

use brave_search::{BraveSearch, SearchOptions};
use futures::{pin_mut, StreamExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let client = BraveSearch::new();
    let options = SearchOptions::new().with_num_results(15);

    println!("Searching for: brave search api");
    println!();

    let urls = client.search_urls("brave search api", &options);
    pin_mut!(urls);

    let mut i = 0;
    while let Some(url) = urls.next().await {
        i += 1;
        println!("{}. {}", i, url?);
    }

    Ok(())
}
