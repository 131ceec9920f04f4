//! Randomized User-Agent generation.
//!
//! Brave's HTML endpoint serves clean server-rendered markup to text-mode
//! browsers, so every request identifies itself as a Lynx build with
//! randomized component versions. The version bounds are fixed; only the
//! numbers within them vary per request.

use rand::Rng;

/// Generates a fresh User-Agent string using thread-local randomness.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generates a User-Agent string from the given randomness source.
///
/// Seed the `Rng` for deterministic output in tests.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let lynx = format!(
        "Lynx/{}.{}.{}",
        rng.gen_range(2..=3),
        rng.gen_range(8..=9),
        rng.gen_range(0..=2)
    );
    let libwww = format!("libwww-FM/{}.{}", rng.gen_range(2..=3), rng.gen_range(13..=15));
    let ssl_mm = format!("SSL-MM/{}.{}", rng.gen_range(1..=2), rng.gen_range(3..=5));
    let openssl = format!(
        "OpenSSL/{}.{}.{}",
        rng.gen_range(1..=3),
        rng.gen_range(0..=4),
        rng.gen_range(0..=9)
    );
    format!("{} {} {} {}", lynx, libwww, ssl_mm, openssl)
}
