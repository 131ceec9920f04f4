//! Redirect unwrapping for Brave's tracking endpoint.
//!
//! Some organic hits point at `https://search.brave.com/redirect?url=...`
//! instead of the destination itself. The unwrapper strips that layer and
//! returns the percent-decoded destination.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

fn redirect_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://search\.brave\.com/redirect").expect("valid redirect pattern")
    })
}

/// Resolves a link that may be wrapped in Brave's redirect endpoint.
///
/// Non-redirect links pass through unchanged, which makes the operation
/// idempotent. A redirect link missing its `url` parameter (or one that
/// fails to parse) is returned as-is rather than dropped.
pub fn unwrap_redirect(link: &str) -> String {
    if !redirect_pattern().is_match(link) {
        return link.to_string();
    }

    let Ok(parsed) = Url::parse(link) else {
        return link.to_string();
    };

    // First non-empty occurrence wins; query_pairs percent-decodes the
    // value. A blank destination counts as absent.
    parsed
        .query_pairs()
        .find(|(key, value)| key == "url" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| link.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_redirect_decodes_destination() {
        let link = "https://search.brave.com/redirect?url=https%3A%2F%2Fexample.com%2Fpath";
        assert_eq!(unwrap_redirect(link), "https://example.com/path");
    }

    #[test]
    fn test_unwrap_redirect_passes_through_plain_url() {
        assert_eq!(unwrap_redirect("https://example.org/"), "https://example.org/");
    }

    #[test]
    fn test_unwrap_redirect_is_idempotent() {
        let link = "https://search.brave.com/redirect?url=https%3A%2F%2Fexample.com%2Fpath";
        let once = unwrap_redirect(link);
        assert_eq!(unwrap_redirect(&once), once);
    }

    #[test]
    fn test_unwrap_redirect_missing_url_param() {
        let link = "https://search.brave.com/redirect?ref=x";
        assert_eq!(unwrap_redirect(link), link);
    }

    #[test]
    fn test_unwrap_redirect_empty_url_param() {
        let link = "https://search.brave.com/redirect?url=&ref=x";
        assert_eq!(unwrap_redirect(link), link);
    }

    #[test]
    fn test_unwrap_redirect_skips_empty_url_for_later_occurrence() {
        let link = "https://search.brave.com/redirect?url=&url=https%3A%2F%2Fexample.com";
        assert_eq!(unwrap_redirect(link), "https://example.com");
    }

    #[test]
    fn test_unwrap_redirect_http_scheme() {
        let link = "http://search.brave.com/redirect?url=https%3A%2F%2Fexample.com";
        assert_eq!(unwrap_redirect(link), "https://example.com");
    }

    #[test]
    fn test_unwrap_redirect_takes_first_url_param() {
        let link =
            "https://search.brave.com/redirect?url=https%3A%2F%2Ffirst.com&url=https%3A%2F%2Fsecond.com";
        assert_eq!(unwrap_redirect(link), "https://first.com");
    }

    #[test]
    fn test_unwrap_redirect_other_host_untouched() {
        let link = "https://example.com/redirect?url=https%3A%2F%2Fexample.org";
        assert_eq!(unwrap_redirect(link), link);
    }

    #[test]
    fn test_unwrap_redirect_relative_link_untouched() {
        assert_eq!(unwrap_redirect("/search?q=rust"), "/search?q=rust");
    }

    #[test]
    fn test_unwrap_redirect_preserves_query_of_destination() {
        let link = "https://search.brave.com/redirect?url=https%3A%2F%2Fexample.com%2F%3Fa%3D1%26b%3D2";
        assert_eq!(unwrap_redirect(link), "https://example.com/?a=1&b=2");
    }
}
