use std::sync::LazyLock;

use regex::Regex;

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://solarisjapan\.com.*?/products/([^?]*)").expect("handle pattern is a valid regex")
});

/// Extracts the product handle from a storefront URL, dropping any query string.
///
/// The match is purely syntactic. An empty string is returned when the URL does not point into the storefront's
/// `/products/` path.
pub fn resolve_handle_from_url(url: &str) -> String {
    HANDLE_RE.captures(url).and_then(|c| c.get(1)).map(|m| m.as_str().to_string()).unwrap_or_default()
}
