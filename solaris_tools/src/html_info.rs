use std::{collections::BTreeMap, sync::LazyLock};

use log::*;
use regex::Regex;

// <strong> Label: </strong><span class="...">Value</span>
static INFO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<strong>\s*([^<]+?)\s*:?\s*</strong>\s*<span[^>]*>\s*([^<]*?)\s*</span>")
        .expect("info pattern is a valid regex")
});

/// Scrapes the label/value pairs the storefront renders on product pages but leaves out of the JSON feed.
///
/// Pairs are applied in document order, so a label that appears twice keeps its last value. A page without any
/// matching markup yields an empty map.
pub fn extract_info(html: &[u8]) -> BTreeMap<String, String> {
    let html = String::from_utf8_lossy(html);
    let info = INFO_RE
        .captures_iter(&html)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect::<BTreeMap<String, String>>();
    debug!("Found {} info entries in product page", info.len());
    info
}
