pub const DEFAULT_PRODUCT_JSON_BASE: &str = "https://solarisjapan.com/products";
pub const DEFAULT_PRODUCT_PAGE_BASE: &str = "https://solarisjapan.com/products";
pub const DEFAULT_CURRENCY_URL: &str = "https://cdn.shopify.com/s/javascripts/currencies.js";

/// Endpoints used by [`crate::SolarisApi`]. The transport policy itself (timeouts, TLS) is fixed and lives in
/// [`crate::HttpFetcher`].
#[derive(Debug, Clone)]
pub struct SolarisConfig {
    /// Base for the JSON product feed. `<base>/<handle>.json` is requested.
    pub product_json_base: String,
    /// Base for the rendered product page. `<base>/<handle>` is requested.
    pub product_page_base: String,
    pub currency_url: String,
}

impl Default for SolarisConfig {
    fn default() -> Self {
        Self {
            product_json_base: DEFAULT_PRODUCT_JSON_BASE.to_string(),
            product_page_base: DEFAULT_PRODUCT_PAGE_BASE.to_string(),
            currency_url: DEFAULT_CURRENCY_URL.to_string(),
        }
    }
}

impl SolarisConfig {
    /// Builds a config whose product endpoints both hang off `base`, e.g. a local stub storefront.
    pub fn with_base(base: &str, currency_url: &str) -> Self {
        let base = trim_base(base);
        Self { product_json_base: base.clone(), product_page_base: base, currency_url: currency_url.to_string() }
    }
}

fn trim_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
