use log::*;

use crate::{
    config::SolarisConfig,
    currency::parse_currency_table,
    fetcher::{Fetch, HttpFetcher},
    handle::resolve_handle_from_url,
    html_info::extract_info,
    product::decode_product,
    CurrencyTable,
    Product,
    SolarisApiError,
};

/// Client for the storefront's product feed, product pages and currency table.
///
/// Every call is independent. Fetches within a call happen one after the other, and nothing is cached between calls.
#[derive(Clone)]
pub struct SolarisApi<F = HttpFetcher> {
    config: SolarisConfig,
    fetcher: F,
}

impl SolarisApi<HttpFetcher> {
    pub fn new(config: SolarisConfig) -> Result<Self, SolarisApiError> {
        let fetcher = HttpFetcher::new()?;
        Ok(Self { config, fetcher })
    }
}

impl<F: Fetch> SolarisApi<F> {
    pub fn with_fetcher(config: SolarisConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &SolarisConfig {
        &self.config
    }

    pub fn product_json_url(&self, handle: &str) -> String {
        format!("{}/{handle}.json", self.config.product_json_base)
    }

    pub fn product_page_url(&self, handle: &str) -> String {
        format!("{}/{handle}", self.config.product_page_base)
    }

    pub async fn get_product_by_url(&self, url: &str) -> Result<Product, SolarisApiError> {
        let handle = resolve_handle_from_url(url);
        if handle.is_empty() {
            return Err(SolarisApiError::InvalidHandle(format!("{url} is not a storefront product URL")));
        }
        self.get_product_by_handle(&handle).await
    }

    /// Fetches the product feed entry for `handle` and enriches it with the info block from the product page.
    ///
    /// A failure to fetch or decode the JSON feed aborts before the page is requested. If the page loads but carries no
    /// info markup, `Product::info` is left as `None`.
    pub async fn get_product_by_handle(&self, handle: &str) -> Result<Product, SolarisApiError> {
        if handle.is_empty() {
            return Err(SolarisApiError::InvalidHandle("product handle is empty".to_string()));
        }
        debug!("Fetching product '{handle}'");
        let json = self.fetcher.fetch(&self.product_json_url(handle)).await?;
        let mut product = decode_product(&json)?;
        let html = self.fetcher.fetch(&self.product_page_url(handle)).await?;
        let info = extract_info(&html);
        product.info = if info.is_empty() { None } else { Some(info) };
        info!("Fetched product #{} '{}' ({handle})", product.id, product.title);
        Ok(product)
    }

    pub async fn get_currency_table(&self) -> Result<CurrencyTable, SolarisApiError> {
        debug!("Fetching currency table");
        let body = self.fetcher.fetch(&self.config.currency_url).await?;
        let table = parse_currency_table(&String::from_utf8_lossy(&body))?;
        info!("Fetched {} currency rates", table.len());
        Ok(table)
    }
}
