//! Client for the Solaris Japan storefront.
//!
//! Products are assembled from two sources: the Shopify JSON feed at `products/<handle>.json`, and the rendered
//! product page, which carries a block of label/value details (dimensions, material, ...) that the feed leaves out.
//! The storefront's published currency table can be fetched separately.
mod api;
mod config;
mod currency;
mod error;
mod fetcher;
mod handle;
mod helpers;
mod html_info;
mod product;

pub use api::SolarisApi;
pub use config::{SolarisConfig, DEFAULT_CURRENCY_URL, DEFAULT_PRODUCT_JSON_BASE, DEFAULT_PRODUCT_PAGE_BASE};
pub use currency::{parse_currency_rate, parse_currency_table, CurrencyTable};
pub use error::SolarisApiError;
pub use fetcher::{Fetch, HttpFetcher};
pub use handle::resolve_handle_from_url;
pub use helpers::parse_shopify_price;
pub use html_info::extract_info;
pub use product::{decode_product, JsonScalar, Product, ProductImage, ProductOption, Variant};
