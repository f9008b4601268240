use log::*;
use solaris_tools::{SolarisApi, SolarisApiError, SolarisConfig};

use crate::support::stub_storefront::{StubStorefront, KNOWN_HANDLE, NO_INFO_HANDLE};

mod support;

#[actix_web::test]
async fn product_by_handle_is_enriched_with_page_info() {
    let _ = env_logger::try_init();
    let storefront = StubStorefront::start().await;
    let api = SolarisApi::new(storefront.config()).expect("Could not create client");
    let product = api.get_product_by_handle(KNOWN_HANDLE).await.expect("Product fetch failed");
    info!("Fetched {}", product.title);
    assert_ne!(product.id, 0);
    assert!(!product.title.is_empty());
    assert_eq!(product.handle, KNOWN_HANDLE);
    let info = product.info.expect("Expected scraped info");
    assert_eq!(info.get("Dimensions").map(String::as_str), Some("330.0 mm"));
    assert_eq!(info.get("Material").map(String::as_str), Some("PVC, ABS"));
    storefront.stop().await;
}

#[actix_web::test]
async fn product_by_url_uses_stub_endpoints() {
    let _ = env_logger::try_init();
    let storefront = StubStorefront::start().await;
    let api = SolarisApi::new(storefront.config()).expect("Could not create client");
    let url = format!("https://solarisjapan.com/collections/figures/products/{KNOWN_HANDLE}?variant=1");
    let product = api.get_product_by_url(&url).await.expect("Product fetch failed");
    assert_eq!(product.id, 1_839_287_418_947);
    assert_eq!(product.variants.len(), 2);
    storefront.stop().await;
}

#[actix_web::test]
async fn page_without_info_leaves_info_unset() {
    let _ = env_logger::try_init();
    let storefront = StubStorefront::start().await;
    let api = SolarisApi::new(storefront.config()).expect("Could not create client");
    let product = api.get_product_by_handle(NO_INFO_HANDLE).await.expect("Product fetch failed");
    assert_eq!(product.handle, NO_INFO_HANDLE);
    assert!(product.info.is_none());
    storefront.stop().await;
}

#[actix_web::test]
async fn unknown_product_is_a_decode_error() {
    let _ = env_logger::try_init();
    let storefront = StubStorefront::start().await;
    let api = SolarisApi::new(storefront.config()).expect("Could not create client");
    let err = api.get_product_by_handle("no-such-figure").await.expect_err("Expected an error");
    assert!(matches!(err, SolarisApiError::DecodeError(_)), "was: {err}");
    storefront.stop().await;
}

#[actix_web::test]
async fn repeated_fetches_are_identical() {
    let _ = env_logger::try_init();
    let storefront = StubStorefront::start().await;
    let api = SolarisApi::new(storefront.config()).expect("Could not create client");
    let first = api.get_product_by_handle(KNOWN_HANDLE).await.expect("Product fetch failed");
    let second = api.get_product_by_handle(KNOWN_HANDLE).await.expect("Product fetch failed");
    assert_eq!(first, second);
    let first = serde_json::to_vec(&first).expect("Could not serialize product");
    let second = serde_json::to_vec(&second).expect("Could not serialize product");
    assert_eq!(first, second);
    storefront.stop().await;
}

#[actix_web::test]
async fn currency_table_from_stub() {
    let _ = env_logger::try_init();
    let storefront = StubStorefront::start().await;
    let api = SolarisApi::new(storefront.config()).expect("Could not create client");
    let table = api.get_currency_table().await.expect("Currency fetch failed");
    assert_eq!(table.len(), 9);
    assert_eq!(table.rate("EUR"), Some(1.15998));
    assert_eq!(table.rate("SEK"), Some(0.108357));

    let mut config = storefront.config();
    config.currency_url = format!("{}/empty.js", storefront.base);
    let api = SolarisApi::new(config).expect("Could not create client");
    let err = api.get_currency_table().await.expect_err("Expected an error");
    assert!(matches!(err, SolarisApiError::NotFoundOrEmpty(_)), "was: {err}");
    storefront.stop().await;
}

#[tokio::test]
#[ignore = "requires network access to solarisjapan.com"]
async fn live_product_by_handle() {
    let _ = env_logger::try_init();
    let api = SolarisApi::new(SolarisConfig::default()).expect("Could not create client");
    let product = api.get_product_by_handle(KNOWN_HANDLE).await.expect("Product fetch failed");
    assert_ne!(product.id, 0);
    assert!(!product.title.is_empty());
}

#[tokio::test]
#[ignore = "requires network access to cdn.shopify.com"]
async fn live_currency_table() {
    let _ = env_logger::try_init();
    let api = SolarisApi::new(SolarisConfig::default()).expect("Could not create client");
    let table = api.get_currency_table().await.expect("Currency fetch failed");
    assert!(table.rate("USD").is_some());
}
