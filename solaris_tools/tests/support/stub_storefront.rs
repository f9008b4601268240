use actix_web::{dev::ServerHandle, web, App, HttpResponse, HttpServer};
use log::*;
use solaris_tools::SolarisConfig;

pub const KNOWN_HANDLE: &str = "overlord-ii-narberal-gamma-1-8-so-bin-ver";
pub const NO_INFO_HANDLE: &str = "plain-product";

const PRODUCT_JSON: &str = include_str!("../../src/test_assets/product1.json");
const PRODUCT_PAGE: &str = include_str!("../../src/test_assets/product_page.html");
const CURRENCIES_JS: &str = include_str!("../../src/test_assets/currencies.js");

/// A local stand-in for the storefront, serving the test assets on an ephemeral port.
pub struct StubStorefront {
    pub base: String,
    handle: ServerHandle,
}

impl StubStorefront {
    pub async fn start() -> Self {
        let server = HttpServer::new(|| {
            App::new()
                .route("/products/{tail}", web::get().to(product))
                .route("/currencies.js", web::get().to(currencies))
                .route("/empty.js", web::get().to(|| async { HttpResponse::Ok().body("var Currency = {};") }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Could not bind stub storefront");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        let base = format!("http://{addr}");
        info!("Stub storefront listening on {base}");
        Self { base, handle }
    }

    pub fn config(&self) -> SolarisConfig {
        SolarisConfig::with_base(&format!("{}/products", self.base), &format!("{}/currencies.js", self.base))
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn product(tail: web::Path<String>) -> HttpResponse {
    let tail = tail.into_inner();
    match tail.strip_suffix(".json") {
        Some(KNOWN_HANDLE) => HttpResponse::Ok().content_type("application/json").body(PRODUCT_JSON),
        Some(NO_INFO_HANDLE) => {
            let json = PRODUCT_JSON.replace(KNOWN_HANDLE, NO_INFO_HANDLE);
            HttpResponse::Ok().content_type("application/json").body(json)
        },
        Some(_) => HttpResponse::NotFound().content_type("text/html").body("<html><h1>404 Not Found</h1></html>"),
        None if tail == KNOWN_HANDLE => HttpResponse::Ok().content_type("text/html").body(PRODUCT_PAGE),
        None if tail == NO_INFO_HANDLE => {
            HttpResponse::Ok().content_type("text/html").body("<html><p>Nothing to see here</p></html>")
        },
        None => HttpResponse::NotFound().content_type("text/html").body("<html><h1>404 Not Found</h1></html>"),
    }
}

async fn currencies() -> HttpResponse {
    HttpResponse::Ok().content_type("application/javascript").body(CURRENCIES_JS)
}
