use std::{error::Error as StdError, io, time::Duration};

use log::*;
use reqwest::Client;

use crate::SolarisApiError;

const TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Retrieves the raw body behind a URL.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SolarisApiError>;
}

/// Plain GET fetcher with a fixed transport policy.
///
/// **Certificate verification is disabled.** The storefront's certificate chain is not validated, so this client must
/// only ever be pointed at public, read-only product data.
///
/// The response status is not inspected: whatever body the server sends is handed back to the caller.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, SolarisApiError> {
        let client = Client::builder()
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .connect_timeout(TLS_HANDSHAKE_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .pool_idle_timeout(IDLE_CONNECTION_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SolarisApiError::Initialization(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SolarisApiError> {
        trace!("GET {url}");
        let mut response =
            self.client.get(url).send().await.map_err(|e| SolarisApiError::TransportError(e.to_string()))?;
        debug!("GET {url} returned {}", response.status());
        let mut body = Vec::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) if is_truncated_body(&e) => {
                    warn!("Body of {url} ended early after {} bytes. Using what was received. {e}", body.len());
                    break;
                },
                Err(e) => return Err(SolarisApiError::TransportError(e.to_string())),
            }
        }
        debug!("Read {} bytes from {url}", body.len());
        Ok(body)
    }
}

/// True when the body stream was cut off before the advertised length was delivered.
fn is_truncated_body(err: &reqwest::Error) -> bool {
    if !err.is_body() && !err.is_decode() {
        return false;
    }
    let mut source = err.source();
    while let Some(e) = source {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                return true;
            }
        }
        let msg = e.to_string();
        if msg.contains("end of file before message length reached") || msg.contains("IncompleteBody") {
            return true;
        }
        source = e.source();
    }
    false
}
