use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolarisApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not reach remote endpoint: {0}")]
    TransportError(String),
    #[error("Could not deserialize JSON: {0}")]
    DecodeError(String),
    #[error("Nothing found: {0}")]
    NotFoundOrEmpty(String),
    #[error("Invalid product handle: {0}")]
    InvalidHandle(String),
    #[error("Invalid currency amount: {0}")]
    InvalidCurrencyAmount(String),
}
