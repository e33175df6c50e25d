#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// Issues the lookup request and returns the raw response body.
///
/// Implementations send `GET <endpoint>?permit=<urlencoded permit>`.
#[allow(async_fn_in_trait)]
pub trait PermitTransport {
    async fn fetch(&self, endpoint: &str, permit: &str) -> Result<String, TransportError>;
}
