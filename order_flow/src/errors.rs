use thiserror::Error;

/// Why a call to an upstream service failed.
///
/// Every variant surfaces to the client as "service unavailable"; they stay separate so that the
/// logs can tell a refused connection from a slow upstream or a garbled response.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("the HTTP client could not be initialized. {0}")]
    Initialization(String),
    #[error("could not reach the service: {0}")]
    Unreachable(String),
    #[error("the call did not complete within the configured timeout")]
    Timeout,
    #[error("the service answered with HTTP {0}")]
    ErrorStatus(u16),
    #[error("the response body could not be interpreted: {0}")]
    BadPayload(String),
}

/// Terminal failures of the order flow.
///
/// A business decline (insufficient credit, out of stock) is *not* an error; it is a regular
/// [`OrderDecision`](crate::OrderDecision). Errors here mean the flow could not run to a verdict
/// at all, and they name the failing dependency so the client response can do the same.
#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("Missing userId or itemId")]
    MissingFields,
    #[error("User service unavailable: {0}")]
    UserServiceUnavailable(UpstreamError),
    #[error("Inventory service unavailable: {0}")]
    InventoryServiceUnavailable(UpstreamError),
}
