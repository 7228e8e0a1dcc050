//! SwiftOrder Flow Engine
//!
//! This library contains the decision core of the SwiftOrder order API: given a submitted order,
//! consult the user service for a credit verdict and the inventory service for a stock verdict,
//! and fold the answers into one consolidated [`OrderDecision`]. It is transport-agnostic (no
//! HTTP server types appear here), so the decision logic can be exercised in isolation with fake
//! dependencies.
//!
//! The library is divided into two main sections:
//! 1. The upstream contracts ([`CreditCheck`] and [`StockCheck`]). These traits describe the two
//!    remote verdicts the flow depends on. Production code uses the reqwest-backed
//!    implementations in [`mod@remote`]; tests substitute mocks.
//! 2. The decision core ([`OrderFlowApi`]). It owns the sequencing rule (credit strictly before
//!    inventory, no retries, no parallelism) and the mapping of upstream failures onto
//!    [`OrderFlowError`] kinds. Business declines are ordinary outcomes, not errors.
mod errors;
mod order_flow_api;
mod order_objects;
pub mod remote;
mod traits;

pub use errors::{OrderFlowError, UpstreamError};
pub use order_flow_api::OrderFlowApi;
pub use order_objects::{NewOrder, OrderDecision};
pub use remote::{RemoteInventoryService, RemoteUserService};
pub use traits::{CreditCheck, StockCheck};
