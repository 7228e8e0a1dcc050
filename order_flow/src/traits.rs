//! Contracts of the two upstream services the order flow depends on.
//!
//! The engine never talks HTTP itself; it talks to these traits. The production implementations
//! in [`crate::remote`] forward to the real services over reqwest, and the test suites substitute
//! mocks to script verdicts and count calls.

use swiftorder_common::{CreditDecision, StockReport};

use crate::errors::UpstreamError;

/// Access to the user service's credit verdict.
#[allow(async_fn_in_trait)]
pub trait CreditCheck {
    /// Ask the user service whether `user_id` has credit for a purchase.
    ///
    /// An `Err` means no verdict could be obtained; the decision of whether the answer approves
    /// the order is not taken here.
    async fn check_credit(&self, user_id: &str) -> Result<CreditDecision, UpstreamError>;
}

/// Access to the inventory service's stock verdict.
#[allow(async_fn_in_trait)]
pub trait StockCheck {
    /// Ask the inventory service whether `item_id` is on hand, and in what quantity.
    async fn check_stock(&self, item_id: &str) -> Result<StockReport, UpstreamError>;
}
