use serde::{Deserialize, Serialize};

use crate::errors::OrderFlowError;

/// An order submission as received from a client, before any checks have run.
///
/// Missing body fields deserialize to empty strings, so "field absent" and "field empty" are
/// rejected by the same [`NewOrder::validate`] rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub item_id: String,
}

impl NewOrder {
    pub fn new<U: Into<String>, I: Into<String>>(user_id: U, item_id: I) -> Self {
        Self { user_id: user_id.into(), item_id: item_id.into() }
    }

    /// Both identifiers must be non-empty before any downstream service is involved.
    pub fn validate(&self) -> Result<(), OrderFlowError> {
        if self.user_id.is_empty() || self.item_id.is_empty() {
            return Err(OrderFlowError::MissingFields);
        }
        Ok(())
    }
}

/// The consolidated outcome of a completed orchestration run.
///
/// Every variant that stems from a credit response carries the user-service version tag so that
/// clients can see which deployment answered the check. The tag is the literal `unknown` when the
/// credit response did not include one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDecision {
    /// Credit approved and stock on hand. The order can be fulfilled.
    Confirmed { user_id: String, item_id: String, user_service_version: String },
    /// The user service answered, but did not approve.
    InsufficientCredit { user_service_version: String },
    /// Credit was approved but the inventory service reported the item not available.
    OutOfStock,
}
