use serde::{Deserialize, Serialize};

/// Body of the `201 Created` response for a fulfilled order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmed {
    pub status: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "itemId")]
    pub item_id: String,
    /// Version tag of the user service deployment that approved the credit check.
    pub checked_by_user_service: String,
}

impl OrderConfirmed {
    pub fn new<S1, S2, S3>(user_id: S1, item_id: S2, checked_by_user_service: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            status: "order_confirmed".to_string(),
            user_id: user_id.into(),
            item_id: item_id.into(),
            checked_by_user_service: checked_by_user_service.into(),
        }
    }
}

/// Body of the decline responses. `user_service_version` is only present for credit declines;
/// stock declines omit the field entirely rather than sending null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDeclined {
    pub status: String,
    pub reason: DeclineReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_service_version: Option<String>,
}

impl OrderDeclined {
    pub fn insufficient_credit<S: Into<String>>(user_service_version: S) -> Self {
        Self {
            status: "order_declined".to_string(),
            reason: DeclineReason::InsufficientCredit,
            user_service_version: Some(user_service_version.into()),
        }
    }

    pub fn out_of_stock() -> Self {
        Self {
            status: "order_declined".to_string(),
            reason: DeclineReason::OutOfStock,
            user_service_version: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclineReason {
    InsufficientCredit,
    OutOfStock,
}
