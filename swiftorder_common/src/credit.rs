use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Version tag reported when the user service response does not carry one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// The verdict returned by the user service for `GET /users/{userId}/credit`.
///
/// The user service sends more fields than these (`userId`, `remainingCredit`, ...); only the ones
/// the order flow acts on are modelled, the rest are ignored on deserialization. `version`
/// identifies the deployment that answered the check. When the field is absent, the literal
/// [`UNKNOWN_VERSION`] is substituted so that there is always a tag to echo back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditDecision {
    pub status: CreditStatus,
    #[serde(default = "unknown_version")]
    pub version: String,
}

fn unknown_version() -> String {
    UNKNOWN_VERSION.to_string()
}

impl CreditDecision {
    pub fn approved<S: Into<String>>(version: S) -> Self {
        Self { status: CreditStatus::Approved, version: version.into() }
    }

    pub fn declined<S: Into<String>>(version: S) -> Self {
        Self { status: CreditStatus::Declined, version: version.into() }
    }

    pub fn is_approved(&self) -> bool {
        self.status == CreditStatus::Approved
    }
}

/// Approval state of a credit check.
///
/// Only the exact wire string `approved` approves an order. `declined` is the regular refusal;
/// any other value the user service might send collapses to `Other`, which declines as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreditStatus {
    Approved,
    Declined,
    Other,
}

impl From<String> for CreditStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "approved" => Self::Approved,
            "declined" => Self::Declined,
            _ => Self::Other,
        }
    }
}

impl From<CreditStatus> for String {
    fn from(status: CreditStatus) -> Self {
        let s = match status {
            CreditStatus::Approved => "approved",
            CreditStatus::Declined => "declined",
            CreditStatus::Other => "other",
        };
        s.to_string()
    }
}

impl Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}
