mod credit;
mod secret;
mod stock;

pub use credit::{CreditDecision, CreditStatus, UNKNOWN_VERSION};
pub use secret::Secret;
pub use stock::{StockLevel, StockReport};
