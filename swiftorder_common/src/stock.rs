use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The body served by the inventory service for `GET /inventory/{itemId}/check`.
///
/// A report only exists for items that are present in the inventory table: "no such item" is a
/// 404 on the wire, never a report. A present item with zero stock is a real report with
/// `out_of_stock` and `quantity: 0`. The two cases must stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReport {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub stock: StockLevel,
    pub quantity: i64,
}

impl StockReport {
    /// Build a report from a raw stock count. This is the inventory service's one business rule:
    /// an item is `available` iff more than zero units are on hand.
    pub fn new<S: Into<String>>(item_id: S, quantity: i64) -> Self {
        let stock = if quantity > 0 { StockLevel::Available } else { StockLevel::OutOfStock };
        Self { item_id: item_id.into(), stock, quantity }
    }

    pub fn is_available(&self) -> bool {
        self.stock == StockLevel::Available
    }
}

/// Availability verdict in a [`StockReport`].
///
/// Orders are only fulfilled for the exact wire string `available`. Anything else an inventory
/// implementation might report maps to `OutOfStock`, which declines the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockLevel {
    Available,
    OutOfStock,
}

impl From<String> for StockLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => Self::Available,
            _ => Self::OutOfStock,
        }
    }
}

impl From<StockLevel> for String {
    fn from(level: StockLevel) -> Self {
        let s = match level {
            StockLevel::Available => "available",
            StockLevel::OutOfStock => "out_of_stock",
        };
        s.to_string()
    }
}

impl Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}
