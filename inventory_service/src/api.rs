use std::fmt::Debug;

use log::*;
use swiftorder_common::StockReport;
use thiserror::Error;

use crate::traits::StockStore;

#[derive(Debug, Error)]
pub enum InventoryApiError {
    #[error("No inventory record exists for the requested item")]
    ItemNotFound,
    #[error("The inventory store failed. {0}")]
    StoreError(String),
}

/// `InventoryApi` turns raw stock counts from the store into [`StockReport`]s.
///
/// The availability rule lives in [`StockReport::new`]; this wrapper's job is to keep the
/// missing-item and store-failure outcomes distinct, and to make sure store failures are logged
/// here rather than leaking their detail to callers.
pub struct InventoryApi<S> {
    db: S,
}

impl<S> Debug for InventoryApi<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InventoryApi")
    }
}

impl<S> InventoryApi<S> {
    pub fn new(db: S) -> Self {
        Self { db }
    }
}

impl<S> InventoryApi<S>
where S: StockStore
{
    pub async fn stock_report(&self, item_id: &str) -> Result<StockReport, InventoryApiError> {
        let count = self.db.fetch_stock_count(item_id).await.map_err(|e| {
            error!("🗃️ Could not fetch the stock count for item [{item_id}]. {e}");
            InventoryApiError::StoreError(e.to_string())
        })?;
        match count {
            Some(n) => {
                trace!("🗃️ Item [{item_id}] has {n} units on hand");
                Ok(StockReport::new(item_id, n))
            },
            None => {
                debug!("🗃️ No inventory record for item [{item_id}]");
                Err(InventoryApiError::ItemNotFound)
            },
        }
    }
}
