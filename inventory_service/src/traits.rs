//! The backing-store contract for the inventory service.
//!
//! The server is generic over [`StockStore`] so that endpoint tests can drive the routes with a
//! mock store, and so the storage engine stays swappable behind one seam.

/// Read-only access to per-item stock counts.
#[allow(async_fn_in_trait)]
pub trait StockStore {
    type Error: std::error::Error;

    /// Fetch the stock count for `item_id`. `Ok(None)` means the item does not exist in the
    /// inventory at all, which is a different outcome to `Ok(Some(0))`.
    async fn fetch_stock_count(&self, item_id: &str) -> Result<Option<i64>, Self::Error>;
}
