use mockall::mock;

use crate::traits::StockStore;

mock! {
    pub StockDb {}
    impl StockStore for StockDb {
        type Error = sqlx::Error;
        async fn fetch_stock_count(&self, item_id: &str) -> Result<Option<i64>, sqlx::Error>;
    }
}
