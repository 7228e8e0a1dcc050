use mockall::mock;
use order_flow::{CreditCheck, StockCheck, UpstreamError};
use swiftorder_common::{CreditDecision, StockReport};

mock! {
    pub UserService {}
    impl CreditCheck for UserService {
        async fn check_credit(&self, user_id: &str) -> Result<CreditDecision, UpstreamError>;
    }
}

mock! {
    pub InventoryService {}
    impl StockCheck for InventoryService {
        async fn check_stock(&self, item_id: &str) -> Result<StockReport, UpstreamError>;
    }
}
