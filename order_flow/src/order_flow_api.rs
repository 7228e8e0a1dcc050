use std::fmt::Debug;

use log::*;

use crate::{
    errors::OrderFlowError,
    order_objects::{NewOrder, OrderDecision},
    traits::{CreditCheck, StockCheck},
};

/// `OrderFlowApi` is the primary API for deciding the fate of incoming orders.
///
/// It owns no state beyond handles to the two upstream services, so a single instance can serve
/// any number of concurrent requests and repeating a request against unchanged upstream state
/// yields the same decision.
pub struct OrderFlowApi<C, S> {
    user_service: C,
    inventory: S,
}

impl<C, S> Debug for OrderFlowApi<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<C, S> OrderFlowApi<C, S> {
    pub fn new(user_service: C, inventory: S) -> Self {
        Self { user_service, inventory }
    }
}

impl<C, S> OrderFlowApi<C, S>
where
    C: CreditCheck,
    S: StockCheck,
{
    /// Run the complete decision sequence for `order`.
    ///
    /// The checks are strictly sequential, credit first. A credit refusal is the cheaper verdict
    /// to reach, and short-circuiting on it keeps declined users off the inventory service
    /// entirely: the inventory call only happens for an approved credit check. No step is
    /// retried; the first upstream failure ends the flow with an error naming that service.
    pub async fn process_order(&self, order: &NewOrder) -> Result<OrderDecision, OrderFlowError> {
        order.validate()?;
        let credit = self.user_service.check_credit(&order.user_id).await.map_err(|e| {
            debug!("🔄️📦️ Credit check for user [{}] failed. {e}", order.user_id);
            OrderFlowError::UserServiceUnavailable(e)
        })?;
        let version = credit.version.clone();
        if !credit.is_approved() {
            debug!(
                "🔄️📦️ Order declined. User [{}] has credit status '{}' (checked by {version})",
                order.user_id, credit.status
            );
            return Ok(OrderDecision::InsufficientCredit { user_service_version: version });
        }
        let stock = self.inventory.check_stock(&order.item_id).await.map_err(|e| {
            debug!("🔄️📦️ Stock check for item [{}] failed. {e}", order.item_id);
            OrderFlowError::InventoryServiceUnavailable(e)
        })?;
        if !stock.is_available() {
            debug!("🔄️📦️ Order declined. Item [{}] is out of stock", order.item_id);
            return Ok(OrderDecision::OutOfStock);
        }
        debug!(
            "🔄️📦️ Order confirmed for user [{}], item [{}] ({} on hand)",
            order.user_id, order.item_id, stock.quantity
        );
        Ok(OrderDecision::Confirmed {
            user_id: order.user_id.clone(),
            item_id: order.item_id.clone(),
            user_service_version: version,
        })
    }
}
